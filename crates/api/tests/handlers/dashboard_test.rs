use chrono::{TimeZone, Utc};
use japri_api::handlers::dashboard::{resolve_query, ClockQuery};
use japri_core::{
    clock::ResolvedClock,
    errors::ScheduleError,
    models::{Day, Period},
};
use pretty_assertions::assert_eq;
use rstest::rstest;

// 2024-05-06 is a Monday.
fn monday_morning() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 6, 8, 0, 0).unwrap()
}

#[test]
fn test_empty_query_uses_now() {
    let clock = resolve_query(&ClockQuery::default(), &monday_morning()).unwrap();
    assert_eq!(
        clock,
        ResolvedClock {
            day: Day::Senin,
            is_break: false,
            period: Some(Period::new(2).unwrap()),
        }
    );
}

#[rstest]
#[case(Some("Jumat"), None, Day::Jumat, false, Some(2))]
#[case(None, Some("10:14"), Day::Senin, true, None)]
#[case(None, Some("06:59"), Day::Senin, false, None)]
#[case(Some("Sabtu"), Some("09:00"), Day::Sabtu, false, Some(3))]
fn test_query_overrides(
    #[case] day: Option<&str>,
    #[case] at: Option<&str>,
    #[case] expected_day: Day,
    #[case] expected_break: bool,
    #[case] expected_period: Option<u8>,
) {
    let query = ClockQuery {
        day: day.map(str::to_string),
        at: at.map(str::to_string),
    };

    let clock = resolve_query(&query, &monday_morning()).unwrap();
    assert_eq!(clock.day, expected_day);
    assert_eq!(clock.is_break, expected_break);
    assert_eq!(clock.period.map(u8::from), expected_period);
}

#[test]
fn test_bad_overrides_are_validation_errors() {
    let bad_day = ClockQuery { day: Some("Someday".to_string()), at: None };
    assert!(matches!(
        resolve_query(&bad_day, &monday_morning()),
        Err(ScheduleError::Validation(_))
    ));

    let bad_time = ClockQuery { day: None, at: Some("25:99".to_string()) };
    assert!(matches!(
        resolve_query(&bad_time, &monday_morning()),
        Err(ScheduleError::Validation(_))
    ));
}
