use axum::http::StatusCode;
use fake::{faker::name::en::Name, Fake};
use japri_api::{
    handlers::schedule::{creation_response, deletion_response, prepare_schedule, select_listings},
    middleware::error_handling::AppError,
};
use japri_core::{
    errors::ScheduleError,
    models::{
        schedule::{CreateScheduleRequest, ListSchedulesQuery, LooseNumber, NewSchedule},
        Day, Period, ScheduleEntry,
    },
    projection::ListOrder,
    teacher_directory::TeacherDirectory,
};
use japri_db::repositories::schedule::InsertOutcome;
use mockall::predicate;
use pretty_assertions::assert_eq;
use tokio_test::assert_ok;

use crate::test_utils::{entry, listing, TestContext};

fn request(day: &str, start: i64, end: i64) -> CreateScheduleRequest {
    CreateScheduleRequest {
        room_id: Some(LooseNumber::Number(1)),
        teacher_id: None,
        teacher_name: Some("Idiarso S.Kom".to_string()),
        class_id: Some(LooseNumber::Text("5".to_string())),
        day: Some(day.to_string()),
        start_period: Some(LooseNumber::Number(start)),
        end_period: Some(LooseNumber::Text(end.to_string())),
    }
}

fn stored(new: &NewSchedule, id: i64) -> ScheduleEntry {
    ScheduleEntry {
        id,
        room_id: new.room_id,
        teacher_id: new.teacher_id,
        class_id: new.class_id,
        day: new.day,
        start_period: new.start_period,
        end_period: new.end_period,
    }
}

async fn prepare_with(ctx: &TestContext, request: &CreateScheduleRequest) -> Result<NewSchedule, ScheduleError> {
    let rooms = ctx.reference_repo.list_rooms().await.unwrap();
    let classes = ctx.reference_repo.list_classes().await.unwrap();
    let teachers = TeacherDirectory::new(ctx.reference_repo.list_teachers().await.unwrap());
    prepare_schedule(request, &teachers, &rooms, &classes)
}

#[tokio::test]
async fn test_create_schedule_inserts_validated_entry() {
    let mut ctx = TestContext::with_reference_data();

    let new = assert_ok!(prepare_with(&ctx, &request("Selasa", 3, 4)).await);
    assert_eq!(
        new,
        NewSchedule {
            room_id: 1,
            teacher_id: Some(3),
            class_id: 5,
            day: Day::Selasa,
            start_period: Period::new(3).unwrap(),
            end_period: Period::new(4).unwrap(),
        }
    );

    ctx.schedule_repo
        .expect_insert_without_overlap()
        .with(predicate::eq(new.clone()))
        .times(1)
        .returning(|new| Ok(InsertOutcome::Inserted(stored(&new, 42))));

    let outcome = ctx.schedule_repo.insert_without_overlap(new).await.unwrap();
    let response = assert_ok!(creation_response(outcome));

    assert_eq!(response.id, 42);
    assert_eq!(response.message, "Jadwal berhasil ditambahkan");
}

#[tokio::test]
async fn test_create_schedule_reports_conflict() {
    let mut ctx = TestContext::with_reference_data();
    let new = assert_ok!(prepare_with(&ctx, &request("Senin", 2, 5)).await);

    ctx.schedule_repo
        .expect_insert_without_overlap()
        .times(1)
        .returning(|_| Ok(InsertOutcome::Conflict(entry(7, 1, Some(1), Day::Senin, 4, 6))));

    let outcome = ctx.schedule_repo.insert_without_overlap(new).await.unwrap();
    let error = creation_response(outcome).unwrap_err();

    assert!(matches!(error, ScheduleError::Conflict(_)));
    assert!(error.to_string().contains("(schedule 7)"), "{}", error);
    assert_eq!(AppError(error).status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_unknown_teacher_name_becomes_guest() {
    let ctx = TestContext::with_reference_data();
    let mut req = request("Kamis", 1, 1);
    req.teacher_name = Some(Name().fake::<String>() + " (tamu)");

    let new = assert_ok!(prepare_with(&ctx, &req).await);
    assert_eq!(new.teacher_id, None);
}

#[tokio::test]
async fn test_unknown_room_is_rejected() {
    let ctx = TestContext::with_reference_data();
    let mut req = request("Senin", 1, 2);
    req.room_id = Some(LooseNumber::Number(99));

    let error = prepare_with(&ctx, &req).await.unwrap_err();
    assert_eq!(error.to_string(), "Validation error: Unknown room 99");
}

#[tokio::test]
async fn test_unknown_class_is_rejected() {
    let ctx = TestContext::with_reference_data();
    let mut req = request("Senin", 1, 2);
    req.class_id = Some(LooseNumber::Number(3));

    let error = prepare_with(&ctx, &req).await.unwrap_err();
    assert_eq!(error.to_string(), "Validation error: Unknown class 3");
}

#[tokio::test]
async fn test_weekend_and_reversed_ranges_are_rejected() {
    let ctx = TestContext::with_reference_data();

    let weekend = prepare_with(&ctx, &request("Minggu", 1, 2)).await.unwrap_err();
    assert!(matches!(weekend, ScheduleError::Validation(_)));

    let reversed = prepare_with(&ctx, &request("Senin", 6, 3)).await.unwrap_err();
    assert_eq!(
        reversed.to_string(),
        "Validation error: start_period 6 is after end_period 3"
    );
}

#[tokio::test]
async fn test_delete_reports_missing_schedule() {
    let mut ctx = TestContext::new();
    ctx.schedule_repo
        .expect_delete_schedule()
        .with(predicate::eq(9))
        .times(1)
        .returning(|_| Ok(false));

    let deleted = ctx.schedule_repo.delete_schedule(9).await.unwrap();
    let error = deletion_response(deleted, 9).unwrap_err();

    assert_eq!(error.to_string(), "Resource not found: Schedule with ID 9 not found");
    assert_eq!(AppError(error).status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_confirms_removed_schedule() {
    let mut ctx = TestContext::new();
    ctx.schedule_repo
        .expect_delete_schedule()
        .with(predicate::eq(4))
        .times(1)
        .returning(|_| Ok(true));

    let deleted = ctx.schedule_repo.delete_schedule(4).await.unwrap();
    let response = assert_ok!(deletion_response(deleted, 4));

    assert_eq!(response.id, 4);
    assert_eq!(response.message, "Jadwal dihapus");
}

#[tokio::test]
async fn test_select_listings_filters_and_orders() {
    let mut ctx = TestContext::new();
    let first: String = Name().fake();
    let second: String = Name().fake();

    let rows = vec![
        listing(entry(4, 1, Some(2), Day::Jumat, 1, 2), "Lab Sija 1".to_string(), first.clone()),
        listing(entry(3, 2, Some(2), Day::Senin, 5, 6), "Lab Sija 2".to_string(), first.clone()),
        listing(entry(2, 1, Some(3), Day::Senin, 3, 4), "Lab Sija 1".to_string(), second.clone()),
        listing(entry(1, 1, None, Day::Senin, 1, 1), "Lab Sija 1".to_string(), "Tamu/Manual".to_string()),
    ];
    ctx.schedule_repo
        .expect_list_schedule_listings()
        .times(1)
        .returning(move || Ok(rows.clone()));

    let listings = ctx.schedule_repo.list_schedule_listings().await.unwrap();

    let weekly_room_one = select_listings(
        listings.clone(),
        &ListSchedulesQuery {
            room_id: Some(1),
            teacher_id: None,
            order: ListOrder::Weekly,
        },
    );
    let ids: Vec<i64> = weekly_room_one.iter().map(|l| l.entry.id).collect();
    assert_eq!(ids, vec![1, 2, 4]);

    let by_teacher = select_listings(
        listings,
        &ListSchedulesQuery {
            room_id: None,
            teacher_id: Some(2),
            ..Default::default()
        },
    );
    let ids: Vec<i64> = by_teacher.iter().map(|l| l.entry.id).collect();
    assert_eq!(ids, vec![4, 3]);
    assert!(by_teacher.iter().all(|l| l.teacher_name == first));
}
