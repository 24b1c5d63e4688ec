//! Reference data for a fresh database, plus an optional batch of random
//! demo schedules so an empty dashboard has something to show.

use std::time::Duration;

use eyre::Result;
use japri_core::models::{schedule::NewSchedule, Class, Day, Period, Room, Teacher};
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use sqlx::{Pool, Postgres};
use tracing::info;

use crate::repositories::{
    reference::{self, seed_names, SeedTable},
    schedule::{self, InsertOutcome},
};

pub const ROOMS: [&str; 5] = [
    "RPS Konsorsium Coding",
    "RPS Konsorsium Jaringan",
    "RPS Konsorsium IoT",
    "Lab Sija 1",
    "Lab Sija 2",
];

pub const TEACHERS: [&str; 10] = [
    "Sri Herawan Kusuma S.Kom",
    "Gunawan Wibisono S.Kom",
    "Idiarso S.Kom",
    "Hermanto S.Pd",
    "Syaefudin Aji Negara S.Pd GR",
    "Kuntoro Triatmoko S.Kom",
    "Sidik Nurcahyo S.Pd",
    "Kiat Uji Purwani S.Kom",
    "Endah Yuliani S.Pd",
    "Eko Santoso S.Pd",
];

pub const CLASSES: [&str; 9] = [
    "10 PPLG 1",
    "10 PPLG 2",
    "10 PPLG 3",
    "11 SIJA 1",
    "11 SIJA 2",
    "11 SIJA 3",
    "12 SIJA 1",
    "12 SIJA 2",
    "12 SIJA 3",
];

/// How many demo entries are pinned to today so the live view looks busy.
const PINNED_TO_TODAY: usize = 8;

/// Seeds rooms, teachers and classes into tables that are still empty.
pub async fn seed_reference_data(pool: &Pool<Postgres>) -> Result<()> {
    let rooms = seed_names(pool, SeedTable::Rooms, &ROOMS).await?;
    let teachers = seed_names(pool, SeedTable::Teachers, &TEACHERS).await?;
    let classes = seed_names(pool, SeedTable::Classes, &CLASSES).await?;

    if rooms + teachers + classes > 0 {
        info!(
            "Seeded reference data: {} rooms, {} teachers, {} classes",
            rooms, teachers, classes
        );
    }
    Ok(())
}

/// Builds `count` random bookings. The first few land on `today` (or on
/// `Senin` when today is a weekend), the rest on any school day.
/// Candidates may overlap each other; the insert step filters those out.
pub fn demo_schedules<R: Rng>(
    rng: &mut R,
    rooms: &[Room],
    teachers: &[Teacher],
    classes: &[Class],
    count: usize,
    today: Day,
) -> Vec<NewSchedule> {
    let pinned_day = if today.is_school_day() { today } else { Day::Senin };

    (0..count)
        .filter_map(|i| {
            let room = rooms.choose(rng)?;
            let class = classes.choose(rng)?;
            let teacher = teachers.choose(rng).map(|teacher| teacher.id);

            let start: u8 = rng.gen_range(1..=8);
            let end = (start + rng.gen_range(1..=3)).min(Period::LAST.get());
            let day = if i < PINNED_TO_TODAY {
                pinned_day
            } else {
                *Day::SCHOOL_DAYS.choose(rng)?
            };

            Some(NewSchedule {
                room_id: room.id,
                teacher_id: teacher,
                class_id: class.id,
                day,
                start_period: Period::new(start).ok()?,
                end_period: Period::new(end).ok()?,
            })
        })
        .collect()
}

/// Fills an empty `schedules` table with random demo bookings. Candidates
/// that would overlap an earlier one are skipped. Returns how many rows were
/// written.
pub async fn seed_demo_schedules(
    pool: &Pool<Postgres>,
    count: usize,
    today: Day,
    lock_timeout: Duration,
) -> Result<usize> {
    if schedule::count_schedules(pool).await? > 0 {
        tracing::debug!("schedules already populated, skipping demo data");
        return Ok(0);
    }

    let rooms = reference::list_rooms(pool).await?;
    let teachers = reference::list_teachers(pool).await?;
    let classes = reference::list_classes(pool).await?;

    let candidates = {
        let mut rng = StdRng::from_entropy();
        demo_schedules(&mut rng, &rooms, &teachers, &classes, count, today)
    };

    let mut inserted = 0;
    for candidate in &candidates {
        match schedule::insert_without_overlap(pool, candidate, lock_timeout).await? {
            InsertOutcome::Inserted(_) => inserted += 1,
            InsertOutcome::Conflict(clash) => {
                tracing::debug!("Demo schedule overlaps schedule {}, skipped", clash.id)
            }
        }
    }

    info!(
        "Generated {} demo schedules ({} skipped as overlapping)",
        inserted,
        candidates.len() - inserted
    );
    Ok(inserted)
}
