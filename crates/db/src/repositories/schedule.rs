use std::time::Duration;

use eyre::{Result, WrapErr};
use japri_core::{
    conflict::find_conflict,
    models::{schedule::NewSchedule, Day, ScheduleEntry, ScheduleListing},
};
use sqlx::{PgConnection, Pool, Postgres};

use crate::models::{DbSchedule, DbScheduleListing};

const LISTING_QUERY: &str = r#"
    SELECT s.id, s.room_id, s.teacher_id, s.class_id, s.day,
           s.start_period, s.end_period, s.created_at,
           r.name AS room_name,
           COALESCE(t.name, $1) AS teacher_name,
           c.name AS class_name
    FROM schedules s
    JOIN rooms r ON s.room_id = r.id
    LEFT JOIN teachers t ON s.teacher_id = t.id
    JOIN classes c ON s.class_id = c.id
    ORDER BY s.id DESC
"#;

/// Result of [`insert_without_overlap`].
#[derive(Debug, Clone)]
pub enum InsertOutcome {
    Inserted(ScheduleEntry),
    /// Nothing was written; the candidate collides with this stored entry.
    Conflict(ScheduleEntry),
}

fn into_entries(rows: Vec<DbSchedule>) -> Vec<ScheduleEntry> {
    rows.into_iter()
        .filter_map(|row| {
            let id = row.id;
            ScheduleEntry::try_from(row)
                .inspect_err(|e| tracing::warn!("Skipping malformed schedule row {}: {}", id, e))
                .ok()
        })
        .collect()
}

/// All schedules joined with display names, newest first. Rows that do not
/// convert to typed entries are logged and skipped.
pub async fn list_schedule_listings(pool: &Pool<Postgres>) -> Result<Vec<ScheduleListing>> {
    let rows = sqlx::query_as::<_, DbScheduleListing>(LISTING_QUERY)
        .bind(japri_core::models::schedule::GUEST_TEACHER_NAME)
        .fetch_all(pool)
        .await?;

    tracing::debug!("Loaded {} schedule rows", rows.len());

    let listings = rows
        .into_iter()
        .filter_map(|row| {
            let id = row.schedule.id;
            ScheduleListing::try_from(row)
                .inspect_err(|e| tracing::warn!("Skipping malformed schedule row {}: {}", id, e))
                .ok()
        })
        .collect();

    Ok(listings)
}

async fn schedules_for_room_day(conn: &mut PgConnection, room_id: i64, day: Day) -> Result<Vec<ScheduleEntry>> {
    let rows = sqlx::query_as::<_, DbSchedule>(
        r#"
        SELECT id, room_id, teacher_id, class_id, day, start_period, end_period, created_at
        FROM schedules
        WHERE room_id = $1 AND day = $2
        "#,
    )
    .bind(room_id)
    .bind(day.as_str())
    .fetch_all(conn)
    .await?;

    Ok(into_entries(rows))
}

/// Advisory lock key for one (room, day) pair.
pub fn room_day_lock_key(room_id: i64, day: Day) -> i64 {
    room_id.wrapping_mul(8).wrapping_add(i64::from(day.ordinal()))
}

/// Checks `new` against the stored entries for its room and day and inserts
/// it if nothing overlaps.
///
/// The read and the write happen in one transaction that holds a
/// transaction-scoped advisory lock for the (room, day) pair, so two
/// concurrent requests for the same pair cannot both pass the check. Waiting
/// for that lock is bounded by `lock_timeout`; on timeout the transaction is
/// rolled back and an error is returned.
pub async fn insert_without_overlap(
    pool: &Pool<Postgres>,
    new: &NewSchedule,
    lock_timeout: Duration,
) -> Result<InsertOutcome> {
    let mut tx = pool.begin().await?;

    sqlx::query("SELECT set_config('lock_timeout', $1, true)")
        .bind(format!("{}ms", lock_timeout.as_millis()))
        .execute(&mut *tx)
        .await?;

    let key = room_day_lock_key(new.room_id, new.day);
    sqlx::query("SELECT pg_advisory_xact_lock($1)")
        .bind(key)
        .execute(&mut *tx)
        .await
        .wrap_err_with(|| format!("Timed out waiting for room {} on {}", new.room_id, new.day))?;

    let existing = schedules_for_room_day(&mut tx, new.room_id, new.day).await?;
    if let Some(clash) = find_conflict(&existing, &new.candidate()) {
        tracing::debug!(
            "Rejecting schedule for room {} on {} periods {}-{}: overlaps schedule {}",
            new.room_id, new.day, new.start_period, new.end_period, clash.id
        );
        let clash = clash.clone();
        tx.rollback().await?;
        return Ok(InsertOutcome::Conflict(clash));
    }

    let row = sqlx::query_as::<_, DbSchedule>(
        r#"
        INSERT INTO schedules (room_id, teacher_id, class_id, day, start_period, end_period)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, room_id, teacher_id, class_id, day, start_period, end_period, created_at
        "#,
    )
    .bind(new.room_id)
    .bind(new.teacher_id)
    .bind(new.class_id)
    .bind(new.day.as_str())
    .bind(i16::from(new.start_period))
    .bind(i16::from(new.end_period))
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;

    let entry = ScheduleEntry::try_from(row)?;
    tracing::debug!("Schedule created successfully: id={}", entry.id);
    Ok(InsertOutcome::Inserted(entry))
}

/// Deletes one schedule. Returns `false` when no row had that id.
pub async fn delete_schedule(pool: &Pool<Postgres>, id: i64) -> Result<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM schedules
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn count_schedules(pool: &Pool<Postgres>) -> Result<i64> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM schedules")
        .fetch_one(pool)
        .await?;

    Ok(count)
}
