//! Read access to the reference tables: rooms, teachers and classes.
//! These rows are written only by the seed step.

use eyre::Result;
use japri_core::models::{Class, Room, Teacher};
use sqlx::{Pool, Postgres};

use crate::models::{DbClass, DbRoom, DbTeacher};

pub async fn list_rooms(pool: &Pool<Postgres>) -> Result<Vec<Room>> {
    let rooms = sqlx::query_as::<_, DbRoom>(
        r#"
        SELECT id, name
        FROM rooms
        ORDER BY id ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rooms.into_iter().map(Room::from).collect())
}

pub async fn list_teachers(pool: &Pool<Postgres>) -> Result<Vec<Teacher>> {
    let teachers = sqlx::query_as::<_, DbTeacher>(
        r#"
        SELECT id, name
        FROM teachers
        ORDER BY id ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(teachers.into_iter().map(Teacher::from).collect())
}

pub async fn list_classes(pool: &Pool<Postgres>) -> Result<Vec<Class>> {
    let classes = sqlx::query_as::<_, DbClass>(
        r#"
        SELECT id, name
        FROM classes
        ORDER BY id ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(classes.into_iter().map(Class::from).collect())
}

/// Inserts `names` into `table` unless the table already has rows.
/// Returns how many rows were written.
pub(crate) async fn seed_names(pool: &Pool<Postgres>, table: SeedTable, names: &[&str]) -> Result<usize> {
    let count_sql = format!("SELECT COUNT(*) FROM {}", table.as_str());
    let count = sqlx::query_scalar::<_, i64>(&count_sql).fetch_one(pool).await?;
    if count > 0 {
        tracing::debug!("{} already has {} rows, skipping seed", table.as_str(), count);
        return Ok(0);
    }

    let insert_sql = format!("INSERT INTO {} (name) VALUES ($1)", table.as_str());
    let mut tx = pool.begin().await?;
    for name in names {
        sqlx::query(&insert_sql).bind(*name).execute(&mut *tx).await?;
    }
    tx.commit().await?;

    Ok(names.len())
}

/// The reference tables that can be seeded. Table names never come from input.
#[derive(Debug, Clone, Copy)]
pub(crate) enum SeedTable {
    Rooms,
    Teachers,
    Classes,
}

impl SeedTable {
    fn as_str(self) -> &'static str {
        match self {
            SeedTable::Rooms => "rooms",
            SeedTable::Teachers => "teachers",
            SeedTable::Classes => "classes",
        }
    }
}
