use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create rooms table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS rooms (
            id BIGSERIAL PRIMARY KEY,
            name VARCHAR(255) NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create teachers table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS teachers (
            id BIGSERIAL PRIMARY KEY,
            name VARCHAR(255) NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create classes table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS classes (
            id BIGSERIAL PRIMARY KEY,
            name VARCHAR(255) NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create schedules table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS schedules (
            id BIGSERIAL PRIMARY KEY,
            room_id BIGINT NOT NULL REFERENCES rooms(id),
            teacher_id BIGINT NULL REFERENCES teachers(id) ON DELETE SET NULL,
            class_id BIGINT NOT NULL REFERENCES classes(id),
            day VARCHAR(16) NOT NULL,
            start_period SMALLINT NOT NULL,
            end_period SMALLINT NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT valid_day CHECK (day IN ('Senin', 'Selasa', 'Rabu', 'Kamis', 'Jumat', 'Sabtu', 'Minggu')),
            CONSTRAINT valid_period_range CHECK (start_period BETWEEN 1 AND 12 AND end_period BETWEEN 1 AND 12),
            CONSTRAINT ordered_periods CHECK (start_period <= end_period)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes
    for statement in [
        "CREATE INDEX IF NOT EXISTS idx_schedules_room_day ON schedules(room_id, day)",
        "CREATE INDEX IF NOT EXISTS idx_schedules_teacher_id ON schedules(teacher_id)",
    ] {
        sqlx::query(statement).execute(pool).await?;
    }

    info!("Database schema initialized successfully.");
    Ok(())
}
