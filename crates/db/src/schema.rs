use eyre::{Result, WrapErr};
use sqlx::{Pool, Postgres};
use tracing::info;

/// Postgres SQLSTATE for `exclusion_violation`.
pub const EXCLUSION_VIOLATION: &str = "23P01";

const INDEXES: [&str; 3] = [
    "CREATE INDEX IF NOT EXISTS idx_professionals_specialty_id ON professionals(specialty_id);",
    "CREATE INDEX IF NOT EXISTS idx_booked_slots_professional_start ON booked_slots(professional_id, start_at);",
    "CREATE INDEX IF NOT EXISTS idx_booked_slots_end_at ON booked_slots(end_at);",
];

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Needed for the `professional_id WITH =` part of the exclusion constraint
    sqlx::query("CREATE EXTENSION IF NOT EXISTS btree_gist;")
        .execute(pool)
        .await
        .wrap_err("Failed to enable btree_gist")?;

    // Create specialties table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS specialties (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name VARCHAR(255) NOT NULL UNIQUE,
            duration_minutes BIGINT NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT positive_duration CHECK (duration_minutes > 0)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create professionals table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS professionals (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name VARCHAR(255) NOT NULL,
            specialty_id UUID NULL REFERENCES specialties(id),
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create booked_slots table. The exclusion constraint rejects raw overlaps
    // per professional; the buffer is enforced by the locked re-check in book_slot.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS booked_slots (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            professional_id UUID NOT NULL REFERENCES professionals(id),
            specialty_id UUID NULL REFERENCES specialties(id),
            start_at TIMESTAMP WITH TIME ZONE NOT NULL,
            end_at TIMESTAMP WITH TIME ZONE NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT valid_time_range CHECK (end_at > start_at),
            CONSTRAINT no_overlapping_bookings EXCLUDE USING gist (
                professional_id WITH =,
                tstzrange(start_at, end_at, '[)') WITH &&
            )
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes
    for statement in INDEXES {
        sqlx::query(statement).execute(pool).await?;
    }

    info!("Database schema initialized successfully.");
    Ok(())
}
