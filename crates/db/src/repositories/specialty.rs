use crate::models::DbSpecialty;
use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_specialty(
    pool: &Pool<Postgres>,
    name: &str,
    duration_minutes: i64,
) -> Result<DbSpecialty> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!(
        "Creating specialty: id={}, name={}, duration_minutes={}",
        id, name, duration_minutes
    );

    let specialty = sqlx::query_as::<_, DbSpecialty>(
        r#"
        INSERT INTO specialties (id, name, duration_minutes, created_at)
        VALUES ($1, $2, $3, $4)
        RETURNING id, name, duration_minutes, created_at
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(duration_minutes)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(specialty)
}

pub async fn get_specialty_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbSpecialty>> {
    let specialty = sqlx::query_as::<_, DbSpecialty>(
        r#"
        SELECT id, name, duration_minutes, created_at
        FROM specialties
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(specialty)
}

pub async fn list_specialties(pool: &Pool<Postgres>) -> Result<Vec<DbSpecialty>> {
    let specialties = sqlx::query_as::<_, DbSpecialty>(
        r#"
        SELECT id, name, duration_minutes, created_at
        FROM specialties
        ORDER BY name ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(specialties)
}
