use crate::models::DbProfessional;
use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_professional(
    pool: &Pool<Postgres>,
    name: &str,
    specialty_id: Option<Uuid>,
) -> Result<DbProfessional> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!(
        "Creating professional: id={}, name={}, specialty_id={:?}",
        id, name, specialty_id
    );

    let professional = sqlx::query_as::<_, DbProfessional>(
        r#"
        INSERT INTO professionals (id, name, specialty_id, created_at)
        VALUES ($1, $2, $3, $4)
        RETURNING id, name, specialty_id, created_at
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(specialty_id)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(professional)
}

pub async fn get_professional_by_id(
    pool: &Pool<Postgres>,
    id: Uuid,
) -> Result<Option<DbProfessional>> {
    tracing::debug!("Getting professional by id: {}", id);

    let professional = sqlx::query_as::<_, DbProfessional>(
        r#"
        SELECT id, name, specialty_id, created_at
        FROM professionals
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(professional)
}
