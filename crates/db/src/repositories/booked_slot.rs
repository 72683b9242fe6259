use crate::models::{BookingOutcome, DbBookedSlot};
use crate::schema::EXCLUSION_VIOLATION;
use carebook_core::{
    TimeInterval, Timespan, conflicting, scheduling::availability::lookup_range,
};
use chrono::{DateTime, Utc};
use eyre::{Result, WrapErr};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

/// Booked slots of one professional that intersect `[from, to)`, ordered by start.
pub async fn get_booked_slots_in_range(
    pool: &Pool<Postgres>,
    professional_id: Uuid,
    from: DateTime<Utc>,
    to: DateTime<Utc>,
) -> Result<Vec<DbBookedSlot>> {
    let slots = sqlx::query_as::<_, DbBookedSlot>(
        r#"
        SELECT id, professional_id, specialty_id, start_at, end_at, created_at
        FROM booked_slots
        WHERE professional_id = $1 AND start_at < $3 AND end_at > $2
        ORDER BY start_at ASC
        "#,
    )
    .bind(professional_id)
    .bind(from)
    .bind(to)
    .fetch_all(pool)
    .await?;

    Ok(slots)
}

/// Insert a booking if it still fits once the buffer is applied.
///
/// Runs in one transaction: the professional's row is locked so concurrent
/// bookings for the same professional serialize, the neighbourhood is re-read
/// and re-checked, then the row is inserted. The `no_overlapping_bookings`
/// exclusion constraint backs this up for raw overlaps, including when the
/// buffer is zero and the re-check is skipped.
pub async fn book_slot(
    pool: &Pool<Postgres>,
    professional_id: Uuid,
    specialty_id: Option<Uuid>,
    interval: TimeInterval,
    buffer_minutes: i64,
) -> Result<BookingOutcome> {
    let mut tx = pool.begin().await.wrap_err("Failed to open booking transaction")?;

    let locked = sqlx::query_scalar::<_, Uuid>(
        r#"
        SELECT id FROM professionals WHERE id = $1 FOR UPDATE
        "#,
    )
    .bind(professional_id)
    .fetch_optional(&mut *tx)
    .await?;

    if locked.is_none() {
        tx.rollback().await?;
        return Ok(BookingOutcome::ProfessionalNotFound);
    }

    let (from, to) = lookup_range(interval.start_at(), interval.end_at(), buffer_minutes);
    let neighbours = sqlx::query_as::<_, DbBookedSlot>(
        r#"
        SELECT id, professional_id, specialty_id, start_at, end_at, created_at
        FROM booked_slots
        WHERE professional_id = $1 AND start_at < $3 AND end_at > $2
        ORDER BY start_at ASC
        "#,
    )
    .bind(professional_id)
    .bind(from)
    .bind(to)
    .fetch_all(&mut *tx)
    .await?;

    let clashes: Vec<DbBookedSlot> = conflicting(&interval, &neighbours, buffer_minutes)
        .into_iter()
        .cloned()
        .collect();
    if !clashes.is_empty() {
        tracing::debug!(
            "Booking rejected under lock: professional_id={}, clashes={}",
            professional_id,
            clashes.len()
        );
        tx.rollback().await?;
        return Ok(BookingOutcome::Conflict(clashes));
    }

    let inserted = sqlx::query_as::<_, DbBookedSlot>(
        r#"
        INSERT INTO booked_slots (id, professional_id, specialty_id, start_at, end_at, created_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, professional_id, specialty_id, start_at, end_at, created_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(professional_id)
    .bind(specialty_id)
    .bind(interval.start_at())
    .bind(interval.end_at())
    .bind(Utc::now())
    .fetch_one(&mut *tx)
    .await;

    match inserted {
        Ok(slot) => {
            tx.commit().await.wrap_err("Failed to commit booking")?;
            tracing::debug!("Booked slot: id={}, professional_id={}", slot.id, professional_id);
            Ok(BookingOutcome::Booked(slot))
        }
        Err(sqlx::Error::Database(db_err))
            if db_err.code().as_deref() == Some(EXCLUSION_VIOLATION) =>
        {
            tracing::debug!(
                "Booking rejected by exclusion constraint: professional_id={}",
                professional_id
            );
            Ok(BookingOutcome::Conflict(Vec::new()))
        }
        Err(e) => Err(e.into()),
    }
}
