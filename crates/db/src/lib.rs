//! # CareBook Storage
//!
//! PostgreSQL storage for specialties, professionals and booked slots.
//!
//! Repositories are plain async functions over a [`DbPool`]. The API layer
//! talks to them through the [`store::SlotStore`] trait so handlers can be
//! tested against [`mock::repositories::MockSlotStore`].

pub mod models;
pub mod repositories;
pub mod schema;
pub mod store;

pub mod mock;

use eyre::{Result, WrapErr};
use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};

pub type DbPool = Pool<Postgres>;

pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
        .wrap_err("Failed to connect to the database")?;

    Ok(pool)
}
