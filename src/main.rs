use std::sync::Arc;

use carebook_api::config::ApiConfig;
use carebook_db::{create_pool, schema::initialize_database, store::PgSlotStore};
use color_eyre::eyre::Result;
use dotenv::dotenv;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ApiConfig::from_env()?;

    // Create database connection pool
    let db_pool = create_pool(&config.database_url, config.database_max_connections).await?;

    // Initialize database schema
    initialize_database(&db_pool).await?;

    // Start API server
    let store = Arc::new(PgSlotStore::new(db_pool));
    carebook_api::start_server(config, store).await?;

    Ok(())
}
