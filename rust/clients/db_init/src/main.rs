mod config;
mod errors;
mod initializer;
mod report;
mod seed;
#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::Parser;
use db_utils::{mongodb::DEFAULT_MONGODB_URL, schemas::DATABASE_NAME};
use dotenv::dotenv;
use mongodb::{options::ClientOptions, Client as MongoDBClient};

use config::{InitConfig, DEVELOPMENT_ENVIRONMENT};
use initializer::SchemaInitializer;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "nutriguide-db-init",
    about = "Creates the NutriGuide collections and indexes, seeding sample data in development",
    long_about = None
)]
pub struct Args {
    /// Database to initialize
    #[arg(long, env = "MONGO_INITDB_DATABASE", default_value = DATABASE_NAME)]
    pub database: String,

    /// Execution environment; sample data is only inserted in "development"
    #[arg(long, env = "NODE_ENV", default_value = DEVELOPMENT_ENVIRONMENT)]
    pub environment: String,

    #[arg(long, env = "MONGO_URI", default_value = DEFAULT_MONGODB_URL)]
    pub mongo_uri: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = InitConfig::from_args(Args::parse());
    log::debug!("Resolved configuration: {:?}", config);

    // Setup MongoDB Client
    let db_client_options = ClientOptions::parse(&config.mongo_uri).await?;
    let db_client = MongoDBClient::with_options(db_client_options)?;

    let mut initializer = SchemaInitializer::new(db_client, config, std::io::stdout());
    let summary = initializer.run().await.map_err(|e| {
        log::error!("Database initialization failed. Err={:?}", e);
        e
    })?;

    log::info!("Initialized {}", summary);
    Ok(())
}
