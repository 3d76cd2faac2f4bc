use bson::doc;
use db_utils::{
    mongodb::{IntoIndexes, MongoCollection, MongoDbAPI},
    schemas::{
        AuthToken, Food, MealRecord, SmsVerification, User, AUTH_TOKEN_COLLECTION_NAME,
        FOOD_COLLECTION_NAME, MEAL_RECORD_COLLECTION_NAME, SMS_VERIFICATION_COLLECTION_NAME,
        USER_COLLECTION_NAME,
    },
};
use mongodb::{Client, Database};
use serde::{Deserialize, Serialize};
use std::{fmt, fmt::Debug, io::Write};

use crate::{
    config::InitConfig,
    errors::InitError,
    report::{Banner, Reporter},
    seed,
};

/// Outcome of a completed run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InitSummary {
    pub database: String,
    /// Collections in the order they were prepared, with the number of indices applied
    pub collections: Vec<(String, usize)>,
    pub seeded: usize,
}

impl fmt::Display for InitSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "database {}:", self.database)?;
        for (name, index_count) in &self.collections {
            write!(f, " {name} ({index_count} indices)")?;
        }
        write!(f, "; {} seed documents", self.seeded)
    }
}

/// Creates the NutriGuide collections and indices, then seeds development data.
pub struct SchemaInitializer<W: Write> {
    client: Client,
    config: InitConfig,
    reporter: Reporter<W>,
}

impl<W: Write> SchemaInitializer<W> {
    pub fn new(client: Client, config: InitConfig, out: W) -> Self {
        Self {
            client,
            config,
            reporter: Reporter::new(out),
        }
    }

    /// Runs every bootstrap step in order. The first failure aborts the run.
    pub async fn run(&mut self) -> Result<InitSummary, InitError> {
        self.reporter.report(Banner::Start)?;
        self.reporter
            .report(Banner::Environment(&self.config.environment))?;
        self.reporter
            .report(Banner::Database(&self.config.database_name))?;

        let database = self.select_database().await?;
        let mut summary = InitSummary {
            database: database.name().to_string(),
            ..Default::default()
        };

        self.reporter.report(Banner::UserCollections)?;
        prepare::<User>(&database, USER_COLLECTION_NAME, &mut summary).await?;
        prepare::<AuthToken>(&database, AUTH_TOKEN_COLLECTION_NAME, &mut summary).await?;
        prepare::<SmsVerification>(&database, SMS_VERIFICATION_COLLECTION_NAME, &mut summary)
            .await?;

        self.reporter.report(Banner::FoodCollections)?;
        let foods = prepare::<Food>(&database, FOOD_COLLECTION_NAME, &mut summary).await?;
        prepare::<MealRecord>(&database, MEAL_RECORD_COLLECTION_NAME, &mut summary).await?;

        summary.seeded = self
            .seed_if_development(&foods, seed::sample_foods())
            .await?;

        self.reporter.report(Banner::Complete)?;
        Ok(summary)
    }

    /// Binds the run to the configured database.
    ///
    /// The client connects lazily, so a `ping` is issued to surface an unavailable
    /// server here rather than at the first collection.
    pub async fn select_database(&self) -> Result<Database, InitError> {
        let database = self.client.database(&self.config.database_name);
        database.run_command(doc! { "ping": 1 }).await?;
        log::info!("Selected database {}", database.name());
        Ok(database)
    }

    /// Inserts `documents` into the foods collection when running in development.
    ///
    /// # Returns
    ///
    /// The number of inserted documents, 0 outside development
    pub async fn seed_if_development(
        &mut self,
        foods: &MongoCollection<Food>,
        documents: Vec<Food>,
    ) -> Result<usize, InitError> {
        if !self.config.is_development() {
            log::info!(
                "Skipping sample data for environment {}",
                self.config.environment
            );
            return Ok(0);
        }

        self.reporter.report(Banner::Seeding)?;
        let inserted = foods.insert_many_into(documents).await?;
        self.reporter.report(Banner::Seeded(inserted))?;
        Ok(inserted)
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.reporter.into_inner()
    }
}

/// Creates one collection with its indices and records it in the summary.
async fn prepare<T>(
    database: &Database,
    collection_name: &str,
    summary: &mut InitSummary,
) -> Result<MongoCollection<T>, InitError>
where
    T: Serialize + for<'de> Deserialize<'de> + Unpin + Send + Sync + Default + Debug + IntoIndexes,
{
    let collection = MongoCollection::<T>::new(database, collection_name).await?;
    summary
        .collections
        .push((collection_name.to_string(), collection.indices().len()));
    Ok(collection)
}
