use crate::Args;

use db_utils::{mongodb::DEFAULT_MONGODB_URL, schemas::DATABASE_NAME};

/// The only environment in which sample data is inserted
pub const DEVELOPMENT_ENVIRONMENT: &str = "development";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitConfig {
    pub database_name: String,
    pub environment: String,
    pub mongo_uri: String,
}

impl InitConfig {
    /// Builds the configuration, replacing blank values with their defaults.
    pub fn from_args(args: Args) -> Self {
        Self {
            database_name: or_default(args.database, DATABASE_NAME),
            environment: or_default(args.environment, DEVELOPMENT_ENVIRONMENT),
            mongo_uri: or_default(args.mongo_uri, DEFAULT_MONGODB_URL),
        }
    }

    pub fn is_development(&self) -> bool {
        self.environment == DEVELOPMENT_ENVIRONMENT
    }
}

fn or_default(value: String, default: &str) -> String {
    if value.trim().is_empty() {
        default.to_string()
    } else {
        value
    }
}
