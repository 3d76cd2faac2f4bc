use db_utils::error::DbError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InitError {
    #[error("Database connection failed: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error(transparent)]
    Collection(#[from] DbError),

    #[error("Failed to write progress report: {0}")]
    Report(#[from] std::io::Error),
}
