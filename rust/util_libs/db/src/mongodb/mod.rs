/// MongoDB interface module providing the collection and index plumbing used to
/// bootstrap the NutriGuide database.
///
/// # Examples
///
/// ```rust,no_run
/// use anyhow::Result;
/// use mongodb::Client;
/// use db_utils::mongodb::MongoCollection;
/// use db_utils::schemas::{User, DATABASE_NAME, USER_COLLECTION_NAME};
///
/// async fn example() -> Result<()> {
///     let client = Client::with_uri_str("mongodb://localhost:27017").await?;
///     let database = client.database(DATABASE_NAME);
///
///     // Creates the collection if needed and applies the indices declared by `User`
///     let users = MongoCollection::<User>::new(&database, USER_COLLECTION_NAME).await?;
///     assert!(!users.indices().is_empty());
///
///     Ok(())
/// }
/// ```
pub mod api;
pub mod collection;
pub mod traits;

pub use api::MongoDbAPI;
pub use collection::MongoCollection;
pub use traits::IntoIndexes;

/// Connection string used when `MONGO_URI` is not provided.
pub const DEFAULT_MONGODB_URL: &str = "mongodb://127.0.0.1:27017";
