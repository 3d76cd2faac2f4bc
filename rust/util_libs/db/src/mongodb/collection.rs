use bson::Document;
use mongodb::{options::IndexOptions, Collection, Database, IndexModel};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use super::traits::IntoIndexes;
use crate::error::{command_code, DbError, NAMESPACE_EXISTS_CODE};

/// Wrapper type for MongoDB collections providing additional functionality.
///
/// This struct wraps a MongoDB collection and provides methods for creating the
/// collection and managing the indices declared by its schema type.
///
/// # Type Parameters
///
/// * `T` - The type representing documents in the collection. Must implement
///         necessary traits for serialization, deserialization, and indexing.
#[derive(Debug, Clone)]
pub struct MongoCollection<T>
where
    T: Serialize + for<'de> Deserialize<'de> + Unpin + Send + Sync + Default + IntoIndexes,
{
    /// The underlying MongoDB collection
    pub inner: Collection<T>,
    /// Collection indices
    indices: Vec<IndexModel>,
}

impl<T> MongoCollection<T>
where
    T: Serialize + for<'de> Deserialize<'de> + Unpin + Send + Sync + Default + Debug + IntoIndexes,
{
    /// Creates the collection (if absent) and applies the indices defined by `T`.
    ///
    /// # Arguments
    ///
    /// * `database` - Handle of the selected database
    /// * `collection_name` - Name of the collection
    ///
    /// # Returns
    ///
    /// A new `MongoCollection` instance with indices applied, wrapped in a Result
    ///
    // NB: `mongodb::Database` handles share the client's connection pool.
    pub async fn new(database: &Database, collection_name: &str) -> Result<Self, DbError> {
        log::debug!(
            "Creating new MongoDB collection: {}.{}",
            database.name(),
            collection_name
        );
        Self::ensure_collection(database, collection_name).await?;

        let mut mongo_collection = MongoCollection {
            inner: database.collection::<T>(collection_name),
            indices: vec![],
        };

        mongo_collection.apply_indexing().await.map_err(|e| {
            log::error!(
                "Failed to apply indices to collection {}.{}: {}",
                database.name(),
                collection_name,
                e
            );
            e
        })?;

        log::info!(
            "Successfully prepared MongoDB collection {}.{}",
            database.name(),
            collection_name
        );
        Ok(mongo_collection)
    }

    /// Requests creation of a collection.
    ///
    /// An "already exists" answer from the server is treated as success.
    ///
    /// # Returns
    ///
    /// `true` when the collection was created by this call, `false` when it already existed
    pub async fn ensure_collection(
        database: &Database,
        collection_name: &str,
    ) -> Result<bool, DbError> {
        match database.create_collection(collection_name).await {
            Ok(()) => Ok(true),
            Err(e) if command_code(&e) == Some(NAMESPACE_EXISTS_CODE) => {
                log::info!(
                    "Collection {}.{} already exists",
                    database.name(),
                    collection_name
                );
                Ok(false)
            }
            Err(e) => Err(Self::handle_db_error(
                collection_name,
                "create_collection",
                e,
            )),
        }
    }

    /// Applies the defined indices to the MongoDB collection.
    ///
    /// This method creates the indices defined by the collection's type `T`
    /// through its implementation of `IntoIndexes`, one `createIndexes` command each.
    ///
    /// # Returns
    ///
    /// A reference to self for method chaining
    pub async fn apply_indexing(&mut self) -> Result<&mut Self, DbError> {
        log::debug!("Applying indices to collection {}", self.name());
        let schema_indices = T::default().into_indices().map_err(|e| {
            log::error!("Failed to get indices from schema: {}", e);
            DbError::schema(e.to_string(), self.name())
        })?;

        let mut indices = Vec::with_capacity(schema_indices.len());
        for (indexed_field, opts) in schema_indices.into_iter() {
            let index = self.ensure_index(indexed_field, opts).await?;
            indices.push(index);
        }

        if indices.is_empty() {
            log::info!("No indices to apply for collection {}", self.name());
        } else {
            log::info!(
                "Successfully applied {} indices to collection {}",
                indices.len(),
                self.name()
            );
        }
        self.indices = indices;

        Ok(self)
    }

    /// Creates a single index with the given key specification and options.
    ///
    /// Re-creating an identical index is a no-op on the server. An index with the same
    /// name but a different definition is reported as an error.
    pub async fn ensure_index(
        &self,
        keys: Document,
        options: Option<IndexOptions>,
    ) -> Result<IndexModel, DbError> {
        let options = Some(options.unwrap_or_default());
        log::debug!("Adding index: {:?} with options: {:?}", keys, options);

        let index = IndexModel::builder().keys(keys).options(options).build();
        let result = self
            .inner
            .create_index(index.clone())
            .await
            .map_err(|e| Self::handle_db_error(self.name(), "create_index", e))?;

        log::debug!(
            "Index {} ready on collection {}",
            result.index_name,
            self.name()
        );
        Ok(index)
    }

    /// Name of the wrapped collection
    pub fn name(&self) -> &str {
        self.inner.name()
    }

    /// Indices applied by the last call to `apply_indexing`
    pub fn indices(&self) -> &[IndexModel] {
        &self.indices
    }

    /// Helper method to handle MongoDB errors consistently
    pub fn handle_db_error(
        collection: &str,
        operation: &str,
        error: mongodb::error::Error,
    ) -> DbError {
        log::error!(
            "MongoDB {} operation failed on {}: {}",
            operation,
            collection,
            error
        );
        DbError::database(error, collection, operation)
    }
}
