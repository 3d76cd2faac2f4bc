use async_trait::async_trait;
use bson::Document;
use futures::stream::TryStreamExt;
use mongodb::IndexModel;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use super::{collection::MongoCollection, traits::IntoIndexes};
use crate::error::DbError;

/// Core trait defining the MongoDB operations needed to bootstrap and inspect a collection.
///
/// # Type Parameters
///
/// * `T` - The type representing documents in the collection. Must be serializable,
///         deserializable, and thread-safe.
#[async_trait]
pub trait MongoDbAPI<T>
where
    T: Serialize + for<'de> Deserialize<'de> + Unpin + Send + Sync,
{
    /// The error type returned by operations in this trait.
    type Error;

    /// Retrieves multiple documents matching the filter criteria from collection.
    ///
    /// # Arguments
    ///
    /// * `filter` - Query filter as a BSON document
    ///
    /// # Returns
    ///
    /// A vector of documents of type `T`
    async fn get_many_from(&self, filter: Document) -> Result<Vec<T>, Self::Error>;

    /// Inserts the given documents into the collection in a single bulk write.
    ///
    /// # Returns
    ///
    /// The number of inserted documents
    async fn insert_many_into(&self, items: Vec<T>) -> Result<usize, Self::Error>;

    /// Counts the documents matching the filter criteria.
    async fn count_in(&self, filter: Document) -> Result<u64, Self::Error>;

    /// Lists the indices currently defined on the collection, including `_id_`.
    async fn list_index_models(&self) -> Result<Vec<IndexModel>, Self::Error>;
}

#[async_trait]
impl<T> MongoDbAPI<T> for MongoCollection<T>
where
    T: Serialize + for<'de> Deserialize<'de> + Unpin + Send + Sync + Default + Debug + IntoIndexes,
{
    type Error = DbError;

    async fn get_many_from(&self, filter: Document) -> Result<Vec<T>, Self::Error> {
        log::debug!("Getting multiple documents with filter: {:?}", filter);
        let cursor = self
            .inner
            .find(filter)
            .await
            .map_err(|e| Self::handle_db_error(self.name(), "get_many_from", e))?;

        let results: Vec<T> = cursor
            .try_collect()
            .await
            .map_err(|e| Self::handle_db_error(self.name(), "get_many_from collect", e))?;

        log::debug!("Found {} documents", results.len());
        Ok(results)
    }

    async fn insert_many_into(&self, items: Vec<T>) -> Result<usize, Self::Error> {
        if items.is_empty() {
            log::debug!("Nothing to insert into {}", self.name());
            return Ok(0);
        }

        log::debug!("Inserting {} documents into {}", items.len(), self.name());
        let result = self
            .inner
            .insert_many(items)
            .await
            .map_err(|e| Self::handle_db_error(self.name(), "insert_many_into", e))?;

        let inserted = result.inserted_ids.len();
        log::info!(
            "Successfully inserted {} documents into {}",
            inserted,
            self.name()
        );
        Ok(inserted)
    }

    async fn count_in(&self, filter: Document) -> Result<u64, Self::Error> {
        self.inner
            .count_documents(filter)
            .await
            .map_err(|e| Self::handle_db_error(self.name(), "count_in", e))
    }

    async fn list_index_models(&self) -> Result<Vec<IndexModel>, Self::Error> {
        let cursor = self
            .inner
            .list_indexes()
            .await
            .map_err(|e| Self::handle_db_error(self.name(), "list_indexes", e))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| Self::handle_db_error(self.name(), "list_indexes collect", e))
    }
}
