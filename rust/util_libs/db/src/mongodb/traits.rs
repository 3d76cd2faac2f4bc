use anyhow::Result;
use bson::Document;
use mongodb::options::IndexOptions;

/// Declares the secondary indices of a collection's document type.
///
/// `MongoCollection::apply_indexing` creates every declaration in order. Leaving the
/// options (or their `name`) unset lets the server derive the index name from the keys.
pub trait IntoIndexes {
    /// Returns `(key specification, options)` pairs, e.g. `({ "email": 1 }, unique)`.
    fn into_indices(self) -> Result<Vec<(Document, Option<IndexOptions>)>>;
}
