use anyhow::Result;
use bson::{doc, oid::ObjectId, DateTime, Document};
use mongodb::options::IndexOptions;
use serde::{Deserialize, Serialize};

use crate::mongodb::traits::IntoIndexes;

/// Collection name for meal record documents
pub const MEAL_RECORD_COLLECTION_NAME: &str = "mealrecords";

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct MealRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub _id: Option<ObjectId>,
    pub user_id: Option<ObjectId>,
    pub date: Option<DateTime>,
    pub meal_type: String,
}

impl IntoIndexes for MealRecord {
    /// Defines MongoDB indices for the mealrecords collection
    ///
    /// Creates indices for:
    /// - userId
    /// - date
    /// - mealType
    /// - userId + date (compound)
    fn into_indices(self) -> Result<Vec<(Document, Option<IndexOptions>)>> {
        Ok(vec![
            (doc! { "userId": 1 }, None),
            (doc! { "date": 1 }, None),
            (doc! { "mealType": 1 }, None),
            (doc! { "userId": 1, "date": 1 }, None),
        ])
    }
}
