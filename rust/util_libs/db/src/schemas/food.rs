use anyhow::Result;
use bson::{doc, oid::ObjectId, DateTime, Document};
use mongodb::options::IndexOptions;
use serde::{Deserialize, Serialize};

use crate::mongodb::traits::IntoIndexes;

/// Collection name for food documents
pub const FOOD_COLLECTION_NAME: &str = "foods";

/// Food document schema
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Food {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub _id: Option<ObjectId>,
    pub name: String,
    /// Packaged products only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,
    pub brand: String,
    pub category: String,
    pub nutrition: Nutrition,
    pub serving_size: String,
    pub tags: Vec<String>,
    pub is_verified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime>,
}

/// Nutrition facts per serving
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Nutrition {
    /// kcal
    pub calories: f64,
    pub protein: f64,
    pub fat: f64,
    pub carbohydrates: f64,
    pub fiber: f64,
}

impl IntoIndexes for Food {
    /// Defines MongoDB indices for the foods collection
    ///
    /// Creates indices for:
    /// - name
    /// - barcode (sparse)
    /// - category
    /// - brand
    /// - nutrition.calories
    /// - tags
    /// - isVerified
    fn into_indices(self) -> Result<Vec<(Document, Option<IndexOptions>)>> {
        let mut indices = vec![];

        indices.push((doc! { "name": 1 }, None));

        let barcode_index_opts = Some(IndexOptions::builder().sparse(Some(true)).build());
        indices.push((doc! { "barcode": 1 }, barcode_index_opts));

        indices.push((doc! { "category": 1 }, None));
        indices.push((doc! { "brand": 1 }, None));
        indices.push((doc! { "nutrition.calories": 1 }, None));
        indices.push((doc! { "tags": 1 }, None));
        indices.push((doc! { "isVerified": 1 }, None));

        Ok(indices)
    }
}
