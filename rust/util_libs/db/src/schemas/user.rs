use anyhow::Result;
use bson::{doc, oid::ObjectId, DateTime, Document};
use mongodb::options::IndexOptions;
use serde::{Deserialize, Serialize};

use crate::mongodb::traits::IntoIndexes;

/// Collection name for user documents
pub const USER_COLLECTION_NAME: &str = "users";

/// User document schema
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// MongoDB ObjectId of the user document
    #[serde(skip_serializing_if = "Option::is_none")]
    pub _id: Option<ObjectId>,
    pub email: String,
    pub username: String,
    /// Phone number, absent for accounts registered by email only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub profile: UserProfile,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct UserProfile {
    pub preferences: Vec<String>,
}

impl IntoIndexes for User {
    /// Defines MongoDB indices for the users collection
    ///
    /// Creates indices for:
    /// - email (unique)
    /// - username (unique)
    /// - phone (sparse)
    /// - createdAt
    /// - profile.preferences
    fn into_indices(self) -> Result<Vec<(Document, Option<IndexOptions>)>> {
        let mut indices = vec![];

        let email_index_opts = Some(IndexOptions::builder().unique(Some(true)).build());
        indices.push((doc! { "email": 1 }, email_index_opts));

        let username_index_opts = Some(IndexOptions::builder().unique(Some(true)).build());
        indices.push((doc! { "username": 1 }, username_index_opts));

        // several accounts may have no phone number
        let phone_index_opts = Some(IndexOptions::builder().sparse(Some(true)).build());
        indices.push((doc! { "phone": 1 }, phone_index_opts));

        indices.push((doc! { "createdAt": 1 }, None));
        indices.push((doc! { "profile.preferences": 1 }, None));

        Ok(indices)
    }
}
