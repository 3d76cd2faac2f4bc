use anyhow::Result;
use bson::{doc, oid::ObjectId, DateTime, Document};
use mongodb::options::IndexOptions;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::mongodb::traits::IntoIndexes;

/// Collection name for authentication token documents
pub const AUTH_TOKEN_COLLECTION_NAME: &str = "authtokens";

/// Authentication token issued to a user
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct AuthToken {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub _id: Option<ObjectId>,
    pub token: String,
    pub user_id: Option<ObjectId>,
    /// The server removes the token once this instant has passed
    pub expires_at: Option<DateTime>,
}

impl IntoIndexes for AuthToken {
    /// Defines MongoDB indices for the authtokens collection
    ///
    /// Creates indices for:
    /// - token (unique)
    /// - userId
    /// - expiresAt (TTL, expires at the stored timestamp)
    fn into_indices(self) -> Result<Vec<(Document, Option<IndexOptions>)>> {
        let mut indices = vec![];

        let token_index_opts = Some(IndexOptions::builder().unique(Some(true)).build());
        indices.push((doc! { "token": 1 }, token_index_opts));

        indices.push((doc! { "userId": 1 }, None));

        let expiry_index_opts = Some(
            IndexOptions::builder()
                .expire_after(Some(Duration::ZERO))
                .build(),
        );
        indices.push((doc! { "expiresAt": 1 }, expiry_index_opts));

        Ok(indices)
    }
}
