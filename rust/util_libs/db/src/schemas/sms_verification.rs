use anyhow::Result;
use bson::{doc, oid::ObjectId, DateTime, Document};
use mongodb::options::IndexOptions;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::mongodb::traits::IntoIndexes;

/// Collection name for SMS verification code documents
pub const SMS_VERIFICATION_COLLECTION_NAME: &str = "smsverifications";

/// A verification code sent to a phone number
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct SmsVerification {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub _id: Option<ObjectId>,
    pub phone: String,
    /// Purpose of the code (registration, login, ...)
    #[serde(rename = "type")]
    pub verification_type: String,
    pub code: String,
    pub expires_at: Option<DateTime>,
}

impl IntoIndexes for SmsVerification {
    /// Defines MongoDB indices for the smsverifications collection
    ///
    /// Creates indices for:
    /// - phone + type (compound)
    /// - code
    /// - expiresAt (TTL, expires at the stored timestamp)
    fn into_indices(self) -> Result<Vec<(Document, Option<IndexOptions>)>> {
        let mut indices = vec![];

        indices.push((doc! { "phone": 1, "type": 1 }, None));
        indices.push((doc! { "code": 1 }, None));

        let expiry_index_opts = Some(
            IndexOptions::builder()
                .expire_after(Some(Duration::ZERO))
                .build(),
        );
        indices.push((doc! { "expiresAt": 1 }, expiry_index_opts));

        Ok(indices)
    }
}
