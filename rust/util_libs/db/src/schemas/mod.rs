/// Database schemas and index declarations for the NutriGuide database.
///
/// Every collection has a document type implementing [`IntoIndexes`](crate::mongodb::IntoIndexes).
/// Index names are left to the server default (`email_1`, `phone_1_type_1`, ...).
pub mod auth_token;
pub mod food;
pub mod meal_record;
pub mod sms_verification;
pub mod user;

pub use auth_token::{AuthToken, AUTH_TOKEN_COLLECTION_NAME};
pub use food::{Food, Nutrition, FOOD_COLLECTION_NAME};
pub use meal_record::{MealRecord, MEAL_RECORD_COLLECTION_NAME};
pub use sms_verification::{SmsVerification, SMS_VERIFICATION_COLLECTION_NAME};
pub use user::{User, UserProfile, USER_COLLECTION_NAME};

/// Name of the database bootstrapped when `MONGO_INITDB_DATABASE` is not set
pub const DATABASE_NAME: &str = "nutriguide_dev";
