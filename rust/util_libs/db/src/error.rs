use thiserror::Error;

/// Server error code returned when creating a collection that already exists.
pub const NAMESPACE_EXISTS_CODE: i32 = 48;
/// Server error code returned when an index with the same name but different options exists.
pub const INDEX_OPTIONS_CONFLICT_CODE: i32 = 85;
/// Server error code returned when an index with the same name but different keys exists.
pub const INDEX_KEY_SPECS_CONFLICT_CODE: i32 = 86;

/// Errors raised while preparing collections and their indices.
///
/// The driver error is always kept as the source so that the message reported to the
/// operator ends with the server's own explanation.
#[derive(Error, Debug)]
pub enum DbError {
    #[error("MongoDB {operation} failed on `{collection}`: {source}")]
    Database {
        source: mongodb::error::Error,
        collection: String,
        operation: String,
    },

    #[error("Invalid index declaration for `{collection}`: {message}")]
    Schema { message: String, collection: String },
}

impl DbError {
    /// Creates a new Database error with context
    pub fn database(
        error: mongodb::error::Error,
        collection: impl Into<String>,
        operation: impl Into<String>,
    ) -> Self {
        Self::Database {
            source: error,
            collection: collection.into(),
            operation: operation.into(),
        }
    }

    /// Creates a new Schema error for the given collection
    pub fn schema(message: impl Into<String>, collection: impl Into<String>) -> Self {
        Self::Schema {
            message: message.into(),
            collection: collection.into(),
        }
    }

    /// Returns true if this is a Database error
    pub fn is_database(&self) -> bool {
        matches!(self, Self::Database { .. })
    }

    /// Returns the server error code, if the failure came back from a command.
    pub fn server_code(&self) -> Option<i32> {
        match self {
            Self::Database { source, .. } => command_code(source),
            Self::Schema { .. } => None,
        }
    }

    /// Returns true if an index with the same name exists under another definition.
    pub fn is_index_conflict(&self) -> bool {
        matches!(
            self.server_code(),
            Some(INDEX_OPTIONS_CONFLICT_CODE) | Some(INDEX_KEY_SPECS_CONFLICT_CODE)
        )
    }
}

/// Extracts the server code of a failed command.
pub fn command_code(error: &mongodb::error::Error) -> Option<i32> {
    match *error.kind {
        mongodb::error::ErrorKind::Command(ref command_error) => Some(command_error.code),
        _ => None,
    }
}
