use thiserror::Error;

use crate::server::network::mapping::MappingError;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Stored record could not be converted into its domain model
    ///
    /// Occurs when a database row holds a value the domain model can't represent,
    /// such as an unknown role code or malformed tag JSON. Results in a 500 Internal
    /// Server Error with a generic message returned to client.
    #[error("Failed to convert stored {entity} record {id}: {source}")]
    CorruptRecord {
        /// Entity name of the record
        entity: &'static str,
        /// Primary key of the record
        id: i32,
        /// The underlying field mapping error
        #[source]
        source: MappingError,
    },

    /// Failure to encode a value for storage
    #[error("Failed to encode {field} for storage: {source}")]
    Encode {
        /// Field being encoded
        field: &'static str,
        /// The underlying serialization error
        #[source]
        source: serde_json::Error,
    },
}
