use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to serialize a list-valued field before storing it
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Failed to encode {field} as JSON: {source}")]
    EncodeList {
        /// Name of the field being encoded
        field: &'static str,
        /// The underlying serialization error
        #[source]
        source: serde_json::Error,
    },

    /// Failure to sign a support-chat JWT
    #[error("Failed to sign token: {0}")]
    TokenSigning(#[from] jsonwebtoken::errors::Error),

    /// A required secret is not configured
    #[error("{0} is not configured")]
    MissingSecret(&'static str),
}
