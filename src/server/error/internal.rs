use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Password hashing or hash parsing failed.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Password hash error: {0}")]
    PasswordHash(String),

    /// Building the outbound HTTP client failed.
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),

    /// Row was written but could not be read back.
    ///
    /// # Fields
    /// - Description of the missing row
    #[error("{0} missing after write")]
    MissingAfterWrite(String),
}

impl From<argon2::password_hash::Error> for InternalError {
    fn from(err: argon2::password_hash::Error) -> Self {
        InternalError::PasswordHash(err.to_string())
    }
}
