use thiserror::Error;

/// Errors generated by the session library.
#[derive(Debug, Error)]
pub enum Error {
    /// Errors generated by the password library.
    #[error(transparent)]
    Password(#[from] mnemo_password::Error),
}
