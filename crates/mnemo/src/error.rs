use std::path::PathBuf;
use thiserror::Error;

/// Errors generated by the executable library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error generated when a path is not a file.
    #[error("path {0} is not a file")]
    NotFile(PathBuf),

    /// Error generated when a row key does not exist on a board.
    #[error("no row with key '{0}'")]
    NoRow(String),

    /// Error generated when no hash rate is available.
    #[error("no hash rate profiles configured for {0}")]
    NoHashRate(mnemo_strength::HardwareMode),

    /// Errors generated by the password library.
    #[error(transparent)]
    Password(#[from] mnemo_password::Error),

    /// Errors generated by the session library.
    #[error(transparent)]
    Session(#[from] mnemo_session::Error),

    /// Error generated by the io module.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Error generated parsing TOML.
    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    /// Error generated by the JSON library.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Error generated by the clipboard library.
    #[cfg(feature = "clipboard")]
    #[error(transparent)]
    Clipboard(#[from] arboard::Error),

    /// Error generated joining a task.
    #[error(transparent)]
    Join(#[from] tokio::task::JoinError),
}
