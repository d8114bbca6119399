//! Presentation state for boards of generated secrets.
//!
//! A [SecretBoard] holds the rows generated for a kind of secret
//! together with the inputs that affect how they are shown; the
//! [CopyIndicator] tracks which row was copied last.
#![deny(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod copy;
mod error;

pub use board::{hardware_mode, BoardRow, RowState, RowView, SecretBoard};
pub use copy::{CopyIndicator, COPY_INDICATOR_DELAY};
pub use error::Error;

/// Result type for the session library.
pub type Result<T> = std::result::Result<T, Error>;
