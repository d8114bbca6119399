//! Memorable passphrases, usernames and phone passcodes with
//! estimates of the time and money needed to crack them.
//!
//! The `mnemo` executable loads an optional TOML configuration
//! file that adds word lists, replaces the built-in registries
//! and changes the attacker hardware profiles.
#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(feature = "clipboard")]
mod clipboard;
mod config;
mod error;

#[cfg(feature = "clipboard")]
pub use clipboard::NativeClipboard;
pub use config::{DigitsEntryConfig, GrammarEntryConfig, MnemoConfig};
pub use error::Error;

pub use mnemo_password as password;
pub use mnemo_session as session;
pub use mnemo_strength as strength;

/// Result type for the executable library.
pub type Result<T> = std::result::Result<T, error::Error>;
