use crate::SecretKind;
use thiserror::Error;

/// Errors generated by the password library.
///
/// Apart from `Io` these indicate a problem with the word
/// lists or grammar tables and are reported when the
/// generator is constructed.
#[derive(Debug, Error)]
pub enum Error {
    /// Error generated when a grammar references a category
    /// that does not exist in the corpus.
    #[error("unknown category '{0}'")]
    UnknownCategory(String),

    /// Error generated when a category reference in a grammar
    /// does not have a valid number of bits.
    #[error("malformed grammar token '{0}', expected name:bits")]
    MalformedToken(String),

    /// Error generated when a category or the prefix sized
    /// for a token has no elements to draw from.
    #[error("category '{0}' has no elements to draw from")]
    EmptyCategory(String),

    /// Error generated when a registry already has an entry
    /// for a bit value.
    #[error("duplicate key {bits} in the {kind} registry")]
    DuplicateKey {
        /// Kind of secret.
        kind: SecretKind,
        /// Registry key.
        bits: u32,
    },

    /// Error generated when a primary key does not exist
    /// in the registry.
    #[error("primary key {bits} is not in the {kind} registry")]
    UnknownKey {
        /// Kind of secret.
        kind: SecretKind,
        /// Registry key.
        bits: u32,
    },

    /// Error generated when the entropy a registry entry
    /// achieves does not match the entry key.
    #[error(
        "{kind} entry {bits} ({label}) declares {declared} bits but achieves {achieved} bits"
    )]
    InconsistentEntry {
        /// Kind of secret.
        kind: SecretKind,
        /// Registry key.
        bits: u32,
        /// Entry label.
        label: String,
        /// Bits declared by the grammar.
        declared: f64,
        /// Bits achieved with the corpus.
        achieved: f64,
    },

    /// Error generated when a secret is requested for a bit
    /// value with no registry entry.
    #[error("no {kind} registry entry for {bits} bits")]
    NoRegistryEntry {
        /// Kind of secret.
        kind: SecretKind,
        /// Requested bits.
        bits: u32,
    },

    /// Error generated when a secret kind name is not recognized.
    #[error("unknown secret kind '{0}'")]
    UnknownKind(String),

    /// Error generated by the io module.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
