//! Grammar driven generation of memorable passphrases, usernames
//! and phone passcodes.
//!
//! Secrets are described by a tiny grammar language; each
//! grammar token either references a word category from the
//! [Corpus] with the number of bits of entropy it should contribute
//! or is a literal separator:
//!
//! ```text
//! adj:8| |noun-concrete:8| |number:6
//! ```
//!
//! The sampler draws every category token from a prefix of the
//! category sized to the requested bits so the entropy reported
//! for a secret is always computed from the lists that were
//! actually used.
#![deny(missing_docs)]
#![forbid(unsafe_code)]

mod assemble;
mod corpus;
mod error;
mod generator;
mod grammar;
mod registry;
mod sampler;

pub use assemble::{assemble, classify, username_components, TokenRole};
pub use corpus::{
    parse_word_list, size_for_bits, Category, Corpus, SubList, NUMBER,
    NUMBER_CAPACITY,
};
pub use error::Error;
pub use generator::{
    GeneratedSecret, SecretGenerator, Username, UsernameComponent,
    UsernameStyle,
};
pub use grammar::{Grammar, GrammarCache, GrammarToken};
pub use registry::{
    EntryReport, Label, Recipe, Registries, Registry, RegistryEntry, Scope,
    SecretKind,
};
pub use sampler::{achieved_bits, sample, sample_digits, Token, DIGITS_CATEGORY};

/// Default cryptographically secure RNG.
pub fn csprng() -> impl rand::CryptoRng + rand::Rng {
    rand::rngs::OsRng
}

/// Result type for the library.
pub type Result<T> = std::result::Result<T, Error>;

/// Numerical digits.
pub const DIGITS: &[char] =
    &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

/// Tolerance used when comparing fractional bit counts.
pub(crate) const BITS_EPSILON: f64 = 1e-9;
