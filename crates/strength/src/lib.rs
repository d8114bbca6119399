//! Estimates of the time and money an attacker needs to
//! brute force a secret with a known number of bits of entropy.
//!
//! All functions are pure and degrade to a textual fallback
//! rather than failing for zero, infinite or huge inputs.
#![deny(missing_docs)]
#![forbid(unsafe_code)]

mod estimate;
mod format;
mod hardware;

pub use estimate::{
    average_cost_to_crack, average_seconds_to_crack, estimate, estimate_with,
    worst_case_seconds_to_crack, CostModel, Estimate,
};
pub use format::{format_currency, format_duration, format_guess_rate};
pub use hardware::{
    default_hash_rate, hardware_options, HardwareMode, HashRateProfile,
    HashRates, PHONE_ONLY_PREFIX,
};
