//! Attacker hardware profiles.
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Prefix for passcode profiles in the combined view.
pub const PHONE_ONLY_PREFIX: &str = "Phone only: ";

const PASSCODE_RATES: &[(&str, f64)] = &[
    ("Expected law enforcement rate", 25.0),
    ("Speculative high-end rate", 250.0),
];

const PASSPHRASE_RATES: &[(&str, f64)] = &[
    ("Standard consumer hardware", 184_000.0),
    ("Best consumer hardware", 2.6e6),
    ("Nation state (NSA, etc.)", 1.9e12),
    ("Far future nation state", 1e15),
];

/// Selects which hardware profiles are offered.
#[derive(
    Default, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum HardwareMode {
    /// Guessing limited by a phone.
    Passcode,
    /// Offline guessing.
    #[default]
    Passphrase,
    /// Both sets with passcode profiles first.
    All,
}

impl fmt::Display for HardwareMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Passcode => "passcode",
                Self::Passphrase => "passphrase",
                Self::All => "all",
            }
        )
    }
}

impl FromStr for HardwareMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "passcode" => Ok(Self::Passcode),
            "passphrase" => Ok(Self::Passphrase),
            "all" => Ok(Self::All),
            _ => Err(format!("unknown hardware mode '{}'", s)),
        }
    }
}

/// Named attacker guess rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HashRateProfile {
    /// Display label.
    pub label: String,
    /// Guesses per second.
    pub guesses_per_second: f64,
}

/// Tables of hash rate profiles keyed by label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HashRates {
    /// Rates for guessing on a phone.
    pub passcode: IndexMap<String, f64>,
    /// Rates for offline guessing.
    pub passphrase: IndexMap<String, f64>,
}

impl Default for HashRates {
    fn default() -> Self {
        let table = |rates: &[(&str, f64)]| {
            rates
                .iter()
                .map(|(label, rate)| (label.to_string(), *rate))
                .collect::<IndexMap<_, _>>()
        };
        Self {
            passcode: table(PASSCODE_RATES),
            passphrase: table(PASSPHRASE_RATES),
        }
    }
}

impl HashRates {
    /// Profiles offered for a mode in display order.
    pub fn options(&self, mode: HardwareMode) -> Vec<HashRateProfile> {
        let profiles = |rates: &IndexMap<String, f64>, prefix: &str| {
            rates
                .iter()
                .map(|(label, rate)| HashRateProfile {
                    label: format!("{}{}", prefix, label),
                    guesses_per_second: *rate,
                })
                .collect::<Vec<_>>()
        };
        match mode {
            HardwareMode::Passcode => profiles(&self.passcode, ""),
            HardwareMode::Passphrase => profiles(&self.passphrase, ""),
            HardwareMode::All => {
                let mut options = profiles(&self.passcode, PHONE_ONLY_PREFIX);
                options.extend(profiles(&self.passphrase, ""));
                options
            }
        }
    }

    /// Rate selected before the user picks one.
    ///
    /// The first passcode profile for passcode mode,
    /// otherwise the second offline profile. Falls back to
    /// the first available profile.
    pub fn default_rate(&self, mode: HardwareMode) -> Option<f64> {
        let options = self.options(mode);
        let index = match mode {
            HardwareMode::Passcode => 0,
            HardwareMode::Passphrase => 1,
            HardwareMode::All => self.passcode.len() + 1,
        };
        options
            .get(index)
            .or_else(|| options.first())
            .map(|profile| profile.guesses_per_second)
    }
}

/// Built-in profiles offered for a mode.
pub fn hardware_options(mode: HardwareMode) -> Vec<HashRateProfile> {
    HashRates::default().options(mode)
}

/// Built-in default rate for a mode.
pub fn default_hash_rate(mode: HardwareMode) -> f64 {
    match mode {
        HardwareMode::Passcode => PASSCODE_RATES[0].1,
        HardwareMode::Passphrase | HardwareMode::All => PASSPHRASE_RATES[1].1,
    }
}
