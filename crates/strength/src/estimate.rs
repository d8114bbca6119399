use crate::{format_currency, format_duration};
use serde::{Deserialize, Serialize};

const SECONDS_PER_HOUR: f64 = 3600.0;

/// Price of renting guessing hardware.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct CostModel {
    /// Guesses per second of the rented hardware.
    pub guesses_per_second: f64,
    /// Rental price in dollars per hour.
    pub dollars_per_hour: f64,
}

impl Default for CostModel {
    /// Rented GPU at 2.6 million guesses per second
    /// for fifty cents an hour.
    fn default() -> Self {
        Self {
            guesses_per_second: 2.6e6,
            dollars_per_hour: 0.5,
        }
    }
}

impl CostModel {
    /// Number of guesses a dollar buys.
    pub fn guesses_per_dollar(&self) -> f64 {
        if self.dollars_per_hour.is_nan() || self.dollars_per_hour <= 0.0 {
            return f64::INFINITY;
        }
        self.guesses_per_second * SECONDS_PER_HOUR / self.dollars_per_hour
    }
}

/// Expected number of seconds to find a secret, which is
/// half of the search space.
///
/// A rate that is not positive yields infinity.
pub fn average_seconds_to_crack(bits: f64, guesses_per_second: f64) -> f64 {
    divide((bits - 1.0).exp2(), guesses_per_second)
}

/// Seconds to search the entire space.
pub fn worst_case_seconds_to_crack(bits: f64, guesses_per_second: f64) -> f64 {
    divide(bits.exp2(), guesses_per_second)
}

/// Expected dollars spent to find a secret.
pub fn average_cost_to_crack(bits: f64, model: &CostModel) -> f64 {
    divide((bits - 1.0).exp2(), model.guesses_per_dollar())
}

fn divide(guesses: f64, rate: f64) -> f64 {
    if rate.is_nan() || rate <= 0.0 {
        f64::INFINITY
    } else {
        guesses / rate
    }
}

/// Crack estimate for a secret.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Estimate {
    /// Bits of entropy.
    pub bits: f64,
    /// Attacker guesses per second.
    pub guesses_per_second: f64,
    /// Average seconds to crack.
    pub seconds: f64,
    /// Average dollars to crack.
    pub dollars: f64,
    /// Human readable time.
    pub time_text: String,
    /// Human readable cost.
    pub cost_text: String,
}

/// Estimate with the default cost model.
pub fn estimate(bits: f64, guesses_per_second: f64) -> Estimate {
    estimate_with(bits, guesses_per_second, &CostModel::default())
}

/// Estimate with a cost model.
pub fn estimate_with(
    bits: f64,
    guesses_per_second: f64,
    model: &CostModel,
) -> Estimate {
    let seconds = average_seconds_to_crack(bits, guesses_per_second);
    let dollars = average_cost_to_crack(bits, model);
    Estimate {
        bits,
        guesses_per_second,
        seconds,
        dollars,
        time_text: format_duration(seconds),
        cost_text: format_currency(dollars),
    }
}
