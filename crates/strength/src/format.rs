//! Human readable durations, currency and guess rates.

const MINUTE: f64 = 60.0;
const HOUR: f64 = 60.0 * MINUTE;
const DAY: f64 = 24.0 * HOUR;
const YEAR: f64 = 365.25 * DAY;

/// Duration units in ascending order; the boolean
/// indicates whether the unit has a singular form.
const DURATION_UNITS: &[(f64, &str, bool)] = &[
    (1.0, "second", true),
    (MINUTE, "minute", true),
    (HOUR, "hour", true),
    (DAY, "day", true),
    (YEAR, "year", true),
    (1e3 * YEAR, "thousand years", false),
    (1e6 * YEAR, "million years", false),
    (1e9 * YEAR, "billion years", false),
    (1e12 * YEAR, "trillion years", false),
];

const CURRENCY_UNITS: &[(f64, &str)] = &[
    (1e3, "thousand"),
    (1e6, "million"),
    (1e9, "billion"),
    (1e12, "trillion"),
    (1e15, "quadrillion"),
];

const RATE_UNITS: &[(f64, &str)] = &[
    (1e6, "million"),
    (1e9, "billion"),
    (1e12, "trillion"),
    (1e15, "quadrillion"),
];

/// Index of the unit used to display a value.
///
/// Starts at the largest unit whose size does not exceed the value
/// and moves up while the value rounded to a tenth of the unit
/// reaches the size of the next unit.
fn unit_index<U>(
    value: f64,
    units: &[U],
    size: impl Fn(&U) -> f64,
) -> Option<usize> {
    let mut index = units.iter().rposition(|unit| value >= size(unit))?;
    while let Some(next) = units.get(index + 1) {
        let current = size(&units[index]);
        if round_tenth(value / current) * current < size(next) {
            break;
        }
        index += 1;
    }
    Some(index)
}

/// Format a number of seconds, for example `~12.2 minutes`.
pub fn format_duration(seconds: f64) -> String {
    if seconds.is_nan() {
        return "unknown".to_owned();
    }
    if seconds.is_infinite() && seconds > 0.0 {
        return "forever".to_owned();
    }
    if seconds < 1.0 {
        return "less than a second".to_owned();
    }
    let index =
        unit_index(seconds, DURATION_UNITS, |unit| unit.0).unwrap_or(0);
    let (size, name, singular) = DURATION_UNITS[index];
    let value = round_tenth(seconds / size);
    if singular && value == 1.0 {
        format!("~{:.1} {}", value, name)
    } else if singular {
        format!("~{:.1} {}s", value, name)
    } else {
        format!("~{:.1} {}", value, name)
    }
}

/// Format an amount of dollars, for example `$1.9 trillion`.
pub fn format_currency(dollars: f64) -> String {
    if dollars.is_nan() {
        return "unknown".to_owned();
    }
    if dollars.is_infinite() && dollars > 0.0 {
        return "more money than exists".to_owned();
    }
    if dollars < 0.01 {
        return "less than $0.01".to_owned();
    }
    let cents = (dollars * 100.0).round() / 100.0;
    match unit_index(cents, CURRENCY_UNITS, |unit| unit.0) {
        Some(index) => {
            let (size, unit) = CURRENCY_UNITS[index];
            format!("${:.1} {}", round_tenth(dollars / size), unit)
        }
        None => format!("${:.2}", cents),
    }
}

/// Format an attacker guess rate, for example
/// `1.9 trillion guesses/sec` or `184,000 guesses/sec`.
pub fn format_guess_rate(guesses_per_second: f64) -> String {
    if guesses_per_second.is_nan() || guesses_per_second < 0.0 {
        return "unknown".to_owned();
    }
    if guesses_per_second.is_infinite() {
        return "unlimited guesses/sec".to_owned();
    }
    let whole = guesses_per_second.round();
    let amount = match unit_index(whole, RATE_UNITS, |unit| unit.0) {
        Some(index) => {
            let (size, unit) = RATE_UNITS[index];
            let value = round_tenth(guesses_per_second / size);
            format!("{} {}", trim_tenth(value), unit)
        }
        None => group_thousands(whole as u64),
    };
    format!("{} guesses/sec", amount)
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// One decimal place without a trailing `.0`.
fn trim_tenth(value: f64) -> String {
    let text = format!("{:.1}", value);
    match text.strip_suffix(".0") {
        Some(whole) => whole.to_owned(),
        None => text,
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, c) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
