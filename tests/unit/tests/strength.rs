use mnemo_strength::{
    average_seconds_to_crack, estimate, format_currency, format_duration,
    format_guess_rate, hardware_options, HardwareMode,
};

#[test]
fn consumer_hardware_estimate() {
    let seconds = average_seconds_to_crack(28.0, 184_000.0);
    assert!((seconds - 729.444).abs() < 0.001);
    assert_eq!("~12.2 minutes", format_duration(seconds));
}

#[test]
fn large_magnitudes() {
    assert_eq!("$1.9 trillion", format_currency(1.9e12));
    assert_eq!("1.9 trillion guesses/sec", format_guess_rate(1.9e12));
    assert_eq!("$2.6 million", format_currency(2.6e6));
    assert_eq!("2.6 million guesses/sec", format_guess_rate(2.6e6));
}

#[test]
fn estimates_for_every_profile() {
    for profile in hardware_options(HardwareMode::All) {
        let mut previous = -1.0;
        for bits in [13.0, 20.0, 26.0, 34.0, 42.0, 50.0, 67.0] {
            let estimate = estimate(bits, profile.guesses_per_second);
            assert!(estimate.seconds > previous);
            assert!(!estimate.time_text.is_empty());
            assert!(!estimate.cost_text.is_empty());
            previous = estimate.seconds;
        }
    }
}

#[test]
fn passcode_against_law_enforcement() {
    let estimate = estimate(1e6f64.log2(), 25.0);
    // Half of a million guesses at 25 per second
    assert!((estimate.seconds - 20_000.0).abs() < 1e-6);
    assert_eq!("~5.6 hours", estimate.time_text);
}

#[test]
fn degenerate_inputs() {
    assert_eq!("forever", estimate(80.0, 0.0).time_text);
    assert_eq!("less than a second", estimate(0.0, 1e15).time_text);
    assert_eq!("forever", estimate(2000.0, 1.0).time_text);
    assert_eq!("more money than exists", estimate(2000.0, 1.0).cost_text);
}
