use anyhow::Result;
use mnemo::MnemoConfig;
use mnemo_password::{Scope, SecretKind};
use mnemo_session::SecretBoard;
use mnemo_strength::HardwareMode;
use rand::{rngs::StdRng, SeedableRng};
use tempfile::tempdir;

const CONFIG: &str = r#"
[[passcode]]
digits = 4
primary = true

[[passcode]]
digits = 6

[rates.passcode]
"Unlocked phone" = 1000.0

[cost]
guesses-per-second = 1e9
dollars-per-hour = 2.0
"#;

#[test]
fn config_replaces_passcodes_and_rates() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("mnemo.toml");
    std::fs::write(&path, CONFIG)?;

    let config = MnemoConfig::load(&path)?;
    let generator = config.generator()?;
    let labels = generator.labels(SecretKind::Passcode, Scope::All);
    assert_eq!(2, labels.len());
    assert_eq!(13, labels[0].bits);
    assert_eq!("4 digits", labels[0].label);
    assert_eq!(1, generator.labels(SecretKind::Passcode, Scope::Primary).len());

    assert_eq!(Some(1000.0), config.rates.default_rate(HardwareMode::Passcode));
    assert_eq!(1.8e12, config.cost.guesses_per_dollar());

    let mut board = SecretBoard::new(generator, SecretKind::Passcode)
        .with_hash_rates(config.rates.clone())
        .with_cost_model(config.cost);
    assert_eq!(1000.0, board.hash_rate());
    board.regenerate(&mut StdRng::seed_from_u64(1))?;
    let view = board.view();
    assert_eq!(1, view.len());
    assert_eq!(4, view[0].text.len());
    assert_eq!("~5.0 seconds", view[0].time_text);
    Ok(())
}

#[test]
fn config_rejects_unknown_category() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("mnemo.toml");
    std::fs::write(
        &path,
        r#"
[[passphrase]]
bits = 16
label = "Broken"
grammar = "missing:8| |adj:8"
"#,
    )?;
    let config = MnemoConfig::load(&path)?;
    assert!(config.generator().is_err());
    Ok(())
}

#[test]
fn config_missing_word_list() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("mnemo.toml");
    std::fs::write(&path, "[words]\nadj = \"nope.txt\"\n")?;
    let config = MnemoConfig::load(&path)?;
    assert!(matches!(config.corpus(), Err(mnemo::Error::Password(_))));
    Ok(())
}
