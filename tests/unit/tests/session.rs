use anyhow::Result;
use mnemo_password::{Scope, SecretGenerator, SecretKind, UsernameStyle};
use mnemo_session::{CopyIndicator, RowState, SecretBoard};
use rand::{rngs::StdRng, SeedableRng};
use secrecy::ExposeSecret;
use std::sync::Arc;

fn generator() -> Result<Arc<SecretGenerator>> {
    Ok(Arc::new(SecretGenerator::builtin()?))
}

#[test]
fn scope_switch_keeps_rows() -> Result<()> {
    let mut board = SecretBoard::new(generator()?, SecretKind::Username);
    let mut rng = StdRng::seed_from_u64(10);
    board.regenerate(&mut rng)?;
    let before = board.view();

    board.set_scope(Scope::All);
    let after = board.view();
    assert_eq!(before.len(), after.len());
    for (a, b) in before.iter().zip(after.iter()) {
        assert_eq!(a.key, b.key);
        assert_eq!(a.text, b.text);
    }

    board.regenerate(&mut rng)?;
    assert_eq!(5, board.view().len());
    Ok(())
}

#[test]
fn username_rows_without_number() -> Result<()> {
    let mut board = SecretBoard::new(generator()?, SecretKind::Username);
    let mut rng = StdRng::seed_from_u64(11);
    board.regenerate(&mut rng)?;
    board.set_username_style(UsernameStyle {
        include_number: false,
        capitalize: false,
    });
    let view = board.view();
    // Simple is two 8 bit words once the number is hidden
    assert_eq!("Simple", view[0].label);
    assert_eq!(16.0, view[0].bits);
    assert!(view[0].text.chars().all(|c| c.is_ascii_lowercase()));
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn copy_row() -> Result<()> {
    let indicator = CopyIndicator::default();
    let mut board = SecretBoard::new(generator()?, SecretKind::Passcode)
        .with_copy_indicator(indicator.clone());
    let mut rng = StdRng::seed_from_u64(12);
    board.regenerate(&mut rng)?;
    assert_eq!(25.0, board.hash_rate());

    let key = board.rows()[0].key().to_owned();
    let text = board.rows()[0].secret().text().to_owned();
    let (secret, handle) = board.copy(&key).unwrap();
    assert_eq!(text, secret.expose_secret());
    assert_eq!(None, indicator.copied());
    handle.await?;
    assert!(indicator.is_copied(&key));

    let view = board.view();
    assert_eq!(RowState::Copied, view[0].state);
    assert_eq!(RowState::Hidden, view[1].state);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn rapid_copies_keep_latest() -> Result<()> {
    let indicator = CopyIndicator::default();
    let handles: Vec<_> = ["one", "two", "three"]
        .into_iter()
        .map(|key| indicator.copy(key))
        .collect();
    for handle in handles {
        handle.await?;
    }
    assert_eq!(Some("three".to_owned()), indicator.copied());
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn board_view_json() -> Result<()> {
    let mut board = SecretBoard::new(generator()?, SecretKind::Passcode);
    let mut rng = StdRng::seed_from_u64(12);
    board.regenerate(&mut rng)?;
    let key = board.rows()[0].key().to_owned();
    let (_, handle) = board.copy(&key).unwrap();
    handle.await?;

    let value = serde_json::to_value(board.view())?;
    let rows = value.as_array().unwrap();
    assert_eq!(2, rows.len());
    assert_eq!(key, rows[0]["key"]);
    assert_eq!("6 digits", rows[0]["label"]);
    assert_eq!("copied", rows[0]["state"]);
    assert_eq!("hidden", rows[1]["state"]);
    assert!(rows[0]["timeText"].is_string());
    assert!(rows[0]["costText"].is_string());
    assert!(rows[0].get("time_text").is_none());
    Ok(())
}
