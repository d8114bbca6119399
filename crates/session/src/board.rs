//! Board of generated secrets with crack estimates.
use crate::{CopyIndicator, Result};
use mnemo_password::{
    GeneratedSecret, Scope, SecretGenerator, SecretKind, Username,
    UsernameStyle,
};
use mnemo_strength::{
    default_hash_rate, estimate_with, CostModel, HardwareMode,
    HashRateProfile, HashRates,
};
use rand::Rng;
use secrecy::SecretString;
use serde::Serialize;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Generated row of a board.
#[derive(Debug)]
pub struct BoardRow {
    key: String,
    secret: GeneratedSecret,
    username: Option<Username>,
}

impl BoardRow {
    /// Key used to identify the row.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Generated secret.
    pub fn secret(&self) -> &GeneratedSecret {
        &self.secret
    }

    /// Username when the board generates usernames.
    pub fn username(&self) -> Option<&Username> {
        self.username.as_ref()
    }

    fn text(&self, style: &UsernameStyle) -> String {
        match &self.username {
            Some(username) => username.render(style),
            None => self.secret.text().to_owned(),
        }
    }

    fn bits(&self, style: &UsernameStyle) -> f64 {
        match &self.username {
            Some(username) => username.display_bits(style),
            None => self.secret.bits(),
        }
    }
}

/// Visibility of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RowState {
    /// Shown normally.
    Visible,
    /// Copied last.
    Copied,
    /// Hidden because another row was copied.
    Hidden,
}

/// Row prepared for display.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RowView {
    /// Row key.
    pub key: String,
    /// Registry label.
    pub label: String,
    /// Bits of entropy of the displayed text.
    pub bits: f64,
    /// Displayed text.
    pub text: String,
    /// Average time to crack.
    pub time_text: String,
    /// Average cost to crack.
    pub cost_text: String,
    /// Visibility.
    pub state: RowState,
}

/// Hardware mode used for estimates of a kind of secret.
pub fn hardware_mode(kind: SecretKind) -> HardwareMode {
    match kind {
        SecretKind::Passcode => HardwareMode::Passcode,
        SecretKind::Passphrase | SecretKind::Username => {
            HardwareMode::Passphrase
        }
    }
}

/// Presentation state for a board of generated secrets.
///
/// Scope, hash rate and display toggles are inputs to the next
/// call to [SecretBoard::regenerate]; changing the scope does not
/// change the rows until the board is regenerated.
#[derive(Debug)]
pub struct SecretBoard {
    generator: Arc<SecretGenerator>,
    kind: SecretKind,
    scope: Scope,
    hash_rates: HashRates,
    hash_rate: f64,
    cost_model: CostModel,
    username_style: UsernameStyle,
    show_hidden: bool,
    generation: u64,
    rows: Vec<BoardRow>,
    copy: CopyIndicator,
}

impl SecretBoard {
    /// Create an empty board.
    pub fn new(generator: Arc<SecretGenerator>, kind: SecretKind) -> Self {
        Self {
            generator,
            kind,
            scope: Default::default(),
            hash_rates: Default::default(),
            hash_rate: default_hash_rate(hardware_mode(kind)),
            cost_model: Default::default(),
            username_style: Default::default(),
            show_hidden: true,
            generation: 0,
            rows: Vec::new(),
            copy: Default::default(),
        }
    }

    /// Use custom hash rate profiles and select the
    /// default rate for this board.
    pub fn with_hash_rates(mut self, hash_rates: HashRates) -> Self {
        let mode = hardware_mode(self.kind);
        self.hash_rate = hash_rates
            .default_rate(mode)
            .unwrap_or_else(|| default_hash_rate(mode));
        self.hash_rates = hash_rates;
        self
    }

    /// Use a cost model.
    pub fn with_cost_model(mut self, cost_model: CostModel) -> Self {
        self.cost_model = cost_model;
        self
    }

    /// Use a copy indicator.
    pub fn with_copy_indicator(mut self, copy: CopyIndicator) -> Self {
        self.copy = copy;
        self
    }

    /// Kind of secret.
    pub fn kind(&self) -> SecretKind {
        self.kind
    }

    /// Current scope.
    pub fn scope(&self) -> Scope {
        self.scope
    }

    /// Set the scope used by the next regeneration.
    pub fn set_scope(&mut self, scope: Scope) {
        self.scope = scope;
    }

    /// Selected attacker guesses per second.
    pub fn hash_rate(&self) -> f64 {
        self.hash_rate
    }

    /// Select attacker guesses per second.
    pub fn set_hash_rate(&mut self, hash_rate: f64) {
        self.hash_rate = hash_rate;
    }

    /// Hash rate profiles offered for this board.
    pub fn hardware_options(&self) -> Vec<HashRateProfile> {
        self.hash_rates.options(hardware_mode(self.kind))
    }

    /// Username display style.
    pub fn username_style(&self) -> &UsernameStyle {
        &self.username_style
    }

    /// Set the username display style.
    pub fn set_username_style(&mut self, style: UsernameStyle) {
        self.username_style = style;
    }

    /// Whether rows hidden by a copy are shown.
    pub fn show_hidden(&self) -> bool {
        self.show_hidden
    }

    /// Show or hide rows hidden by a copy.
    pub fn set_show_hidden(&mut self, show_hidden: bool) {
        self.show_hidden = show_hidden;
    }

    /// Number of times the board was regenerated.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Generated rows.
    pub fn rows(&self) -> &[BoardRow] {
        &self.rows
    }

    /// Copy indicator.
    pub fn copy_indicator(&self) -> &CopyIndicator {
        &self.copy
    }

    /// Generate new rows for the current scope.
    ///
    /// Resets the copy indicator and shows hidden rows.
    pub fn regenerate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<()> {
        let secrets =
            self.generator.generate_all(self.kind, self.scope, rng)?;
        self.rows = secrets
            .into_iter()
            .map(|secret| {
                let username = match self.kind {
                    SecretKind::Username => {
                        Some(Username::from_secret(&secret))
                    }
                    _ => None,
                };
                BoardRow {
                    key: row_key(self.kind, &secret),
                    secret,
                    username,
                }
            })
            .collect();
        self.generation += 1;
        self.show_hidden = true;
        self.copy.clear();
        tracing::debug!(
            kind = %self.kind,
            scope = ?self.scope,
            rows = self.rows.len(),
            generation = self.generation,
            "board::regenerate",
        );
        Ok(())
    }

    /// Copy the text of a row.
    ///
    /// Returns the text to place on the clipboard and the
    /// handle for the copy indicator timer.
    pub fn copy(
        &mut self,
        key: &str,
    ) -> Option<(SecretString, JoinHandle<()>)> {
        let row = self.rows.iter().find(|row| row.key == key)?;
        let text = SecretString::from(row.text(&self.username_style));
        self.show_hidden = false;
        Some((text, self.copy.copy(key)))
    }

    /// Rows prepared for display with the current hash
    /// rate and display toggles.
    pub fn view(&self) -> Vec<RowView> {
        let copied = self.copy.copied();
        self.rows
            .iter()
            .map(|row| {
                let bits = row.bits(&self.username_style);
                let estimate =
                    estimate_with(bits, self.hash_rate, &self.cost_model);
                let state = match copied.as_deref() {
                    Some(key) if key == row.key => RowState::Copied,
                    Some(_) if !self.show_hidden => RowState::Hidden,
                    _ => RowState::Visible,
                };
                RowView {
                    key: row.key.clone(),
                    label: row.secret.label().to_owned(),
                    bits,
                    text: row.text(&self.username_style),
                    time_text: estimate.time_text,
                    cost_text: estimate.cost_text,
                    state,
                }
            })
            .collect()
    }
}

fn row_key(kind: SecretKind, secret: &GeneratedSecret) -> String {
    format!("{}-{}", kind, secret.label().to_lowercase().replace(' ', "-"))
}
