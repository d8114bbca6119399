//! Tables mapping target bits of entropy to grammars and labels.
use crate::{
    achieved_bits, Corpus, Error, Grammar, Result, BITS_EPSILON, DIGITS,
};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr, sync::Arc};

/// Built-in passphrase grammars.
const PASSPHRASE: &[(u32, &str, &str)] = &[
    (26, "Quick", "adj:9| |noun-concrete:9| |number:8"),
    (34, "Simple", "adj:9| |noun-concrete:9| |verb-s:8| |number:8"),
    (
        42,
        "Standard",
        "adj-animate:8| |noun-animate:8| |verb-s:8| |adj:9| |noun-concrete:9",
    ),
    (
        46,
        "Sturdy",
        "adj-animate:8| |noun-animate:8| |verb-s:8| |adj:9| |noun-concrete:9| |number:4",
    ),
    (
        50,
        "Strong",
        "adj-animate:8| |noun-animate:8| |verb-s:8| |adj-concrete:8| |adj:9| |noun-concrete:9",
    ),
    (
        59,
        "Fortress",
        "number:9| |adj-animate:8| |noun-animate:8| |verb-s:8| |adj-concrete:8| |adj:9| |noun-concrete:9",
    ),
    (
        67,
        "Paranoid",
        "adj-animate:8| |noun-animate:8| |verb-s:8| |adj:9| |noun-concrete:9| and |adj-concrete:8| |noun-concrete:9| |number:8",
    ),
];
const PASSPHRASE_PRIMARY: &[u32] = &[34, 42, 50, 67];

/// Built-in username grammars.
const USERNAME: &[(u32, &str, &str)] = &[
    (22, "Simple", "adj:8| |noun-concrete:8| |number:6"),
    (24, "Standard", "adj-animate:8| |noun-animate:8| |number:8"),
    (30, "Whatever", "adj:8| |noun-concrete:8| |verb-s:8| |number:6"),
    (
        32,
        "Lively",
        "adj-animate:8| |noun-animate:8| |verb-s:8| |number:8",
    ),
    (
        36,
        "Complex",
        "adj-animate:8| |adj-concrete:8| |noun-animate:8| |number:12",
    ),
];
const USERNAME_PRIMARY: &[u32] = &[22, 24, 30, 36];

/// Built-in passcode lengths.
const PASSCODE: &[usize] = &[4, 6, 8, 10, 11, 12];
const PASSCODE_PRIMARY: &[usize] = &[6, 10];

/// Kind of secret.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SecretKind {
    /// Multi-word passphrase.
    Passphrase,
    /// Username.
    Username,
    /// Phone passcode.
    Passcode,
}

impl fmt::Display for SecretKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Passphrase => "passphrase",
                Self::Username => "username",
                Self::Passcode => "passcode",
            }
        )
    }
}

impl FromStr for SecretKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "passphrase" => Ok(Self::Passphrase),
            "username" => Ok(Self::Username),
            "passcode" => Ok(Self::Passcode),
            _ => Err(Error::UnknownKind(s.to_owned())),
        }
    }
}

/// Which entries of a registry to show.
#[derive(
    Default, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// Small curated set shown by default.
    #[default]
    Primary,
    /// Every configured entry.
    All,
}

/// How the secret for a registry entry is produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Recipe {
    /// Sample a grammar.
    Grammar(Arc<Grammar>),
    /// Uniformly random decimal digits.
    Digits(usize),
}

impl Recipe {
    /// Bits declared by the recipe.
    pub fn declared_bits(&self) -> f64 {
        match self {
            Self::Grammar(grammar) => grammar.bits(),
            Self::Digits(digits) => digits_bits(*digits),
        }
    }

    /// Bits the recipe achieves with a corpus.
    pub fn achieved_bits(&self, corpus: &Corpus) -> Result<f64> {
        match self {
            Self::Grammar(grammar) => achieved_bits(corpus, grammar),
            Self::Digits(digits) => Ok(digits_bits(*digits)),
        }
    }
}

fn digits_bits(digits: usize) -> f64 {
    digits as f64 * (DIGITS.len() as f64).log2()
}

/// Registry entry.
#[derive(Debug, Clone, PartialEq)]
pub struct RegistryEntry {
    /// Target bits of entropy; unique within a registry.
    pub bits: u32,
    /// Short human readable label.
    pub label: String,
    /// Recipe for the secret.
    pub recipe: Recipe,
}

/// Label for a registry entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    /// Target bits of entropy.
    pub bits: u32,
    /// Label text.
    pub label: String,
}

/// Result of checking a registry entry against a corpus.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryReport {
    /// Kind of secret.
    pub kind: SecretKind,
    /// Registry key.
    pub bits: u32,
    /// Entry label.
    pub label: String,
    /// Whether the entry is in the primary view.
    pub primary: bool,
    /// Bits declared by the recipe.
    pub declared: f64,
    /// Bits achieved with the corpus.
    pub achieved: f64,
}

/// Ordered table of entries for a kind of secret.
///
/// Iteration follows insertion order; the primary view
/// follows the order it was declared in.
#[derive(Debug, Clone)]
pub struct Registry {
    kind: SecretKind,
    entries: IndexMap<u32, RegistryEntry>,
    primary: Vec<u32>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new(kind: SecretKind) -> Self {
        Self {
            kind,
            entries: IndexMap::new(),
            primary: Vec::new(),
        }
    }

    /// Create a registry from a table of grammars.
    pub fn from_grammars<'a>(
        kind: SecretKind,
        corpus: &Corpus,
        grammars: impl IntoIterator<Item = (u32, &'a str, &'a str)>,
        primary: impl IntoIterator<Item = u32>,
    ) -> Result<Self> {
        let mut registry = Self::new(kind);
        for (bits, label, source) in grammars {
            registry.insert(RegistryEntry {
                bits,
                label: label.to_owned(),
                recipe: Recipe::Grammar(Arc::new(Grammar::parse(
                    source, corpus,
                )?)),
            })?;
        }
        registry.set_primary(primary)?;
        Ok(registry)
    }

    /// Create a registry of passcode lengths.
    pub fn from_digits(
        lengths: impl IntoIterator<Item = usize>,
        primary: impl IntoIterator<Item = usize>,
    ) -> Result<Self> {
        let mut registry = Self::new(SecretKind::Passcode);
        for digits in lengths {
            registry.insert(digits_entry(digits))?;
        }
        registry.set_primary(
            primary
                .into_iter()
                .map(|digits| digits_bits(digits).round() as u32)
                .collect::<Vec<_>>(),
        )?;
        Ok(registry)
    }

    /// Kind of secret.
    pub fn kind(&self) -> SecretKind {
        self.kind
    }

    /// Add an entry.
    pub fn insert(&mut self, entry: RegistryEntry) -> Result<()> {
        if self.entries.contains_key(&entry.bits) {
            return Err(Error::DuplicateKey {
                kind: self.kind,
                bits: entry.bits,
            });
        }
        self.entries.insert(entry.bits, entry);
        Ok(())
    }

    /// Set the keys of the primary view in display order.
    pub fn set_primary(
        &mut self,
        keys: impl IntoIterator<Item = u32>,
    ) -> Result<()> {
        let mut primary = Vec::new();
        for bits in keys {
            if !self.entries.contains_key(&bits) {
                return Err(Error::UnknownKey {
                    kind: self.kind,
                    bits,
                });
            }
            if primary.contains(&bits) {
                return Err(Error::DuplicateKey {
                    kind: self.kind,
                    bits,
                });
            }
            primary.push(bits);
        }
        self.primary = primary;
        Ok(())
    }

    /// Get an entry.
    pub fn get(&self, bits: u32) -> Option<&RegistryEntry> {
        self.entries.get(&bits)
    }

    /// Entries in display order.
    pub fn entries(&self, scope: Scope) -> Vec<&RegistryEntry> {
        match scope {
            Scope::All => self.entries.values().collect(),
            Scope::Primary => self
                .primary
                .iter()
                .filter_map(|bits| self.entries.get(bits))
                .collect(),
        }
    }

    /// Labels in display order.
    pub fn labels(&self, scope: Scope) -> Vec<Label> {
        self.entries(scope)
            .into_iter()
            .map(|entry| Label {
                bits: entry.bits,
                label: entry.label.clone(),
            })
            .collect()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Determine if this registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry with the key closest to the requested bits.
    ///
    /// When two keys are equally close the entry inserted
    /// first is returned. No entry is closest to `NaN`.
    pub fn closest(&self, bits: f64) -> Option<&RegistryEntry> {
        if bits.is_nan() {
            return None;
        }
        self.entries.values().fold(None, |closest, entry| match closest {
            Some(current)
                if (current.bits as f64 - bits).abs()
                    <= (entry.bits as f64 - bits).abs() =>
            {
                Some(current)
            }
            _ => Some(entry),
        })
    }

    /// Check every entry achieves the bits of its key.
    ///
    /// A grammar entry is consistent when the bits it declares
    /// equal the bits it achieves with the corpus and both equal
    /// the key. A digits entry is consistent when the achieved
    /// bits round to the key.
    pub fn verify(&self, corpus: &Corpus) -> Result<Vec<EntryReport>> {
        let mut reports = Vec::with_capacity(self.entries.len());
        for entry in self.entries.values() {
            let declared = entry.recipe.declared_bits();
            let achieved = entry.recipe.achieved_bits(corpus)?;
            let consistent = match &entry.recipe {
                Recipe::Grammar(_) => {
                    (declared - achieved).abs() <= BITS_EPSILON
                        && (entry.bits as f64 - achieved).abs() <= BITS_EPSILON
                }
                Recipe::Digits(_) => achieved.round() as u32 == entry.bits,
            };
            if !consistent {
                return Err(Error::InconsistentEntry {
                    kind: self.kind,
                    bits: entry.bits,
                    label: entry.label.clone(),
                    declared,
                    achieved,
                });
            }
            reports.push(EntryReport {
                kind: self.kind,
                bits: entry.bits,
                label: entry.label.clone(),
                primary: self.primary.contains(&entry.bits),
                declared,
                achieved,
            });
        }
        Ok(reports)
    }
}

fn digits_entry(digits: usize) -> RegistryEntry {
    RegistryEntry {
        bits: digits_bits(digits).round() as u32,
        label: format!("{} digits", digits),
        recipe: Recipe::Digits(digits),
    }
}

/// Registries for every kind of secret.
#[derive(Debug, Clone)]
pub struct Registries {
    passphrase: Registry,
    username: Registry,
    passcode: Registry,
}

impl Registries {
    /// Built-in registries for a corpus.
    pub fn builtin(corpus: &Corpus) -> Result<Self> {
        Ok(Self {
            passphrase: Registry::from_grammars(
                SecretKind::Passphrase,
                corpus,
                PASSPHRASE.iter().copied(),
                PASSPHRASE_PRIMARY.iter().copied(),
            )?,
            username: Registry::from_grammars(
                SecretKind::Username,
                corpus,
                USERNAME.iter().copied(),
                USERNAME_PRIMARY.iter().copied(),
            )?,
            passcode: Registry::from_digits(
                PASSCODE.iter().copied(),
                PASSCODE_PRIMARY.iter().copied(),
            )?,
        })
    }

    /// Registry for a kind of secret.
    pub fn get(&self, kind: SecretKind) -> &Registry {
        match kind {
            SecretKind::Passphrase => &self.passphrase,
            SecretKind::Username => &self.username,
            SecretKind::Passcode => &self.passcode,
        }
    }

    /// Replace the registry for the kind of the given registry.
    pub fn replace(&mut self, registry: Registry) -> Registry {
        let slot = match registry.kind() {
            SecretKind::Passphrase => &mut self.passphrase,
            SecretKind::Username => &mut self.username,
            SecretKind::Passcode => &mut self.passcode,
        };
        std::mem::replace(slot, registry)
    }

    /// Check every registry against a corpus.
    pub fn verify(&self, corpus: &Corpus) -> Result<Vec<EntryReport>> {
        let mut reports = self.passphrase.verify(corpus)?;
        reports.extend(self.username.verify(corpus)?);
        reports.extend(self.passcode.verify(corpus)?);
        Ok(reports)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use anyhow::Result;

    #[test]
    fn builtin_registries_are_consistent() -> Result<()> {
        let corpus = Corpus::builtin();
        let registries = Registries::builtin(&corpus)?;
        let reports = registries.verify(&corpus)?;
        assert_eq!(
            PASSPHRASE.len() + USERNAME.len() + PASSCODE.len(),
            reports.len()
        );
        Ok(())
    }

    #[test]
    fn grammars_round_trip() -> Result<()> {
        let corpus = Corpus::builtin();
        for (_, _, source) in PASSPHRASE.iter().chain(USERNAME.iter()) {
            let grammar = Grammar::parse(source, &corpus)?;
            assert_eq!(*source, grammar.to_string());
        }
        Ok(())
    }

    #[test]
    fn labels_follow_declared_order() -> Result<()> {
        let corpus = Corpus::builtin();
        let registries = Registries::builtin(&corpus)?;
        let passphrase = registries.get(SecretKind::Passphrase);
        let primary: Vec<(u32, String)> = passphrase
            .labels(Scope::Primary)
            .into_iter()
            .map(|l| (l.bits, l.label))
            .collect();
        assert_eq!(
            vec![
                (34, "Simple".to_owned()),
                (42, "Standard".to_owned()),
                (50, "Strong".to_owned()),
                (67, "Paranoid".to_owned()),
            ],
            primary
        );
        assert_eq!(PASSPHRASE.len(), passphrase.labels(Scope::All).len());

        let passcode = registries.get(SecretKind::Passcode);
        let labels = passcode.labels(Scope::Primary);
        assert_eq!(20, labels[0].bits);
        assert_eq!("6 digits", labels[0].label);
        assert_eq!(33, labels[1].bits);
        Ok(())
    }

    #[test]
    fn primary_is_subset_of_all() -> Result<()> {
        let corpus = Corpus::builtin();
        let registries = Registries::builtin(&corpus)?;
        for kind in
            [SecretKind::Passphrase, SecretKind::Username, SecretKind::Passcode]
        {
            let registry = registries.get(kind);
            for label in registry.labels(Scope::Primary) {
                assert!(registry.get(label.bits).is_some());
            }
        }
        Ok(())
    }

    #[test]
    fn inconsistent_entry_fails() -> Result<()> {
        let corpus = Corpus::builtin();
        // Declares 22 bits under a 24 bit key
        let registry = Registry::from_grammars(
            SecretKind::Username,
            &corpus,
            [(24, "Simple", "adj:8| |noun-concrete:8| |number:6")],
            [24],
        )?;
        assert!(matches!(
            registry.verify(&corpus),
            Err(Error::InconsistentEntry { bits: 24, .. })
        ));

        // Requests more bits than the corpus can supply
        let registry = Registry::from_grammars(
            SecretKind::Username,
            &corpus,
            [(28, "Animate", "adj-animate:9| |noun-animate:9| |number:10")],
            std::iter::empty::<u32>(),
        )?;
        match registry.verify(&corpus) {
            Err(Error::InconsistentEntry {
                declared, achieved, ..
            }) => {
                assert_eq!(28.0, declared);
                assert_eq!(26.0, achieved);
            }
            other => panic!("unexpected {:?}", other),
        }
        Ok(())
    }

    #[test]
    fn duplicate_and_unknown_keys() -> Result<()> {
        let corpus = Corpus::builtin();
        let result = Registry::from_grammars(
            SecretKind::Passphrase,
            &corpus,
            [(16, "A", "adj:8| |verb-s:8"), (16, "B", "adj:8|-|verb-s:8")],
            std::iter::empty::<u32>(),
        );
        assert!(matches!(result, Err(Error::DuplicateKey { bits: 16, .. })));

        let result = Registry::from_grammars(
            SecretKind::Passphrase,
            &corpus,
            [(16, "A", "adj:8| |verb-s:8")],
            [17],
        );
        assert!(matches!(result, Err(Error::UnknownKey { bits: 17, .. })));
        Ok(())
    }

    #[test]
    fn closest_prefers_earlier_on_tie() -> Result<()> {
        let corpus = Corpus::builtin();
        let registries = Registries::builtin(&corpus)?;
        let username = registries.get(SecretKind::Username);
        assert_eq!(22, username.closest(0.0).unwrap().bits);
        assert_eq!(24, username.closest(25.0).unwrap().bits);
        assert_eq!(32, username.closest(34.0).unwrap().bits);
        assert_eq!(36, username.closest(100.0).unwrap().bits);
        assert!(username.closest(f64::NAN).is_none());
        Ok(())
    }

    #[test]
    fn kind_from_str() -> Result<()> {
        assert_eq!(SecretKind::Passcode, "passcode".parse()?);
        assert_eq!("username", SecretKind::Username.to_string());
        assert!("pin".parse::<SecretKind>().is_err());
        Ok(())
    }
}
