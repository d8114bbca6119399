//! Configuration file for the executable.
use crate::{Error, Result};
use indexmap::IndexMap;
use mnemo_password::{
    Corpus, Grammar, Recipe, Registries, Registry, RegistryEntry,
    SecretGenerator, SecretKind,
};
use mnemo_strength::{CostModel, HashRates};
use serde::{Deserialize, Serialize};
use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

/// Registry entry described by a grammar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrammarEntryConfig {
    /// Target bits of entropy.
    pub bits: u32,
    /// Display label.
    pub label: String,
    /// Grammar source.
    pub grammar: String,
    /// Whether the entry is in the primary view.
    #[serde(default)]
    pub primary: bool,
}

/// Passcode registry entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DigitsEntryConfig {
    /// Number of digits.
    pub digits: usize,
    /// Whether the entry is in the primary view.
    #[serde(default)]
    pub primary: bool,
}

/// Configuration for the executable.
///
/// Every section is optional; missing sections use the
/// built-in word lists, registries and hardware profiles.
#[derive(Default, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct MnemoConfig {
    /// Word list files keyed by category name.
    ///
    /// Relative paths are resolved against the directory
    /// of the configuration file.
    pub words: IndexMap<String, PathBuf>,

    /// Replacement passphrase registry.
    pub passphrase: Option<Vec<GrammarEntryConfig>>,

    /// Replacement username registry.
    pub username: Option<Vec<GrammarEntryConfig>>,

    /// Replacement passcode registry.
    pub passcode: Option<Vec<DigitsEntryConfig>>,

    /// Attacker hardware profiles.
    pub rates: HashRates,

    /// Price of rented guessing hardware.
    pub cost: CostModel,

    /// Path the file was loaded from used to determine
    /// relative paths.
    #[serde(skip)]
    file: Option<PathBuf>,
}

impl MnemoConfig {
    /// Load a configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        if !path.as_ref().is_file() {
            return Err(Error::NotFile(path.as_ref().to_path_buf()));
        }

        let contents = std::fs::read_to_string(path.as_ref())?;
        let mut config: MnemoConfig = toml::from_str(&contents)?;
        config.file = Some(path.as_ref().canonicalize()?);

        let dir = config.directory();
        for file in config.words.values_mut() {
            if file.is_relative() {
                *file = dir.join(&*file);
            }
        }

        tracing::debug!(
            file = %path.as_ref().display(),
            words = config.words.len(),
            "config::load",
        );

        Ok(config)
    }

    /// Parent directory of the configuration file.
    fn directory(&self) -> PathBuf {
        self.file
            .as_ref()
            .and_then(|file| file.parent())
            .map(Path::to_path_buf)
            .unwrap_or_default()
    }

    /// Built-in corpus with the configured word lists.
    pub fn corpus(&self) -> Result<Corpus> {
        let mut corpus = Corpus::builtin();
        for (name, path) in &self.words {
            corpus.load_words(name.as_str(), path)?;
        }
        Ok(corpus)
    }

    /// Built-in registries with configured replacements.
    pub fn registries(&self, corpus: &Corpus) -> Result<Registries> {
        let mut registries = Registries::builtin(corpus)?;
        for (kind, entries) in [
            (SecretKind::Passphrase, &self.passphrase),
            (SecretKind::Username, &self.username),
        ] {
            if let Some(entries) = entries {
                registries.replace(grammar_registry(kind, corpus, entries)?);
            }
        }
        if let Some(entries) = &self.passcode {
            registries.replace(Registry::from_digits(
                entries.iter().map(|entry| entry.digits),
                entries
                    .iter()
                    .filter(|entry| entry.primary)
                    .map(|entry| entry.digits),
            )?);
        }
        Ok(registries)
    }

    /// Generator for the configured corpus and registries.
    ///
    /// Fails when any registry entry does not achieve
    /// the bits of its key.
    pub fn generator(&self) -> Result<Arc<SecretGenerator>> {
        let corpus = self.corpus()?;
        let registries = self.registries(&corpus)?;
        Ok(Arc::new(SecretGenerator::new(corpus, registries)?))
    }
}

fn grammar_registry(
    kind: SecretKind,
    corpus: &Corpus,
    entries: &[GrammarEntryConfig],
) -> Result<Registry> {
    let mut registry = Registry::new(kind);
    for entry in entries {
        registry.insert(RegistryEntry {
            bits: entry.bits,
            label: entry.label.clone(),
            recipe: Recipe::Grammar(Arc::new(Grammar::parse(
                &entry.grammar,
                corpus,
            )?)),
        })?;
    }
    registry.set_primary(
        entries
            .iter()
            .filter(|entry| entry.primary)
            .map(|entry| entry.bits)
            .collect::<Vec<_>>(),
    )?;
    Ok(registry)
}
