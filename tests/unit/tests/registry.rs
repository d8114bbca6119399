use anyhow::Result;
use mnemo_password::{
    Corpus, Error, Grammar, Registries, Registry, Scope, SecretGenerator,
    SecretKind,
};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn primary_labels() -> Result<()> {
    let generator = SecretGenerator::builtin()?;
    let labels = |kind| -> Vec<(u32, String)> {
        generator
            .labels(kind, Scope::Primary)
            .into_iter()
            .map(|l| (l.bits, l.label))
            .collect()
    };
    assert_eq!(
        vec![
            (22, "Simple".to_owned()),
            (24, "Standard".to_owned()),
            (30, "Whatever".to_owned()),
            (36, "Complex".to_owned()),
        ],
        labels(SecretKind::Username)
    );
    assert_eq!(
        vec![(20, "6 digits".to_owned()), (33, "10 digits".to_owned())],
        labels(SecretKind::Passcode)
    );
    Ok(())
}

#[test]
fn registry_grammars_round_trip() -> Result<()> {
    let generator = SecretGenerator::builtin()?;
    for kind in [SecretKind::Passphrase, SecretKind::Username] {
        let registry = generator.registries().get(kind);
        for entry in registry.entries(Scope::All) {
            if let mnemo_password::Recipe::Grammar(grammar) = &entry.recipe {
                let source = grammar.to_string();
                let parsed = Grammar::parse(&source, generator.corpus())?;
                assert_eq!(**grammar, parsed);
            }
        }
    }
    Ok(())
}

#[test]
fn small_word_list_fails_self_check() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "# too short")?;
    for word in ["ant", "bee", "cat", "dog"] {
        writeln!(file, "{}", word)?;
    }

    let mut corpus = Corpus::builtin();
    corpus.load_words("adj", file.path())?;
    assert_eq!(4, corpus.category("adj")?.len());

    let registries = Registries::builtin(&corpus)?;
    let result = SecretGenerator::new(corpus, registries);
    assert!(matches!(
        result,
        Err(Error::InconsistentEntry {
            kind: SecretKind::Passphrase,
            bits: 26,
            ..
        })
    ));
    Ok(())
}

#[test]
fn replace_registry() -> Result<()> {
    let corpus = Corpus::builtin();
    let mut registries = Registries::builtin(&corpus)?;
    let replacement = Registry::from_grammars(
        SecretKind::Username,
        &corpus,
        [(16, "Short", "adj:8|noun-animate:8")],
        [16],
    )?;
    let previous = registries.replace(replacement);
    assert_eq!(5, previous.len());

    let generator = SecretGenerator::new(corpus, registries)?;
    let mut rng = rand::thread_rng();
    let username = generator.username(30.0, &mut rng)?;
    assert_eq!("Short", username.label());
    assert_eq!(16.0, username.bits());
    Ok(())
}

#[test]
fn unknown_category_in_registry() {
    let corpus = Corpus::builtin();
    let result = Registry::from_grammars(
        SecretKind::Passphrase,
        &corpus,
        [(16, "Dragons", "dragon:8| |adj:8")],
        std::iter::empty::<u32>(),
    );
    assert!(matches!(result, Err(Error::UnknownCategory(name)) if name == "dragon"));
}
