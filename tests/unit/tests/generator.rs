use anyhow::Result;
use mnemo_password::{
    classify, Corpus, Grammar, Registries, Scope, SecretGenerator,
    SecretKind, TokenRole, NUMBER,
};
use rand::{rngs::StdRng, SeedableRng};
use secrecy::ExposeSecret;

#[test]
fn generate_two_words_and_a_number() -> Result<()> {
    let generator = SecretGenerator::builtin()?;
    let grammar = generator.parse("adj:8| |noun-concrete:8| |number:6")?;
    let adj = generator.corpus().category("adj")?.sub_list(8.0);
    let nouns = generator.corpus().category("noun-concrete")?.sub_list(8.0);

    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..50 {
        let secret = generator.generate_secret("Simple", &grammar, &mut rng)?;
        assert_eq!(22.0, secret.bits());
        let parts: Vec<&str> = secret.text().split(' ').collect();
        assert_eq!(3, parts.len());
        assert!((0..adj.size()).any(|i| adj.get(i).unwrap() == parts[0]));
        assert!((0..nouns.size()).any(|i| nouns.get(i).unwrap() == parts[1]));
        assert!(parts[2].parse::<u32>()? < 64);
        assert_eq!(
            vec![
                TokenRole::Word(0),
                TokenRole::Literal,
                TokenRole::Word(1),
                TokenRole::Literal,
                TokenRole::Number,
            ],
            classify(secret.tokens())
        );
    }
    Ok(())
}

#[test]
fn generate_passcode() -> Result<()> {
    let generator = SecretGenerator::builtin()?;
    let mut rng = StdRng::seed_from_u64(2);
    let secret = generator.passcode(6, &mut rng);
    assert_eq!(6, secret.text().len());
    assert!(secret.text().chars().all(|c| c.is_ascii_digit()));
    assert!((secret.bits() - 1e6f64.log2()).abs() < 1e-9);
    Ok(())
}

#[test]
fn generate_with_os_rng() -> Result<()> {
    let generator = SecretGenerator::builtin()?;
    let secret = generator.one(SecretKind::Passphrase, 50)?;
    assert_eq!(50.0, secret.bits());
    assert_eq!("Strong", secret.label());
    assert_eq!(6, secret.text().split(' ').count());
    assert_eq!(secret.text(), secret.to_secret_string().expose_secret());
    Ok(())
}

#[test]
fn labels_are_stable_across_generations() -> Result<()> {
    let generator = SecretGenerator::builtin()?;
    let mut rng = StdRng::seed_from_u64(3);
    let labels = generator.labels(SecretKind::Passphrase, Scope::Primary);
    let first = generator.generate_all(
        SecretKind::Passphrase,
        Scope::Primary,
        &mut rng,
    )?;
    let second = generator.generate_all(
        SecretKind::Passphrase,
        Scope::Primary,
        &mut rng,
    )?;
    for ((label, a), b) in labels.iter().zip(first.iter()).zip(second.iter())
    {
        assert_eq!(label.label, a.label());
        assert_eq!(a.label(), b.label());
        assert_eq!(a.bits(), b.bits());
    }
    Ok(())
}

#[test]
fn paranoid_has_literal_conjunction() -> Result<()> {
    let generator = SecretGenerator::builtin()?;
    let mut rng = StdRng::seed_from_u64(4);
    let secret = generator.generate(SecretKind::Passphrase, 67, &mut rng)?;
    assert!(secret.text().contains(" and "));
    let trailing = secret.tokens().last().unwrap();
    assert!(trailing.is_category(NUMBER));
    let shorter = secret.without_category(NUMBER);
    assert_eq!(59.0, shorter.bits());
    let (words, number) = secret.text().rsplit_once(' ').unwrap();
    assert_eq!(trailing.text, number);
    assert_eq!(words, shorter.text());
    Ok(())
}

#[test]
fn custom_corpus_generator() -> Result<()> {
    let mut corpus = Corpus::builtin();
    corpus.insert_words("planet", "mercury\nvenus\nearth\nmars\n");
    let registries = Registries::builtin(&corpus)?;
    let generator = SecretGenerator::new(corpus, registries)?;
    let grammar = Grammar::parse("planet:2|-|number:4", generator.corpus())?;
    let mut rng = StdRng::seed_from_u64(5);
    let secret = generator.generate_secret("Planet", &grammar, &mut rng)?;
    assert_eq!(6.0, secret.bits());
    let (planet, number) = secret.text().split_once('-').unwrap();
    assert!(["mercury", "venus", "earth", "mars"].contains(&planet));
    assert!(number.parse::<u32>()? < 16);
    Ok(())
}
