//! Generator for secrets described by registry grammars.
use crate::{
    assemble, csprng, sample, sample_digits, username_components, Corpus,
    Error, Grammar, GrammarCache, Label, Recipe, Registries, Result, Scope,
    SecretKind, Token, TokenRole,
};
use rand::Rng;
use secrecy::SecretString;
use std::sync::Arc;
use zeroize::Zeroize;

/// Generated secret.
#[derive(Debug, Clone)]
pub struct GeneratedSecret {
    bits: f64,
    label: String,
    tokens: Vec<Token>,
    text: String,
}

impl GeneratedSecret {
    fn new(label: impl Into<String>, tokens: Vec<Token>, bits: f64) -> Self {
        let text = assemble(&tokens);
        Self {
            bits,
            label: label.into(),
            tokens,
            text,
        }
    }

    /// Achieved bits of entropy.
    pub fn bits(&self) -> f64 {
        self.bits
    }

    /// Label for the secret.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Tokens the secret was assembled from.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Secret text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Copy of this secret without the tokens drawn from a category.
    ///
    /// The literal separating a removed token from its neighbour is
    /// removed with it so the text never starts or ends with a
    /// separator. The bits are the sum of the remaining token bits.
    pub fn without_category(&self, name: &str) -> Self {
        let mut tokens: Vec<Token> = Vec::with_capacity(self.tokens.len());
        let mut skip_literal = false;
        for token in &self.tokens {
            if token.is_category(name) {
                if tokens.last().map(Token::is_literal).unwrap_or(false) {
                    tokens.pop();
                } else if tokens.is_empty() {
                    skip_literal = true;
                }
                continue;
            }
            if skip_literal && token.is_literal() {
                skip_literal = false;
                continue;
            }
            skip_literal = false;
            tokens.push(token.clone());
        }
        let bits = tokens.iter().map(|token| token.bits).sum();
        Self::new(self.label.clone(), tokens, bits)
    }

    /// Secret text wrapped for transfer out of the process.
    pub fn to_secret_string(&self) -> SecretString {
        SecretString::from(self.text.clone())
    }
}

impl Drop for GeneratedSecret {
    fn drop(&mut self) {
        self.text.zeroize();
        self.tokens.iter_mut().for_each(Zeroize::zeroize);
    }
}

/// Display options for usernames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UsernameStyle {
    /// Whether the trailing number is shown.
    pub include_number: bool,
    /// Whether each word starts with an upper case letter.
    pub capitalize: bool,
}

impl Default for UsernameStyle {
    fn default() -> Self {
        Self {
            include_number: true,
            capitalize: false,
        }
    }
}

/// Component of a username.
#[derive(Debug, Clone, PartialEq)]
pub struct UsernameComponent {
    /// Lower case text.
    pub text: String,
    /// Presentation role.
    pub role: TokenRole,
    /// Bits of entropy for the component.
    pub bits: f64,
}

/// Generated username.
#[derive(Debug, Clone)]
pub struct Username {
    label: String,
    components: Vec<UsernameComponent>,
    text: String,
}

impl Username {
    /// Create a username from a generated secret.
    pub fn from_secret(secret: &GeneratedSecret) -> Self {
        let components: Vec<UsernameComponent> =
            username_components(secret.tokens())
                .into_iter()
                .map(|(text, role, bits)| UsernameComponent { text, role, bits })
                .collect();
        let mut username = Self {
            label: secret.label().to_owned(),
            components,
            text: String::new(),
        };
        username.text = username.render(&UsernameStyle::default());
        username
    }

    /// Label of the registry entry.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Username components.
    pub fn components(&self) -> &[UsernameComponent] {
        &self.components
    }

    /// Username with the default style.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Bits of entropy for every component.
    pub fn bits(&self) -> f64 {
        self.components.iter().map(|c| c.bits).sum()
    }

    fn visible<'a>(
        &'a self,
        style: &'a UsernameStyle,
    ) -> impl Iterator<Item = &'a UsernameComponent> + 'a {
        let last = self.components.len().saturating_sub(1);
        self.components.iter().enumerate().filter_map(move |(index, c)| {
            let hidden = !style.include_number
                && index == last
                && c.role == TokenRole::Number;
            (!hidden).then_some(c)
        })
    }

    /// Bits of entropy for the components shown with a style.
    pub fn display_bits(&self, style: &UsernameStyle) -> f64 {
        self.visible(style).map(|c| c.bits).sum()
    }

    /// Render the username with a style.
    pub fn render(&self, style: &UsernameStyle) -> String {
        self.visible(style)
            .map(|c| match c.role {
                TokenRole::Word(_) if style.capitalize => capitalize(&c.text),
                _ => c.text.clone(),
            })
            .collect()
    }
}

impl Drop for Username {
    fn drop(&mut self) {
        self.text.zeroize();
        for component in self.components.iter_mut() {
            component.text.zeroize();
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Generates secrets from a corpus and registries.
///
/// Every registry entry is checked against the corpus when
/// the generator is created so generation from a registry
/// entry cannot fail afterwards.
#[derive(Debug)]
pub struct SecretGenerator {
    corpus: Arc<Corpus>,
    registries: Registries,
    cache: GrammarCache,
}

impl SecretGenerator {
    /// Create a generator.
    pub fn new(corpus: Corpus, registries: Registries) -> Result<Self> {
        let reports = registries.verify(&corpus)?;
        tracing::debug!(
            categories = corpus.len(),
            entries = reports.len(),
            "generator::new",
        );
        Ok(Self {
            corpus: Arc::new(corpus),
            registries,
            cache: GrammarCache::new(),
        })
    }

    /// Generator for the built-in corpus and registries.
    pub fn builtin() -> Result<Self> {
        let corpus = Corpus::builtin();
        let registries = Registries::builtin(&corpus)?;
        Self::new(corpus, registries)
    }

    /// Corpus used for generation.
    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// Registries used for generation.
    pub fn registries(&self) -> &Registries {
        &self.registries
    }

    /// Labels for a kind of secret in display order.
    pub fn labels(&self, kind: SecretKind, scope: Scope) -> Vec<Label> {
        self.registries.get(kind).labels(scope)
    }

    /// Parse a grammar against the corpus of this generator.
    pub fn parse(&self, source: &str) -> Result<Arc<Grammar>> {
        self.cache.parse(source, &self.corpus)
    }

    /// Generate a secret from a grammar.
    pub fn generate_secret<R: Rng + ?Sized>(
        &self,
        label: impl Into<String>,
        grammar: &Grammar,
        rng: &mut R,
    ) -> Result<GeneratedSecret> {
        let (tokens, bits) = sample(&self.corpus, grammar, rng)?;
        let secret = GeneratedSecret::new(label, tokens, bits);
        tracing::debug!(
            label = %secret.label,
            bits = secret.bits,
            tokens = secret.tokens.len(),
            "generator::generate_secret",
        );
        Ok(secret)
    }

    /// Generate a secret for a registry entry.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        kind: SecretKind,
        bits: u32,
        rng: &mut R,
    ) -> Result<GeneratedSecret> {
        let entry = self
            .registries
            .get(kind)
            .get(bits)
            .ok_or(Error::NoRegistryEntry { kind, bits })?;
        match &entry.recipe {
            Recipe::Grammar(grammar) => {
                self.generate_secret(entry.label.as_str(), grammar, rng)
            }
            Recipe::Digits(digits) => {
                let (token, bits) = sample_digits(*digits, rng);
                Ok(GeneratedSecret::new(
                    entry.label.as_str(),
                    vec![token],
                    bits,
                ))
            }
        }
    }

    /// Generate a secret for every registry entry in a scope.
    pub fn generate_all<R: Rng + ?Sized>(
        &self,
        kind: SecretKind,
        scope: Scope,
        rng: &mut R,
    ) -> Result<Vec<GeneratedSecret>> {
        self.registries
            .get(kind)
            .entries(scope)
            .into_iter()
            .map(|entry| self.generate(kind, entry.bits, rng))
            .collect()
    }

    /// Generate a passcode of uniformly random digits.
    pub fn passcode<R: Rng + ?Sized>(
        &self,
        digits: usize,
        rng: &mut R,
    ) -> GeneratedSecret {
        let (token, bits) = sample_digits(digits, rng);
        GeneratedSecret::new(format!("{} digits", digits), vec![token], bits)
    }

    /// Generate a username for the registry entry closest
    /// to the requested bits.
    pub fn username<R: Rng + ?Sized>(
        &self,
        bits: f64,
        rng: &mut R,
    ) -> Result<Username> {
        let kind = SecretKind::Username;
        let entry = self.registries.get(kind).closest(bits).ok_or(
            Error::NoRegistryEntry {
                kind,
                bits: bits.max(0.0).round() as u32,
            },
        )?;
        let secret = self.generate(kind, entry.bits, rng)?;
        Ok(Username::from_secret(&secret))
    }

    /// Generate a secret for a registry entry using the
    /// operating system random number generator.
    pub fn one(&self, kind: SecretKind, bits: u32) -> Result<GeneratedSecret> {
        self.generate(kind, bits, &mut csprng())
    }
}
