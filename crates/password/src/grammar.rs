//! Parser for the pipe delimited grammar language.
use crate::{Corpus, Error, Result};
use parking_lot::Mutex;
use std::{collections::HashMap, fmt, sync::Arc};

/// Token delimiter.
const DELIMITER: char = '|';

/// Token in a grammar.
#[derive(Debug, Clone, PartialEq)]
pub enum GrammarToken {
    /// Reference to a corpus category and the bits
    /// of entropy the token should contribute.
    Category {
        /// Category name.
        name: String,
        /// Requested bits.
        bits: f64,
    },
    /// Fixed text emitted verbatim.
    Literal(String),
}

impl fmt::Display for GrammarToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Category { name, bits } => write!(f, "{}:{}", name, bits),
            Self::Literal(text) => write!(f, "{}", text),
        }
    }
}

/// Compiled grammar.
#[derive(Debug, Clone, PartialEq)]
pub struct Grammar {
    tokens: Vec<GrammarToken>,
    bits: f64,
}

impl Grammar {
    /// Parse a grammar.
    ///
    /// Every category must exist in the corpus.
    pub fn parse(source: &str, corpus: &Corpus) -> Result<Self> {
        let tokens = source
            .split(DELIMITER)
            .map(|token| parse_token(token, corpus))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_tokens(tokens))
    }

    /// Create a grammar from tokens.
    pub fn from_tokens(tokens: Vec<GrammarToken>) -> Self {
        let bits = tokens
            .iter()
            .map(|token| match token {
                GrammarToken::Category { bits, .. } => *bits,
                GrammarToken::Literal(_) => 0.0,
            })
            .sum();
        Self { tokens, bits }
    }

    /// Tokens in order.
    pub fn tokens(&self) -> &[GrammarToken] {
        &self.tokens
    }

    /// Declared bits; the sum of the requested bits
    /// of every category token.
    pub fn bits(&self) -> f64 {
        self.bits
    }

    /// Category references in order.
    pub fn categories(&self) -> impl Iterator<Item = (&str, f64)> {
        self.tokens.iter().filter_map(|token| match token {
            GrammarToken::Category { name, bits } => {
                Some((name.as_str(), *bits))
            }
            GrammarToken::Literal(_) => None,
        })
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, token) in self.tokens.iter().enumerate() {
            if index > 0 {
                write!(f, "{}", DELIMITER)?;
            }
            write!(f, "{}", token)?;
        }
        Ok(())
    }
}

fn is_category_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

fn parse_token(token: &str, corpus: &Corpus) -> Result<GrammarToken> {
    match token.split_once(':') {
        Some((name, bits)) if is_category_name(name) => {
            let bits: f64 = bits
                .parse()
                .map_err(|_| Error::MalformedToken(token.to_owned()))?;
            if !bits.is_finite() || bits < 0.0 {
                return Err(Error::MalformedToken(token.to_owned()));
            }
            if !corpus.contains(name) {
                return Err(Error::UnknownCategory(name.to_owned()));
            }
            Ok(GrammarToken::Category {
                name: name.to_owned(),
                bits,
            })
        }
        _ => Ok(GrammarToken::Literal(token.to_owned())),
    }
}

/// Cache of parsed grammars keyed by source text.
///
/// A cache must only be used with a single corpus.
#[derive(Debug, Default)]
pub struct GrammarCache {
    grammars: Mutex<HashMap<String, Arc<Grammar>>>,
}

impl GrammarCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Default::default()
    }

    /// Parse a grammar or return a previously parsed grammar.
    pub fn parse(&self, source: &str, corpus: &Corpus) -> Result<Arc<Grammar>> {
        if let Some(grammar) = self.grammars.lock().get(source) {
            return Ok(Arc::clone(grammar));
        }
        let grammar = Arc::new(Grammar::parse(source, corpus)?);
        self.grammars
            .lock()
            .insert(source.to_owned(), Arc::clone(&grammar));
        Ok(grammar)
    }

    /// Number of cached grammars.
    pub fn len(&self) -> usize {
        self.grammars.lock().len()
    }

    /// Determine if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
