//! Random selection of grammar tokens.
use crate::{Corpus, Error, Grammar, GrammarToken, Result, SubList, DIGITS};
use rand::Rng;
use zeroize::Zeroize;

/// Category name assigned to passcode digit tokens.
pub const DIGITS_CATEGORY: &str = "digits";

/// Token drawn for a secret.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// Text for the token.
    pub text: String,
    /// Category the token was drawn from; `None` for literals.
    pub category: Option<String>,
    /// Bits of entropy achieved by the draw.
    pub bits: f64,
}

impl Token {
    /// Create a literal token.
    pub fn literal(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            category: None,
            bits: 0.0,
        }
    }

    /// Determine if this token is a literal.
    pub fn is_literal(&self) -> bool {
        self.category.is_none()
    }

    /// Determine if this token was drawn from a category.
    pub fn is_category(&self, name: &str) -> bool {
        self.category.as_deref() == Some(name)
    }
}

impl Zeroize for Token {
    fn zeroize(&mut self) {
        self.text.zeroize();
    }
}

fn sub_list<'c>(
    corpus: &'c Corpus,
    name: &str,
    bits: f64,
) -> Result<SubList<'c>> {
    let list = corpus.category(name)?.sub_list(bits);
    if list.size() == 0 {
        return Err(Error::EmptyCategory(name.to_owned()));
    }
    Ok(list)
}

/// Draw every token of a grammar.
///
/// Returns the tokens and the achieved bits of entropy which is
/// the sum of `log2(size)` for the prefix each category token
/// was drawn from.
pub fn sample<R: Rng + ?Sized>(
    corpus: &Corpus,
    grammar: &Grammar,
    rng: &mut R,
) -> Result<(Vec<Token>, f64)> {
    let mut tokens = Vec::with_capacity(grammar.tokens().len());
    let mut achieved = 0.0;
    for token in grammar.tokens() {
        match token {
            GrammarToken::Literal(text) => {
                tokens.push(Token::literal(text.as_str()))
            }
            GrammarToken::Category { name, bits } => {
                let list = sub_list(corpus, name, *bits)?;
                let text = list
                    .choose(rng)
                    .ok_or_else(|| Error::EmptyCategory(name.clone()))?;
                achieved += list.bits();
                tokens.push(Token {
                    text: text.into_owned(),
                    category: Some(name.clone()),
                    bits: list.bits(),
                });
            }
        }
    }
    Ok((tokens, achieved))
}

/// Bits of entropy a grammar achieves with a corpus
/// without drawing any tokens.
pub fn achieved_bits(corpus: &Corpus, grammar: &Grammar) -> Result<f64> {
    let mut achieved = 0.0;
    for (name, bits) in grammar.categories() {
        achieved += sub_list(corpus, name, bits)?.bits();
    }
    Ok(achieved)
}

/// Draw a string of uniformly random decimal digits.
///
/// Returns a single token and the achieved bits of entropy
/// which is `digits * log2(10)`.
pub fn sample_digits<R: Rng + ?Sized>(
    digits: usize,
    rng: &mut R,
) -> (Token, f64) {
    let text: String = (0..digits)
        .map(|_| DIGITS[rng.gen_range(0..DIGITS.len())])
        .collect();
    let bits = digits as f64 * (DIGITS.len() as f64).log2();
    (
        Token {
            text,
            category: Some(DIGITS_CATEGORY.to_owned()),
            bits,
        },
        bits,
    )
}
