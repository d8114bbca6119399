//! Joining sampled tokens into secrets and classifying
//! tokens for presentation.
use crate::{sampler::DIGITS_CATEGORY, Token, NUMBER};

/// Presentation role of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenRole {
    /// Literal separator text.
    Literal,
    /// Number or digits.
    Number,
    /// Word with its zero-based ordinal among the words.
    Word(usize),
}

/// Concatenate token text in order.
///
/// No separators are added; separators are literal
/// tokens of the grammar.
pub fn assemble<'a>(tokens: impl IntoIterator<Item = &'a Token>) -> String {
    tokens.into_iter().map(|token| token.text.as_str()).collect()
}

/// Classify tokens by presentation role.
///
/// Roles are only used for display, they have no
/// effect on entropy accounting.
pub fn classify(tokens: &[Token]) -> Vec<TokenRole> {
    let mut words = 0;
    tokens
        .iter()
        .map(|token| match token.category.as_deref() {
            None => TokenRole::Literal,
            Some(NUMBER) | Some(DIGITS_CATEGORY) => TokenRole::Number,
            Some(_) => {
                let role = TokenRole::Word(words);
                words += 1;
                role
            }
        })
        .collect()
}

/// Username components for a list of tokens.
///
/// Literals are dropped and each component is lowercased with
/// every character outside of `[a-z0-9]` removed.
pub fn username_components(tokens: &[Token]) -> Vec<(String, TokenRole, f64)> {
    tokens
        .iter()
        .zip(classify(tokens))
        .filter(|(_, role)| *role != TokenRole::Literal)
        .map(|(token, role)| {
            let text: String = token
                .text
                .to_lowercase()
                .chars()
                .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
                .collect();
            (text, role, token.bits)
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    fn word(text: &str, category: &str) -> Token {
        Token {
            text: text.to_owned(),
            category: Some(category.to_owned()),
            bits: 8.0,
        }
    }

    fn tokens() -> Vec<Token> {
        vec![
            word("brave", "adj"),
            Token::literal(" "),
            word("otter", "noun-animate"),
            Token::literal(" "),
            word("42", NUMBER),
        ]
    }

    #[test]
    fn assemble_in_order() {
        assert_eq!("brave otter 42", assemble(&tokens()));
    }

    #[test]
    fn assemble_without_number() {
        let tokens = tokens();
        let text =
            assemble(tokens.iter().filter(|token| !token.is_category(NUMBER)));
        assert_eq!("brave otter ", text);
    }

    #[test]
    fn classify_roles() {
        assert_eq!(
            vec![
                TokenRole::Word(0),
                TokenRole::Literal,
                TokenRole::Word(1),
                TokenRole::Literal,
                TokenRole::Number,
            ],
            classify(&tokens())
        );
    }

    #[test]
    fn username_strips_punctuation() {
        let tokens = vec![
            word("O'Brien", "noun-animate"),
            Token::literal(" "),
            word("7", NUMBER),
        ];
        let components = username_components(&tokens);
        assert_eq!(2, components.len());
        assert_eq!("obrien", components[0].0);
        assert_eq!(TokenRole::Word(0), components[0].1);
        assert_eq!("7", components[1].0);
        assert_eq!(TokenRole::Number, components[1].1);
    }
}
