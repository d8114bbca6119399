//! Categorized word and digit lists.
use crate::{Error, Result};
use indexmap::IndexMap;
use rand::Rng;
use std::{borrow::Cow, path::Path};

/// Name of the numeric category.
pub const NUMBER: &str = "number";

/// Number of elements in the built-in numeric category.
pub const NUMBER_CAPACITY: u64 = 1_000_000;

const BUILTIN: &[(&str, &str)] = &[
    ("adj", include_str!("../wordlists/adj.txt")),
    ("adj-animate", include_str!("../wordlists/adj-animate.txt")),
    ("adj-concrete", include_str!("../wordlists/adj-concrete.txt")),
    ("noun-concrete", include_str!("../wordlists/noun-concrete.txt")),
    ("noun-animate", include_str!("../wordlists/noun-animate.txt")),
    ("verb-s", include_str!("../wordlists/verb-s.txt")),
];

/// Parse a word list.
///
/// Expects one word per line, blank lines and lines
/// starting with `#` are ignored. Order is preserved.
pub fn parse_word_list(source: &str) -> Vec<String> {
    source
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(ToOwned::to_owned)
        .collect()
}

/// Number of elements needed to hold the given bits of entropy.
///
/// This is `2^bits` rounded up to a whole number of elements;
/// values within floating point noise of an integer are rounded
/// to that integer so `log2(10)` bits yields ten elements.
pub fn size_for_bits(bits: f64) -> u64 {
    let raw = bits.exp2();
    let rounded = raw.round();
    let size = if (raw - rounded).abs() <= crate::BITS_EPSILON * rounded.max(1.0)
    {
        rounded
    } else {
        raw.ceil()
    };
    size.max(1.0) as u64
}

/// Source of elements for a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Category {
    /// Ordered list of words.
    Words(Vec<String>),
    /// Decimal numbers in the range `0..capacity`.
    Number {
        /// Number of distinct values.
        capacity: u64,
    },
}

impl Category {
    /// Number of elements in the category.
    pub fn len(&self) -> u64 {
        match self {
            Self::Words(words) => words.len() as u64,
            Self::Number { capacity } => *capacity,
        }
    }

    /// Determine if this category has no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Bits of entropy for a single draw from the full list.
    pub fn bits(&self) -> f64 {
        self.sub_list(f64::INFINITY).bits()
    }

    /// Smallest prefix of this category that holds at
    /// least `bits` of entropy.
    ///
    /// When the category is too small for the request the
    /// full list is returned.
    pub fn sub_list(&self, bits: f64) -> SubList<'_> {
        let wanted = if bits.is_finite() {
            size_for_bits(bits)
        } else {
            u64::MAX
        };
        SubList {
            category: self,
            size: wanted.min(self.len()),
        }
    }
}

/// Prefix of a category used for a single draw.
#[derive(Debug, Clone, Copy)]
pub struct SubList<'a> {
    category: &'a Category,
    size: u64,
}

impl<'a> SubList<'a> {
    /// Number of elements in the prefix.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Entropy of a uniform draw from this prefix.
    pub fn bits(&self) -> f64 {
        if self.size == 0 {
            0.0
        } else {
            (self.size as f64).log2()
        }
    }

    /// Element at an index in the prefix.
    pub fn get(&self, index: u64) -> Option<Cow<'a, str>> {
        if index >= self.size {
            return None;
        }
        match self.category {
            Category::Words(words) => usize::try_from(index)
                .ok()
                .and_then(|index| words.get(index))
                .map(|word| Cow::Borrowed(word.as_str())),
            Category::Number { .. } => Some(Cow::Owned(index.to_string())),
        }
    }

    /// Draw an element uniformly at random.
    ///
    /// `Rng::gen_range` uses rejection sampling so there is
    /// no modulo bias for prefix sizes that are not a power
    /// of two.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Cow<'a, str>> {
        if self.size == 0 {
            return None;
        }
        self.get(rng.gen_range(0..self.size))
    }
}

/// Named categories of words and numbers.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    categories: IndexMap<String, Category>,
}

impl Corpus {
    /// Create an empty corpus.
    pub fn new() -> Self {
        Default::default()
    }

    /// Corpus with the built-in word lists and the
    /// `number` category.
    pub fn builtin() -> Self {
        let mut corpus = Self::new();
        for (name, source) in BUILTIN {
            corpus.insert_words(*name, source);
        }
        corpus.insert(
            NUMBER,
            Category::Number {
                capacity: NUMBER_CAPACITY,
            },
        );
        corpus
    }

    /// Add or replace a category.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        category: Category,
    ) -> Option<Category> {
        self.categories.insert(name.into(), category)
    }

    /// Add or replace a word category from word list source text.
    pub fn insert_words(
        &mut self,
        name: impl Into<String>,
        source: &str,
    ) -> Option<Category> {
        self.insert(name, Category::Words(parse_word_list(source)))
    }

    /// Add or replace a word category from a word list file.
    pub fn load_words(
        &mut self,
        name: impl Into<String>,
        path: impl AsRef<Path>,
    ) -> Result<()> {
        let name = name.into();
        let source = std::fs::read_to_string(path.as_ref())?;
        let words = parse_word_list(&source);
        tracing::debug!(
            category = %name,
            words = words.len(),
            path = %path.as_ref().display(),
            "corpus::load_words",
        );
        self.insert(name, Category::Words(words));
        Ok(())
    }

    /// Get a category by name.
    pub fn get(&self, name: &str) -> Option<&Category> {
        self.categories.get(name)
    }

    /// Get a category by name or fail with an unknown category error.
    pub fn category(&self, name: &str) -> Result<&Category> {
        self.get(name)
            .ok_or_else(|| Error::UnknownCategory(name.to_owned()))
    }

    /// Determine if the corpus has a category.
    pub fn contains(&self, name: &str) -> bool {
        self.categories.contains_key(name)
    }

    /// Iterate the categories in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Category)> {
        self.categories
            .iter()
            .map(|(name, category)| (name.as_str(), category))
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Determine if the corpus has no categories.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
