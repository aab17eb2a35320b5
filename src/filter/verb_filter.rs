use std::{collections::BTreeSet, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    annotator::token::{AnnotatedToken, PosTag},
    filter::vocabulary::ReferenceVocabulary,
};

/// Reduces an annotated token sequence to a list of lemmas.
pub trait VerbFilter {
    fn filter(&self, tokens: &[AnnotatedToken]) -> Vec<String>;
}

/// The two filtering behaviours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Sorted, deduplicated lemmas found in the reference vocabulary.
    #[default]
    Bloom,
    /// Every verb-tagged lemma in document order.
    Verbs,
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Bloom => f.write_str("bloom"),
            Variant::Verbs => f.write_str("verbs"),
        }
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bloom" | "blooms" | "taxonomy" => Ok(Variant::Bloom),
            "verbs" | "verb" | "all" => Ok(Variant::Verbs),
            other => Err(format!("unknown variant `{}` (expected bloom or verbs)", other)),
        }
    }
}

/// Lowercased, trimmed lemma.
pub fn normalize_key(lemma: &str) -> String {
    lemma.trim().to_lowercase()
}

pub fn is_alphabetic_key(key: &str) -> bool {
    !key.is_empty() && key.chars().all(char::is_alphabetic)
}

/// Keeps lemmas that belong to the reference vocabulary, sorted and deduplicated.
/// Part-of-speech tags are not consulted.
#[derive(Debug, Clone, Copy)]
pub struct TaxonomyFilter<'a> {
    vocabulary: &'a ReferenceVocabulary,
}

impl<'a> TaxonomyFilter<'a> {
    pub fn new(vocabulary: &'a ReferenceVocabulary) -> Self {
        Self { vocabulary }
    }
}

impl VerbFilter for TaxonomyFilter<'_> {
    fn filter(&self, tokens: &[AnnotatedToken]) -> Vec<String> {
        let matched: BTreeSet<String> = tokens
            .iter()
            .map(|token| normalize_key(&token.lemma))
            .filter(|key| is_alphabetic_key(key) && self.vocabulary.contains(key))
            .collect();
        matched.into_iter().collect()
    }
}

/// Lemmas of all VERB-tagged tokens, unmodified and in document order.
#[derive(Debug, Clone, Copy, Default)]
pub struct VerbTagFilter;

impl VerbFilter for VerbTagFilter {
    fn filter(&self, tokens: &[AnnotatedToken]) -> Vec<String> {
        tokens
            .iter()
            .filter(|token| token.pos == PosTag::Verb)
            .map(|token| token.lemma.clone())
            .collect()
    }
}
