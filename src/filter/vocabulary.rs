use std::{fs, path::Path};

use log::debug;
use rustc_hash::FxHashSet;

use crate::{
    error::{ExtractError, Result},
    filter::taxonomy::BloomLevel,
};

/// Fixed set of lowercase words lemmas are matched against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceVocabulary {
    words: FxHashSet<String>,
}

impl Default for ReferenceVocabulary {
    fn default() -> Self {
        Self::blooms()
    }
}

impl ReferenceVocabulary {
    /// Union of every Bloom's-taxonomy level.
    pub fn blooms() -> Self {
        let words = BloomLevel::ALL
            .iter()
            .flat_map(|level| level.verbs().iter())
            .map(|word| word.to_string())
            .collect();
        Self { words }
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();
        Self { words }
    }

    /// Reads a JSON array of words.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())?;
        let words: Vec<String> =
            serde_json::from_str(&contents).map_err(ExtractError::Vocabulary)?;
        let vocabulary = Self::from_words(words);
        debug!(
            "loaded {} vocabulary words from {}",
            vocabulary.len(),
            path.as_ref().display()
        );
        Ok(vocabulary)
    }

    pub fn contains(&self, word: &str) -> bool {
        if self.words.contains(word) {
            return true;
        }
        self.words.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}
