use std::{fs, path::Path};

use log::debug;
use rustc_hash::FxHashMap;

use crate::{
    annotator::token::PosTag,
    error::{ExtractError, Result},
};

/// Lexicon compiled into the binary, also written out by the bundled installer.
pub const BUNDLED_LEXICON: &str = include_str!("../../data/lexicon.tsv");

/// Lemma inventory used by the lemmatizer and tagger.
///
/// Source format, one lemma per line:
/// `lemma<TAB>TAG[|TAG...][<TAB>irregular,forms]`. Blank lines and lines
/// starting with `#` are skipped. The first tag of an entry is its default.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    lemmas: FxHashMap<String, Vec<PosTag>>,
    irregular: FxHashMap<String, Vec<String>>,
}

impl Lexicon {
    pub fn parse(source: &str) -> Result<Self> {
        let mut lexicon = Lexicon::default();

        for (index, raw_line) in source.lines().enumerate() {
            let line_no = index + 1;
            let line = raw_line.trim_end();
            if line.trim().is_empty() || line.trim_start().starts_with('#') {
                continue;
            }

            let fields: Vec<&str> = line.split('\t').collect();
            if fields.len() < 2 || fields.len() > 3 {
                return Err(malformed(line_no, "expected 2 or 3 tab-separated fields"));
            }

            let lemma = fields[0].trim().to_lowercase();
            if lemma.is_empty() {
                return Err(malformed(line_no, "empty lemma"));
            }

            let mut tags = Vec::new();
            for raw_tag in fields[1].split('|') {
                let tag = raw_tag
                    .parse::<PosTag>()
                    .map_err(|reason| malformed(line_no, &reason))?;
                tags.push(tag);
            }

            let forms: Vec<String> = fields
                .get(2)
                .map(|f| {
                    f.split(',')
                        .map(|form| form.trim().to_lowercase())
                        .filter(|form| !form.is_empty())
                        .collect()
                })
                .unwrap_or_default();

            lexicon.insert(lemma, tags, forms);
        }

        debug!(
            "parsed lexicon with {} lemmas and {} irregular forms",
            lexicon.lemmas.len(),
            lexicon.irregular.len()
        );
        Ok(lexicon)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())?;
        Self::parse(&contents)
    }

    pub fn bundled() -> Result<Self> {
        Self::parse(BUNDLED_LEXICON)
    }

    fn insert(&mut self, lemma: String, tags: Vec<PosTag>, forms: Vec<String>) {
        for form in forms {
            let lemmas = self.irregular.entry(form).or_default();
            if !lemmas.contains(&lemma) {
                lemmas.push(lemma.clone());
            }
        }

        let known = self.lemmas.entry(lemma).or_default();
        for tag in tags {
            if !known.contains(&tag) {
                known.push(tag);
            }
        }
    }

    pub fn contains(&self, lemma: &str) -> bool {
        self.lemmas.contains_key(lemma)
    }

    pub fn tags_of(&self, lemma: &str) -> Option<&[PosTag]> {
        self.lemmas.get(lemma).map(Vec::as_slice)
    }

    /// Lemmas for which `form` is listed as an irregular form.
    pub fn irregular_lemmas(&self, form: &str) -> &[String] {
        self.irregular.get(form).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.lemmas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lemmas.is_empty()
    }
}

fn malformed(line: usize, reason: &str) -> ExtractError {
    ExtractError::Lexicon {
        line,
        reason: reason.to_string(),
    }
}
