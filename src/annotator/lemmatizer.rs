use crate::annotator::{lexicon::Lexicon, token::PosTag};

const NOMINAL_OR_VERBAL: &[PosTag] = &[PosTag::Noun, PosTag::Propn, PosTag::Verb, PosTag::Aux];
const VERBAL: &[PosTag] = &[PosTag::Verb, PosTag::Aux];

/// Regular inflection rules: (suffix, replacement, readings kept).
const INFLECTION_RULES: &[(&str, &str, &[PosTag])] = &[
    ("ies", "y", NOMINAL_OR_VERBAL),
    ("es", "", NOMINAL_OR_VERBAL),
    ("s", "", NOMINAL_OR_VERBAL),
    ("ied", "y", VERBAL),
    ("ed", "", VERBAL),
    ("ed", "e", VERBAL),
    ("ing", "", VERBAL),
    ("ing", "e", VERBAL),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub lemma: String,
    pub tags: Vec<PosTag>,
}

#[derive(Debug, Clone)]
pub struct Lemmatizer {
    lexicon: Lexicon,
}

/// Lowercases and folds typographic apostrophes.
pub fn normalize_form(form: &str) -> String {
    form.to_lowercase().replace('’', "'")
}

impl Lemmatizer {
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    /// All lexicon-backed readings of a surface form. Empty for unknown words.
    pub fn analyze(&self, form: &str) -> Vec<Analysis> {
        let key = normalize_form(form);
        let mut analyses: Vec<Analysis> = Vec::new();

        let direct_hit = if let Some(tags) = self.lexicon.tags_of(&key) {
            push_analysis(&mut analyses, &key, tags.to_vec());
            true
        } else {
            false
        };

        for lemma in self.lexicon.irregular_lemmas(&key) {
            if let Some(tags) = self.lexicon.tags_of(lemma) {
                push_analysis(&mut analyses, lemma, tags.to_vec());
            }
        }

        if !direct_hit {
            for (suffix, replacement, kept) in INFLECTION_RULES {
                let Some(stem) = key.strip_suffix(suffix) else {
                    continue;
                };
                if *suffix == "s" && stem.ends_with('s') {
                    continue;
                }
                for candidate in stem_candidates(stem, replacement) {
                    if let Some(tags) = self.lexicon.tags_of(&candidate) {
                        let readings: Vec<PosTag> =
                            tags.iter().copied().filter(|t| kept.contains(t)).collect();
                        if !readings.is_empty() {
                            push_analysis(&mut analyses, &candidate, readings);
                        }
                    }
                }
            }
        }

        analyses
    }

    /// Lemma for a word with no lexicon reading under `pos`, guided by the tag.
    pub fn fallback_lemma(&self, form: &str, pos: PosTag) -> String {
        if pos == PosTag::Propn {
            return form.to_string();
        }
        let key = normalize_form(form);
        match pos {
            PosTag::Noun => strip_plural(&key),
            PosTag::Verb => strip_verb_inflection(&key),
            _ => key,
        }
    }
}

fn push_analysis(analyses: &mut Vec<Analysis>, lemma: &str, tags: Vec<PosTag>) {
    if let Some(existing) = analyses.iter_mut().find(|a| a.lemma == lemma) {
        for tag in tags {
            if !existing.tags.contains(&tag) {
                existing.tags.push(tag);
            }
        }
    } else {
        analyses.push(Analysis {
            lemma: lemma.to_string(),
            tags,
        });
    }
}

fn stem_candidates(stem: &str, replacement: &str) -> Vec<String> {
    if stem.chars().count() < 2 {
        return Vec::new();
    }
    let mut candidates = vec![format!("{}{}", stem, replacement)];
    // planned -> plan, planning -> plan
    if replacement.is_empty() {
        let chars: Vec<char> = stem.chars().collect();
        if let [.., a, b] = chars.as_slice() {
            if a == b && !is_vowel(*b) {
                candidates.push(chars[..chars.len() - 1].iter().collect());
            }
        }
    }
    candidates
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

fn strip_plural(word: &str) -> String {
    let len = word.chars().count();
    if len > 4 {
        if let Some(stem) = word.strip_suffix("ies") {
            return format!("{}y", stem);
        }
        if let Some(stem) = word.strip_suffix("sses") {
            return format!("{}ss", stem);
        }
    }
    if len > 3
        && word.ends_with('s')
        && !word.ends_with("ss")
        && !word.ends_with("us")
        && !word.ends_with("is")
    {
        return word[..word.len() - 1].to_string();
    }
    word.to_string()
}

fn strip_verb_inflection(word: &str) -> String {
    let len = word.chars().count();
    if len > 4 {
        if let Some(stem) = word.strip_suffix("ied") {
            return format!("{}y", stem);
        }
    }
    if len > 5 {
        if let Some(stem) = word.strip_suffix("ing") {
            return stem.to_string();
        }
    }
    if len > 4 {
        if let Some(stem) = word.strip_suffix("ed") {
            return stem.to_string();
        }
    }
    strip_plural(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lemmatizer() -> Lemmatizer {
        let lexicon = Lexicon::parse(
            "describe\tVERB\nlist\tVERB|NOUN\ncause\tNOUN|VERB\nidentify\tVERB\n\
             plan\tNOUN|VERB\nsit\tVERB\tsat\nmatch\tNOUN|VERB\nclass\tNOUN\n\
             analysis\tNOUN\tanalyses\nanalyse\tVERB\nthe\tDET\n",
        )
        .unwrap();
        Lemmatizer::new(lexicon)
    }

    fn lemmas(analyses: &[Analysis]) -> Vec<&str> {
        analyses.iter().map(|a| a.lemma.as_str()).collect()
    }

    #[test]
    fn test_direct_lookup_is_case_insensitive() {
        let analyses = lemmatizer().analyze("Describe");
        assert_eq!(analyses, vec![Analysis {
            lemma: "describe".to_string(),
            tags: vec![PosTag::Verb],
        }]);
    }

    #[test]
    fn test_irregular_form() {
        assert_eq!(lemmas(&lemmatizer().analyze("sat")), vec!["sit"]);
    }

    #[test]
    fn test_plural_noun_keeps_both_readings() {
        let analyses = lemmatizer().analyze("causes");
        assert_eq!(lemmas(&analyses), vec!["cause"]);
        assert_eq!(analyses[0].tags, vec![PosTag::Noun, PosTag::Verb]);
    }

    #[test]
    fn test_es_and_ies_suffixes() {
        let l = lemmatizer();
        assert_eq!(lemmas(&l.analyze("matches")), vec!["match"]);
        assert_eq!(lemmas(&l.analyze("identifies")), vec!["identify"]);
        assert_eq!(lemmas(&l.analyze("classes")), vec!["class"]);
    }

    #[test]
    fn test_past_and_progressive_keep_verbal_readings_only() {
        let l = lemmatizer();
        let listed = l.analyze("listed");
        assert_eq!(lemmas(&listed), vec!["list"]);
        assert_eq!(listed[0].tags, vec![PosTag::Verb]);
        assert_eq!(lemmas(&l.analyze("described")), vec!["describe"]);
        assert_eq!(lemmas(&l.analyze("describing")), vec!["describe"]);
        assert_eq!(lemmas(&l.analyze("identified")), vec!["identify"]);
    }

    #[test]
    fn test_doubled_consonant() {
        let l = lemmatizer();
        assert_eq!(lemmas(&l.analyze("planned")), vec!["plan"]);
        assert_eq!(lemmas(&l.analyze("planning")), vec!["plan"]);
    }

    #[test]
    fn test_irregular_and_regular_readings_combine() {
        let analyses = lemmatizer().analyze("analyses");
        assert_eq!(lemmas(&analyses), vec!["analysis", "analyse"]);
    }

    #[test]
    fn test_unknown_word_has_no_analyses() {
        assert!(lemmatizer().analyze("zorbing").is_empty());
    }

    #[test]
    fn test_curly_apostrophe_is_folded() {
        let lexicon = Lexicon::parse("be\tAUX\t're\n").unwrap();
        let analyses = Lemmatizer::new(lexicon).analyze("’re");
        assert_eq!(lemmas(&analyses), vec!["be"]);
    }

    #[test]
    fn test_fallback_lemma_by_tag() {
        let l = lemmatizer();
        assert_eq!(l.fallback_lemma("Gadgets", PosTag::Noun), "gadget");
        assert_eq!(l.fallback_lemma("status", PosTag::Noun), "status");
        assert_eq!(l.fallback_lemma("zorbing", PosTag::Verb), "zorb");
        assert_eq!(l.fallback_lemma("Paris", PosTag::Propn), "Paris");
        assert_eq!(l.fallback_lemma("Quickly", PosTag::Adv), "quickly");
    }
}
