use log::debug;
use serde::Serialize;

use crate::{
    annotator::annotator::Annotator,
    error::{ExtractError, Result},
    filter::{
        taxonomy::{self, TaxonomySummary},
        verb_filter::{TaxonomyFilter, Variant, VerbFilter, VerbTagFilter},
        vocabulary::ReferenceVocabulary,
    },
};

/// Separator between lemmas on the output line.
pub const OUTPUT_SEPARATOR: &str = ",";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractionReport {
    pub variant: Variant,
    pub verbs: Vec<String>,
    pub taxonomy: TaxonomySummary,
}

/// Text in, lemmas out: annotate, then run the selected verb filter.
pub struct VerbExtractor<A: Annotator> {
    annotator: A,
    vocabulary: ReferenceVocabulary,
    variant: Variant,
}

impl<A: Annotator> VerbExtractor<A> {
    pub fn new(annotator: A, vocabulary: ReferenceVocabulary, variant: Variant) -> Self {
        Self {
            annotator,
            vocabulary,
            variant,
        }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn set_variant(&mut self, variant: Variant) {
        self.variant = variant;
    }

    /// Runs the pipeline on `text`. Empty text yields an empty list.
    pub fn extract(&self, text: &str) -> Vec<String> {
        let tokens = self.annotator.annotate(text);
        let verbs = match self.variant {
            Variant::Bloom => TaxonomyFilter::new(&self.vocabulary).filter(&tokens),
            Variant::Verbs => VerbTagFilter.filter(&tokens),
        };
        debug!(
            "{} variant kept {} of {} tokens",
            self.variant,
            verbs.len(),
            tokens.len()
        );
        verbs
    }

    /// Like [`extract`](Self::extract), but rejects empty or whitespace-only input.
    pub fn extract_input(&self, input: &str) -> Result<Vec<String>> {
        let text = require_input(input)?;
        Ok(self.extract(text))
    }

    /// Extracted lemmas plus their Bloom's-taxonomy levels.
    ///
    /// Levels always come from the fixed Bloom tables, whatever vocabulary
    /// the extractor was built with; a word outside them has no levels.
    pub fn extract_report(&self, input: &str) -> Result<ExtractionReport> {
        let verbs = self.extract_input(input)?;
        let taxonomy = taxonomy::summarize(&verbs);
        Ok(ExtractionReport {
            variant: self.variant,
            verbs,
            taxonomy,
        })
    }
}

/// Trimmed input, or [`ExtractError::MissingInput`] when nothing is left.
pub fn require_input(input: &str) -> Result<&str> {
    let text = input.trim();
    if text.is_empty() {
        return Err(ExtractError::MissingInput);
    }
    Ok(text)
}

pub fn format_line(verbs: &[String]) -> String {
    verbs.join(OUTPUT_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotator::{
        annotator::RuleAnnotator,
        token::{AnnotatedToken, PosTag},
    };

    struct FixedAnnotator(Vec<AnnotatedToken>);

    impl Annotator for FixedAnnotator {
        fn annotate(&self, _text: &str) -> Vec<AnnotatedToken> {
            self.0.clone()
        }
    }

    fn extractor(variant: Variant) -> VerbExtractor<RuleAnnotator> {
        VerbExtractor::new(
            RuleAnnotator::bundled().unwrap(),
            ReferenceVocabulary::blooms(),
            variant,
        )
    }

    #[test]
    fn test_scenario_list_and_describe() {
        let bloom = extractor(Variant::Bloom);
        let verbs = bloom.extract("Please list and describe the causes.");
        assert_eq!(format_line(&verbs), "describe,list");

        let all = extractor(Variant::Verbs);
        let verbs = all.extract("Please list and describe the causes.");
        assert_eq!(format_line(&verbs), "list,describe");
    }

    #[test]
    fn test_scenario_no_vocabulary_match() {
        let bloom = extractor(Variant::Bloom);
        let verbs = bloom.extract("The cat sat on the mat.");
        assert!(verbs.is_empty());
        assert_eq!(format_line(&verbs), "");

        let all = extractor(Variant::Verbs);
        assert_eq!(all.extract("The cat sat on the mat."), vec!["sit"]);
    }

    #[test]
    fn test_scenario_repeated_verb() {
        let bloom = extractor(Variant::Bloom);
        let verbs = bloom.extract("Compare this. Now compare that.");
        assert_eq!(verbs, vec!["compare"]);

        let all = extractor(Variant::Verbs);
        assert_eq!(
            all.extract("Compare this. Now compare that."),
            vec!["compare", "compare"]
        );
    }

    #[test]
    fn test_inflected_forms_match_vocabulary() {
        let bloom = extractor(Variant::Bloom);
        let verbs = bloom.extract("The student identified, classified and analysed the samples.");
        assert_eq!(verbs, vec!["analyse", "classify", "identify"]);
    }

    #[test]
    fn test_all_verbs_skip_gerund_nouns() {
        let all = extractor(Variant::Verbs);
        assert_eq!(
            all.extract("He left the building and saw the results."),
            vec!["leave", "see"]
        );
    }

    #[test]
    fn test_all_verbs_include_relative_clause_verb() {
        let all = extractor(Variant::Verbs);
        assert_eq!(
            all.extract("Write a program that uses recursion."),
            vec!["write", "use"]
        );
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let bloom = extractor(Variant::Bloom);
        let text = "Explain how you would design and evaluate the experiment.";
        assert_eq!(bloom.extract(text), bloom.extract(text));
    }

    #[test]
    fn test_empty_text_is_empty_result() {
        assert!(extractor(Variant::Bloom).extract("").is_empty());
        assert!(extractor(Variant::Verbs).extract("  ").is_empty());
    }

    #[test]
    fn test_empty_input_is_missing_input_error() {
        let bloom = extractor(Variant::Bloom);
        assert!(matches!(bloom.extract_input(" \n "), Err(ExtractError::MissingInput)));
        assert!(matches!(bloom.extract_report(""), Err(ExtractError::MissingInput)));
    }

    #[test]
    fn test_switching_variant() {
        let mut extractor = extractor(Variant::Bloom);
        extractor.set_variant(Variant::Verbs);
        assert_eq!(extractor.variant(), Variant::Verbs);
        assert_eq!(extractor.extract("They sat."), vec!["sit"]);
    }

    #[test]
    fn test_injected_annotator_and_vocabulary() {
        let tokens = vec![
            AnnotatedToken::new("Sketching", "Sketch", PosTag::Verb, 0),
            AnnotatedToken::new("maps", "map", PosTag::Noun, 1),
        ];
        let extractor = VerbExtractor::new(
            FixedAnnotator(tokens),
            ReferenceVocabulary::from_words(["sketch"]),
            Variant::Bloom,
        );
        assert_eq!(extractor.extract("ignored"), vec!["sketch"]);
    }

    #[test]
    fn test_report_levels_ignore_custom_vocabulary() {
        let tokens = vec![AnnotatedToken::new("sketch", "sketch", PosTag::Verb, 0)];
        let extractor = VerbExtractor::new(
            FixedAnnotator(tokens),
            ReferenceVocabulary::from_words(["sketch"]),
            Variant::Bloom,
        );
        let report = extractor.extract_report("sketch").unwrap();
        assert_eq!(report.verbs, vec!["sketch"]);
        assert!(report.taxonomy.verbs[0].levels.is_empty());
        assert_eq!(report.taxonomy.base_level, None);
    }

    #[test]
    fn test_report_includes_taxonomy() {
        let bloom = extractor(Variant::Bloom);
        let report = bloom
            .extract_report("Design a study and justify your choices.")
            .unwrap();
        assert_eq!(report.verbs, vec!["design", "justify"]);
        assert_eq!(report.taxonomy.base_verb.as_deref(), Some("justify"));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["variant"], "bloom");
        assert_eq!(json["taxonomy"]["base_level"], "evaluate");
    }
}
