use log::trace;

use crate::{
    annotator::{
        lemmatizer::{Analysis, Lemmatizer},
        lexicon::Lexicon,
        tagger::PosTagger,
        token::{AnnotatedToken, PosTag},
        tokenizer::{TextTokenizer, TokenKind},
    },
    error::Result,
};

/// Turns raw text into an ordered sequence of annotated tokens.
///
/// Any tokenizer/tagger/lemmatizer can stand behind this trait; the verb
/// filters only ever see its output.
pub trait Annotator {
    fn annotate(&self, text: &str) -> Vec<AnnotatedToken>;
}

impl<A: Annotator + ?Sized> Annotator for Box<A> {
    fn annotate(&self, text: &str) -> Vec<AnnotatedToken> {
        (**self).annotate(text)
    }
}

/// Lexicon-driven annotator: tokenize, look up readings, tag, pick lemmas.
#[derive(Debug, Clone)]
pub struct RuleAnnotator {
    tokenizer: TextTokenizer,
    lemmatizer: Lemmatizer,
    tagger: PosTagger,
}

impl RuleAnnotator {
    pub fn new(lexicon: Lexicon) -> Self {
        Self {
            tokenizer: TextTokenizer::new(),
            lemmatizer: Lemmatizer::new(lexicon),
            tagger: PosTagger::new(),
        }
    }

    pub fn bundled() -> Result<Self> {
        Ok(Self::new(Lexicon::bundled()?))
    }
}

impl Annotator for RuleAnnotator {
    fn annotate(&self, text: &str) -> Vec<AnnotatedToken> {
        let tokens = self.tokenizer.tokenize(text);
        let analyses: Vec<Vec<Analysis>> = tokens
            .iter()
            .map(|token| match token.kind {
                TokenKind::Word => self.lemmatizer.analyze(&token.text),
                _ => Vec::new(),
            })
            .collect();
        let tags = self.tagger.tag(&tokens, &analyses);

        let annotated: Vec<AnnotatedToken> = tokens
            .iter()
            .zip(analyses.iter())
            .zip(tags)
            .map(|((token, readings), pos)| {
                let lemma = match token.kind {
                    TokenKind::Word => self.pick_lemma(&token.text, readings, pos),
                    _ => token.text.clone(),
                };
                AnnotatedToken {
                    surface: token.text.clone(),
                    lemma,
                    pos,
                    position: token.position,
                }
            })
            .collect();

        trace!("annotated {} tokens", annotated.len());
        annotated
    }
}

impl RuleAnnotator {
    fn pick_lemma(&self, surface: &str, readings: &[Analysis], pos: PosTag) -> String {
        readings
            .iter()
            .find(|a| a.tags.contains(&pos))
            .map(|a| a.lemma.clone())
            .unwrap_or_else(|| self.lemmatizer.fallback_lemma(surface, pos))
    }
}
