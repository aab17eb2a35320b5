use crate::annotator::{
    lemmatizer::{Analysis, normalize_form},
    token::PosTag,
    tokenizer::{RawToken, TokenKind},
};

const POSSESSIVES: &[&str] = &["my", "your", "his", "her", "its", "our", "their"];

/// Left-to-right rule-based part-of-speech tagger.
#[derive(Debug, Clone, Default)]
pub struct PosTagger;

impl PosTagger {
    pub fn new() -> Self {
        PosTagger
    }

    /// Tags `tokens`, where `analyses[i]` holds the lexicon readings of `tokens[i]`.
    ///
    /// A token without an entry in `analyses` is tagged as an unknown word.
    pub fn tag(&self, tokens: &[RawToken], analyses: &[Vec<Analysis>]) -> Vec<PosTag> {
        let mut tags: Vec<PosTag> = Vec::with_capacity(tokens.len());

        for (i, token) in tokens.iter().enumerate() {
            let tag = match token.kind {
                TokenKind::Number => PosTag::Num,
                TokenKind::Punct => PosTag::Punct,
                TokenKind::Symbol => PosTag::Sym,
                TokenKind::Word => {
                    let token_analyses = analyses.get(i).map(Vec::as_slice).unwrap_or(&[]);
                    let readings = candidate_tags(token_analyses);
                    let context = Context::new(tokens, analyses, &tags, i);
                    if let Some(tag) =
                        participle_after_determiner(&token.text, token_analyses, &readings, &context)
                    {
                        tag
                    } else if readings.is_empty() {
                        guess_unknown(&token.text, context.sentence_start)
                    } else {
                        choose(&readings, &context)
                    }
                }
            };
            tags.push(tag);
        }

        tags
    }
}

struct Context<'a> {
    tokens: &'a [RawToken],
    analyses: &'a [Vec<Analysis>],
    tags: &'a [PosTag],
    index: usize,
    sentence_start: bool,
}

impl<'a> Context<'a> {
    fn new(
        tokens: &'a [RawToken],
        analyses: &'a [Vec<Analysis>],
        tags: &'a [PosTag],
        index: usize,
    ) -> Self {
        let sentence_start = index == 0 || tokens[index - 1].ends_sentence();
        Self {
            tokens,
            analyses,
            tags,
            index,
            sentence_start,
        }
    }

    fn previous_tag(&self) -> Option<PosTag> {
        self.index.checked_sub(1).map(|i| self.tags[i])
    }

    fn previous_word(&self) -> Option<String> {
        self.index
            .checked_sub(1)
            .map(|i| self.tokens[i].text.to_lowercase())
    }

    /// Determiner, adjective or possessive directly before the current word.
    fn follows_determiner(&self) -> bool {
        if self
            .previous_word()
            .is_some_and(|w| POSSESSIVES.contains(&w.as_str()))
        {
            return true;
        }
        matches!(self.previous_tag(), Some(PosTag::Det | PosTag::Adj))
    }

    /// Tag of the conjunct before a coordinating conjunction or list comma.
    fn conjunct_tag(&self) -> Option<PosTag> {
        self.index.checked_sub(2).map(|i| self.tags[i])
    }

    fn next_is_boundary(&self) -> bool {
        match self.tokens.get(self.index + 1) {
            None => true,
            Some(next) => next.kind == TokenKind::Punct,
        }
    }

    fn next_can_be_verb(&self) -> bool {
        let Some(next) = self.tokens.get(self.index + 1) else {
            return false;
        };
        if matches!(next.text.to_lowercase().as_str(), "not" | "n't") {
            return true;
        }
        self.analyses
            .get(self.index + 1)
            .is_some_and(|readings| {
                readings
                    .iter()
                    .any(|a| a.tags.iter().any(|t| t.is_verbal()))
            })
    }
}

fn candidate_tags(analyses: &[Analysis]) -> Vec<PosTag> {
    let mut tags = Vec::new();
    for analysis in analyses {
        for tag in &analysis.tags {
            if !tags.contains(tag) {
                tags.push(*tag);
            }
        }
    }
    tags
}

/// "the building", "the listed items": a regularly inflected verb form after
/// a determiner is a noun (-ing) or a modifier (-ed), not a verb.
fn participle_after_determiner(
    surface: &str,
    analyses: &[Analysis],
    readings: &[PosTag],
    context: &Context,
) -> Option<PosTag> {
    if !context.follows_determiner() || readings.iter().any(|t| !t.is_verbal()) {
        return None;
    }
    let key = normalize_form(surface);
    if analyses.iter().any(|a| a.lemma == key) {
        return None;
    }
    let len = key.chars().count();
    if len > 5 && key.ends_with("ing") {
        Some(PosTag::Noun)
    } else if len > 4 && key.ends_with("ed") {
        Some(PosTag::Adj)
    } else {
        None
    }
}

fn choose(readings: &[PosTag], context: &Context) -> PosTag {
    if readings.len() == 1 {
        return readings[0];
    }

    if readings.contains(&PosTag::Noun) && readings.contains(&PosTag::Verb) {
        if let Some(tag) = resolve_noun_or_verb(context) {
            return tag;
        }
    }

    // "to describe" vs "to the end"
    if readings.contains(&PosTag::Part) && readings.contains(&PosTag::Adp) {
        return if context.next_can_be_verb() {
            PosTag::Part
        } else {
            PosTag::Adp
        };
    }

    if readings.contains(&PosTag::Aux) && readings.contains(&PosTag::Verb) {
        return if context.next_can_be_verb() {
            PosTag::Aux
        } else {
            PosTag::Verb
        };
    }

    if readings.contains(&PosTag::Pron) && context.next_is_boundary() {
        return PosTag::Pron;
    }

    readings[0]
}

fn resolve_noun_or_verb(context: &Context) -> Option<PosTag> {
    if context.sentence_start {
        return Some(PosTag::Verb);
    }

    if context
        .previous_word()
        .is_some_and(|w| POSSESSIVES.contains(&w.as_str()))
    {
        return Some(PosTag::Noun);
    }

    match context.previous_tag()? {
        PosTag::Det | PosTag::Adj | PosTag::Num | PosTag::Adp | PosTag::Verb => Some(PosTag::Noun),
        PosTag::Part | PosTag::Aux | PosTag::Pron | PosTag::Intj | PosTag::Adv | PosTag::Sconj => {
            Some(PosTag::Verb)
        }
        PosTag::Noun | PosTag::Propn => Some(PosTag::Verb),
        PosTag::Cconj => coordinated(context),
        PosTag::Punct if context.previous_word().as_deref() == Some(",") => coordinated(context),
        _ => None,
    }
}

fn coordinated(context: &Context) -> Option<PosTag> {
    match context.conjunct_tag()? {
        tag @ (PosTag::Noun | PosTag::Verb) => Some(tag),
        _ => None,
    }
}

/// Tag guess for a word missing from the lexicon.
fn guess_unknown(surface: &str, sentence_start: bool) -> PosTag {
    let letters: Vec<char> = surface.chars().filter(|c| c.is_alphabetic()).collect();
    if letters.len() > 1 && letters.iter().all(|c| c.is_uppercase()) {
        return PosTag::Propn;
    }
    if !sentence_start && surface.chars().next().is_some_and(char::is_uppercase) {
        return PosTag::Propn;
    }

    let lower = surface.to_lowercase();
    let len = lower.chars().count();
    if len > 4 && lower.ends_with("ly") {
        return PosTag::Adv;
    }
    if (len > 5 && lower.ends_with("ing")) || (len > 4 && lower.ends_with("ed")) {
        return PosTag::Verb;
    }
    if ["ize", "ise", "ify"].iter().any(|s| lower.ends_with(s)) && len > 4 {
        return PosTag::Verb;
    }
    if ["tion", "sion", "ment", "ness", "ity", "ism", "ance", "ence", "ship"]
        .iter()
        .any(|s| lower.ends_with(s))
    {
        return PosTag::Noun;
    }
    if ["ous", "ful", "ive", "able", "ible", "less", "ish", "ic", "al"]
        .iter()
        .any(|s| lower.ends_with(s))
        && len > 4
    {
        return PosTag::Adj;
    }
    PosTag::Noun
}
