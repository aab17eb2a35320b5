use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Universal part-of-speech tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PosTag {
    Adj,
    Adp,
    Adv,
    Aux,
    Cconj,
    Det,
    Intj,
    Noun,
    Num,
    Part,
    Pron,
    Propn,
    Punct,
    Sconj,
    Sym,
    Verb,
    X,
}

impl PosTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            PosTag::Adj => "ADJ",
            PosTag::Adp => "ADP",
            PosTag::Adv => "ADV",
            PosTag::Aux => "AUX",
            PosTag::Cconj => "CCONJ",
            PosTag::Det => "DET",
            PosTag::Intj => "INTJ",
            PosTag::Noun => "NOUN",
            PosTag::Num => "NUM",
            PosTag::Part => "PART",
            PosTag::Pron => "PRON",
            PosTag::Propn => "PROPN",
            PosTag::Punct => "PUNCT",
            PosTag::Sconj => "SCONJ",
            PosTag::Sym => "SYM",
            PosTag::Verb => "VERB",
            PosTag::X => "X",
        }
    }

    pub fn is_verbal(&self) -> bool {
        matches!(self, PosTag::Verb | PosTag::Aux)
    }
}

impl fmt::Display for PosTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PosTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = match s.trim().to_ascii_uppercase().as_str() {
            "ADJ" => PosTag::Adj,
            "ADP" => PosTag::Adp,
            "ADV" => PosTag::Adv,
            "AUX" => PosTag::Aux,
            "CCONJ" => PosTag::Cconj,
            "DET" => PosTag::Det,
            "INTJ" => PosTag::Intj,
            "NOUN" => PosTag::Noun,
            "NUM" => PosTag::Num,
            "PART" => PosTag::Part,
            "PRON" => PosTag::Pron,
            "PROPN" => PosTag::Propn,
            "PUNCT" => PosTag::Punct,
            "SCONJ" => PosTag::Sconj,
            "SYM" => PosTag::Sym,
            "VERB" => PosTag::Verb,
            "X" => PosTag::X,
            other => return Err(format!("unknown part-of-speech tag `{}`", other)),
        };
        Ok(tag)
    }
}

/// One token as produced by an [`Annotator`](super::annotator::Annotator).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedToken {
    pub surface: String,
    pub lemma: String,
    pub pos: PosTag,
    /// Index of the token in the document.
    pub position: u32,
}

impl AnnotatedToken {
    pub fn new(surface: &str, lemma: &str, pos: PosTag, position: u32) -> Self {
        Self {
            surface: surface.to_string(),
            lemma: lemma.to_string(),
            pos,
            position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_parses_case_insensitively() {
        assert_eq!("verb".parse::<PosTag>(), Ok(PosTag::Verb));
        assert_eq!(" CCONJ ".parse::<PosTag>(), Ok(PosTag::Cconj));
    }

    #[test]
    fn test_unknown_tag_is_rejected() {
        assert!("VERBISH".parse::<PosTag>().is_err());
    }

    #[test]
    fn test_display_matches_universal_names() {
        assert_eq!(PosTag::Propn.to_string(), "PROPN");
        assert_eq!(PosTag::Sconj.to_string(), "SCONJ");
    }

    #[test]
    fn test_tag_serializes_uppercase() {
        let json = serde_json::to_string(&PosTag::Verb).unwrap();
        assert_eq!(json, "\"VERB\"");
    }
}
