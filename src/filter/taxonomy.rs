use std::{collections::BTreeSet, fmt};

use serde::{Deserialize, Serialize};

/// Cognitive levels of Bloom's taxonomy, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BloomLevel {
    Remember = 1,
    Understand = 2,
    Apply = 3,
    Analyze = 4,
    Evaluate = 5,
    Create = 6,
}

impl BloomLevel {
    pub const ALL: [BloomLevel; 6] = [
        BloomLevel::Remember,
        BloomLevel::Understand,
        BloomLevel::Apply,
        BloomLevel::Analyze,
        BloomLevel::Evaluate,
        BloomLevel::Create,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            BloomLevel::Remember => "remember",
            BloomLevel::Understand => "understand",
            BloomLevel::Apply => "apply",
            BloomLevel::Analyze => "analyze",
            BloomLevel::Evaluate => "evaluate",
            BloomLevel::Create => "create",
        }
    }

    pub fn verbs(&self) -> &'static [&'static str] {
        match self {
            BloomLevel::Remember => REMEMBER,
            BloomLevel::Understand => UNDERSTAND,
            BloomLevel::Apply => APPLY,
            BloomLevel::Analyze => ANALYZE,
            BloomLevel::Evaluate => EVALUATE,
            BloomLevel::Create => CREATE,
        }
    }
}

impl fmt::Display for BloomLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const REMEMBER: &[&str] = &[
    "recall", "give", "reproduce", "memorize", "define", "identify", "describe", "label", "list",
    "name", "state", "match", "recognize", "examine", "draw", "write", "locate", "quote", "read",
    "record", "repeat", "retell", "visualize", "visualise", "copy", "duplicate", "enumerate",
    "listen", "observe", "omit", "tabulate", "tell", "what", "why", "when", "where", "which",
];

const UNDERSTAND: &[&str] = &[
    "explain", "how", "interpret", "paraphrase", "summarize", "classify", "compare",
    "differentiate", "discuss", "distinguish", "extend", "predict", "associate", "contrast",
    "convert", "demonstrate", "estimate", "identify", "infer", "relate", "restate", "translate",
    "generalize", "group", "illustrate", "judge", "observe", "order", "report", "represent",
    "research", "review", "rewrite", "show", "trace",
];

const APPLY: &[&str] = &[
    "solve", "apply", "modify", "use", "calculate", "change", "demonstrate", "experiment",
    "relate", "show", "complete", "manipulate", "practice", "simulate", "transfer",
];

const ANALYZE: &[&str] = &[
    "analyze", "analyse", "compare", "classify", "contrast", "distinguish", "infer", "separate",
    "categorize", "differentiate", "correlate", "deduce", "devise", "dissect", "estimate",
    "evaluate",
];

const EVALUATE: &[&str] = &[
    "evaluate", "judge", "assess", "appraise", "critique", "criticize", "discern",
    "discriminate", "consider", "weigh", "measure", "estimate", "rate", "grade", "score", "rank",
    "test", "recommend", "decide", "conclude", "argue", "debate", "justify", "persuade",
    "defend", "support", "summarize", "editorialize", "predict", "distinguish",
];

const CREATE: &[&str] = &[
    "design", "compose", "create", "plan", "combine", "formulate", "invent", "hypothesize",
    "substitute", "compile", "construct", "develop", "generalize", "integrate", "modify",
    "organize", "prepare", "produce", "rearrange", "rewrite", "adapt", "arrange", "assemble",
    "choose", "collaborate", "facilitate", "imagine", "intervene", "manage", "originate",
    "propose", "simulate", "solve", "support", "test", "validate",
];

/// Every level listing `word`, in level order.
pub fn levels_of(word: &str) -> Vec<BloomLevel> {
    let word = word.trim().to_lowercase();
    BloomLevel::ALL
        .into_iter()
        .filter(|level| level.verbs().contains(&word.as_str()))
        .collect()
}

/// The first level listing `word`.
pub fn primary_level(word: &str) -> Option<BloomLevel> {
    levels_of(word).into_iter().next()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedVerb {
    pub verb: String,
    pub levels: Vec<BloomLevel>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonomySummary {
    pub verbs: Vec<ClassifiedVerb>,
    /// Union of all levels touched by the verbs.
    pub levels: BTreeSet<BloomLevel>,
    /// Lowest primary level among the verbs.
    pub base_level: Option<BloomLevel>,
    /// First verb, in input order, whose primary level is `base_level`.
    pub base_verb: Option<String>,
}

pub fn summarize(verbs: &[String]) -> TaxonomySummary {
    let mut classified = Vec::with_capacity(verbs.len());
    let mut levels = BTreeSet::new();
    let mut base: Option<(BloomLevel, &str)> = None;

    for verb in verbs {
        let verb_levels = levels_of(verb);
        levels.extend(verb_levels.iter().copied());
        if let Some(primary) = verb_levels.first().copied() {
            if base.is_none_or(|(level, _)| primary < level) {
                base = Some((primary, verb.as_str()));
            }
        }
        classified.push(ClassifiedVerb {
            verb: verb.clone(),
            levels: verb_levels,
        });
    }

    TaxonomySummary {
        verbs: classified,
        levels,
        base_level: base.map(|(level, _)| level),
        base_verb: base.map(|(_, verb)| verb.to_string()),
    }
}
