use once_cell::sync::Lazy;
use regex::Regex;

static TOKEN_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?P<word>[\p{L}\p{M}]+(?:['’][\p{L}\p{M}]+)*)|(?P<number>\p{N}+(?:[.,]\p{N}+)*)|(?P<punct>\p{P})|(?P<symbol>\S)",
    )
    .expect("token pattern is a valid regex")
});

/// Contractions split off their host word, e.g. "we're" -> "we" + "'re".
const CLITICS: &[&str] = &["s", "re", "ve", "ll", "d", "m"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Word,
    Number,
    Punct,
    Symbol,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawToken {
    pub position: u32,
    pub text: String,
    /// Byte offsets into the source text.
    pub start: usize,
    pub end: usize,
    pub kind: TokenKind,
}

impl RawToken {
    pub fn ends_sentence(&self) -> bool {
        self.kind == TokenKind::Punct && matches!(self.text.as_str(), "." | "!" | "?" | ";")
    }
}

#[derive(Debug, Clone, Default)]
pub struct TextTokenizer;

impl TextTokenizer {
    pub fn new() -> Self {
        TextTokenizer
    }

    pub fn tokenize(&self, text: &str) -> Vec<RawToken> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let mut tokens: Vec<RawToken> = Vec::new();
        for caps in TOKEN_PATTERN.captures_iter(text) {
            let (m, kind) = if let Some(m) = caps.name("word") {
                (m, TokenKind::Word)
            } else if let Some(m) = caps.name("number") {
                (m, TokenKind::Number)
            } else if let Some(m) = caps.name("punct") {
                (m, TokenKind::Punct)
            } else if let Some(m) = caps.name("symbol") {
                (m, TokenKind::Symbol)
            } else {
                continue;
            };

            if kind == TokenKind::Word {
                for (start, end) in split_clitic(m.as_str()) {
                    push_token(&mut tokens, text, m.start() + start, m.start() + end, kind);
                }
            } else {
                push_token(&mut tokens, text, m.start(), m.end(), kind);
            }
        }

        tokens
    }
}

fn push_token(tokens: &mut Vec<RawToken>, text: &str, start: usize, end: usize, kind: TokenKind) {
    let position = tokens.len() as u32;
    tokens.push(RawToken {
        position,
        text: text[start..end].to_string(),
        start,
        end,
        kind,
    });
}

/// Returns the byte ranges of the host word and its clitic, if any.
fn split_clitic(word: &str) -> Vec<(usize, usize)> {
    let whole = vec![(0, word.len())];
    let Some(apostrophe) = word.rfind(['\'', '’']) else {
        return whole;
    };
    let apostrophe_len = word[apostrophe..].chars().next().map_or(1, char::len_utf8);
    let suffix = word[apostrophe + apostrophe_len..].to_lowercase();

    // "don't" -> "do" + "n't"
    if suffix == "t" && apostrophe > 1 && word[..apostrophe].to_lowercase().ends_with('n') {
        let split = apostrophe - 1;
        return vec![(0, split), (split, word.len())];
    }

    if apostrophe > 0 && CLITICS.contains(&suffix.as_str()) {
        return vec![(0, apostrophe), (apostrophe, word.len())];
    }

    whole
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokens: &[RawToken]) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_words_and_punctuation() {
        let tokenizer = TextTokenizer::new();
        let tokens = tokenizer.tokenize("Please list and describe the causes.");
        assert_eq!(
            texts(&tokens),
            vec!["Please", "list", "and", "describe", "the", "causes", "."]
        );
        assert_eq!(tokens[6].kind, TokenKind::Punct);
        assert!(tokens[6].ends_sentence());
    }

    #[test]
    fn test_positions_are_sequential() {
        let tokenizer = TextTokenizer::new();
        let tokens = tokenizer.tokenize("a b, c d");
        for (expected, token) in tokens.iter().enumerate() {
            assert_eq!(token.position, expected as u32);
        }
    }

    #[test]
    fn test_offsets_point_into_source() {
        let text = "  Define   terms!";
        let tokens = TextTokenizer::new().tokenize(text);
        for token in &tokens {
            assert_eq!(&text[token.start..token.end], token.text);
        }
    }

    #[test]
    fn test_whitespace_only_is_empty() {
        assert!(TextTokenizer::new().tokenize(" \n\t ").is_empty());
        assert!(TextTokenizer::new().tokenize("").is_empty());
    }

    #[test]
    fn test_negation_clitic_split() {
        let tokens = TextTokenizer::new().tokenize("Don't copy it");
        assert_eq!(texts(&tokens), vec!["Do", "n't", "copy", "it"]);
    }

    #[test]
    fn test_contractions_split() {
        let tokens = TextTokenizer::new().tokenize("we're the author's");
        assert_eq!(texts(&tokens), vec!["we", "'re", "the", "author", "'s"]);
    }

    #[test]
    fn test_curly_apostrophe_split() {
        let text = "they’ll see";
        let tokens = TextTokenizer::new().tokenize(text);
        assert_eq!(texts(&tokens), vec!["they", "’ll", "see"]);
        assert_eq!(&text[tokens[1].start..tokens[1].end], "’ll");
    }

    #[test]
    fn test_numbers_kept_whole() {
        let tokens = TextTokenizer::new().tokenize("List 3.5 or 1,000 items");
        assert_eq!(texts(&tokens), vec!["List", "3.5", "or", "1,000", "items"]);
        assert_eq!(tokens[1].kind, TokenKind::Number);
    }

    #[test]
    fn test_symbols() {
        let tokens = TextTokenizer::new().tokenize("x + y");
        assert_eq!(tokens[1].kind, TokenKind::Symbol);
    }

    #[test]
    fn test_unicode_words() {
        let tokens = TextTokenizer::new().tokenize("café naïve résumé");
        assert_eq!(texts(&tokens), vec!["café", "naïve", "résumé"]);
    }
}
