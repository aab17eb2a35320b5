use crate::filter::verb_filter::Variant;

/// A line typed into the interactive prompt.
#[derive(Debug, Clone, PartialEq)]
pub enum ReplCommand {
    Quit,
    Help,
    SetVariant(Variant),
    /// Analyze the line as text.
    Analyze(String),
    Empty,
    /// Unknown command or bad argument, with a message for the user.
    Invalid(String),
}

pub const HELP_TEXT: &str = "\
Type any text to extract its verbs.
:variant bloom|verbs  switch between Bloom's-taxonomy matching and all verbs
:help                 show this message
:quit                 leave (also :exit, Ctrl-C, Ctrl-D)";

/// Parse a prompt line into a command.
///
/// Lines starting with `:` are commands; everything else is text.
pub fn parse_repl_input(input: &str) -> ReplCommand {
    let input = input.trim();
    if input.is_empty() {
        return ReplCommand::Empty;
    }

    let Some(command) = input.strip_prefix(':') else {
        return ReplCommand::Analyze(input.to_string());
    };

    let mut parts = command.split_whitespace();
    match parts.next() {
        Some("q" | "quit" | "exit") => ReplCommand::Quit,
        Some("h" | "help") => ReplCommand::Help,
        Some("variant") => match parts.next() {
            Some(name) => match name.parse::<Variant>() {
                Ok(variant) => ReplCommand::SetVariant(variant),
                Err(message) => ReplCommand::Invalid(message),
            },
            None => ReplCommand::Invalid("usage: :variant bloom|verbs".to_string()),
        },
        _ => ReplCommand::Invalid(format!(
            "unknown command `{}`, type :help for the valid commands",
            input
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quit_variants() {
        assert_eq!(parse_repl_input(":q"), ReplCommand::Quit);
        assert_eq!(parse_repl_input(":quit"), ReplCommand::Quit);
        assert_eq!(parse_repl_input(" :exit "), ReplCommand::Quit);
    }

    #[test]
    fn test_parse_help_variants() {
        assert_eq!(parse_repl_input(":h"), ReplCommand::Help);
        assert_eq!(parse_repl_input(":help"), ReplCommand::Help);
    }

    #[test]
    fn test_parse_variant() {
        assert_eq!(
            parse_repl_input(":variant verbs"),
            ReplCommand::SetVariant(Variant::Verbs)
        );
        assert_eq!(
            parse_repl_input(":variant  Bloom"),
            ReplCommand::SetVariant(Variant::Bloom)
        );
    }

    #[test]
    fn test_parse_variant_errors() {
        assert!(matches!(
            parse_repl_input(":variant"),
            ReplCommand::Invalid(_)
        ));
        assert!(matches!(
            parse_repl_input(":variant nouns"),
            ReplCommand::Invalid(_)
        ));
    }

    #[test]
    fn test_parse_text() {
        assert_eq!(
            parse_repl_input("  Describe the water cycle. "),
            ReplCommand::Analyze("Describe the water cycle.".to_string())
        );
    }

    #[test]
    fn test_parse_empty_and_unknown() {
        assert_eq!(parse_repl_input("   "), ReplCommand::Empty);
        assert!(matches!(parse_repl_input(":load x"), ReplCommand::Invalid(_)));
    }
}
