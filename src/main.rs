use clap::Parser;
use log::debug;
use mimalloc::MiMalloc;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use bloom_verbs::{
    annotator::{
        annotator::{Annotator, RuleAnnotator},
        model::{self, BundledInstaller},
    },
    config::config::{OutputFormat, load_config},
    error::{ExtractError, Result},
    extractor::extractor::{VerbExtractor, format_line, require_input},
    filter::{verb_filter::Variant, vocabulary::ReferenceVocabulary},
    repl::command::{HELP_TEXT, ReplCommand, parse_repl_input},
    utils::paths::DEFAULT_CONFIG_PATH,
};

/// Extract Bloom's-taxonomy verbs (or all verbs) from text.
#[derive(Parser, Debug)]
#[command(name = "bloom_verbs", version, about)]
struct Cli {
    /// Text to analyze; standard input is read when omitted
    text: Option<String>,

    /// bloom: sorted taxonomy matches, verbs: every verb in order
    #[arg(long, short)]
    variant: Option<Variant>,

    /// Output format: text or json
    #[arg(long, short)]
    format: Option<OutputFormat>,

    /// Lexicon file or directory (installed there if missing)
    #[arg(long)]
    lexicon: Option<PathBuf>,

    /// JSON array of words replacing the Bloom's-taxonomy vocabulary
    #[arg(long)]
    vocabulary: Option<PathBuf>,

    /// Configuration file
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Analyze lines typed at a prompt
    #[arg(long, short)]
    interactive: bool,
}

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli.config)?;
    let variant = cli.variant.unwrap_or(config.variant);
    let format = cli.format.unwrap_or(config.format);
    let lexicon_path = cli.lexicon.or(config.lexicon_path.map(PathBuf::from));
    let vocabulary_path = cli.vocabulary.or(config.vocabulary_path.map(PathBuf::from));
    debug!("variant={} format={} lexicon={:?}", variant, format, lexicon_path);

    let input = if cli.interactive {
        None
    } else {
        let text = match cli.text {
            Some(text) => text,
            None => read_stdin()?,
        };
        Some(require_input(&text)?.to_string())
    };

    let lexicon = model::acquire(lexicon_path.as_deref(), &BundledInstaller)?;
    let vocabulary = match vocabulary_path {
        Some(path) => ReferenceVocabulary::from_json_file(path)?,
        None => ReferenceVocabulary::blooms(),
    };
    let mut extractor = VerbExtractor::new(RuleAnnotator::new(lexicon), vocabulary, variant);

    match input {
        Some(text) => {
            println!("{}", render(&extractor, &text, format)?);
            Ok(())
        }
        None => run_repl(&mut extractor, format),
    }
}

fn read_stdin() -> Result<String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer.trim().to_string())
}

fn render<A: Annotator>(
    extractor: &VerbExtractor<A>,
    input: &str,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format_line(&extractor.extract_input(input)?)),
        OutputFormat::Json => {
            let report = extractor.extract_report(input)?;
            serde_json::to_string(&report).map_err(ExtractError::Report)
        }
    }
}

fn run_repl<A: Annotator>(extractor: &mut VerbExtractor<A>, format: OutputFormat) -> Result<()> {
    let mut rl = DefaultEditor::new().map_err(|err| io::Error::other(err.to_string()))?;
    println!(
        "Variant: {}. Type :help for commands or :quit to leave.",
        extractor.variant()
    );

    loop {
        let readline = rl.readline("> ");

        match readline {
            Ok(line) => {
                let _ = rl.add_history_entry(line.as_str());
                match parse_repl_input(&line) {
                    ReplCommand::Empty => continue,
                    ReplCommand::Help => println!("{}", HELP_TEXT),
                    ReplCommand::Quit => break,
                    ReplCommand::SetVariant(variant) => {
                        extractor.set_variant(variant);
                        println!("Variant: {}", variant);
                    }
                    ReplCommand::Analyze(text) => match render(extractor, &text, format) {
                        Ok(output) => println!("{}", output),
                        Err(err) => eprintln!("{}", err),
                    },
                    ReplCommand::Invalid(message) => eprintln!("{}", message),
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => return Err(io::Error::other(err.to_string()).into()),
        }
    }

    Ok(())
}
