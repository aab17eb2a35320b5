use std::{fmt, fs, path::Path, str::FromStr};

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::{
    error::{ExtractError, Result},
    filter::verb_filter::Variant,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Comma-joined lemmas on one line.
    #[default]
    Text,
    /// Lemmas plus their Bloom's-taxonomy levels as JSON.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format `{}` (expected text or json)", other)),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Config {
    pub variant: Variant,
    /// Lexicon file or directory; the bundled lexicon is used when unset.
    pub lexicon_path: Option<String>,
    /// JSON array of words replacing the Bloom's-taxonomy vocabulary.
    pub vocabulary_path: Option<String>,
    pub format: OutputFormat,
}

/// Reads `path` if it exists; a missing file yields the defaults.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();
    if !path.exists() {
        info!("{} not found, using default configuration", path.display());
        return Ok(Config::default());
    }

    let contents = fs::read_to_string(path)?;
    let config: Config = serde_json::from_str(&contents).map_err(|err| {
        warn!("could not parse {}: {}", path.display(), err);
        ExtractError::Config(err)
    })?;
    info!("loaded configuration from {}", path.display());
    Ok(config)
}
