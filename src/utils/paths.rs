use std::path::{Path, PathBuf};

pub const LEXICON_FILE_NAME: &str = "lexicon.tsv";
pub const DEFAULT_CONFIG_PATH: &str = "config.json";

/// Resolves a configured lexicon location; directories get the default file name.
pub fn get_lexicon_path<P: AsRef<Path>>(path: P) -> PathBuf {
    let path = path.as_ref();
    if path.is_dir() {
        path.join(LEXICON_FILE_NAME)
    } else {
        path.to_path_buf()
    }
}
