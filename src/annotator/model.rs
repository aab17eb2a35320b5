//! Acquisition of the annotation lexicon.
//!
//! Loading is a two-step procedure: read the lexicon from its configured
//! location, and if the file is missing run a single remedial install through
//! a [`ModelInstaller`] before reading it once more. A second failure is final,
//! as is any failure to read a file that exists.

use std::{fs, io, path::Path};

use log::{info, warn};

use crate::{
    annotator::lexicon::{BUNDLED_LEXICON, Lexicon},
    error::{ExtractError, Result},
    utils::paths::get_lexicon_path,
};

/// Remedial step run when the lexicon cannot be loaded.
pub trait ModelInstaller {
    fn install(&self, path: &Path) -> Result<()>;
}

/// Writes the lexicon compiled into the binary to the requested path.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledInstaller;

impl ModelInstaller for BundledInstaller {
    fn install(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, BUNDLED_LEXICON)?;
        info!("installed bundled lexicon at {}", path.display());
        Ok(())
    }
}

/// Loads the lexicon from `path`, installing it once if the file is missing.
///
/// With no path the bundled lexicon is used as-is.
pub fn acquire<I: ModelInstaller + ?Sized>(path: Option<&Path>, installer: &I) -> Result<Lexicon> {
    let Some(path) = path else {
        return Lexicon::bundled();
    };
    let path = get_lexicon_path(path);

    let load_error = match Lexicon::from_file(&path) {
        Ok(lexicon) => return Ok(lexicon),
        Err(err) => err,
    };

    let acquisition_error = |install: String| ExtractError::ResourceAcquisition {
        path: path.clone(),
        load: load_error.to_string(),
        install,
    };

    // Only a missing file is installed; an existing one is never overwritten.
    if !is_not_found(&load_error) {
        return Err(acquisition_error("skipped, existing file left unchanged".to_string()));
    }
    warn!(
        "lexicon not found at {} ({}), installing it",
        path.display(),
        load_error
    );

    if let Err(install_error) = installer.install(&path) {
        return Err(acquisition_error(install_error.to_string()));
    }

    Lexicon::from_file(&path).map_err(|err| acquisition_error(format!("reload failed: {}", err)))
}

fn is_not_found(err: &ExtractError) -> bool {
    matches!(err, ExtractError::Io(io_err) if io_err.kind() == io::ErrorKind::NotFound)
}
