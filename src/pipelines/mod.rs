pub mod bundle;
pub mod directory;
pub mod file;

use std::path::{Path, PathBuf};

use crate::config::ImportConfig;
use crate::error::ImportError;

/// How an input path is read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Directory of `.paprikarecipe` files
    Directory,
    /// Zip bulk export of `.paprikarecipe` files
    Bundle,
    /// A single gzip-compressed recipe
    File,
    /// A file with an extension that is neither of the above
    Unrecognized,
}

impl InputKind {
    /// Classifies `path`, failing when it is neither a file nor a directory.
    pub fn detect(path: &Path, config: &ImportConfig) -> Result<Self, ImportError> {
        if path.is_dir() {
            return Ok(InputKind::Directory);
        }
        if !path.is_file() {
            return Err(ImportError::InvalidInput(path.to_path_buf()));
        }

        let name = path.to_string_lossy();
        if config.is_bundle_file(&name) {
            Ok(InputKind::Bundle)
        } else if config.is_recipe_file(&name) {
            Ok(InputKind::File)
        } else {
            Ok(InputKind::Unrecognized)
        }
    }
}

/// A recipe that could not be converted, or converted without its photo.
#[derive(Debug)]
pub struct Failure {
    /// File path or archive member the recipe came from
    pub source: String,
    pub error: ImportError,
}

/// What a conversion run produced.
#[derive(Debug, Default)]
pub struct ConversionReport {
    /// Recipe documents written, in processing order
    pub converted: Vec<PathBuf>,
    pub failures: Vec<Failure>,
}

impl ConversionReport {
    pub(crate) fn fail(&mut self, source: impl Into<String>, error: ImportError) {
        self.failures.push(Failure {
            source: source.into(),
            error,
        });
    }

    pub(crate) fn merge(&mut self, other: ConversionReport) {
        self.converted.extend(other.converted);
        self.failures.extend(other.failures);
    }
}
