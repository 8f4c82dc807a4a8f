use std::fs;
use std::path::Path;

use log::{debug, error};

use super::file::convert_file;
use super::ConversionReport;
use crate::config::ImportConfig;
use crate::error::ImportError;

/// Convert every `.paprikarecipe` file directly inside `dir`.
///
/// Subdirectories are not searched. Files are converted independently, so a
/// broken file only costs that one recipe.
pub fn convert_directory(dir: &Path, output_dir: &Path, config: &ImportConfig) -> ConversionReport {
    let mut report = ConversionReport::default();

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            error!("Error reading directory {}: {}", dir.display(), e);
            report.fail(dir.display().to_string(), ImportError::from(e));
            return report;
        }
    };

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                error!("Error reading directory {}: {}", dir.display(), e);
                report.fail(dir.display().to_string(), ImportError::from(e));
                continue;
            }
        };

        let path = entry.path();
        let name = entry.file_name();
        if !path.is_file() || !config.is_recipe_file(&name.to_string_lossy()) {
            debug!("Skipping {}", path.display());
            continue;
        }

        report.merge(convert_file(&path, output_dir, config));
    }

    report
}
