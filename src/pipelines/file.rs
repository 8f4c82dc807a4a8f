use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::error;

use super::ConversionReport;
use crate::config::ImportConfig;
use crate::error::ImportError;
use crate::model::Recipe;
use crate::paprika::PaprikaRecipe;
use crate::writer::{write_recipe, WrittenRecipe};

/// Convert one `.paprikarecipe` file into a recipe folder under `output_dir`.
///
/// Any failure is logged and recorded; it never propagates.
pub fn convert_file(path: &Path, output_dir: &Path, config: &ImportConfig) -> ConversionReport {
    let mut report = ConversionReport::default();
    let label = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    match read_recipe(path) {
        Ok(paprika) => convert_record(&paprika, output_dir, &label, config, &mut report),
        Err(e) => {
            error!("Error processing file {}: {}", path.display(), e);
            report.fail(path.display().to_string(), e);
        }
    }

    report
}

fn read_recipe(path: &Path) -> Result<PaprikaRecipe, ImportError> {
    let file = File::open(path)?;
    PaprikaRecipe::from_gzip(BufReader::new(file))
}

/// Map and write one parsed recipe, recording the outcome in `report`.
pub(crate) fn convert_record(
    paprika: &PaprikaRecipe,
    output_dir: &Path,
    label: &str,
    config: &ImportConfig,
    report: &mut ConversionReport,
) {
    let recipe = Recipe::from(paprika);
    match write_recipe(recipe, paprika, output_dir, label, config) {
        Ok(WrittenRecipe {
            document,
            photo_error,
            ..
        }) => {
            if let Some(e) = photo_error {
                report.fail(label, e);
            }
            report.converted.push(document);
        }
        // already logged by the writer
        Err(e) => report.fail(label, e),
    }
}
