use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

use log::{debug, error};
use zip::ZipArchive;

use super::file::convert_record;
use super::ConversionReport;
use crate::config::ImportConfig;
use crate::error::ImportError;
use crate::paprika::PaprikaRecipe;

/// Convert a `.paprikarecipes` bulk export.
///
/// The export is a zip archive whose members are themselves gzip-compressed
/// recipes. A member that fails is logged and skipped; an archive that
/// cannot be opened at all is logged and yields nothing.
pub fn convert_bundle(path: &Path, output_dir: &Path, config: &ImportConfig) -> ConversionReport {
    let mut report = ConversionReport::default();

    let mut archive = match open_archive(path) {
        Ok(archive) => archive,
        Err(e) => {
            error!("Error processing bulk export file {}: {}", path.display(), e);
            report.fail(path.display().to_string(), e);
            return report;
        }
    };

    let members: Vec<String> = archive
        .file_names()
        .filter(|name| config.is_recipe_file(name))
        .map(str::to_string)
        .collect();
    debug!("{} recipes in {}", members.len(), path.display());

    for member in members {
        match read_member(&mut archive, &member) {
            Ok(paprika) => convert_record(&paprika, output_dir, &member, config, &mut report),
            Err(e) => {
                error!(
                    "Error processing member {} in {}: {}",
                    member,
                    path.display(),
                    e
                );
                report.fail(member, e);
            }
        }
    }

    report
}

fn open_archive(path: &Path) -> Result<ZipArchive<BufReader<File>>, ImportError> {
    let file = File::open(path)?;
    Ok(ZipArchive::new(BufReader::new(file))?)
}

/// Reads a whole member before gunzipping it, so a truncated member fails
/// as a unit.
fn read_member<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    name: &str,
) -> Result<PaprikaRecipe, ImportError> {
    let mut compressed = Vec::new();
    archive.by_name(name)?.read_to_end(&mut compressed)?;
    PaprikaRecipe::from_gzip(&compressed[..])
}
