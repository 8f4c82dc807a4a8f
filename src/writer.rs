use std::fs;
use std::path::{Path, PathBuf};

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::Engine as _;
use log::{error, info};
use serde_json::Value;

use crate::config::ImportConfig;
use crate::error::ImportError;
use crate::model::Recipe;
use crate::paprika::PaprikaRecipe;
use crate::sanitize::folder_name;

/// Files produced for one recipe.
#[derive(Debug)]
pub struct WrittenRecipe {
    /// Path of the written recipe document
    pub document: PathBuf,
    /// Path of the decoded photo, when there was one
    pub image: Option<PathBuf>,
    /// Why an embedded photo could not be stored; the document is written anyway
    pub photo_error: Option<ImportError>,
}

/// Writes `recipe` into its own folder under `output_dir`.
///
/// An embedded photo is decoded to the configured image file and the
/// recipe's `image` field is pointed at it. A bad photo is logged and left
/// out; failing to create the folder or write the document abandons the
/// recipe.
pub fn write_recipe(
    mut recipe: Recipe,
    paprika: &PaprikaRecipe,
    output_dir: &Path,
    label: &str,
    config: &ImportConfig,
) -> Result<WrittenRecipe, ImportError> {
    let title = recipe.title();
    let folder = output_dir.join(folder_name(&title));
    fs::create_dir_all(&folder)?;

    let mut image = None;
    let mut photo_error = None;
    if let Some(photo) = paprika.photo() {
        let image_path = folder.join(&config.image_file_name);
        match store_photo(photo, &image_path) {
            Ok(()) => {
                recipe.image = Value::String(config.image_file_name.clone());
                image = Some(image_path);
            }
            Err(e) => {
                error!("Error decoding photo for recipe '{}': {}", title, e);
                photo_error = Some(e);
            }
        }
    }

    let document = folder.join(&config.document_file_name);
    if let Err(e) = write_document(&recipe, &document) {
        error!("Error writing recipe '{}': {}", title, e);
        return Err(e);
    }

    let source = if label.is_empty() { title.as_str() } else { label };
    info!("Converted {} -> {}", source, document.display());

    Ok(WrittenRecipe {
        document,
        image,
        photo_error,
    })
}

fn store_photo(photo: &Value, path: &Path) -> Result<(), ImportError> {
    let encoded = photo.as_str().ok_or(ImportError::PhotoNotText)?;
    let bytes = decode_photo(encoded)?;
    fs::write(path, bytes)?;
    Ok(())
}

/// Standard alphabet with required padding; stray bits in the last symbol are ignored.
const PHOTO_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_allow_trailing_bits(true),
);

/// Decodes a base64 photo, skipping line breaks and any other bytes outside
/// the alphabet.
fn decode_photo(encoded: &str) -> Result<Vec<u8>, base64::DecodeError> {
    let compact: Vec<u8> = encoded
        .bytes()
        .filter(|b| b.is_ascii_alphanumeric() || matches!(b, b'+' | b'/' | b'='))
        .collect();
    PHOTO_ENGINE.decode(compact)
}

fn write_document(recipe: &Recipe, path: &Path) -> Result<(), ImportError> {
    let json = recipe.to_json_pretty()?;
    fs::write(path, json)?;
    Ok(())
}
