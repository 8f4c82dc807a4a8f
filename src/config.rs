use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

/// File naming used when reading exports and writing recipe folders
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ImportConfig {
    /// Extension of a single gzip-compressed recipe
    pub recipe_extension: String,
    /// Extension of a zip bulk export holding many recipe files
    pub bundle_extension: String,
    /// Name of the decoded photo inside a recipe folder
    pub image_file_name: String,
    /// Name of the recipe document inside a recipe folder
    pub document_file_name: String,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            recipe_extension: ".paprikarecipe".to_string(),
            bundle_extension: ".paprikarecipes".to_string(),
            image_file_name: "full.jpg".to_string(),
            document_file_name: "recipe.json".to_string(),
        }
    }
}

impl ImportConfig {
    /// Load configuration from file and environment variables
    ///
    /// For library callers; the command line always uses the defaults.
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with PAPRIKA_IMPORT__ prefix
    /// 2. paprika-import.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: PAPRIKA_IMPORT__IMAGE_FILE_NAME
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("paprika-import").required(false))
            .add_source(Environment::with_prefix("PAPRIKA_IMPORT").separator("__"))
            .build()?
            .try_deserialize()
    }

    /// Parse configuration from toml text, falling back to defaults for missing keys
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from_str(text, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    /// Whether `name` ends with the single recipe extension, ignoring case
    pub fn is_recipe_file(&self, name: &str) -> bool {
        ends_with_ignore_case(name, &self.recipe_extension)
    }

    /// Whether `name` ends with the bulk export extension, ignoring case
    pub fn is_bundle_file(&self, name: &str) -> bool {
        ends_with_ignore_case(name, &self.bundle_extension)
    }
}

fn ends_with_ignore_case(name: &str, suffix: &str) -> bool {
    name.to_lowercase().ends_with(&suffix.to_lowercase())
}
