use std::fs;
use std::path::PathBuf;

use log::{info, warn};

use crate::config::ImportConfig;
use crate::pipelines::{
    bundle::convert_bundle, directory::convert_directory, file::convert_file, ConversionReport,
    InputKind,
};
use crate::ImportError;

/// Builder for configuring and running a conversion
#[derive(Debug, Default)]
pub struct PaprikaImporterBuilder {
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    config: Option<ImportConfig>,
}

impl PaprikaImporterBuilder {
    /// Set the export to convert: a `.paprikarecipe` file, a directory of
    /// them, or a `.paprikarecipes` bulk export
    ///
    /// # Example
    /// ```
    /// use paprika_import::PaprikaImporter;
    ///
    /// let builder = PaprikaImporter::builder()
    ///     .input("My Recipes.paprikarecipes");
    /// ```
    pub fn input(mut self, path: impl Into<PathBuf>) -> Self {
        self.input = Some(path.into());
        self
    }

    /// Set the directory recipe folders are written into
    ///
    /// It is created if missing.
    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = Some(path.into());
        self
    }

    /// Use explicit settings instead of the defaults
    ///
    /// # Example
    /// ```
    /// use paprika_import::{ImportConfig, PaprikaImporter};
    ///
    /// let builder = PaprikaImporter::builder()
    ///     .input("Tea.paprikarecipe")
    ///     .output("cookbook")
    ///     .config(ImportConfig::default());
    /// ```
    pub fn config(mut self, config: ImportConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Run the conversion
    ///
    /// The output directory is created before the input is looked at.
    ///
    /// # Errors
    /// Returns `ImportError` if:
    /// - No input or output was specified
    /// - The output directory cannot be created
    /// - The input is neither a file nor a directory
    ///
    /// Failures of single recipes are not errors; they are logged and listed
    /// in the returned report.
    ///
    /// # Example
    /// ```no_run
    /// # use paprika_import::PaprikaImporter;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let report = PaprikaImporter::builder()
    ///     .input("My Recipes.paprikarecipes")
    ///     .output("cookbook")
    ///     .run()?;
    /// println!("{} recipes converted", report.converted.len());
    /// # Ok(())
    /// # }
    /// ```
    pub fn run(self) -> Result<ConversionReport, ImportError> {
        let input = self.input.ok_or_else(|| {
            ImportError::BuilderError("No input specified. Use .input()".to_string())
        })?;
        let output = self.output.ok_or_else(|| {
            ImportError::BuilderError("No output directory specified. Use .output()".to_string())
        })?;
        let config = self.config.unwrap_or_default();

        fs::create_dir_all(&output)?;

        let report = match InputKind::detect(&input, &config)? {
            InputKind::Directory => {
                info!("Converting recipes in directory {}", input.display());
                convert_directory(&input, &output, &config)
            }
            InputKind::Bundle => {
                info!("Converting bulk export {}", input.display());
                convert_bundle(&input, &output, &config)
            }
            InputKind::File => convert_file(&input, &output, &config),
            InputKind::Unrecognized => {
                warn!("Unrecognized file type: {}", input.display());
                ConversionReport::default()
            }
        };

        Ok(report)
    }
}

/// Main entry point for the builder API
pub struct PaprikaImporter;

impl PaprikaImporter {
    /// Creates a new builder for converting an export
    ///
    /// # Example
    /// ```
    /// use paprika_import::PaprikaImporter;
    ///
    /// let builder = PaprikaImporter::builder();
    /// ```
    pub fn builder() -> PaprikaImporterBuilder {
        PaprikaImporterBuilder::default()
    }
}
