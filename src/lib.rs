//! Convert Paprika recipe exports into Nextcloud Cookbook recipe folders.
//!
//! A `.paprikarecipe` file is one gzip-compressed JSON recipe; a
//! `.paprikarecipes` bulk export is a zip archive of them. Each recipe becomes
//! a folder named after its title holding a schema.org/Recipe `recipe.json`
//! and, when the export embeds a photo, `full.jpg`.

pub mod builder;
pub mod config;
pub mod error;
pub mod model;
pub mod paprika;
pub mod pipelines;
pub mod sanitize;
pub mod writer;

pub use builder::{PaprikaImporter, PaprikaImporterBuilder};
pub use config::ImportConfig;
pub use error::ImportError;
pub use model::{AggregateRating, Recipe};
pub use paprika::PaprikaRecipe;
pub use pipelines::{
    bundle::convert_bundle, directory::convert_directory, file::convert_file, ConversionReport,
    Failure, InputKind,
};
pub use sanitize::folder_name;
pub use writer::{write_recipe, WrittenRecipe};
