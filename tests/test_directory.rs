use flate2::write::GzEncoder;
use flate2::Compression;
use paprika_import::{convert_directory, ImportConfig, PaprikaImporter};
use serde_json::{json, Value};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::TempDir;

fn write_paprikarecipe(path: &Path, recipe: &Value) {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(recipe.to_string().as_bytes()).unwrap();
    fs::write(path, encoder.finish().unwrap()).unwrap();
}

#[test]
fn test_directory_of_recipes() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("export");
    fs::create_dir(&input).unwrap();
    write_paprikarecipe(&input.join("Tea.paprikarecipe"), &json!({"name": "Tea"}));
    write_paprikarecipe(&input.join("Coffee.PaprikaRecipe"), &json!({"name": "Coffee"}));
    fs::write(input.join("notes.txt"), b"not a recipe").unwrap();
    let output = dir.path().join("out");

    let report = PaprikaImporter::builder()
        .input(&input)
        .output(&output)
        .run()
        .unwrap();

    assert_eq!(report.converted.len(), 2);
    assert!(report.failures.is_empty());
    assert!(output.join("tea").join("recipe.json").exists());
    assert!(output.join("coffee").join("recipe.json").exists());
}

#[test]
fn test_subdirectories_are_not_searched() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("nested");
    fs::create_dir(&nested).unwrap();
    write_paprikarecipe(&nested.join("Tea.paprikarecipe"), &json!({"name": "Tea"}));
    // a directory with a recipe extension is not a recipe
    fs::create_dir(dir.path().join("folder.paprikarecipe")).unwrap();
    let output = dir.path().join("out");

    let report = convert_directory(dir.path(), &output, &ImportConfig::default());

    assert!(report.converted.is_empty());
    assert!(report.failures.is_empty());
    assert!(!output.exists());
}

#[test]
fn test_broken_file_does_not_stop_the_directory() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("export");
    fs::create_dir(&input).unwrap();
    write_paprikarecipe(&input.join("Tea.paprikarecipe"), &json!({"name": "Tea"}));
    fs::write(input.join("Broken.paprikarecipe"), b"garbage").unwrap();
    let output = dir.path().join("out");

    let report = convert_directory(&input, &output, &ImportConfig::default());

    assert_eq!(report.converted, vec![output.join("tea").join("recipe.json")]);
    assert_eq!(report.failures.len(), 1);
    assert!(report.failures[0].source.ends_with("Broken.paprikarecipe"));
}

#[test]
fn test_missing_directory_is_reported() {
    let dir = TempDir::new().unwrap();

    let report = convert_directory(
        &dir.path().join("missing"),
        dir.path(),
        &ImportConfig::default(),
    );

    assert_eq!(report.failures.len(), 1);
}
