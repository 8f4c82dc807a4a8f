use std::io::Read;

use flate2::read::MultiGzDecoder;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::ImportError;
use crate::model::{AggregateRating, Recipe};

/// One recipe as stored in a `.paprikarecipe` file.
///
/// Every key is optional and kept as raw JSON; unknown keys are ignored.
/// `None` means the key is absent, an explicit `null` is `Some(Value::Null)`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PaprikaRecipe {
    #[serde(deserialize_with = "present")]
    pub name: Option<Value>,
    #[serde(deserialize_with = "present")]
    pub image_url: Option<Value>,
    #[serde(deserialize_with = "present")]
    pub directions: Option<Value>,
    #[serde(deserialize_with = "present")]
    pub ingredients: Option<Value>,
    #[serde(deserialize_with = "present")]
    pub description: Option<Value>,
    #[serde(deserialize_with = "present")]
    pub cook_time: Option<Value>,
    #[serde(deserialize_with = "present")]
    pub prep_time: Option<Value>,
    #[serde(deserialize_with = "present")]
    pub total_time: Option<Value>,
    #[serde(deserialize_with = "present")]
    pub servings: Option<Value>,
    #[serde(deserialize_with = "present")]
    pub rating: Option<Value>,
    #[serde(deserialize_with = "present")]
    pub source: Option<Value>,
    #[serde(deserialize_with = "present")]
    pub source_url: Option<Value>,
    #[serde(deserialize_with = "present")]
    pub notes: Option<Value>,
    #[serde(deserialize_with = "present")]
    pub difficulty: Option<Value>,
    #[serde(deserialize_with = "present")]
    pub nutritional_info: Option<Value>,
    #[serde(deserialize_with = "present")]
    pub categories: Option<Value>,
    /// Base64 encoded photo, usually a JPEG
    #[serde(deserialize_with = "present")]
    pub photo_data: Option<Value>,
}

/// Keeps a present `null` instead of folding it into `None`.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl PaprikaRecipe {
    /// Reads one gzip-compressed JSON recipe.
    ///
    /// The document must be a JSON object; arrays and scalars are rejected.
    pub fn from_gzip<R: Read>(reader: R) -> Result<Self, ImportError> {
        let decoder = MultiGzDecoder::new(reader);
        match serde_json::from_reader::<_, Value>(decoder)? {
            document @ Value::Object(_) => Ok(serde_json::from_value(document)?),
            _ => Err(ImportError::NotAnObject),
        }
    }

    /// Photo payload, if the recipe carries a non-empty one.
    pub fn photo(&self) -> Option<&Value> {
        self.photo_data.as_ref().filter(|value| is_truthy(value))
    }
}

/// Present values that count as "set": not null, not empty, not zero or false.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

fn text_or_empty(value: &Option<Value>) -> Value {
    value.clone().unwrap_or_else(|| Value::String(String::new()))
}

/// Splits a newline separated block into trimmed, non-empty lines.
fn split_lines(value: &Option<Value>) -> Vec<String> {
    match value {
        Some(Value::String(block)) => block
            .split('\n')
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

impl From<&PaprikaRecipe> for Recipe {
    fn from(paprika: &PaprikaRecipe) -> Self {
        let name = paprika
            .name
            .clone()
            .unwrap_or_else(|| Value::String("Untitled".to_string()));

        Recipe {
            context: Recipe::CONTEXT.to_string(),
            kind: Recipe::KIND.to_string(),
            name,
            image: text_or_empty(&paprika.image_url),
            ingredients: split_lines(&paprika.ingredients),
            instructions: split_lines(&paprika.directions),
            description: text_or_empty(&paprika.description),
            cook_time: text_or_empty(&paprika.cook_time),
            prep_time: text_or_empty(&paprika.prep_time),
            total_time: text_or_empty(&paprika.total_time),
            recipe_yield: text_or_empty(&paprika.servings),
            aggregate_rating: AggregateRating::single(
                paprika.rating.clone().unwrap_or_else(|| Value::from(0)),
            ),
            author: text_or_empty(&paprika.source),
            url: text_or_empty(&paprika.source_url),
            notes: text_or_empty(&paprika.notes),
            difficulty: text_or_empty(&paprika.difficulty),
            nutritional_info: text_or_empty(&paprika.nutritional_info),
            category: paprika
                .categories
                .clone()
                .unwrap_or_else(|| Value::Array(Vec::new())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use serde_json::json;
    use std::io::Write;

    fn parse(value: Value) -> PaprikaRecipe {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_lines_are_trimmed_and_blank_lines_dropped() {
        let paprika = parse(json!({
            "ingredients": "a\nb\n\nc",
            "directions": "  Preheat oven \r\n\n   \nBake\n",
        }));

        let recipe = Recipe::from(&paprika);

        assert_eq!(recipe.ingredients, vec!["a", "b", "c"]);
        assert_eq!(recipe.instructions, vec!["Preheat oven", "Bake"]);
    }

    #[test]
    fn test_non_string_blocks_give_empty_lists() {
        let paprika = parse(json!({
            "ingredients": ["flour", "water"],
            "directions": 3,
        }));

        let recipe = Recipe::from(&paprika);

        assert!(recipe.ingredients.is_empty());
        assert!(recipe.instructions.is_empty());
    }

    #[test]
    fn test_empty_record_uses_defaults() {
        let recipe = Recipe::from(&PaprikaRecipe::default());

        assert_eq!(recipe.name, json!("Untitled"));
        assert_eq!(recipe.image, json!(""));
        assert_eq!(recipe.description, json!(""));
        assert_eq!(recipe.recipe_yield, json!(""));
        assert_eq!(recipe.aggregate_rating.rating_value, json!(0));
        assert_eq!(recipe.aggregate_rating.rating_count, 1);
        assert_eq!(recipe.category, json!([]));
        assert!(recipe.ingredients.is_empty());
    }

    #[test]
    fn test_fields_are_renamed() {
        let paprika = parse(json!({
            "name": "Tea",
            "image_url": "https://example.com/tea.jpg",
            "description": "Hot",
            "cook_time": "5 min",
            "prep_time": "1 min",
            "total_time": "6 min",
            "servings": "2 cups",
            "rating": 4,
            "source": "Grandma",
            "source_url": "https://example.com/tea",
            "notes": "Use loose leaf",
            "difficulty": "Easy",
            "nutritional_info": "0 kcal",
            "categories": ["Drinks", "Breakfast"],
            "uid": "ignored",
        }));

        let value = serde_json::to_value(Recipe::from(&paprika)).unwrap();

        assert_eq!(value["@context"], "https://schema.org/");
        assert_eq!(value["@type"], "Recipe");
        assert_eq!(value["name"], "Tea");
        assert_eq!(value["image"], "https://example.com/tea.jpg");
        assert_eq!(value["cookTime"], "5 min");
        assert_eq!(value["prepTime"], "1 min");
        assert_eq!(value["totalTime"], "6 min");
        assert_eq!(value["recipeYield"], "2 cups");
        assert_eq!(value["aggregateRating"]["ratingValue"], 4);
        assert_eq!(value["aggregateRating"]["ratingCount"], 1);
        assert_eq!(value["author"], "Grandma");
        assert_eq!(value["url"], "https://example.com/tea");
        assert_eq!(value["notes"], "Use loose leaf");
        assert_eq!(value["difficulty"], "Easy");
        assert_eq!(value["nutritionalInfo"], "0 kcal");
        assert_eq!(value["category"], json!(["Drinks", "Breakfast"]));
        assert!(value.get("uid").is_none());
    }

    #[test]
    fn test_mapping_is_pure() {
        let paprika = parse(json!({"name": "Soup", "ingredients": "water\nsalt"}));
        assert_eq!(Recipe::from(&paprika), Recipe::from(&paprika));
    }

    #[test]
    fn test_explicit_nulls_are_copied() {
        let paprika = parse(json!({
            "name": "Tea",
            "image_url": null,
            "rating": null,
            "categories": null,
            "notes": null,
            "ingredients": null,
        }));

        let recipe = Recipe::from(&paprika);

        assert_eq!(paprika.image_url, Some(Value::Null));
        assert_eq!(recipe.image, Value::Null);
        assert_eq!(recipe.aggregate_rating.rating_value, Value::Null);
        assert_eq!(recipe.category, Value::Null);
        assert_eq!(recipe.notes, Value::Null);
        assert!(recipe.ingredients.is_empty());
        // absent keys still get their defaults
        assert_eq!(recipe.description, json!(""));
    }

    #[test]
    fn test_null_name_is_kept() {
        let recipe = Recipe::from(&parse(json!({"name": null})));
        assert_eq!(recipe.name, Value::Null);
        assert_eq!(recipe.title(), "");
    }

    #[test]
    fn test_photo_requires_a_value() {
        assert!(parse(json!({})).photo().is_none());
        assert!(parse(json!({"photo_data": ""})).photo().is_none());
        assert!(parse(json!({"photo_data": null})).photo().is_none());
        assert!(parse(json!({"photo_data": "aGk="})).photo().is_some());
    }

    #[test]
    fn test_from_gzip() {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(br#"{"name":"Tea","rating":4}"#).unwrap();
        let bytes = encoder.finish().unwrap();

        let paprika = PaprikaRecipe::from_gzip(&bytes[..]).unwrap();

        assert_eq!(paprika.name, Some(json!("Tea")));
        assert_eq!(paprika.rating, Some(json!(4)));
    }

    #[test]
    fn test_from_gzip_rejects_non_objects() {
        let documents: [&[u8]; 4] = [b"[\"Tea\"]", b"\"Tea\"", b"42", b"null"];
        for document in documents {
            let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
            encoder.write_all(document).unwrap();
            let bytes = encoder.finish().unwrap();

            let result = PaprikaRecipe::from_gzip(&bytes[..]);

            assert!(matches!(result, Err(ImportError::NotAnObject)));
        }
    }

    #[test]
    fn test_from_gzip_rejects_plain_json() {
        let result = PaprikaRecipe::from_gzip(&br#"{"name":"Tea"}"#[..]);
        assert!(result.is_err());
    }
}
