use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A recipe in the schema.org/Recipe shape read by Nextcloud Cookbook.
///
/// Field order is the key order of the written `recipe.json`. Free-form
/// fields stay [`Value`]s so numbers and lists from the export are copied
/// through as they were.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(rename = "@context")]
    pub context: String,
    #[serde(rename = "@type")]
    pub kind: String,
    pub name: Value,
    pub image: Value,
    #[serde(rename = "recipeIngredient")]
    pub ingredients: Vec<String>,
    #[serde(rename = "recipeInstructions")]
    pub instructions: Vec<String>,
    pub description: Value,
    #[serde(rename = "cookTime")]
    pub cook_time: Value,
    #[serde(rename = "prepTime")]
    pub prep_time: Value,
    #[serde(rename = "totalTime")]
    pub total_time: Value,
    #[serde(rename = "recipeYield")]
    pub recipe_yield: Value,
    #[serde(rename = "aggregateRating")]
    pub aggregate_rating: AggregateRating,
    pub author: Value,
    pub url: Value,
    pub notes: Value,
    pub difficulty: Value,
    #[serde(rename = "nutritionalInfo")]
    pub nutritional_info: Value,
    pub category: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateRating {
    #[serde(rename = "@type")]
    pub kind: String,
    #[serde(rename = "ratingValue")]
    pub rating_value: Value,
    /// Paprika only stores the user's own rating, so there is always one vote.
    #[serde(rename = "ratingCount")]
    pub rating_count: u32,
}

impl AggregateRating {
    pub fn single(rating_value: Value) -> Self {
        AggregateRating {
            kind: "AggregateRating".to_string(),
            rating_value,
            rating_count: 1,
        }
    }
}

impl Recipe {
    pub const CONTEXT: &'static str = "https://schema.org/";
    pub const KIND: &'static str = "Recipe";

    /// Title used to name the recipe folder.
    ///
    /// Numbers and other scalars are rendered as JSON text; null counts as no title.
    pub fn title(&self) -> String {
        match &self.name {
            Value::String(name) => name.clone(),
            Value::Null => String::new(),
            other => other.to_string(),
        }
    }

    /// Pretty-printed JSON with two-space indentation and literal non-ASCII text.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
