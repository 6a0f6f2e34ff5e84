use serde::Serialize;
use std::collections::BTreeMap;

/// Placeholder for optional top-level fields the document does not provide.
pub const MISSING_FIELD: &str = "???";

/// Recipe fields as found in the document, before any parsing.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RawRecipe {
    pub source_url: String,
    pub name: String,
    pub image_url: Option<String>,
    pub lang_raw: Option<String>,
    pub total_time_raw: String,
    pub recipe_yield_raw: String,
    pub ingredients_raw: Vec<String>,
    pub instructions_raw: Vec<String>,
}

/// A single structured ingredient line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ingredient {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub is_staple: bool,
    /// Slug of `name`, used as cross-reference key and CSS class suffix
    pub id: String,
}

/// A fully parsed recipe with annotated instruction steps.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recipe {
    #[serde(flatten)]
    pub raw: RawRecipe,
    pub lang: String,
    pub ingredients: Vec<Ingredient>,
    /// Ingredients keyed by id. Later duplicates overwrite earlier ones.
    pub ingredient_map: BTreeMap<String, Ingredient>,
    pub instructions: Vec<String>,
    pub instructions_html: Vec<String>,
}

impl Recipe {
    pub fn ingredient(&self, id: &str) -> Option<&Ingredient> {
        self.ingredient_map.get(id)
    }
}
