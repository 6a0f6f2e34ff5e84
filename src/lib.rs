pub mod annotate;
pub mod assembler;
pub mod config;
pub mod error;
pub mod language;
pub mod model;
pub mod parsers;
pub mod pipelines;
pub mod slug;
pub mod url_to_text;
pub mod vocabulary;

pub use assembler::RecipeParser;
pub use config::{Settings, Vocabulary};
pub use error::RecipeError;
pub use model::{Ingredient, RawRecipe, Recipe};

/// Fetch (or read) a recipe document and parse it with default settings.
///
/// Returns `Ok(None)` when the document contains no microdata recipe.
pub async fn fetch_recipe(source: &str) -> Result<Option<Recipe>, RecipeError> {
    let settings = Settings::load()?;
    let parser = RecipeParser::from_settings(&settings)?;
    pipelines::url::process(source, &parser, &settings).await
}

/// Parse an HTML document that has already been loaded.
pub fn parse_document(
    url: &str,
    html: &str,
    parser: &RecipeParser,
) -> Option<Recipe> {
    pipelines::url::extract_raw(url, html).map(|raw| parser.parse(raw))
}
