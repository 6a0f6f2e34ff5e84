use crate::assembler::RecipeParser;
use crate::config::Settings;
use crate::error::RecipeError;
use crate::model::{RawRecipe, Recipe};
use crate::url_to_text::fetchers::RequestFetcher;
use crate::url_to_text::html::extractors::{Extractor, MicroDataExtractor, ParsingContext};
use log::info;
use scraper::Html;
use std::path::Path;
use std::time::Duration;

/// Process a URL or local file path into a parsed recipe
///
/// This pipeline:
/// 1. Fetches HTML over HTTP(S), or reads it from disk for anything else
/// 2. Extracts the microdata Recipe item
/// 3. Parses ingredients and annotates instructions
///
/// # Returns
/// * `Ok(Some(recipe))` - The parsed recipe
/// * `Ok(None)` - The document has no recipe markup
/// * `Err(...)` - If the document could not be fetched or read
pub async fn process(
    source: &str,
    parser: &RecipeParser,
    settings: &Settings,
) -> Result<Option<Recipe>, RecipeError> {
    let (url, html) = if source.starts_with("http://") || source.starts_with("https://") {
        let fetcher =
            RequestFetcher::new(Some(Duration::from_secs(settings.timeout)), &settings.user_agent)?;
        (source.to_string(), fetcher.fetch(source).await?)
    } else {
        let path = tokio::fs::canonicalize(source).await?;
        let html = tokio::fs::read_to_string(&path).await?;
        (file_url(&path), html)
    };

    Ok(extract_raw(&url, &html).map(|raw| parser.parse(raw)))
}

/// Extracts raw recipe fields from an HTML document
pub fn extract_raw(url: &str, html: &str) -> Option<RawRecipe> {
    let context = ParsingContext {
        url: url.to_string(),
        document: Html::parse_document(html),
    };

    let raw = MicroDataExtractor.parse(&context);
    match &raw {
        Some(recipe) => info!("Extracted '{}' from {}", recipe.name, url),
        None => info!("No recipe found at {}", url),
    }
    raw
}

fn file_url(path: &Path) -> String {
    format!("file://{}", path.display())
}
