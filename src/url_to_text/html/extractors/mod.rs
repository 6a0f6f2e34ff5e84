use crate::model::RawRecipe;
use scraper::Html;

mod microdata;

pub use microdata::MicroDataExtractor;

pub struct ParsingContext {
    pub url: String,
    pub document: Html,
}

pub trait Extractor {
    /// Raw recipe fields, or `None` when the document carries no recipe markup.
    fn parse(&self, context: &ParsingContext) -> Option<RawRecipe>;
}
