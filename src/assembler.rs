use crate::annotate::{annotate_with, IngredientMatcher};
use crate::config::Settings;
use crate::error::RecipeError;
use crate::language::{primary_subtag, LanguageDetector, SnowballStemmer, Stemmer, WhatlangDetector};
use crate::model::{Ingredient, RawRecipe, Recipe};
use crate::parsers::{normalize_instructions, parse_ingredient};
use crate::vocabulary::VocabularyTable;
use log::{debug, info, warn};
use std::collections::BTreeMap;

/// Turns raw extracted recipes into parsed, annotated ones.
///
/// Holds only read-only state, so one parser can serve any number of recipes.
pub struct RecipeParser {
    vocabularies: VocabularyTable,
    detector: Box<dyn LanguageDetector + Send + Sync>,
    stemmer: Option<Box<dyn Stemmer + Send + Sync>>,
}

impl RecipeParser {
    pub fn new(vocabularies: VocabularyTable) -> Self {
        Self {
            vocabularies,
            detector: Box::new(WhatlangDetector),
            stemmer: None,
        }
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, RecipeError> {
        let table = VocabularyTable::new(&settings.vocabularies(), &settings.default_language)?;
        Ok(Self::new(table))
    }

    /// Replace the language detector
    pub fn with_detector(mut self, detector: impl LanguageDetector + Send + Sync + 'static) -> Self {
        self.detector = Box::new(detector);
        self
    }

    /// Use one stemmer for every language instead of the Snowball defaults
    pub fn with_stemmer(mut self, stemmer: impl Stemmer + Send + Sync + 'static) -> Self {
        self.stemmer = Some(Box::new(stemmer));
        self
    }

    /// Picks a supported language: declared `lang`, then detection, then the default.
    pub fn resolve_language(&self, raw: &RawRecipe) -> String {
        if let Some(declared) = raw.lang_raw.as_deref().and_then(primary_subtag) {
            if self.vocabularies.supports(&declared) {
                debug!("Using declared document language '{}'", declared);
                return declared;
            }
            debug!("Declared language '{}' is not supported", declared);
        }

        let sample = std::iter::once(raw.name.as_str())
            .chain(raw.instructions_raw.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join("\n");
        match self.detector.detect(&sample) {
            Some(detected) if self.vocabularies.supports(&detected) => {
                debug!("Detected language '{}'", detected);
                detected
            }
            other => {
                let fallback = self.vocabularies.default_language().to_string();
                info!(
                    "Language {:?} unavailable for '{}', falling back to '{}'",
                    other, raw.name, fallback
                );
                fallback
            }
        }
    }

    /// Parses ingredients and instructions, then annotates every step.
    pub fn parse(&self, raw: RawRecipe) -> Recipe {
        let lang = self.resolve_language(&raw);
        let profile = self.vocabularies.profile(&lang);

        let ingredients: Vec<Ingredient> = raw
            .ingredients_raw
            .iter()
            .map(|line| parse_ingredient(&collapse_whitespace(line), profile))
            .collect();

        let mut ingredient_map = BTreeMap::new();
        for ingredient in &ingredients {
            ingredient_map.insert(ingredient.id.clone(), ingredient.clone());
        }

        let instructions = normalize_instructions(&raw.instructions_raw, profile);

        let snowball;
        let stemmer: Option<&dyn Stemmer> = match &self.stemmer {
            Some(stemmer) => Some(&**stemmer),
            None => {
                snowball = SnowballStemmer::for_language(&lang)
                    .or_else(|| SnowballStemmer::for_language(self.vocabularies.default_language()));
                snowball.as_ref().map(|s| s as &dyn Stemmer)
            }
        };

        let instructions_html = match stemmer {
            Some(stemmer) => {
                let matcher = IngredientMatcher::new(&ingredients, stemmer);
                instructions
                    .iter()
                    .map(|step| annotate_with(step, &matcher, profile))
                    .collect()
            }
            None => {
                warn!("No stemmer for '{}', instructions left unannotated", lang);
                instructions.clone()
            }
        };

        debug!(
            "Parsed '{}': {} ingredients, {} steps",
            raw.name,
            ingredients.len(),
            instructions.len()
        );

        Recipe {
            raw,
            lang,
            ingredients,
            ingredient_map,
            instructions,
            instructions_html,
        }
    }
}

fn collapse_whitespace(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}
