use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::collections::HashMap;

/// Top-level settings for the recipe viewer
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    /// Language used when the document's language is unknown or unsupported
    #[serde(default = "default_language")]
    pub default_language: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// User agent sent when fetching recipe pages
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Extra or replacement vocabularies, keyed by ISO 639-1 language code
    #[serde(default)]
    pub languages: HashMap<String, Vocabulary>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_language: default_language(),
            timeout: default_timeout(),
            user_agent: default_user_agent(),
            languages: HashMap::new(),
        }
    }
}

/// Word lists that drive parsing and annotation for one language
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    /// Unit words stripped from the front of an ingredient name
    #[serde(default)]
    pub units: Vec<String>,
    /// Ingredient names too common to highlight in instructions
    #[serde(default)]
    pub staples: Vec<String>,
    /// Words that mark a number as a duration in minutes
    #[serde(default)]
    pub minute_units: Vec<String>,
    /// Boilerplate phrases removed from instruction text wherever they occur
    #[serde(default)]
    pub lead_ins: Vec<String>,
    /// Section headings removed when they make up a whole line
    #[serde(default)]
    pub section_headers: Vec<String>,
}

fn strings(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

impl Vocabulary {
    pub fn swedish() -> Self {
        Self {
            units: strings(&["burk", "påse", "knippe", "förpackning"]),
            staples: strings(&["olivolja", "salt", "svartpeppar", "vinäger"]),
            minute_units: strings(&["minuter", "minut", "min"]),
            lead_ins: strings(&["Gör så här:"]),
            section_headers: strings(&["Servering"]),
        }
    }

    pub fn english() -> Self {
        Self {
            units: strings(&["can", "cans", "bag", "bags", "bunch", "bunches", "package", "packages"]),
            staples: strings(&["olive oil", "salt", "black pepper", "pepper", "vinegar", "water"]),
            minute_units: strings(&["minutes", "minute", "mins", "min"]),
            lead_ins: strings(&["Here's how:"]),
            section_headers: strings(&["Serving"]),
        }
    }

    pub fn danish() -> Self {
        Self {
            units: strings(&["dåse", "pose", "bundt", "pakke"]),
            staples: strings(&["olivenolie", "salt", "peber", "eddike"]),
            minute_units: strings(&["minutter", "minut", "min"]),
            lead_ins: strings(&["Sådan gør du:"]),
            section_headers: strings(&["Servering"]),
        }
    }
}

impl Settings {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }

    /// Built-in vocabularies with configured languages layered on top
    pub fn vocabularies(&self) -> HashMap<String, Vocabulary> {
        let mut vocabularies = HashMap::from([
            ("sv".to_string(), Vocabulary::swedish()),
            ("en".to_string(), Vocabulary::english()),
            ("da".to_string(), Vocabulary::danish()),
        ]);
        for (lang, vocabulary) in &self.languages {
            vocabularies.insert(lang.clone(), vocabulary.clone());
        }
        vocabularies
    }
}

// Default value functions
fn default_language() -> String {
    "sv".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (compatible; RecipeViewer/1.0)".to_string()
}

/// Load configuration from file and environment variables
///
/// Configuration is loaded with the following priority (highest to lowest):
/// 1. Environment variables with RECIPEVIEWER__ prefix
/// 2. recipeviewer.toml file in current directory
/// 3. Default values
///
/// Environment variable format: RECIPEVIEWER__DEFAULT_LANGUAGE
pub fn load_config() -> Result<Settings, ConfigError> {
    let settings = Config::builder()
        .add_source(File::with_name("recipeviewer").required(false))
        .add_source(
            Environment::with_prefix("RECIPEVIEWER")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    #[test]
    fn test_default_values() {
        let settings = Settings::default();
        assert_eq!(settings.default_language, "sv");
        assert_eq!(settings.timeout, 30);
        assert!(settings.languages.is_empty());
    }

    #[test]
    fn test_builtin_vocabularies() {
        let vocabularies = Settings::default().vocabularies();
        assert_eq!(vocabularies.len(), 3);
        let sv = &vocabularies["sv"];
        assert_eq!(sv.units, vec!["burk", "påse", "knippe", "förpackning"]);
        assert!(sv.staples.contains(&"olivolja".to_string()));
        assert!(!sv.units.contains(&"msk".to_string()));
    }

    #[test]
    fn test_configured_language_overrides_builtin() {
        let settings: Settings = Config::builder()
            .add_source(config::File::from_str(
                r#"
                default_language = "en"

                [languages.sv]
                units = ["msk", "tsk"]

                [languages.nb]
                units = ["boks"]
                staples = ["salt"]
                "#,
                FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.default_language, "en");
        assert_eq!(settings.timeout, 30);

        let vocabularies = settings.vocabularies();
        assert_eq!(vocabularies["sv"].units, vec!["msk", "tsk"]);
        assert!(vocabularies["sv"].staples.is_empty());
        assert_eq!(vocabularies["nb"].staples, vec!["salt"]);
        assert_eq!(vocabularies["en"], Vocabulary::english());
    }
}
