//! Per-language vocabularies compiled into matchers once at startup.

use crate::config::Vocabulary;
use crate::error::RecipeError;
use log::debug;
use regex::Regex;
use std::collections::{HashMap, HashSet};

/// Matchers built from one language's [`Vocabulary`].
#[derive(Debug)]
pub struct LanguageProfile {
    pub lang: String,
    /// `^(unit) (rest)$`, units tried longest first
    pub(crate) unit: Option<Regex>,
    pub(crate) staples: HashSet<String>,
    /// Whole-word `digits[-digits] minute-word`
    pub(crate) duration: Option<Regex>,
    /// Lead-in phrases and whole-word section headers
    pub(crate) boilerplate: Option<Regex>,
}

/// Alternation of escaped words, longest first so `cans` wins over `can`.
fn alternation(words: &[String]) -> Option<String> {
    let mut words = words
        .iter()
        .map(|w| w.trim())
        .filter(|w| !w.is_empty())
        .collect::<Vec<_>>();
    if words.is_empty() {
        return None;
    }
    words.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
    words.dedup();
    Some(
        words
            .iter()
            .map(|w| regex::escape(w))
            .collect::<Vec<_>>()
            .join("|"),
    )
}

impl LanguageProfile {
    pub fn compile(lang: &str, vocabulary: &Vocabulary) -> Result<Self, regex::Error> {
        let unit = alternation(&vocabulary.units)
            .map(|units| Regex::new(&format!(r"^({units}) (.+)$")))
            .transpose()?;
        let duration = alternation(&vocabulary.minute_units)
            .map(|minutes| Regex::new(&format!(r"\b\d+(?:[-–]\d+)? (?:{minutes})\b")))
            .transpose()?;

        let mut patterns = Vec::new();
        if let Some(lead_ins) = alternation(&vocabulary.lead_ins) {
            patterns.push(format!("(?:{lead_ins})"));
        }
        if let Some(headers) = alternation(&vocabulary.section_headers) {
            patterns.push(format!(r"\b(?:{headers})\b:?"));
        }
        let boilerplate = if patterns.is_empty() {
            None
        } else {
            Some(Regex::new(&patterns.join("|"))?)
        };

        Ok(Self {
            lang: lang.to_string(),
            unit,
            staples: vocabulary.staples.iter().cloned().collect(),
            duration,
            boilerplate,
        })
    }

    pub fn is_staple(&self, name: &str) -> bool {
        self.staples.contains(name)
    }
}

/// Read-only mapping from language code to compiled profile.
#[derive(Debug)]
pub struct VocabularyTable {
    profiles: HashMap<String, LanguageProfile>,
    default_language: String,
}

impl VocabularyTable {
    pub fn new(
        vocabularies: &HashMap<String, Vocabulary>,
        default_language: &str,
    ) -> Result<Self, RecipeError> {
        let mut profiles = HashMap::new();
        for (lang, vocabulary) in vocabularies {
            let profile = LanguageProfile::compile(lang, vocabulary).map_err(|source| {
                RecipeError::VocabularyError {
                    lang: lang.clone(),
                    source,
                }
            })?;
            debug!(
                "Compiled vocabulary for '{}' ({} units, {} staples)",
                lang,
                vocabulary.units.len(),
                vocabulary.staples.len()
            );
            profiles.insert(lang.clone(), profile);
        }

        if !profiles.contains_key(default_language) {
            return Err(RecipeError::MissingDefaultLanguage(
                default_language.to_string(),
            ));
        }

        Ok(Self {
            profiles,
            default_language: default_language.to_string(),
        })
    }

    pub fn supports(&self, lang: &str) -> bool {
        self.profiles.contains_key(lang)
    }

    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    /// Profile for `lang`, or the default language's profile if unsupported
    pub fn profile(&self, lang: &str) -> &LanguageProfile {
        self.profiles
            .get(lang)
            .unwrap_or_else(|| &self.profiles[&self.default_language])
    }
}
