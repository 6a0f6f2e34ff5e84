//! Pluggable language capabilities: stemming and language detection.

use rust_stemmers::Algorithm;
use whatlang::Lang;

/// Reduces a word (or phrase) to its stem.
pub trait Stemmer {
    fn stem(&self, word: &str) -> String;
}

/// Guesses the ISO 639-1 language code of a text.
pub trait LanguageDetector {
    fn detect(&self, text: &str) -> Option<String>;
}

/// Snowball stemmer for one language.
pub struct SnowballStemmer {
    inner: rust_stemmers::Stemmer,
}

impl SnowballStemmer {
    /// Returns `None` for languages without a Snowball algorithm.
    pub fn for_language(code: &str) -> Option<Self> {
        let algorithm = match code {
            "sv" => Algorithm::Swedish,
            "da" => Algorithm::Danish,
            "nb" | "nn" | "no" => Algorithm::Norwegian,
            "en" => Algorithm::English,
            "de" => Algorithm::German,
            "nl" => Algorithm::Dutch,
            "fi" => Algorithm::Finnish,
            "fr" => Algorithm::French,
            "it" => Algorithm::Italian,
            "es" => Algorithm::Spanish,
            "pt" => Algorithm::Portuguese,
            _ => return None,
        };
        Some(Self {
            inner: rust_stemmers::Stemmer::create(algorithm),
        })
    }
}

impl Stemmer for SnowballStemmer {
    /// Input is lowercased first, as Snowball expects.
    fn stem(&self, word: &str) -> String {
        self.inner.stem(&word.to_lowercase()).into_owned()
    }
}

/// Trigram-based detection backed by `whatlang`.
#[derive(Debug, Default, Clone, Copy)]
pub struct WhatlangDetector;

impl LanguageDetector for WhatlangDetector {
    fn detect(&self, text: &str) -> Option<String> {
        let lang = whatlang::detect_lang(text)?;
        let code = match lang {
            Lang::Swe => "sv",
            Lang::Dan => "da",
            Lang::Nob => "nb",
            Lang::Eng => "en",
            Lang::Deu => "de",
            Lang::Nld => "nl",
            Lang::Fin => "fi",
            Lang::Fra => "fr",
            Lang::Ita => "it",
            Lang::Spa => "es",
            Lang::Por => "pt",
            // Unsupported downstream; callers fall back to their default
            other => other.code(),
        };
        Some(code.to_string())
    }
}

/// Reduces a declared `lang` attribute such as `sv-SE` to its primary subtag.
pub fn primary_subtag(lang: &str) -> Option<String> {
    let primary = lang.trim().split(['-', '_']).next()?.to_ascii_lowercase();
    if primary.is_empty() {
        None
    } else {
        Some(primary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_subtag_strips_region() {
        assert_eq!(primary_subtag("sv-SE").as_deref(), Some("sv"));
        assert_eq!(primary_subtag("EN_us").as_deref(), Some("en"));
        assert_eq!(primary_subtag("da").as_deref(), Some("da"));
        assert_eq!(primary_subtag("  ").as_deref(), None);
    }

    #[test]
    fn swedish_stemmer_keeps_short_roots() {
        let stemmer = SnowballStemmer::for_language("sv").unwrap();
        assert_eq!(stemmer.stem("lök"), "lök");
    }

    #[test]
    fn stems_are_lowercase() {
        let stemmer = SnowballStemmer::for_language("sv").unwrap();
        assert_eq!(stemmer.stem("Lök"), "lök");
        assert_eq!(stemmer.stem("Gul lök"), stemmer.stem("gul lök"));
    }

    #[test]
    fn unknown_language_has_no_stemmer() {
        assert!(SnowballStemmer::for_language("xx").is_none());
    }

    #[test]
    fn detects_swedish_prose() {
        let text = "Skala och hacka löken fint. Koka pastan enligt anvisningen på förpackningen \
                    och låt den rinna av i ett durkslag innan du blandar med såsen.";
        assert_eq!(WhatlangDetector.detect(text).as_deref(), Some("sv"));
    }
}
