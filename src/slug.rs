use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Turns free text into an ASCII, hyphen-separated identifier.
///
/// Diacritics are dropped after decomposition, so `"Lök"` becomes `"lok"`.
/// Text without any ASCII letters or digits maps to an empty string.
pub fn slug(text: &str) -> String {
    static NON_ALNUM: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9]+").unwrap());
    static HYPHENS: Lazy<Regex> = Lazy::new(|| Regex::new(r"-+").unwrap());

    let ascii = text
        .nfkd()
        .filter(char::is_ascii)
        .collect::<String>()
        .to_ascii_lowercase();
    let hyphenated = NON_ALNUM.replace_all(&ascii, "-");
    HYPHENS
        .replace_all(hyphenated.trim_matches('-'), "-")
        .into_owned()
}
