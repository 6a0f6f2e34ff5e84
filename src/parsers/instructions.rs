use crate::vocabulary::LanguageProfile;
use once_cell::sync::Lazy;
use regex::Regex;

/// Decorative step numbers such as "2.\u{a0}" or "2. "
static STEP_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+\.[\x{a0} ]").unwrap());

const PARAGRAPH_BREAK: &str = "\n\n";

/// Splits raw instruction text into trimmed, non-empty steps in original order.
pub fn normalize_instructions<S: AsRef<str>>(raw: &[S], profile: &LanguageProfile) -> Vec<String> {
    let text = raw.iter().map(AsRef::as_ref).collect::<Vec<_>>().join("\n");
    let text = STEP_MARKER.replace_all(&text, PARAGRAPH_BREAK);
    let text = match &profile.boilerplate {
        Some(re) => re.replace_all(&text, PARAGRAPH_BREAK).into_owned(),
        None => text.into_owned(),
    };

    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}
