use crate::model::Ingredient;
use crate::slug::slug;
use crate::vocabulary::LanguageProfile;
use once_cell::sync::Lazy;
use regex::Regex;

/// Leading quantity: digits, vulgar fractions, hyphens and en-dashes, optionally
/// ranged with "to", then a required space before the rest of the line.
static AMOUNT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([\d¼½¾⅐⅑⅒⅓⅔⅕⅖⅗⅘⅙⅚⅛⅜⅝⅞\-–](?:[\d¼½¾⅐⅑⅒⅓⅔⅕⅖⅗⅘⅙⅚⅛⅜⅝⅞\-– ]|to)*) (.+)$")
        .unwrap()
});

static COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(.+) \((.+)\)$").unwrap());

/// Parses one whitespace-collapsed ingredient line.
///
/// Each stage only looks at what the previous one left behind: amount, then unit,
/// then a trailing parenthetical comment. Whatever remains is the name.
pub fn parse_ingredient(line: &str, profile: &LanguageProfile) -> Ingredient {
    let line = line.trim();

    let (amount, rest) = match AMOUNT.captures(line) {
        Some(caps) => (
            Some(caps[1].trim().to_string()),
            caps.get(2).map_or("", |m| m.as_str()),
        ),
        None => (None, line),
    };

    let (unit, rest) = match profile.unit.as_ref().and_then(|re| re.captures(rest)) {
        Some(caps) => (
            Some(caps[1].to_string()),
            caps.get(2).map_or("", |m| m.as_str()),
        ),
        None => (None, rest),
    };

    let (name, comment) = match COMMENT.captures(rest) {
        Some(caps) => (caps[1].to_string(), Some(caps[2].to_string())),
        None => (rest.to_string(), None),
    };

    Ingredient {
        is_staple: profile.is_staple(&name),
        id: slug(&name),
        amount,
        unit,
        name,
        comment,
    }
}
