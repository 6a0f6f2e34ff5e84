//! Inline markup for instruction steps.
//!
//! Spans are always found against an unmodified string and spliced in a single
//! left-to-right rewrite, so earlier insertions never shift later match offsets.

use crate::language::Stemmer;
use crate::model::Ingredient;
use crate::vocabulary::LanguageProfile;
use log::warn;
use regex::Regex;
use std::collections::BTreeMap;
use std::ops::Range;

pub const DURATION_CLASS: &str = "instruction-time-duration";

/// A byte range of the text to wrap, with the markup that goes around it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    pub span: Range<usize>,
    pub open: String,
    pub close: String,
}

impl Annotation {
    pub fn ingredient(span: Range<usize>, id: &str) -> Self {
        Self {
            span,
            open: format!(r#"<span class="instruction-ingredient-{id}">"#),
            close: "</span>".to_string(),
        }
    }

    pub fn duration(span: Range<usize>) -> Self {
        Self {
            span,
            open: format!(r##"<span class="{DURATION_CLASS}"><a href="#">"##),
            close: "</a></span>".to_string(),
        }
    }
}

/// Wraps every annotation's span in its markup.
///
/// Annotations are ordered by start offset and every tag is placed at its offset in
/// the original text, copying the text between insertion points once. Overlapping
/// spans are not resolved; their tags interleave but the underlying text is kept intact.
pub fn splice(text: &str, mut annotations: Vec<Annotation>) -> String {
    annotations.sort_by_key(|a| a.span.start);
    if let Some(pair) = annotations
        .windows(2)
        .find(|pair| pair[1].span.start < pair[0].span.end)
    {
        warn!(
            "Overlapping annotations at {:?} and {:?} in {:?}",
            pair[0].span, pair[1].span, text
        );
    }

    // Insertion points in the original text. Closing tags sort before opening tags
    // at the same position; inner spans close before outer ones.
    let mut inserts: Vec<(usize, u8, usize, &str)> = Vec::with_capacity(annotations.len() * 2);
    for (i, annotation) in annotations.iter().enumerate() {
        inserts.push((annotation.span.start, 1, i, annotation.open.as_str()));
        inserts.push((annotation.span.end, 0, usize::MAX - i, annotation.close.as_str()));
    }
    inserts.sort();

    let markup_len: usize = inserts.iter().map(|(_, _, _, tag)| tag.len()).sum();
    let mut out = String::with_capacity(text.len() + markup_len);
    let mut last = 0;
    for (at, _, _, tag) in inserts {
        out.push_str(&text[last..at]);
        out.push_str(tag);
        last = at;
    }
    out.push_str(&text[last..]);
    out
}

/// Stem patterns for one recipe's non-staple ingredients, compiled once and
/// reused for every step.
#[derive(Debug, Clone)]
pub struct IngredientMatcher {
    patterns: Vec<(Regex, String)>,
}

impl IngredientMatcher {
    /// A stem matches at a word boundary and may extend with further word
    /// characters, so the stem "tomat" also covers "tomater".
    pub fn new(ingredients: &[Ingredient], stemmer: &dyn Stemmer) -> Self {
        let mut stem_to_id = BTreeMap::new();
        for ingredient in ingredients.iter().filter(|i| !i.is_staple) {
            let stem = stemmer.stem(&ingredient.name);
            if !stem.is_empty() {
                stem_to_id.insert(stem, ingredient.id.clone());
            }
        }

        let mut patterns = Vec::with_capacity(stem_to_id.len());
        for (stem, id) in stem_to_id {
            match Regex::new(&format!(r"\b{}\w*\b", regex::escape(&stem))) {
                Ok(re) => patterns.push((re, id)),
                Err(_) => warn!("Skipping ingredient stem {:?}: pattern too large", stem),
            }
        }
        Self { patterns }
    }

    /// Mentions in `text`, ordered by start offset.
    pub fn mentions(&self, text: &str) -> Vec<Annotation> {
        let mut mentions = Vec::new();
        for (re, id) in &self.patterns {
            mentions.extend(re.find_iter(text).map(|m| Annotation::ingredient(m.range(), id)));
        }
        mentions.sort_by_key(|a| a.span.start);
        mentions
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// Finds whole-word mentions of non-staple ingredients, matching on name stems.
pub fn ingredient_mentions(
    text: &str,
    ingredients: &[Ingredient],
    stemmer: &dyn Stemmer,
) -> Vec<Annotation> {
    IngredientMatcher::new(ingredients, stemmer).mentions(text)
}

/// Finds whole-word durations such as "10 minuter" or "10-15 minuter".
pub fn durations(text: &str, profile: &LanguageProfile) -> Vec<Annotation> {
    profile
        .duration
        .as_ref()
        .map(|re| {
            re.find_iter(text)
                .map(|m| Annotation::duration(m.range()))
                .collect()
        })
        .unwrap_or_default()
}

/// Annotates one instruction step with ingredient and duration markup.
///
/// Durations are located in the text after ingredient markup has been inserted.
/// Text without any match is returned unchanged.
pub fn annotate(
    text: &str,
    ingredients: &[Ingredient],
    stemmer: &dyn Stemmer,
    profile: &LanguageProfile,
) -> String {
    annotate_with(text, &IngredientMatcher::new(ingredients, stemmer), profile)
}

/// [`annotate`] with ingredient patterns that were already compiled.
pub fn annotate_with(text: &str, matcher: &IngredientMatcher, profile: &LanguageProfile) -> String {
    let text = splice(text, matcher.mentions(text));
    let found = durations(&text, profile);
    splice(&text, found)
}

/// Removes the tags inserted by [`annotate`], leaving any other markup alone.
pub fn strip_markup(html: &str) -> String {
    static TAG: once_cell::sync::Lazy<Regex> = once_cell::sync::Lazy::new(|| {
        Regex::new(r##"<span class="instruction-[a-z0-9-]*">|<a href="#">|</a>|</span>"##).unwrap()
    });
    TAG.replace_all(html, "").into_owned()
}
