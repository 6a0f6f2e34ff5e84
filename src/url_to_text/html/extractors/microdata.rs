use super::{Extractor, ParsingContext};
use crate::model::{RawRecipe, MISSING_FIELD};
use log::debug;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Selector};

static ITEMSCOPE: Lazy<Selector> = Lazy::new(|| Selector::parse("[itemscope][itemtype]").unwrap());
static ITEMPROP: Lazy<Selector> = Lazy::new(|| Selector::parse("[itemprop]").unwrap());
static HTML: Lazy<Selector> = Lazy::new(|| Selector::parse("html").unwrap());

const RECIPE_TYPES: &[&str] = &["http://schema.org/Recipe", "https://schema.org/Recipe"];

pub struct MicroDataExtractor;

impl MicroDataExtractor {
    fn find_recipe_container<'a>(&self, document: &'a scraper::Html) -> Option<ElementRef<'a>> {
        document.select(&ITEMSCOPE).find(|element| {
            element
                .value()
                .attr("itemtype")
                .map(|types| types.split_whitespace().any(|t| RECIPE_TYPES.contains(&t)))
                .unwrap_or(false)
        })
    }

    /// Properties that belong to `root` itself, skipping those of nested items.
    fn properties<'a>(&self, root: ElementRef<'a>, prop: &'a str) -> impl Iterator<Item = ElementRef<'a>> + 'a {
        root.select(&ITEMPROP).filter(move |el| {
            let names = el.value().attr("itemprop").unwrap_or_default();
            names.split_whitespace().any(|name| name == prop) && owning_item(*el) == Some(root)
        })
    }

    fn get_itemprop(&self, root: ElementRef, prop: &str) -> Option<String> {
        self.properties(root, prop)
            .map(property_value)
            .find(|value| !value.is_empty())
    }

    fn get_itemprop_list(&self, root: ElementRef, prop: &str) -> Vec<String> {
        self.properties(root, prop)
            .map(property_value)
            .filter(|value| !value.is_empty())
            .collect()
    }
}

/// Nearest ancestor carrying `itemscope`. An element's own scope does not count:
/// a property that is itself an item belongs to the enclosing one.
fn owning_item(element: ElementRef) -> Option<ElementRef> {
    element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .find(|ancestor| ancestor.value().attr("itemscope").is_some())
}

/// Microdata property value: URL attributes for media and links, `content` for meta,
/// `datetime` for time, element text otherwise.
fn property_value(element: ElementRef) -> String {
    let value = element.value();
    let attr = match value.name() {
        "meta" => value.attr("content"),
        "img" | "audio" | "video" | "source" | "embed" | "iframe" | "track" => value.attr("src"),
        "a" | "area" | "link" => value.attr("href"),
        "object" => value.attr("data"),
        "data" | "meter" => value.attr("value"),
        "time" => value.attr("datetime"),
        _ => None,
    };
    match attr {
        Some(attr) => attr.trim().to_string(),
        None => element.text().collect::<String>().trim().to_string(),
    }
}

impl Extractor for MicroDataExtractor {
    fn parse(&self, context: &ParsingContext) -> Option<RawRecipe> {
        debug!("Attempting to extract recipe using MicroData extractor");

        let Some(container) = self.find_recipe_container(&context.document) else {
            debug!("No MicroData Recipe container found in {}", context.url);
            return None;
        };

        let lang_raw = context
            .document
            .select(&HTML)
            .next()
            .and_then(|html| html.value().attr("lang"))
            .map(|lang| lang.trim().to_string())
            .filter(|lang| !lang.is_empty());

        let mut ingredients_raw = self.get_itemprop_list(container, "recipeIngredient");
        if ingredients_raw.is_empty() {
            ingredients_raw = self.get_itemprop_list(container, "ingredients");
        }

        Some(RawRecipe {
            source_url: self
                .get_itemprop(container, "url")
                .unwrap_or_else(|| context.url.clone()),
            name: self.get_itemprop(container, "name").unwrap_or_default(),
            // Some sites tag the image twice, the first time without a src
            image_url: self.get_itemprop(container, "image"),
            lang_raw,
            total_time_raw: self
                .get_itemprop(container, "totalTime")
                .unwrap_or_else(|| MISSING_FIELD.to_string()),
            recipe_yield_raw: self
                .get_itemprop(container, "recipeYield")
                .unwrap_or_else(|| MISSING_FIELD.to_string()),
            ingredients_raw,
            instructions_raw: self.get_itemprop_list(container, "recipeInstructions"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    fn extract(html: &str) -> Option<RawRecipe> {
        let context = ParsingContext {
            url: "https://example.com/recept".to_string(),
            document: Html::parse_document(html),
        };
        MicroDataExtractor.parse(&context)
    }

    #[test]
    fn nested_item_properties_are_ignored() {
        let recipe = extract(
            r#"<div itemscope itemtype="https://schema.org/Recipe">
                 <div itemprop="author" itemscope itemtype="https://schema.org/Person">
                   <span itemprop="name">Anna</span>
                 </div>
                 <h1 itemprop="name">Linsgryta</h1>
               </div>"#,
        )
        .unwrap();
        assert_eq!(recipe.name, "Linsgryta");
    }

    #[test]
    fn value_rules_follow_element_type() {
        let recipe = extract(
            r#"<html lang="sv-SE"><body>
               <div itemscope itemtype="http://schema.org/Recipe">
                 <meta itemprop="url" content="https://example.com/linsgryta">
                 <span itemprop="name">Linsgryta</span>
                 <img itemprop="image" alt="">
                 <img itemprop="image" src="https://example.com/linsgryta.jpg">
                 <time itemprop="totalTime" datetime="PT40M">40 min</time>
               </div></body></html>"#,
        )
        .unwrap();
        assert_eq!(recipe.source_url, "https://example.com/linsgryta");
        assert_eq!(recipe.image_url.as_deref(), Some("https://example.com/linsgryta.jpg"));
        assert_eq!(recipe.total_time_raw, "PT40M");
        assert_eq!(recipe.recipe_yield_raw, MISSING_FIELD);
        assert_eq!(recipe.lang_raw.as_deref(), Some("sv-SE"));
    }

    #[test]
    fn other_item_types_are_not_recipes() {
        assert!(extract(r#"<div itemscope itemtype="https://schema.org/Person"><span itemprop="name">Anna</span></div>"#).is_none());
        assert!(extract("<p>Ingen mikrodata här</p>").is_none());
    }
}
