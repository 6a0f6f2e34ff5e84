use recipeviewer::annotate::strip_markup;
use recipeviewer::pipelines::url::process;
use recipeviewer::{RecipeError, RecipeParser, Settings};

const GNOCCHETTI: &str = r#"
<!DOCTYPE html>
<html lang="sv-SE">
<head><title>Gnocchetti med mangold och spenat</title></head>
<body>
  <article itemscope itemtype="https://schema.org/Recipe">
    <link itemprop="url" href="https://example.com/recept/gnocchetti">
    <h1 itemprop="name">Gnocchetti med mangold, spenat och mozzarella</h1>
    <img itemprop="image">
    <img itemprop="image" src="https://example.com/img/gnocchetti.jpg">
    <span itemprop="recipeYield">4 portioner</span>
    <ul>
      <li itemprop="recipeIngredient">1 burk krossade
          tomater (400 g)</li>
      <li itemprop="recipeIngredient">1 lök</li>
      <li itemprop="recipeIngredient">½ påse spenat</li>
      <li itemprop="recipeIngredient">salt</li>
      <li itemprop="recipeIngredient">1 msk olivolja</li>
    </ul>
    <div itemprop="recipeInstructions">Gör så här:
1.&nbsp;Skala och hacka löken fint.
2.&nbsp;Fräs löken i olivolja och salta. Tillsätt spenaten och låt puttra 5-10 minuter.
Servering
Servera direkt.</div>
  </article>
</body>
</html>
"#;

fn parser() -> RecipeParser {
    RecipeParser::from_settings(&Settings::default()).unwrap()
}

#[tokio::test]
async fn test_swedish_recipe_from_url() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/recept/gnocchetti")
        .with_status(200)
        .with_header("content-type", "text/html; charset=utf-8")
        .with_body(GNOCCHETTI)
        .create_async()
        .await;

    let url = format!("{}/recept/gnocchetti", server.url());
    let recipe = process(&url, &parser(), &Settings::default())
        .await
        .unwrap()
        .expect("recipe should be found");

    assert_eq!(recipe.raw.source_url, "https://example.com/recept/gnocchetti");
    assert_eq!(
        recipe.raw.image_url.as_deref(),
        Some("https://example.com/img/gnocchetti.jpg")
    );
    assert_eq!(recipe.raw.total_time_raw, "???");
    assert_eq!(recipe.raw.recipe_yield_raw, "4 portioner");
    assert_eq!(recipe.lang, "sv");

    let ids = recipe
        .ingredients
        .iter()
        .map(|i| i.id.as_str())
        .collect::<Vec<_>>();
    assert_eq!(
        ids,
        vec!["krossade-tomater", "lok", "spenat", "salt", "msk-olivolja"]
    );
    assert_eq!(recipe.ingredients[0].comment.as_deref(), Some("400 g"));
    assert_eq!(recipe.ingredients[2].amount.as_deref(), Some("½"));
    assert!(recipe.ingredients[3].is_staple);
    assert!(!recipe.ingredients[4].is_staple);

    assert_eq!(
        recipe.instructions,
        vec![
            "Skala och hacka löken fint.",
            "Fräs löken i olivolja och salta. Tillsätt spenaten och låt puttra 5-10 minuter.",
            "Servera direkt.",
        ]
    );
    assert_eq!(
        recipe.instructions_html[0],
        r#"Skala och hacka <span class="instruction-ingredient-lok">löken</span> fint."#
    );

    let second = &recipe.instructions_html[1];
    assert!(second.contains(r#"<span class="instruction-ingredient-lok">löken</span>"#));
    assert!(second.contains(r#"<span class="instruction-ingredient-spenat">spenaten</span>"#));
    assert!(second.contains(
        r##"<span class="instruction-time-duration"><a href="#">5-10 minuter</a></span>"##
    ));
    assert!(!second.contains("instruction-ingredient-salt"));
    assert_eq!(recipe.instructions_html[2], "Servera direkt.");

    for (plain, html) in recipe.instructions.iter().zip(&recipe.instructions_html) {
        assert_eq!(&strip_markup(html), plain);
    }
}

#[tokio::test]
async fn test_page_without_recipe() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/om-oss")
        .with_status(200)
        .with_header("content-type", "text/html")
        .with_body("<html lang=\"sv\"><body><h1>Om oss</h1></body></html>")
        .create_async()
        .await;

    let url = format!("{}/om-oss", server.url());
    let result = process(&url, &parser(), &Settings::default()).await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_http_error_is_reported() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/saknas")
        .with_status(404)
        .create_async()
        .await;

    let url = format!("{}/saknas", server.url());
    let result = process(&url, &parser(), &Settings::default()).await;
    assert!(matches!(result, Err(RecipeError::FetchError(_))));
}

#[tokio::test]
async fn test_local_file() {
    let path = std::env::temp_dir().join("recipeviewer-gnocchetti.html");
    tokio::fs::write(&path, GNOCCHETTI).await.unwrap();

    let recipe = process(path.to_str().unwrap(), &parser(), &Settings::default())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(recipe.raw.name, "Gnocchetti med mangold, spenat och mozzarella");
    assert_eq!(recipe.ingredients.len(), 5);

    let missing = process("/nonexistent/recept.html", &parser(), &Settings::default()).await;
    assert!(matches!(missing, Err(RecipeError::IoError(_))));
}

#[tokio::test]
async fn test_fetch_recipe_with_loaded_settings() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/recept/gnocchetti")
        .with_status(200)
        .with_header("content-type", "text/html")
        .with_body(GNOCCHETTI)
        .create_async()
        .await;

    let url = format!("{}/recept/gnocchetti", server.url());
    let recipe = recipeviewer::fetch_recipe(&url).await.unwrap().unwrap();
    assert_eq!(recipe.lang, "sv");
    assert_eq!(recipe.instructions.len(), 3);
}

#[test]
fn test_parse_loaded_document() {
    let recipe = recipeviewer::parse_document("file:///tmp/gnocchetti.html", GNOCCHETTI, &parser())
        .expect("recipe should be found");
    assert_eq!(recipe.ingredient("spenat").map(|i| i.unit.as_deref()), Some(Some("påse")));
    assert!(recipeviewer::parse_document("file:///tmp/tom.html", "<p></p>", &parser()).is_none());
}
