use log::error;
use recipeviewer::pipelines::url::process;
use recipeviewer::{RecipeParser, Settings};
use std::env;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    env_logger::init();

    // Get the URL or file path from command-line arguments
    let args: Vec<String> = env::args().collect();
    let source = args
        .get(1)
        .ok_or("usage: recipeviewer <URL|PATH>")?;

    let settings = Settings::load()?;
    let parser = RecipeParser::from_settings(&settings)?;

    match process(source, &parser, &settings).await? {
        Some(recipe) => {
            println!("{}", serde_json::to_string_pretty(&recipe)?);
            Ok(ExitCode::SUCCESS)
        }
        None => {
            error!("No recipe markup found in {}", source);
            eprintln!("No recipe found in {}", source);
            Ok(ExitCode::FAILURE)
        }
    }
}
