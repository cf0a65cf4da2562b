use anyhow::{bail, Context, Result};
use recipe_genie::cli::parse_args;
use recipe_genie::config::AppConfig;
use recipe_genie::orchestrator::Orchestrator;
use recipe_genie::request::{GenerationRequest, IngredientInput};
use tokio::fs;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli_args = parse_args();

    let request = if let Some(path) = &cli_args.request_file {
        let contents = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read request file '{}'", path))?;
        serde_json::from_str::<GenerationRequest>(&contents)
            .with_context(|| format!("Failed to parse request file '{}'", path))?
    } else {
        GenerationRequest {
            ingredients: IngredientInput::Text(cli_args.ingredients.unwrap_or_default()),
            allergies: cli_args.allergies,
            preferences: cli_args.preferences,
            budget: cli_args.budget,
            leftovers: cli_args.leftovers,
            mode: cli_args.mode,
        }
    };

    if let Err(validation) = request.validate() {
        bail!("{}: {}", validation.error, validation.message);
    }

    let config = AppConfig::from_env();
    if !config.has_credentials() {
        tracing::warn!("no provider credentials configured, responses will be mocked");
    }

    let orchestrator = Orchestrator::from_config(&config);
    let result = orchestrator
        .run(&request)
        .await
        .context("Generation pipeline failed")?;

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
