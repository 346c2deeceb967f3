use std::sync::Arc;

use anyhow::{Context, Result};

use smartmap::api::AppState;
use smartmap::catalog::DestinationCatalog;
use smartmap::config::{LoggingConfig, SmartMapConfig};
use smartmap::llm::GeminiClient;
use smartmap::planner::TripPlanner;
use smartmap::web;

#[tokio::main]
async fn main() -> Result<()> {
    let config = SmartMapConfig::load().context("Failed to load configuration")?;
    init_tracing(&config.logging)?;

    // Missing or invalid API key is fatal before anything interactive runs
    config.validate()?;

    if std::env::args().nth(1).as_deref() == Some("list-models") {
        return list_models(&config).await;
    }

    let catalog = DestinationCatalog::load(&config.catalog.path)
        .map_err(|e| anyhow::anyhow!(e.user_message()))?;

    let client = Arc::new(GeminiClient::new(&config.llm)?);
    let planner = TripPlanner::new(client.clone());

    let state = Arc::new(AppState {
        catalog,
        planner,
        gemini: client,
        defaults: config.defaults.clone(),
    });

    web::run(state, config.server.port).await
}

/// Developer convenience: print the models that support text generation
async fn list_models(config: &SmartMapConfig) -> Result<()> {
    let client = GeminiClient::new(&config.llm)?;
    let models = client.list_models().await?;

    println!("Available models that support text generation:");
    for model in models {
        match model.display_name {
            Some(display_name) => println!("{} ({display_name})", model.name),
            None => println!("{}", model.name),
        }
    }
    Ok(())
}

fn init_tracing(logging: &LoggingConfig) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(&logging.level))
        .context("Invalid log level")?;

    if logging.format == "json" {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
    Ok(())
}
