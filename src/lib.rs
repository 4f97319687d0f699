pub mod cli;
pub mod core;
pub mod providers;

use crate::core::config::AppConfig;
use crate::core::{FormInput, SwapForm};
use anyhow::Result;
use tracing::{debug, info};

/// Commands that need the loaded swap form.
#[derive(Debug, Clone)]
pub enum AppCommand {
    Tokens,
    Prices,
    Swap(FormInput),
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("Token swap starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let form = load_form(&config).await;

    let output = match &command {
        AppCommand::Tokens => cli::tokens::render(&form),
        AppCommand::Prices => cli::prices::render(form.prices()),
        AppCommand::Swap(input) => cli::swap::render(&form, input, config.display.decimals),
    };
    println!("{output}");
    Ok(())
}

/// Loads the catalog and price table behind a spinner. Load failures leave
/// the form empty rather than failing the command.
pub async fn load_form(config: &AppConfig) -> SwapForm {
    let catalog = providers::GithubCatalogProvider::new(config.providers.catalog_url());
    let prices = providers::PriceFeedProvider::new(config.providers.prices_url());

    let pb = cli::ui::new_loading_spinner("Loading tokens and prices...");
    let mut form = SwapForm::new();
    form.load(&catalog, &prices).await;
    pb.finish_and_clear();

    form
}
