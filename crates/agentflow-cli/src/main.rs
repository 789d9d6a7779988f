use clap::Parser;
use std::io;
use std::sync::Arc;
use workflow_catalog::presentation::render_error;
use workflow_catalog::{Catalog, QueryEngine, WorkflowInstaller};

mod commands;
mod config;
mod logging;
mod menu;
mod prompt;

use config::{AppConfig, Cli};
use logging::init_logging;
use menu::Menu;
use prompt::LinePrompter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let config = AppConfig::from_cli(&cli);
    if !config.color {
        colored::control::set_override(false);
    }

    if let Err(e) = run(cli, config).await {
        log::error!("agentflow failed: {:?}", e);
        eprintln!("{}", render_error(&e.to_string()));
        std::process::exit(1);
    }
}

async fn run(cli: Cli, config: AppConfig) -> anyhow::Result<()> {
    let catalog = Arc::new(Catalog::builtin());
    if let Err(e) = catalog.validate() {
        log::warn!("Catalog integrity check failed: {}", e);
    }

    let engine = QueryEngine::new(catalog);
    let installer = WorkflowInstaller::new(config.install_delay);

    match cli.command {
        Some(command) => {
            commands::run_command(&command, &engine, &installer, &mut io::stdout()).await
        }
        None => {
            log::info!("Starting interactive menu");
            let mut menu = Menu::new(
                engine,
                installer,
                LinePrompter::stdio(),
                io::stdout(),
                config,
            );
            menu.run().await
        }
    }
}
