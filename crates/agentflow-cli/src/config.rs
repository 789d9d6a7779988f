use clap::builder::FalseyValueParser;
use clap::{Parser, Subcommand};
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "agentflow")]
#[command(about = "Workflow Marketplace in your Terminal")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging
    #[arg(
        long,
        env = "AGENTFLOW_DEBUG",
        default_value = "false",
        value_parser = FalseyValueParser::new()
    )]
    pub debug: bool,

    /// Simulated install duration in milliseconds
    #[arg(long, env = "AGENTFLOW_INSTALL_DELAY_MS", default_value = "1500")]
    pub install_delay_ms: u64,

    /// Keep previous output instead of clearing the screen between rounds
    #[arg(long, default_value = "false")]
    pub no_clear: bool,

    /// Disable colored output
    #[arg(
        long,
        env = "NO_COLOR",
        default_value = "false",
        value_parser = FalseyValueParser::new()
    )]
    pub no_color: bool,

    /// Run a single command instead of the interactive menu
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// List workflows, optionally restricted to one category
    List {
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// Search titles, descriptions and tags
    Search {
        query: String,
        #[arg(long)]
        json: bool,
    },
    /// Show the details of one workflow
    Show { id: String },
    /// Show catalog statistics
    Stats {
        #[arg(long)]
        json: bool,
    },
    /// Simulate installing a workflow
    Install { id: String },
}

/// Settings consumed by the menu and command runners
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub install_delay: Duration,
    pub clear_screen: bool,
    pub color: bool,
}

impl AppConfig {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            install_delay: Duration::from_millis(cli.install_delay_ms),
            clear_screen: !cli.no_clear,
            color: !cli.no_color,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            install_delay: workflow_catalog::installer::DEFAULT_INSTALL_DELAY,
            clear_screen: true,
            color: true,
        }
    }
}
