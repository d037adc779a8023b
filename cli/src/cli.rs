// SPDX-FileCopyrightText: 2025-2026 Evex Developers <dev@evex.app>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use colored::Colorize;
use evex_core::{APP_NAME, App};
use tracing_subscriber::EnvFilter;

use crate::cmd_categories::CmdCategories;
use crate::cmd_events::CmdEvents;
use crate::cmd_fav::CmdFav;
use crate::cmd_show::CmdShow;
use crate::config::parse_config;

/// Run the Evex command-line interface.
pub async fn run() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = cli.run().await {
        println!("{} {}", "Error:".red(), e);
    }
    Ok(())
}

/// Command-line interface
#[derive(Debug, Parser)]
#[command(name = APP_NAME, version)]
#[command(about = "Discover, filter and favorite events", long_about = None)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Run the selected command against a freshly built [`App`].
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!("parsing configuration");
        let config = parse_config(self.config).await?;
        let app = App::new(config).await?;

        use Commands::*;
        match self.command {
            Events(cmd) => cmd.run(&app),
            Categories(cmd) => cmd.run(&app),
            Show(cmd) => cmd.run(&app),
            Fav(cmd) => cmd.run(&app).await,
        }
    }
}

/// The commands available in the CLI
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List events, optionally filtered
    #[command(alias = "ls")]
    Events(CmdEvents),

    /// List the distinct categories in the catalog
    Categories(CmdCategories),

    /// Show full details for one event
    Show(CmdShow),

    /// Manage your favorites
    #[command(subcommand, alias = "f")]
    Fav(CmdFav),
}
