//! Promise Tracker - terminal dashboard for politicians' campaign promises
//!
//! Binary entry point: parses the command line, loads settings, and hands
//! off to the TUI or the headless JSON printer.

mod headless;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use ptracker_api::ApiClient;
use ptracker_app::config::{init_config, load_settings};
use ptracker_app::{Route, Settings};
use ptracker_core::prelude::*;

/// Promise Tracker - follow what politicians promised and what they delivered
#[derive(Parser, Debug)]
#[command(name = "ptracker", version)]
#[command(about = "Terminal dashboard for tracking politicians' campaign promises", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Screen to open: /, /<id>, /about, /politicians, /contact, /login, /promise-card/<id>
    #[arg(value_name = "ROUTE", default_value = "/")]
    route: String,

    /// Backend base URL (overrides config and PTRACKER_API_URL)
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Start in journalist (edit) mode
    #[arg(long)]
    journalist: bool,

    /// Rows per page in the promise table
    #[arg(long, value_name = "ROWS")]
    page_size: Option<usize>,

    /// Print the candidate scorecard as JSON instead of starting the TUI
    #[arg(long)]
    headless: bool,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a commented default config file (never overwrites)
    InitConfig,
}

impl Args {
    /// Command-line flags win over the config file
    fn apply_overrides(&self, settings: &mut Settings) {
        if let Some(url) = &self.api_url {
            settings.api.base_url = url.clone();
        }
        if self.journalist {
            settings.behavior.journalist = true;
        }
        if let Some(rows) = self.page_size {
            settings.ui.page_size = rows.max(1);
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(Command::InitConfig) = args.command {
        let path = init_config(args.config.as_deref())?;
        println!("Config written to {}", path.display());
        return Ok(());
    }

    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;
    ptracker_core::logging::init()?;

    let route = match Route::parse(&args.route) {
        Ok(route) => route,
        Err(e) => {
            eprintln!("❌ {}", e);
            eprintln!("   Known routes: /, /<id>, /about, /politicians, /contact, /login, /promise-card/<id>");
            std::process::exit(2);
        }
    };

    let mut settings = load_settings(args.config.as_deref());
    args.apply_overrides(&mut settings);
    info!(
        "Backend {}{} (page size {})",
        settings.api.base_url, settings.api.api_prefix, settings.ui.page_size
    );

    let api = ApiClient::new(settings.api.client_config())
        .context("Failed to set up the backend client")?;

    if args.headless {
        if headless::runner::run_headless(&api, route, &settings)
            .await
            .is_err()
        {
            std::process::exit(1);
        }
        return Ok(());
    }

    ptracker_tui::run(settings, route, api).await
}
