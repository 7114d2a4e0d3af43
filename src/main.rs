//! Rent report main entry point

use anyhow::Context;
use clap::Parser;
use rentreport_api::start_server;
use rentreport_config::{Config, ConfigError};
use rentreport_core::{ReportController, SessionContext};
use rentreport_store::JsonDirStore;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::Runtime;

#[derive(Parser, Debug)]
#[command(name = "rentreport")]
#[command(version = "0.1.0")]
#[command(about = "Product and sales report for rental branches", long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,

    /// Branch code to report on, overriding session.branch_code
    #[arg(short, long)]
    branch: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let (mut config, missing_config) = match Config::load(args.config.clone()) {
        Ok(config) => (config, false),
        Err(ConfigError::FileNotFound { .. }) => (Config::default(), true),
        Err(e) => {
            eprintln!("Config error [{}]: {}", e.code(), e);
            for suggestion in e.suggestions() {
                eprintln!("  - {}", suggestion);
            }
            return Err(e).with_context(|| format!("Failed to load {}", args.config.display()));
        }
    };
    if let Some(branch) = args.branch {
        config.session.branch_code = Some(branch);
        config.validate()?;
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(config.logging.level.as_str())).init();

    if missing_config {
        log::warn!("Config file {} not found, using defaults", args.config.display());
    }
    log::info!(
        "Config loaded: store path={}, branch={}",
        config.store.path.display(),
        config.session.branch_code.as_deref().unwrap_or("-")
    );

    let rt = Runtime::new()?;
    rt.block_on(async move {
        let store = Arc::new(JsonDirStore::new(config.store.path.clone()));
        let session = SessionContext::new(config.session.branch_code.clone());
        let controller = Arc::new(ReportController::new(store, session));

        match controller.load_session().await {
            Ok(Some(data)) => log::info!(
                "Report loaded: {} products, {} sales rows",
                data.products.len(),
                data.sales.rows.len()
            ),
            Ok(None) => log::warn!("No branch configured; the report stays empty until one is selected"),
            Err(e) => e.log("startup_load"),
        }

        start_server(config, controller).await.context("Server error")
    })
}
