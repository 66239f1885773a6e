//! Academy admin - students, teachers, classes and payments for a music academy
//!
//! Every entity list is one JSON document in a GitHub repository, read and
//! overwritten through the contents API.

mod api;
mod auth;
mod config;
mod core;
mod models;
mod storage;
mod utils;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

use crate::auth::{CredentialStore, StaticCredentials};
use crate::config::{Paths, Settings, StorageBackend};
use crate::storage::{RemoteFileStore, Repositories};

/// Academy admin service
#[derive(Parser, Debug)]
#[command(name = "academy")]
#[command(version)]
#[command(about = "Administrative service for a music academy")]
struct Args {
    /// Host address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on
    #[arg(long, default_value_t = 8080)]
    port: u16,

    /// Enable debug mode
    #[arg(long)]
    debug: bool,

    /// Path to config directory
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .init();

    info!("Academy admin v{} starting...", env!("CARGO_PKG_VERSION"));

    let paths = Paths::new(args.config)?;
    info!("Config directory: {:?}", paths.config_dir());

    let settings = load_settings(&paths)?;
    let state = build_state(&settings);

    start_server(args.host, args.port, state).await
}

fn load_settings(paths: &Paths) -> Result<Settings> {
    let settings_path = paths.settings_path();
    let mut settings = Settings::load(&settings_path)?;
    settings.ensure_session_secret(&settings_path)?;

    // overrides are applied after the last save so they never reach disk
    settings.apply_env()?;

    match settings.storage {
        StorageBackend::Github if !settings.github.is_configured() => warn!(
            "GitHub token or repository is not set; \
             storage calls will fail until ACADEMY_GITHUB_TOKEN and ACADEMY_GITHUB_REPO are provided"
        ),
        StorageBackend::Github => info!(
            "Storing documents in {}",
            settings.github.repo.as_deref().unwrap_or_default()
        ),
        StorageBackend::Memory => warn!("Using in-memory storage; data is lost on exit"),
    }

    Ok(settings)
}

fn build_state(settings: &Settings) -> api::AppState {
    let store = RemoteFileStore::new(settings.content_host());

    let credentials: Arc<dyn CredentialStore> = if settings.users.is_empty() {
        Arc::new(StaticCredentials::builtin())
    } else {
        info!("Loaded {} accounts from settings", settings.users.len());
        Arc::new(StaticCredentials::new(settings.users.clone()))
    };

    api::AppState {
        repos: Repositories::new(store),
        credentials,
        session_secret: settings.session_secret.clone(),
    }
}

async fn start_server(host: String, port: u16, state: api::AppState) -> Result<()> {
    use actix_cors::Cors;
    use actix_web::{middleware, web, App, HttpServer};

    let state = web::Data::new(state);
    let addr = format!("{}:{}", host, port);
    info!("Server listening on http://{}", addr);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .app_data(state.clone())
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .configure(api::configure)
    })
    .bind(addr)?
    .run()
    .await?;

    Ok(())
}
