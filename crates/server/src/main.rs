//! Atrium Server
//!
//! Headless daemon exposing the reservation engine over TCP.
//! Loads its settings from the platform config directory, stores the
//! SQLite database in the platform data directory, and runs a daily
//! purge alongside the listener.

mod config;
mod handler;
mod purge;

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use atrium_core::{Database, ReservationEngine};
use atrium_net::Server;
use directories::ProjectDirs;
use tokio::sync::broadcast;
use tracing::{error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use config::Settings;
use handler::EngineHandler;

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("dev", "Atrium", "atrium")
}

fn config_path() -> PathBuf {
    match project_dirs() {
        Some(dirs) => dirs.config_dir().join("atrium.toml"),
        None => PathBuf::from("atrium.toml"),
    }
}

fn default_db_path() -> PathBuf {
    match project_dirs() {
        Some(dirs) => dirs.data_dir().join("atrium.db3"),
        None => PathBuf::from("atrium.db3"),
    }
}

#[tokio::main]
async fn main() {
    init_tracing();

    let settings = Settings::load(&config_path());
    info!(port = settings.port, purge_hour = settings.purge_hour, "Starting");

    let db_path = settings.database_path.clone().unwrap_or_else(default_db_path);
    if let Some(parent) = db_path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            error!(path = %parent.display(), error = %e, "Failed to create data directory");
            return;
        }
    }

    let database = match Database::open(&db_path) {
        Ok(db) => db,
        Err(e) => {
            error!(path = %db_path.display(), error = %e, "Failed to open database");
            return;
        }
    };
    info!(path = %db_path.display(), "Database ready");

    let engine = Arc::new(ReservationEngine::with_system_clock(Arc::new(Mutex::new(
        database,
    ))));

    let server = match Server::start(
        settings.port,
        Arc::new(EngineHandler::new(engine.clone())),
    )
    .await
    {
        Ok(server) => server,
        Err(e) => {
            error!(port = settings.port, error = %e, "Failed to start server");
            return;
        }
    };

    let (shutdown_tx, _) = broadcast::channel(1);
    let purge_handle = tokio::spawn(purge::purge_task(
        engine,
        settings.purge_hour,
        shutdown_tx.subscribe(),
    ));

    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
    }

    info!("Shutting down");
    let _ = shutdown_tx.send(());
    server.shutdown();
    let _ = purge_handle.await;
}
