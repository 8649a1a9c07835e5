//! Upload form front end.
//!
//! Uploads land in `<static>/uploads`, results in `<static>/processed`, and
//! the whole static directory is served under `/static`.

pub mod error;
pub mod pages;
pub mod routes;

use crate::constants::{PROCESSED_SUBDIR, UPLOADS_SUBDIR};
use crate::validation::is_single_component;
use anyhow::{Context, Result};
use std::path::PathBuf;
use std::sync::Arc;

pub use error::WebError;
pub use routes::create_router;

#[derive(Debug, Clone)]
pub struct AppState {
    pub static_dir: PathBuf,
    /// Re-read on every request that needs a threshold.
    pub config_path: PathBuf,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    pub fn new(static_dir: PathBuf, config_path: PathBuf) -> Self {
        Self {
            static_dir,
            config_path,
        }
    }

    pub fn uploads_dir(&self) -> PathBuf {
        self.static_dir.join(UPLOADS_SUBDIR)
    }

    pub fn processed_dir(&self) -> PathBuf {
        self.static_dir.join(PROCESSED_SUBDIR)
    }

    pub fn ensure_dirs(&self) -> Result<()> {
        for dir in [self.uploads_dir(), self.processed_dir()] {
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("creating {}", dir.display()))?;
        }
        Ok(())
    }

    /// Path of an existing upload. Names that are not a single plain file
    /// name are treated as missing.
    pub fn upload_path(&self, filename: &str) -> std::result::Result<PathBuf, WebError> {
        if !is_single_component(filename) {
            return Err(WebError::UploadNotFound(filename.to_string()));
        }
        let path = self.uploads_dir().join(filename);
        if !path.is_file() {
            return Err(WebError::UploadNotFound(filename.to_string()));
        }
        Ok(path)
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind: String,
    pub static_dir: PathBuf,
    pub config_path: PathBuf,
}

/// Start the axum HTTP server and run until Ctrl+C.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    let state = Arc::new(AppState::new(config.static_dir, config.config_path));
    state.ensure_dirs()?;
    if !state.config_path.is_file() {
        tracing::warn!(
            path = %state.config_path.display(),
            "threshold config missing; modes 2 and 3 will fail until it exists"
        );
    }
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind)
        .await
        .with_context(|| format!("binding {}", config.bind))?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutting down...");
        })
        .await?;

    Ok(())
}
