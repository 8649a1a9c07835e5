use axum::extract::{DefaultBodyLimit, Multipart, Path as UrlPath, State};
use axum::response::{Html, Redirect};
use axum::routing::{get, post};
use axum::{Form, Router};
use serde::Deserialize;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use super::error::WebError;
use super::pages;
use super::SharedState;
use crate::config::{read_threshold_value, resolve_quality};
use crate::constants::{MAX_FILE_SIZE, PROCESSED_PREFIX};
use crate::error::Result;
use crate::pipeline::{run_pipeline, ModeChoice};
use crate::validation::secure_filename;

// Room for the multipart framing around a maximum size file.
const UPLOAD_OVERHEAD: usize = 64 * 1024;

/// Create the axum router with all routes.
pub fn create_router(state: SharedState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/upload", post(upload_file))
        .route("/process/{filename}", get(process_form).post(process_file))
        .nest_service("/static", ServeDir::new(&state.static_dir))
        .layer(DefaultBodyLimit::max(MAX_FILE_SIZE as usize + UPLOAD_OVERHEAD))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET / – upload form
async fn index() -> Html<String> {
    Html(pages::index_page())
}

/// POST /upload – store the `file` field and continue to the mode form.
///
/// A request without a usable file goes back to the upload form.
async fn upload_file(
    State(state): State<SharedState>,
    mut multipart: Multipart,
) -> std::result::Result<Redirect, WebError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue;
        }
        let Some(filename) = field.file_name().and_then(secure_filename) else {
            return Ok(Redirect::to("/"));
        };
        let data = field.bytes().await?;
        let path = state.uploads_dir().join(&filename);
        tokio::fs::write(&path, &data).await?;
        info!(path = %path.display(), size = data.len(), "upload stored");
        return Ok(Redirect::to(&format!("/process/{}", filename)));
    }
    Ok(Redirect::to("/"))
}

/// GET /process/{filename} – mode selection form
async fn process_form(
    State(state): State<SharedState>,
    UrlPath(filename): UrlPath<String>,
) -> std::result::Result<Html<String>, WebError> {
    state.upload_path(&filename)?;
    Ok(Html(pages::process_page(&filename)))
}

#[derive(Debug, Deserialize)]
pub struct ProcessForm {
    pub process: String,
    #[serde(default)]
    pub quality: Option<String>,
}

/// POST /process/{filename} – run the pipeline and show the sizes
async fn process_file(
    State(state): State<SharedState>,
    UrlPath(filename): UrlPath<String>,
    Form(form): Form<ProcessForm>,
) -> std::result::Result<Html<String>, WebError> {
    let input = state.upload_path(&filename)?;
    let choice: ModeChoice = form.process.parse()?;
    let processed_name = format!("{}{}", PROCESSED_PREFIX, filename);
    let output = state.processed_dir().join(&processed_name);
    let config_path = state.config_path.clone();
    let quality_text = form.quality;

    let report = tokio::task::spawn_blocking(move || -> Result<_> {
        let threshold = if choice.needs_threshold() {
            Some(read_threshold_value(&config_path)?)
        } else {
            None
        };
        let quality = choice
            .needs_quality()
            .then(|| resolve_quality(quality_text.as_deref()).0);
        let mode = choice.with_params(threshold, quality)?;
        run_pipeline(&input, &output, &mode)
    })
    .await??;

    Ok(Html(pages::result_page(&filename, &processed_name, &report)))
}
