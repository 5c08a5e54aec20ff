//! HTTP surface for the browser state
//!
//! One session lives behind the router. Clients read the current view, post
//! actions to move it, or run one-off filters against the catalog without
//! touching the session at all.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tokio::sync::RwLock;

use devfonts_core::assets::{
    load_best_effort, AssetLoader, AssetRequest, AssetResolver, LogAssetLoader,
};
use devfonts_core::catalog::{suggest, Catalog, FontDescriptor};
use devfonts_core::compare::CompareSet;
use devfonts_core::filter::{filter, FilterState};
use devfonts_core::state::{Action, BrowserState, ViewModel};

/// Shared handles for the request handlers.
#[derive(Clone)]
pub struct AppState {
    session: Arc<RwLock<BrowserState>>,
    resolver: Arc<AssetResolver>,
    loader: Arc<dyn AssetLoader + Send + Sync>,
}

impl AppState {
    pub fn new(state: BrowserState, resolver: AssetResolver) -> Self {
        Self::with_loader(state, resolver, Arc::new(LogAssetLoader))
    }

    pub fn with_loader(
        state: BrowserState,
        resolver: AssetResolver,
        loader: Arc<dyn AssetLoader + Send + Sync>,
    ) -> Self {
        Self {
            session: Arc::new(RwLock::new(state)),
            resolver: Arc::new(resolver),
            loader,
        }
    }
}

/// A stateless filter over the catalog.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterRequest {
    #[serde(flatten)]
    pub filters: FilterState,
    pub compare_mode: bool,
    /// Display names picked for comparison
    pub compare: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FilterResponse {
    pub count: usize,
    pub fonts: Vec<FontDescriptor>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SuggestParams {
    pub q: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestResponse {
    pub suggestions: Vec<String>,
}

/// Bind and serve until the process is stopped.
pub async fn serve(bind: &str, app: AppState) -> Result<()> {
    let listener = TcpListener::bind(bind)
        .await
        .with_context(|| format!("binding HTTP server to {bind}"))?;
    log::info!("serving devfonts on {bind}");

    {
        let session = app.session.read().await;
        load_best_effort(app.loader.as_ref(), &session.assets(&app.resolver));
    }

    axum::serve(listener, router(app))
        .await
        .context("serving HTTP")?;
    Ok(())
}

pub fn router(app: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/catalog", get(catalog_handler))
        .route("/view", get(view_handler))
        .route("/assets", get(assets_handler))
        .route("/suggest", get(suggest_handler))
        .route("/actions", post(action_handler))
        .route("/filter", post(filter_handler))
        .with_state(app)
}

async fn catalog_handler(State(app): State<AppState>) -> Json<Catalog> {
    let session = app.session.read().await;
    Json(session.catalog().clone())
}

async fn view_handler(State(app): State<AppState>) -> Json<ViewModel> {
    Json(app.session.read().await.view())
}

async fn assets_handler(State(app): State<AppState>) -> Json<AssetRequest> {
    Json(app.session.read().await.assets(&app.resolver))
}

async fn suggest_handler(
    State(app): State<AppState>,
    Query(params): Query<SuggestParams>,
) -> Json<SuggestResponse> {
    let session = app.session.read().await;
    let suggestions = suggest(session.catalog(), &params.q)
        .into_iter()
        .map(str::to_string)
        .collect();
    Json(SuggestResponse { suggestions })
}

/// Apply one action to the session and answer the new view.
async fn action_handler(
    State(app): State<AppState>,
    payload: Result<Json<Action>, JsonRejection>,
) -> Result<Json<ViewModel>, (StatusCode, String)> {
    let Json(action) = payload.map_err(to_bad_request)?;
    let mut session = app.session.write().await;
    let next = session.apply(action).map_err(to_bad_request)?;

    let assets = next.assets(&app.resolver);
    if assets != session.assets(&app.resolver) {
        load_best_effort(app.loader.as_ref(), &assets);
    }

    *session = next;
    Ok(Json(session.view()))
}

async fn filter_handler(
    State(app): State<AppState>,
    payload: Result<Json<FilterRequest>, JsonRejection>,
) -> Result<Json<FilterResponse>, (StatusCode, String)> {
    let Json(req) = payload.map_err(to_bad_request)?;
    let compare: CompareSet = req.compare.into_iter().collect();
    let session = app.session.read().await;

    let fonts: Vec<FontDescriptor> = filter(
        &session.catalog().fonts,
        &req.filters,
        req.compare_mode,
        &compare,
    )
    .into_iter()
    .cloned()
    .collect();

    Ok(Json(FilterResponse {
        count: fonts.len(),
        fonts,
    }))
}

fn to_bad_request(err: impl std::fmt::Display) -> (StatusCode, String) {
    (StatusCode::BAD_REQUEST, err.to_string())
}
