//! HTTP API for the Store Engine.
//!
//! This module exposes the view engine and the purchase calculator
//! through a small REST API built with
//! [`axum`](https://crates.io/crates/axum).  Clients can page through
//! the mock store collections, run the view engine over records they
//! send, and compute purchase lines and document totals.

use crate::catalog::{Catalog, Collection, Row};
use crate::config::Settings;
use crate::error::ApiError;
use crate::models::{
    DiscountSpec, DocumentTotals, LineInput, PurchaseLine, SortDirection, ViewParams, ViewResult,
};
use crate::purchase::{compute_line, compute_totals};
use crate::tax::{default_slabs, load_tax_slabs, TaxSlab};
use crate::view::view;
use anyhow::{Context, Result};
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

/// Largest page the collection endpoint will serve.
pub const MAX_PAGE_SIZE: usize = 1000;

/// Application state shared across requests.  Nothing in it changes
/// after startup.
pub struct AppState {
    pub catalog: Catalog,
    pub tax_slabs: Vec<TaxSlab>,
    pub default_page_size: usize,
}

impl AppState {
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let tax_slabs = match &settings.tax_slab_file {
            Some(path) => load_tax_slabs(path)?,
            None => default_slabs(),
        };
        Ok(Self {
            catalog: Catalog::mock(),
            tax_slabs,
            default_page_size: settings.default_page_size.max(1),
        })
    }
}

/// Build the API router around `state`.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/collections/:name", get(collection_handler))
        .route("/api/view", post(view_handler))
        .route("/api/purchase/line", post(line_handler))
        .route("/api/purchase/totals", post(totals_handler))
        .route("/api/tax/slabs", get(slabs_handler))
        .with_state(state)
}

/// Query string of `GET /api/collections/:name`.
#[derive(Debug, Default, Deserialize)]
pub struct CollectionQuery {
    pub search: Option<String>,
    pub sort: Option<String>,
    pub dir: Option<SortDirection>,
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

/// Body of `POST /api/view`.
#[derive(Debug, Deserialize)]
pub struct ViewRequest {
    pub records: Vec<Value>,
    #[serde(default)]
    pub params: ViewParams,
}

/// Body of `POST /api/purchase/totals`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalsRequest {
    pub lines: Vec<PurchaseLine>,
    #[serde(default)]
    pub overall_discount: DiscountSpec,
}

/// Handler for GET /api/collections/:name
async fn collection_handler(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    query: Result<Query<CollectionQuery>, QueryRejection>,
) -> Result<Json<ViewResult<Row>>, ApiError> {
    let collection = Collection::from_name(&name)
        .ok_or_else(|| ApiError::NotFound(format!("collection {}", name)))?;
    let Query(query) = query.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    let params = ViewParams {
        search_term: query.search.unwrap_or_default(),
        search_fields: collection
            .search_fields()
            .iter()
            .map(|f| f.to_string())
            .collect(),
        sort_key: query.sort.filter(|s| !s.is_empty()),
        sort_direction: query.dir.unwrap_or_default(),
        page: query.page.unwrap_or(1),
        page_size: query
            .page_size
            .unwrap_or(state.default_page_size)
            .min(MAX_PAGE_SIZE),
    };
    debug!(collection = %name, ?params, "listing collection");
    Ok(Json(view(state.catalog.rows(collection), &params)))
}

/// Handler for POST /api/view
async fn view_handler(
    payload: Result<Json<ViewRequest>, JsonRejection>,
) -> Result<Json<ViewResult<Value>>, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    Ok(Json(view(&request.records, &request.params)))
}

/// Handler for POST /api/purchase/line
async fn line_handler(
    payload: Result<Json<LineInput>, JsonRejection>,
) -> Result<Json<PurchaseLine>, ApiError> {
    let Json(input) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    Ok(Json(compute_line(&input)))
}

/// Handler for POST /api/purchase/totals
async fn totals_handler(
    payload: Result<Json<TotalsRequest>, JsonRejection>,
) -> Result<Json<DocumentTotals>, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    Ok(Json(compute_totals(&request.lines, &request.overall_discount)))
}

/// Handler for GET /api/tax/slabs
async fn slabs_handler(State(state): State<Arc<AppState>>) -> Json<Vec<TaxSlab>> {
    Json(state.tax_slabs.clone())
}

/// Launch the API server.  Blocks until the server terminates.
pub async fn serve(settings: &Settings) -> Result<()> {
    let state = Arc::new(AppState::from_settings(settings)?);
    let router = build_router(state);
    let listener = tokio::net::TcpListener::bind(&settings.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", settings.bind_addr))?;
    info!(addr = %settings.bind_addr, "server listening");
    axum::serve(listener, router).await?;
    Ok(())
}
