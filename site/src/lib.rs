//! Server-rendered shell for the clinic website.
//!
//! # Overview
//! Maps the site's routes to page handlers. Handlers never talk to the data
//! service directly: they build a controller from `clinic_core`, run it
//! against the `DataStore` held in [`AppState`], and render its view.

pub mod config;
pub mod pages;
pub mod render;
pub mod routes;

use std::sync::Arc;

use axum::{routing::post, Router};
use clinic_core::DataStore;
use tower_http::trace::TraceLayer;

/// State shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DataStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn DataStore>) -> Self {
        Self { store }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/consultation", post(pages::submit_consultation).get(pages::dispatch))
        .fallback(pages::dispatch)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
