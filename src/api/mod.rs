pub mod common;
pub mod companies;
pub mod invoices;

use axum::{routing::get, Json, Router};
use chrono::Utc;
use std::sync::Arc;

use crate::state::AppState;
use common::ApiError;

/// Creates the API router with all REST endpoints
pub fn create_api_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health_check_handler))
        .merge(companies::create_companies_router())
        .merge(invoices::create_invoices_router())
}

/// Health check endpoint for the billing service
pub async fn health_check_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "billing-api",
        "timestamp": Utc::now(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Terminal handler for requests that match no route
pub async fn not_found_handler() -> ApiError {
    ApiError::not_found("Not Found")
}
