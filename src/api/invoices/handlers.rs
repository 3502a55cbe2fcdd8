use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use std::sync::Arc;
use tracing::{debug, info};

use crate::api::common::{ApiError, DeleteResponse};
use crate::api::companies::repository as companies_repository;
use crate::api::invoices::models::{
    CreateInvoiceRequest, InvoiceDetailResponse, InvoiceResponse, InvoiceWithCompany,
    InvoicesResponse, UpdateInvoiceRequest,
};
use crate::api::invoices::repository;
use crate::state::AppState;

/// Create the invoices router
pub fn create_invoices_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/invoices", get(list_invoices).post(create_invoice))
        .route(
            "/invoices/:id",
            get(get_invoice).put(update_invoice).delete(delete_invoice),
        )
}

/// GET /invoices — all invoices projected to `{id, comp_code}`
pub async fn list_invoices(
    State(state): State<Arc<AppState>>,
) -> Result<Json<InvoicesResponse>, ApiError> {
    let invoices = repository::list_invoices(&state.db_pool).await?;
    debug!("Listed {} invoices", invoices.len());

    Ok(Json(InvoicesResponse { invoices }))
}

/// GET /invoices/:id — single invoice with the company record embedded in
/// place of `comp_code`
pub async fn get_invoice(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<InvoiceDetailResponse>, ApiError> {
    let invoice = repository::fetch_invoice(&state.db_pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Invoice Not Found"))?;

    // Second, non-transactional query; if the company row is gone the
    // embedded field is simply omitted from the response.
    let company =
        companies_repository::fetch_company(&state.db_pool, &invoice.comp_code).await?;

    Ok(Json(InvoiceDetailResponse {
        invoice: InvoiceWithCompany::from_parts(invoice, company),
    }))
}

/// POST /invoices — insert with store defaults and return the full row
pub async fn create_invoice(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateInvoiceRequest>,
) -> Result<(StatusCode, Json<InvoiceResponse>), ApiError> {
    let invoice = repository::insert_invoice(&state.db_pool, &request).await?;
    info!("Created invoice {} for company {}", invoice.id, invoice.comp_code);

    Ok((StatusCode::CREATED, Json(InvoiceResponse { invoice })))
}

/// PUT /invoices/:id — update the amount only, 404 when no row matches
pub async fn update_invoice(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateInvoiceRequest>,
) -> Result<Json<InvoiceResponse>, ApiError> {
    let invoice = repository::update_invoice(&state.db_pool, id, &request)
        .await?
        .ok_or_else(|| ApiError::not_found("Invoice Not Found"))?;
    info!("Updated invoice {}", invoice.id);

    Ok(Json(InvoiceResponse { invoice }))
}

/// DELETE /invoices/:id — 404 when zero rows are affected
pub async fn delete_invoice(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let deleted = repository::delete_invoice(&state.db_pool, id).await?;
    if deleted == 0 {
        return Err(ApiError::not_found("Invoice Not Found"));
    }
    info!("Deleted invoice {}", id);

    Ok(Json(DeleteResponse::deleted()))
}
