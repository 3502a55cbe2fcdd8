use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use std::sync::Arc;
use tracing::{debug, info};

use crate::api::common::{ApiError, DeleteResponse};
use crate::api::companies::models::{
    CompaniesResponse, CompanyDetailResponse, CompanyResponse, CompanyWithInvoices,
    CreateCompanyRequest, UpdateCompanyRequest,
};
use crate::api::companies::repository;
use crate::state::AppState;

/// Create the companies router
pub fn create_companies_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/companies", get(list_companies).post(create_company))
        .route(
            "/companies/:code",
            get(get_company).put(update_company).delete(delete_company),
        )
}

/// GET /companies — all companies projected to `{code, name}`
pub async fn list_companies(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CompaniesResponse>, ApiError> {
    let companies = repository::list_companies(&state.db_pool).await?;
    debug!("Listed {} companies", companies.len());

    Ok(Json(CompaniesResponse { companies }))
}

/// GET /companies/:code — single company with the ids of its invoices
pub async fn get_company(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
) -> Result<Json<CompanyDetailResponse>, ApiError> {
    let company = repository::fetch_company(&state.db_pool, &code)
        .await?
        .ok_or_else(|| ApiError::not_found("Company Not Found"))?;

    // Second, non-transactional query; a concurrent invoice mutation between
    // the two statements can yield a momentarily inconsistent composed view.
    let invoices = repository::fetch_invoice_ids(&state.db_pool, &code).await?;

    Ok(Json(CompanyDetailResponse {
        company: CompanyWithInvoices::from_parts(company, invoices),
    }))
}

/// POST /companies — insert and return the full projected row
pub async fn create_company(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateCompanyRequest>,
) -> Result<(StatusCode, Json<CompanyResponse>), ApiError> {
    let company = repository::insert_company(&state.db_pool, &request).await?;
    info!("Created company {}", company.code);

    Ok((StatusCode::CREATED, Json(CompanyResponse { company })))
}

/// PUT /companies/:code — update by primary key, 404 when no row matches
pub async fn update_company(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
    Json(request): Json<UpdateCompanyRequest>,
) -> Result<Json<CompanyResponse>, ApiError> {
    let company = repository::update_company(&state.db_pool, &code, &request)
        .await?
        .ok_or_else(|| ApiError::not_found("Company Not Found"))?;
    info!("Updated company {}", company.code);

    Ok(Json(CompanyResponse { company }))
}

/// DELETE /companies/:code — 404 when zero rows are affected
pub async fn delete_company(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let deleted = repository::delete_company(&state.db_pool, &code).await?;
    if deleted == 0 {
        return Err(ApiError::not_found("Company Not Found"));
    }
    info!("Deleted company {}", code);

    Ok(Json(DeleteResponse::deleted()))
}
