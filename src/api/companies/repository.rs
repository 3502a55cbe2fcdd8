use sqlx::PgPool;
use tracing::error;

use crate::api::common::ApiError;
use crate::api::companies::models::{
    Company, CompanySummary, CreateCompanyRequest, UpdateCompanyRequest,
};

pub async fn list_companies(pool: &PgPool) -> Result<Vec<CompanySummary>, ApiError> {
    sqlx::query_as::<_, CompanySummary>("SELECT code, name FROM companies")
        .fetch_all(pool)
        .await
        .map_err(|e| {
            error!("Error listing companies: {}", e);
            ApiError::internal(format!("Query execution failed: {}", e))
        })
}

pub async fn fetch_company(pool: &PgPool, code: &str) -> Result<Option<Company>, ApiError> {
    sqlx::query_as::<_, Company>(
        "SELECT code, name, description FROM companies WHERE code = $1",
    )
    .bind(code)
    .fetch_optional(pool)
    .await
    .map_err(|e| {
        error!("Error fetching company {}: {}", code, e);
        ApiError::internal(format!("Query execution failed: {}", e))
    })
}

/// Ids of the invoices belonging to a company, in id order
pub async fn fetch_invoice_ids(pool: &PgPool, code: &str) -> Result<Vec<i32>, ApiError> {
    sqlx::query_scalar::<_, i32>("SELECT id FROM invoices WHERE comp_code = $1 ORDER BY id")
        .bind(code)
        .fetch_all(pool)
        .await
        .map_err(|e| {
            error!("Error fetching invoice ids for company {}: {}", code, e);
            ApiError::internal(format!("Query execution failed: {}", e))
        })
}

pub async fn insert_company(
    pool: &PgPool,
    request: &CreateCompanyRequest,
) -> Result<Company, ApiError> {
    sqlx::query_as::<_, Company>(
        r#"
        INSERT INTO companies (code, name, description)
        VALUES ($1, $2, $3)
        RETURNING code, name, description
        "#,
    )
    .bind(&request.code)
    .bind(&request.name)
    .bind(&request.description)
    .fetch_one(pool)
    .await
    .map_err(|e| {
        error!("Error inserting company {}: {}", request.code, e);
        ApiError::internal(format!("Failed to insert company: {}", e))
    })
}

pub async fn update_company(
    pool: &PgPool,
    code: &str,
    request: &UpdateCompanyRequest,
) -> Result<Option<Company>, ApiError> {
    sqlx::query_as::<_, Company>(
        r#"
        UPDATE companies SET name = $1, description = $2
        WHERE code = $3
        RETURNING code, name, description
        "#,
    )
    .bind(&request.name)
    .bind(&request.description)
    .bind(code)
    .fetch_optional(pool)
    .await
    .map_err(|e| {
        error!("Error updating company {}: {}", code, e);
        ApiError::internal(format!("Failed to update company: {}", e))
    })
}

/// Deletes by primary key; returns the number of rows affected
pub async fn delete_company(pool: &PgPool, code: &str) -> Result<u64, ApiError> {
    let result = sqlx::query("DELETE FROM companies WHERE code = $1")
        .bind(code)
        .execute(pool)
        .await
        .map_err(|e| {
            error!("Error deleting company {}: {}", code, e);
            ApiError::internal(format!("Failed to delete company: {}", e))
        })?;

    Ok(result.rows_affected())
}
