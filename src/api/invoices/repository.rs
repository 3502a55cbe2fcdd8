use sqlx::PgPool;
use tracing::error;

use crate::api::common::ApiError;
use crate::api::invoices::models::{
    CreateInvoiceRequest, Invoice, InvoiceSummary, UpdateInvoiceRequest,
};

pub async fn list_invoices(pool: &PgPool) -> Result<Vec<InvoiceSummary>, ApiError> {
    sqlx::query_as::<_, InvoiceSummary>("SELECT id, comp_code FROM invoices")
        .fetch_all(pool)
        .await
        .map_err(|e| {
            error!("Error listing invoices: {}", e);
            ApiError::internal(format!("Query execution failed: {}", e))
        })
}

pub async fn fetch_invoice(pool: &PgPool, id: i32) -> Result<Option<Invoice>, ApiError> {
    sqlx::query_as::<_, Invoice>(
        r#"
        SELECT id, comp_code, amt, paid, add_date, paid_date FROM invoices
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(|e| {
        error!("Error fetching invoice {}: {}", id, e);
        ApiError::internal(format!("Query execution failed: {}", e))
    })
}

/// Inserts with store defaults for `paid` (false) and `add_date` (current
/// date). A `comp_code` without a matching company fails on the foreign key.
pub async fn insert_invoice(
    pool: &PgPool,
    request: &CreateInvoiceRequest,
) -> Result<Invoice, ApiError> {
    sqlx::query_as::<_, Invoice>(
        r#"
        INSERT INTO invoices (comp_code, amt)
        VALUES ($1, $2)
        RETURNING id, comp_code, amt, paid, add_date, paid_date
        "#,
    )
    .bind(&request.comp_code)
    .bind(request.amt)
    .fetch_one(pool)
    .await
    .map_err(|e| {
        error!("Error inserting invoice for {}: {}", request.comp_code, e);
        ApiError::internal(format!("Failed to insert invoice: {}", e))
    })
}

pub async fn update_invoice(
    pool: &PgPool,
    id: i32,
    request: &UpdateInvoiceRequest,
) -> Result<Option<Invoice>, ApiError> {
    sqlx::query_as::<_, Invoice>(
        r#"
        UPDATE invoices SET amt = $1
        WHERE id = $2
        RETURNING id, comp_code, amt, paid, add_date, paid_date
        "#,
    )
    .bind(request.amt)
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(|e| {
        error!("Error updating invoice {}: {}", id, e);
        ApiError::internal(format!("Failed to update invoice: {}", e))
    })
}

/// Deletes by primary key; returns the number of rows affected
pub async fn delete_invoice(pool: &PgPool, id: i32) -> Result<u64, ApiError> {
    let result = sqlx::query("DELETE FROM invoices WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await
        .map_err(|e| {
            error!("Error deleting invoice {}: {}", id, e);
            ApiError::internal(format!("Failed to delete invoice: {}", e))
        })?;

    Ok(result.rows_affected())
}
