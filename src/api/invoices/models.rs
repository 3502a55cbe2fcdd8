use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::api::companies::models::Company;

// ============================================================================
// DATABASE MODELS
// ============================================================================

/// Full invoice row. `amt` is NUMERIC in the store and serializes as a JSON
/// string; `paid_date` stays null until the invoice is marked paid.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Invoice {
    pub id: i32,
    pub comp_code: String,
    pub amt: Decimal,
    pub paid: bool,
    pub add_date: NaiveDate,
    pub paid_date: Option<NaiveDate>,
}

/// List projection: `{id, comp_code}` only
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct InvoiceSummary {
    pub id: i32,
    pub comp_code: String,
}

// ============================================================================
// REQUEST/RESPONSE MODELS
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct CreateInvoiceRequest {
    pub comp_code: String,
    pub amt: Decimal,
}

/// Amount is the only updatable field; `paid`/`paid_date` are never
/// recomputed from it.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateInvoiceRequest {
    pub amt: Decimal,
}

/// Single invoice with `comp_code` resolved into the embedded company record.
/// When the company row is missing the field is omitted from the JSON.
#[derive(Debug, Serialize)]
pub struct InvoiceWithCompany {
    pub id: i32,
    pub amt: Decimal,
    pub paid: bool,
    pub add_date: NaiveDate,
    pub paid_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<Company>,
}

impl InvoiceWithCompany {
    pub fn from_parts(invoice: Invoice, company: Option<Company>) -> Self {
        Self {
            id: invoice.id,
            amt: invoice.amt,
            paid: invoice.paid,
            add_date: invoice.add_date,
            paid_date: invoice.paid_date,
            company,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct InvoicesResponse {
    pub invoices: Vec<InvoiceSummary>,
}

#[derive(Debug, Serialize)]
pub struct InvoiceResponse {
    pub invoice: Invoice,
}

#[derive(Debug, Serialize)]
pub struct InvoiceDetailResponse {
    pub invoice: InvoiceWithCompany,
}
