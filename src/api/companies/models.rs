use serde::{Deserialize, Serialize};

// ============================================================================
// DATABASE MODELS
// ============================================================================

/// Full projected company row
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Company {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
}

/// List projection: `{code, name}` only
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct CompanySummary {
    pub code: String,
    pub name: String,
}

// ============================================================================
// REQUEST/RESPONSE MODELS
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct CreateCompanyRequest {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCompanyRequest {
    pub name: String,
    pub description: Option<String>,
}

/// Single company with its invoice ids, composed at read time from a
/// secondary query; the id list is not persisted on the entity.
#[derive(Debug, Serialize)]
pub struct CompanyWithInvoices {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub invoices: Vec<i32>,
}

impl CompanyWithInvoices {
    pub fn from_parts(company: Company, invoices: Vec<i32>) -> Self {
        Self {
            code: company.code,
            name: company.name,
            description: company.description,
            invoices,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CompaniesResponse {
    pub companies: Vec<CompanySummary>,
}

#[derive(Debug, Serialize)]
pub struct CompanyResponse {
    pub company: Company,
}

#[derive(Debug, Serialize)]
pub struct CompanyDetailResponse {
    pub company: CompanyWithInvoices,
}
