use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A company that invoices are billed against
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, FromRow)]
pub struct Company {
    pub id: i32,
    pub code: String,
    pub name: String,
    pub description: Option<String>,
}

/// Company shape returned by the single-company lookup.
///
/// The internal `id` is omitted here; clients address companies by code.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CompanyDetail {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    /// Ids of every invoice billed to this company
    pub invoice: Vec<i32>,
}

impl CompanyDetail {
    pub fn from_company(company: Company, invoice_ids: Vec<i32>) -> Self {
        Self {
            code: company.code,
            name: company.name,
            description: company.description,
            invoice: invoice_ids,
        }
    }
}

/// Company fields nested inside an invoice lookup
#[derive(Debug, Clone, Serialize, ToSchema, FromRow)]
pub struct CompanySummary {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
}
