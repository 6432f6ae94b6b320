use anyhow::Result;
use async_trait::async_trait;

use crate::models::company::{Company, CompanySummary};
use crate::models::invoice::Invoice;

/// Storage access trait behind the request handlers.
///
/// Each method is one parameterized statement; handlers compose them
/// sequentially without cross-statement transactions. Tests swap in an
/// in-memory implementation.
#[async_trait]
pub trait DatabaseBackend: Send + Sync {
    /// Fetch all companies
    async fn list_companies(&self) -> Result<Vec<Company>>;

    /// Look up a company by exact code match
    async fn get_company_by_code(&self, code: &str) -> Result<Option<Company>>;

    /// Ids of every invoice billed to the given company
    async fn invoice_ids_for_company(&self, comp_id: i32) -> Result<Vec<i32>>;

    /// Insert a company and return the stored row
    async fn insert_company(
        &self,
        code: &str,
        name: &str,
        description: Option<&str>,
    ) -> Result<Company>;

    /// Update a company's name and description; None if the code matched no row
    async fn update_company(
        &self,
        code: &str,
        name: &str,
        description: Option<&str>,
    ) -> Result<Option<Company>>;

    /// Delete a company by code (existence is checked by the caller)
    async fn delete_company(&self, code: &str) -> Result<()>;

    /// Fetch all invoices
    async fn list_invoices(&self) -> Result<Vec<Invoice>>;

    /// Look up an invoice by id
    async fn get_invoice(&self, id: i32) -> Result<Option<Invoice>>;

    /// Look up an invoice joined with its owning company
    async fn get_invoice_with_company(&self, id: i32)
        -> Result<Option<(Invoice, CompanySummary)>>;

    /// Resolve a company code to its internal id
    async fn company_id_for_code(&self, code: &str) -> Result<Option<i32>>;

    /// Resolve an internal company id back to its code
    async fn company_code_for_id(&self, comp_id: i32) -> Result<Option<String>>;

    /// Insert an invoice (paid defaults to false, add_date to now) and return
    /// the stored row
    async fn insert_invoice(&self, comp_id: i32, amt: f64) -> Result<Invoice>;

    /// Update an invoice's amount and return the stored row
    async fn update_invoice_amount(&self, id: i32, amt: f64) -> Result<Invoice>;

    /// Delete an invoice by id (existence is checked by the caller)
    async fn delete_invoice(&self, id: i32) -> Result<()>;

    /// Test database connection
    async fn test_connection(&self) -> Result<()>;
}
