pub mod connection;
pub mod queries;

use anyhow::Result;
use async_trait::async_trait;
use sqlx::PgPool;

use crate::db::backend::DatabaseBackend;
use crate::models::company::{Company, CompanySummary};
use crate::models::invoice::Invoice;

pub struct PostgresBackend {
    pool: PgPool,
}

impl PostgresBackend {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl DatabaseBackend for PostgresBackend {
    async fn list_companies(&self) -> Result<Vec<Company>> {
        queries::list_companies(&self.pool).await
    }

    async fn get_company_by_code(&self, code: &str) -> Result<Option<Company>> {
        queries::get_company_by_code(&self.pool, code).await
    }

    async fn invoice_ids_for_company(&self, comp_id: i32) -> Result<Vec<i32>> {
        queries::invoice_ids_for_company(&self.pool, comp_id).await
    }

    async fn insert_company(
        &self,
        code: &str,
        name: &str,
        description: Option<&str>,
    ) -> Result<Company> {
        queries::insert_company(&self.pool, code, name, description).await
    }

    async fn update_company(
        &self,
        code: &str,
        name: &str,
        description: Option<&str>,
    ) -> Result<Option<Company>> {
        queries::update_company(&self.pool, code, name, description).await
    }

    async fn delete_company(&self, code: &str) -> Result<()> {
        queries::delete_company(&self.pool, code).await
    }

    async fn list_invoices(&self) -> Result<Vec<Invoice>> {
        queries::list_invoices(&self.pool).await
    }

    async fn get_invoice(&self, id: i32) -> Result<Option<Invoice>> {
        queries::get_invoice(&self.pool, id).await
    }

    async fn get_invoice_with_company(
        &self,
        id: i32,
    ) -> Result<Option<(Invoice, CompanySummary)>> {
        queries::get_invoice_with_company(&self.pool, id).await
    }

    async fn company_id_for_code(&self, code: &str) -> Result<Option<i32>> {
        queries::company_id_for_code(&self.pool, code).await
    }

    async fn company_code_for_id(&self, comp_id: i32) -> Result<Option<String>> {
        queries::company_code_for_id(&self.pool, comp_id).await
    }

    async fn insert_invoice(&self, comp_id: i32, amt: f64) -> Result<Invoice> {
        queries::insert_invoice(&self.pool, comp_id, amt).await
    }

    async fn update_invoice_amount(&self, id: i32, amt: f64) -> Result<Invoice> {
        queries::update_invoice_amount(&self.pool, id, amt).await
    }

    async fn delete_invoice(&self, id: i32) -> Result<()> {
        queries::delete_invoice(&self.pool, id).await
    }

    async fn test_connection(&self) -> Result<()> {
        connection::test_connection(&self.pool).await
    }
}
