use anyhow::Result;
use async_trait::async_trait;
use std::time::Instant;

use crate::db::{Database, DatabaseBackend};
use crate::metrics::registry::{DATABASE_QUERIES_TOTAL, DATABASE_QUERY_DURATION_SECONDS};
use crate::models::company::{Company, CompanySummary};
use crate::models::invoice::Invoice;

/// A thin wrapper around a DatabaseBackend that records basic Prometheus
/// metrics for query counts and durations.
///
/// This keeps performance instrumentation centralized and avoids sprinkling
/// timing code across the backend implementations.
pub struct InstrumentedDatabase {
    inner: Database,
}

impl InstrumentedDatabase {
    pub fn new(inner: Database) -> Self {
        Self { inner }
    }

    fn observe(&self, query_type: &'static str, start: Instant) {
        let seconds = start.elapsed().as_secs_f64();
        DATABASE_QUERIES_TOTAL
            .with_label_values(&[query_type])
            .inc();
        DATABASE_QUERY_DURATION_SECONDS
            .with_label_values(&[query_type])
            .observe(seconds);
    }
}

#[async_trait]
impl DatabaseBackend for InstrumentedDatabase {
    async fn list_companies(&self) -> Result<Vec<Company>> {
        let start = Instant::now();
        let res = self.inner.list_companies().await;
        self.observe("select", start);
        res
    }

    async fn get_company_by_code(&self, code: &str) -> Result<Option<Company>> {
        let start = Instant::now();
        let res = self.inner.get_company_by_code(code).await;
        self.observe("select", start);
        res
    }

    async fn invoice_ids_for_company(&self, comp_id: i32) -> Result<Vec<i32>> {
        let start = Instant::now();
        let res = self.inner.invoice_ids_for_company(comp_id).await;
        self.observe("select", start);
        res
    }

    async fn insert_company(
        &self,
        code: &str,
        name: &str,
        description: Option<&str>,
    ) -> Result<Company> {
        let start = Instant::now();
        let res = self.inner.insert_company(code, name, description).await;
        self.observe("insert", start);
        res
    }

    async fn update_company(
        &self,
        code: &str,
        name: &str,
        description: Option<&str>,
    ) -> Result<Option<Company>> {
        let start = Instant::now();
        let res = self.inner.update_company(code, name, description).await;
        self.observe("update", start);
        res
    }

    async fn delete_company(&self, code: &str) -> Result<()> {
        let start = Instant::now();
        let res = self.inner.delete_company(code).await;
        self.observe("delete", start);
        res
    }

    async fn list_invoices(&self) -> Result<Vec<Invoice>> {
        let start = Instant::now();
        let res = self.inner.list_invoices().await;
        self.observe("select", start);
        res
    }

    async fn get_invoice(&self, id: i32) -> Result<Option<Invoice>> {
        let start = Instant::now();
        let res = self.inner.get_invoice(id).await;
        self.observe("select", start);
        res
    }

    async fn get_invoice_with_company(
        &self,
        id: i32,
    ) -> Result<Option<(Invoice, CompanySummary)>> {
        let start = Instant::now();
        let res = self.inner.get_invoice_with_company(id).await;
        self.observe("select", start);
        res
    }

    async fn company_id_for_code(&self, code: &str) -> Result<Option<i32>> {
        let start = Instant::now();
        let res = self.inner.company_id_for_code(code).await;
        self.observe("select", start);
        res
    }

    async fn company_code_for_id(&self, comp_id: i32) -> Result<Option<String>> {
        let start = Instant::now();
        let res = self.inner.company_code_for_id(comp_id).await;
        self.observe("select", start);
        res
    }

    async fn insert_invoice(&self, comp_id: i32, amt: f64) -> Result<Invoice> {
        let start = Instant::now();
        let res = self.inner.insert_invoice(comp_id, amt).await;
        self.observe("insert", start);
        res
    }

    async fn update_invoice_amount(&self, id: i32, amt: f64) -> Result<Invoice> {
        let start = Instant::now();
        let res = self.inner.update_invoice_amount(id, amt).await;
        self.observe("update", start);
        res
    }

    async fn delete_invoice(&self, id: i32) -> Result<()> {
        let start = Instant::now();
        let res = self.inner.delete_invoice(id).await;
        self.observe("delete", start);
        res
    }

    async fn test_connection(&self) -> Result<()> {
        let start = Instant::now();
        let res = self.inner.test_connection().await;
        self.observe("select", start);
        res
    }
}
