use anyhow::{Context, Result};
use sqlx::PgPool;

use crate::models::company::{Company, CompanySummary};
use crate::models::invoice::Invoice;

/// Fetch all companies
pub async fn list_companies(pool: &PgPool) -> Result<Vec<Company>> {
    let companies =
        sqlx::query_as::<_, Company>("SELECT id, code, name, description FROM companies")
            .fetch_all(pool)
            .await
            .context("Failed to fetch companies")?;

    Ok(companies)
}

/// Look up a company by exact code match
pub async fn get_company_by_code(pool: &PgPool, code: &str) -> Result<Option<Company>> {
    let company = sqlx::query_as::<_, Company>(
        "SELECT id, code, name, description FROM companies WHERE code = $1",
    )
    .bind(code)
    .fetch_optional(pool)
    .await
    .context("Failed to fetch company by code")?;

    Ok(company)
}

/// Fetch the ids of every invoice billed to a company
pub async fn invoice_ids_for_company(pool: &PgPool, comp_id: i32) -> Result<Vec<i32>> {
    let ids: Vec<(i32,)> = sqlx::query_as("SELECT id FROM invoices WHERE comp_id = $1")
        .bind(comp_id)
        .fetch_all(pool)
        .await
        .context("Failed to fetch invoice ids for company")?;

    Ok(ids.into_iter().map(|(id,)| id).collect())
}

/// Insert a company and return the stored row
pub async fn insert_company(
    pool: &PgPool,
    code: &str,
    name: &str,
    description: Option<&str>,
) -> Result<Company> {
    let company = sqlx::query_as::<_, Company>(
        r#"
        INSERT INTO companies (code, name, description)
        VALUES ($1, $2, $3)
        RETURNING id, code, name, description
        "#,
    )
    .bind(code)
    .bind(name)
    .bind(description)
    .fetch_one(pool)
    .await
    .context("Failed to insert company")?;

    Ok(company)
}

/// Update a company's name and description by code
pub async fn update_company(
    pool: &PgPool,
    code: &str,
    name: &str,
    description: Option<&str>,
) -> Result<Option<Company>> {
    let company = sqlx::query_as::<_, Company>(
        r#"
        UPDATE companies SET name = $1, description = $2
        WHERE code = $3
        RETURNING id, code, name, description
        "#,
    )
    .bind(name)
    .bind(description)
    .bind(code)
    .fetch_optional(pool)
    .await
    .context("Failed to update company")?;

    Ok(company)
}

/// Delete a company by code
pub async fn delete_company(pool: &PgPool, code: &str) -> Result<()> {
    sqlx::query("DELETE FROM companies WHERE code = $1")
        .bind(code)
        .execute(pool)
        .await
        .context("Failed to delete company")?;

    Ok(())
}

/// Fetch all invoices
pub async fn list_invoices(pool: &PgPool) -> Result<Vec<Invoice>> {
    let invoices = sqlx::query_as::<_, Invoice>(
        "SELECT id, comp_id, amt, paid, add_date, paid_date FROM invoices",
    )
    .fetch_all(pool)
    .await
    .context("Failed to fetch invoices")?;

    Ok(invoices)
}

/// Look up an invoice by id
pub async fn get_invoice(pool: &PgPool, id: i32) -> Result<Option<Invoice>> {
    let invoice = sqlx::query_as::<_, Invoice>(
        "SELECT id, comp_id, amt, paid, add_date, paid_date FROM invoices WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
    .context("Failed to fetch invoice by id")?;

    Ok(invoice)
}

/// Look up an invoice joined with its owning company
pub async fn get_invoice_with_company(
    pool: &PgPool,
    id: i32,
) -> Result<Option<(Invoice, CompanySummary)>> {
    #[derive(sqlx::FromRow)]
    struct Row {
        id: i32,
        comp_id: i32,
        amt: f64,
        paid: bool,
        add_date: chrono::NaiveDateTime,
        paid_date: Option<chrono::NaiveDateTime>,
        code: String,
        name: String,
        description: Option<String>,
    }

    let row = sqlx::query_as::<_, Row>(
        r#"
        SELECT i.id, i.comp_id, i.amt, i.paid, i.add_date, i.paid_date,
               c.code, c.name, c.description
        FROM invoices AS i
        JOIN companies AS c ON i.comp_id = c.id
        WHERE i.id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
    .context("Failed to fetch invoice with company")?;

    Ok(row.map(|r| {
        (
            Invoice {
                id: r.id,
                comp_id: r.comp_id,
                amt: r.amt,
                paid: r.paid,
                add_date: r.add_date,
                paid_date: r.paid_date,
            },
            CompanySummary {
                code: r.code,
                name: r.name,
                description: r.description,
            },
        )
    }))
}

/// Resolve a company code to its internal id
pub async fn company_id_for_code(pool: &PgPool, code: &str) -> Result<Option<i32>> {
    let id: Option<(i32,)> = sqlx::query_as("SELECT id FROM companies WHERE code = $1")
        .bind(code)
        .fetch_optional(pool)
        .await
        .context("Failed to resolve company code")?;

    Ok(id.map(|(id,)| id))
}

/// Resolve an internal company id back to its code
pub async fn company_code_for_id(pool: &PgPool, comp_id: i32) -> Result<Option<String>> {
    let code: Option<(String,)> = sqlx::query_as("SELECT code FROM companies WHERE id = $1")
        .bind(comp_id)
        .fetch_optional(pool)
        .await
        .context("Failed to resolve company id")?;

    Ok(code.map(|(code,)| code))
}

/// Insert an invoice and return the stored row
pub async fn insert_invoice(pool: &PgPool, comp_id: i32, amt: f64) -> Result<Invoice> {
    let invoice = sqlx::query_as::<_, Invoice>(
        r#"
        INSERT INTO invoices (comp_id, amt)
        VALUES ($1, $2)
        RETURNING id, comp_id, amt, paid, add_date, paid_date
        "#,
    )
    .bind(comp_id)
    .bind(amt)
    .fetch_one(pool)
    .await
    .context("Failed to insert invoice")?;

    Ok(invoice)
}

/// Update an invoice's amount and return the stored row
pub async fn update_invoice_amount(pool: &PgPool, id: i32, amt: f64) -> Result<Invoice> {
    let invoice = sqlx::query_as::<_, Invoice>(
        r#"
        UPDATE invoices SET amt = $1
        WHERE id = $2
        RETURNING id, comp_id, amt, paid, add_date, paid_date
        "#,
    )
    .bind(amt)
    .bind(id)
    .fetch_one(pool)
    .await
    .context("Failed to update invoice amount")?;

    Ok(invoice)
}

/// Delete an invoice by id
pub async fn delete_invoice(pool: &PgPool, id: i32) -> Result<()> {
    sqlx::query("DELETE FROM invoices WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await
        .context("Failed to delete invoice")?;

    Ok(())
}
