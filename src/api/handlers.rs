use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tracing::info;
use utoipa::ToSchema;

use crate::db::Database;
use crate::errors::ErrorResponse;
use crate::models::company::{Company, CompanyDetail};
use crate::models::invoice::{Invoice, InvoiceDetail, InvoiceWithCode};

lazy_static::lazy_static! {
    static ref START_TIME: Instant = Instant::now();
}

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub db: Database,
}

/// Body accepted by company creation
#[derive(Debug, Deserialize, ToSchema)]
pub struct CompanyPayload {
    pub code: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Body accepted by company update
#[derive(Debug, Deserialize, ToSchema)]
pub struct CompanyUpdatePayload {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Body accepted by invoice creation
#[derive(Debug, Deserialize, ToSchema)]
pub struct InvoicePayload {
    pub comp_code: Option<String>,
    pub amt: Option<f64>,
}

/// Body accepted by invoice amount update
#[derive(Debug, Deserialize, ToSchema)]
pub struct InvoiceAmountPayload {
    pub amt: Option<f64>,
}

// Concrete response types for OpenAPI generation
/// Company list response
#[derive(Debug, Serialize, ToSchema)]
pub struct CompanyListResponse {
    pub company: Vec<Company>,
}

/// Single company response
#[derive(Debug, Serialize, ToSchema)]
pub struct CompanyResponse {
    pub company: Company,
}

/// Company-with-invoices response
#[derive(Debug, Serialize, ToSchema)]
pub struct CompanyDetailResponse {
    pub company: CompanyDetail,
}

/// Single invoice response
#[derive(Debug, Serialize, ToSchema)]
pub struct InvoiceResponse {
    pub invoice: Invoice,
}

/// Invoice-with-company response
#[derive(Debug, Serialize, ToSchema)]
pub struct InvoiceDetailResponse {
    pub invoice: InvoiceDetail,
}

/// Updated-invoice response (owning company's code appended)
#[derive(Debug, Serialize, ToSchema)]
pub struct InvoiceWithCodeResponse {
    pub invoice: InvoiceWithCode,
}

/// Deletion confirmation
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// A string field counts as present only when non-empty, mirroring the
/// truthiness semantics clients of this API already rely on.
fn present(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|s| !s.is_empty())
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = serde_json::Value)
    )
)]
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "billtrack",
        "version": env!("CARGO_PKG_VERSION"),
        "uptime_seconds": START_TIME.elapsed().as_secs(),
    }))
}

/// List all companies
#[utoipa::path(
    get,
    path = "/companies",
    tag = "companies",
    responses(
        (status = 200, description = "All companies", body = CompanyListResponse),
        (status = 404, description = "No companies exist", body = ErrorResponse)
    )
)]
pub async fn list_companies(State(state): State<AppState>) -> Result<Response, ErrorResponse> {
    info!("List companies request");

    let companies = state.db.list_companies().await?;
    if companies.is_empty() {
        return Err(ErrorResponse::company_not_found("Companies not Found"));
    }

    Ok((StatusCode::OK, Json(CompanyListResponse { company: companies })).into_response())
}

/// Get a company by code, with the ids of its invoices
#[utoipa::path(
    get,
    path = "/companies/{code}",
    tag = "companies",
    params(
        ("code" = String, Path, description = "Company code")
    ),
    responses(
        (status = 200, description = "Company found", body = CompanyDetailResponse),
        (status = 404, description = "Company not found", body = ErrorResponse)
    )
)]
pub async fn get_company(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Response, ErrorResponse> {
    info!("Get company request: code={}", code);

    let company = state
        .db
        .get_company_by_code(&code)
        .await?
        .ok_or_else(|| ErrorResponse::company_not_found(format!("Company {code} is not found")))?;

    let invoice_ids = state.db.invoice_ids_for_company(company.id).await?;

    Ok((
        StatusCode::OK,
        Json(CompanyDetailResponse {
            company: CompanyDetail::from_company(company, invoice_ids),
        }),
    )
        .into_response())
}

/// Create a company
#[utoipa::path(
    post,
    path = "/companies",
    tag = "companies",
    request_body = CompanyPayload,
    responses(
        (status = 201, description = "Company created", body = CompanyResponse),
        (status = 400, description = "Missing name or code", body = ErrorResponse)
    )
)]
pub async fn create_company(
    State(state): State<AppState>,
    Json(payload): Json<CompanyPayload>,
) -> Result<Response, ErrorResponse> {
    let (Some(name), Some(code)) = (present(payload.name.as_ref()), present(payload.code.as_ref()))
    else {
        return Err(ErrorResponse::validation_error("Company name is required"));
    };

    info!("Create company request: code={}", code);

    let company = state
        .db
        .insert_company(code, name, payload.description.as_deref())
        .await?;

    Ok((StatusCode::CREATED, Json(CompanyResponse { company })).into_response())
}

/// Update a company's name and description
#[utoipa::path(
    patch,
    path = "/companies/{code}",
    tag = "companies",
    params(
        ("code" = String, Path, description = "Company code")
    ),
    request_body = CompanyUpdatePayload,
    responses(
        (status = 200, description = "Company updated", body = CompanyResponse),
        (status = 400, description = "Missing name", body = ErrorResponse),
        (status = 404, description = "Company not found", body = ErrorResponse)
    )
)]
pub async fn update_company(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Json(payload): Json<CompanyUpdatePayload>,
) -> Result<Response, ErrorResponse> {
    let Some(name) = present(payload.name.as_ref()) else {
        return Err(ErrorResponse::validation_error("Company name is required"));
    };

    info!("Update company request: code={}", code);

    let company = state
        .db
        .update_company(&code, name, payload.description.as_deref())
        .await?
        .ok_or_else(|| {
            ErrorResponse::company_not_found(format!("Company with the code {code} doesn't exist"))
        })?;

    Ok((StatusCode::OK, Json(CompanyResponse { company })).into_response())
}

/// Delete a company by code
#[utoipa::path(
    delete,
    path = "/companies/{code}",
    tag = "companies",
    params(
        ("code" = String, Path, description = "Company code")
    ),
    responses(
        (status = 200, description = "Company deleted", body = MessageResponse),
        (status = 404, description = "Company not found", body = ErrorResponse)
    )
)]
pub async fn delete_company(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Response, ErrorResponse> {
    info!("Delete company request: code={}", code);

    // Existence is checked with a separate statement before acting; the two
    // round trips are not atomic.
    state.db.get_company_by_code(&code).await?.ok_or_else(|| {
        ErrorResponse::company_not_found(format!("Company with the code {code} does not exist"))
    })?;

    state.db.delete_company(&code).await?;

    Ok((
        StatusCode::OK,
        Json(MessageResponse {
            message: format!("Company with the code {code} is deleted"),
        }),
    )
        .into_response())
}

/// List all invoices
///
/// Returns a bare array rather than a wrapped object. The other endpoints
/// wrap their payloads; this asymmetry is part of the published contract.
#[utoipa::path(
    get,
    path = "/invoices",
    tag = "invoices",
    responses(
        (status = 200, description = "All invoices", body = Vec<Invoice>),
        (status = 404, description = "No invoices exist", body = ErrorResponse)
    )
)]
pub async fn list_invoices(State(state): State<AppState>) -> Result<Response, ErrorResponse> {
    info!("List invoices request");

    let invoices = state.db.list_invoices().await?;
    if invoices.is_empty() {
        return Err(ErrorResponse::invoice_not_found("Invoices not found"));
    }

    Ok((StatusCode::OK, Json(invoices)).into_response())
}

/// Get an invoice by id, joined with its owning company
#[utoipa::path(
    get,
    path = "/invoices/{id}",
    tag = "invoices",
    params(
        ("id" = i32, Path, description = "Invoice id")
    ),
    responses(
        (status = 200, description = "Invoice found", body = InvoiceDetailResponse),
        (status = 404, description = "Invoice not found", body = ErrorResponse)
    )
)]
pub async fn get_invoice(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, ErrorResponse> {
    info!("Get invoice request: id={}", id);

    let (invoice, company) = state.db.get_invoice_with_company(id).await?.ok_or_else(|| {
        ErrorResponse::invoice_not_found(format!("Invoice with the id: {id} is not found"))
    })?;

    Ok((
        StatusCode::OK,
        Json(InvoiceDetailResponse {
            invoice: InvoiceDetail::from_parts(invoice, company),
        }),
    )
        .into_response())
}

/// Create an invoice for a company
#[utoipa::path(
    post,
    path = "/invoices",
    tag = "invoices",
    request_body = InvoicePayload,
    responses(
        (status = 201, description = "Invoice created", body = InvoiceResponse),
        (status = 400, description = "Missing company code or amount", body = ErrorResponse),
        (status = 404, description = "Company code does not resolve", body = ErrorResponse)
    )
)]
pub async fn create_invoice(
    State(state): State<AppState>,
    Json(payload): Json<InvoicePayload>,
) -> Result<Response, ErrorResponse> {
    // amt may be 0 but not absent
    let (Some(comp_code), Some(amt)) = (present(payload.comp_code.as_ref()), payload.amt) else {
        return Err(ErrorResponse::validation_error(
            "Company code and amount are required",
        ));
    };

    info!("Create invoice request: comp_code={}, amt={}", comp_code, amt);

    let comp_id = state
        .db
        .company_id_for_code(comp_code)
        .await?
        .ok_or_else(|| {
            ErrorResponse::company_not_found(format!("Company with code {comp_code} not found"))
        })?;

    let invoice = state.db.insert_invoice(comp_id, amt).await?;

    Ok((StatusCode::CREATED, Json(InvoiceResponse { invoice })).into_response())
}

/// Update an invoice's amount
#[utoipa::path(
    patch,
    path = "/invoices/{id}",
    tag = "invoices",
    params(
        ("id" = i32, Path, description = "Invoice id")
    ),
    request_body = InvoiceAmountPayload,
    responses(
        (status = 200, description = "Invoice updated", body = InvoiceWithCodeResponse),
        (status = 400, description = "Missing amount", body = ErrorResponse),
        (status = 404, description = "Invoice not found", body = ErrorResponse)
    )
)]
pub async fn update_invoice(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<InvoiceAmountPayload>,
) -> Result<Response, ErrorResponse> {
    let Some(amt) = payload.amt else {
        return Err(ErrorResponse::validation_error("Please provide an amount"));
    };

    info!("Update invoice request: id={}, amt={}", id, amt);

    state.db.get_invoice(id).await?.ok_or_else(|| {
        ErrorResponse::invoice_not_found(format!("Invoice with the ID of {id} cannot be found"))
    })?;

    let invoice = state.db.update_invoice_amount(id, amt).await?;

    // Second lookup to attach the owning company's code; the invoice row
    // holds only the internal id.
    let comp_code = state
        .db
        .company_code_for_id(invoice.comp_id)
        .await?
        .ok_or_else(|| {
            ErrorResponse::internal_error(format!("Owning company missing for invoice {id}"))
        })?;

    Ok((
        StatusCode::OK,
        Json(InvoiceWithCodeResponse {
            invoice: InvoiceWithCode::from_invoice(invoice, comp_code),
        }),
    )
        .into_response())
}

/// Delete an invoice by id
#[utoipa::path(
    delete,
    path = "/invoices/{id}",
    tag = "invoices",
    params(
        ("id" = i32, Path, description = "Invoice id")
    ),
    responses(
        (status = 200, description = "Invoice deleted", body = MessageResponse),
        (status = 404, description = "Invoice not found", body = ErrorResponse)
    )
)]
pub async fn delete_invoice(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, ErrorResponse> {
    info!("Delete invoice request: id={}", id);

    state.db.get_invoice(id).await?.ok_or_else(|| {
        ErrorResponse::invoice_not_found(format!("Invoice with the id of {id}, cannot be found"))
    })?;

    state.db.delete_invoice(id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageResponse {
            message: "Invoice deleted".to_string(),
        }),
    )
        .into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_present_rejects_missing_and_empty() {
        assert_eq!(present(None), None);
        assert_eq!(present(Some(&String::new())), None);
        assert_eq!(present(Some(&"gogl".to_string())), Some("gogl"));
    }

    #[test]
    fn test_zero_amount_is_present() {
        let payload: InvoicePayload =
            serde_json::from_str(r#"{"comp_code":"gogl","amt":0}"#).unwrap();
        assert_eq!(payload.amt, Some(0.0));

        let payload: InvoicePayload = serde_json::from_str(r#"{"comp_code":"gogl"}"#).unwrap();
        assert_eq!(payload.amt, None);
    }
}
