use utoipa::OpenApi;

use crate::api::handlers::{
    CompanyDetailResponse, CompanyListResponse, CompanyPayload, CompanyResponse,
    CompanyUpdatePayload, InvoiceAmountPayload, InvoiceDetailResponse, InvoicePayload,
    InvoiceResponse, InvoiceWithCodeResponse, MessageResponse,
};
use crate::errors::{ErrorDetail, ErrorResponse};
use crate::models::company::{Company, CompanyDetail, CompanySummary};
use crate::models::invoice::{Invoice, InvoiceDetail, InvoiceWithCode};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Billtrack",
        version = "0.1.0",
        description = "A small REST service tracking companies and the invoices billed against them.",
    ),
    paths(
        crate::api::handlers::health,
        crate::api::handlers::list_companies,
        crate::api::handlers::get_company,
        crate::api::handlers::create_company,
        crate::api::handlers::update_company,
        crate::api::handlers::delete_company,
        crate::api::handlers::list_invoices,
        crate::api::handlers::get_invoice,
        crate::api::handlers::create_invoice,
        crate::api::handlers::update_invoice,
        crate::api::handlers::delete_invoice,
    ),
    components(
        schemas(
            Company,
            CompanyDetail,
            CompanySummary,
            Invoice,
            InvoiceDetail,
            InvoiceWithCode,
            CompanyPayload,
            CompanyUpdatePayload,
            InvoicePayload,
            InvoiceAmountPayload,
            CompanyListResponse,
            CompanyResponse,
            CompanyDetailResponse,
            InvoiceResponse,
            InvoiceDetailResponse,
            InvoiceWithCodeResponse,
            MessageResponse,
            ErrorResponse,
            ErrorDetail,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "companies", description = "Company CRUD endpoints"),
        (name = "invoices", description = "Invoice CRUD endpoints"),
    )
)]
pub struct ApiDoc;
