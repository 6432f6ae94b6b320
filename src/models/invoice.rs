use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::company::CompanySummary;

/// An invoice billed to a company
///
/// `paid` and `paid_date` are stored and returned but no exposed operation
/// mutates them.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, FromRow)]
pub struct Invoice {
    pub id: i32,
    pub comp_id: i32,
    pub amt: f64,
    pub paid: bool,
    pub add_date: NaiveDateTime,
    pub paid_date: Option<NaiveDateTime>,
}

/// Invoice joined with its owning company, as returned by the single-invoice
/// lookup.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct InvoiceDetail {
    pub id: i32,
    pub amt: f64,
    pub paid: bool,
    pub add_date: NaiveDateTime,
    pub paid_date: Option<NaiveDateTime>,
    pub company: CompanySummary,
}

impl InvoiceDetail {
    pub fn from_parts(invoice: Invoice, company: CompanySummary) -> Self {
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

/// Invoice with the owning company's code appended, as returned by the
/// amount update.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct InvoiceWithCode {
    pub id: i32,
    pub comp_id: i32,
    pub amt: f64,
    pub paid: bool,
    pub add_date: NaiveDateTime,
    pub paid_date: Option<NaiveDateTime>,
    pub comp_code: String,
}

impl InvoiceWithCode {
    pub fn from_invoice(invoice: Invoice, comp_code: String) -> Self {
        Self {
            id: invoice.id,
            comp_id: invoice.comp_id,
            amt: invoice.amt,
            paid: invoice.paid,
            add_date: invoice.add_date,
            paid_date: invoice.paid_date,
            comp_code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_invoice() -> Invoice {
        Invoice {
            id: 1,
            comp_id: 7,
            amt: 100.0,
            paid: false,
            add_date: NaiveDate::from_ymd_opt(2024, 5, 1)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
            paid_date: None,
        }
    }

    #[test]
    fn test_invoice_detail_nests_company() {
        let detail = InvoiceDetail::from_parts(
            sample_invoice(),
            CompanySummary {
                code: "gogl".to_string(),
                name: "Google".to_string(),
                description: None,
            },
        );

        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["company"]["code"], "gogl");
        assert!(json.get("comp_id").is_none());
    }

    #[test]
    fn test_invoice_with_code_appends_comp_code() {
        let updated = InvoiceWithCode::from_invoice(sample_invoice(), "gogl".to_string());

        let json = serde_json::to_value(&updated).unwrap();
        assert_eq!(json["comp_code"], "gogl");
        assert_eq!(json["comp_id"], 7);
        assert_eq!(json["amt"], 100.0);
    }
}
