//! Database models for purchase order lines and wishlist orders.
//!
//! Fund lists and invoice statuses arrive as JSON arrays built with
//! `json_group_array`.

use diesel::prelude::*;
use diesel::sql_types::{BigInt, Double, Nullable, Text};

use burndown_core::orders::{PurchaseOrderLine, WishlistOrder};

use crate::errors::StorageError;
use crate::utils::{parse_json_list, parse_optional_date};

#[derive(Debug, Clone, QueryableByName)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PurchaseOrderLineDB {
    #[diesel(sql_type = Text)]
    pub po_line_reference: String,
    #[diesel(sql_type = Nullable<Text>)]
    pub title: Option<String>,
    #[diesel(sql_type = Nullable<Text>)]
    pub renewal_date: Option<String>,
    #[diesel(sql_type = Nullable<Text>)]
    pub vendor_code: Option<String>,
    #[diesel(sql_type = Nullable<Text>)]
    pub po_line_creation_date: Option<String>,
    #[diesel(sql_type = Nullable<Text>)]
    pub fiscal_period_start_date: Option<String>,
    #[diesel(sql_type = Nullable<Text>)]
    pub enc_fund_names: Option<String>,
    #[diesel(sql_type = Nullable<Text>)]
    pub enc_fund_codes: Option<String>,
    #[diesel(sql_type = Nullable<Double>)]
    pub encumbrance_amount: Option<f64>,
    #[diesel(sql_type = Nullable<Text>)]
    pub exp_fund_names: Option<String>,
    #[diesel(sql_type = Nullable<Text>)]
    pub exp_fund_codes: Option<String>,
    #[diesel(sql_type = Nullable<Double>)]
    pub expenditure_amount: Option<f64>,
    #[diesel(sql_type = Nullable<Text>)]
    pub invoice_payment_statuses: Option<String>,
}

/// One status per invoice line; unlike fund lists these are neither sorted nor deduplicated.
fn parse_invoice_statuses(value: Option<&str>) -> Result<Vec<String>, StorageError> {
    match value {
        Some(raw) => serde_json::from_str(raw)
            .map_err(|e| StorageError::invalid_value("invoice_payment_statuses", e)),
        None => Ok(Vec::new()),
    }
}

impl TryFrom<PurchaseOrderLineDB> for PurchaseOrderLine {
    type Error = StorageError;

    fn try_from(db: PurchaseOrderLineDB) -> Result<Self, Self::Error> {
        Ok(PurchaseOrderLine {
            renewal_date: parse_optional_date("renewal_date", db.renewal_date.as_deref())?,
            po_line_creation_date: parse_optional_date(
                "po_line_creation_date",
                db.po_line_creation_date.as_deref(),
            )?,
            fiscal_period_start_date: parse_optional_date(
                "fiscal_period_start_date",
                db.fiscal_period_start_date.as_deref(),
            )?,
            enc_fund_names: parse_json_list("enc_fund_names", db.enc_fund_names.as_deref())?,
            enc_fund_codes: parse_json_list("enc_fund_codes", db.enc_fund_codes.as_deref())?,
            exp_fund_names: parse_json_list("exp_fund_names", db.exp_fund_names.as_deref())?,
            exp_fund_codes: parse_json_list("exp_fund_codes", db.exp_fund_codes.as_deref())?,
            invoice_payment_statuses: parse_invoice_statuses(
                db.invoice_payment_statuses.as_deref(),
            )?,
            po_line_reference: db.po_line_reference,
            title: db.title,
            vendor_code: db.vendor_code,
            encumbrance_amount: db.encumbrance_amount,
            expenditure_amount: db.expenditure_amount,
        })
    }
}

#[derive(Debug, Clone, QueryableByName)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct WishlistOrderDB {
    #[diesel(sql_type = BigInt)]
    pub order_id: i64,
    #[diesel(sql_type = Nullable<Text>)]
    pub resource_title: Option<String>,
    #[diesel(sql_type = Text)]
    pub fund_names: String,
    #[diesel(sql_type = Text)]
    pub fund_codes: String,
    #[diesel(sql_type = Double)]
    pub allocation_amount: f64,
    #[diesel(sql_type = Nullable<Text>)]
    pub negotiation_status: Option<String>,
    #[diesel(sql_type = Nullable<Text>)]
    pub license_review_status: Option<String>,
}

impl TryFrom<WishlistOrderDB> for WishlistOrder {
    type Error = StorageError;

    fn try_from(db: WishlistOrderDB) -> Result<Self, Self::Error> {
        Ok(WishlistOrder {
            order_id: db.order_id,
            resource_title: db.resource_title,
            fund_names: parse_json_list("fund_names", Some(&db.fund_names))?,
            fund_codes: parse_json_list("fund_codes", Some(&db.fund_codes))?,
            allocation_amount: db.allocation_amount,
            negotiation_status: db.negotiation_status,
            license_review_status: db.license_review_status,
        })
    }
}
