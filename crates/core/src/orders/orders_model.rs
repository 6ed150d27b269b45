//! Order domain models and the rules that turn raw order data into grid rows.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::{FUND_LIST_SEPARATOR, INVOICE_PAID_STATUS};
use crate::table::TableRow;
use crate::utils::format_display_date;

/// How an order came about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderType {
    Renewal,
    #[serde(rename = "New Order")]
    NewOrder,
    Wishlist,
}

impl OrderType {
    pub fn label(&self) -> &'static str {
        match self {
            OrderType::Renewal => "Renewal",
            OrderType::NewOrder => "New Order",
            OrderType::Wishlist => "Wishlist",
        }
    }
}

/// Bootstrap contextual colour used to render a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayTone {
    Success,
    Primary,
    Danger,
    Warning,
    Info,
}

/// Invoicing or negotiation state of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Paid,
    Received,
    #[serde(rename = "Not Yet Invoiced")]
    NotYetInvoiced,
    #[serde(rename = "Multiple")]
    MultipleInvoices,
    #[serde(rename = "In Negotiation")]
    InNegotiation,
    #[serde(rename = "In License Review")]
    InLicenseReview,
}

impl OrderStatus {
    /// Status of a purchase order line from the payment status of its invoice lines.
    pub fn from_invoices<S: AsRef<str>>(payment_statuses: &[S]) -> Self {
        match payment_statuses {
            [] => OrderStatus::NotYetInvoiced,
            [single] if single.as_ref() == INVOICE_PAID_STATUS => OrderStatus::Paid,
            [_] => OrderStatus::Received,
            _ => OrderStatus::MultipleInvoices,
        }
    }

    /// Status of a wishlist order: in license review once a review status is recorded.
    pub fn from_wishlist(license_review_status: Option<&str>) -> Self {
        match license_review_status.map(str::trim) {
            Some(s) if !s.is_empty() => OrderStatus::InLicenseReview,
            _ => OrderStatus::InNegotiation,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Paid => "Paid",
            OrderStatus::Received => "Received",
            OrderStatus::NotYetInvoiced => "Not Yet Invoiced",
            OrderStatus::MultipleInvoices => "Multiple",
            OrderStatus::InNegotiation => "In Negotiation",
            OrderStatus::InLicenseReview => "In License Review",
        }
    }

    pub fn tone(&self) -> DisplayTone {
        match self {
            OrderStatus::NotYetInvoiced => DisplayTone::Primary,
            OrderStatus::InNegotiation => DisplayTone::Warning,
            OrderStatus::InLicenseReview => DisplayTone::Info,
            OrderStatus::MultipleInvoices => DisplayTone::Danger,
            OrderStatus::Paid | OrderStatus::Received => DisplayTone::Success,
        }
    }
}

/// A purchase order line with its transactions and invoice lines already grouped.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PurchaseOrderLine {
    pub po_line_reference: String,
    pub title: Option<String>,
    pub renewal_date: Option<NaiveDate>,
    pub vendor_code: Option<String>,
    pub po_line_creation_date: Option<NaiveDate>,
    pub fiscal_period_start_date: Option<NaiveDate>,
    pub enc_fund_names: Vec<String>,
    pub enc_fund_codes: Vec<String>,
    pub encumbrance_amount: Option<f64>,
    pub exp_fund_names: Vec<String>,
    pub exp_fund_codes: Vec<String>,
    pub expenditure_amount: Option<f64>,
    /// One entry per invoice line.
    pub invoice_payment_statuses: Vec<String>,
}

impl PurchaseOrderLine {
    /// Renewals are lines with a renewal date that predate the current fiscal period.
    pub fn order_type(&self) -> OrderType {
        match (
            self.renewal_date,
            self.po_line_creation_date,
            self.fiscal_period_start_date,
        ) {
            (Some(_), Some(created), Some(period_start)) if created < period_start => {
                OrderType::Renewal
            }
            _ => OrderType::NewOrder,
        }
    }
}

/// A proposed order from the wishlist, with its fund allocations grouped.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WishlistOrder {
    pub order_id: i64,
    pub resource_title: Option<String>,
    pub fund_names: Vec<String>,
    pub fund_codes: Vec<String>,
    pub allocation_amount: f64,
    pub negotiation_status: Option<String>,
    pub license_review_status: Option<String>,
}

/// One row of the orders grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRow {
    pub order_type: OrderType,
    pub po_line_reference: String,
    pub title: Option<String>,
    /// `MM-DD-YYYY`.
    pub renewal_date: Option<String>,
    pub vendor_code: Option<String>,
    pub enc_fund_names: Option<String>,
    pub enc_fund_codes: Option<String>,
    pub encumbrance_amount: Option<f64>,
    pub exp_fund_names: Option<String>,
    pub exp_fund_codes: Option<String>,
    pub expenditure_amount: Option<f64>,
    pub order_status: OrderStatus,
    pub status_tone: DisplayTone,
    /// Whether the line was paid from different funds than it was encumbered on.
    /// Unknown until both sides have at least one fund.
    pub funds_mismatch: Option<bool>,
}

impl OrderRow {
    pub fn from_purchase_order_line(line: PurchaseOrderLine) -> Self {
        let order_type = line.order_type();
        let order_status = OrderStatus::from_invoices(&line.invoice_payment_statuses);
        let funds_mismatch = funds_mismatch(&line.enc_fund_names, &line.exp_fund_names);
        OrderRow {
            order_type,
            po_line_reference: line.po_line_reference,
            title: line.title,
            renewal_date: line.renewal_date.map(format_display_date),
            vendor_code: line.vendor_code,
            enc_fund_names: join_funds(&line.enc_fund_names),
            enc_fund_codes: join_funds(&line.enc_fund_codes),
            encumbrance_amount: line.encumbrance_amount,
            exp_fund_names: join_funds(&line.exp_fund_names),
            exp_fund_codes: join_funds(&line.exp_fund_codes),
            expenditure_amount: line.expenditure_amount,
            order_status,
            status_tone: order_status.tone(),
            funds_mismatch,
        }
    }

    pub fn from_wishlist_order(order: WishlistOrder) -> Self {
        let order_status = OrderStatus::from_wishlist(order.license_review_status.as_deref());
        OrderRow {
            order_type: OrderType::Wishlist,
            po_line_reference: format!("{}-wishlist", order.order_id),
            title: order.resource_title,
            renewal_date: None,
            vendor_code: None,
            enc_fund_names: join_funds(&order.fund_names),
            enc_fund_codes: join_funds(&order.fund_codes),
            encumbrance_amount: Some(order.allocation_amount),
            exp_fund_names: None,
            exp_fund_codes: None,
            expenditure_amount: None,
            order_status,
            status_tone: order_status.tone(),
            funds_mismatch: None,
        }
    }
}

impl TableRow for OrderRow {
    fn columns() -> &'static [&'static str] {
        &[
            "orderType",
            "poLineReference",
            "title",
            "renewalDate",
            "vendorCode",
            "encFundNames",
            "encFundCodes",
            "encumbranceAmount",
            "expFundNames",
            "expFundCodes",
            "expenditureAmount",
            "orderStatus",
            "statusTone",
            "fundsMismatch",
        ]
    }
}

fn join_funds(values: &[String]) -> Option<String> {
    if values.is_empty() {
        None
    } else {
        Some(values.join(FUND_LIST_SEPARATOR))
    }
}

fn funds_mismatch(encumbered: &[String], expended: &[String]) -> Option<bool> {
    if encumbered.is_empty() || expended.is_empty() {
        return None;
    }
    let enc: BTreeSet<&str> = encumbered.iter().map(String::as_str).collect();
    let exp: BTreeSet<&str> = expended.iter().map(String::as_str).collect();
    Some(enc != exp)
}
