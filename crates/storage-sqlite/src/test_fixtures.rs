//! Temp databases and row builders shared by the repository tests.

use std::sync::Arc;

use diesel::prelude::*;
use tempfile::{tempdir, TempDir};

use crate::db::{create_pool, get_connection, run_migrations, DbPool};
use crate::schema::{
    airtable_funds, dates, funds_table, invoice_line_table, pol_table, transactions_table,
    wishlist_orders_table,
};

pub const LOADED_AT: &str = "2024-09-03 06:30:00";

/// Returns the pool and the temp dir, which must outlive it.
pub fn create_test_pool() -> (Arc<DbPool>, TempDir) {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let db_path = temp_dir.path().join("test.db");
    let pool = create_pool(&db_path.to_string_lossy()).expect("Failed to create pool");
    run_migrations(&pool).expect("Failed to run migrations");
    (pool, temp_dir)
}

pub fn insert_days(pool: &DbPool, days: &[&str]) {
    let mut conn = get_connection(pool).expect("Failed to get connection");
    for day in days {
        diesel::insert_into(dates::table)
            .values(dates::day.eq(*day))
            .execute(&mut conn)
            .expect("Failed to insert day");
    }
}

pub fn insert_fund(pool: &DbPool, code: &str, name: &str, ledger: &str, allocation: f64) {
    let mut conn = get_connection(pool).expect("Failed to get connection");
    diesel::insert_into(funds_table::table)
        .values((
            funds_table::fund_ledger_code.eq(code),
            funds_table::fund_ledger_name.eq(name),
            funds_table::ledger_name.eq(ledger),
            funds_table::fiscal_period_description.eq(Some("Fiscal Year 2024-2025")),
            funds_table::transaction_allocation_amount.eq(allocation),
            funds_table::balance_available.eq(allocation),
            funds_table::timestamp.eq(LOADED_AT),
        ))
        .execute(&mut conn)
        .expect("Failed to insert fund");
}

pub fn insert_wishlist_allocation(pool: &DbPool, code: &str, total: f64) {
    let mut conn = get_connection(pool).expect("Failed to get connection");
    diesel::insert_into(airtable_funds::table)
        .values((
            airtable_funds::fund_ledger_code.eq(code),
            airtable_funds::total_allocated.eq(Some(total)),
            airtable_funds::timestamp.eq("2024-09-02 22:00:00"),
        ))
        .execute(&mut conn)
        .expect("Failed to insert wishlist allocation");
}

pub fn insert_transaction(
    pool: &DbPool,
    pol: Option<&str>,
    fund: (&str, &str),
    sub_type: &str,
    amount: f64,
    date: &str,
) {
    let mut conn = get_connection(pool).expect("Failed to get connection");
    diesel::insert_into(transactions_table::table)
        .values((
            transactions_table::po_line_reference.eq(pol),
            transactions_table::fund_ledger_code.eq(fund.0),
            transactions_table::fund_ledger_name.eq(fund.1),
            transactions_table::transaction_item_sub_type.eq(sub_type),
            transactions_table::transaction_amount.eq(amount),
            transactions_table::transaction_date.eq(date),
        ))
        .execute(&mut conn)
        .expect("Failed to insert transaction");
}

pub fn insert_pol(
    pool: &DbPool,
    reference: &str,
    renewal_date: Option<&str>,
    created: &str,
    period_start: &str,
) {
    let mut conn = get_connection(pool).expect("Failed to get connection");
    diesel::insert_into(pol_table::table)
        .values((
            pol_table::po_line_reference.eq(reference),
            pol_table::po_line_title.eq(Some(format!("Title of {}", reference))),
            pol_table::renewal_date.eq(renewal_date),
            pol_table::vendor_code.eq(Some("EBSCO")),
            pol_table::po_line_creation_date.eq(Some(created)),
            pol_table::fiscal_period_start_date.eq(Some(period_start)),
            pol_table::timestamp.eq("2024-09-03 07:00:00"),
        ))
        .execute(&mut conn)
        .expect("Failed to insert POL");
}

pub fn insert_invoice_line(pool: &DbPool, id: &str, pol: &str, payment_status: &str) {
    let mut conn = get_connection(pool).expect("Failed to get connection");
    diesel::insert_into(invoice_line_table::table)
        .values((
            invoice_line_table::invoice_line_unique_identifier.eq(id),
            invoice_line_table::po_line_reference.eq(pol),
            invoice_line_table::invoice_approval_status.eq(Some("APPROVED")),
            invoice_line_table::invoice_payment_status.eq(Some(payment_status)),
        ))
        .execute(&mut conn)
        .expect("Failed to insert invoice line");
}

pub fn insert_wishlist_order(
    pool: &DbPool,
    order_id: i64,
    fund: (&str, &str),
    amount: f64,
    license_review_status: Option<&str>,
) {
    let mut conn = get_connection(pool).expect("Failed to get connection");
    diesel::insert_into(wishlist_orders_table::table)
        .values((
            wishlist_orders_table::order_id.eq(order_id),
            wishlist_orders_table::resource_title.eq(Some("Digital Archive")),
            wishlist_orders_table::fund_ledger_code.eq(fund.0),
            wishlist_orders_table::fund_ledger_name.eq(fund.1),
            wishlist_orders_table::allocation_amount_calculated.eq(amount),
            wishlist_orders_table::negotiation_status.eq(Some("Quote requested")),
            wishlist_orders_table::license_review_status.eq(license_review_status),
        ))
        .execute(&mut conn)
        .expect("Failed to insert wishlist order");
}
