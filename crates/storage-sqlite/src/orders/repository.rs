use std::sync::Arc;

use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sql_query;
use diesel::sqlite::SqliteConnection;
use log::debug;

use burndown_core::constants::{ENCUMBRANCE_SUB_TYPES, EXPENDITURE_SUB_TYPES};
use burndown_core::orders::{OrderRepositoryTrait, PurchaseOrderLine, WishlistOrder};
use burndown_core::Result;

use super::model::{PurchaseOrderLineDB, WishlistOrderDB};
use crate::db::get_connection;
use crate::errors::StorageError;
use crate::utils::sql_string_list;

/// Invoice lines with this identifier are placeholders, not real invoices.
const PLACEHOLDER_INVOICE_LINE: &str = ":";

fn purchase_order_lines_sql() -> String {
    let grouped_transactions = |sub_types: &[&str]| {
        format!(
            "SELECT po_line_reference,
                    json_group_array(DISTINCT fund_ledger_name) AS fund_names,
                    json_group_array(DISTINCT fund_ledger_code) AS fund_codes,
                    CAST(SUM(transaction_amount) AS REAL) AS amount
             FROM transactions_table
             WHERE transaction_item_sub_type IN ({})
               AND po_line_reference IS NOT NULL
             GROUP BY po_line_reference",
            sql_string_list(sub_types)
        )
    };

    format!(
        "
        SELECT
            p.po_line_reference,
            p.po_line_title AS title,
            p.renewal_date,
            p.vendor_code,
            p.po_line_creation_date,
            p.fiscal_period_start_date,
            enc.fund_names AS enc_fund_names,
            enc.fund_codes AS enc_fund_codes,
            enc.amount AS encumbrance_amount,
            spent.fund_names AS exp_fund_names,
            spent.fund_codes AS exp_fund_codes,
            spent.amount AS expenditure_amount,
            inv.payment_statuses AS invoice_payment_statuses
        FROM pol_table p
        LEFT JOIN ({encumbrances}) enc ON enc.po_line_reference = p.po_line_reference
        LEFT JOIN ({expenditures}) spent ON spent.po_line_reference = p.po_line_reference
        LEFT JOIN (
            SELECT po_line_reference,
                   json_group_array(COALESCE(invoice_payment_status, '')) AS payment_statuses
            FROM invoice_line_table
            WHERE invoice_line_unique_identifier <> '{placeholder}'
            GROUP BY po_line_reference
        ) inv ON inv.po_line_reference = p.po_line_reference
        ORDER BY p.po_line_reference",
        encumbrances = grouped_transactions(ENCUMBRANCE_SUB_TYPES),
        expenditures = grouped_transactions(EXPENDITURE_SUB_TYPES),
        placeholder = PLACEHOLDER_INVOICE_LINE,
    )
}

const WISHLIST_ORDERS_QUERY: &str = "
    SELECT
        order_id,
        resource_title,
        json_group_array(DISTINCT fund_ledger_name) AS fund_names,
        json_group_array(DISTINCT fund_ledger_code) AS fund_codes,
        CAST(SUM(allocation_amount_calculated) AS REAL) AS allocation_amount,
        negotiation_status,
        license_review_status
    FROM wishlist_orders_table
    GROUP BY order_id, resource_title, negotiation_status, license_review_status
    ORDER BY order_id";

pub struct OrderRepository {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
}

impl OrderRepository {
    pub fn new(pool: Arc<Pool<ConnectionManager<SqliteConnection>>>) -> Self {
        OrderRepository { pool }
    }
}

impl OrderRepositoryTrait for OrderRepository {
    fn list_purchase_order_lines(&self) -> Result<Vec<PurchaseOrderLine>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = sql_query(purchase_order_lines_sql())
            .load::<PurchaseOrderLineDB>(&mut conn)
            .map_err(StorageError::from)?;
        debug!("Loaded {} purchase order lines", rows.len());
        rows.into_iter()
            .map(|row| PurchaseOrderLine::try_from(row).map_err(Into::into))
            .collect()
    }

    fn list_wishlist_orders(&self) -> Result<Vec<WishlistOrder>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = sql_query(WISHLIST_ORDERS_QUERY)
            .load::<WishlistOrderDB>(&mut conn)
            .map_err(StorageError::from)?;
        rows.into_iter()
            .map(|row| WishlistOrder::try_from(row).map_err(Into::into))
            .collect()
    }
}
