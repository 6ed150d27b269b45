#![allow(dead_code)]

use std::{sync::Arc, time::Duration};

use burndown_server::{build_state, config::{Config, LogFormat}, AppState};
use burndown_storage_sqlite::get_connection;
use diesel::connection::SimpleConnection;
use tempfile::TempDir;

/// Three days of activity on two funds in two ledgers.
pub const SEED_SQL: &str = "
    INSERT INTO dates (day) VALUES ('2024-07-01'), ('2024-07-02'), ('2024-07-03');

    INSERT INTO funds_table (fund_ledger_code, fund_ledger_name, ledger_name,
        parent_fund_ledger_name, fiscal_period_description, transaction_allocation_amount,
        transaction_encumbrance_amount, transaction_expenditure_amount, balance_available, timestamp)
    VALUES
        ('HIS-01', 'History', 'Humanities', NULL, 'Fiscal Year 2024-2025', 1000, 80, 150, 770, '2024-09-03 06:30:00'),
        ('CHM-02', 'Chemistry', 'Sciences', NULL, 'Fiscal Year 2024-2025', 2000, 0, 40, 1960, '2024-09-03 06:30:00');

    INSERT INTO airtable_funds (fund_ledger_code, total_allocated, timestamp)
    VALUES ('HIS-01', 20, '2024-09-02 22:00:00');

    INSERT INTO pol_table (po_line_reference, po_line_title, renewal_date, vendor_code,
        po_line_creation_date, fiscal_period_start_date, timestamp)
    VALUES
        ('POL-1', 'Journal of History', '2025-07-01', 'EBSCO', '2022-05-01', '2024-07-01', '2024-09-03 07:00:00'),
        ('POL-2', 'Organic Chemistry', NULL, 'WILEY', '2024-07-02', '2024-07-01', '2024-09-03 07:00:00');

    INSERT INTO transactions_table (po_line_reference, fund_ledger_code, fund_ledger_name,
        transaction_item_sub_type, transaction_amount, transaction_date)
    VALUES
        ('POL-1', 'HIS-01', 'History', 'EXPENDITURE', 100, '2024-07-01'),
        ('POL-1', 'HIS-01', 'History', 'EXPENDITURE', 50, '2024-07-02'),
        ('POL-1', 'HIS-01', 'History', 'ENCUMBRANCE', 50, '2024-07-02'),
        ('POL-1', 'HIS-01', 'History', 'ENCUMBRANCE', 30, '2024-07-03'),
        ('POL-2', 'CHM-02', 'Chemistry', 'EXPENDITURE', 40, '2024-07-03');

    INSERT INTO invoice_line_table (invoice_line_unique_identifier, po_line_reference,
        invoice_approval_status, invoice_payment_status)
    VALUES ('INV-1:1', 'POL-1', 'APPROVED', 'PAID');

    INSERT INTO wishlist_orders_table (order_id, resource_title, fund_ledger_code,
        fund_ledger_name, allocation_amount_calculated, negotiation_status, license_review_status)
    VALUES (42, 'Digital Archive', 'HIS-01', 'History', 20, 'Quote requested', NULL);
";

pub fn test_config(db_dir: &TempDir) -> Config {
    Config {
        listen_addr: "127.0.0.1:0".parse().unwrap(),
        db_path: db_dir.path().join("test.db").to_string_lossy().to_string(),
        cors_allow: vec!["*".to_string()],
        request_timeout: Duration::from_secs(30),
        static_dir: db_dir.path().join("public").to_string_lossy().to_string(),
        log_format: LogFormat::Text,
    }
}

pub async fn seeded_state(config: &Config) -> Arc<AppState> {
    let state = build_state(config).await.unwrap();
    let mut conn = get_connection(&state.pool).unwrap();
    conn.batch_execute(SEED_SQL).unwrap();
    state
}
