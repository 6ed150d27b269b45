use serde::{Deserialize, Serialize};

use crate::table::TableRow;

/// One row of the funds grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundBalance {
    pub ledger_name: String,
    pub fund_ledger_name: String,
    pub fund_ledger_code: String,
    pub parent_fund_ledger_name: Option<String>,
    pub balance_available: f64,
    pub transaction_encumbrance_amount: f64,
    pub transaction_expenditure_amount: f64,
    pub fiscal_period_description: Option<String>,
    /// Balance available less the proposed wishlist allocation for the fund.
    pub wishlist_balance_available: f64,
}

impl FundBalance {
    pub fn wishlist_allocated(&self) -> f64 {
        self.balance_available - self.wishlist_balance_available
    }
}

impl TableRow for FundBalance {
    fn columns() -> &'static [&'static str] {
        &[
            "ledgerName",
            "fundLedgerName",
            "fundLedgerCode",
            "parentFundLedgerName",
            "balanceAvailable",
            "transactionEncumbranceAmount",
            "transactionExpenditureAmount",
            "fiscalPeriodDescription",
            "wishlistBalanceAvailable",
        ]
    }
}
