//! Database model for the funds grid.

use diesel::prelude::*;
use diesel::sql_types::{Double, Nullable, Text};

use burndown_core::funds::FundBalance;

#[derive(Debug, Clone, QueryableByName)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct FundBalanceDB {
    #[diesel(sql_type = Text)]
    pub ledger_name: String,
    #[diesel(sql_type = Text)]
    pub fund_ledger_name: String,
    #[diesel(sql_type = Text)]
    pub fund_ledger_code: String,
    #[diesel(sql_type = Nullable<Text>)]
    pub parent_fund_ledger_name: Option<String>,
    #[diesel(sql_type = Double)]
    pub balance_available: f64,
    #[diesel(sql_type = Double)]
    pub transaction_encumbrance_amount: f64,
    #[diesel(sql_type = Double)]
    pub transaction_expenditure_amount: f64,
    #[diesel(sql_type = Nullable<Text>)]
    pub fiscal_period_description: Option<String>,
    #[diesel(sql_type = Double)]
    pub wishlist_balance_available: f64,
}

impl From<FundBalanceDB> for FundBalance {
    fn from(db: FundBalanceDB) -> Self {
        FundBalance {
            ledger_name: db.ledger_name,
            fund_ledger_name: db.fund_ledger_name,
            fund_ledger_code: db.fund_ledger_code,
            parent_fund_ledger_name: db.parent_fund_ledger_name,
            balance_available: db.balance_available,
            transaction_encumbrance_amount: db.transaction_encumbrance_amount,
            transaction_expenditure_amount: db.transaction_expenditure_amount,
            fiscal_period_description: db.fiscal_period_description,
            wishlist_balance_available: db.wishlist_balance_available,
        }
    }
}
