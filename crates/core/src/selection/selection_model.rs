use serde::{Deserialize, Serialize};

use crate::orders::OrderRow;
use crate::scope::Scope;

/// Grid column holding fund names.
pub const FUND_NAME_PROP: &str = "fundLedgerName";
/// Grid column holding ledger names.
pub const LEDGER_NAME_PROP: &str = "ledgerName";

/// What the user has picked in the funds grid.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum SelectionState {
    #[default]
    Unselected,
    /// The ledger name is derived from the fund row and only shown, never queried.
    #[serde(rename_all = "camelCase")]
    FundSelected {
        fund_code: String,
        fund_name: String,
        ledger_name: String,
    },
    #[serde(rename_all = "camelCase")]
    LedgerSelected { ledger_name: String },
}

impl SelectionState {
    pub fn scope(&self) -> Scope {
        match self {
            SelectionState::Unselected => Scope::All,
            SelectionState::FundSelected { fund_code, .. } => Scope::Fund(fund_code.clone()),
            SelectionState::LedgerSelected { ledger_name } => Scope::Ledger(ledger_name.clone()),
        }
    }
}

/// A selection event from the grid: the corner cells of the selected range,
/// columns given by their row property name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellSelection {
    pub start_row: usize,
    pub start_prop: String,
    pub end_row: usize,
    pub end_prop: String,
}

impl CellSelection {
    pub fn single(row: usize, prop: &str) -> Self {
        CellSelection {
            start_row: row,
            start_prop: prop.to_string(),
            end_row: row,
            end_prop: prop.to_string(),
        }
    }

    pub fn is_single_cell(&self) -> bool {
        self.start_row == self.end_row && self.start_prop == self.end_prop
    }
}

/// Filter on the orders grid, matched case-insensitively against the
/// encumbered fund codes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum GridFilter {
    #[default]
    None,
    FundCodeContains(String),
}

impl GridFilter {
    /// Fund scopes filter on the fund code and ledger scopes on the ledger name.
    pub fn for_scope(scope: &Scope) -> Self {
        match scope.parameter() {
            Some(value) => GridFilter::FundCodeContains(value.to_string()),
            None => GridFilter::None,
        }
    }

    pub fn matches(&self, row: &OrderRow) -> bool {
        match self {
            GridFilter::None => true,
            GridFilter::FundCodeContains(needle) => {
                let needle = needle.to_lowercase();
                row.enc_fund_codes
                    .as_deref()
                    .is_some_and(|codes| codes.to_lowercase().contains(&needle))
            }
        }
    }

    pub fn apply<'a>(&self, rows: &'a [OrderRow]) -> Vec<&'a OrderRow> {
        rows.iter().filter(|r| self.matches(r)).collect()
    }
}
