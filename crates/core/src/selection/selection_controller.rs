//! Reconciles grid selections into one scope shared by the chart and the orders grid.

use log::debug;

use crate::funds::FundBalance;
use crate::scope::Scope;
use crate::selection::selection_model::{
    CellSelection, GridFilter, SelectionState, FUND_NAME_PROP, LEDGER_NAME_PROP,
};

/// Scope and grid filter captured when a refresh starts.
///
/// Only the ticket of the latest refresh is current; results carrying an
/// older ticket are discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshTicket {
    pub generation: u64,
    pub scope: Scope,
    pub grid_filter: GridFilter,
}

#[derive(Debug, Default)]
pub struct SelectionController {
    state: SelectionState,
    generation: u64,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// Updates the selection from a grid event.
    ///
    /// Returns false when the event is ignored: ranges of more than one cell,
    /// columns other than fund name or ledger name, and rows out of bounds.
    pub fn handle_cell_selection(&mut self, cell: &CellSelection, rows: &[FundBalance]) -> bool {
        if !cell.is_single_cell() {
            return false;
        }
        let Some(row) = rows.get(cell.start_row) else {
            return false;
        };

        let next = match cell.start_prop.as_str() {
            FUND_NAME_PROP => SelectionState::FundSelected {
                fund_code: row.fund_ledger_code.clone(),
                fund_name: row.fund_ledger_name.clone(),
                ledger_name: row.ledger_name.clone(),
            },
            LEDGER_NAME_PROP => SelectionState::LedgerSelected {
                ledger_name: row.ledger_name.clone(),
            },
            _ => return false,
        };
        debug!("Selection changed to {:?}", next);
        self.state = next;
        true
    }

    pub fn reset(&mut self) {
        self.state = SelectionState::Unselected;
    }

    pub fn scope(&self) -> Scope {
        self.state.scope()
    }

    pub fn grid_filter(&self) -> GridFilter {
        GridFilter::for_scope(&self.scope())
    }

    /// Starts applying the current selection, superseding any refresh in flight.
    pub fn begin_apply(&mut self) -> RefreshTicket {
        self.generation += 1;
        let scope = self.scope();
        RefreshTicket {
            generation: self.generation,
            grid_filter: GridFilter::for_scope(&scope),
            scope,
        }
    }

    pub fn is_current(&self, ticket: &RefreshTicket) -> bool {
        ticket.generation == self.generation
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}
