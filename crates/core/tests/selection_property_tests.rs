//! Property tests for the selection controller.
//!
//! Arbitrary sequences of grid events must always leave exactly one scope
//! active, with the grid filter derived from that same scope, and only the
//! most recent refresh ticket current.

use burndown_core::funds::FundBalance;
use burndown_core::selection::{
    CellSelection, GridFilter, SelectionController, SelectionState, FUND_NAME_PROP,
    LEDGER_NAME_PROP,
};
use burndown_core::Scope;
use proptest::prelude::*;

// =============================================================================
// Generators
// =============================================================================

fn fund(i: usize) -> FundBalance {
    FundBalance {
        ledger_name: format!("Ledger {}", i % 3),
        fund_ledger_name: format!("Fund {}", i),
        fund_ledger_code: format!("F-{:02}", i),
        parent_fund_ledger_name: None,
        balance_available: 100.0,
        transaction_encumbrance_amount: 0.0,
        transaction_expenditure_amount: 0.0,
        fiscal_period_description: None,
        wishlist_balance_available: 100.0,
    }
}

#[derive(Debug, Clone)]
enum Event {
    Select(CellSelection),
    Reset,
    Apply,
}

fn arb_prop() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just(FUND_NAME_PROP),
        Just(LEDGER_NAME_PROP),
        Just("balanceAvailable"),
    ]
}

fn arb_event(rows: usize) -> impl Strategy<Value = Event> {
    prop_oneof![
        4 => (0..rows + 2, arb_prop()).prop_map(|(row, prop)| Event::Select(CellSelection::single(row, prop))),
        1 => (0..rows, 0..rows, arb_prop()).prop_map(|(start, end, prop)| {
            Event::Select(CellSelection {
                start_row: start,
                start_prop: prop.to_string(),
                end_row: end,
                end_prop: FUND_NAME_PROP.to_string(),
            })
        }),
        1 => Just(Event::Reset),
        2 => Just(Event::Apply),
    ]
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn scope_and_filter_always_agree(events in prop::collection::vec(arb_event(6), 0..40)) {
        let funds: Vec<FundBalance> = (0..6).map(fund).collect();
        let mut controller = SelectionController::new();

        for event in events {
            match event {
                Event::Select(cell) => {
                    let before = controller.state().clone();
                    let changed = controller.handle_cell_selection(&cell, &funds);
                    if !changed {
                        prop_assert_eq!(controller.state(), &before);
                    }
                }
                Event::Reset => controller.reset(),
                Event::Apply => {
                    let ticket = controller.begin_apply();
                    prop_assert!(controller.is_current(&ticket));
                    prop_assert_eq!(&ticket.scope, &controller.scope());
                    prop_assert_eq!(&ticket.grid_filter, &GridFilter::for_scope(&ticket.scope));
                }
            }

            let scope = controller.scope();
            prop_assert_eq!(controller.grid_filter(), GridFilter::for_scope(&scope));
            match controller.state() {
                SelectionState::Unselected => prop_assert_eq!(scope, Scope::All),
                SelectionState::FundSelected { fund_code, .. } => {
                    prop_assert_eq!(scope, Scope::Fund(fund_code.clone()))
                }
                SelectionState::LedgerSelected { ledger_name } => {
                    prop_assert_eq!(scope, Scope::Ledger(ledger_name.clone()))
                }
            }
        }
    }

    #[test]
    fn only_latest_ticket_is_current(applies in 1usize..20) {
        let mut controller = SelectionController::new();
        let tickets: Vec<_> = (0..applies).map(|_| controller.begin_apply()).collect();

        let (latest, older) = tickets.split_last().unwrap();
        prop_assert!(controller.is_current(latest));
        prop_assert!(older.iter().all(|t| !controller.is_current(t)));
    }
}
