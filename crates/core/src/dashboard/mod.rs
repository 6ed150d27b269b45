//! Dashboard module - client-side session tying selection, data and chart together.

mod clock;
mod session;
mod source;

#[cfg(test)]
mod session_tests;

pub use clock::{Clock, SystemClock};
pub use session::{DashboardSession, DashboardView, RefreshOutcome};
pub use source::BurndownSource;
