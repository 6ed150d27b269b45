use chrono::{DateTime, Local, NaiveDate};

/// Source of the current date, so the actual-spend cutoff is testable.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;

    /// Local calendar day of [`Clock::now`].
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}
