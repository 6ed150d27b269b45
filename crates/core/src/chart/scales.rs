//! Domain to pixel mappings for the two chart axes.

use chrono::{Datelike, NaiveDate};

use crate::burndown::DateRange;

/// Maps calendar days linearly onto `[0, width]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    domain: DateRange,
    range: (f64, f64),
}

impl TimeScale {
    pub fn new(domain: DateRange, range: (f64, f64)) -> Self {
        TimeScale { domain, range }
    }

    pub fn domain(&self) -> DateRange {
        self.domain
    }

    pub fn map(&self, day: NaiveDate) -> f64 {
        let span = self.domain.span_days();
        if span == 0 {
            return (self.range.0 + self.range.1) / 2.0;
        }
        let t = (day - self.domain.start).num_days() as f64 / span as f64;
        self.range.0 + t * (self.range.1 - self.range.0)
    }

    /// First day of every month inside the domain.
    pub fn month_ticks(&self) -> Vec<NaiveDate> {
        let start = self.domain.start;
        let mut month = if start.day() == 1 {
            Some(start)
        } else {
            first_of_next_month(start)
        };
        let mut ticks = Vec::new();
        while let Some(day) = month.filter(|d| *d <= self.domain.end) {
            ticks.push(day);
            month = first_of_next_month(day);
        }
        ticks
    }
}

fn first_of_next_month(day: NaiveDate) -> Option<NaiveDate> {
    let (year, month) = if day.month() == 12 {
        (day.year() + 1, 1)
    } else {
        (day.year(), day.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
}

/// Maps amounts linearly from `domain` onto `range`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        LinearScale { domain, range }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn set_domain(&mut self, domain: (f64, f64)) {
        self.domain = domain;
    }

    /// A degenerate domain maps every value to the middle of the range.
    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d1 == d0 || !(d1 - d0).is_finite() {
            return (r0 + r1) / 2.0;
        }
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }

    /// Round tick values covering the domain, roughly `count` of them.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (lo, hi) = if self.domain.0 <= self.domain.1 {
            self.domain
        } else {
            (self.domain.1, self.domain.0)
        };
        if count == 0 || !lo.is_finite() || !hi.is_finite() {
            return Vec::new();
        }
        if lo == hi {
            return vec![lo];
        }

        let step = tick_step(lo, hi, count);
        let first = (lo / step).ceil() as i64;
        let last = (hi / step).floor() as i64;
        (first..=last).map(|i| i as f64 * step).collect()
    }
}

/// 1, 2 or 5 times a power of ten.
fn tick_step(lo: f64, hi: f64, count: usize) -> f64 {
    let raw = (hi - lo) / count as f64;
    let power = 10f64.powf(raw.log10().floor());
    let error = raw / power;
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    power * factor
}
