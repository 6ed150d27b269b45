//! Spend projection curves.
//!
//! Each curve is the allocation left after subtracting a growing share of
//! commitments: expenditure only (`actual`), plus encumbrances (`projected`),
//! plus proposed wishlist allocations (`proposed`).

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::burndown::{DailyAggregate, Series};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurveKind {
    Actual,
    Projected,
    Proposed,
}

impl CurveKind {
    /// Drawing and legend order.
    pub const ALL: [CurveKind; 3] = [CurveKind::Actual, CurveKind::Projected, CurveKind::Proposed];

    pub fn name(&self) -> &'static str {
        match self {
            CurveKind::Actual => "actual",
            CurveKind::Projected => "projected",
            CurveKind::Proposed => "proposed",
        }
    }

    /// Remaining balance of one record under this curve.
    pub fn value(&self, d: &DailyAggregate) -> f64 {
        match self {
            CurveKind::Actual => d.total_allocation - d.cumulative_expenditure,
            CurveKind::Projected => {
                d.total_allocation - (d.cumulative_expenditure + d.cumulative_encumbrance)
            }
            CurveKind::Proposed => {
                d.total_allocation
                    - (d.cumulative_expenditure + d.cumulative_encumbrance + d.wishlist_proposed)
            }
        }
    }

    /// Whether a record belongs on this curve as of `today`.
    ///
    /// Actual spend cannot exist for future days, so the actual curve stops
    /// at today; the projections cover the whole series.
    pub fn includes(&self, day: NaiveDate, today: NaiveDate) -> bool {
        match self {
            CurveKind::Actual => day <= today,
            CurveKind::Projected | CurveKind::Proposed => true,
        }
    }
}

impl fmt::Display for CurveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionPoint {
    pub day: NaiveDate,
    pub value: f64,
}

/// The three curves of one series, each in day order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectedCurves {
    pub actual: Vec<ProjectionPoint>,
    pub projected: Vec<ProjectionPoint>,
    pub proposed: Vec<ProjectionPoint>,
}

impl ProjectedCurves {
    pub fn get(&self, kind: CurveKind) -> &[ProjectionPoint] {
        match kind {
            CurveKind::Actual => &self.actual,
            CurveKind::Projected => &self.projected,
            CurveKind::Proposed => &self.proposed,
        }
    }
}

/// Computes one curve over `series`, keeping record order.
pub fn project(series: &Series, kind: CurveKind, today: NaiveDate) -> Vec<ProjectionPoint> {
    series
        .records()
        .iter()
        .filter(|d| kind.includes(d.day, today))
        .map(|d| ProjectionPoint {
            day: d.day,
            value: kind.value(d),
        })
        .collect()
}

pub fn project_all(series: &Series, today: NaiveDate) -> ProjectedCurves {
    ProjectedCurves {
        actual: project(series, CurveKind::Actual, today),
        projected: project(series, CurveKind::Projected, today),
        proposed: project(series, CurveKind::Proposed, today),
    }
}
