use serde::{Deserialize, Serialize};

use crate::projection::CurveKind;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

/// Outer size of the chart and the margins reserved for its axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
}

impl Default for ChartLayout {
    fn default() -> Self {
        ChartLayout {
            width: 800.0,
            height: 400.0,
            margin: Margin {
                top: 20.0,
                right: 20.0,
                bottom: 75.0,
                left: 120.0,
            },
        }
    }
}

impl ChartLayout {
    /// Width of the plotting area.
    pub fn inner_width(&self) -> f64 {
        (self.width - self.margin.left - self.margin.right).max(0.0)
    }

    /// Height of the plotting area.
    pub fn inner_height(&self) -> f64 {
        (self.height - self.margin.top - self.margin.bottom).max(0.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTick {
    /// Offset along the axis in plot coordinates.
    pub position: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub kind: CurveKind,
    pub label: String,
    pub y: f64,
}

/// One drawn curve: its SVG path data and CSS class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurvePath {
    pub kind: CurveKind,
    pub class_name: String,
    /// SVG path data, empty when the curve has no points.
    pub d: String,
    pub point_count: usize,
}
