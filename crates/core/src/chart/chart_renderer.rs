//! Burndown chart state: fixed x axis, y axis rescaled per series, one path per curve.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use log::debug;

use crate::burndown::{DateRange, Series};
use crate::chart::chart_model::{AxisTick, ChartLayout, CurvePath, LegendEntry};
use crate::chart::scales::{LinearScale, TimeScale};
use crate::chart::svg;
use crate::projection::{project, CurveKind, ProjectionPoint};
use crate::utils::format_currency;

const X_TICK_FORMAT: &str = "%b %Y";
const Y_TICK_COUNT: usize = 10;
const LEGEND_FIRST_Y: f64 = 15.0;
const LEGEND_STEP: f64 = 20.0;

#[derive(Debug, Clone)]
pub struct ChartRenderer {
    layout: ChartLayout,
    x: TimeScale,
    y: LinearScale,
    x_ticks: Vec<AxisTick>,
    legend: Vec<LegendEntry>,
    paths: BTreeMap<CurveKind, CurvePath>,
}

impl ChartRenderer {
    /// Builds the x axis from the all-funds date range and the legend.
    ///
    /// Neither changes afterwards; only the y axis and the paths follow the
    /// series passed to [`ChartRenderer::redraw`].
    pub fn setup(layout: ChartLayout, date_range: DateRange) -> Self {
        let x = TimeScale::new(date_range, (0.0, layout.inner_width()));
        let y = LinearScale::new((0.0, 0.0), (layout.inner_height(), 0.0));

        let x_ticks = x
            .month_ticks()
            .into_iter()
            .map(|day| AxisTick {
                position: x.map(day),
                label: day.format(X_TICK_FORMAT).to_string(),
            })
            .collect();

        let legend = CurveKind::ALL
            .iter()
            .enumerate()
            .map(|(i, kind)| LegendEntry {
                kind: *kind,
                label: format!("{} spend", kind.name()),
                y: LEGEND_FIRST_Y + LEGEND_STEP * i as f64,
            })
            .collect();

        ChartRenderer {
            layout,
            x,
            y,
            x_ticks,
            legend,
            paths: BTreeMap::new(),
        }
    }

    /// Replaces the three curves with those of `series`.
    pub fn redraw(&mut self, series: &Series, today: NaiveDate) {
        self.paths.clear();
        let max_amount = series.total_allocation().unwrap_or(0.0);
        self.y.set_domain((0.0, max_amount));

        for kind in CurveKind::ALL {
            let points = project(series, kind, today);
            let path = CurvePath {
                kind,
                class_name: format!("{}-line", kind.name()),
                d: self.path_data(&points),
                point_count: points.len(),
            };
            self.paths.insert(kind, path);
        }
        debug!(
            "Redrew chart for {} with {} records",
            series.scope(),
            series.len()
        );
    }

    fn path_data(&self, points: &[ProjectionPoint]) -> String {
        let mut d = String::new();
        for (i, point) in points.iter().enumerate() {
            d.push(if i == 0 { 'M' } else { 'L' });
            d.push_str(&svg::coord(self.x.map(point.day)));
            d.push(',');
            d.push_str(&svg::coord(self.y.map(point.value)));
        }
        d
    }

    pub fn layout(&self) -> &ChartLayout {
        &self.layout
    }

    pub fn x_scale(&self) -> &TimeScale {
        &self.x
    }

    pub fn y_scale(&self) -> &LinearScale {
        &self.y
    }

    pub fn x_ticks(&self) -> &[AxisTick] {
        &self.x_ticks
    }

    /// Currency-labelled ticks of the current y domain.
    pub fn y_ticks(&self) -> Vec<AxisTick> {
        self.y
            .ticks(Y_TICK_COUNT)
            .into_iter()
            .map(|value| AxisTick {
                position: self.y.map(value),
                label: format_currency(value),
            })
            .collect()
    }

    pub fn legend(&self) -> &[LegendEntry] {
        &self.legend
    }

    pub fn paths(&self) -> impl Iterator<Item = &CurvePath> {
        self.paths.values()
    }

    pub fn path(&self, kind: CurveKind) -> Option<&CurvePath> {
        self.paths.get(&kind)
    }

    pub fn to_svg(&self) -> String {
        svg::render(self)
    }
}
