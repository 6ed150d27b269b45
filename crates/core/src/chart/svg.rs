//! Serializes a [`ChartRenderer`] into a standalone SVG document.

use std::fmt::Write;

use crate::chart::chart_renderer::ChartRenderer;
use crate::projection::CurveKind;

const LEGEND_HEIGHT: f64 = 100.0;
const LEGEND_SWATCH: f64 = 30.0;

fn stroke(kind: CurveKind) -> &'static str {
    match kind {
        CurveKind::Actual => "#1f77b4",
        CurveKind::Projected => "#ff7f0e",
        CurveKind::Proposed => "#2ca02c",
    }
}

/// Plot coordinate with at most three decimals and no trailing zeros.
pub(crate) fn coord(value: f64) -> String {
    let text = format!("{:.3}", value);
    let trimmed = text.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "" | "-0" => "0".to_string(),
        other => other.to_string(),
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

pub(crate) fn render(chart: &ChartRenderer) -> String {
    let layout = chart.layout();
    let width = layout.width;
    let total_height = layout.height + LEGEND_HEIGHT;
    let inner_width = layout.inner_width();
    let inner_height = layout.inner_height();

    // Writing to a String cannot fail.
    let mut out = String::new();
    let _ = write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        coord(width),
        coord(total_height),
        coord(width),
        coord(total_height)
    );
    let _ = write!(
        out,
        r#"<g class="chart" transform="translate({},{})">"#,
        coord(layout.margin.left),
        coord(layout.margin.top)
    );

    out.push_str(r#"<g class="yaxis">"#);
    for tick in chart.y_ticks() {
        let _ = write!(
            out,
            r##"<line x1="0" x2="{}" y1="{y}" y2="{y}" stroke="#ddd"/><text x="-9" y="{y}" dy="0.32em" text-anchor="end">{}</text>"##,
            coord(inner_width),
            escape(&tick.label),
            y = coord(tick.position),
        );
    }
    out.push_str("</g>");

    let _ = write!(
        out,
        r#"<g class="xaxis" transform="translate(0,{})">"#,
        coord(inner_height)
    );
    for tick in chart.x_ticks() {
        let _ = write!(
            out,
            r#"<g transform="translate({},0)"><line y2="6" stroke="currentColor"/><text dx="-.8em" dy=".15em" transform="rotate(-65)" text-anchor="end">{}</text></g>"#,
            coord(tick.position),
            escape(&tick.label)
        );
    }
    out.push_str("</g>");

    for path in chart.paths() {
        let _ = write!(
            out,
            r#"<path class="{}" fill="none" stroke="{}" stroke-width="1.5" d="{}"/>"#,
            path.class_name,
            stroke(path.kind),
            path.d
        );
    }
    out.push_str("</g>");

    let _ = write!(
        out,
        r#"<g class="legend" transform="translate(50,{})">"#,
        coord(layout.height)
    );
    for entry in chart.legend() {
        let y = coord(entry.y);
        let _ = write!(
            out,
            r#"<path class="{}-line" stroke="{}" d="M0,{y}L{},{y}"/><text x="35" y="{y}">{}</text>"#,
            entry.kind.name(),
            stroke(entry.kind),
            coord(LEGEND_SWATCH),
            escape(&entry.label),
            y = y,
        );
    }
    out.push_str("</g></svg>");
    out
}
