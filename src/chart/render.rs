//! Drawing-command producer for the forecast trend chart

use crate::chart::scale::{project, ChartGeometry, SeriesPoint};
use crate::error::Result;

const AXIS_COLOR: &str = "#d1d5db";
const AXIS_WIDTH: f64 = 1.0;
const LINE_WIDTH: f64 = 3.0;
const MARKER_RADIUS: f64 = 5.0;
const VALUE_LABEL_COLOR: &str = "#78350f";
const VALUE_LABEL_SIZE: f64 = 12.0;
const VALUE_LABEL_OFFSET: f64 = 10.0;
const CATEGORY_LABEL_COLOR: &str = "#6b7280";
const CATEGORY_LABEL_SIZE: f64 = 10.0;
const CATEGORY_LABEL_OFFSET: f64 = 20.0;
// Every other category label is drawn to avoid overlap at small widths;
// presentation policy, tunable
const CATEGORY_LABEL_STRIDE: usize = 2;

/// One primitive paint operation, surface-agnostic
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        color: String,
        width: f64,
    },
    Polyline {
        points: Vec<(f64, f64)>,
        color: String,
        width: f64,
    },
    Circle {
        cx: f64,
        cy: f64,
        radius: f64,
        color: String,
    },
    Text {
        x: f64,
        y: f64,
        content: String,
        size: f64,
        color: String,
    },
}

/// Produce the full command list for one redraw of the trend chart.
///
/// Axes come first so the data polyline is never occluded, then the
/// polyline (omitted for a single point), then a marker and value label per
/// point with every other category label along the x axis. The input is
/// untouched and every call yields a complete fresh frame, so redrawing on
/// data change is just calling again.
pub fn render(
    points: &[SeriesPoint],
    width: f64,
    height: f64,
    stroke_color: &str,
) -> Result<Vec<DrawCommand>> {
    let geometry = ChartGeometry::new(width, height);
    let coordinates = project(points, &geometry)?;

    let mut commands = Vec::with_capacity(3 + 2 * points.len());

    // Left vertical axis, then bottom horizontal axis
    commands.push(DrawCommand::Line {
        x1: geometry.padding,
        y1: geometry.padding,
        x2: geometry.padding,
        y2: height - geometry.padding,
        color: AXIS_COLOR.to_string(),
        width: AXIS_WIDTH,
    });
    commands.push(DrawCommand::Line {
        x1: geometry.padding,
        y1: height - geometry.padding,
        x2: width - geometry.padding,
        y2: height - geometry.padding,
        color: AXIS_COLOR.to_string(),
        width: AXIS_WIDTH,
    });

    if coordinates.len() >= 2 {
        commands.push(DrawCommand::Polyline {
            points: coordinates.clone(),
            color: stroke_color.to_string(),
            width: LINE_WIDTH,
        });
    }

    for (index, (point, &(x, y))) in points.iter().zip(&coordinates).enumerate() {
        commands.push(DrawCommand::Circle {
            cx: x,
            cy: y,
            radius: MARKER_RADIUS,
            color: stroke_color.to_string(),
        });
        commands.push(DrawCommand::Text {
            x,
            y: y - VALUE_LABEL_OFFSET,
            content: format_value(point.value),
            size: VALUE_LABEL_SIZE,
            color: VALUE_LABEL_COLOR.to_string(),
        });
        if index % CATEGORY_LABEL_STRIDE == 0 {
            commands.push(DrawCommand::Text {
                x,
                y: height - geometry.padding + CATEGORY_LABEL_OFFSET,
                content: point.label.clone(),
                size: CATEGORY_LABEL_SIZE,
                color: CATEGORY_LABEL_COLOR.to_string(),
            });
        }
    }

    Ok(commands)
}

fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
