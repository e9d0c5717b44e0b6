//! Series-to-pixel coordinate transform

use crate::error::{FleetDeskError, Result};
use serde::{Deserialize, Serialize};

/// Margin reserved on all sides for axes and labels, in pixels
pub const PADDING: f64 = 40.0;

/// One point of a forecast series: a time bucket and its value
///
/// The aliases accept the forecast endpoint's wire shape
/// (`{"month": ..., "forecastedDemand": ...}`) directly.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    #[serde(alias = "month")]
    pub label: String,
    #[serde(alias = "forecastedDemand")]
    pub value: f64,
}

/// Pixel dimensions of the drawing surface
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartGeometry {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl ChartGeometry {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            padding: PADDING,
        }
    }

    pub fn plot_width(&self) -> f64 {
        self.width - 2.0 * self.padding
    }

    pub fn plot_height(&self) -> f64 {
        self.height - 2.0 * self.padding
    }
}

/// Map a series onto pixel coordinates inside the padded plot area.
///
/// Point `i` of `n` lands at `x = padding + i/(n-1) * plot_width`; its value
/// scales linearly between the series minimum (bottom of the plot) and
/// maximum (top). Two degenerate inputs get special handling so the scale
/// factor never divides by zero: a single point is centred horizontally,
/// and a flat series renders at mid-height.
///
/// An empty series is a caller bug and fails fast.
pub fn project(points: &[SeriesPoint], geometry: &ChartGeometry) -> Result<Vec<(f64, f64)>> {
    if points.is_empty() {
        return Err(FleetDeskError::DegenerateSeries(
            "cannot project an empty series".to_string(),
        ));
    }

    let min_value = points.iter().map(|p| p.value).fold(f64::INFINITY, f64::min);
    let max_value = points
        .iter()
        .map(|p| p.value)
        .fold(f64::NEG_INFINITY, f64::max);
    let value_range = max_value - min_value;
    let count = points.len();

    let coordinates = points
        .iter()
        .enumerate()
        .map(|(index, point)| {
            let x = if count == 1 {
                geometry.width / 2.0
            } else {
                geometry.padding
                    + (index as f64 / (count - 1) as f64) * geometry.plot_width()
            };
            let y = if value_range == 0.0 {
                geometry.height / 2.0
            } else {
                (geometry.height - geometry.padding)
                    - ((point.value - min_value) / value_range) * geometry.plot_height()
            };
            (x, y)
        })
        .collect();

    Ok(coordinates)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(values: &[f64]) -> Vec<SeriesPoint> {
        values
            .iter()
            .enumerate()
            .map(|(i, &value)| SeriesPoint {
                label: format!("2025-{:02}", i + 1),
                value,
            })
            .collect()
    }

    #[test]
    fn test_empty_series_fails_fast() {
        let result = project(&[], &ChartGeometry::new(600.0, 250.0));
        assert!(matches!(
            result.unwrap_err(),
            FleetDeskError::DegenerateSeries(_)
        ));
    }

    #[test]
    fn test_x_coordinates_span_the_plot_area() {
        let geometry = ChartGeometry::new(600.0, 250.0);
        let points = series(&[1.0, 2.0, 3.0, 4.0, 5.0]);

        let coords = project(&points, &geometry).unwrap();

        assert_eq!(coords[0].0, geometry.padding);
        assert_eq!(coords[4].0, geometry.width - geometry.padding);
        for pair in coords.windows(2) {
            assert!(pair[1].0 > pair[0].0, "x must be strictly increasing");
        }
    }

    #[test]
    fn test_extremes_hit_the_plot_edges() {
        let geometry = ChartGeometry::new(600.0, 250.0);
        let points = series(&[10.0, 40.0, 25.0]);

        let coords = project(&points, &geometry).unwrap();

        // Minimum sits on the bottom plot edge, maximum on the top
        assert_eq!(coords[0].1, geometry.height - geometry.padding);
        assert_eq!(coords[1].1, geometry.padding);
        assert!(coords[2].1 > geometry.padding);
        assert!(coords[2].1 < geometry.height - geometry.padding);
    }

    #[test]
    fn test_flat_series_renders_at_mid_height() {
        let geometry = ChartGeometry::new(600.0, 250.0);
        let points = series(&[7.0, 7.0, 7.0, 7.0]);

        let coords = project(&points, &geometry).unwrap();

        for (_, y) in &coords {
            assert_eq!(*y, geometry.height / 2.0);
            assert!(y.is_finite());
        }
    }

    #[test]
    fn test_single_point_is_centred() {
        let geometry = ChartGeometry::new(600.0, 250.0);
        let points = series(&[42.0]);

        let coords = project(&points, &geometry).unwrap();

        assert_eq!(coords.len(), 1);
        assert_eq!(coords[0], (geometry.width / 2.0, geometry.height / 2.0));
    }

    #[test]
    fn test_forecast_wire_aliases() {
        let payload = r#"{"month": "2025-03", "forecastedDemand": 14}"#;
        let point: SeriesPoint = serde_json::from_str(payload).unwrap();
        assert_eq!(point.label, "2025-03");
        assert_eq!(point.value, 14.0);
    }
}
