//! Forecast trend chart rendering
//!
//! The coordinate transform ([`scale`]) is pure and testable without any
//! drawing surface; [`render`] turns a series into drawing commands and
//! [`svg`] is a thin paint adapter over those commands.

pub mod render;
pub mod scale;
pub mod svg;

pub use render::{render, DrawCommand};
pub use scale::{project, ChartGeometry, SeriesPoint, PADDING};
pub use svg::to_svg;
