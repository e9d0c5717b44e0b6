//! Command-line interface

pub mod app;
pub mod commands;

pub use app::{render_chart_file, FleetDeskApp};
pub use commands::{ChartAction, Cli, Commands, ContractAction};
