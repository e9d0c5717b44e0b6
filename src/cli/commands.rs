//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "fleetdesk")]
#[command(about = "FleetDesk - rental contract negotiation and forecast charting", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Work with rental contracts
    Contract {
        #[command(subcommand)]
        action: ContractAction,
    },

    /// Render forecast charts
    Chart {
        #[command(subcommand)]
        action: ChartAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ContractAction {
    /// Submit a contract request read from a JSON file
    Submit {
        /// Base URL of the rental API
        #[arg(short, long, default_value = "http://localhost:3000")]
        endpoint: String,

        /// Path to the contract request JSON
        #[arg(short, long)]
        file: PathBuf,

        /// On partial availability, retry with the reduced quantity
        /// instead of stopping for operator input
        #[arg(long)]
        accept_partial: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum ChartAction {
    /// Render a forecast series to an SVG file
    Render {
        /// Path to the series JSON (array of {label, value} points)
        #[arg(short, long)]
        file: PathBuf,

        /// Output SVG path
        #[arg(short, long)]
        out: PathBuf,

        /// Canvas width in pixels
        #[arg(long, default_value_t = 600.0)]
        width: f64,

        /// Canvas height in pixels
        #[arg(long, default_value_t = 250.0)]
        height: f64,

        /// Stroke colour for the data line
        #[arg(long, default_value = "#f59e0b")]
        color: String,
    },
}
