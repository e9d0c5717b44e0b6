//! Error types for FleetDesk

use thiserror::Error;

/// Main error type for FleetDesk
#[derive(Error, Debug)]
pub enum FleetDeskError {
    // Contract service errors
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Server rejected request: {0}")]
    ServerRejection(String),

    // Negotiation errors
    #[error("Invalid retry state: {0}")]
    InvalidRetryState(String),

    #[error("Invalid contract request: {0}")]
    InvalidRequest(String),

    // Chart errors
    #[error("Degenerate series: {0}")]
    DegenerateSeries(String),

    // General errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for FleetDesk operations
pub type Result<T> = std::result::Result<T, FleetDeskError>;
