//! FleetDesk Rental Negotiation Core
//!
//! Operator-side core of a construction-equipment rental dashboard:
//! - submitting multi-line equipment requests and negotiating around
//!   server-determined availability (`negotiation`)
//! - rendering forecast trend charts without a charting library (`chart`)
//!
//! The remote rental API is consumed through the `service::ContractService`
//! seam; everything above it is deterministic and tested offline.

pub mod chart;
pub mod cli;
pub mod error;
pub mod negotiation;
pub mod service;
pub mod types;

// Re-export commonly used types
pub use error::{FleetDeskError, Result};
pub use negotiation::{
    ContractOutcome, ContractRequest, LineItem, NegotiationController, NegotiationState,
};
pub use service::{ContractService, HttpContractService};
