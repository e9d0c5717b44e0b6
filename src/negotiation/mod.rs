//! Contract creation and availability negotiation

pub mod controller;
pub mod types;

pub use controller::NegotiationController;
pub use types::{
    AssignedLineItem, AvailabilityOption, ContractOutcome, ContractRequest, CreatedContract,
    LineItem, NegotiationState, Suggestion, NEXT_AVAILABLE_DATE, PROCEED_WITH_PARTIAL,
};
