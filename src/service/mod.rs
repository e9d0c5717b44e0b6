//! Remote contract API collaborator

pub mod http;

pub use http::{ContractService, HttpContractService};
