//! Core identifier types used throughout FleetDesk
//!
//! All identifiers are server-assigned opaque strings; the newtypes exist so
//! a contract id cannot be handed to an API that expects a client id.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a rental contract
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContractId(pub String);

impl fmt::Display for ContractId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a client account
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClientId(pub String);

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a construction site
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SiteId(pub String);

impl fmt::Display for SiteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a physical equipment unit
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EquipmentId(pub String);

impl fmt::Display for EquipmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a contract line item
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineItemId(pub String);

impl fmt::Display for LineItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_transparent() {
        let id = ContractId("contract_1234abcd".to_string());
        assert_eq!(id.to_string(), "contract_1234abcd");

        let client = ClientId("client_42".to_string());
        assert_eq!(client.to_string(), "client_42");
    }

    #[test]
    fn test_serialization_is_a_plain_string() {
        let id = SiteId("site_5678efgh".to_string());
        let serialized = serde_json::to_string(&id).unwrap();
        assert_eq!(serialized, "\"site_5678efgh\"");

        let deserialized: SiteId = serde_json::from_str(&serialized).unwrap();
        assert_eq!(id, deserialized);
    }
}
