//! Negotiation request/response types and state machine

use crate::error::{FleetDeskError, Result};
use crate::types::{ClientId, ContractId, EquipmentId, LineItemId, SiteId};
use serde::{Deserialize, Serialize};

/// Option type the server attaches when a request is partially available
pub const PROCEED_WITH_PARTIAL: &str = "PROCEED_WITH_PARTIAL";

/// Suggestion type the server attaches when a request is unavailable
pub const NEXT_AVAILABLE_DATE: &str = "NEXT_AVAILABLE_DATE";

/// One equipment-type/quantity pair within a contract request
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub equipment_type: String,
    pub quantity: u32,
}

/// A multi-line equipment rental request
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractRequest {
    pub client_id: ClientId,
    pub site_id: SiteId,
    pub start_date: String,
    pub end_date: String,
    pub line_items: Vec<LineItem>,
}

impl ContractRequest {
    /// Check the structural invariants: at least one line item, every
    /// quantity >= 1, start date not after end date. Callers validate
    /// before submission; the controller itself does not re-check.
    pub fn validate(&self) -> Result<()> {
        if self.line_items.is_empty() {
            return Err(FleetDeskError::InvalidRequest(
                "at least one line item is required".to_string(),
            ));
        }
        for (index, item) in self.line_items.iter().enumerate() {
            if item.quantity < 1 {
                return Err(FleetDeskError::InvalidRequest(format!(
                    "line item {} has quantity 0",
                    index
                )));
            }
            if item.equipment_type.trim().is_empty() {
                return Err(FleetDeskError::InvalidRequest(format!(
                    "line item {} has no equipment type",
                    index
                )));
            }
        }
        // ISO dates compare correctly as strings
        if self.start_date > self.end_date {
            return Err(FleetDeskError::InvalidRequest(format!(
                "start date {} is after end date {}",
                self.start_date, self.end_date
            )));
        }
        Ok(())
    }
}

/// A line item resolved to a concrete equipment unit
///
/// The server echoes rental dates and telemetry counters alongside the
/// assignment; they are kept verbatim so the display layer never loses a
/// field the server sent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignedLineItem {
    pub line_item_id: LineItemId,
    pub equipment_id: EquipmentId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_engine_hours: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuel_usage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub downtime_hours: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operating_days: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_operator_id: Option<String>,
}

/// A fully created contract as returned by the server
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedContract {
    pub contract_id: ContractId,
    pub client_id: ClientId,
    pub site_id: SiteId,
    pub start_date: String,
    pub end_date: String,
    pub line_items: Vec<AssignedLineItem>,
}

/// A recovery option offered alongside a partial-availability outcome
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityOption {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_quantity: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waitlist_quantity: Option<u32>,
}

/// A suggestion offered alongside an unavailable outcome
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_available_date: Option<String>,
}

/// Three-way server outcome for a contract creation request
///
/// The wire payload is a single shape discriminated by a `status` field;
/// here each status gets its own variant so only one shape is ever active.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status")]
pub enum ContractOutcome {
    /// Terminal success: the contract exists with concrete assignments
    #[serde(rename = "CREATED")]
    Created { contract: CreatedContract },
    /// Recoverable: fewer units exist than requested, remainder waitlistable
    #[serde(rename = "PARTIALLY_AVAILABLE")]
    PartiallyAvailable {
        message: String,
        options: Vec<AvailabilityOption>,
    },
    /// Terminal failure: the request must be modified
    #[serde(rename = "UNAVAILABLE")]
    Unavailable {
        message: String,
        suggestions: Vec<Suggestion>,
    },
}

impl ContractOutcome {
    /// The `PROCEED_WITH_PARTIAL` option, if this outcome carries one
    pub fn proceed_with_partial(&self) -> Option<&AvailabilityOption> {
        match self {
            ContractOutcome::PartiallyAvailable { options, .. } => {
                options.iter().find(|opt| opt.kind == PROCEED_WITH_PARTIAL)
            }
            _ => None,
        }
    }
}

/// Negotiation state machine
///
/// Owned exclusively by one [`NegotiationController`]; every transition goes
/// through its methods.
///
/// [`NegotiationController`]: super::NegotiationController
#[derive(Clone, Debug, PartialEq)]
pub enum NegotiationState {
    /// No request in flight and no outcome on display
    Idle,
    /// A submission is in flight; further submissions are rejected
    Submitting,
    /// The server answered with one of the three outcomes
    Resolved(ContractOutcome),
    /// Transport or server error, carrying a human-readable message
    Failed(String),
}

impl NegotiationState {
    pub fn is_idle(&self) -> bool {
        matches!(self, NegotiationState::Idle)
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, NegotiationState::Submitting)
    }

    /// The resolved outcome, if any
    pub fn outcome(&self) -> Option<&ContractOutcome> {
        match self {
            NegotiationState::Resolved(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Whether `retry_with_partial` is legal from this state
    pub fn can_retry_with_partial(&self) -> bool {
        matches!(
            self,
            NegotiationState::Resolved(ContractOutcome::PartiallyAvailable { .. })
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_request() -> ContractRequest {
        ContractRequest {
            client_id: ClientId("client_1".to_string()),
            site_id: SiteId("site_5678efgh".to_string()),
            start_date: "2025-09-01".to_string(),
            end_date: "2025-12-01".to_string(),
            line_items: vec![LineItem {
                equipment_type: "Excavator".to_string(),
                quantity: 3,
            }],
        }
    }

    #[test]
    fn test_request_validation() {
        assert!(sample_request().validate().is_ok());

        let mut empty = sample_request();
        empty.line_items.clear();
        assert!(empty.validate().is_err());

        let mut zero_qty = sample_request();
        zero_qty.line_items[0].quantity = 0;
        assert!(zero_qty.validate().is_err());

        let mut backwards = sample_request();
        backwards.start_date = "2026-01-01".to_string();
        assert!(backwards.validate().is_err());
    }

    #[test]
    fn test_request_wire_format_is_camel_case() {
        let json = serde_json::to_value(sample_request()).unwrap();
        assert_eq!(json["clientId"], "client_1");
        assert_eq!(json["siteId"], "site_5678efgh");
        assert_eq!(json["lineItems"][0]["equipmentType"], "Excavator");
        assert_eq!(json["lineItems"][0]["quantity"], 3);
    }

    #[test]
    fn test_created_outcome_deserialization() {
        let payload = r#"{
            "status": "CREATED",
            "contract": {
                "contractId": "contract_9",
                "clientId": "client_1",
                "siteId": "site_5678efgh",
                "startDate": "2025-09-01",
                "endDate": "2025-12-01",
                "lineItems": [
                    {
                        "lineItemId": "li_1",
                        "equipmentId": "eq_100",
                        "totalEngineHours": 120.5,
                        "lastOperatorId": "op_7"
                    }
                ]
            }
        }"#;

        let outcome: ContractOutcome = serde_json::from_str(payload).unwrap();
        let ContractOutcome::Created { contract } = outcome else {
            panic!("expected Created outcome");
        };
        assert_eq!(contract.contract_id, ContractId("contract_9".to_string()));
        assert_eq!(contract.line_items.len(), 1);
        assert_eq!(contract.line_items[0].total_engine_hours, Some(120.5));
        assert_eq!(
            contract.line_items[0].last_operator_id.as_deref(),
            Some("op_7")
        );
    }

    #[test]
    fn test_partially_available_deserialization() {
        let payload = r#"{
            "status": "PARTIALLY_AVAILABLE",
            "message": "Only 2 of 3 excavators are free in that window",
            "options": [
                {"type": "PROCEED_WITH_PARTIAL", "availableQuantity": 2, "waitlistQuantity": 1}
            ]
        }"#;

        let outcome: ContractOutcome = serde_json::from_str(payload).unwrap();
        let option = outcome.proceed_with_partial().expect("option present");
        assert_eq!(option.available_quantity, Some(2));
        assert_eq!(option.waitlist_quantity, Some(1));
    }

    #[test]
    fn test_unavailable_preserves_suggestion_date() {
        let payload = r#"{
            "status": "UNAVAILABLE",
            "message": "No cranes available",
            "suggestions": [
                {"type": "NEXT_AVAILABLE_DATE", "nextAvailableDate": "2025-09-01"}
            ]
        }"#;

        let outcome: ContractOutcome = serde_json::from_str(payload).unwrap();
        let ContractOutcome::Unavailable { message, suggestions } = &outcome else {
            panic!("expected Unavailable outcome");
        };
        assert_eq!(message, "No cranes available");
        assert_eq!(suggestions[0].kind, NEXT_AVAILABLE_DATE);
        assert_eq!(suggestions[0].next_available_date.as_deref(), Some("2025-09-01"));

        // Unknown suggestion types survive a round trip untouched
        let round_tripped: ContractOutcome =
            serde_json::from_str(&serde_json::to_string(&outcome).unwrap()).unwrap();
        assert_eq!(outcome, round_tripped);
    }

    #[test]
    fn test_proceed_with_partial_ignores_other_option_types() {
        let outcome = ContractOutcome::PartiallyAvailable {
            message: "partial".to_string(),
            options: vec![AvailabilityOption {
                kind: "WAITLIST_ALL".to_string(),
                available_quantity: None,
                waitlist_quantity: Some(3),
            }],
        };
        assert!(outcome.proceed_with_partial().is_none());
    }

    #[test]
    fn test_state_predicates() {
        assert!(NegotiationState::Idle.is_idle());
        assert!(NegotiationState::Submitting.is_submitting());
        assert!(!NegotiationState::Submitting.can_retry_with_partial());

        let partial = NegotiationState::Resolved(ContractOutcome::PartiallyAvailable {
            message: "partial".to_string(),
            options: vec![],
        });
        assert!(partial.can_retry_with_partial());
        assert!(partial.outcome().is_some());

        let failed = NegotiationState::Failed("boom".to_string());
        assert!(!failed.can_retry_with_partial());
        assert!(failed.outcome().is_none());
    }
}
