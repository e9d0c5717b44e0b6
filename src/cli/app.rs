//! FleetDesk application wiring the controller to the rental API

use crate::chart;
use crate::chart::SeriesPoint;
use crate::error::Result;
use crate::negotiation::{ContractOutcome, ContractRequest, NegotiationController, NegotiationState};
use crate::service::HttpContractService;
use std::path::Path;
use std::sync::Arc;

/// Operator-facing application around one negotiation controller
pub struct FleetDeskApp {
    controller: NegotiationController,
}

impl FleetDeskApp {
    pub fn new(endpoint: &str) -> Self {
        let service = Arc::new(HttpContractService::new(endpoint));
        Self {
            controller: NegotiationController::new(service),
        }
    }

    pub fn controller(&self) -> &NegotiationController {
        &self.controller
    }

    /// Read, validate and submit a contract request; optionally accept a
    /// partial-availability offer in the same run.
    pub async fn submit_from_file(&self, path: &Path, accept_partial: bool) -> Result<()> {
        let raw = std::fs::read_to_string(path)?;
        let request: ContractRequest = serde_json::from_str(&raw)?;
        request.validate()?;

        let state = self.controller.submit(request).await;
        report(&state);

        if accept_partial && state.can_retry_with_partial() {
            let state = self.controller.retry_with_partial().await?;
            report(&state);
        }

        Ok(())
    }
}

fn report(state: &NegotiationState) {
    match state {
        NegotiationState::Idle => tracing::info!("no request submitted"),
        NegotiationState::Submitting => tracing::info!("submission in flight"),
        NegotiationState::Failed(message) => tracing::error!("submission failed: {}", message),
        NegotiationState::Resolved(outcome) => match outcome {
            ContractOutcome::Created { contract } => {
                tracing::info!(
                    "contract {} created for client {} at site {} ({} to {})",
                    contract.contract_id,
                    contract.client_id,
                    contract.site_id,
                    contract.start_date,
                    contract.end_date
                );
                for item in &contract.line_items {
                    tracing::info!(
                        "  line item {} -> equipment {}",
                        item.line_item_id,
                        item.equipment_id
                    );
                }
            }
            ContractOutcome::PartiallyAvailable { message, options } => {
                tracing::warn!("partial availability: {}", message);
                for option in options {
                    tracing::warn!(
                        "  option {}: available {:?}, waitlisted {:?}",
                        option.kind,
                        option.available_quantity,
                        option.waitlist_quantity
                    );
                }
            }
            ContractOutcome::Unavailable {
                message,
                suggestions,
            } => {
                tracing::error!("equipment unavailable: {}", message);
                for suggestion in suggestions {
                    tracing::error!(
                        "  suggestion {}: next available {:?}",
                        suggestion.kind,
                        suggestion.next_available_date
                    );
                }
            }
        },
    }
}

/// Render a forecast series file to a standalone SVG chart
pub fn render_chart_file(
    input: &Path,
    out: &Path,
    width: f64,
    height: f64,
    color: &str,
) -> Result<()> {
    let raw = std::fs::read_to_string(input)?;
    let points: Vec<SeriesPoint> = serde_json::from_str(&raw)?;

    let commands = chart::render(&points, width, height, color)?;
    let svg = chart::to_svg(&commands, width, height);
    std::fs::write(out, svg)?;

    tracing::info!(
        "rendered {} points to {}",
        points.len(),
        out.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FleetDeskError;

    #[test]
    fn test_render_chart_file_roundtrip() {
        let dir = std::env::temp_dir();
        let input = dir.join("fleetdesk_test_series.json");
        let output = dir.join("fleetdesk_test_chart.svg");

        std::fs::write(
            &input,
            r#"[{"label": "2025-01", "value": 4}, {"label": "2025-02", "value": 9}]"#,
        )
        .unwrap();

        render_chart_file(&input, &output, 600.0, 250.0, "#f59e0b").unwrap();

        let svg = std::fs::read_to_string(&output).unwrap();
        assert!(svg.contains("<polyline "));

        std::fs::remove_file(&input).ok();
        std::fs::remove_file(&output).ok();
    }

    #[test]
    fn test_render_chart_file_rejects_empty_series() {
        let dir = std::env::temp_dir();
        let input = dir.join("fleetdesk_test_empty_series.json");
        let output = dir.join("fleetdesk_test_empty_chart.svg");

        std::fs::write(&input, "[]").unwrap();

        let result = render_chart_file(&input, &output, 600.0, 250.0, "#f59e0b");
        assert!(matches!(
            result.unwrap_err(),
            FleetDeskError::DegenerateSeries(_)
        ));

        std::fs::remove_file(&input).ok();
    }

    #[tokio::test]
    async fn test_submit_from_file_rejects_invalid_request() {
        let dir = std::env::temp_dir();
        let input = dir.join("fleetdesk_test_bad_request.json");
        std::fs::write(
            &input,
            r#"{
                "clientId": "client_1",
                "siteId": "site_5678efgh",
                "startDate": "2025-09-01",
                "endDate": "2025-12-01",
                "lineItems": []
            }"#,
        )
        .unwrap();

        // Validation fails before any network call is attempted
        let app = FleetDeskApp::new("http://localhost:1");
        let result = app.submit_from_file(&input, false).await;
        assert!(matches!(
            result.unwrap_err(),
            FleetDeskError::InvalidRequest(_)
        ));
        assert!(app.controller().state().is_idle());

        std::fs::remove_file(&input).ok();
    }
}
