//! Negotiation controller owning the contract-request lifecycle

use crate::error::{FleetDeskError, Result};
use crate::negotiation::types::{ContractOutcome, ContractRequest, NegotiationState};
use crate::service::ContractService;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Drives a contract request through submission, outcome classification and
/// the partial-availability retry loop.
///
/// Exactly one submission may be in flight at a time; a `submit` or
/// `retry_with_partial` call while one is pending is rejected without a
/// network call, so a double-click can never create a duplicate contract.
pub struct NegotiationController {
    service: Arc<dyn ContractService>,
    inner: Mutex<Inner>,
}

struct Inner {
    state: NegotiationState,
    /// Last request handed to `submit`, kept for the retry path
    request: Option<ContractRequest>,
    /// Bumped on every `reset`; an outcome from a superseded submission is
    /// discarded instead of overwriting fresh state
    epoch: u64,
}

fn lock_inner(mutex: &Mutex<Inner>) -> MutexGuard<'_, Inner> {
    // Never held across an await; a poisoned lock still carries usable state
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl NegotiationController {
    pub fn new(service: Arc<dyn ContractService>) -> Self {
        Self {
            service,
            inner: Mutex::new(Inner {
                state: NegotiationState::Idle,
                request: None,
                epoch: 0,
            }),
        }
    }

    /// Snapshot of the current negotiation state
    pub fn state(&self) -> NegotiationState {
        lock_inner(&self.inner).state.clone()
    }

    /// Submit a contract request.
    ///
    /// The request is assumed to satisfy the structural invariants
    /// ([`ContractRequest::validate`] is the caller's responsibility).
    /// Transport and server errors are folded into [`NegotiationState::Failed`]
    /// rather than surfaced as `Err`, so callers never need their own
    /// error branch to keep rendering.
    pub async fn submit(&self, request: ContractRequest) -> NegotiationState {
        let epoch = {
            let mut inner = lock_inner(&self.inner);
            if inner.state.is_submitting() {
                tracing::warn!("submission already in flight, ignoring duplicate submit");
                return inner.state.clone();
            }
            tracing::info!(
                line_items = request.line_items.len(),
                client = %request.client_id,
                "submitting contract request"
            );
            inner.state = NegotiationState::Submitting;
            inner.request = Some(request.clone());
            inner.epoch
        };

        self.drive(request, epoch).await
    }

    /// Resubmit the remembered request with the first line item's quantity
    /// reduced to what the server said is available.
    ///
    /// Legal only while the current state is a resolved partial-availability
    /// outcome; anywhere else this is a caller bug and returns an error with
    /// the state untouched and no network call issued.
    pub async fn retry_with_partial(&self) -> Result<NegotiationState> {
        let (adjusted, epoch) = {
            let mut inner = lock_inner(&self.inner);
            if !inner.state.can_retry_with_partial() {
                tracing::warn!(state = ?inner.state, "retry_with_partial outside partial-availability state");
                return Err(FleetDeskError::InvalidRetryState(format!(
                    "retry_with_partial requires a partial-availability outcome, state is {:?}",
                    inner.state
                )));
            }

            let available = match inner
                .state
                .outcome()
                .and_then(ContractOutcome::proceed_with_partial)
            {
                Some(option) => match option.available_quantity {
                    Some(quantity) => quantity,
                    None => {
                        return Err(FleetDeskError::Internal(
                            "PROCEED_WITH_PARTIAL option carries no available quantity"
                                .to_string(),
                        ))
                    }
                },
                None => {
                    return Err(FleetDeskError::Internal(
                        "server offered no PROCEED_WITH_PARTIAL option".to_string(),
                    ))
                }
            };

            let mut request = match inner.request.clone() {
                Some(request) => request,
                None => {
                    return Err(FleetDeskError::Internal(
                        "no remembered request to retry".to_string(),
                    ))
                }
            };

            // The server does not identify which line item the option refers
            // to; the dashboard has always patched the first one. See the
            // retry-mapping note in DESIGN.md before changing this.
            match request.line_items.first_mut() {
                Some(first) => first.quantity = available,
                None => {
                    return Err(FleetDeskError::Internal(
                        "remembered request has no line items".to_string(),
                    ))
                }
            }

            tracing::info!(available, "retrying with reduced first line item");
            inner.state = NegotiationState::Submitting;
            inner.request = Some(request.clone());
            (request, inner.epoch)
        };

        Ok(self.drive(adjusted, epoch).await)
    }

    /// Return to [`NegotiationState::Idle`], discarding any outcome.
    ///
    /// Legal from every state. If a submission is still in flight its
    /// outcome is discarded when it lands.
    pub fn reset(&self) {
        let mut inner = lock_inner(&self.inner);
        if inner.state.is_submitting() {
            tracing::warn!("reset while a submission is in flight, outcome will be discarded");
        }
        inner.state = NegotiationState::Idle;
        inner.request = None;
        inner.epoch += 1;
        tracing::info!("negotiation reset to idle");
    }

    /// Issue the network call and settle the outcome into state.
    ///
    /// Holds no lock across the await. If the returned future is dropped
    /// mid-flight (component teardown), the guard puts the state back to
    /// idle instead of leaving it stuck in submitting.
    async fn drive(&self, request: ContractRequest, epoch: u64) -> NegotiationState {
        let mut cancel = CancelGuard {
            inner: &self.inner,
            epoch,
            armed: true,
        };

        let result = self.service.create(&request).await;
        cancel.armed = false;

        let mut inner = lock_inner(&self.inner);
        if inner.epoch != epoch {
            tracing::debug!("discarding outcome of a superseded submission");
            return inner.state.clone();
        }

        inner.state = match result {
            Ok(outcome) => {
                match &outcome {
                    ContractOutcome::Created { contract } => {
                        tracing::info!(contract = %contract.contract_id, "contract created");
                    }
                    ContractOutcome::PartiallyAvailable { message, .. } => {
                        tracing::info!(%message, "partial availability");
                    }
                    ContractOutcome::Unavailable { message, .. } => {
                        tracing::info!(%message, "equipment unavailable");
                    }
                }
                NegotiationState::Resolved(outcome)
            }
            Err(e) => {
                tracing::error!("contract submission failed: {}", e);
                NegotiationState::Failed(e.to_string())
            }
        };
        inner.state.clone()
    }
}

/// Restores idle state when an in-flight submission future is dropped
struct CancelGuard<'a> {
    inner: &'a Mutex<Inner>,
    epoch: u64,
    armed: bool,
}

impl Drop for CancelGuard<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        let mut inner = lock_inner(self.inner);
        if inner.epoch == self.epoch && inner.state.is_submitting() {
            tracing::debug!("in-flight submission dropped, returning to idle");
            inner.state = NegotiationState::Idle;
        }
    }
}
