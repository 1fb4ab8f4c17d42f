use std::time::Duration;

use crate::errors::GatewayError;
use crate::submit::gateway::{Property, PropertyGateway};
use crate::submit::payload::build_payload;
use crate::wizard::fields::FieldStore;

/// Default upper bound for the outbound create call. Every submission
/// carries an explicit deadline; gateways enforce it on their transport.
pub const DEFAULT_SUBMIT_TIMEOUT: Duration = Duration::from_secs(30);

/// Turns the accumulated fields into the wire payload and invokes the
/// collaborator exactly once per call. Retries are user-initiated: a caller
/// simply invokes `submit` again after a failure.
pub struct SubmissionCoordinator<G: PropertyGateway> {
    gateway: G,
    timeout: Duration,
}

impl<G: PropertyGateway> SubmissionCoordinator<G> {
    pub fn new(gateway: G) -> Self {
        Self::with_timeout(gateway, DEFAULT_SUBMIT_TIMEOUT)
    }

    pub fn with_timeout(gateway: G, timeout: Duration) -> Self {
        Self { gateway, timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Builds the payload (UI-only fields stripped) and performs the single
    /// create call. The borrowed fields are never mutated.
    pub fn submit(&self, fields: &FieldStore) -> Result<Property, GatewayError> {
        let payload = build_payload(fields);
        tracing::info!(parts = payload.len(), "submitting advertisement");
        self.gateway.create(&payload, self.timeout)
    }
}
