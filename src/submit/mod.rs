//! Submission flow: payload assembly, the collaborator gateway seam, and
//! the coordinator that drives a single create call per attempt.

pub mod coordinator;
pub mod gateway;
pub mod payload;

pub use coordinator::SubmissionCoordinator;
pub use gateway::{DryRunGateway, Property, PropertyGateway};
pub use payload::{build_payload, PayloadPart, SubmissionPayload, UI_ONLY_FIELDS};
