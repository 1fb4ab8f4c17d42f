//! Wizard state: accumulated fields, per-step validation gates, and the
//! step sequencer that drives the advertisement creation flow.

pub mod fields;
pub mod gate;
pub mod sequencer;
pub mod session;

pub use fields::{Field, FieldKind, FieldStore, FieldValue, FileHandle};
pub use gate::step_valid;
pub use sequencer::{NextOutcome, StepId, StepSequencer};
pub use session::{SubmissionStatus, WizardSession};
