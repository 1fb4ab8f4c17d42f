use uuid::Uuid;

use crate::errors::GatewayError;
use crate::format::LocaleConfig;
use crate::preview::{self, PreviewModel};
use crate::submit::{Property, PropertyGateway, SubmissionCoordinator};
use crate::wizard::fields::{Field, FieldStore, FieldValue};
use crate::wizard::sequencer::{NextOutcome, StepId, StepSequencer};

/// Lifecycle of the outbound submission call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionStatus {
    Idle,
    Submitting,
    Succeeded { property_id: u64 },
    Failed { reason: String },
}

/// Owned state of one advertisement-creation session: the accumulated
/// fields, the step position, and the submission status. Created fresh per
/// session and discarded on success or cancellation; never shared.
#[derive(Debug, Clone, PartialEq)]
pub struct WizardSession {
    id: Uuid,
    fields: FieldStore,
    sequencer: StepSequencer,
    status: SubmissionStatus,
}

impl WizardSession {
    pub fn new() -> Self {
        let id = Uuid::new_v4();
        tracing::info!(session = %id, "wizard session started");
        Self {
            id,
            fields: FieldStore::new(),
            sequencer: StepSequencer::new(),
            status: SubmissionStatus::Idle,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn current_step(&self) -> StepId {
        self.sequencer.current()
    }

    pub fn progress(&self) -> f64 {
        self.sequencer.progress()
    }

    pub fn is_blocked(&self) -> bool {
        self.sequencer.is_blocked()
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    pub fn fields(&self) -> &FieldStore {
        &self.fields
    }

    /// Records a field edit. Dependent-selector resets apply here.
    pub fn update_field(&mut self, field: Field, value: FieldValue) {
        self.fields.set(field, value);
    }

    pub fn clear_field(&mut self, field: Field) {
        self.fields.clear(field);
    }

    /// Attempts forward navigation. Moving to a new step discards the edit
    /// marker: edits are scoped to the step they were made on.
    pub fn next(&mut self) -> NextOutcome {
        let outcome = self.sequencer.next(&self.fields);
        if matches!(outcome, NextOutcome::Advanced(_)) {
            self.fields.take_dirty();
        }
        outcome
    }

    pub fn back(&mut self) -> Option<StepId> {
        let previous = self.sequencer.back();
        if previous.is_some() {
            self.fields.take_dirty();
        }
        previous
    }

    /// Returns and clears the current step's edit marker. After a blocked
    /// `next()`, a retry is only worth attempting once this reports an edit.
    pub fn take_dirty(&mut self) -> bool {
        self.fields.take_dirty()
    }

    /// Read-only summary of the collected fields for the terminal step.
    pub fn preview(&self, locale: &LocaleConfig, currency: &str) -> PreviewModel {
        preview::project(&self.fields, locale, currency)
    }

    /// Drives the submission through the coordinator, recording the status
    /// transitions. Fields and step position survive a failure unchanged,
    /// and a failed session may submit again. Only an idle or failed
    /// session may enter `Submitting`; a succeeded one refuses.
    pub fn submit<G: PropertyGateway>(
        &mut self,
        coordinator: &SubmissionCoordinator<G>,
    ) -> Result<Property, GatewayError> {
        if let SubmissionStatus::Succeeded { property_id } = self.status {
            return Err(GatewayError::AlreadySubmitted(property_id));
        }
        self.status = SubmissionStatus::Submitting;
        match coordinator.submit(&self.fields) {
            Ok(property) => {
                tracing::info!(session = %self.id, property_id = property.id, "submission succeeded");
                self.status = SubmissionStatus::Succeeded {
                    property_id: property.id,
                };
                Ok(property)
            }
            Err(err) => {
                tracing::warn!(session = %self.id, error = %err, "submission failed");
                self.status = SubmissionStatus::Failed {
                    reason: err.user_message(),
                };
                Err(err)
            }
        }
    }
}

impl Default for WizardSession {
    fn default() -> Self {
        Self::new()
    }
}
