use std::fmt;

use crate::wizard::fields::{Field, FieldStore};
use crate::wizard::gate;

/// Ordered enumeration of wizard screens. Navigation moves one position at
/// a time; there is no random access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StepId {
    Intro,
    License,
    PropertyType,
    Location,
    Details,
    Media,
    Contact,
    Authority,
    Preview,
}

impl StepId {
    pub const ALL: [StepId; 9] = [
        StepId::Intro,
        StepId::License,
        StepId::PropertyType,
        StepId::Location,
        StepId::Details,
        StepId::Media,
        StepId::Contact,
        StepId::Authority,
        StepId::Preview,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            StepId::Intro => "intro",
            StepId::License => "license",
            StepId::PropertyType => "property_type",
            StepId::Location => "location",
            StepId::Details => "details",
            StepId::Media => "media",
            StepId::Contact => "contact",
            StepId::Authority => "authority",
            StepId::Preview => "preview",
        }
    }

    pub fn index(self) -> usize {
        StepId::ALL
            .iter()
            .position(|step| *step == self)
            .unwrap_or(0)
    }

    pub fn successor(self) -> Option<StepId> {
        StepId::ALL.get(self.index() + 1).copied()
    }

    pub fn predecessor(self) -> Option<StepId> {
        self.index().checked_sub(1).and_then(|i| StepId::ALL.get(i)).copied()
    }

    /// Fields collected on this screen, in prompt order.
    pub fn fields(self) -> &'static [Field] {
        match self {
            StepId::Intro | StepId::Preview => &[],
            StepId::License => &[Field::HasLicense],
            StepId::PropertyType => {
                &[Field::CategoryId, Field::OperationType, Field::PropertyUse]
            }
            StepId::Location => &[Field::City, Field::Neighborhood],
            StepId::Details => &[
                Field::Title,
                Field::Description,
                Field::Area,
                Field::UsableArea,
                Field::Rooms,
                Field::Bathrooms,
                Field::PriceMin,
                Field::PriceMax,
                Field::PricePerMeter,
                Field::PriceHidden,
                Field::FinishingType,
                Field::AmenityIds,
                Field::Services,
                Field::Obligations,
            ],
            StepId::Media => &[Field::Images, Field::Videos],
            StepId::Contact => &[Field::ContactMethods],
            StepId::Authority => &[
                Field::LicenseNumber,
                Field::LicenseExpiryDate,
                Field::PlanNumber,
                Field::PlotNumber,
                Field::AreaName,
                Field::HasMortgage,
                Field::HasRestriction,
                Field::Guarantees,
                Field::MarketingOption,
                Field::IsFeatured,
            ],
        }
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a forward navigation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextOutcome {
    /// The gate passed and the wizard moved to the new step.
    Advanced(StepId),
    /// The current step's gate failed; position unchanged.
    Blocked(StepId),
    /// Already on the terminal step; submission is an explicit action,
    /// never an implicit consequence of `next()`.
    AtEnd,
}

/// Finite-state machine over the ordered step list. Holds no field data;
/// the gate check borrows the store on each forward attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepSequencer {
    current: StepId,
    blocked: bool,
}

impl StepSequencer {
    pub fn new() -> Self {
        Self {
            current: StepId::Intro,
            blocked: false,
        }
    }

    pub fn current(&self) -> StepId {
        self.current
    }

    /// True after a forward attempt was refused by the gate, until the
    /// wizard moves again. A UI uses this to disable its "next" control.
    pub fn is_blocked(&self) -> bool {
        self.blocked
    }

    /// Advances one step if the current gate passes. A blocked attempt
    /// never mutates the position.
    pub fn next(&mut self, fields: &FieldStore) -> NextOutcome {
        if !gate::step_valid(self.current, fields) {
            self.blocked = true;
            tracing::debug!(step = %self.current, "gate refused forward navigation");
            return NextOutcome::Blocked(self.current);
        }
        match self.current.successor() {
            Some(next) => {
                self.current = next;
                self.blocked = false;
                NextOutcome::Advanced(next)
            }
            None => NextOutcome::AtEnd,
        }
    }

    /// Moves to the predecessor step, retaining all fields. No-op on the
    /// first step.
    pub fn back(&mut self) -> Option<StepId> {
        let previous = self.current.predecessor()?;
        self.current = previous;
        self.blocked = false;
        Some(previous)
    }

    /// Progress fraction in [0, 1]: 0 at intro, 1 at preview, monotone
    /// under next/back.
    pub fn progress(&self) -> f64 {
        self.current.index() as f64 / (StepId::ALL.len() - 1) as f64
    }
}

impl Default for StepSequencer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::fields::FieldValue;

    #[test]
    fn starts_at_intro_with_zero_progress() {
        let sequencer = StepSequencer::new();
        assert_eq!(sequencer.current(), StepId::Intro);
        assert_eq!(sequencer.progress(), 0.0);
    }

    #[test]
    fn next_moves_exactly_one_position() {
        let fields = FieldStore::new();
        let mut sequencer = StepSequencer::new();
        let before = sequencer.current().index();
        assert_eq!(
            sequencer.next(&fields),
            NextOutcome::Advanced(StepId::License)
        );
        assert_eq!(sequencer.current().index(), before + 1);
    }

    #[test]
    fn blocked_gate_keeps_position_and_sets_flag() {
        let fields = FieldStore::new();
        let mut sequencer = StepSequencer::new();
        sequencer.next(&fields); // license
        sequencer.next(&fields); // property_type (optional gates passed)
        assert_eq!(sequencer.current(), StepId::PropertyType);

        assert_eq!(
            sequencer.next(&fields),
            NextOutcome::Blocked(StepId::PropertyType)
        );
        assert_eq!(sequencer.current(), StepId::PropertyType);
        assert!(sequencer.is_blocked());
    }

    #[test]
    fn advancing_clears_blocked_flag() {
        let mut fields = FieldStore::new();
        let mut sequencer = StepSequencer::new();
        sequencer.next(&fields);
        sequencer.next(&fields);
        sequencer.next(&fields); // blocked at property_type
        assert!(sequencer.is_blocked());

        fields.set(Field::CategoryId, FieldValue::text("1"));
        fields.set(Field::OperationType, FieldValue::text("sale"));
        fields.set(Field::PropertyUse, FieldValue::text("villa"));
        assert_eq!(
            sequencer.next(&fields),
            NextOutcome::Advanced(StepId::Location)
        );
        assert!(!sequencer.is_blocked());
    }

    #[test]
    fn back_stops_at_intro() {
        let mut sequencer = StepSequencer::new();
        assert_eq!(sequencer.back(), None);
        assert_eq!(sequencer.current(), StepId::Intro);
    }

    #[test]
    fn next_then_back_round_trips() {
        let fields = FieldStore::new();
        let mut sequencer = StepSequencer::new();
        sequencer.next(&fields);
        assert_eq!(sequencer.current(), StepId::License);
        assert_eq!(sequencer.back(), Some(StepId::Intro));
        assert_eq!(sequencer.current(), StepId::Intro);
    }

    #[test]
    fn progress_is_monotone_and_reaches_one() {
        let mut fields = FieldStore::new();
        fields.set(Field::CategoryId, FieldValue::text("1"));
        fields.set(Field::OperationType, FieldValue::text("sale"));
        fields.set(Field::PropertyUse, FieldValue::text("villa"));
        fields.set(Field::City, FieldValue::text("1"));
        fields.set(Field::Neighborhood, FieldValue::text("1-1"));
        fields.set(Field::Title, FieldValue::text("Nice flat"));
        fields.set(Field::Area, FieldValue::text("100"));
        fields.set(Field::PriceMin, FieldValue::text("100000"));
        fields.set(Field::PriceMax, FieldValue::text("200000"));
        fields.set(Field::FinishingType, FieldValue::text("good"));
        fields.set(
            Field::Description,
            FieldValue::text("A lovely flat indeed"),
        );
        fields.set(
            Field::Images,
            FieldValue::Files(vec![super::super::fields::FileHandle::new("a.jpg")]),
        );
        fields.set(Field::ContactMethods, FieldValue::List(vec!["phone".into()]));

        let mut sequencer = StepSequencer::new();
        let mut last = sequencer.progress();
        while let NextOutcome::Advanced(_) = sequencer.next(&fields) {
            assert!(sequencer.progress() >= last);
            last = sequencer.progress();
        }
        assert_eq!(sequencer.current(), StepId::Preview);
        assert_eq!(sequencer.progress(), 1.0);
        assert_eq!(sequencer.next(&fields), NextOutcome::AtEnd);
    }

    #[test]
    fn step_order_matches_flow() {
        let names: Vec<&str> = StepId::ALL.iter().map(|s| s.as_str()).collect();
        assert_eq!(
            names,
            [
                "intro",
                "license",
                "property_type",
                "location",
                "details",
                "media",
                "contact",
                "authority",
                "preview"
            ]
        );
    }
}
