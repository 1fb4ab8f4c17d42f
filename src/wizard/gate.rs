//! Per-step validation gates. Each gate is a pure, total predicate over the
//! field store: it never mutates, never panics, and produces no messages.
//! Field-level error text is a presentation concern layered elsewhere.

use crate::wizard::fields::{Field, FieldStore};
use crate::wizard::sequencer::StepId;

const TITLE_MIN_CHARS: usize = 3;
const DESCRIPTION_MIN_CHARS: usize = 10;

/// Returns whether the given step's required fields are complete.
pub fn step_valid(step: StepId, fields: &FieldStore) -> bool {
    match step {
        // Informational or fully optional steps never block.
        StepId::Intro | StepId::License | StepId::Authority | StepId::Preview => true,
        StepId::PropertyType => {
            fields.has_text(Field::CategoryId)
                && fields.has_text(Field::OperationType)
                && fields.has_text(Field::PropertyUse)
        }
        StepId::Location => fields.has_text(Field::City) && fields.has_text(Field::Neighborhood),
        StepId::Details => {
            min_chars(fields, Field::Title, TITLE_MIN_CHARS)
                && fields.has_text(Field::Area)
                && fields.has_text(Field::PriceMin)
                && fields.has_text(Field::PriceMax)
                && fields.has_text(Field::FinishingType)
                && min_chars(fields, Field::Description, DESCRIPTION_MIN_CHARS)
        }
        StepId::Media => fields
            .files(Field::Images)
            .map(|images| !images.is_empty())
            .unwrap_or(false),
        StepId::Contact => fields
            .list(Field::ContactMethods)
            .map(|methods| !methods.is_empty())
            .unwrap_or(false),
    }
}

fn min_chars(fields: &FieldStore, field: Field, min: usize) -> bool {
    fields
        .text(field)
        .map(|value| value.trim().chars().count() >= min)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::fields::{FieldValue, FileHandle};

    fn details_fields() -> FieldStore {
        let mut fields = FieldStore::new();
        fields.set(Field::Title, FieldValue::text("Nice flat"));
        fields.set(Field::Area, FieldValue::text("100"));
        fields.set(Field::PriceMin, FieldValue::text("100000"));
        fields.set(Field::PriceMax, FieldValue::text("200000"));
        fields.set(Field::FinishingType, FieldValue::text("good"));
        fields.set(
            Field::Description,
            FieldValue::text("A lovely flat indeed"),
        );
        fields
    }

    #[test]
    fn intro_and_preview_are_never_blocked() {
        let fields = FieldStore::new();
        assert!(step_valid(StepId::Intro, &fields));
        assert!(step_valid(StepId::License, &fields));
        assert!(step_valid(StepId::Authority, &fields));
        assert!(step_valid(StepId::Preview, &fields));
    }

    #[test]
    fn property_type_requires_all_three_selectors() {
        let mut fields = FieldStore::new();
        assert!(!step_valid(StepId::PropertyType, &fields));
        fields.set(Field::CategoryId, FieldValue::text("1"));
        fields.set(Field::OperationType, FieldValue::text("sale"));
        assert!(!step_valid(StepId::PropertyType, &fields));
        fields.set(Field::PropertyUse, FieldValue::text("villa"));
        assert!(step_valid(StepId::PropertyType, &fields));
    }

    #[test]
    fn location_requires_city_and_neighborhood() {
        let mut fields = FieldStore::new();
        fields.set(Field::City, FieldValue::text("1"));
        assert!(!step_valid(StepId::Location, &fields));
        fields.set(Field::Neighborhood, FieldValue::text("1-1"));
        assert!(step_valid(StepId::Location, &fields));
    }

    #[test]
    fn details_passes_with_minimal_valid_data() {
        assert!(step_valid(StepId::Details, &details_fields()));
    }

    #[test]
    fn details_blocks_short_title() {
        let mut fields = details_fields();
        fields.set(Field::Title, FieldValue::text("ab"));
        assert!(!step_valid(StepId::Details, &fields));
    }

    #[test]
    fn details_blocks_short_description() {
        let mut fields = details_fields();
        fields.set(Field::Description, FieldValue::text("too short"));
        assert!(!step_valid(StepId::Details, &fields));
    }

    #[test]
    fn details_accepts_non_numeric_price_strings() {
        // Numeric validity is a submission-time concern; presence suffices here.
        let mut fields = details_fields();
        fields.set(Field::PriceMin, FieldValue::text("about 100k"));
        assert!(step_valid(StepId::Details, &fields));
    }

    #[test]
    fn media_requires_at_least_one_image() {
        let mut fields = FieldStore::new();
        assert!(!step_valid(StepId::Media, &fields));
        fields.set(Field::Images, FieldValue::Files(vec![]));
        assert!(!step_valid(StepId::Media, &fields));
        fields.set(
            Field::Images,
            FieldValue::Files(vec![FileHandle::new("front.jpg")]),
        );
        assert!(step_valid(StepId::Media, &fields));
    }

    #[test]
    fn contact_requires_a_method() {
        let mut fields = FieldStore::new();
        assert!(!step_valid(StepId::Contact, &fields));
        fields.set(Field::ContactMethods, FieldValue::List(vec!["phone".into()]));
        assert!(step_valid(StepId::Contact, &fields));
    }

    #[test]
    fn gates_are_total_over_wrong_value_shapes() {
        let mut fields = FieldStore::new();
        fields.set(Field::Title, FieldValue::Flag(true));
        fields.set(Field::Images, FieldValue::text("front.jpg"));
        assert!(!step_valid(StepId::Details, &fields));
        assert!(!step_valid(StepId::Media, &fields));
    }
}
