mod common;

use listing_core::format::LocaleConfig;
use listing_core::submit::build_payload;
use listing_core::wizard::{Field, FieldValue, NextOutcome, StepId, WizardSession};

#[test]
fn full_walk_reaches_preview_with_valid_data() {
    listing_core::init();
    let mut session = common::ready_session();

    let expected = [
        StepId::License,
        StepId::PropertyType,
        StepId::Location,
        StepId::Details,
        StepId::Media,
        StepId::Contact,
        StepId::Authority,
        StepId::Preview,
    ];
    for step in expected {
        assert_eq!(session.next(), NextOutcome::Advanced(step));
        assert!(!session.is_blocked());
    }
    assert_eq!(session.current_step(), StepId::Preview);
    assert_eq!(session.progress(), 1.0);
    assert_eq!(session.next(), NextOutcome::AtEnd);
}

#[test]
fn empty_session_blocks_at_property_type() {
    let mut session = WizardSession::new();
    assert_eq!(session.next(), NextOutcome::Advanced(StepId::License));
    assert_eq!(session.next(), NextOutcome::Advanced(StepId::PropertyType));
    assert_eq!(session.next(), NextOutcome::Blocked(StepId::PropertyType));
    assert!(session.is_blocked());
    assert_eq!(session.current_step(), StepId::PropertyType);
}

#[test]
fn short_title_blocks_details_until_fixed() {
    let mut session = common::ready_session();
    session.update_field(Field::Title, FieldValue::text("ab"));
    for _ in 0..4 {
        session.next();
    }
    assert_eq!(session.current_step(), StepId::Details);
    assert_eq!(session.next(), NextOutcome::Blocked(StepId::Details));

    session.update_field(Field::Title, FieldValue::text("Nice flat"));
    assert_eq!(session.next(), NextOutcome::Advanced(StepId::Media));
}

#[test]
fn back_retains_fields_and_next_revalidates() {
    let mut session = common::ready_session();
    session.next();
    session.next();
    session.next(); // at location
    assert_eq!(session.current_step(), StepId::Location);

    assert_eq!(session.back(), Some(StepId::PropertyType));
    assert_eq!(session.fields().text(Field::City), Some("riyadh"));
    assert_eq!(session.next(), NextOutcome::Advanced(StepId::Location));
}

#[test]
fn changing_city_after_back_clears_neighborhood() {
    let mut session = common::ready_session();
    session.next();
    session.next();
    session.next();
    session.next(); // past location
    session.back();
    assert_eq!(session.current_step(), StepId::Location);

    session.update_field(Field::City, FieldValue::text("jeddah"));
    assert_eq!(session.fields().get(Field::Neighborhood), None);
    assert_eq!(session.next(), NextOutcome::Blocked(StepId::Location));
}

#[test]
fn payload_from_valid_session_excludes_ui_fields() {
    let session = common::ready_session();
    let payload = build_payload(session.fields());
    assert_eq!(payload.values_for("title"), vec!["Nice flat"]);
    assert!(payload.contains_key("images"));
    assert!(!payload.contains_key("contact_methods"));
    assert!(!payload.contains_key("has_license"));
}

#[test]
fn preview_renders_placeholder_for_missing_rooms() {
    let session = common::ready_session();
    let model = session.preview(&LocaleConfig::default(), "SAR");
    assert_eq!(model.rooms, "-");
    assert_eq!(model.title, "Nice flat");
    assert_eq!(model.price_range, "100,000 SAR - 200,000 SAR");
}
