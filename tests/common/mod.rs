#![allow(dead_code)]

use listing_core::wizard::{Field, FieldStore, FieldValue, FileHandle, WizardSession};

/// The smallest field set that passes every step gate up to the preview.
pub fn minimally_valid_fields() -> FieldStore {
    let mut fields = FieldStore::new();
    fields.set(Field::CategoryId, FieldValue::text("1"));
    fields.set(Field::OperationType, FieldValue::text("sale"));
    fields.set(Field::PropertyUse, FieldValue::text("villa"));
    fields.set(Field::City, FieldValue::text("riyadh"));
    fields.set(Field::Neighborhood, FieldValue::text("alnakhil"));
    fields.set(Field::Title, FieldValue::text("Nice flat"));
    fields.set(Field::Area, FieldValue::text("100"));
    fields.set(Field::PriceMin, FieldValue::text("100000"));
    fields.set(Field::PriceMax, FieldValue::text("200000"));
    fields.set(Field::FinishingType, FieldValue::text("good"));
    fields.set(Field::Description, FieldValue::text("A lovely flat indeed"));
    fields.set(
        Field::Images,
        FieldValue::Files(vec![FileHandle::new("photos/front.jpg")]),
    );
    fields.set(Field::ContactMethods, FieldValue::List(vec!["phone".into()]));
    fields
}

/// A session pre-loaded with the minimally valid field set, still at intro.
pub fn ready_session() -> WizardSession {
    let mut session = WizardSession::new();
    for (field, value) in minimally_valid_fields().iter() {
        session.update_field(field, value.clone());
    }
    session
}
