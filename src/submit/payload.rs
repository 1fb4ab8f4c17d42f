use serde::Serialize;

use crate::wizard::fields::{Field, FieldStore, FieldValue, FileHandle};

/// Fields that only branch the UI and are never part of the persisted
/// payload. Declared once here; the builder is the only consumer.
pub const UI_ONLY_FIELDS: &[Field] = &[Field::HasLicense, Field::ContactMethods];

/// One part of the multipart form submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "part", rename_all = "snake_case")]
pub enum PayloadPart {
    Field { key: String, value: String },
    File { key: String, file: FileHandle },
}

impl PayloadPart {
    pub fn key(&self) -> &str {
        match self {
            PayloadPart::Field { key, .. } | PayloadPart::File { key, .. } => key,
        }
    }
}

/// Ordered multipart-style payload for `POST /properties/add`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SubmissionPayload {
    parts: Vec<PayloadPart>,
}

impl SubmissionPayload {
    pub fn parts(&self) -> &[PayloadPart] {
        &self.parts
    }

    /// True when any part carries the given key, counting repeated
    /// `key[]` entries.
    pub fn contains_key(&self, key: &str) -> bool {
        let repeated = format!("{key}[]");
        self.parts
            .iter()
            .any(|part| part.key() == key || part.key() == repeated)
    }

    /// All scalar values recorded under the given key (repeated keys
    /// included), in payload order.
    pub fn values_for(&self, key: &str) -> Vec<&str> {
        let repeated = format!("{key}[]");
        self.parts
            .iter()
            .filter_map(|part| match part {
                PayloadPart::Field { key: k, value }
                    if k == key || *k == repeated =>
                {
                    Some(value.as_str())
                }
                _ => None,
            })
            .collect()
    }

    pub fn files_for(&self, key: &str) -> Vec<&FileHandle> {
        let repeated = format!("{key}[]");
        self.parts
            .iter()
            .filter_map(|part| match part {
                PayloadPart::File { key: k, file } if k == key || *k == repeated => Some(file),
                _ => None,
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

/// Transforms the field store into the wire payload: UI-only fields are
/// stripped, arrays become repeated `key[]` entries, file arrays become
/// repeated file parts, booleans become `"1"`/`"0"`, and blank text fields
/// are omitted. Numeric strings pass through untouched.
pub fn build_payload(fields: &FieldStore) -> SubmissionPayload {
    let mut parts = Vec::new();
    for (field, value) in fields.iter() {
        if UI_ONLY_FIELDS.contains(&field) {
            continue;
        }
        let key = field.key();
        match value {
            FieldValue::Text(text) => {
                if !text.trim().is_empty() {
                    parts.push(PayloadPart::Field {
                        key: key.to_string(),
                        value: text.clone(),
                    });
                }
            }
            FieldValue::Flag(flag) => parts.push(PayloadPart::Field {
                key: key.to_string(),
                value: if *flag { "1" } else { "0" }.to_string(),
            }),
            FieldValue::List(items) => {
                for item in items {
                    parts.push(PayloadPart::Field {
                        key: format!("{key}[]"),
                        value: item.clone(),
                    });
                }
            }
            FieldValue::Files(files) => {
                for file in files {
                    parts.push(PayloadPart::File {
                        key: format!("{key}[]"),
                        file: file.clone(),
                    });
                }
            }
        }
    }
    SubmissionPayload { parts }
}
