use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Every field the wizard can collect. The set is closed: callers can only
/// write fields named here, so unknown keys are rejected at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    // UI-only branching flags, never submitted
    HasLicense,
    ContactMethods,
    // Property type step
    CategoryId,
    OperationType,
    PropertyUse,
    // Location step
    City,
    Neighborhood,
    // Details step
    Title,
    Description,
    Area,
    UsableArea,
    Rooms,
    Bathrooms,
    PriceMin,
    PriceMax,
    PricePerMeter,
    PriceHidden,
    FinishingType,
    AmenityIds,
    Services,
    Obligations,
    // Media step
    Images,
    Videos,
    // Authority step
    LicenseNumber,
    LicenseExpiryDate,
    PlanNumber,
    PlotNumber,
    AreaName,
    HasMortgage,
    HasRestriction,
    Guarantees,
    MarketingOption,
    IsFeatured,
}

/// Broad value shape expected for a field, used by drivers to pick the
/// right prompt or parse the right answer type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Flag,
    List,
    Files,
}

impl Field {
    pub const ALL: [Field; 33] = [
        Field::HasLicense,
        Field::ContactMethods,
        Field::CategoryId,
        Field::OperationType,
        Field::PropertyUse,
        Field::City,
        Field::Neighborhood,
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
        Field::Images,
        Field::Videos,
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
    ];

    /// Wire key used in the submission payload and in answer files.
    pub fn key(self) -> &'static str {
        match self {
            Field::HasLicense => "has_license",
            Field::ContactMethods => "contact_methods",
            Field::CategoryId => "category_id",
            Field::OperationType => "operation_type",
            Field::PropertyUse => "property_use",
            Field::City => "city",
            Field::Neighborhood => "neighborhood",
            Field::Title => "title",
            Field::Description => "description",
            Field::Area => "area",
            Field::UsableArea => "usable_area",
            Field::Rooms => "rooms",
            Field::Bathrooms => "bathrooms",
            Field::PriceMin => "price_min",
            Field::PriceMax => "price_max",
            Field::PricePerMeter => "price_per_meter",
            Field::PriceHidden => "price_hidden",
            Field::FinishingType => "finishing_type",
            Field::AmenityIds => "amenity_ids",
            Field::Services => "services",
            Field::Obligations => "obligations",
            Field::Images => "images",
            Field::Videos => "videos",
            Field::LicenseNumber => "license_number",
            Field::LicenseExpiryDate => "license_expiry_date",
            Field::PlanNumber => "plan_number",
            Field::PlotNumber => "plot_number",
            Field::AreaName => "area_name",
            Field::HasMortgage => "has_mortgage",
            Field::HasRestriction => "has_restriction",
            Field::Guarantees => "guarantees",
            Field::MarketingOption => "marketing_option",
            Field::IsFeatured => "is_featured",
        }
    }

    /// Display label used by the preview and the CLI prompts.
    pub fn label(self) -> &'static str {
        match self {
            Field::HasLicense => "Has advertising license",
            Field::ContactMethods => "Contact methods",
            Field::CategoryId => "Category",
            Field::OperationType => "Operation type",
            Field::PropertyUse => "Property use",
            Field::City => "City",
            Field::Neighborhood => "Neighborhood",
            Field::Title => "Title",
            Field::Description => "Description",
            Field::Area => "Area (m²)",
            Field::UsableArea => "Usable area (m²)",
            Field::Rooms => "Rooms",
            Field::Bathrooms => "Bathrooms",
            Field::PriceMin => "Minimum price",
            Field::PriceMax => "Maximum price",
            Field::PricePerMeter => "Price per meter",
            Field::PriceHidden => "Hide price",
            Field::FinishingType => "Finishing type",
            Field::AmenityIds => "Amenities",
            Field::Services => "Services",
            Field::Obligations => "Obligations",
            Field::Images => "Images",
            Field::Videos => "Videos",
            Field::LicenseNumber => "License number",
            Field::LicenseExpiryDate => "License expiry date",
            Field::PlanNumber => "Plan number",
            Field::PlotNumber => "Plot number",
            Field::AreaName => "Area name",
            Field::HasMortgage => "Has mortgage",
            Field::HasRestriction => "Has restriction",
            Field::Guarantees => "Guarantees",
            Field::MarketingOption => "Marketing option",
            Field::IsFeatured => "Featured listing",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            Field::HasLicense
            | Field::PriceHidden
            | Field::HasMortgage
            | Field::HasRestriction
            | Field::IsFeatured => FieldKind::Flag,
            Field::ContactMethods | Field::AmenityIds | Field::Services => FieldKind::List,
            Field::Images | Field::Videos => FieldKind::Files,
            _ => FieldKind::Text,
        }
    }

    /// Resolves a wire key back to its field.
    pub fn from_key(key: &str) -> Option<Field> {
        Field::ALL.iter().copied().find(|field| field.key() == key)
    }
}

/// Parent selector → dependent selectors cleared when the parent changes.
/// Declared as a single table so new pairs never touch call sites.
const DEPENDENT_SELECTORS: &[(Field, &[Field])] = &[
    (Field::CategoryId, &[Field::PropertyUse]),
    (Field::City, &[Field::Neighborhood]),
];

/// Opaque handle to an attached file. The wizard never reads the bytes,
/// only forwards the handle to the submission payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileHandle {
    pub name: String,
    pub path: PathBuf,
}

impl FileHandle {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        Self { name, path }
    }
}

/// A single field value. Numeric inputs stay as strings because the
/// submission transport is multipart form data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
    List(Vec<String>),
    Files(Vec<FileHandle>),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }
}

/// In-memory accumulator for wizard input. Values survive backward
/// navigation; the only cross-field side effect is the dependent-selector
/// reset table above.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldStore {
    values: BTreeMap<Field, FieldValue>,
    dirty: bool,
}

impl FieldStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a value, clearing any dependent selectors registered for the
    /// field. Overwrites are allowed; no validation happens here.
    pub fn set(&mut self, field: Field, value: FieldValue) {
        for (parent, dependents) in DEPENDENT_SELECTORS {
            if *parent == field {
                for dependent in *dependents {
                    if self.values.remove(dependent).is_some() {
                        tracing::debug!(
                            parent = parent.key(),
                            cleared = dependent.key(),
                            "dependent selector reset"
                        );
                    }
                }
            }
        }
        self.values.insert(field, value);
        self.dirty = true;
    }

    pub fn clear(&mut self, field: Field) {
        if self.values.remove(&field).is_some() {
            self.dirty = true;
        }
    }

    pub fn get(&self, field: Field) -> Option<&FieldValue> {
        self.values.get(&field)
    }

    pub fn text(&self, field: Field) -> Option<&str> {
        match self.values.get(&field) {
            Some(FieldValue::Text(value)) => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn flag(&self, field: Field) -> Option<bool> {
        match self.values.get(&field) {
            Some(FieldValue::Flag(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn list(&self, field: Field) -> Option<&[String]> {
        match self.values.get(&field) {
            Some(FieldValue::List(items)) => Some(items.as_slice()),
            _ => None,
        }
    }

    pub fn files(&self, field: Field) -> Option<&[FileHandle]> {
        match self.values.get(&field) {
            Some(FieldValue::Files(files)) => Some(files.as_slice()),
            _ => None,
        }
    }

    /// True when the field holds non-blank text. Numeric fields kept as
    /// strings count as present whenever non-empty.
    pub fn has_text(&self, field: Field) -> bool {
        self.text(field).map(|v| !v.trim().is_empty()).unwrap_or(false)
    }

    /// Returns and clears the dirty marker. Drivers use this to decide
    /// whether a blocked `next()` is worth retrying after an edit.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &FieldValue)> {
        self.values.iter().map(|(field, value)| (*field, value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
