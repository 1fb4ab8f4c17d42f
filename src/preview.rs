//! Read-only projection of the field store into a display-ready summary
//! for the terminal step. Never mutates state and never renders a raw
//! missing value: absent optional fields fall back to the `-` placeholder.

use crate::format::{format_price, LocaleConfig};
use crate::wizard::fields::{Field, FieldStore};

/// Placeholder shown for absent optional fields.
pub const EMPTY_PLACEHOLDER: &str = "-";

/// Display-ready summary of the collected advertisement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewModel {
    pub title: String,
    pub operation: String,
    pub property_use: String,
    pub location: String,
    pub price_range: String,
    pub area: String,
    pub rooms: String,
    pub bathrooms: String,
    pub finishing: String,
    pub amenities: String,
    pub services: String,
    pub contact_methods: String,
    pub description: String,
    pub image_count: usize,
    pub video_count: usize,
}

impl PreviewModel {
    /// Label/value pairs in display order, for line-oriented rendering.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Title", self.title.clone()),
            ("Operation type", self.operation.clone()),
            ("Property use", self.property_use.clone()),
            ("Location", self.location.clone()),
            ("Price range", self.price_range.clone()),
            ("Area (m²)", self.area.clone()),
            ("Rooms", self.rooms.clone()),
            ("Bathrooms", self.bathrooms.clone()),
            ("Finishing type", self.finishing.clone()),
            ("Amenities", self.amenities.clone()),
            ("Services", self.services.clone()),
            ("Contact methods", self.contact_methods.clone()),
            ("Description", self.description.clone()),
            ("Images", self.image_count.to_string()),
            ("Videos", self.video_count.to_string()),
        ]
    }
}

/// Projects the store into a [`PreviewModel`]. Pure read path.
pub fn project(fields: &FieldStore, locale: &LocaleConfig, currency: &str) -> PreviewModel {
    PreviewModel {
        title: text_or_dash(fields, Field::Title),
        operation: text_or_dash(fields, Field::OperationType),
        property_use: text_or_dash(fields, Field::PropertyUse),
        location: location_line(fields),
        price_range: price_range(fields, locale, currency),
        area: text_or_dash(fields, Field::Area),
        rooms: text_or_dash(fields, Field::Rooms),
        bathrooms: text_or_dash(fields, Field::Bathrooms),
        finishing: text_or_dash(fields, Field::FinishingType),
        amenities: list_or_dash(fields, Field::AmenityIds),
        services: list_or_dash(fields, Field::Services),
        contact_methods: list_or_dash(fields, Field::ContactMethods),
        description: text_or_dash(fields, Field::Description),
        image_count: fields.files(Field::Images).map(<[_]>::len).unwrap_or(0),
        video_count: fields.files(Field::Videos).map(<[_]>::len).unwrap_or(0),
    }
}

fn text_or_dash(fields: &FieldStore, field: Field) -> String {
    match fields.text(field) {
        Some(value) if !value.trim().is_empty() => value.trim().to_string(),
        _ => EMPTY_PLACEHOLDER.to_string(),
    }
}

fn list_or_dash(fields: &FieldStore, field: Field) -> String {
    match fields.list(field) {
        Some(items) if !items.is_empty() => items.join(", "),
        _ => EMPTY_PLACEHOLDER.to_string(),
    }
}

fn location_line(fields: &FieldStore) -> String {
    match (fields.text(Field::City), fields.text(Field::Neighborhood)) {
        (Some(city), Some(neighborhood))
            if !city.trim().is_empty() && !neighborhood.trim().is_empty() =>
        {
            format!("{}, {}", city.trim(), neighborhood.trim())
        }
        (Some(city), _) if !city.trim().is_empty() => city.trim().to_string(),
        _ => EMPTY_PLACEHOLDER.to_string(),
    }
}

fn price_range(fields: &FieldStore, locale: &LocaleConfig, currency: &str) -> String {
    let min = parsed_price(fields, Field::PriceMin, locale, currency);
    let max = parsed_price(fields, Field::PriceMax, locale, currency);
    match (min, max) {
        (Some(min), Some(max)) => format!("{min} - {max}"),
        (Some(single), None) | (None, Some(single)) => single,
        (None, None) => EMPTY_PLACEHOLDER.to_string(),
    }
}

fn parsed_price(
    fields: &FieldStore,
    field: Field,
    locale: &LocaleConfig,
    currency: &str,
) -> Option<String> {
    let raw = fields.text(field)?.trim();
    if raw.is_empty() {
        return None;
    }
    // Unparseable amounts are shown verbatim rather than dropped.
    match raw.parse::<f64>() {
        Ok(amount) => Some(format_price(locale, currency, amount)),
        Err(_) => Some(raw.to_string()),
    }
}
