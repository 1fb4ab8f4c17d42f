use serde::{Deserialize, Serialize};

/// Locale-aware formatting preferences for preview rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocaleConfig {
    pub language_tag: String,
    pub decimal_separator: char,
    pub grouping_separator: char,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            language_tag: "en-US".into(),
            decimal_separator: '.',
            grouping_separator: ',',
        }
    }
}

/// Formats a numeric value with locale separators and the given precision.
pub fn format_number(locale: &LocaleConfig, value: f64, precision: u8) -> String {
    let mut body = format!("{:.*}", precision as usize, value);
    if locale.decimal_separator != '.' {
        if let Some(pos) = body.find('.') {
            body.replace_range(pos..=pos, &locale.decimal_separator.to_string());
        }
    }
    if let Some(pos) = body.find(locale.decimal_separator) {
        let mut int_part = body[..pos].to_string();
        insert_grouping(&mut int_part, locale.grouping_separator);
        body = format!("{}{}", int_part, &body[pos..]);
    } else {
        insert_grouping(&mut body, locale.grouping_separator);
    }
    body
}

fn insert_grouping(int_part: &mut String, separator: char) {
    let mut cleaned = int_part.replace(separator, "");
    if cleaned.starts_with('-') {
        let sign = cleaned.remove(0);
        let grouped = group_digits(&cleaned, separator);
        *int_part = format!("{}{}", sign, grouped);
    } else {
        *int_part = group_digits(&cleaned, separator);
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::new();
    let mut count = 0;
    for ch in digits.chars().rev() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, separator);
        }
        grouped.insert(0, ch);
        count += 1;
    }
    grouped
}

/// Renders a price amount with grouping and a trailing currency code.
///
/// Listing prices are whole amounts, so no decimal places are shown.
pub fn format_price(locale: &LocaleConfig, currency: &str, amount: f64) -> String {
    format!("{} {}", format_number(locale, amount, 0), currency)
}
