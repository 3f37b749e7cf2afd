use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub const MIN_ITEM_LEN: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Item,
    Count,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Item => "item",
            Self::Count => "count",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: Field,
    pub code: String,
    pub message: String,
}

/// Outcome of submit-time schema validation. Every rule is evaluated
/// independently; errors for both fields can be reported in one pass and a
/// failing result never propagates as `Err`; the caller uses it to block
/// the commit and surface inline messages.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<FieldError>,
    /// Coerced quantity, present exactly when every count rule passed.
    pub quantity: Option<u32>,
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self { valid: true, errors: Vec::new(), quantity: None }
    }
}

impl ValidationResult {
    pub fn errors_for(&self, field: Field) -> impl Iterator<Item = &FieldError> {
        self.errors.iter().filter(move |error| error.field == field)
    }
}

/// Validates the raw form inputs. The schema deliberately does not check
/// that `item` resolves to a catalog product; live resolution is a separate,
/// looser step that feeds the submission gate.
pub fn validate_submission(item: &str, count: &str) -> ValidationResult {
    let mut result = ValidationResult::default();
    validate_item(item, &mut result.errors);
    result.quantity = validate_count(count, &mut result.errors);
    result.valid = result.errors.is_empty();
    result
}

/// Submission-gate predicate for the count field: non-empty, numeric, and
/// greater than zero. Looser than the schema on purpose; the gate only
/// enables the add action, the schema has the final word at submit.
pub fn count_is_positive(count: &str) -> bool {
    count.trim().parse::<Decimal>().map(|value| value > Decimal::ZERO).unwrap_or(false)
}

/// Coerces the count field to a whole-unit quantity. `None` whenever any
/// count rule fails; a passing [`validate_submission`] guarantees `Some`.
pub fn parse_count(count: &str) -> Option<u32> {
    let value = count.trim().parse::<Decimal>().ok()?;
    if value < Decimal::ONE || !value.fract().is_zero() {
        return None;
    }
    value.to_u32()
}

fn validate_item(item: &str, errors: &mut Vec<FieldError>) {
    if item.is_empty() {
        errors.push(field_error(Field::Item, "ITEM_REQUIRED", "Product name is required"));
        return;
    }

    if item.chars().count() < MIN_ITEM_LEN {
        errors.push(field_error(
            Field::Item,
            "ITEM_TOO_SHORT",
            format!("Product name must be at least {MIN_ITEM_LEN} characters"),
        ));
    }

    if item.chars().any(char::is_whitespace) {
        errors.push(field_error(
            Field::Item,
            "ITEM_HAS_WHITESPACE",
            "Product name must not contain spaces",
        ));
    }

    if !item.chars().all(|ch| ch.is_ascii_alphanumeric()) {
        errors.push(field_error(
            Field::Item,
            "ITEM_NOT_ALPHANUMERIC",
            "Product name must contain only letters and digits",
        ));
    }
}

fn validate_count(count: &str, errors: &mut Vec<FieldError>) -> Option<u32> {
    let trimmed = count.trim();
    if trimmed.is_empty() {
        errors.push(field_error(Field::Count, "COUNT_REQUIRED", "Quantity is required"));
        return None;
    }

    let Ok(value) = trimmed.parse::<Decimal>() else {
        errors.push(field_error(Field::Count, "COUNT_NOT_NUMERIC", "Quantity must be a number"));
        return None;
    };

    let mut ok = true;
    if value < Decimal::ONE {
        errors.push(field_error(Field::Count, "COUNT_BELOW_MINIMUM", "Quantity must be at least 1"));
        ok = false;
    }
    // Cart quantities are whole units; fractional input is refused instead of
    // being truncated.
    if !value.fract().is_zero() {
        errors.push(field_error(
            Field::Count,
            "COUNT_FRACTIONAL",
            "Quantity must be a whole number",
        ));
        ok = false;
    }

    if !ok {
        return None;
    }

    match value.to_u32() {
        Some(quantity) => Some(quantity),
        None => {
            errors.push(field_error(Field::Count, "COUNT_TOO_LARGE", "Quantity is too large"));
            None
        }
    }
}

fn field_error(field: Field, code: &str, message: impl Into<String>) -> FieldError {
    FieldError { field, code: code.to_string(), message: message.into() }
}
