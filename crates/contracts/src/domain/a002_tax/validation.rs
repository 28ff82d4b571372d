//! Field validation and submit normalization for the tax form.

use std::collections::{BTreeMap, HashSet};
use std::fmt;

use thiserror::Error;

use super::aggregate::TaxSubmission;
use super::form_state::{TaxField, TaxFormState};
use crate::domain::a001_catalog_item::PartitionedItems;

pub const MAX_RATE_PERCENT: f64 = 100.0;

/// Ошибка валидации отдельного поля
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Required")]
    Required,

    #[error("Must be positive")]
    MustBePositive,

    #[error("Max 100%")]
    MaxExceeded,
}

/// Per-field validation failures.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<TaxField, FieldError>);

impl std::error::Error for FieldErrors {}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|(field, error)| format!("{}: {}", field.as_str(), error))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: TaxField) -> Option<FieldError> {
        self.0.get(&field).copied()
    }

    pub fn insert(&mut self, field: TaxField, error: FieldError) {
        self.0.insert(field, error);
    }

    pub fn iter(&self) -> impl Iterator<Item = (TaxField, FieldError)> + '_ {
        self.0.iter().map(|(field, error)| (*field, *error))
    }

    /// Keep only errors of the given fields.
    pub fn only(mut self, fields: &HashSet<TaxField>) -> Self {
        self.0.retain(|field, _| fields.contains(field));
        self
    }
}

pub fn validate_name(name: &str) -> Result<String, FieldError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(FieldError::Required);
    }
    Ok(name.to_string())
}

/// Rate in percent; blank or non-numeric input counts as missing.
pub fn validate_rate(rate: &str) -> Result<f64, FieldError> {
    let value = rate
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or(FieldError::Required)?;

    if value <= 0.0 {
        return Err(FieldError::MustBePositive);
    }
    if value > MAX_RATE_PERCENT {
        return Err(FieldError::MaxExceeded);
    }
    Ok(value)
}

/// Процент -> доля с двумя знаками: 50 -> "0.50", 12.5 -> "0.13"
///
/// Exact halfway values round up; `{:.2}` alone would round them to even.
pub fn normalize_rate(percent: f64) -> String {
    let fraction = percent / 100.0;
    let halves = (fraction * 200.0).round();
    let exact_tie = fraction.mul_add(200.0, -halves) == 0.0 && halves.rem_euclid(2.0) == 1.0;
    if exact_tie {
        format!("{:.2}", (halves + 1.0) / 200.0)
    } else {
        format!("{:.2}", fraction)
    }
}

pub fn validate(state: &TaxFormState) -> FieldErrors {
    let mut errors = FieldErrors::default();
    if let Err(e) = validate_name(&state.name) {
        errors.insert(TaxField::Name, e);
    }
    if let Err(e) = validate_rate(&state.rate) {
        errors.insert(TaxField::Rate, e);
    }
    errors
}

/// Validate the form and build the submission record.
///
/// Marks every field touched and records the attempt, whatever the outcome.
pub fn submit(
    catalog: &PartitionedItems,
    state: &mut TaxFormState,
) -> Result<TaxSubmission, FieldErrors> {
    state.touched.extend(TaxField::ALL);
    state.submit_attempted = true;

    let (name, rate) = match (validate_name(&state.name), validate_rate(&state.rate)) {
        (Ok(name), Ok(rate)) => (name, rate),
        _ => return Err(validate(state)),
    };

    Ok(TaxSubmission {
        name,
        rate: normalize_rate(rate),
        applied_to: state.apply_to,
        applicable_items: state.selected_ids_in_order(catalog),
    })
}
