pub mod aggregate;
pub mod form_state;
pub mod validation;

pub use aggregate::{ApplyTo, TaxSubmission};
pub use form_state::{reduce, GroupCheckState, TaxField, TaxFormAction, TaxFormState};
pub use validation::{normalize_rate, submit, validate, FieldError, FieldErrors, MAX_RATE_PERCENT};
