use thiserror::Error;

mod domain_types;
mod query;

pub use domain_types::*;
pub use query::*;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Empty required field: {0}")]
    EmptyField(&'static str),

    #[error("Invalid {field}: '{value}' (expected one of: {expected})")]
    UnknownVariant {
        field: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("Invalid URL: {url} - {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Value out of bounds: {value}, expected at least {min}")]
    OutOfBounds { value: u32, min: u32 },
}
