use thiserror::Error;

/// Returned when a string is not one of an enum's wire literals.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind}: {value:?} (expected one of: {expected})")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
    pub expected: &'static str,
}

/// Returned when a string is not a real `YYYY-MM-DD` calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid date: {0:?} (expected YYYY-MM-DD)")]
pub struct InvalidDate(pub String);

/// Returned when an identifier is not a positive integer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid id: {0:?} (expected a positive integer)")]
pub struct InvalidId(pub String);
