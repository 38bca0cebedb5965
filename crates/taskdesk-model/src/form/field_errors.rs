use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Per-field error messages collected from one validation pass.
///
/// Holds at most one message per field: the first rule that failed for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors<F: Ord>(BTreeMap<F, String>);

impl<F: Ord> FieldErrors<F> {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Record a message for `field` unless one is already present.
    pub fn insert(&mut self, field: F, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: F) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: F) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&F, &str)> {
        self.0.iter().map(|(f, m)| (f, m.as_str()))
    }

    /// `Ok(value)` when nothing was recorded, otherwise `Err(self)`.
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

impl<F: Ord> Default for FieldErrors<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Ord + fmt::Display> fmt::Display for FieldErrors<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, message)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
        }
        Ok(())
    }
}

impl<F: Ord + fmt::Debug + fmt::Display> std::error::Error for FieldErrors<F> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_message_per_field_wins() {
        let mut errors = FieldErrors::new();
        errors.insert("title", "first");
        errors.insert("title", "second");
        assert_eq!(errors.get("title"), Some("first"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn into_result_depends_on_emptiness() {
        let empty: FieldErrors<&str> = FieldErrors::new();
        assert_eq!(empty.into_result(5), Ok(5));

        let mut errors = FieldErrors::new();
        errors.insert("a", "bad");
        assert!(errors.into_result(5).is_err());
    }

    #[test]
    fn display_joins_fields() {
        let mut errors = FieldErrors::new();
        errors.insert("b", "two");
        errors.insert("a", "one");
        assert_eq!(errors.to_string(), "a: one; b: two");
    }
}
