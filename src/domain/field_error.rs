use super::ports::ErrorCollector;
use serde::Serialize;
use std::fmt;

/// A single failed check, keyed by the record field it concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.message)
    }
}

/// Ordered list of field errors produced by one validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    /// Messages recorded against `field`, in the order they were added.
    pub fn on(&self, field: &str) -> Vec<&'static str> {
        self.errors
            .iter()
            .filter(|e| e.field == field)
            .map(|e| e.message)
            .collect()
    }

    /// Each error rendered as "field message".
    pub fn full_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

impl ErrorCollector for ValidationErrors {
    fn add(&mut self, field: &'static str, message: &'static str) {
        self.errors.push(FieldError { field, message });
    }

    fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl IntoIterator for ValidationErrors {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_keeps_order() {
        let mut errors = ValidationErrors::new();
        assert!(errors.is_empty());

        errors.add("email", "cannot be empty");
        errors.add("state", "must be a valid US State Code");
        errors.add("email", "is invalid");

        assert_eq!(errors.len(), 3);
        assert!(!errors.is_empty());
        assert_eq!(errors.on("email"), vec!["cannot be empty", "is invalid"]);
        assert!(errors.on("zip").is_empty());
    }

    #[test]
    fn test_full_messages() {
        let mut errors = ValidationErrors::new();
        errors.add("routing_number", "is invalid");
        assert_eq!(errors.full_messages(), vec!["routing_number is invalid"]);
    }

    #[test]
    fn test_boxed_collector() {
        let mut boxed: Box<dyn ErrorCollector> = Box::new(ValidationErrors::new());
        assert!(boxed.is_empty());
        boxed.add("zip", "cannot be empty");
        assert!(!boxed.is_empty());
    }

    #[test]
    fn test_serializes_as_list() {
        let mut errors = ValidationErrors::new();
        errors.add("zip", "cannot be empty");
        let json = serde_json::to_string(&errors).unwrap();
        assert_eq!(json, r#"[{"field":"zip","message":"cannot be empty"}]"#);
    }
}
