//! Error types produced by the domain services.
//!
//! The REST layer translates these into HTTP responses; nothing here knows
//! about status codes.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Validation messages keyed by input field.
///
/// Serializes as a bare mapping, e.g. `{"email": ["Missing data for required
/// field."]}`, so a client can attach each message to the field it belongs to.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message against a field
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0.entry(field.to_string()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[cfg(test)]
    pub fn contains_field(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", field, messages.join(", "))?;
            first = false;
        }
        Ok(())
    }
}

/// Errors a domain service can return
#[derive(Debug, Error)]
pub enum DomainError {
    /// Input failed validation; carries field-keyed messages
    #[error("validation failed: {0}")]
    Validation(FieldErrors),

    /// A referenced entity does not exist
    #[error("{0}")]
    NotFound(String),

    /// The requested change would violate a uniqueness rule
    #[error("{0}")]
    Conflict(String),

    /// The product is not currently linked to the order
    #[error("{0}")]
    NotAssociated(String),

    /// Unexpected storage failure
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

impl DomainError {
    pub fn not_found(entity: &str, id: i64) -> Self {
        Self::NotFound(format!("{} not found: {}", entity, id))
    }
}
