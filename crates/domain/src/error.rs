//! Unified error types for the domain layer
//!
//! Provides a common error type for value-object construction and parsing,
//! plus the user-facing [`ValidationError`] produced by the per-step validators.

use std::fmt;

use thiserror::Error;

use crate::wizard::ErrorSlot;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Invalid ID format
    #[error("Invalid ID format: {0}")]
    InvalidId(String),

    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Creates a validation error for rule violations.
    ///
    /// # Example
    /// ```ignore
    /// if name.trim().is_empty() {
    ///     return Err(DomainError::validation("Option name cannot be empty"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an invalid ID error
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    /// Create a parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}

/// A failed step check, shown inline in one error slot.
///
/// Several failures for the same step are aggregated into a single message
/// joined with `"; "`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    slot: ErrorSlot,
    messages: Vec<String>,
}

impl ValidationError {
    pub fn new(slot: ErrorSlot, message: impl Into<String>) -> Self {
        Self {
            slot,
            messages: vec![message.into()],
        }
    }

    /// Build from collected failures. Returns `None` when nothing failed.
    pub fn from_messages(slot: ErrorSlot, messages: Vec<String>) -> Option<Self> {
        if messages.is_empty() {
            None
        } else {
            Some(Self { slot, messages })
        }
    }

    pub fn slot(&self) -> ErrorSlot {
        self.slot
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// The message as displayed in the error slot.
    pub fn message(&self) -> String {
        self.messages.join("; ")
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ValidationError {}
