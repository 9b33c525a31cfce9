use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a catalog entry (service type or add-on).
///
/// The backend uses numeric primary keys, but the id is only ever echoed into
/// element identifiers, so it is kept in its textual form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ServiceOptionId(String);

impl ServiceOptionId {
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(DomainError::invalid_id("service option id cannot be empty"));
        }
        if trimmed.chars().any(char::is_whitespace) {
            return Err(DomainError::invalid_id(format!(
                "service option id cannot contain whitespace: {trimmed:?}"
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ServiceOptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ServiceOptionId {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

impl TryFrom<String> for ServiceOptionId {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<ServiceOptionId> for String {
    fn from(id: ServiceOptionId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_ids_render_as_text() {
        assert_eq!(ServiceOptionId::from(42).as_str(), "42");
    }

    #[test]
    fn blank_id_rejected() {
        let err = ServiceOptionId::new("  ").unwrap_err();
        assert!(matches!(err, DomainError::InvalidId(_)));
    }

    #[test]
    fn id_with_inner_whitespace_rejected() {
        assert!(ServiceOptionId::new("a b").is_err());
    }

    #[test]
    fn serde_uses_plain_string() {
        let id: ServiceOptionId = serde_json::from_str("\"7\"").unwrap();
        assert_eq!(id.as_str(), "7");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"7\"");
    }
}
