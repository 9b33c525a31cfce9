//! Response types of the order tracker API
//!
//! The backend is lenient about shapes: list fields may be missing or not be
//! arrays, ids may be numbers or strings. Parsing here is equally lenient and
//! converts into validated domain types, dropping entries that cannot be
//! rendered.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use tracker_domain::{ServiceCatalog, ServiceOption, ServiceOptionId, UpdateOutcome};

use crate::error::ProtocolError;

// =============================================================================
// Service catalog
// =============================================================================

/// Body of `GET /tracker/api/orders/service-types/`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceCatalogResponse {
    #[serde(default)]
    pub service_types: Value,
    #[serde(default)]
    pub service_addons: Value,
}

/// One catalog entry as sent by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceOptionData {
    pub id: OptionIdData,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionIdData {
    Number(i64),
    Text(String),
}

impl TryFrom<ServiceOptionData> for ServiceOption {
    type Error = ProtocolError;

    fn try_from(data: ServiceOptionData) -> Result<Self, Self::Error> {
        let id = match data.id {
            OptionIdData::Number(n) => ServiceOptionId::from(n),
            OptionIdData::Text(text) => ServiceOptionId::new(text)?,
        };
        Ok(ServiceOption::new(id, data.name)?)
    }
}

impl ServiceCatalogResponse {
    pub fn from_value(value: Value) -> Result<Self, ProtocolError> {
        if !value.is_object() {
            return Err(ProtocolError::UnexpectedShape(format!(
                "catalog response must be an object, got {}",
                kind_of(&value)
            )));
        }
        Ok(serde_json::from_value(value)?)
    }

    pub fn into_catalog(self) -> ServiceCatalog {
        ServiceCatalog::new(
            parse_options(&self.service_types, "service_types"),
            parse_options(&self.service_addons, "service_addons"),
        )
    }
}

fn parse_options(value: &Value, list: &str) -> Vec<ServiceOption> {
    let Some(items) = value.as_array() else {
        if !value.is_null() {
            tracing::warn!(list, kind = kind_of(value), "Catalog list is not an array; treating as empty");
        }
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| {
            let parsed = serde_json::from_value::<ServiceOptionData>(item.clone())
                .map_err(ProtocolError::from)
                .and_then(ServiceOption::try_from);
            match parsed {
                Ok(option) => Some(option),
                Err(e) => {
                    tracing::warn!(list, error = %e, "Dropping malformed catalog entry");
                    None
                }
            }
        })
        .collect()
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// =============================================================================
// Order update
// =============================================================================

/// Body of `POST /tracker/api/orders/update-from-extraction/`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl UpdateResponse {
    pub fn from_value(value: Value) -> Result<Self, ProtocolError> {
        if !value.is_object() {
            return Err(ProtocolError::UnexpectedShape(format!(
                "update response must be an object, got {}",
                kind_of(&value)
            )));
        }
        Ok(serde_json::from_value(value)?)
    }

    pub fn into_outcome(self) -> UpdateOutcome {
        if self.success {
            UpdateOutcome::Updated
        } else {
            UpdateOutcome::Rejected { error: self.error }
        }
    }
}

// =============================================================================
// Extraction header
// =============================================================================

/// Header fields found by the extractor, embedded in the page as JSON.
///
/// Scalar values are kept as text; nulls, arrays and objects are skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionHeader {
    values: Vec<(String, String)>,
}

impl ExtractionHeader {
    pub fn parse(json: &str) -> Result<Self, ProtocolError> {
        let value: Value = serde_json::from_str(json)?;
        let Value::Object(map) = value else {
            return Err(ProtocolError::UnexpectedShape(format!(
                "extraction header must be an object, got {}",
                kind_of(&value)
            )));
        };

        let values = map
            .into_iter()
            .filter_map(|(key, value)| {
                let text = match value {
                    Value::String(s) => s,
                    Value::Number(n) => n.to_string(),
                    Value::Bool(b) => b.to_string(),
                    _ => return None,
                };
                Some((key, text))
            })
            .collect();

        Ok(Self { values })
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tracker_domain::OrderType;

    #[test]
    fn catalog_parses_both_lists() {
        let response = ServiceCatalogResponse::from_value(json!({
            "service_types": [{"id": 1, "name": "Wash"}],
            "service_addons": [{"id": 2, "name": "Wax"}]
        }))
        .unwrap();
        let catalog = response.into_catalog();

        assert_eq!(catalog.layout(OrderType::Service).names(), vec!["Wash", "Wax"]);
        assert_eq!(catalog.layout(OrderType::Sales).names(), vec!["Wax"]);
    }

    #[test]
    fn missing_or_non_array_lists_are_empty() {
        let catalog = ServiceCatalogResponse::from_value(json!({
            "service_addons": "nope"
        }))
        .unwrap()
        .into_catalog();

        assert!(catalog.is_empty());
    }

    #[test]
    fn malformed_entries_are_dropped() {
        let catalog = ServiceCatalogResponse::from_value(json!({
            "service_types": [
                {"id": 1, "name": "Wash"},
                {"id": 2},
                {"name": "No id"},
                {"id": "  ", "name": "Blank id"},
                {"id": "x7", "name": "   "},
                "garbage",
                {"id": "x8", "name": "Detailing"}
            ]
        }))
        .unwrap()
        .into_catalog();

        let names: Vec<_> = catalog.service_types.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, vec!["Wash", "Detailing"]);
        assert_eq!(catalog.service_types[1].id.as_str(), "x8");
    }

    #[test]
    fn non_object_catalog_is_an_error() {
        let err = ServiceCatalogResponse::from_value(json!([1, 2])).unwrap_err();
        assert!(matches!(err, ProtocolError::UnexpectedShape(_)));
    }

    #[test]
    fn update_success() {
        let outcome = UpdateResponse::from_value(json!({"success": true}))
            .unwrap()
            .into_outcome();
        assert_eq!(outcome, UpdateOutcome::Updated);
    }

    #[test]
    fn update_failure_carries_error() {
        let outcome = UpdateResponse::from_value(json!({"success": false, "error": "X"}))
            .unwrap()
            .into_outcome();
        assert_eq!(
            outcome,
            UpdateOutcome::Rejected {
                error: Some("X".to_string())
            }
        );
    }

    #[test]
    fn update_without_success_flag_is_rejected() {
        let outcome = UpdateResponse::from_value(json!({}))
            .unwrap()
            .into_outcome();
        assert_eq!(outcome, UpdateOutcome::Rejected { error: None });
    }

    #[test]
    fn extraction_header_keeps_scalars() {
        let header = ExtractionHeader::parse(
            r#"{"customer_name": "Jane", "gross_value": 1180.5, "items": [], "email": null}"#,
        )
        .unwrap();
        let values: Vec<_> = header.iter().collect();

        assert!(values.contains(&("customer_name", "Jane")));
        assert!(values.contains(&("gross_value", "1180.5")));
        assert_eq!(values.len(), 2);
    }

    #[test]
    fn extraction_header_must_be_object() {
        assert!(ExtractionHeader::parse("[]").is_err());
        assert!(ExtractionHeader::parse("not json").is_err());
    }
}
