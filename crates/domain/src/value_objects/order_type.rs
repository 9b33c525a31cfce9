use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Kind of the order being corrected, read from the page's `order_type` field.
///
/// Sales orders only offer add-ons; every other order type offers service
/// types followed by add-ons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderType {
    #[default]
    Service,
    Sales,
    #[serde(other)]
    Other,
}

impl OrderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderType::Service => "service",
            OrderType::Sales => "sales",
            OrderType::Other => "other",
        }
    }

    pub fn is_sales(&self) -> bool {
        matches!(self, OrderType::Sales)
    }

    /// Parse the hidden field value, falling back to `service` when absent.
    pub fn from_field(value: Option<&str>) -> Self {
        value
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .and_then(|v| v.parse().ok())
            .unwrap_or_default()
    }
}

impl FromStr for OrderType {
    type Err = std::convert::Infallible;

    /// Never fails: unrecognised order types behave like service orders.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "service" => OrderType::Service,
            "sales" => OrderType::Sales,
            _ => OrderType::Other,
        })
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_defaults_to_service() {
        assert_eq!(OrderType::from_field(None), OrderType::Service);
        assert_eq!(OrderType::from_field(Some("  ")), OrderType::Service);
    }

    #[test]
    fn sales_is_recognised() {
        assert!(OrderType::from_field(Some("sales")).is_sales());
        assert!(OrderType::from_field(Some("SALES")).is_sales());
    }

    #[test]
    fn unknown_type_is_not_sales() {
        let order_type = OrderType::from_field(Some("inquiry"));
        assert_eq!(order_type, OrderType::Other);
        assert!(!order_type.is_sales());
    }
}
