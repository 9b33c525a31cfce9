//! Customer type radio values and the validated selection built from them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Value of the `extracted_customer_type` radio.
///
/// Only `personal` has special meaning; every other value (company, ngo,
/// government, ...) is an organization kind and keeps its raw value so it can
/// be submitted unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CustomerType {
    Personal,
    Organization(String),
}

impl CustomerType {
    pub const PERSONAL: &'static str = "personal";

    pub fn is_personal(&self) -> bool {
        matches!(self, CustomerType::Personal)
    }

    /// The radio value as submitted.
    pub fn as_value(&self) -> &str {
        match self {
            CustomerType::Personal => Self::PERSONAL,
            CustomerType::Organization(kind) => kind,
        }
    }
}

impl FromStr for CustomerType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        if value.is_empty() {
            return Err(DomainError::parse("customer type cannot be empty"));
        }
        if value == Self::PERSONAL {
            Ok(CustomerType::Personal)
        } else {
            Ok(CustomerType::Organization(value.to_string()))
        }
    }
}

impl TryFrom<String> for CustomerType {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<CustomerType> for String {
    fn from(value: CustomerType) -> Self {
        value.as_value().to_string()
    }
}

impl fmt::Display for CustomerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_value())
    }
}

/// Value of the `extracted_personal_subtype` radio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonalSubtype {
    Owner,
    Driver,
}

impl PersonalSubtype {
    pub const ALL: [PersonalSubtype; 2] = [PersonalSubtype::Owner, PersonalSubtype::Driver];

    pub fn as_value(&self) -> &'static str {
        match self {
            PersonalSubtype::Owner => "owner",
            PersonalSubtype::Driver => "driver",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PersonalSubtype::Owner => "Owner",
            PersonalSubtype::Driver => "Driver",
        }
    }
}

impl FromStr for PersonalSubtype {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "owner" => Ok(PersonalSubtype::Owner),
            "driver" => Ok(PersonalSubtype::Driver),
            other => Err(DomainError::parse(format!(
                "unknown personal subtype: {other}"
            ))),
        }
    }
}

impl fmt::Display for PersonalSubtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_value())
    }
}

/// The validated outcome of step 1. Exactly one variant is active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CustomerTypeSelection {
    Personal {
        subtype: PersonalSubtype,
    },
    Organization {
        kind: String,
        name: String,
        tax_number: String,
    },
}

impl CustomerTypeSelection {
    pub fn customer_type(&self) -> CustomerType {
        match self {
            CustomerTypeSelection::Personal { .. } => CustomerType::Personal,
            CustomerTypeSelection::Organization { kind, .. } => {
                CustomerType::Organization(kind.clone())
            }
        }
    }
}
