use std::fmt;

use serde::{Deserialize, Serialize};

/// One screen of the wizard. Navigation is linear; there is no skipping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum Step {
    /// Customer type
    #[default]
    CustomerType,
    /// Services and add-ons (optional)
    Services,
    /// Extracted data fields
    ExtractedData,
}

impl Step {
    pub const TOTAL: u8 = 3;
    pub const ALL: [Step; 3] = [Step::CustomerType, Step::Services, Step::ExtractedData];

    /// 1-based step number.
    pub fn number(&self) -> u8 {
        match self {
            Step::CustomerType => 1,
            Step::Services => 2,
            Step::ExtractedData => 3,
        }
    }

    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Step::CustomerType),
            2 => Some(Step::Services),
            3 => Some(Step::ExtractedData),
            _ => None,
        }
    }

    pub fn next(&self) -> Option<Self> {
        Self::from_number(self.number() + 1)
    }

    pub fn previous(&self) -> Option<Self> {
        self.number().checked_sub(1).and_then(Self::from_number)
    }

    pub fn is_first(&self) -> bool {
        self.previous().is_none()
    }

    pub fn is_last(&self) -> bool {
        self.next().is_none()
    }

    /// Element id of the step panel.
    pub fn panel_id(&self) -> String {
        format!("extractionStep{}", self.number())
    }

    pub fn title(&self) -> &'static str {
        match self {
            Step::CustomerType => "Customer Type",
            Step::Services => "Services",
            Step::ExtractedData => "Extracted Data",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "step {}", self.number())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_stays_in_range() {
        assert_eq!(Step::CustomerType.previous(), None);
        assert_eq!(Step::ExtractedData.next(), None);
        assert_eq!(Step::CustomerType.next(), Some(Step::Services));
        assert_eq!(Step::ExtractedData.previous(), Some(Step::Services));
    }

    #[test]
    fn numbers_round_trip() {
        for step in Step::ALL {
            assert_eq!(Step::from_number(step.number()), Some(step));
        }
        assert_eq!(Step::from_number(0), None);
        assert_eq!(Step::from_number(4), None);
    }

    #[test]
    fn first_and_last() {
        assert!(Step::CustomerType.is_first());
        assert!(Step::ExtractedData.is_last());
        assert!(!Step::Services.is_first());
        assert!(!Step::Services.is_last());
    }

    #[test]
    fn panel_ids() {
        assert_eq!(Step::Services.panel_id(), "extractionStep2");
    }
}
