//! Service catalog entries and how they are laid out as checkboxes
//!
//! The catalog is fetched every time the services step is entered. Sales
//! orders only offer add-ons; other orders offer service types first, then a
//! divider and the add-ons when there are any.

use crate::error::DomainError;
use crate::ids::ServiceOptionId;
use crate::value_objects::OrderType;

/// Shared form field name of every service checkbox.
pub const SERVICES_FIELD: &str = "extracted_services";

/// Badge shown next to add-on entries.
pub const ADDON_BADGE: &str = "Addon";

/// A selectable catalog entry with a required id and name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceOption {
    pub id: ServiceOptionId,
    pub name: String,
}

impl ServiceOption {
    /// # Errors
    ///
    /// Returns `DomainError::Validation` when the name is blank.
    pub fn new(id: ServiceOptionId, name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation(format!(
                "service option {id} has an empty name"
            )));
        }
        Ok(Self {
            id,
            name: trimmed.to_string(),
        })
    }

    /// Deterministic checkbox element id.
    pub fn element_id(&self) -> String {
        format!("extraction_svc_{}", self.id)
    }
}

/// Which catalog list an option came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OptionKind {
    ServiceType,
    Addon,
}

impl OptionKind {
    pub fn badge(&self) -> Option<&'static str> {
        match self {
            OptionKind::ServiceType => None,
            OptionKind::Addon => Some(ADDON_BADGE),
        }
    }
}

/// Identifies one rendered checkbox.
///
/// Service types and add-ons come from separate tables, so ids alone may
/// collide between the two lists.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OptionKey {
    pub kind: OptionKind,
    pub id: ServiceOptionId,
}

impl OptionKey {
    pub fn new(kind: OptionKind, id: ServiceOptionId) -> Self {
        Self { kind, id }
    }
}

/// The combined service-type and add-on catalogs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceCatalog {
    pub service_types: Vec<ServiceOption>,
    pub service_addons: Vec<ServiceOption>,
}

impl ServiceCatalog {
    pub fn new(service_types: Vec<ServiceOption>, service_addons: Vec<ServiceOption>) -> Self {
        Self {
            service_types,
            service_addons,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.service_types.is_empty() && self.service_addons.is_empty()
    }

    /// Arrange the catalog for the given order type.
    pub fn layout(&self, order_type: OrderType) -> OptionLayout {
        if order_type.is_sales() {
            return OptionLayout {
                label: SectionLabel::AddOns,
                groups: vec![OptionGroup::new(
                    OptionKind::Addon,
                    self.service_addons.clone(),
                )],
            };
        }

        let mut groups = vec![OptionGroup::new(
            OptionKind::ServiceType,
            self.service_types.clone(),
        )];
        if !self.service_addons.is_empty() {
            groups.push(OptionGroup::new(
                OptionKind::Addon,
                self.service_addons.clone(),
            ));
        }
        OptionLayout {
            label: SectionLabel::Services,
            groups,
        }
    }
}

/// Heading above the checkbox list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionLabel {
    Services,
    AddOns,
}

impl SectionLabel {
    pub fn text(&self) -> &'static str {
        match self {
            SectionLabel::Services => "Services",
            SectionLabel::AddOns => "Add-ons",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionGroup {
    pub kind: OptionKind,
    pub options: Vec<ServiceOption>,
}

impl OptionGroup {
    fn new(kind: OptionKind, options: Vec<ServiceOption>) -> Self {
        Self { kind, options }
    }

    /// Checkboxes of this group in document order.
    pub fn entries(&self) -> impl Iterator<Item = RenderedOption> + '_ {
        self.options.iter().map(move |option| RenderedOption {
            key: OptionKey::new(self.kind, option.id.clone()),
            element_id: option.element_id(),
            field_name: SERVICES_FIELD,
            value: option.name.clone(),
            badge: self.kind.badge(),
        })
    }
}

/// Rendering plan for the services step. Groups are separated by a divider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionLayout {
    pub label: SectionLabel,
    pub groups: Vec<OptionGroup>,
}

/// A single checkbox as it appears in the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedOption {
    pub key: OptionKey,
    pub element_id: String,
    pub field_name: &'static str,
    /// Submitted value (the option name)
    pub value: String,
    pub badge: Option<&'static str>,
}

impl OptionLayout {
    pub fn has_divider(&self) -> bool {
        self.groups.len() > 1
    }

    /// Every checkbox in document order.
    pub fn entries(&self) -> Vec<RenderedOption> {
        self.groups.iter().flat_map(OptionGroup::entries).collect()
    }

    pub fn names(&self) -> Vec<String> {
        self.entries().into_iter().map(|entry| entry.value).collect()
    }

    pub fn contains(&self, key: &OptionKey) -> bool {
        self.groups.iter().any(|group| {
            group.kind == key.kind && group.options.iter().any(|option| option.id == key.id)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn option(id: i64, name: &str) -> ServiceOption {
        ServiceOption::new(ServiceOptionId::from(id), name).unwrap()
    }

    fn wash_and_wax() -> ServiceCatalog {
        ServiceCatalog::new(vec![option(1, "Wash")], vec![option(2, "Wax")])
    }

    #[test]
    fn service_orders_list_services_then_addons() {
        let layout = wash_and_wax().layout(OrderType::Service);

        assert_eq!(layout.label, SectionLabel::Services);
        assert_eq!(layout.names(), vec!["Wash", "Wax"]);
        assert!(layout.has_divider());
    }

    #[test]
    fn sales_orders_list_only_addons() {
        let layout = wash_and_wax().layout(OrderType::Sales);

        assert_eq!(layout.label.text(), "Add-ons");
        assert_eq!(layout.names(), vec!["Wax"]);
        assert!(!layout.has_divider());
    }

    #[test]
    fn no_divider_without_addons() {
        let catalog = ServiceCatalog::new(vec![option(1, "Wash")], Vec::new());
        let layout = catalog.layout(OrderType::Service);

        assert_eq!(layout.names(), vec!["Wash"]);
        assert!(!layout.has_divider());
    }

    #[test]
    fn addons_without_services_still_follow_a_divider() {
        let catalog = ServiceCatalog::new(Vec::new(), vec![option(2, "Wax")]);
        let layout = catalog.layout(OrderType::Service);

        assert_eq!(layout.names(), vec!["Wax"]);
        assert!(layout.has_divider());
        assert_eq!(layout.groups[0].entries().count(), 0);
    }

    #[test]
    fn entries_carry_ids_field_name_and_badges() {
        let entries = wash_and_wax().layout(OrderType::Service).entries();

        assert_eq!(entries[0].element_id, "extraction_svc_1");
        assert_eq!(entries[0].field_name, "extracted_services");
        assert_eq!(entries[0].badge, None);
        assert_eq!(entries[1].element_id, "extraction_svc_2");
        assert_eq!(entries[1].badge, Some("Addon"));
    }

    #[test]
    fn colliding_ids_are_distinct_keys() {
        let catalog = ServiceCatalog::new(vec![option(1, "Wash")], vec![option(1, "Polish")]);
        let entries = catalog.layout(OrderType::Service).entries();

        assert_ne!(entries[0].key, entries[1].key);
    }

    #[test]
    fn blank_names_rejected() {
        assert!(ServiceOption::new(ServiceOptionId::from(3), "   ").is_err());
    }

    #[test]
    fn names_are_trimmed() {
        assert_eq!(option(4, "  Tyre change ").name, "Tyre change");
    }
}
