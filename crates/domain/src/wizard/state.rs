//! Wizard state and the view it implies
//!
//! `WizardState` is the single source of truth for the modal. Panel, section
//! and button visibility are derived from it rather than stored, so they can
//! never disagree with the current step or the checked customer type.

use std::collections::{BTreeMap, BTreeSet};

use crate::entities::{FormFields, OptionKey, OptionLayout, TextField};
use crate::value_objects::{CustomerType, CustomerTypeSelection, OrderType, PersonalSubtype, Step};

/// Delay between the success banner and the page reload.
pub const RELOAD_DELAY_MS: u64 = 1500;

pub const LOADING_OPTIONS_TEXT: &str = "Loading options...";
pub const OPTIONS_FAILED_TEXT: &str = "Failed to load options";
pub const SUBMIT_LABEL: &str = "Update Order";
pub const SUBMIT_BUSY_LABEL: &str = "Updating...";
pub const SUCCESS_MESSAGE: &str = "Order updated successfully!";

/// Page-level inputs the wizard is constructed with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardContext {
    pub order_id: String,
    pub order_type: OrderType,
    /// Anti-forgery token, when the page embeds one
    pub csrf_token: Option<String>,
    pub reload_delay_ms: u64,
}

impl WizardContext {
    pub fn new(order_id: impl Into<String>, order_type: OrderType) -> Self {
        Self {
            order_id: order_id.into(),
            order_type,
            csrf_token: None,
            reload_delay_ms: RELOAD_DELAY_MS,
        }
    }

    pub fn with_csrf_token(mut self, token: impl Into<String>) -> Self {
        let token = token.into();
        self.csrf_token = (!token.trim().is_empty()).then_some(token);
        self
    }

    pub fn with_reload_delay_ms(mut self, delay_ms: u64) -> Self {
        self.reload_delay_ms = delay_ms;
        self
    }
}

/// Inline error area, keyed by element id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ErrorSlot {
    /// Customer type step
    General,
    /// Extracted data step and submission
    Data,
}

impl ErrorSlot {
    pub fn element_id(&self) -> &'static str {
        match self {
            ErrorSlot::General => "extractionGeneralError",
            ErrorSlot::Data => "extractionDataError",
        }
    }
}

/// Currently shown error messages. Slots are independent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorSlots(BTreeMap<ErrorSlot, String>);

impl ErrorSlots {
    pub fn show(&mut self, slot: ErrorSlot, message: impl Into<String>) {
        self.0.insert(slot, message.into());
    }

    pub fn clear(&mut self, slot: ErrorSlot) {
        self.0.remove(&slot);
    }

    pub fn clear_all(&mut self) {
        self.0.clear();
    }

    pub fn get(&self, slot: ErrorSlot) -> Option<&str> {
        self.0.get(&slot).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Bookkeeping recorded once a step's checks pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectedFields {
    pub customer_type: Option<CustomerType>,
    pub personal_subtype: Option<PersonalSubtype>,
    pub organization_name: Option<String>,
    pub tax_number: Option<String>,
}

impl CollectedFields {
    pub fn from_selection(selection: &CustomerTypeSelection) -> Self {
        match selection {
            CustomerTypeSelection::Personal { subtype } => Self {
                customer_type: Some(CustomerType::Personal),
                personal_subtype: Some(*subtype),
                organization_name: None,
                tax_number: None,
            },
            CustomerTypeSelection::Organization {
                kind,
                name,
                tax_number,
            } => Self {
                customer_type: Some(CustomerType::Organization(kind.clone())),
                personal_subtype: None,
                organization_name: Some(name.clone()),
                tax_number: Some(tax_number.clone()),
            },
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Flat view keyed by bookkeeping name.
    pub fn as_map(&self) -> BTreeMap<&'static str, String> {
        let mut map = BTreeMap::new();
        if let Some(customer_type) = &self.customer_type {
            map.insert("customer_type", customer_type.as_value().to_string());
        }
        if let Some(subtype) = self.personal_subtype {
            map.insert("personal_subtype", subtype.as_value().to_string());
        }
        if let Some(name) = &self.organization_name {
            map.insert("organization_name", name.clone());
        }
        if let Some(tax_number) = &self.tax_number {
            map.insert("tax_number", tax_number.clone());
        }
        map
    }
}

/// Content of the services container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OptionsPanel {
    /// Never loaded
    #[default]
    Idle,
    Loading,
    Loaded(OptionLayout),
    Failed,
}

impl OptionsPanel {
    pub fn layout(&self) -> Option<&OptionLayout> {
        match self {
            OptionsPanel::Loaded(layout) => Some(layout),
            _ => None,
        }
    }
}

/// State of the submit control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    /// Saved; waiting for the reload
    Succeeded,
}

impl SubmitStatus {
    pub fn is_enabled(&self) -> bool {
        matches!(self, SubmitStatus::Idle)
    }

    pub fn label(&self) -> &'static str {
        match self {
            SubmitStatus::Idle => SUBMIT_LABEL,
            SubmitStatus::Submitting | SubmitStatus::Succeeded => SUBMIT_BUSY_LABEL,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonVisibility {
    pub previous: bool,
    pub next: bool,
    pub submit: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardState {
    pub(crate) context: WizardContext,
    pub(crate) step: Step,
    pub(crate) initial_fields: FormFields,
    pub(crate) fields: FormFields,
    pub(crate) collected: CollectedFields,
    pub(crate) errors: ErrorSlots,
    pub(crate) options: OptionsPanel,
    pub(crate) selected: BTreeSet<OptionKey>,
    pub(crate) submit: SubmitStatus,
    pub(crate) banner: Option<String>,
    pub(crate) modal_open: bool,
}

impl WizardState {
    /// A closed wizard on step 1 whose inputs start from `initial_fields`.
    pub fn new(context: WizardContext, initial_fields: FormFields) -> Self {
        Self {
            context,
            step: Step::CustomerType,
            fields: initial_fields.clone(),
            initial_fields,
            collected: CollectedFields::default(),
            errors: ErrorSlots::default(),
            options: OptionsPanel::Idle,
            selected: BTreeSet::new(),
            submit: SubmitStatus::Idle,
            banner: None,
            modal_open: false,
        }
    }

    pub fn context(&self) -> &WizardContext {
        &self.context
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn current_step(&self) -> u8 {
        self.step.number()
    }

    pub fn total_steps(&self) -> u8 {
        Step::TOTAL
    }

    pub fn is_panel_visible(&self, step: Step) -> bool {
        self.step == step
    }

    pub fn buttons(&self) -> ButtonVisibility {
        ButtonVisibility {
            previous: !self.step.is_first(),
            next: !self.step.is_last(),
            submit: self.step.is_last(),
        }
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn collected(&self) -> &CollectedFields {
        &self.collected
    }

    pub fn checked_customer_type(&self) -> Option<&CustomerType> {
        self.fields.customer_type.as_ref()
    }

    pub fn personal_section_visible(&self) -> bool {
        self.checked_customer_type()
            .is_some_and(CustomerType::is_personal)
    }

    pub fn organization_section_visible(&self) -> bool {
        self.checked_customer_type()
            .is_some_and(|customer_type| !customer_type.is_personal())
    }

    pub fn errors(&self) -> &ErrorSlots {
        &self.errors
    }

    pub fn error(&self, slot: ErrorSlot) -> Option<&str> {
        self.errors.get(slot)
    }

    pub fn options(&self) -> &OptionsPanel {
        &self.options
    }

    pub fn is_selected(&self, key: &OptionKey) -> bool {
        self.selected.contains(key)
    }

    /// Names of checked options in document order.
    pub fn selected_names(&self) -> Vec<String> {
        self.options
            .layout()
            .map(|layout| {
                layout
                    .entries()
                    .into_iter()
                    .filter(|entry| self.selected.contains(&entry.key))
                    .map(|entry| entry.value)
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn submit_status(&self) -> SubmitStatus {
        self.submit
    }

    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    pub fn is_open(&self) -> bool {
        self.modal_open
    }

    /// Text input value, as currently shown.
    pub fn field(&self, field: &TextField) -> &str {
        self.fields.get(field)
    }
}
