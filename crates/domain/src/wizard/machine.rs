//! Step transitions
//!
//! `WizardState::handle` is the only way the wizard changes. Each event yields
//! the next state plus the effects the caller has to run; completions of those
//! effects come back in as events.

use crate::entities::TextField;
use crate::value_objects::{CustomerType, PersonalSubtype, Step};

use super::event::{Transition, UpdateOutcome, WizardEffect, WizardEvent};
use super::payload::SubmissionPayload;
use super::state::{
    CollectedFields, ErrorSlot, OptionsPanel, SubmitStatus, WizardState, SUCCESS_MESSAGE,
};
use super::validation::{validate_extracted_data, validate_step, StepOutcome};

pub const SUBMIT_REJECTED_FALLBACK: &str = "Failed to update order";

impl WizardState {
    pub fn handle(mut self, event: WizardEvent) -> Transition {
        let mut effects = Vec::new();

        match event {
            WizardEvent::Open => {
                self.reset();
                self.modal_open = true;
            }
            WizardEvent::Close => {
                self.modal_open = false;
            }
            WizardEvent::Cancel => {
                self.reset();
                self.modal_open = false;
            }
            WizardEvent::SelectCustomerType(customer_type) => {
                self.fields.customer_type = Some(customer_type);
                self.apply_customer_type();
            }
            WizardEvent::SelectPersonalSubtype(subtype) => {
                self.select_subtype(subtype);
            }
            WizardEvent::EditField { field, value } => {
                self.fields.set(field, value);
            }
            WizardEvent::ToggleService { key, checked } => {
                let rendered = self
                    .options
                    .layout()
                    .is_some_and(|layout| layout.contains(&key));
                if rendered {
                    if checked {
                        self.selected.insert(key);
                    } else {
                        self.selected.remove(&key);
                    }
                }
            }
            WizardEvent::Next => self.advance(&mut effects),
            WizardEvent::Previous => self.retreat(&mut effects),
            WizardEvent::Submit => self.submit(&mut effects),
            WizardEvent::CatalogLoaded(result) => {
                // Options are rendered fresh, so nothing stays checked.
                self.selected.clear();
                self.options = match result {
                    Ok(catalog) => OptionsPanel::Loaded(catalog.layout(self.context.order_type)),
                    Err(_) => OptionsPanel::Failed,
                };
            }
            WizardEvent::SubmissionCompleted(result) => {
                self.complete_submission(result, &mut effects);
            }
            WizardEvent::DismissBanner => {
                self.banner = None;
            }
        }

        Transition::new(self, effects)
    }

    /// Restore the seeded inputs, drop bookkeeping and go back to step 1.
    fn reset(&mut self) {
        self.fields = self.initial_fields.clone();
        self.collected = CollectedFields::default();
        self.selected.clear();
        self.banner = None;
        if self.submit == SubmitStatus::Succeeded {
            self.submit = SubmitStatus::Idle;
        }
        self.show_step(Step::CustomerType, &mut Vec::new());
    }

    /// Keep only the fields of the checked customer type.
    fn apply_customer_type(&mut self) {
        match &self.fields.customer_type {
            None => {}
            Some(CustomerType::Personal) => {
                self.fields.clear(&TextField::OrganizationName);
                self.fields.clear(&TextField::TaxNumber);
            }
            Some(CustomerType::Organization(_)) => {
                self.fields.personal_subtype = None;
            }
        }
    }

    fn select_subtype(&mut self, subtype: PersonalSubtype) {
        self.fields.personal_subtype = Some(subtype);
        self.apply_customer_type();
    }

    fn advance(&mut self, effects: &mut Vec<WizardEffect>) {
        self.errors.clear_all();

        match validate_step(self.step, &self.fields) {
            Err(err) => {
                self.errors.show(err.slot(), err.message());
            }
            Ok(outcome) => {
                if let StepOutcome::CustomerType(selection) = &outcome {
                    self.collected = CollectedFields::from_selection(selection);
                }
                if let Some(next) = self.step.next() {
                    self.show_step(next, effects);
                }
            }
        }
    }

    fn retreat(&mut self, effects: &mut Vec<WizardEffect>) {
        if let Some(previous) = self.step.previous() {
            self.show_step(previous, effects);
        }
    }

    fn show_step(&mut self, step: Step, effects: &mut Vec<WizardEffect>) {
        self.errors.clear_all();
        self.step = step;

        if step == Step::Services {
            self.options = OptionsPanel::Loading;
            self.selected.clear();
            effects.push(WizardEffect::FetchCatalog {
                csrf_token: self.context.csrf_token.clone(),
            });
        }
    }

    fn submit(&mut self, effects: &mut Vec<WizardEffect>) {
        if self.step != Step::ExtractedData || !self.submit.is_enabled() {
            return;
        }

        self.errors.clear_all();
        if let Err(err) = validate_extracted_data(&self.fields) {
            self.errors.show(err.slot(), err.message());
            return;
        }

        self.submit = SubmitStatus::Submitting;
        effects.push(WizardEffect::Submit(SubmissionPayload::from_state(self)));
    }

    fn complete_submission(
        &mut self,
        result: Result<UpdateOutcome, String>,
        effects: &mut Vec<WizardEffect>,
    ) {
        match result {
            Ok(UpdateOutcome::Updated) => {
                self.submit = SubmitStatus::Succeeded;
                self.banner = Some(SUCCESS_MESSAGE.to_string());
                effects.push(WizardEffect::ReloadPage {
                    delay_ms: self.context.reload_delay_ms,
                });
            }
            Ok(UpdateOutcome::Rejected { error }) => {
                let message = error
                    .filter(|message| !message.is_empty())
                    .unwrap_or_else(|| SUBMIT_REJECTED_FALLBACK.to_string());
                self.errors.show(ErrorSlot::Data, message);
                self.submit = SubmitStatus::Idle;
            }
            Err(detail) => {
                self.errors
                    .show(ErrorSlot::Data, format!("An error occurred: {detail}"));
                self.submit = SubmitStatus::Idle;
            }
        }
    }
}
