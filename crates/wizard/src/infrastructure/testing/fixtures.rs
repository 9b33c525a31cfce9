//! Simple test fixtures used across unit tests.

use serde_json::{json, Value};

use tracker_domain::{FormFields, OrderType, TextField, WizardContext, WizardState};

use crate::ports::outbound::ApiError;

pub fn api_request_failed(msg: &str) -> ApiError {
    ApiError::RequestFailed(msg.to_string())
}

/// Catalog body with one service type (`Wash`) and one add-on (`Wax`).
pub fn wash_and_wax_catalog() -> Value {
    json!({
        "service_types": [{"id": 1, "name": "Wash"}],
        "service_addons": [{"id": 2, "name": "Wax"}]
    })
}

pub fn update_succeeded() -> Value {
    json!({"success": true})
}

pub fn update_rejected(error: &str) -> Value {
    json!({"success": false, "error": error})
}

/// A closed wizard for order `42` with name and phone already extracted.
pub fn seeded_wizard(order_type: OrderType) -> WizardState {
    let context = WizardContext::new("42", order_type).with_csrf_token("tok");
    let fields = FormFields::new()
        .with_text(TextField::CustomerName, "Jane Doe")
        .with_text(TextField::Phone, "0712 000 000");
    WizardState::new(context, fields)
}
