//! Wizard controller
//!
//! Owns the store holding the current [`WizardState`] and drives effects to
//! completion. Events are applied synchronously; effects run asynchronously
//! and their completion events are applied when they arrive.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use tracker_domain::{WizardEffect, WizardEvent, WizardState};

use super::executor::EffectExecutor;

/// Somewhere the current wizard state lives.
///
/// The UI keeps it in a reactive signal; tests keep it in a plain cell.
pub trait WizardStore: Clone {
    /// Apply one event and return the effects it produced.
    fn apply(&mut self, event: WizardEvent) -> Vec<WizardEffect>;

    fn snapshot(&self) -> WizardState;
}

impl WizardStore for Rc<RefCell<WizardState>> {
    fn apply(&mut self, event: WizardEvent) -> Vec<WizardEffect> {
        let mut state = self.borrow_mut();
        let (next, effects) = state.clone().handle(event).into_parts();
        *state = next;
        effects
    }

    fn snapshot(&self) -> WizardState {
        self.borrow().clone()
    }
}

#[derive(Clone)]
pub struct WizardController<S: WizardStore> {
    store: S,
    executor: EffectExecutor,
}

impl<S: WizardStore> WizardController<S> {
    pub fn new(store: S, executor: EffectExecutor) -> Self {
        Self { store, executor }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Apply an event and return the effects still to run.
    pub fn dispatch(&mut self, event: WizardEvent) -> Vec<WizardEffect> {
        let name = event_name(&event);
        let effects = self.store.apply(event);
        tracing::debug!(event = name, effects = effects.len(), "Wizard transition");
        effects
    }

    /// Run an effect and every effect its completion leads to.
    pub async fn run_effect(&mut self, effect: WizardEffect) {
        let mut queue = VecDeque::from([effect]);
        while let Some(effect) = queue.pop_front() {
            if let Some(event) = self.executor.execute(effect).await {
                queue.extend(self.dispatch(event));
            }
        }
    }

    /// Apply an event and run its effects one after another.
    pub async fn handle(&mut self, event: WizardEvent) {
        for effect in self.dispatch(event) {
            self.run_effect(effect).await;
        }
    }
}

fn event_name(event: &WizardEvent) -> &'static str {
    match event {
        WizardEvent::Open => "open",
        WizardEvent::Close => "close",
        WizardEvent::Cancel => "cancel",
        WizardEvent::SelectCustomerType(_) => "select_customer_type",
        WizardEvent::SelectPersonalSubtype(_) => "select_personal_subtype",
        WizardEvent::EditField { .. } => "edit_field",
        WizardEvent::ToggleService { .. } => "toggle_service",
        WizardEvent::Next => "next",
        WizardEvent::Previous => "previous",
        WizardEvent::Submit => "submit",
        WizardEvent::CatalogLoaded(_) => "catalog_loaded",
        WizardEvent::SubmissionCompleted(_) => "submission_completed",
        WizardEvent::DismissBanner => "dismiss_banner",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use futures_util::future::FutureExt;
    use tracker_domain::wizard::{OptionsPanel, SUCCESS_MESSAGE};
    use tracker_domain::{
        CustomerType, ErrorSlot, OptionKey, OptionKind, OrderType, PersonalSubtype,
        ServiceOptionId, Step, SubmitStatus,
    };

    use crate::infrastructure::testing::{fixtures, FakeApi};
    use crate::ports::outbound::MockPlatformPort;

    type TestController = WizardController<Rc<RefCell<WizardState>>>;

    fn platform_without_reload() -> MockPlatformPort {
        let mut platform = MockPlatformPort::new();
        platform
            .expect_sleep_ms()
            .returning(|_| async {}.boxed_local());
        platform.expect_reload_page().returning(|| false);
        platform
    }

    fn controller(api: &FakeApi, order_type: OrderType) -> TestController {
        let executor = EffectExecutor::new(
            Arc::new(api.clone()),
            Arc::new(platform_without_reload()),
        );
        let store = Rc::new(RefCell::new(fixtures::seeded_wizard(order_type)));
        WizardController::new(store, executor)
    }

    async fn to_services_step(controller: &mut TestController) {
        controller.handle(WizardEvent::Open).await;
        controller
            .handle(WizardEvent::SelectCustomerType(CustomerType::Personal))
            .await;
        controller
            .handle(WizardEvent::SelectPersonalSubtype(PersonalSubtype::Owner))
            .await;
        controller.handle(WizardEvent::Next).await;
    }

    fn option(kind: OptionKind, id: i64) -> OptionKey {
        OptionKey::new(kind, ServiceOptionId::from(id))
    }

    #[tokio::test]
    async fn full_flow_submits_selected_services() {
        let api = FakeApi::new();
        api.push_get(Ok(fixtures::wash_and_wax_catalog()));
        api.push_post(Ok(fixtures::update_succeeded()));
        let mut controller = controller(&api, OrderType::Service);

        to_services_step(&mut controller).await;
        let state = controller.store().snapshot();
        assert_eq!(state.step(), Step::Services);
        assert!(matches!(state.options(), OptionsPanel::Loaded(_)));

        for key in [
            option(OptionKind::ServiceType, 1),
            option(OptionKind::Addon, 2),
        ] {
            controller
                .handle(WizardEvent::ToggleService { key, checked: true })
                .await;
        }
        controller.handle(WizardEvent::Next).await;
        controller.handle(WizardEvent::Submit).await;

        let posts = api.posts();
        assert_eq!(posts.len(), 1);
        let payload = &posts[0].payload;
        assert_eq!(payload.get("extracted_services"), Some("Wash,Wax"));
        assert_eq!(payload.get("extracted_customer_type"), Some("personal"));
        assert_eq!(payload.get("extracted_personal_subtype"), Some("owner"));
        assert_eq!(payload.get("order_id"), Some("42"));

        let state = controller.store().snapshot();
        assert_eq!(state.submit_status(), SubmitStatus::Succeeded);
        assert_eq!(state.banner(), Some(SUCCESS_MESSAGE));
        // Desktop has no page to reload, so the wizard closes instead.
        assert!(!state.is_open());
    }

    #[tokio::test]
    async fn banner_outlives_close_until_reopened() {
        let api = FakeApi::new();
        api.push_get(Ok(fixtures::wash_and_wax_catalog()));
        api.push_post(Ok(fixtures::update_succeeded()));
        let mut controller = controller(&api, OrderType::Service);

        to_services_step(&mut controller).await;
        controller.handle(WizardEvent::Next).await;
        controller.handle(WizardEvent::Submit).await;

        let state = controller.store().snapshot();
        assert!(!state.is_open());
        assert_eq!(state.banner(), Some(SUCCESS_MESSAGE));

        controller.handle(WizardEvent::Open).await;
        let state = controller.store().snapshot();
        assert!(state.is_open());
        assert_eq!(state.step(), Step::CustomerType);
        assert_eq!(state.banner(), None);
    }

    #[tokio::test]
    async fn sales_orders_list_addons_only() {
        let api = FakeApi::new();
        api.push_get(Ok(fixtures::wash_and_wax_catalog()));
        let mut controller = controller(&api, OrderType::Sales);

        to_services_step(&mut controller).await;

        let state = controller.store().snapshot();
        let layout = state.options().layout().cloned().unwrap();
        assert_eq!(layout.names(), vec!["Wax".to_string()]);
    }

    #[tokio::test]
    async fn catalog_failure_shows_failed_options() {
        let api = FakeApi::new();
        api.push_get(Err(fixtures::api_request_failed("offline")));
        let mut controller = controller(&api, OrderType::Service);

        to_services_step(&mut controller).await;

        let state = controller.store().snapshot();
        assert_eq!(state.options(), &OptionsPanel::Failed);
        assert_eq!(state.step(), Step::Services);
    }

    #[tokio::test]
    async fn rejected_update_reenables_submit() {
        let api = FakeApi::new();
        api.push_get(Ok(fixtures::wash_and_wax_catalog()));
        api.push_post(Ok(fixtures::update_rejected("Order is closed")));
        let mut controller = controller(&api, OrderType::Service);

        to_services_step(&mut controller).await;
        controller.handle(WizardEvent::Next).await;
        controller.handle(WizardEvent::Submit).await;

        let state = controller.store().snapshot();
        assert_eq!(state.error(ErrorSlot::Data), Some("Order is closed"));
        assert_eq!(state.submit_status(), SubmitStatus::Idle);
        assert!(state.is_open());
    }

    #[tokio::test]
    async fn transport_failure_is_reported_inline() {
        let api = FakeApi::new();
        api.push_get(Ok(fixtures::wash_and_wax_catalog()));
        api.push_post(Err(fixtures::api_request_failed("connection reset")));
        let mut controller = controller(&api, OrderType::Service);

        to_services_step(&mut controller).await;
        controller.handle(WizardEvent::Next).await;
        controller.handle(WizardEvent::Submit).await;

        let state = controller.store().snapshot();
        assert_eq!(
            state.error(ErrorSlot::Data),
            Some("An error occurred: Request failed: connection reset")
        );
        assert!(state.submit_status().is_enabled());
    }

    #[tokio::test]
    async fn each_services_visit_fetches_again() {
        let api = FakeApi::new();
        api.push_get(Ok(fixtures::wash_and_wax_catalog()));
        api.push_get(Ok(fixtures::wash_and_wax_catalog()));
        let mut controller = controller(&api, OrderType::Service);

        to_services_step(&mut controller).await;
        controller.handle(WizardEvent::Previous).await;
        controller.handle(WizardEvent::Next).await;

        assert_eq!(api.gets().len(), 2);
    }

    #[test]
    fn dispatch_returns_effects_without_running_them() {
        let api = FakeApi::new();
        let mut controller = controller(&api, OrderType::Service);

        controller.dispatch(WizardEvent::Open);
        controller.dispatch(WizardEvent::SelectCustomerType(CustomerType::Personal));
        controller.dispatch(WizardEvent::SelectPersonalSubtype(PersonalSubtype::Driver));
        let effects = controller.dispatch(WizardEvent::Next);

        assert_eq!(
            effects,
            vec![WizardEffect::FetchCatalog {
                csrf_token: Some("tok".to_string())
            }]
        );
        assert!(api.gets().is_empty());
        assert_eq!(
            controller.store().snapshot().options(),
            &OptionsPanel::Loading
        );
    }
}
