//! Places query results into the host page.

use std::rc::Rc;

use healthbadge_core::{HealthBadgeState, InspectionRecord};

use crate::converge::{spawn_convergence, RetryBudget};
use crate::markup::{
    badge_markup, detail_container, inspection_table, modal_shell, MODAL_CONTAINER_SELECTOR,
};
use crate::page::SharedPage;
use crate::sites::RestaurantPage;

/// Renders a settled query: badge, detail table, and modal wiring.
///
/// The badge goes through convergence against the restaurant's container.
/// The modal shell and detail container are appended to `<body>` straight
/// away, since the body always exists. Returns the badge state shown.
///
/// # Panics
///
/// Panics if called outside a `tokio::task::LocalSet`.
pub fn render_success(
    page: &SharedPage,
    restaurant: &RestaurantPage,
    records: &[InspectionRecord],
    budget: RetryBudget,
) -> HealthBadgeState {
    let state = HealthBadgeState::from_records(records);
    inject_badge(page, restaurant, badge_markup(state), budget);

    let table = inspection_table(records);
    let mut host = page.borrow_mut();
    host.append_to_body(&modal_shell());
    host.append_to_body(&detail_container(&table));
    host.attach_modal(MODAL_CONTAINER_SELECTOR);

    state
}

/// Renders the terminal error badge. No detail table is produced.
///
/// # Panics
///
/// Panics if called outside a `tokio::task::LocalSet`.
pub fn render_error(page: &SharedPage, restaurant: &RestaurantPage, budget: RetryBudget) {
    inject_badge(page, restaurant, badge_markup(HealthBadgeState::Error), budget);
}

fn inject_badge(page: &SharedPage, restaurant: &RestaurantPage, markup: String, budget: RetryBudget) {
    let page = Rc::clone(page);
    let restaurant = restaurant.clone();
    spawn_convergence(budget, move || {
        let mut host = page.borrow_mut();
        let Some(container) = restaurant.container_element(&host) else {
            return false;
        };
        host.insert_before_end(container, &markup)
    });
}
