//! Entry point: select the adapter for the page, query, render.

use healthbadge_core::HealthBadgeState;
use healthbadge_soda::InspectionClient;

use crate::converge::RetryBudget;
use crate::page::SharedPage;
use crate::render::{render_error, render_success};
use crate::sites::SiteAdapter;

/// How a page load was handled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExecuteOutcome {
    /// The origin is not a supported delivery site.
    Unsupported,
    /// A supported site, but not a restaurant page.
    NotRestaurantPage,
    /// The query settled and rendering was started with this badge state.
    Rendered(HealthBadgeState),
}

/// Runs the overlay once for the page: picks the adapter from the page
/// origin and executes it.
///
/// Badge injection continues in the background after this returns; await
/// the surrounding `LocalSet` to let it finish.
///
/// # Panics
///
/// Panics if called outside a `tokio::task::LocalSet`.
pub async fn run(
    page: &SharedPage,
    client: &InspectionClient,
    budget: RetryBudget,
) -> ExecuteOutcome {
    let origin = page.borrow().origin().to_owned();
    let site = SiteAdapter::for_origin(&origin);
    tracing::debug!(origin = %origin, %site, "selected site adapter");
    site.execute(page, client, budget).await
}

impl SiteAdapter {
    /// Adapter entry sequence.
    ///
    /// Checks applicability once, before any network call. On a restaurant
    /// page, issues exactly one query and renders its outcome; a failed
    /// query becomes the error badge. Every returned record is rendered:
    /// the page address is logged but never used to filter the history.
    ///
    /// # Panics
    ///
    /// Panics if called outside a `tokio::task::LocalSet`.
    pub async fn execute(
        self,
        page: &SharedPage,
        client: &InspectionClient,
        budget: RetryBudget,
    ) -> ExecuteOutcome {
        if self == SiteAdapter::Unsupported {
            return ExecuteOutcome::Unsupported;
        }
        let Some(restaurant) = self.detect(&page.borrow()) else {
            tracing::debug!(site = %self, "not a restaurant page");
            return ExecuteOutcome::NotRestaurantPage;
        };

        let name = restaurant.restaurant_name().to_owned();
        match client.query(&name).await {
            Ok(records) => {
                let state = render_success(page, &restaurant, &records, budget);
                tracing::info!(
                    site = %self,
                    restaurant = %name,
                    address = restaurant.address(),
                    records = records.len(),
                    badge = ?state,
                    "rendering health badge"
                );
                ExecuteOutcome::Rendered(state)
            }
            Err(error) => {
                tracing::warn!(site = %self, restaurant = %name, %error, "inspection query failed");
                render_error(page, &restaurant, budget);
                ExecuteOutcome::Rendered(HealthBadgeState::Error)
            }
        }
    }
}
