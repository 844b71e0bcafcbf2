//! Health-inspection overlay for food-delivery restaurant pages.
//!
//! [`run`] selects a [`SiteAdapter`] from the page origin, confirms the page
//! is a restaurant page, queries the inspection dataset, and injects a
//! score badge plus a detail table into the [`HostPage`].

pub mod converge;
pub mod execute;
pub mod markup;
pub mod page;
pub mod render;
pub mod sites;

pub use converge::{converge, spawn_convergence, RetryBudget};
pub use execute::{run, ExecuteOutcome};
pub use page::{ElementHandle, HostPage, SharedPage};
pub use render::{render_error, render_success};
pub use sites::{RestaurantPage, SiteAdapter};
