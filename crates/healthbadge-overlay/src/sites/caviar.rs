//! Caviar exposes Open Graph metadata for restaurant pages and renders the
//! merchant header under a stable class name.

use healthbadge_core::RestaurantIdentity;

use crate::page::{ElementHandle, HostPage};

const RESTAURANT_OG_TYPE: &str = "restaurant.restaurant";
const CONTAINER_CLASS: &str = "merchant_info";

pub(super) fn detect(page: &HostPage) -> Option<RestaurantIdentity> {
    if page.meta_content("og:type").as_deref() != Some(RESTAURANT_OG_TYPE) {
        return None;
    }
    let name = page.meta_content("og:title").filter(|t| !t.trim().is_empty())?;
    Some(RestaurantIdentity::new(name, None))
}

pub(super) fn container_element(page: &HostPage) -> Option<ElementHandle> {
    page.first_by_class(CONTAINER_CLASS)
}
