//! Postmates has no descriptive class names, so detection relies on the
//! wording of the Open Graph description and the container is found from
//! the page structure around the restaurant's `h1`.

use std::sync::LazyLock;

use healthbadge_core::RestaurantIdentity;
use regex::Regex;

use crate::page::{ElementHandle, HostPage};

// `CA` is followed by any single character, not only a period.
static DESCRIPTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Order Delivery from (.*?) on (.*), San Francisco, CA.").expect("valid regex")
});

/// Levels between the restaurant-name `h1` and the header container.
const CONTAINER_DEPTH: usize = 3;

pub(super) fn detect(page: &HostPage) -> Option<RestaurantIdentity> {
    let description = page.meta_content("og:description")?;
    let caps = DESCRIPTION_RE.captures(&description)?;
    let name = caps.get(1).map(|m| m.as_str()).filter(|n| !n.is_empty())?;
    let address = caps.get(2).map(|m| m.as_str().to_string());
    Some(RestaurantIdentity::new(name, address))
}

pub(super) fn container_element(page: &HostPage, restaurant_name: &str) -> Option<ElementHandle> {
    let heading = page
        .elements_by_tag("h1")
        .into_iter()
        .find(|&h| page.text_content(h).as_deref() == Some(restaurant_name))?;
    page.ancestor(heading, CONTAINER_DEPTH)
}

#[cfg(test)]
mod tests {
    use super::super::SiteAdapter;
    use super::*;

    fn page(description: &str, body: &str) -> HostPage {
        HostPage::parse(
            "https://postmates.com",
            &format!(
                r#"<html><head><meta property="og:description" content="{description}"></head><body>{body}</body></html>"#
            ),
        )
    }

    const DESCRIPTION: &str = "Order Delivery from Tasty Place on 123 Main St, San Francisco, CA.";
    const HEADER: &str =
        r#"<header id="container"><div><div><h1>Tasty Place</h1></div></div></header>"#;

    #[test]
    fn description_yields_name_and_address() {
        let page = page(DESCRIPTION, "");
        let restaurant = SiteAdapter::Postmates.detect(&page).expect("restaurant page");
        assert_eq!(restaurant.restaurant_name(), "Tasty Place");
        assert_eq!(restaurant.address(), Some("123 Main St"));
    }

    #[test]
    fn description_match_is_case_insensitive() {
        let page = page(
            "order delivery from Joe's on 9 Elm St, san francisco, ca.",
            "",
        );
        let restaurant = SiteAdapter::Postmates.detect(&page).unwrap();
        assert_eq!(restaurant.restaurant_name(), "Joe's");
        assert_eq!(restaurant.address(), Some("9 Elm St"));
    }

    #[test]
    fn any_character_may_follow_the_state() {
        for description in [
            "Order Delivery from Tasty Place on 123 Main St, San Francisco, CA!",
            "Order Delivery from Tasty Place on 123 Main St, San Francisco, CA, 94110",
        ] {
            let page = page(description, "");
            let restaurant = SiteAdapter::Postmates.detect(&page).expect(description);
            assert_eq!(restaurant.restaurant_name(), "Tasty Place");
        }
        let page = page("Order Delivery from Tasty Place on 123 Main St, San Francisco, CA", "");
        assert!(!SiteAdapter::Postmates.is_restaurant_page(&page));
    }

    #[test]
    fn other_cities_are_not_applicable() {
        let page = page("Order Delivery from Tasty Place on 1 Broadway, Oakland, CA.", "");
        assert!(!SiteAdapter::Postmates.is_restaurant_page(&page));
    }

    #[test]
    fn missing_description_is_not_applicable() {
        let page = HostPage::parse("https://postmates.com", "<html><body></body></html>");
        assert!(!SiteAdapter::Postmates.is_restaurant_page(&page));
    }

    #[test]
    fn container_is_three_levels_above_matching_heading() {
        let page = page(DESCRIPTION, &format!("<h1>Postmates</h1>{HEADER}"));
        let restaurant = SiteAdapter::Postmates.detect(&page).unwrap();
        assert_eq!(
            restaurant.container_element(&page),
            page.query_selector("#container")
        );
    }

    #[test]
    fn heading_text_must_match_exactly() {
        let page = page(
            DESCRIPTION,
            r"<header><div><div><h1>Tasty Place Express</h1></div></div></header>",
        );
        let restaurant = SiteAdapter::Postmates.detect(&page).unwrap();
        assert_eq!(restaurant.container_element(&page), None);
    }

    #[test]
    fn container_absent_before_heading_renders() {
        let page = page(DESCRIPTION, "<div id=\"root\"></div>");
        let restaurant = SiteAdapter::Postmates.detect(&page).unwrap();
        assert_eq!(restaurant.container_element(&page), None);
    }
}
