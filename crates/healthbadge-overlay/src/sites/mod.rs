//! Per-site adapters.
//!
//! Each supported delivery site gets a variant of [`SiteAdapter`]. An adapter
//! decides whether the loaded page is a restaurant page, extracts the
//! restaurant's identity, and locates the element the badge is injected into.
//! The adapter is selected once per page load from the page origin.

mod caviar;
mod postmates;

use std::sync::LazyLock;

use healthbadge_core::RestaurantIdentity;
use regex::Regex;

use crate::page::{ElementHandle, HostPage};

static CAVIAR_ORIGIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^https?://(?:www\.)?trycaviar\.com$").expect("valid regex")
});
static POSTMATES_ORIGIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^https?://(?:www\.)?postmates\.com$").expect("valid regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiteAdapter {
    /// Any origin that is not a known delivery site. Never applicable.
    Unsupported,
    /// Caviar: metadata-driven detection, stable container class.
    Caviar,
    /// Postmates: description-pattern detection, structural container lookup.
    Postmates,
}

impl SiteAdapter {
    /// Selects the adapter for a page origin (`scheme://host`).
    #[must_use]
    pub fn for_origin(origin: &str) -> Self {
        if CAVIAR_ORIGIN_RE.is_match(origin) {
            Self::Caviar
        } else if POSTMATES_ORIGIN_RE.is_match(origin) {
            Self::Postmates
        } else {
            Self::Unsupported
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Unsupported => "unsupported",
            Self::Caviar => "caviar",
            Self::Postmates => "postmates",
        }
    }

    /// Applicability check. Reads the page without mutating it.
    ///
    /// Returns the confirmed restaurant page, with the identity extracted
    /// in the same pass, or `None` if this is not a restaurant page.
    #[must_use]
    pub fn detect(self, page: &HostPage) -> Option<RestaurantPage> {
        let identity = match self {
            Self::Unsupported => None,
            Self::Caviar => caviar::detect(page),
            Self::Postmates => postmates::detect(page),
        }?;
        Some(RestaurantPage {
            site: self,
            identity,
        })
    }

    #[must_use]
    pub fn is_restaurant_page(self, page: &HostPage) -> bool {
        self.detect(page).is_some()
    }
}

impl std::fmt::Display for SiteAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Proof that an adapter recognised the page as a restaurant page.
///
/// Only [`SiteAdapter::detect`] constructs one, so identity and container
/// lookups can never run ahead of the applicability check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestaurantPage {
    site: SiteAdapter,
    identity: RestaurantIdentity,
}

impl RestaurantPage {
    #[must_use]
    pub fn site(&self) -> SiteAdapter {
        self.site
    }

    /// Name to query the inspection dataset with.
    #[must_use]
    pub fn restaurant_name(&self) -> &str {
        &self.identity.name
    }

    /// Street address, when the site exposes one.
    #[must_use]
    pub fn address(&self) -> Option<&str> {
        self.identity.address.as_deref()
    }

    /// Element the badge goes into, or `None` if it has not rendered yet.
    #[must_use]
    pub fn container_element(&self, page: &HostPage) -> Option<ElementHandle> {
        match self.site {
            SiteAdapter::Unsupported => None,
            SiteAdapter::Caviar => caviar::container_element(page),
            SiteAdapter::Postmates => postmates::container_element(page, &self.identity.name),
        }
    }
}
