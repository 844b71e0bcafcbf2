//! In-process model of the host page.
//!
//! Wraps a parsed html5ever document and exposes only the DOM capabilities
//! the site adapters and renderer need. Writes are strictly additive:
//! fragments are parsed and appended as the last children of an element,
//! mirroring `insertAdjacentHTML('beforeend', ...)`.

use std::cell::RefCell;
use std::rc::Rc;

use ego_tree::{NodeId, NodeRef, Tree};
use scraper::{ElementRef, Html, Node, Selector};

/// The host page shared between the host's own scripts and the overlay.
///
/// Single-threaded by construction; borrows must never be held across an
/// `.await`.
pub type SharedPage = Rc<RefCell<HostPage>>;

/// Opaque reference to an element of a [`HostPage`].
///
/// Only meaningful for the page that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementHandle(NodeId);

#[derive(Debug)]
pub struct HostPage {
    origin: String,
    document: Html,
    modals: Vec<String>,
}

impl HostPage {
    /// Parses `html` as the document loaded at `origin`.
    #[must_use]
    pub fn parse(origin: impl Into<String>, html: &str) -> Self {
        Self {
            origin: origin.into(),
            document: Html::parse_document(html),
            modals: Vec::new(),
        }
    }

    #[must_use]
    pub fn into_shared(self) -> SharedPage {
        Rc::new(RefCell::new(self))
    }

    /// Scheme + host the page was served from, e.g. `https://postmates.com`.
    #[must_use]
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// `content` attribute of the first `meta[property=...]` tag.
    #[must_use]
    pub fn meta_content(&self, property: &str) -> Option<String> {
        self.elements()
            .filter(|e| e.value().name() == "meta")
            .find(|e| e.value().attr("property") == Some(property))?
            .value()
            .attr("content")
            .map(str::to_owned)
    }

    /// First element in document order carrying `class`.
    #[must_use]
    pub fn first_by_class(&self, class: &str) -> Option<ElementHandle> {
        self.elements()
            .find(|e| e.value().classes().any(|c| c == class))
            .map(|e| ElementHandle(e.id()))
    }

    /// All elements named `tag`, in document order.
    #[must_use]
    pub fn elements_by_tag(&self, tag: &str) -> Vec<ElementHandle> {
        self.elements()
            .filter(|e| e.value().name().eq_ignore_ascii_case(tag))
            .map(|e| ElementHandle(e.id()))
            .collect()
    }

    /// First element matching a CSS selector. An invalid selector matches nothing.
    #[must_use]
    pub fn query_selector(&self, css: &str) -> Option<ElementHandle> {
        let selector = Selector::parse(css).ok()?;
        self.document
            .select(&selector)
            .next()
            .map(|e| ElementHandle(e.id()))
    }

    /// Number of elements matching a CSS selector.
    #[must_use]
    pub fn count_matching(&self, css: &str) -> usize {
        Selector::parse(css).map_or(0, |selector| self.document.select(&selector).count())
    }

    /// Concatenated text of the element and all its descendants.
    #[must_use]
    pub fn text_content(&self, element: ElementHandle) -> Option<String> {
        let node = self.document.tree.get(element.0)?;
        ElementRef::wrap(node).map(|e| e.text().collect())
    }

    /// Walks `levels` parent elements up from `element`.
    ///
    /// Returns `None` if the walk leaves the element tree before `levels`
    /// steps.
    #[must_use]
    pub fn ancestor(&self, element: ElementHandle, levels: usize) -> Option<ElementHandle> {
        let mut node = self.document.tree.get(element.0)?;
        for _ in 0..levels {
            node = node.parent()?;
            if !node.value().is_element() {
                return None;
            }
        }
        Some(ElementHandle(node.id()))
    }

    /// Parses `html` as a fragment and appends it inside `element`, after
    /// its existing children.
    ///
    /// Returns `false` without touching the document if `element` no
    /// longer resolves to an element.
    pub fn insert_before_end(&mut self, element: ElementHandle, html: &str) -> bool {
        let resolves = self
            .document
            .tree
            .get(element.0)
            .is_some_and(|n| n.value().is_element());
        if !resolves {
            return false;
        }
        let fragment = Html::parse_fragment(html);
        graft(&mut self.document.tree, element.0, *fragment.root_element());
        true
    }

    /// Appends `html` to `<body>`.
    pub fn append_to_body(&mut self, html: &str) -> bool {
        match self.elements_by_tag("body").first() {
            Some(&body) => self.insert_before_end(body, html),
            None => false,
        }
    }

    /// Registers the modal-presentation widget against a container selector.
    pub fn attach_modal(&mut self, container_selector: &str) {
        self.modals.push(container_selector.to_owned());
    }

    /// Container selectors the modal widget has been attached to.
    #[must_use]
    pub fn attached_modals(&self) -> &[String] {
        &self.modals
    }

    /// Serializes the current document, appended fragments included.
    #[must_use]
    pub fn html(&self) -> String {
        self.document.html()
    }

    fn elements(&self) -> impl Iterator<Item = ElementRef<'_>> {
        self.document
            .tree
            .root()
            .descendants()
            .filter_map(ElementRef::wrap)
    }
}

/// Deep-copies the children of `source` under `parent`, preserving order.
fn graft(tree: &mut Tree<Node>, parent: NodeId, source: NodeRef<'_, Node>) {
    for child in source.children() {
        let Some(mut target) = tree.get_mut(parent) else {
            return;
        };
        let copied = target.append(child.value().clone()).id();
        graft(tree, copied, child);
    }
}
