// src/window/mod.rs
//! Browser window model: document, location fragment, history and the
//! navigation event queue that drives the router.
mod fetch;

pub use fetch::{FetchResponse, Fetcher};

use crate::content::{MarkdownRenderer, MarkdownRs};
use crate::core::constants::PAGE_ID;
use crate::dom::{Document, NodeId};
use crate::loader::ResourceRegistry;
use crate::router::{Outcome, Router};
use crate::core::helpers::lock;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

/// Upper bound on events handled by one `pump_events` call.
const MAX_EVENTS_PER_PUMP: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    HashChange,
    PopState,
}

/// Anchor whose default navigation is replaced by a router dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouterLink {
    pub original: String,
    pub fragment: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LinkClick {
    /// Default navigation prevented; the router handled the new fragment.
    Routed(Outcome),
    /// Plain fragment link; the browser queued a `hashchange`.
    Fragment(String),
    /// Full navigation away from the app.
    External(String),
}

pub struct Window<F: Fetcher> {
    fetcher: F,
    renderer: Option<Arc<dyn MarkdownRenderer>>,
    router: Router,
    resources: ResourceRegistry,
    navigator_language: Option<String>,
    document: Mutex<Document>,
    hash: Mutex<String>,
    history: Mutex<Vec<String>>,
    events: Mutex<VecDeque<NavEvent>>,
    router_links: Mutex<Vec<RouterLink>>,
    page_loads: Mutex<Vec<String>>,
}

impl<F: Fetcher> Window<F> {
    pub fn new(fetcher: F, router: Router) -> Self {
        Self {
            fetcher,
            renderer: Some(Arc::new(MarkdownRs::default())),
            router,
            resources: ResourceRegistry::new(),
            navigator_language: None,
            document: Mutex::new(Document::new()),
            hash: Mutex::new(String::new()),
            history: Mutex::new(Vec::new()),
            events: Mutex::new(VecDeque::new()),
            router_links: Mutex::new(Vec::new()),
            page_loads: Mutex::new(vec!["/".to_string()]),
        }
    }

    pub fn with_renderer(mut self, renderer: Option<Arc<dyn MarkdownRenderer>>) -> Self {
        self.renderer = renderer;
        self
    }

    /// Value reported as `navigator.language`.
    pub fn with_navigator_language(mut self, tag: Option<&str>) -> Self {
        self.navigator_language = tag.map(str::to_string);
        self
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    pub fn renderer(&self) -> Option<&dyn MarkdownRenderer> {
        self.renderer.as_deref()
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn resources(&self) -> &ResourceRegistry {
        &self.resources
    }

    pub fn navigator_language(&self) -> Option<&str> {
        self.navigator_language.as_deref()
    }

    /// Locks the document. Never hold the guard across an `.await`.
    pub fn document(&self) -> MutexGuard<'_, Document> {
        lock(&self.document)
    }

    pub fn to_html(&self) -> String {
        self.document().to_html()
    }

    pub fn hash(&self) -> String {
        lock(&self.hash).clone()
    }

    /// Sets `location.hash`; a change queues a `hashchange` event.
    pub fn set_hash(&self, hash: &str) {
        if self.replace_hash(hash) {
            self.push_event(NavEvent::HashChange);
        }
    }

    /// Navigation issued by the router itself that must be followed by a
    /// fresh dispatch once the current one has finished.
    pub(crate) fn redirect(&self, hash: &str) {
        self.replace_hash(hash);
        self.push_event(NavEvent::HashChange);
    }

    /// Changes the fragment without raising an event. Used by the router
    /// while it holds the navigation token.
    pub(crate) fn replace_hash(&self, hash: &str) -> bool {
        let normalized = normalize_hash(hash);
        let mut current = lock(&self.hash);
        if *current == normalized {
            return false;
        }
        let previous = std::mem::replace(&mut *current, normalized);
        lock(&self.history).push(previous);
        true
    }

    /// `history.back()`: restores the previous fragment and fires `popstate`.
    pub fn back(&self) -> bool {
        let Some(previous) = lock(&self.history).pop() else {
            return false;
        };
        *lock(&self.hash) = previous;
        self.push_event(NavEvent::PopState);
        true
    }

    fn push_event(&self, event: NavEvent) {
        lock(&self.events).push_back(event);
    }

    pub fn pending_events(&self) -> usize {
        lock(&self.events).len()
    }

    /// Runs the router for the current fragment.
    pub async fn route(&self) -> Outcome {
        self.router.route(self).await
    }

    /// Delivers queued `hashchange`/`popstate` events to the router.
    pub async fn pump_events(&self) -> Vec<Outcome> {
        let mut outcomes = Vec::new();
        for _ in 0..MAX_EVENTS_PER_PUMP {
            let Some(event) = lock(&self.events).pop_front() else {
                break;
            };
            log::debug!("Dispatching {:?} for #{}", event, self.hash());
            outcomes.push(self.route().await);
        }
        outcomes
    }

    pub(crate) fn set_router_links(&self, links: Vec<RouterLink>) {
        *lock(&self.router_links) = links;
    }

    pub fn router_links(&self) -> Vec<RouterLink> {
        lock(&self.router_links).clone()
    }

    /// Click on an anchor with the given `href` attribute.
    pub async fn click_link(&self, href: &str) -> LinkClick {
        let rewired = lock(&self.router_links)
            .iter()
            .find(|link| link.fragment == href || link.original == href)
            .cloned();

        if let Some(link) = rewired {
            return LinkClick::Routed(self.router.navigate(self, &link.fragment).await);
        }

        if href.starts_with('#') {
            self.set_hash(href);
            return LinkClick::Fragment(self.hash());
        }

        self.reload(href);
        LinkClick::External(href.to_string())
    }

    /// Full page load: the document and every loaded resource are discarded.
    pub fn reload(&self, path: &str) {
        *lock(&self.document) = Document::new();
        lock(&self.hash).clear();
        lock(&self.router_links).clear();
        lock(&self.events).clear();
        self.resources.clear();
        lock(&self.page_loads).push(path.to_string());
    }

    /// Paths of full page loads, oldest first. Starts with `/`.
    pub fn page_loads(&self) -> Vec<String> {
        lock(&self.page_loads).clone()
    }
}

/// Returns the `page` mount, creating it under `<body>` when absent.
pub fn ensure_page(doc: &mut Document) -> NodeId {
    if let Some(page) = doc.get_element_by_id(PAGE_ID) {
        return page;
    }
    let page = doc.create_element("div");
    doc.set_id(page, PAGE_ID);
    let body = doc.body();
    doc.append_child(body, page);
    page
}

fn normalize_hash(hash: &str) -> String {
    let body = hash.trim().trim_start_matches('#');
    if body.is_empty() {
        String::new()
    } else {
        format!("#{}", body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_normalisation() {
        assert_eq!(normalize_hash(""), "");
        assert_eq!(normalize_hash("#"), "");
        assert_eq!(normalize_hash("#/en/index.html"), "#/en/index.html");
        assert_eq!(normalize_hash("/en/index.html"), "#/en/index.html");
    }

    #[test]
    fn ensure_page_is_idempotent() {
        let mut doc = Document::new();
        let first = ensure_page(&mut doc);
        let second = ensure_page(&mut doc);
        assert_eq!(first, second);
        assert_eq!(doc.get_elements_by_tag("div").len(), 1);
    }
}
