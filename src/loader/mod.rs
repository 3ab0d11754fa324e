// src/loader/mod.rs
//! Script and stylesheet loading with per-URL bookkeeping.
//!
//! Every URL gets one settable-once completion cell. Callers racing on the
//! same URL await the same cell, a loaded URL is never requested again, and
//! a failed one is only requested again by a later, separate call.
use crate::core::error::{AppError, Result};
use crate::core::helpers::lock;
use crate::window::{Fetcher, Window};
use futures::future::join_all;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::OnceCell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Script,
    Stylesheet,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceState {
    Requested,
    Loaded,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    pub url: String,
    pub kind: ResourceKind,
}

impl Resource {
    pub fn script(url: &str) -> Self {
        Self {
            url: url.to_string(),
            kind: ResourceKind::Script,
        }
    }

    pub fn stylesheet(url: &str) -> Self {
        Self {
            url: url.to_string(),
            kind: ResourceKind::Stylesheet,
        }
    }
}

type Signal = Arc<OnceCell<Result<()>>>;

#[derive(Debug, Default)]
pub struct ResourceRegistry {
    slots: Mutex<HashMap<String, Signal>>,
}

impl ResourceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self, url: &str) -> Option<ResourceState> {
        lock(&self.slots).get(url).map(|signal| match signal.get() {
            None => ResourceState::Requested,
            Some(Ok(())) => ResourceState::Loaded,
            Some(Err(_)) => ResourceState::Failed,
        })
    }

    pub fn clear(&self) {
        lock(&self.slots).clear();
    }

    pub async fn load_script<F: Fetcher>(&self, window: &Window<F>, url: &str) -> Result<()> {
        self.load(window, &Resource::script(url)).await
    }

    pub async fn load_css<F: Fetcher>(&self, window: &Window<F>, url: &str) -> Result<()> {
        self.load(window, &Resource::stylesheet(url)).await
    }

    /// Loads `resource` once; concurrent callers share the same completion.
    pub async fn load<F: Fetcher>(&self, window: &Window<F>, resource: &Resource) -> Result<()> {
        let signal = self.signal_for(&resource.url);
        let outcome = signal
            .get_or_init(|| attach(window, resource))
            .await
            .clone();
        outcome
    }

    /// Starts every member concurrently and waits for all of them. A failed
    /// member does not stop the others; the first failure in list order is
    /// returned.
    pub async fn load_batch<F: Fetcher>(
        &self,
        window: &Window<F>,
        resources: &[Resource],
    ) -> Result<()> {
        join_all(resources.iter().map(|r| self.load(window, r)))
            .await
            .into_iter()
            .collect()
    }

    fn signal_for(&self, url: &str) -> Signal {
        let mut slots = lock(&self.slots);
        match slots.get(url) {
            Some(signal) if !matches!(signal.get(), Some(Err(_))) => Arc::clone(signal),
            _ => {
                let signal: Signal = Arc::new(OnceCell::new());
                slots.insert(url.to_string(), Arc::clone(&signal));
                signal
            }
        }
    }
}

async fn attach<F: Fetcher>(window: &Window<F>, resource: &Resource) -> Result<()> {
    match resource.kind {
        ResourceKind::Script => attach_script(window, &resource.url).await,
        ResourceKind::Stylesheet => attach_stylesheet(window, &resource.url).await,
    }
}

async fn attach_script<F: Fetcher>(window: &Window<F>, url: &str) -> Result<()> {
    let script = {
        let mut doc = window.document();
        let script = doc.create_element("script");
        doc.set_attribute(script, "src", url);
        doc.set_attribute(script, "async", "");
        let body = doc.body();
        doc.append_child(body, script);
        script
    };

    let loaded = matches!(window.fetcher().fetch(url).await, Ok(ref r) if r.ok());
    if !loaded {
        log::error!("[ScriptLoader] Failed to load script: {}", url);
        return Err(AppError::ResourceLoad(url.to_string()));
    }

    window
        .document()
        .remove_if(script, |el| el.tag == "script" && el.attribute("src") == Some(url));
    log::debug!("[ScriptLoader] Loaded {}", url);
    Ok(())
}

async fn attach_stylesheet<F: Fetcher>(window: &Window<F>, url: &str) -> Result<()> {
    let link = {
        let mut doc = window.document();
        let present = doc
            .stylesheet_hrefs()
            .iter()
            .any(|href| href == url || href.ends_with(url));
        if present {
            return Ok(());
        }

        let link = doc.create_element("link");
        doc.set_attribute(link, "rel", "stylesheet");
        doc.set_attribute(link, "type", "text/css");
        doc.set_attribute(link, "href", url);
        let head = doc.head();
        doc.append_child(head, link);
        link
    };

    let loaded = matches!(window.fetcher().fetch(url).await, Ok(ref r) if r.ok());
    if !loaded {
        log::error!("[StyleLoader] Failed to load CSS: {}", url);
        window
            .document()
            .remove_if(link, |el| el.tag == "link" && el.attribute("href") == Some(url));
        return Err(AppError::ResourceLoad(url.to_string()));
    }

    log::debug!("[StyleLoader] Loaded {}", url);
    Ok(())
}
