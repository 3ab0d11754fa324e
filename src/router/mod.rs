// src/router/mod.rs
//! Fragment router: decides between redirect, static page, Markdown content
//! and the 404 page for the current `location.hash`.
mod guard;
mod parse;

pub use guard::{InFlight, NavigationToken};
pub use parse::{parse_fragment, RedirectStyle, Route};

use crate::content;
use crate::core::constants::DEFAULT_CONTENT_DIR;
use crate::core::error::AppError;
use crate::dom::Document;
use crate::i18n::get_browser_language;
use crate::pages;
use crate::window::{Fetcher, Window};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Renders a known page into the document for the given language.
pub type PageHandler = fn(&mut Document, &str);

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Redirected(String),
    StaticPage(String),
    /// Markdown rendered from this path.
    Content(String),
    /// Content failed and the inline error panel is showing.
    Failed(AppError),
    NotFound,
    /// Another navigation held the token.
    Ignored,
}

pub struct Router {
    redirect: RedirectStyle,
    content_dir: String,
    pages: HashMap<&'static str, PageHandler>,
    in_flight: InFlight,
    dispatches: AtomicUsize,
}

impl Default for Router {
    fn default() -> Self {
        Self::new(RedirectStyle::Index, DEFAULT_CONTENT_DIR)
    }
}

impl Router {
    pub fn new(redirect: RedirectStyle, content_dir: &str) -> Self {
        let mut router = Self {
            redirect,
            content_dir: content_dir.to_string(),
            pages: HashMap::new(),
            in_flight: InFlight::default(),
            dispatches: AtomicUsize::new(0),
        };
        router.register_page("index.html", pages::index::handle_index);
        router
    }

    pub fn from_config(config: &crate::core::config::Config) -> Self {
        Self::new(config.router.redirect.clone(), &config.docs.content_dir)
    }

    pub fn register_page(&mut self, name: &'static str, handler: PageHandler) {
        self.pages.insert(name, handler);
    }

    pub fn redirect_style(&self) -> &RedirectStyle {
        &self.redirect
    }

    pub fn content_dir(&self) -> &str {
        &self.content_dir
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.is_held()
    }

    /// Number of dispatches that actually ran (ignored calls excluded).
    pub fn dispatch_count(&self) -> usize {
        self.dispatches.load(Ordering::SeqCst)
    }

    /// Routes the window's current fragment.
    pub async fn route<F: Fetcher>(&self, window: &Window<F>) -> Outcome {
        let Some(_token) = self.in_flight.acquire() else {
            log::debug!("Navigation in flight, ignoring #{}", window.hash());
            return Outcome::Ignored;
        };
        self.dispatch(window).await
    }

    /// Sets the fragment and routes it as one navigation.
    ///
    /// While another navigation is in flight the fragment is still updated,
    /// and the queued `hashchange` picks it up afterwards.
    pub async fn navigate<F: Fetcher>(&self, window: &Window<F>, fragment: &str) -> Outcome {
        let Some(_token) = self.in_flight.acquire() else {
            window.set_hash(fragment);
            return Outcome::Ignored;
        };
        window.replace_hash(fragment);
        self.dispatch(window).await
    }

    async fn dispatch<F: Fetcher>(&self, window: &Window<F>) -> Outcome {
        self.dispatches.fetch_add(1, Ordering::SeqCst);
        let hash = window.hash();

        let route = parse_fragment(&hash, &self.redirect);
        match &route {
            Route::Root => {
                let lang = get_browser_language(window.navigator_language());
                let target = self.redirect.target(lang);
                log::info!("Redirecting to {}", target);
                window.redirect(&target);
                Outcome::Redirected(target)
            }
            Route::Page { lang, page, .. } => {
                if let Some(handler) = self.pages.get(page.as_str()) {
                    window.set_router_links(Vec::new());
                    let mut doc = window.document();
                    doc.set_lang(lang);
                    handler(&mut *doc, lang);
                    return Outcome::StaticPage(page.clone());
                }

                let path = route.path().unwrap_or_default();
                let md_path = content::md_path_in(&self.content_dir, &path);
                {
                    let mut doc = window.document();
                    doc.set_lang(lang);
                    content::ensure_container(&mut doc);
                }
                match content::show_content(window, &md_path).await {
                    Ok(()) => Outcome::Content(md_path),
                    Err(e) => Outcome::Failed(e),
                }
            }
            Route::NoMatch => {
                log::info!("No route for #{}", hash.trim_start_matches('#'));
                window.set_router_links(Vec::new());
                pages::not_found::show(window).await;
                Outcome::NotFound
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_is_a_static_page() {
        let router = Router::default();
        assert!(router.pages.contains_key("index.html"));
        assert_eq!(router.content_dir(), "/markdown");
        assert_eq!(router.dispatch_count(), 0);
        assert!(!router.is_in_flight());
    }
}
