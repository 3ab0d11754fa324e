// Shared fixtures for integration tests.
#![allow(dead_code)]

use meowbox_docs::router::Router;
use meowbox_docs::{FetchResponse, Fetcher, Result, Window};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// In-memory site: unknown URLs answer 404, every request is recorded.
#[derive(Default)]
pub struct MockFetcher {
    responses: HashMap<String, (u16, String)>,
    requests: Mutex<Vec<String>>,
    delay: Option<Duration>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, url: &str, body: &str) -> Self {
        self.responses.insert(url.to_string(), (200, body.to_string()));
        self
    }

    pub fn with_status(mut self, url: &str, status: u16) -> Self {
        self.responses.insert(url.to_string(), (status, String::new()));
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Everything `initialize_app` requests.
    pub fn with_bootstrap(self) -> Self {
        [
            "/js/layout.js",
            "/js/i18n.js",
            "/js/route.js",
            "/css/layout.css",
            "/css/index.css",
            "/font-awesome/css/all.min.css",
        ]
        .into_iter()
        .fold(self, |fetcher, url| fetcher.with(url, ""))
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self, url: &str) -> usize {
        self.requests().iter().filter(|r| *r == url).count()
    }
}

impl Fetcher for MockFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchResponse> {
        self.requests.lock().unwrap().push(url.to_string());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        Ok(match self.responses.get(url) {
            Some((status, body)) => FetchResponse::new(*status, body.as_bytes()),
            None => FetchResponse::not_found(),
        })
    }
}

pub fn window(fetcher: MockFetcher) -> (Window<Arc<MockFetcher>>, Arc<MockFetcher>) {
    window_with_router(fetcher, Router::default())
}

pub fn window_with_router(
    fetcher: MockFetcher,
    router: Router,
) -> (Window<Arc<MockFetcher>>, Arc<MockFetcher>) {
    let fetcher = Arc::new(fetcher);
    let window = Window::new(Arc::clone(&fetcher), router).with_navigator_language(Some("en-US"));
    (window, fetcher)
}
