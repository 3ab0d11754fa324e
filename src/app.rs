// src/app.rs
//! Page bootstrap: resource sequencing, page mount and the first route.
use crate::assets::DocsAssets;
use crate::core::config::Config;
use crate::core::error::Result;
use crate::loader::Resource;
use crate::router::{Outcome, Router};
use crate::window::{ensure_page, FetchResponse, Fetcher, Window};

pub const LAYOUT_SCRIPT: &str = "/js/layout.js";

/// Scripts the navigation engine provides itself. A headless window answers
/// them without touching the docs tree.
pub const NATIVE_SCRIPTS: &[&str] = &[
    LAYOUT_SCRIPT,
    "/js/i18n.js",
    "/js/route.js",
    crate::pages::not_found::SCRIPT_URL,
];

/// Resources requested during startup, in two strictly ordered stages.
#[derive(Debug, Clone)]
pub struct Bootstrap {
    pub layout: Vec<Resource>,
    pub dependent: Vec<Resource>,
}

impl Default for Bootstrap {
    fn default() -> Self {
        Self {
            layout: vec![Resource::script(LAYOUT_SCRIPT)],
            dependent: vec![
                Resource::script("/js/i18n.js"),
                Resource::script("/js/route.js"),
                Resource::stylesheet("/css/layout.css"),
                Resource::stylesheet("/css/index.css"),
                Resource::stylesheet("/font-awesome/css/all.min.css"),
            ],
        }
    }
}

/// `DOMContentLoaded` handler with the default bootstrap.
pub async fn initialize_app<F: Fetcher>(window: &Window<F>) -> Result<Outcome> {
    initialize_with(window, &Bootstrap::default()).await
}

/// Loads the layout stage, then the dependent stage, mounts `#page` and
/// routes. Any resource failure aborts before the page is created.
pub async fn initialize_with<F: Fetcher>(
    window: &Window<F>,
    bootstrap: &Bootstrap,
) -> Result<Outcome> {
    let registry = window.resources();
    let loaded = async {
        registry.load_batch(window, &bootstrap.layout).await?;
        registry.load_batch(window, &bootstrap.dependent).await
    };
    if let Err(e) = loaded.await {
        log::error!("App initialization error: {}", e);
        return Err(e);
    }

    ensure_page(&mut window.document());
    Ok(window.route().await)
}

/// Docs tree fetcher for headless runs; native scripts resolve empty.
#[derive(Debug, Clone)]
pub struct HeadlessFetcher {
    assets: DocsAssets,
}

impl HeadlessFetcher {
    pub fn new(assets: DocsAssets) -> Self {
        Self { assets }
    }
}

impl Fetcher for HeadlessFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchResponse> {
        if NATIVE_SCRIPTS.contains(&url) {
            return Ok(FetchResponse::new(200, Vec::new()));
        }
        self.assets.fetch(url).await
    }
}

/// Opens `fragment` in a headless window over the configured docs tree and
/// returns the resulting document.
pub async fn preview(config: &Config, fragment: &str, language: Option<&str>) -> Result<String> {
    let fetcher = HeadlessFetcher::new(DocsAssets::from_dir(config.docs.dir.clone()));
    let window =
        Window::new(fetcher, Router::from_config(config)).with_navigator_language(language);
    window.replace_hash(fragment);

    let outcome = initialize_app(&window).await?;
    log::info!("Initial route: {:?}", outcome);
    for outcome in window.pump_events().await {
        log::info!("Followed route: {:?}", outcome);
    }
    Ok(window.to_html())
}
