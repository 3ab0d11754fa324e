// src/server/mod.rs
//! Static docs server: site shell, assets and the 404 page.
mod handlers;
mod templates;

pub use handlers::{configure, STATIC_DIRS};
pub use templates::{SiteTemplates, Template};

use crate::assets::DocsAssets;
use crate::core::config::Config;
use crate::core::constants::DEFAULT_DOCS_VERSION;
use crate::core::error::{AppError, Result};
use crate::router::RedirectStyle;
use actix_web::{middleware, web, App, HttpServer};

/// Shared per-process state handed to every worker.
#[derive(Debug)]
pub struct ServerState {
    pub assets: DocsAssets,
    pub templates: SiteTemplates,
    pub version: String,
}

impl ServerState {
    pub fn new(assets: DocsAssets, version: &str) -> Self {
        Self {
            templates: SiteTemplates::new(assets.clone()),
            assets,
            version: version.to_string(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let version = match &config.router.redirect {
            RedirectStyle::Versioned(version) => version.as_str(),
            RedirectStyle::Index => DEFAULT_DOCS_VERSION,
        };
        Self::new(DocsAssets::from_dir(config.docs.dir.clone()), version)
    }
}

/// Binds and serves until SIGINT/SIGTERM.
pub async fn run(config: &Config) -> Result<()> {
    let state = web::Data::new(ServerState::from_config(config));
    let log_requests = config.logging.log_requests;
    let (host, port) = config.bind_address();

    let server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(middleware::Condition::new(
                log_requests,
                middleware::Logger::new("[Web Access] %a \"%r\" %s %b %Dms"),
            ))
            .wrap(middleware::Compress::default())
            .configure(configure)
    })
    .workers(config.server.workers)
    .shutdown_timeout(config.server.shutdown_timeout)
    .bind((host.as_str(), port))
    .map_err(|e| AppError::Server(format!("Bind to {}:{} failed: {}", host, port, e)))?;

    log::info!("Listening on http://{}:{}", host, port);
    server
        .run()
        .await
        .map_err(|e| AppError::Server(e.to_string()))?;

    log::info!("Server stopped");
    Ok(())
}
