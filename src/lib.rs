// Module definitions
pub mod app;
pub mod assets;
pub mod content;
pub mod core;
pub mod dom;
pub mod i18n;
pub mod loader;
pub mod pages;
pub mod router;
pub mod server;
pub mod setup;
pub mod window;

// Essential re-exports
pub use app::{initialize_app, preview};
pub use core::config::Config;
pub use core::error::{AppError, Result};
pub use router::{Outcome, Router};
pub use window::{FetchResponse, Fetcher, Window};
