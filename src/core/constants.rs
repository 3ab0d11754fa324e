pub const APP_TITLE: &str = "MeowBox Docs";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 2230;
pub const DEFAULT_CONTENT_DIR: &str = "/markdown";
pub const DEFAULT_DOCS_VERSION: &str = "v0.1.x";

// DOM contract
pub const PAGE_ID: &str = "page";
pub const CONTENT_ID: &str = "content";

pub const BACKGROUND_IMAGE: &str = "/img/background_v0.1.x.svg";
