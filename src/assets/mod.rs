// src/assets/mod.rs
//! The `docs/` site tree: embedded into the binary or read from disk.
mod mime;

pub use mime::{content_type, DEFAULT_CONTENT_TYPE};

use crate::core::error::Result;
use crate::window::{FetchResponse, Fetcher};
use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::path::{Component, Path, PathBuf};

#[derive(RustEmbed)]
#[folder = "docs/"]
struct EmbeddedDocs;

#[derive(Debug, Clone)]
pub enum DocsAssets {
    Embedded,
    Directory(PathBuf),
}

impl DocsAssets {
    pub fn from_dir(dir: Option<PathBuf>) -> Self {
        match dir {
            Some(dir) => Self::Directory(dir),
            None => Self::Embedded,
        }
    }

    /// Reads `path` (relative to the docs root, leading `/` allowed).
    pub async fn read(&self, path: &str) -> Option<Cow<'static, [u8]>> {
        let relative = sanitize(path)?;
        match self {
            Self::Embedded => EmbeddedDocs::get(&relative).map(|file| file.data),
            Self::Directory(root) => {
                let full = root.join(&relative);
                match tokio::fs::read(&full).await {
                    Ok(bytes) => Some(Cow::Owned(bytes)),
                    Err(e) => {
                        log::debug!("Docs file unavailable {}: {}", full.display(), e);
                        None
                    }
                }
            }
        }
    }

    pub async fn read_to_string(&self, path: &str) -> Option<String> {
        self.read(path)
            .await
            .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
    }

    pub async fn exists(&self, path: &str) -> bool {
        self.read(path).await.is_some()
    }
}

impl Fetcher for DocsAssets {
    async fn fetch(&self, url: &str) -> Result<FetchResponse> {
        let path = url.split(['?', '#']).next().unwrap_or(url);
        Ok(match self.read(path).await {
            Some(bytes) => FetchResponse::new(200, bytes.into_owned()),
            None => FetchResponse::not_found(),
        })
    }
}

/// Strips the leading slash and rejects anything escaping the docs root.
fn sanitize(path: &str) -> Option<String> {
    let trimmed = path.trim_start_matches('/');
    if trimmed.is_empty() || trimmed.contains('\\') {
        return None;
    }
    let safe = Path::new(trimmed)
        .components()
        .all(|c| matches!(c, Component::Normal(_)));
    safe.then(|| trimmed.to_string())
}
