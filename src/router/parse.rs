use crate::core::error::{AppError, Result};

/// Where an empty fragment is sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedirectStyle {
    /// `#/<lang>/index.html`
    Index,
    /// `#/<lang>/<version>/index.html`
    Versioned(String),
}

impl RedirectStyle {
    pub fn from_config(kind: &str, version: &str) -> Result<Self> {
        match kind.trim().to_lowercase().as_str() {
            "index" => Ok(Self::Index),
            "versioned" => {
                let version = version.trim().trim_matches('/');
                if version.is_empty() || version.contains('/') {
                    return Err(AppError::Validation(format!(
                        "router.version must be a single path segment, got '{}'",
                        version
                    )));
                }
                Ok(Self::Versioned(version.to_string()))
            }
            other => Err(AppError::Validation(format!(
                "router.redirect must be \"index\" or \"versioned\", got '{}'",
                other
            ))),
        }
    }

    pub fn target(&self, lang: &str) -> String {
        match self {
            Self::Index => format!("#/{}/index.html", lang),
            Self::Versioned(version) => format!("#/{}/{}/index.html", lang, version),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Root,
    Page {
        lang: String,
        version: Option<String>,
        page: String,
    },
    NoMatch,
}

impl Route {
    /// `<lang>[/<version>]/<page>` for page routes.
    pub fn path(&self) -> Option<String> {
        match self {
            Route::Page {
                lang,
                version: Some(version),
                page,
            } => Some(format!("{}/{}/{}", lang, version, page)),
            Route::Page {
                lang,
                version: None,
                page,
            } => Some(format!("{}/{}", lang, page)),
            _ => None,
        }
    }
}

/// Parses `location.hash` into a route.
///
/// `#`, `#/` and the empty string are the root. A page is
/// `<lang>/<name>.html`, optionally followed by `?query`; the versioned
/// style also accepts `<lang>/<version>/<name>.html`.
pub fn parse_fragment(hash: &str, style: &RedirectStyle) -> Route {
    let current = hash.strip_prefix('#').unwrap_or(hash);
    let current = current.strip_prefix('/').unwrap_or(current);
    if current.is_empty() || current == "/" {
        return Route::Root;
    }

    let path = current.split('?').next().unwrap_or(current);
    let segments: Vec<&str> = path.split('/').collect();
    if segments.iter().any(|s| s.is_empty()) {
        return Route::NoMatch;
    }

    let (lang, version, page) = match (segments.as_slice(), style) {
        ([lang, page], _) => (*lang, None, *page),
        ([lang, version, page], RedirectStyle::Versioned(_)) => (*lang, Some(*version), *page),
        _ => return Route::NoMatch,
    };

    if !is_html_name(page) {
        return Route::NoMatch;
    }

    Route::Page {
        lang: lang.to_string(),
        version: version.map(str::to_string),
        page: page.to_string(),
    }
}

fn is_html_name(page: &str) -> bool {
    page.strip_suffix(".html")
        .is_some_and(|stem| !stem.is_empty())
}
