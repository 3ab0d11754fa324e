use crate::window::RouterLink;
use regex::{Captures, Regex};
use std::sync::LazyLock;

static ANCHOR_HREF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(<a\b[^>]*?\bhref=")([^"]*)(")"#).expect("anchor pattern is valid")
});

/// Fragment an internal link should route to, or `None` for links the
/// browser keeps handling (absolute URLs, `mailto:`, in-page anchors).
///
/// `guide/setup.md` -> `#/guide/setup.html`
pub fn rewire_target(href: &str) -> Option<String> {
    if href.is_empty() || href.starts_with('#') || href.starts_with("//") || has_scheme(href) {
        return None;
    }
    if !(href.ends_with(".md") || href.contains('/')) {
        return None;
    }

    let target = match href.strip_suffix(".md") {
        Some(stem) => format!("{}.html", stem),
        None => href.to_string(),
    };
    let target = target.strip_prefix("./").unwrap_or(&target);
    let target = if target.starts_with('/') {
        target.to_string()
    } else {
        format!("/{}", target)
    };
    Some(format!("#{}", target))
}

fn has_scheme(href: &str) -> bool {
    match href.find(':') {
        Some(colon) => !href[..colon].contains('/'),
        None => false,
    }
}

/// Rewrites every internal anchor in `html` to a router fragment and marks
/// it with `data-router-link`.
pub fn rewire_links(html: &str) -> (String, Vec<RouterLink>) {
    let mut links = Vec::new();
    let rewritten = ANCHOR_HREF.replace_all(html, |caps: &Captures| {
        let href = &caps[2];
        match rewire_target(href) {
            Some(fragment) => {
                let out = format!("{}{}\" data-router-link=\"true", &caps[1], fragment);
                links.push(RouterLink {
                    original: href.to_string(),
                    fragment,
                });
                format!("{}{}", out, &caps[3])
            }
            None => caps[0].to_string(),
        }
    });
    (rewritten.into_owned(), links)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn targets() {
        assert_eq!(rewire_target("en/guide.md").as_deref(), Some("#/en/guide.html"));
        assert_eq!(rewire_target("/en/guide.md").as_deref(), Some("#/en/guide.html"));
        assert_eq!(rewire_target("./en/guide.md").as_deref(), Some("#/en/guide.html"));
        assert_eq!(rewire_target("guide.md").as_deref(), Some("#/guide.html"));
        assert_eq!(rewire_target("en/about.html").as_deref(), Some("#/en/about.html"));
    }

    #[test]
    fn browser_handled_links() {
        for href in [
            "",
            "#top",
            "https://example.com/a.md",
            "//cdn.example.com/x",
            "mailto:me@example.com",
            "about.html",
        ] {
            assert_eq!(rewire_target(href), None, "{href}");
        }
    }

    #[test]
    fn rewires_anchor_markup() {
        let html = r#"<p><a href="en/install.md">Install</a> <a href="https://x.dev/">x</a></p>"#;
        let (out, links) = rewire_links(html);
        assert_eq!(
            out,
            r##"<p><a href="#/en/install.html" data-router-link="true">Install</a> <a href="https://x.dev/">x</a></p>"##
        );
        assert_eq!(
            links,
            vec![RouterLink {
                original: "en/install.md".into(),
                fragment: "#/en/install.html".into(),
            }]
        );
    }

    #[test]
    fn keeps_other_attributes() {
        let (out, links) = rewire_links(r#"<a title="t" href="/ja/a.md">a</a>"#);
        assert_eq!(
            out,
            r##"<a title="t" href="#/ja/a.html" data-router-link="true">a</a>"##
        );
        assert_eq!(links.len(), 1);
    }
}
