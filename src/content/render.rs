use markdown::{to_html_with_options, Options};

/// Markdown-to-HTML capability the content pipeline delegates to.
pub trait MarkdownRenderer: Send + Sync {
    fn parse(&self, text: &str) -> String;
}

/// GitHub-flavoured renderer backed by the `markdown` crate.
#[derive(Debug, Clone, Default)]
pub struct MarkdownRs {
    allow_html: bool,
}

impl MarkdownRs {
    /// Lets raw HTML in the Markdown source through unescaped.
    pub fn allowing_html() -> Self {
        Self { allow_html: true }
    }

    fn options(&self) -> Options {
        let mut options = Options::gfm();
        options.compile.allow_dangerous_html = self.allow_html;
        options
    }
}

impl MarkdownRenderer for MarkdownRs {
    fn parse(&self, text: &str) -> String {
        match to_html_with_options(text, &self.options()) {
            Ok(html) => html,
            Err(e) => {
                log::warn!("Markdown parse failed, falling back to CommonMark: {}", e);
                markdown::to_html(text)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_gfm() {
        let html = MarkdownRs::default().parse("# Title\n\n| a |\n|---|\n| 1 |\n");
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<table>"));
    }

    #[test]
    fn raw_html_escaped_by_default() {
        let html = MarkdownRs::default().parse("<script>x</script>");
        assert!(!html.contains("<script>"));
        let html = MarkdownRs::allowing_html().parse("<div>x</div>");
        assert!(html.contains("<div>x</div>"));
    }
}
