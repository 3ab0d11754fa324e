use crate::assets::DocsAssets;
use crate::dom::escape_text;
use crate::i18n::{languages_json, set_translations};
use tokio::sync::OnceCell;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    Index,
    NotFound,
    /// Client-side language tables, filled from the embedded i18n tables.
    I18nScript,
}

impl Template {
    pub fn file(self) -> &'static str {
        match self {
            Self::Index => "/index.html",
            Self::NotFound => "/404.html",
            Self::I18nScript => "/js/i18n.js",
        }
    }
}

/// HTML templates read from the docs tree on first use.
#[derive(Debug)]
pub struct SiteTemplates {
    assets: DocsAssets,
    index: OnceCell<Option<String>>,
    not_found: OnceCell<Option<String>>,
    i18n_script: OnceCell<Option<String>>,
}

impl SiteTemplates {
    pub fn new(assets: DocsAssets) -> Self {
        Self {
            assets,
            index: OnceCell::new(),
            not_found: OnceCell::new(),
            i18n_script: OnceCell::new(),
        }
    }

    /// Fills `{{LANG}}`, `{{VERSION}}` and every `{{<i18n key>}}` for `lang`;
    /// the script template gets `{{LANGUAGES}}` instead. `None` when the
    /// template is missing.
    pub async fn render(&self, template: Template, lang: &str, version: &str) -> Option<String> {
        let cell = match template {
            Template::Index => &self.index,
            Template::NotFound => &self.not_found,
            Template::I18nScript => &self.i18n_script,
        };
        let source = cell
            .get_or_init(|| async {
                let text = self.assets.read_to_string(template.file()).await;
                if text.is_none() {
                    log::error!("Template {} missing from docs tree", template.file());
                }
                text
            })
            .await
            .as_deref()?;

        if template == Template::I18nScript {
            return Some(source.replace("{{LANGUAGES}}", &languages_json()));
        }

        let mut html = source
            .replace("{{LANG}}", lang)
            .replace("{{VERSION}}", version);
        for (key, text) in set_translations(lang).iter() {
            html = html.replace(&format!("{{{{{}}}}}", key), &escape_text(text));
        }
        Some(html)
    }
}
