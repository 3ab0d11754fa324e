use super::links::rewire_links;
use super::paths::page_title_from_path;
use crate::core::constants::{CONTENT_ID, PAGE_ID};
use crate::core::error::{AppError, Result};
use crate::dom::{Document, NodeId};
use crate::i18n::{set_translations, KEY_RETURN_HOME};
use crate::window::{ensure_page, Fetcher, Window};

/// Returns the `content` render target, creating it inside `page` when absent.
pub fn ensure_container(doc: &mut Document) -> NodeId {
    if let Some(content) = doc.get_element_by_id(CONTENT_ID) {
        return content;
    }
    let page = ensure_page(doc);
    doc.clear_children(page);
    let content = doc.create_element("div");
    doc.set_id(content, CONTENT_ID);
    doc.add_class(content, "container-content");
    doc.append_child(page, content);
    content
}

/// Fetches `path`, renders it and swaps it into `#content`.
pub async fn load_page_content<F: Fetcher>(window: &Window<F>, path: &str) -> Result<()> {
    let Some(renderer) = window.renderer() else {
        return Err(AppError::Configuration(
            "Markdown renderer is not available".into(),
        ));
    };
    if window.document().get_element_by_id(CONTENT_ID).is_none() {
        return Err(AppError::Configuration(format!(
            "Content container #{} not found",
            CONTENT_ID
        )));
    }

    let response = window.fetcher().fetch(path).await?;
    if !response.ok() {
        return Err(AppError::ContentFetch {
            path: path.to_string(),
            status: response.status,
        });
    }

    let html = renderer.parse(&response.text());
    let (html, links) = rewire_links(&html);

    let mut doc = window.document();
    // The container may have been replaced while the fetch was pending.
    let Some(content) = doc.get_element_by_id(CONTENT_ID) else {
        return Err(AppError::Configuration(format!(
            "Content container #{} not found",
            CONTENT_ID
        )));
    };
    doc.set_inner_html(content, &html);
    doc.set_title(&page_title_from_path(path));
    drop(doc);

    log::debug!("Rendered {} ({} router links)", path, links.len());
    window.set_router_links(links);
    Ok(())
}

/// [`load_page_content`], rendering the inline error panel on failure.
pub async fn show_content<F: Fetcher>(window: &Window<F>, path: &str) -> Result<()> {
    match load_page_content(window, path).await {
        Ok(()) => Ok(()),
        Err(e) => {
            log::error!("Failed to load page content: {}", e);
            render_error_panel(&mut window.document(), &e.to_string());
            window.set_router_links(Vec::new());
            Err(e)
        }
    }
}

/// Inline error view with a control that resets the fragment.
pub fn render_error_panel(doc: &mut Document, message: &str) -> NodeId {
    let host = doc
        .get_element_by_id(CONTENT_ID)
        .or_else(|| doc.get_element_by_id(PAGE_ID))
        .unwrap_or_else(|| ensure_page(doc));
    doc.clear_children(host);

    let translations = set_translations(doc.lang());

    let panel = doc.create_element("div");
    doc.add_class(panel, "error-panel");

    let icon = doc.create_element("i");
    doc.add_class(icon, "fa-solid");
    doc.add_class(icon, "fa-triangle-exclamation");
    doc.append_child(panel, icon);

    let heading = doc.create_element("h2");
    doc.set_text(heading, "Error");
    doc.append_child(panel, heading);

    let text = doc.create_element("p");
    doc.add_class(text, "error-message");
    doc.set_text(text, message);
    doc.append_child(panel, text);

    let button = doc.create_element("button");
    doc.add_class(button, "return-home-button");
    doc.set_attribute(button, "data-action", "return-home");
    doc.set_text(button, translations.get(KEY_RETURN_HOME));
    doc.append_child(panel, button);

    doc.append_child(host, panel);
    doc.set_title("Error");
    panel
}

impl<F: Fetcher> Window<F> {
    /// "Return home" control of the error panel.
    pub fn return_home(&self) {
        self.set_hash("");
    }
}
