// 404 view with a live language selector.
use super::index::apply_background;
use crate::dom::{Document, NodeId};
use crate::i18n::{
    get_available_languages, get_browser_language, set_translations, KEY_GO_HOME,
    KEY_NOT_FOUND_MESSAGE, KEY_NOT_FOUND_TITLE,
};
use crate::loader::Resource;
use crate::window::{ensure_page, Fetcher, Window};

pub const SCRIPT_URL: &str = "/js/404.js";
pub const STYLESHEET_URL: &str = "/css/404.css";

const TITLE_CLASS: &str = "title-404";
const MESSAGE_CLASS: &str = "message-404";
const BUTTON_TEXT_CLASS: &str = "go-home-button-text";
const SELECT_CLASS: &str = "lang-select-404";

/// Loads the 404 assets and replaces the page with the not-found view.
pub async fn show<F: Fetcher>(window: &Window<F>) {
    let assets = [
        Resource::script(SCRIPT_URL),
        Resource::stylesheet(STYLESHEET_URL),
    ];
    if let Err(e) = window.resources().load_batch(window, &assets).await {
        log::warn!("404 assets unavailable, rendering unstyled: {}", e);
    }

    let lang = get_browser_language(window.navigator_language());
    let mut doc = window.document();
    build(&mut doc, lang);
}

/// Builds the view into `#page` using `lang` for every string.
pub fn build(doc: &mut Document, lang: &str) -> NodeId {
    let translations = set_translations(lang);
    doc.set_lang(lang);
    doc.set_title(translations.get(KEY_NOT_FOUND_TITLE));

    let page = ensure_page(doc);
    doc.clear_children(page);
    apply_background(doc, page);

    let container = element(doc, "div", &["container-404"]);
    let icon = element(doc, "i", &["fa-solid", "fa-compact-disc"]);
    doc.append_child(container, icon);

    let right = element(doc, "div", &["right-container-404"]);

    let h1 = element(doc, "h1", &[TITLE_CLASS]);
    doc.set_text(h1, translations.get(KEY_NOT_FOUND_TITLE));
    doc.append_child(right, h1);

    let p = element(doc, "p", &[MESSAGE_CLASS]);
    doc.set_text(p, translations.get(KEY_NOT_FOUND_MESSAGE));
    doc.append_child(right, p);

    let button = element(doc, "button", &["go-home-button"]);
    doc.set_attribute(button, "data-action", "go-home");
    let button_icon = element(doc, "i", &["fa-solid", "fa-arrow-left"]);
    doc.append_child(button, button_icon);
    let button_text = element(doc, "span", &[BUTTON_TEXT_CLASS]);
    doc.set_text(button_text, translations.get(KEY_GO_HOME));
    doc.append_child(button, button_text);
    doc.append_child(right, button);

    let lang_select = element(doc, "div", &[SELECT_CLASS]);
    let select = doc.create_element("select");
    for language in get_available_languages() {
        let option = doc.create_element("option");
        doc.set_attribute(option, "value", language.code);
        if language.code == lang {
            doc.set_attribute(option, "selected", "selected");
        }
        doc.set_text(option, language.name);
        doc.append_child(select, option);
    }
    doc.append_child(lang_select, select);
    doc.append_child(right, lang_select);

    doc.append_child(container, right);
    doc.append_child(page, container);
    container
}

/// Selector `change` handler: swaps every visible string in place.
///
/// Returns `false` when no 404 view is mounted.
pub fn change_language(doc: &mut Document, code: &str) -> bool {
    let Some(h1) = first_by_class(doc, TITLE_CLASS) else {
        return false;
    };
    let translations = set_translations(code);

    doc.set_lang(code);
    doc.set_title(translations.get(KEY_NOT_FOUND_TITLE));
    doc.set_text(h1, translations.get(KEY_NOT_FOUND_TITLE));
    if let Some(p) = first_by_class(doc, MESSAGE_CLASS) {
        doc.set_text(p, translations.get(KEY_NOT_FOUND_MESSAGE));
    }
    if let Some(text) = first_by_class(doc, BUTTON_TEXT_CLASS) {
        doc.set_text(text, translations.get(KEY_GO_HOME));
    }

    for option in doc.get_elements_by_tag("option") {
        let selected = doc
            .element(option)
            .and_then(|el| el.attribute("value"))
            .is_some_and(|value| value == code);
        if let Some(el) = doc.element_mut(option) {
            if selected {
                el.attributes.insert("selected".into(), "selected".into());
            } else {
                el.attributes.remove("selected");
            }
        }
    }
    true
}

/// "Go home" control: clear the fragment and reload the site root.
pub async fn go_home<F: Fetcher>(window: &Window<F>) -> crate::core::error::Result<()> {
    window.reload("/");
    crate::app::initialize_app(window).await.map(|_| ())
}

fn element(doc: &mut Document, tag: &str, classes: &[&str]) -> NodeId {
    let node = doc.create_element(tag);
    for class in classes {
        doc.add_class(node, class);
    }
    node
}

fn first_by_class(doc: &Document, class: &str) -> Option<NodeId> {
    doc.get_elements_by_class(class).into_iter().next()
}
