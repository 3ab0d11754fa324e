use crate::core::constants::BACKGROUND_IMAGE;
use crate::dom::{Document, NodeId};
use crate::window::ensure_page;

/// Landing page: themed background and an empty index container.
pub fn handle_index(doc: &mut Document, lang: &str) {
    let page = ensure_page(doc);
    doc.clear_children(page);
    apply_background(doc, page);

    let container = doc.create_element("div");
    doc.add_class(container, "container-index");
    doc.set_attribute(container, "data-lang", lang);
    doc.append_child(page, container);
}

pub(crate) fn apply_background(doc: &mut Document, page: NodeId) {
    doc.set_style(
        page,
        "background",
        &format!("url('{}') no-repeat center center fixed", BACKGROUND_IMAGE),
    );
    doc.set_style(page, "background-size", "cover");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_single_container() {
        let mut doc = Document::new();
        handle_index(&mut doc, "en");
        handle_index(&mut doc, "ja");

        let containers = doc.get_elements_by_class("container-index");
        assert_eq!(containers.len(), 1);
        let el = doc.element(containers[0]).unwrap();
        assert_eq!(el.attribute("data-lang"), Some("ja"));

        let page = doc.get_element_by_id("page").unwrap();
        let style = &doc.element(page).unwrap().style;
        assert_eq!(style.get("background-size").map(String::as_str), Some("cover"));
    }
}
