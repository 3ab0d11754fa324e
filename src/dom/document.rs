use super::element::{escape_attr, escape_text, Element, NodeId};

#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Option<Element>>,
    /// Slots released by removed subtrees, reused by `create_element`.
    free: Vec<NodeId>,
    head: NodeId,
    body: NodeId,
    title: String,
    lang: String,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self {
            nodes: vec![Some(Element::new("head")), Some(Element::new("body"))],
            free: Vec::new(),
            head: 0,
            body: 1,
            title: String::new(),
            lang: String::new(),
        }
    }

    pub fn head(&self) -> NodeId {
        self.head
    }

    pub fn body(&self) -> NodeId {
        self.body
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    /// Value of `<html lang>`.
    pub fn lang(&self) -> &str {
        &self.lang
    }

    pub fn set_lang(&mut self, lang: &str) {
        self.lang = lang.to_string();
    }

    /// Ids of removed nodes are recycled, so an id is only meaningful while
    /// its node is alive.
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        if let Some(node) = self.free.pop() {
            self.nodes[node] = Some(Element::new(tag));
            return node;
        }
        self.nodes.push(Some(Element::new(tag)));
        self.nodes.len() - 1
    }

    /// Size of the node arena, live and free slots included.
    pub fn slot_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn element(&self, node: NodeId) -> Option<&Element> {
        self.nodes.get(node).and_then(Option::as_ref)
    }

    pub fn element_mut(&mut self, node: NodeId) -> Option<&mut Element> {
        self.nodes.get_mut(node).and_then(Option::as_mut)
    }

    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if self.element(parent).is_none() || self.element(child).is_none() || parent == child {
            return;
        }
        self.detach(child);
        if let Some(el) = self.element_mut(child) {
            el.parent = Some(parent);
        }
        if let Some(el) = self.element_mut(parent) {
            el.inner_html = None;
            el.text = None;
            el.children.push(child);
        }
    }

    /// Removes `node` and its subtree from the document.
    pub fn remove(&mut self, node: NodeId) {
        if node == self.head || node == self.body {
            return;
        }
        self.detach(node);
        self.drop_subtree(node);
    }

    /// Removes `node` only if it still satisfies `still_same`, for callers
    /// holding an id across an `.await`.
    pub fn remove_if(&mut self, node: NodeId, still_same: impl FnOnce(&Element) -> bool) -> bool {
        if !self.element(node).is_some_and(still_same) {
            return false;
        }
        self.remove(node);
        true
    }

    /// Equivalent of `innerHTML = ""`.
    pub fn clear_children(&mut self, node: NodeId) {
        let children = match self.element_mut(node) {
            Some(el) => {
                el.inner_html = None;
                el.text = None;
                std::mem::take(&mut el.children)
            }
            None => return,
        };
        for child in children {
            self.drop_subtree(child);
        }
    }

    pub fn set_inner_html(&mut self, node: NodeId, html: &str) {
        self.clear_children(node);
        if let Some(el) = self.element_mut(node) {
            el.inner_html = Some(html.to_string());
        }
    }

    pub fn set_text(&mut self, node: NodeId, text: &str) {
        self.clear_children(node);
        if let Some(el) = self.element_mut(node) {
            el.text = Some(text.to_string());
        }
    }

    pub fn set_id(&mut self, node: NodeId, id: &str) {
        if let Some(el) = self.element_mut(node) {
            el.id = Some(id.to_string());
        }
    }

    pub fn add_class(&mut self, node: NodeId, class: &str) {
        if let Some(el) = self.element_mut(node) {
            if !el.has_class(class) {
                el.classes.push(class.to_string());
            }
        }
    }

    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        if let Some(el) = self.element_mut(node) {
            el.attributes.insert(name.to_string(), value.to_string());
        }
    }

    pub fn set_style(&mut self, node: NodeId, property: &str, value: &str) {
        if let Some(el) = self.element_mut(node) {
            el.style.insert(property.to_string(), value.to_string());
        }
    }

    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.live_nodes()
            .find(|(_, el)| el.id.as_deref() == Some(id))
            .map(|(node, _)| node)
    }

    pub fn get_elements_by_class(&self, class: &str) -> Vec<NodeId> {
        self.live_nodes()
            .filter(|(_, el)| el.has_class(class))
            .map(|(node, _)| node)
            .collect()
    }

    pub fn get_elements_by_tag(&self, tag: &str) -> Vec<NodeId> {
        self.live_nodes()
            .filter(|(_, el)| el.tag == tag)
            .map(|(node, _)| node)
            .collect()
    }

    /// `href` values of every `<link rel="stylesheet">`.
    pub fn stylesheet_hrefs(&self) -> Vec<String> {
        self.live_nodes()
            .filter(|(_, el)| el.tag == "link" && el.attribute("rel") == Some("stylesheet"))
            .filter_map(|(_, el)| el.attribute("href").map(str::to_string))
            .collect()
    }

    pub fn text_of(&self, node: NodeId) -> Option<&str> {
        self.element(node).and_then(|el| el.text.as_deref())
    }

    pub fn to_html(&self) -> String {
        let mut out = String::from("<!DOCTYPE html>\n");
        if self.lang.is_empty() {
            out.push_str("<html>");
        } else {
            out.push_str(&format!("<html lang=\"{}\">", escape_attr(&self.lang)));
        }
        out.push_str("<head>");
        if !self.title.is_empty() {
            out.push_str(&format!("<title>{}</title>", escape_text(&self.title)));
        }
        self.write_children(self.head, &mut out);
        out.push_str("</head>");
        self.write_node(self.body, &mut out);
        out.push_str("</html>\n");
        out
    }

    /// Serialises a single subtree.
    pub fn outer_html(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.write_node(node, &mut out);
        out
    }

    fn write_node(&self, node: NodeId, out: &mut String) {
        let Some(el) = self.element(node) else {
            return;
        };
        out.push_str(&el.open_tag());
        if el.is_void() {
            return;
        }
        if let Some(html) = &el.inner_html {
            out.push_str(html);
        } else if let Some(text) = &el.text {
            out.push_str(&escape_text(text));
        }
        self.write_children(node, out);
        out.push_str(&format!("</{}>", el.tag));
    }

    fn write_children(&self, node: NodeId, out: &mut String) {
        if let Some(el) = self.element(node) {
            for child in &el.children {
                self.write_node(*child, out);
            }
        }
    }

    fn live_nodes(&self) -> impl Iterator<Item = (NodeId, &Element)> {
        self.nodes
            .iter()
            .enumerate()
            .filter_map(|(i, el)| el.as_ref().map(|el| (i, el)))
            .filter(move |(i, _)| self.is_attached(*i))
    }

    fn is_attached(&self, mut node: NodeId) -> bool {
        loop {
            if node == self.head || node == self.body {
                return true;
            }
            match self.element(node).and_then(|el| el.parent) {
                Some(parent) => node = parent,
                None => return false,
            }
        }
    }

    fn detach(&mut self, node: NodeId) {
        let parent = self.element(node).and_then(|el| el.parent);
        if let Some(parent) = parent {
            if let Some(p) = self.element_mut(parent) {
                p.children.retain(|c| *c != node);
            }
        }
        if let Some(el) = self.element_mut(node) {
            el.parent = None;
        }
    }

    fn drop_subtree(&mut self, node: NodeId) {
        let children = match self.nodes.get_mut(node).and_then(Option::take) {
            Some(el) => el.children,
            None => return,
        };
        self.free.push(node);
        for child in children {
            self.drop_subtree(child);
        }
    }
}
