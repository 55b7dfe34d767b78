//! Owned element tree standing in for the browser document.
//!
//! Elements carry an optional `id`, a space-separated `class_name`, ordered
//! attributes, optional text and children. Lookups walk the tree depth first.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub id: Option<String>,
    pub class_name: String,
    pub attributes: Vec<(String, String)>,
    pub text: Option<String>,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            id: None,
            class_name: String::new(),
            attributes: Vec::new(),
            text: None,
            children: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn with_class(mut self, class_name: &str) -> Self {
        self.class_name = class_name.to_string();
        self
    }

    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text = Some(text.to_string());
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Overwrite an existing attribute in place, or append it.
    pub fn set_attr(&mut self, name: &str, value: &str) {
        match self.attributes.iter_mut().find(|(key, _)| key == name) {
            Some((_, existing)) => *existing = value.to_string(),
            None => self.attributes.push((name.to_string(), value.to_string())),
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.class_name.split_whitespace().any(|c| c == class)
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        self.find(&|el| el.id.as_deref() == Some(id))
    }

    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.find_mut(&|el| el.id.as_deref() == Some(id))
    }

    /// First descendant (or self) whose `name` attribute matches.
    pub fn find_by_name(&self, name: &str) -> Option<&Element> {
        self.find(&|el| el.attr("name") == Some(name))
    }

    pub fn find_by_name_mut(&mut self, name: &str) -> Option<&mut Element> {
        self.find_mut(&|el| el.attr("name") == Some(name))
    }

    /// Detach the first descendant with the given id and return it.
    pub fn remove_by_id(&mut self, id: &str) -> Option<Element> {
        if let Some(pos) = self.children.iter().position(|c| c.id.as_deref() == Some(id)) {
            return Some(self.children.remove(pos));
        }
        self.children.iter_mut().find_map(|c| c.remove_by_id(id))
    }

    fn find(&self, pred: &dyn Fn(&Element) -> bool) -> Option<&Element> {
        if pred(self) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(pred))
    }

    fn find_mut(&mut self, pred: &dyn Fn(&Element) -> bool) -> Option<&mut Element> {
        if pred(self) {
            return Some(self);
        }
        self.children.iter_mut().find_map(|c| c.find_mut(pred))
    }

    /// Serialize to HTML. Text and attribute values are escaped; `input`
    /// renders as a void element.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        if let Some(id) = &self.id {
            push_attr(out, "id", id);
        }
        if !self.class_name.is_empty() {
            push_attr(out, "class", &self.class_name);
        }
        for (name, value) in &self.attributes {
            push_attr(out, name, value);
        }
        out.push('>');
        if self.tag == "input" {
            return;
        }
        if let Some(text) = &self.text {
            out.push_str(&escape(text));
        }
        for child in &self.children {
            child.write_html(out);
        }
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape(value));
    out.push('"');
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> Element {
        Element::new("div")
            .with_id("root")
            .with_child(
                Element::new("form")
                    .with_child(Element::new("input").with_attr("name", "email"))
                    .with_child(Element::new("span").with_id("inner")),
            )
            .with_child(Element::new("p").with_id("tail").with_text("hi"))
    }

    #[test]
    fn finds_nested_elements_by_id_and_name() {
        let root = tree();
        assert_eq!(root.find_by_id("inner").unwrap().tag, "span");
        assert_eq!(root.find_by_name("email").unwrap().tag, "input");
        assert!(root.find_by_id("missing").is_none());
    }

    #[test]
    fn set_attr_overwrites_in_place() {
        let mut el = Element::new("input").with_attr("value", "a").with_attr("type", "text");
        el.set_attr("value", "b");
        assert_eq!(el.attr("value"), Some("b"));
        assert_eq!(el.attributes.len(), 2);
    }

    #[test]
    fn remove_by_id_detaches_nested_child() {
        let mut root = tree();
        let removed = root.remove_by_id("inner").unwrap();
        assert_eq!(removed.tag, "span");
        assert!(root.find_by_id("inner").is_none());
        assert!(root.find_by_id("tail").is_some());
    }

    #[test]
    fn has_class_matches_whole_tokens() {
        let el = Element::new("div").with_class("loading-shade-create-form hidden");
        assert!(el.has_class("hidden"));
        assert!(!el.has_class("hid"));
    }

    #[test]
    fn html_escapes_text_and_attributes() {
        let el = Element::new("p")
            .with_attr("title", "a \"b\"")
            .with_text("<x> & y")
            .with_child(Element::new("input").with_attr("name", "n"));
        assert_eq!(
            el.to_html(),
            r#"<p title="a &quot;b&quot;">&lt;x&gt; &amp; y<input name="n"></p>"#
        );
    }
}
