//! A minimal in-memory document the doodle injects into.
//!
//! Just enough DOM to hold stylesheets in the head, element trees in the
//! body and event listener registrations, and to print itself as HTML.

use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    fn attr(&self) -> String {
        format!("n{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    id: NodeId,
    pub class: &'static str,
    /// Inline `top` style, when set
    pub top: Option<String>,
    pub children: Vec<Element>,
}

impl Element {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn append(&mut self, child: Element) {
        self.children.push(child);
    }

    fn contains(&self, id: NodeId) -> bool {
        self.id == id || self.children.iter().any(|c| c.contains(id))
    }

    fn find_mut(&mut self, id: NodeId) -> Option<&mut Element> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter_mut().find_map(|c| c.find_mut(id))
    }

    /// Number of elements in this subtree, including itself.
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(Element::subtree_len).sum::<usize>()
    }

    fn write_html(&self, out: &mut String, depth: usize) -> std::fmt::Result {
        let indent = "  ".repeat(depth);
        write!(out, "{indent}<div id=\"{}\" class=\"{}\"", self.id.attr(), self.class)?;
        if let Some(top) = &self.top {
            write!(out, " style=\"top: {top}\"")?;
        }
        if self.children.is_empty() {
            return writeln!(out, "></div>");
        }
        writeln!(out, ">")?;
        for child in &self.children {
            child.write_html(out, depth + 1)?;
        }
        writeln!(out, "{indent}</div>")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listener {
    pub target: NodeId,
    pub event: String,
}

#[derive(Debug, Default)]
pub struct Document {
    styles: Vec<(NodeId, String)>,
    body: Vec<Element>,
    listeners: Vec<Listener>,
    next_id: usize,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    fn alloc(&mut self) -> NodeId {
        self.next_id += 1;
        NodeId(self.next_id)
    }

    pub fn create_element(&mut self, class: &'static str) -> Element {
        Element {
            id: self.alloc(),
            class,
            top: None,
            children: Vec::new(),
        }
    }

    pub fn append_style(&mut self, css: String) -> NodeId {
        let id = self.alloc();
        self.styles.push((id, css));
        id
    }

    pub fn remove_style(&mut self, id: NodeId) -> bool {
        let before = self.styles.len();
        self.styles.retain(|(sid, _)| *sid != id);
        self.styles.len() != before
    }

    pub fn append_to_body(&mut self, element: Element) -> NodeId {
        let id = element.id;
        self.body.push(element);
        id
    }

    /// Detach a top-level body element. Listeners inside it go with it.
    pub fn remove_from_body(&mut self, id: NodeId) -> Option<Element> {
        let pos = self.body.iter().position(|e| e.id == id)?;
        let removed = self.body.remove(pos);
        self.listeners.retain(|l| !removed.contains(l.target));
        Some(removed)
    }

    pub fn add_listener(&mut self, target: NodeId, event: &str) {
        self.listeners.push(Listener {
            target,
            event: event.to_string(),
        });
    }

    pub fn listeners(&self) -> &[Listener] {
        &self.listeners
    }

    pub fn styles(&self) -> impl Iterator<Item = &str> {
        self.styles.iter().map(|(_, css)| css.as_str())
    }

    pub fn body(&self) -> &[Element] {
        &self.body
    }

    pub fn element_mut(&mut self, id: NodeId) -> Option<&mut Element> {
        self.body.iter_mut().find_map(|e| e.find_mut(id))
    }

    /// Serialize as a standalone page.
    pub fn to_html(&self, title: &str, background: &str) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail
        let _ = self.write_html(&mut out, title, background);
        out
    }

    fn write_html(&self, out: &mut String, title: &str, background: &str) -> std::fmt::Result {
        writeln!(out, "<!DOCTYPE html>")?;
        writeln!(out, "<html>")?;
        writeln!(out, "<head>")?;
        writeln!(out, "<meta charset=\"utf-8\">")?;
        writeln!(out, "<title>{title}</title>")?;
        writeln!(
            out,
            "<style>html, body {{ margin: 0; height: 100%; overflow: hidden; background: {background}; }}</style>"
        )?;
        for (_, css) in &self.styles {
            writeln!(out, "<style>\n{css}</style>")?;
        }
        writeln!(out, "</head>")?;
        writeln!(out, "<body>")?;
        for element in &self.body {
            element.write_html(out, 0)?;
        }
        writeln!(out, "</body>")?;
        writeln!(out, "</html>")
    }
}
