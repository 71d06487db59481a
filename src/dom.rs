//! Host document abstraction.
//!
//! SYSTEM CONTEXT
//! ==============
//! The notification helpers never touch a global document. They describe the
//! nodes they need as [`Element`] values and mutate the page through a [`Dom`]
//! handle, so the same logic drives the browser (`browser::WebDom`) and the
//! in-memory [`MemoryDom`] used by tests.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

use crate::error::DomError;

/// Handle to a node attached to (or discovered in) a host document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

impl NodeId {
    #[must_use]
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Declarative description of a node to insert.
///
/// `text` becomes a text node, never parsed markup.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub style: Vec<(String, String)>,
    pub text: Option<String>,
    pub children: Vec<Element>,
}

impl Element {
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into(), ..Self::default() }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Add one or more whitespace-separated classes.
    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        for name in class.split_whitespace() {
            if !self.has_class(name) {
                self.classes.push(name.to_owned());
            }
        }
        self
    }

    #[must_use]
    pub fn with_style(mut self, property: &str, value: &str) -> Self {
        self.set_style(property, value);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    #[must_use]
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    #[must_use]
    pub fn style_value(&self, property: &str) -> Option<&str> {
        self.style
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }

    /// Set an inline declaration, replacing an earlier value for `property`.
    pub fn set_style(&mut self, property: &str, value: &str) {
        if let Some(slot) = self.style.iter_mut().find(|(p, _)| p == property) {
            slot.1 = value.to_owned();
        } else {
            self.style.push((property.to_owned(), value.to_owned()));
        }
    }

    /// Depth-first search over this element and its descendants.
    pub fn find(&self, pred: &impl Fn(&Element) -> bool) -> Option<&Element> {
        if pred(self) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(pred))
    }

    /// Concatenated text of this element and its descendants.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = self.text.clone().unwrap_or_default();
        for child in &self.children {
            out.push_str(&child.text_content());
        }
        out
    }
}

/// Mutable view of a host document.
///
/// Lookups take `&mut self` because a host may need to register the nodes it
/// discovers before handing out ids for them.
pub trait Dom {
    /// Build `element` and append it to the document body.
    ///
    /// # Errors
    ///
    /// Returns [`DomError`] when the host cannot create or attach the node.
    fn append(&mut self, element: &Element) -> Result<NodeId, DomError>;

    /// Detach `node`. Returns `false` when it was not attached.
    fn remove(&mut self, node: NodeId) -> bool;

    /// First attached node whose id attribute equals `id`.
    fn find_by_id(&mut self, id: &str) -> Option<NodeId>;

    /// Attached nodes carrying `class`, in document order.
    fn query_class(&mut self, class: &str) -> Vec<NodeId>;

    /// Apply an inline style declaration to `node`.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::Style`] when the host rejects the declaration.
    fn set_style(&mut self, node: NodeId, property: &str, value: &str) -> Result<(), DomError>;
}

/// In-memory [`Dom`]: a flat list of top-level body children.
///
/// Only appended nodes are addressable; their children are plain data.
#[derive(Debug, Default)]
pub struct MemoryDom {
    nodes: Vec<(NodeId, Element)>,
    next_id: u64,
}

impl MemoryDom {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, node: NodeId) -> Option<&Element> {
        self.nodes
            .iter()
            .find(|(id, _)| *id == node)
            .map(|(_, el)| el)
    }

    #[must_use]
    pub fn contains(&self, node: NodeId) -> bool {
        self.get(node).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of attached nodes carrying `class`.
    #[must_use]
    pub fn count_class(&self, class: &str) -> usize {
        self.nodes.iter().filter(|(_, el)| el.has_class(class)).count()
    }

    #[must_use]
    pub fn style_of(&self, node: NodeId, property: &str) -> Option<&str> {
        self.get(node).and_then(|el| el.style_value(property))
    }

    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.nodes.iter().map(|(_, el)| el)
    }
}

impl Dom for MemoryDom {
    fn append(&mut self, element: &Element) -> Result<NodeId, DomError> {
        self.next_id += 1;
        let id = NodeId(self.next_id);
        self.nodes.push((id, element.clone()));
        Ok(id)
    }

    fn remove(&mut self, node: NodeId) -> bool {
        let before = self.nodes.len();
        self.nodes.retain(|(id, _)| *id != node);
        self.nodes.len() != before
    }

    fn find_by_id(&mut self, id: &str) -> Option<NodeId> {
        self.nodes
            .iter()
            .find(|(_, el)| el.id.as_deref() == Some(id))
            .map(|(node, _)| *node)
    }

    fn query_class(&mut self, class: &str) -> Vec<NodeId> {
        self.nodes
            .iter()
            .filter(|(_, el)| el.has_class(class))
            .map(|(node, _)| *node)
            .collect()
    }

    fn set_style(&mut self, node: NodeId, property: &str, value: &str) -> Result<(), DomError> {
        // Styling a detached node is a silent no-op in a real document.
        if let Some((_, el)) = self.nodes.iter_mut().find(|(id, _)| *id == node) {
            el.set_style(property, value);
        }
        Ok(())
    }
}
