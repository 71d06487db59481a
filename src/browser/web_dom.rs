//! [`Dom`] over the live browser document.
//!
//! Nodes get a [`NodeId`] when they are created here or first found by a
//! lookup. Ids are dropped on removal, so the registry only holds nodes this
//! crate still manages.

use std::collections::HashMap;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement};

use crate::dom::{Dom, Element, NodeId};
use crate::error::DomError;

pub struct WebDom {
    document: Document,
    nodes: HashMap<NodeId, web_sys::Element>,
    next_id: u64,
}

impl WebDom {
    #[must_use]
    pub fn new(document: Document) -> Self {
        Self { document, nodes: HashMap::new(), next_id: 0 }
    }

    /// The current window's document, if there is one.
    #[must_use]
    pub fn from_window() -> Option<Self> {
        web_sys::window().and_then(|w| w.document()).map(Self::new)
    }

    fn register(&mut self, element: web_sys::Element) -> NodeId {
        if let Some(id) = self
            .nodes
            .iter()
            .find(|(_, known)| **known == element)
            .map(|(id, _)| *id)
        {
            return id;
        }
        self.next_id += 1;
        let id = NodeId::new(self.next_id);
        self.nodes.insert(id, element);
        id
    }

    fn build(&self, template: &Element) -> Result<web_sys::Element, DomError> {
        let el = self
            .document
            .create_element(&template.tag)
            .map_err(|err| create_error(&template.tag, &err))?;
        if let Some(id) = &template.id {
            el.set_id(id);
        }
        if !template.classes.is_empty() {
            el.set_class_name(&template.classes.join(" "));
        }
        for (property, value) in &template.style {
            apply_style(&el, property, value)?;
        }
        if let Some(text) = &template.text {
            el.set_text_content(Some(text));
        }
        for child in &template.children {
            let child_el = self.build(child)?;
            el.append_child(&child_el)
                .map_err(|err| create_error(&child.tag, &err))?;
        }
        Ok(el)
    }
}

impl Dom for WebDom {
    fn append(&mut self, element: &Element) -> Result<NodeId, DomError> {
        let body = self.document.body().ok_or(DomError::MissingBody)?;
        let el = self.build(element)?;
        body.append_child(&el)
            .map_err(|err| create_error(&element.tag, &err))?;
        Ok(self.register(el))
    }

    fn remove(&mut self, node: NodeId) -> bool {
        let Some(el) = self.nodes.remove(&node) else {
            return false;
        };
        let attached = el.is_connected();
        el.remove();
        attached
    }

    fn find_by_id(&mut self, id: &str) -> Option<NodeId> {
        let el = self.document.get_element_by_id(id)?;
        Some(self.register(el))
    }

    fn query_class(&mut self, class: &str) -> Vec<NodeId> {
        // The collection is live; snapshot it before registering.
        let collection = self.document.get_elements_by_class_name(class);
        let found: Vec<web_sys::Element> = (0..collection.length())
            .filter_map(|i| collection.item(i))
            .collect();
        found.into_iter().map(|el| self.register(el)).collect()
    }

    fn set_style(&mut self, node: NodeId, property: &str, value: &str) -> Result<(), DomError> {
        match self.nodes.get(&node) {
            Some(el) => apply_style(el, property, value),
            None => Ok(()),
        }
    }
}

fn apply_style(el: &web_sys::Element, property: &str, value: &str) -> Result<(), DomError> {
    let html = el.dyn_ref::<HtmlElement>().ok_or_else(|| DomError::Style {
        property: property.to_owned(),
        reason: "not an HTML element".to_owned(),
    })?;
    html.style()
        .set_property(property, value)
        .map_err(|err| DomError::Style { property: property.to_owned(), reason: js_reason(&err) })
}

fn create_error(tag: &str, err: &JsValue) -> DomError {
    DomError::Create { tag: tag.to_owned(), reason: js_reason(err) }
}

pub(crate) fn js_reason(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}
