//! Element tree management

use rustc_hash::FxHashMap;
use slotmap::SlotMap;
use smallvec::SmallVec;

use qtrotator_core::EventType;

use crate::element::{Element, ElementId};
use crate::style::Style;

/// Owns every element and the listener registrations attached to them
#[derive(Default)]
pub struct Document {
    elements: SlotMap<ElementId, Element>,
    listeners: FxHashMap<ElementId, SmallVec<[EventType; 8]>>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a detached element
    pub fn create_element(&mut self, tag: &str) -> ElementId {
        self.elements.insert(Element::new(tag))
    }

    /// Create a detached element carrying one class
    pub fn create_with_class(&mut self, tag: &str, class: &str) -> ElementId {
        let mut element = Element::new(tag);
        element.add_class(class);
        self.elements.insert(element)
    }

    /// Append `child` as the last child of `parent`, detaching it from any
    /// previous parent first
    pub fn append_child(&mut self, parent: ElementId, child: ElementId) -> bool {
        if parent == child || !self.contains(parent) || !self.contains(child) {
            return false;
        }
        self.detach(child);
        if let Some(node) = self.elements.get_mut(child) {
            node.parent = Some(parent);
        }
        if let Some(node) = self.elements.get_mut(parent) {
            node.children.push(child);
        }
        true
    }

    fn detach(&mut self, id: ElementId) {
        let Some(parent) = self.elements.get_mut(id).and_then(|e| e.parent.take()) else {
            return;
        };
        if let Some(parent) = self.elements.get_mut(parent) {
            parent.children.retain(|c| *c != id);
        }
    }

    /// Remove an element and its whole subtree
    pub fn remove(&mut self, id: ElementId) -> bool {
        if !self.contains(id) {
            return false;
        }
        self.detach(id);

        let mut stack = vec![id];
        while let Some(next) = stack.pop() {
            if let Some(element) = self.elements.remove(next) {
                stack.extend(element.children);
            }
            self.listeners.remove(&next);
        }
        tracing::trace!(?id, "element removed");
        true
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.elements.contains_key(id)
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id)
    }

    pub fn children(&self, id: ElementId) -> &[ElementId] {
        self.elements
            .get(id)
            .map(|e| e.children.as_slice())
            .unwrap_or(&[])
    }

    /// Direct children of `id` carrying `class`, in document order
    pub fn children_with_class(&self, id: ElementId, class: &str) -> Vec<ElementId> {
        self.children(id)
            .iter()
            .copied()
            .filter(|child| self.has_class(*child, class))
            .collect()
    }

    /// Every element carrying `class`
    pub fn elements_with_class<'a>(
        &'a self,
        class: &'a str,
    ) -> impl Iterator<Item = ElementId> + 'a {
        self.elements
            .iter()
            .filter(move |(_, e)| e.has_class(class))
            .map(|(id, _)| id)
    }

    pub fn has_class(&self, id: ElementId, class: &str) -> bool {
        self.elements.get(id).is_some_and(|e| e.has_class(class))
    }

    pub fn add_class(&mut self, id: ElementId, class: &str) -> bool {
        self.elements
            .get_mut(id)
            .is_some_and(|e| e.add_class(class))
    }

    pub fn remove_class(&mut self, id: ElementId, class: &str) -> bool {
        self.elements
            .get_mut(id)
            .is_some_and(|e| e.remove_class(class))
    }

    pub fn style(&self, id: ElementId) -> Option<&Style> {
        self.elements.get(id).map(|e| &e.style)
    }

    /// Mutate an element's inline style in place
    pub fn update_style(&mut self, id: ElementId, f: impl FnOnce(&mut Style)) -> bool {
        match self.elements.get_mut(id) {
            Some(element) => {
                f(&mut element.style);
                true
            }
            None => false,
        }
    }

    pub fn set_text(&mut self, id: ElementId, text: impl Into<String>) -> bool {
        match self.elements.get_mut(id) {
            Some(element) => {
                element.text = Some(text.into());
                true
            }
            None => false,
        }
    }

    /// Register interest in event types on an element
    pub fn add_listeners(&mut self, id: ElementId, event_types: &[EventType]) {
        if !self.contains(id) {
            return;
        }
        let registered = self.listeners.entry(id).or_default();
        for event_type in event_types {
            if !registered.contains(event_type) {
                registered.push(*event_type);
            }
        }
    }

    /// Drop listener registrations for the given event types
    pub fn remove_listeners(&mut self, id: ElementId, event_types: &[EventType]) {
        if let Some(registered) = self.listeners.get_mut(&id) {
            registered.retain(|t| !event_types.contains(t));
            if registered.is_empty() {
                self.listeners.remove(&id);
            }
        }
    }

    pub fn has_listener(&self, id: ElementId, event_type: EventType) -> bool {
        self.listeners
            .get(&id)
            .is_some_and(|registered| registered.contains(&event_type))
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
