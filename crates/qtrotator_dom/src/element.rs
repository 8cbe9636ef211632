//! Element nodes

use slotmap::new_key_type;
use smallvec::SmallVec;

use crate::style::Style;

new_key_type! {
    pub struct ElementId;
}

/// A node in the element tree
#[derive(Clone, Debug, Default)]
pub struct Element {
    pub tag: String,
    pub classes: SmallVec<[String; 4]>,
    pub style: Style,
    /// Text content, if any
    pub text: Option<String>,
    pub(crate) parent: Option<ElementId>,
    pub(crate) children: Vec<ElementId>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Add a class; returns false if it was already present
    pub fn add_class(&mut self, class: &str) -> bool {
        if self.has_class(class) {
            return false;
        }
        self.classes.push(class.to_string());
        true
    }

    /// Remove a class; returns false if it was not present
    pub fn remove_class(&mut self, class: &str) -> bool {
        let before = self.classes.len();
        self.classes.retain(|c| c != class);
        self.classes.len() != before
    }
}
