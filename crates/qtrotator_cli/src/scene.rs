//! Demo page and scripted input

use std::str::FromStr;

use qtrotator::PANEL_CLASS;
use qtrotator_core::{Event, Millis};
use qtrotator_dom::{Document, ElementId};
use thiserror::Error;

/// Build a document holding one container with `panels` numbered panels
pub fn demo_page(panels: usize) -> (Document, ElementId) {
    let mut doc = Document::new();
    let container = doc.create_with_class("div", "cbp-qtrotator");
    for i in 0..panels {
        let panel = doc.create_with_class("div", PANEL_CLASS);
        doc.set_text(panel, format!("Panel {}", i + 1));
        doc.append_child(container, panel);
    }
    (doc, container)
}

/// Text shown by the container's current panel
pub fn panel_label(doc: &Document, panel: Option<ElementId>) -> String {
    panel
        .and_then(|id| doc.get(id))
        .and_then(|e| e.text.clone())
        .unwrap_or_else(|| "-".to_string())
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DragParseError {
    #[error("expected FROM:TO@MS, got '{0}'")]
    Format(String),
    #[error("invalid number '{0}'")]
    Number(String),
}

/// A scripted drag: press at `from`, move to `to`, release, all at `at`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragScript {
    pub from: f32,
    pub to: f32,
    pub at: Millis,
}

impl DragScript {
    pub fn events(&self) -> [Event; 3] {
        [
            Event::mouse_down(self.from, 0.0, self.at),
            Event::mouse_move(self.to, 0.0, self.at),
            Event::mouse_up(self.to, 0.0, self.at),
        ]
    }
}

impl FromStr for DragScript {
    type Err = DragParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let format = || DragParseError::Format(s.to_string());
        let (span, at) = s.split_once('@').ok_or_else(format)?;
        let (from, to) = span.split_once(':').ok_or_else(format)?;

        fn number<T: FromStr>(text: &str) -> Result<T, DragParseError> {
            text.trim()
                .parse()
                .map_err(|_| DragParseError::Number(text.to_string()))
        }

        Ok(Self {
            from: number(from)?,
            to: number(to)?,
            at: number(at)?,
        })
    }
}
