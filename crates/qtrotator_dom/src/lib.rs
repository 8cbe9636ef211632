//! qtrotator element tree
//!
//! A small retained tree standing in for a page: elements carry a tag,
//! marker classes, a handful of style properties, ordered children and the
//! event types they listen for. Widgets locate their parts by class and
//! express visual state through classes and styles.

pub mod document;
pub mod element;
pub mod style;

pub use document::Document;
pub use element::{Element, ElementId};
pub use style::{Length, PointerEvents, Position, Style};
