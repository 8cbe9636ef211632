//! Content rotator widget
//!
//! Cycles through the panels of a container one at a time: a timer advances
//! to the next panel every `interval` milliseconds, a progress bar fills over
//! the same interval, and a horizontal drag of more than 50 units flips one
//! panel forward or back.
//!
//! # Example
//!
//! ```rust
//! use qtrotator::{Capabilities, RotatorHandle, RotatorOptions, PANEL_CLASS};
//! use qtrotator_dom::Document;
//!
//! let mut doc = Document::new();
//! let container = doc.create_element("div");
//! for _ in 0..3 {
//!     let panel = doc.create_with_class("div", PANEL_CLASS);
//!     doc.append_child(container, panel);
//! }
//!
//! let mut handle = RotatorHandle::new(container);
//! handle
//!     .initialize(&mut doc, RotatorOptions::default(), Capabilities::default(), 0)
//!     .unwrap();
//!
//! handle.tick(&mut doc, 5000);
//! assert_eq!(handle.rotator().map(|r| r.current_index()), Some(1));
//!
//! handle.dispatch_named(&mut doc, "destroy", 5000).unwrap();
//! ```

pub mod capabilities;
pub mod command;
pub mod drag;
pub mod error;
pub mod handle;
pub mod options;
pub mod progress;
pub mod rotator;

pub use capabilities::Capabilities;
pub use command::Command;
pub use drag::{DragState, Swipe, DRAG_THRESHOLD};
pub use error::{Result, RotatorError};
pub use handle::RotatorHandle;
pub use options::{RotatorOptions, MIN_INTERVAL_MS};
pub use progress::ProgressIndicator;
pub use rotator::{Rotator, RotatorSnapshot};

use qtrotator_core::Millis;

/// Marks the container's content panels
pub const PANEL_CLASS: &str = "cbp-qtcontent";
/// Marks the panel currently shown
pub const CURRENT_CLASS: &str = "cbp-qtcurrent";
/// Marks the progress indicator element
pub const PROGRESS_CLASS: &str = "cbp-qtprogress";

/// Delay before style changes that must not animate from the initial state
pub const SETTLE_DELAY_MS: Millis = 25;
