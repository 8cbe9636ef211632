//! qtrotator core runtime
//!
//! Foundational primitives shared by the rotator crates:
//!
//! - **Events**: mouse and touch input folded into one pointer model
//! - **Timers**: a millisecond timer queue with cancellable handles
//!
//! # Example
//!
//! ```rust
//! use qtrotator_core::timer::TimerQueue;
//!
//! let mut timers = TimerQueue::new();
//! let id = timers.schedule(5000, "rotate");
//!
//! assert_eq!(timers.next_deadline(), Some(5000));
//! assert!(timers.pop_due(4999).is_none());
//!
//! // Cancelling twice is harmless
//! assert_eq!(timers.cancel(id), Some("rotate"));
//! assert_eq!(timers.cancel(id), None);
//! ```

pub mod events;
pub mod timer;

pub use events::{Event, EventData, EventType, PointerPhase, TouchPoint};
pub use timer::{Millis, TimerId, TimerQueue};
