//! qtrotator animation primitives
//!
//! - **Easing**: the CSS timing functions by name, plus arbitrary cubic beziers
//! - **Transitions**: `<property> <duration>ms <easing>` style descriptors
//! - **Tweens**: time-sampled interpolation between two values

pub mod easing;
pub mod transition;
pub mod tween;

pub use easing::{Easing, ParseEasingError};
pub use transition::{Transition, TransitionProperty, TransitionStyle};
pub use tween::Tween;
