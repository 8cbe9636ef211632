//! Transition descriptors
//!
//! Mirrors the CSS `transition` shorthand for the two properties the rotator
//! animates. A [`TransitionStyle::None`] is an explicit `transition: none`,
//! which makes the next property change snap instead of animate.

use std::fmt;

use qtrotator_core::Millis;

use crate::easing::Easing;

/// Style property a transition applies to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransitionProperty {
    Opacity,
    Width,
}

impl TransitionProperty {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionProperty::Opacity => "opacity",
            TransitionProperty::Width => "width",
        }
    }
}

/// A single-property transition: `<property> <duration>ms <easing>`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub property: TransitionProperty,
    pub duration_ms: Millis,
    pub easing: Easing,
}

impl Transition {
    pub fn new(property: TransitionProperty, duration_ms: Millis, easing: Easing) -> Self {
        Self {
            property,
            duration_ms,
            easing,
        }
    }

    pub fn opacity(duration_ms: Millis, easing: Easing) -> Self {
        Self::new(TransitionProperty::Opacity, duration_ms, easing)
    }

    pub fn width(duration_ms: Millis, easing: Easing) -> Self {
        Self::new(TransitionProperty::Width, duration_ms, easing)
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}ms {}",
            self.property.as_str(),
            self.duration_ms,
            self.easing
        )
    }
}

/// Value of an element's `transition` style
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TransitionStyle {
    None,
    Animate(Transition),
}

impl TransitionStyle {
    /// The transition, if one is active
    pub fn transition(&self) -> Option<&Transition> {
        match self {
            TransitionStyle::None => None,
            TransitionStyle::Animate(transition) => Some(transition),
        }
    }
}

impl From<Transition> for TransitionStyle {
    fn from(transition: Transition) -> Self {
        TransitionStyle::Animate(transition)
    }
}

impl fmt::Display for TransitionStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransitionStyle::None => f.write_str("none"),
            TransitionStyle::Animate(transition) => transition.fmt(f),
        }
    }
}
