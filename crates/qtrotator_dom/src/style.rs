//! Inline style properties
//!
//! Only the properties a rotator touches. `None` means "not set inline".

use std::fmt;

use qtrotator_animation::TransitionStyle;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Position {
    Relative,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEvents {
    Auto,
    None,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Length {
    Percent(f32),
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Length::Percent(v) => write!(f, "{v}%"),
        }
    }
}

/// Inline style of an element
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Style {
    pub position: Option<Position>,
    pub z_index: Option<i32>,
    pub pointer_events: Option<PointerEvents>,
    pub opacity: Option<f32>,
    pub width: Option<Length>,
    pub transition: Option<TransitionStyle>,
}

impl Style {
    /// Width as a percentage, if one is set
    pub fn width_percent(&self) -> Option<f32> {
        match self.width {
            Some(Length::Percent(v)) => Some(v),
            None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_percent() {
        let mut style = Style::default();
        assert_eq!(style.width_percent(), None);

        style.width = Some(Length::Percent(100.0));
        assert_eq!(style.width_percent(), Some(100.0));
        assert_eq!(style.width.map(|w| w.to_string()).as_deref(), Some("100%"));
    }
}
