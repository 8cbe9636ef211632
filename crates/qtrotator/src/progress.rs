//! Interval progress indicator
//!
//! A `span.cbp-qtprogress` appended to the container. Filling sets a linear
//! width transition spanning the whole interval and a 100% target width;
//! resetting snaps back to 0% with transitions disabled. The element's style
//! is the visual contract; [`ProgressIndicator::fraction`] samples the same
//! animation for hosts that draw it themselves.

use qtrotator_animation::{Easing, Transition, TransitionStyle, Tween};
use qtrotator_core::Millis;
use qtrotator_dom::{Document, ElementId, Length};

use crate::PROGRESS_CLASS;

pub struct ProgressIndicator {
    element: ElementId,
    fill: Option<Tween>,
}

impl ProgressIndicator {
    /// Create the indicator element as the last child of `container`
    pub fn create(doc: &mut Document, container: ElementId) -> Self {
        let element = doc.create_with_class("span", PROGRESS_CLASS);
        doc.append_child(container, element);
        Self {
            element,
            fill: None,
        }
    }

    pub fn element(&self) -> ElementId {
        self.element
    }

    /// Snap to empty without animating
    pub fn reset(&mut self, doc: &mut Document) {
        self.fill = None;
        doc.update_style(self.element, |style| {
            style.transition = Some(TransitionStyle::None);
            style.width = Some(Length::Percent(0.0));
        });
    }

    /// Animate from empty to full over `interval_ms`, starting at `now`
    pub fn fill(&mut self, doc: &mut Document, now: Millis, interval_ms: Millis) {
        let transition = Transition::width(interval_ms, Easing::Linear);
        self.fill = Some(Tween::from_transition(&transition, 0.0, 1.0, now));
        doc.update_style(self.element, |style| {
            style.transition = Some(transition.into());
            style.width = Some(Length::Percent(100.0));
        });
    }

    /// Filled fraction at `now`, in [0, 1]
    pub fn fraction(&self, now: Millis) -> f32 {
        self.fill.map_or(0.0, |tween| tween.value_at(now))
    }

    pub fn remove(self, doc: &mut Document) {
        doc.remove(self.element);
    }
}
