//! Pointer and touch events
//!
//! Mouse and touch input arrive as distinct event types but widgets usually
//! only care about the press/move/release phase and a horizontal page
//! coordinate. [`Event::phase`] and [`Event::page_x`] fold both sources.

use smallvec::SmallVec;

use crate::timer::Millis;

/// Event type identifier
pub type EventType = u32;

/// Common event types
pub mod event_types {
    use super::EventType;

    pub const MOUSE_DOWN: EventType = 1;
    pub const MOUSE_UP: EventType = 2;
    pub const MOUSE_MOVE: EventType = 3;
    pub const TOUCH_START: EventType = 10;
    pub const TOUCH_END: EventType = 11;
    pub const TOUCH_MOVE: EventType = 12;

    /// Every event type a drag-aware widget listens for
    pub const DRAG_EVENTS: [EventType; 6] = [
        MOUSE_DOWN, TOUCH_START, MOUSE_MOVE, TOUCH_MOVE, MOUSE_UP, TOUCH_END,
    ];
}

/// Phase of a pointer interaction, regardless of input device
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerPhase {
    Press,
    Move,
    Release,
}

/// A single active touch contact
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchPoint {
    pub page_x: f32,
    pub page_y: f32,
}

/// Event-specific data
#[derive(Clone, Debug)]
pub enum EventData {
    Mouse {
        page_x: f32,
        page_y: f32,
        button: u8,
    },
    /// Touches still in contact with the surface
    Touch {
        touches: SmallVec<[TouchPoint; 2]>,
    },
    None,
}

/// An input event with associated data
#[derive(Clone, Debug)]
pub struct Event {
    pub event_type: EventType,
    pub data: EventData,
    /// Time the event was delivered, in host clock milliseconds
    pub timestamp: Millis,
}

impl Event {
    fn mouse(event_type: EventType, page_x: f32, page_y: f32, timestamp: Millis) -> Self {
        Self {
            event_type,
            data: EventData::Mouse {
                page_x,
                page_y,
                button: 0,
            },
            timestamp,
        }
    }

    fn touch(event_type: EventType, touches: &[TouchPoint], timestamp: Millis) -> Self {
        Self {
            event_type,
            data: EventData::Touch {
                touches: touches.iter().copied().collect(),
            },
            timestamp,
        }
    }

    pub fn mouse_down(page_x: f32, page_y: f32, timestamp: Millis) -> Self {
        Self::mouse(event_types::MOUSE_DOWN, page_x, page_y, timestamp)
    }

    pub fn mouse_move(page_x: f32, page_y: f32, timestamp: Millis) -> Self {
        Self::mouse(event_types::MOUSE_MOVE, page_x, page_y, timestamp)
    }

    pub fn mouse_up(page_x: f32, page_y: f32, timestamp: Millis) -> Self {
        Self::mouse(event_types::MOUSE_UP, page_x, page_y, timestamp)
    }

    pub fn touch_start(page_x: f32, page_y: f32, timestamp: Millis) -> Self {
        Self::touch(
            event_types::TOUCH_START,
            &[TouchPoint { page_x, page_y }],
            timestamp,
        )
    }

    pub fn touch_move(page_x: f32, page_y: f32, timestamp: Millis) -> Self {
        Self::touch(
            event_types::TOUCH_MOVE,
            &[TouchPoint { page_x, page_y }],
            timestamp,
        )
    }

    /// Touch end carries no remaining contacts
    pub fn touch_end(timestamp: Millis) -> Self {
        Self::touch(event_types::TOUCH_END, &[], timestamp)
    }

    /// Map the event onto a device-independent pointer phase
    pub fn phase(&self) -> Option<PointerPhase> {
        match self.event_type {
            event_types::MOUSE_DOWN | event_types::TOUCH_START => Some(PointerPhase::Press),
            event_types::MOUSE_MOVE | event_types::TOUCH_MOVE => Some(PointerPhase::Move),
            event_types::MOUSE_UP | event_types::TOUCH_END => Some(PointerPhase::Release),
            _ => None,
        }
    }

    /// Horizontal page coordinate; for touch input this is the first contact
    pub fn page_x(&self) -> Option<f32> {
        match &self.data {
            EventData::Mouse { page_x, .. } => Some(*page_x),
            EventData::Touch { touches } => touches.first().map(|t| t.page_x),
            EventData::None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mouse_and_touch_share_phases() {
        assert_eq!(Event::mouse_down(0.0, 0.0, 0).phase(), Some(PointerPhase::Press));
        assert_eq!(Event::touch_start(0.0, 0.0, 0).phase(), Some(PointerPhase::Press));
        assert_eq!(Event::mouse_move(0.0, 0.0, 0).phase(), Some(PointerPhase::Move));
        assert_eq!(Event::touch_move(0.0, 0.0, 0).phase(), Some(PointerPhase::Move));
        assert_eq!(Event::mouse_up(0.0, 0.0, 0).phase(), Some(PointerPhase::Release));
        assert_eq!(Event::touch_end(0).phase(), Some(PointerPhase::Release));
    }

    #[test]
    fn test_page_x_uses_first_touch() {
        let event = Event {
            event_type: event_types::TOUCH_MOVE,
            data: EventData::Touch {
                touches: SmallVec::from_slice(&[
                    TouchPoint {
                        page_x: 12.0,
                        page_y: 0.0,
                    },
                    TouchPoint {
                        page_x: 99.0,
                        page_y: 0.0,
                    },
                ]),
            },
            timestamp: 0,
        };
        assert_eq!(event.page_x(), Some(12.0));
        assert_eq!(Event::touch_end(0).page_x(), None);
        assert_eq!(Event::mouse_move(40.0, 3.0, 0).page_x(), Some(40.0));
    }

    #[test]
    fn test_unknown_event_type_has_no_phase() {
        let event = Event {
            event_type: 999,
            data: EventData::None,
            timestamp: 0,
        };
        assert_eq!(event.phase(), None);
        assert_eq!(event.page_x(), None);
    }
}
