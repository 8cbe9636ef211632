//! Horizontal swipe detection

/// Horizontal travel (in page units) that turns a drag into a swipe
pub const DRAG_THRESHOLD: f32 = 50.0;

/// Direction the pointer travelled
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Swipe {
    /// Pointer moved toward smaller x; shows the next panel
    Left,
    /// Pointer moved toward larger x; shows the previous panel
    Right,
}

/// Press/move tracking for a single drag gesture
#[derive(Clone, Copy, Debug, Default)]
pub struct DragState {
    active: bool,
    start_x: f32,
}

impl DragState {
    pub fn press(&mut self, x: f32) {
        self.active = true;
        self.start_x = x;
    }

    /// Feed a move; once travel exceeds the threshold the gesture ends and
    /// the swipe direction is returned
    pub fn track(&mut self, x: f32) -> Option<Swipe> {
        if !self.active {
            return None;
        }
        let delta = x - self.start_x;
        if delta.abs() <= DRAG_THRESHOLD {
            return None;
        }
        self.active = false;
        Some(if delta < 0.0 { Swipe::Left } else { Swipe::Right })
    }

    pub fn release(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_exclusive() {
        let mut drag = DragState::default();
        drag.press(100.0);
        assert_eq!(drag.track(150.0), None);
        assert_eq!(drag.track(50.0), None);
        assert!(drag.is_active());
        assert_eq!(drag.track(150.5), Some(Swipe::Right));
    }

    #[test]
    fn test_swipe_ends_gesture() {
        let mut drag = DragState::default();
        drag.press(100.0);
        assert_eq!(drag.track(40.0), Some(Swipe::Left));
        assert!(!drag.is_active());
        // further travel does nothing until the next press
        assert_eq!(drag.track(-500.0), None);
    }

    #[test]
    fn test_move_without_press_is_ignored() {
        let mut drag = DragState::default();
        assert_eq!(drag.track(1000.0), None);
        drag.press(0.0);
        drag.release();
        assert_eq!(drag.track(1000.0), None);
    }
}
