//! The rotator widget
//!
//! Owns one container's rotation state. Every mutation happens inside one of
//! four entry points: [`Rotator::initialize`], [`Rotator::tick`],
//! [`Rotator::handle_event`] and the navigation/teardown operations. The host
//! supplies the clock and calls `tick` whenever time moves; the rotator keeps
//! at most one pending rotation and one pending progress start.

use qtrotator_animation::{Easing, Transition, TransitionStyle};
use qtrotator_core::events::event_types::DRAG_EVENTS;
use qtrotator_core::{Event, Millis, PointerPhase, TimerId, TimerQueue};
use qtrotator_dom::{Document, ElementId, PointerEvents, Position};
use serde::Serialize;

use crate::capabilities::Capabilities;
use crate::command::Command;
use crate::drag::{DragState, Swipe};
use crate::error::{Result, RotatorError};
use crate::options::{RotatorOptions, MIN_INTERVAL_MS};
use crate::progress::ProgressIndicator;
use crate::{CURRENT_CLASS, PANEL_CLASS, SETTLE_DELAY_MS};

/// Deferred work owned by a rotator
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Task {
    /// Apply the panel opacity transition once initial styles have settled
    ApplyTransition,
    /// Begin filling the progress indicator
    StartProgress,
    /// Rotate to the next panel and reschedule
    Rotate,
}

/// Observable state, for hosts and diagnostics
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RotatorSnapshot {
    pub current: usize,
    pub panel_count: usize,
    pub dragging: bool,
    pub progress: Option<f32>,
    pub next_rotation: Option<Millis>,
}

pub struct Rotator {
    container: ElementId,
    panels: Vec<ElementId>,
    current: usize,
    options: RotatorOptions,
    easing: Easing,
    support: bool,
    progress: Option<ProgressIndicator>,
    timers: TimerQueue<Task>,
    rotation_timer: Option<TimerId>,
    progress_timer: Option<TimerId>,
    drag: DragState,
    attached: bool,
    destroyed: bool,
}

impl Rotator {
    /// Take over `container`: capture its panels, show the first one, start
    /// the rotation loop and listen for drags
    pub fn initialize(
        doc: &mut Document,
        container: ElementId,
        mut options: RotatorOptions,
        capabilities: Capabilities,
        now: Millis,
    ) -> Result<Self> {
        if !doc.contains(container) {
            return Err(RotatorError::ContainerNotFound);
        }

        if options.interval < MIN_INTERVAL_MS {
            tracing::warn!(
                interval = options.interval,
                "rotation interval too short; using {MIN_INTERVAL_MS}ms"
            );
            options.interval = MIN_INTERVAL_MS;
        }
        let easing = options.parse_easing().unwrap_or_else(|err| {
            tracing::warn!("{err}; falling back to '{}'", Easing::default());
            Easing::default()
        });
        let panels = doc.children_with_class(container, PANEL_CLASS);
        let support = capabilities.transitions;
        let progress = support.then(|| ProgressIndicator::create(doc, container));

        let mut rotator = Self {
            container,
            panels,
            current: 0,
            options,
            easing,
            support,
            progress,
            timers: TimerQueue::new(),
            rotation_timer: None,
            progress_timer: None,
            drag: DragState::default(),
            attached: false,
            destroyed: false,
        };

        if let Some(&first) = rotator.panels.first() {
            doc.add_class(first, CURRENT_CLASS);
        }
        if support {
            rotator
                .timers
                .schedule_after(now, SETTLE_DELAY_MS, Task::ApplyTransition);
        }
        rotator.start_rotation(now);
        rotator.attach(doc);

        tracing::debug!(
            panels = rotator.panels.len(),
            interval = rotator.options.interval,
            transitions = support,
            "rotator initialized"
        );
        Ok(rotator)
    }

    fn attach(&mut self, doc: &mut Document) {
        doc.add_listeners(self.container, &DRAG_EVENTS);
        self.attached = true;
    }

    fn detach(&mut self, doc: &mut Document) {
        doc.remove_listeners(self.container, &DRAG_EVENTS);
        self.attached = false;
        self.drag.release();
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    /// Show the next panel, wrapping to the first after the last
    pub fn advance(&mut self, doc: &mut Document, now: Millis) {
        let count = self.panels.len();
        if count == 0 || self.destroyed {
            return;
        }
        self.show(doc, (self.current + 1) % count, now);
    }

    /// Show the previous panel, wrapping to the last before the first
    pub fn retreat(&mut self, doc: &mut Document, now: Millis) {
        let count = self.panels.len();
        if count == 0 || self.destroyed {
            return;
        }
        let previous = self.current.checked_sub(1).unwrap_or(count - 1);
        self.show(doc, previous, now);
    }

    fn show(&mut self, doc: &mut Document, index: usize, now: Millis) {
        doc.remove_class(self.panels[self.current], CURRENT_CLASS);
        self.current = index;
        doc.add_class(self.panels[self.current], CURRENT_CLASS);
        tracing::debug!(current = self.current, "panel shown");

        if self.support {
            self.reset_progress(doc);
            self.start_progress(now);
        }
    }

    /// Run a public command against this instance
    ///
    /// Once destroyed, navigation does nothing and destroy is idempotent.
    pub fn apply(&mut self, doc: &mut Document, command: Command, now: Millis) {
        match command {
            Command::Advance => self.advance(doc, now),
            Command::Retreat => self.retreat(doc, now),
            Command::Destroy => self.destroy(doc),
        }
    }

    // ------------------------------------------------------------------
    // Timers
    // ------------------------------------------------------------------

    fn start_rotation(&mut self, now: Millis) {
        if self.support {
            self.start_progress(now);
        }
        if let Some(id) = self.rotation_timer.take() {
            self.timers.cancel(id);
        }
        self.rotation_timer =
            Some(self.timers.schedule_after(now, self.options.interval, Task::Rotate));
    }

    fn cancel_rotation(&mut self) {
        if let Some(id) = self.rotation_timer.take() {
            self.timers.cancel(id);
        }
    }

    fn start_progress(&mut self, now: Millis) {
        if let Some(id) = self.progress_timer.take() {
            self.timers.cancel(id);
        }
        self.progress_timer =
            Some(self.timers.schedule_after(now, SETTLE_DELAY_MS, Task::StartProgress));
    }

    fn reset_progress(&mut self, doc: &mut Document) {
        if let Some(id) = self.progress_timer.take() {
            self.timers.cancel(id);
        }
        if let Some(progress) = self.progress.as_mut() {
            progress.reset(doc);
        }
    }

    /// Fire every task due at or before `now`, returning how many ran
    ///
    /// Each task observes its own deadline as the current time, so a long
    /// gap between ticks replays the rotations that would have happened.
    pub fn tick(&mut self, doc: &mut Document, now: Millis) -> usize {
        let mut fired = 0;
        while let Some((_, at, task)) = self.timers.pop_due(now) {
            fired += 1;
            match task {
                Task::ApplyTransition => {
                    let transition = TransitionStyle::from(Transition::opacity(
                        self.options.speed,
                        self.easing,
                    ));
                    for &panel in &self.panels {
                        doc.update_style(panel, |style| style.transition = Some(transition));
                    }
                }
                Task::StartProgress => {
                    self.progress_timer = None;
                    if let Some(progress) = self.progress.as_mut() {
                        progress.fill(doc, at, self.options.interval);
                    }
                }
                Task::Rotate => {
                    self.rotation_timer = None;
                    if self.support {
                        self.reset_progress(doc);
                    }
                    self.advance(doc, at);
                    self.start_rotation(at);
                }
            }
        }
        fired
    }

    /// Earliest pending deadline, for hosts driving a real clock
    pub fn next_deadline(&self) -> Option<Millis> {
        self.timers.next_deadline()
    }

    // ------------------------------------------------------------------
    // Input
    // ------------------------------------------------------------------

    /// Handle a pointer or touch event delivered to the container
    ///
    /// Returns false when the event was not consumed: the rotator is detached
    /// or the event is not part of a drag gesture.
    pub fn handle_event(&mut self, doc: &mut Document, event: &Event) -> bool {
        if !self.attached || !doc.has_listener(self.container, event.event_type) {
            return false;
        }
        let Some(phase) = event.phase() else {
            return false;
        };
        let now = event.timestamp;

        match phase {
            PointerPhase::Press => {
                let Some(x) = event.page_x() else {
                    return false;
                };
                self.drag.press(x);
                self.cancel_rotation();
                tracing::debug!(x, "drag started; rotation paused");
            }
            PointerPhase::Move => {
                let Some(x) = event.page_x() else {
                    return false;
                };
                match self.drag.track(x) {
                    Some(Swipe::Left) => self.advance(doc, now),
                    Some(Swipe::Right) => self.retreat(doc, now),
                    None => {}
                }
            }
            PointerPhase::Release => {
                self.drag.release();
                if self.support {
                    self.reset_progress(doc);
                }
                self.start_rotation(now);
                tracing::debug!("drag released; rotation resumed");
            }
        }
        true
    }

    // ------------------------------------------------------------------
    // Teardown
    // ------------------------------------------------------------------

    /// Stop rotating and hand the panels back in a plain stacked layout
    pub fn destroy(&mut self, doc: &mut Document) {
        if self.destroyed {
            return;
        }
        if self.support {
            for &panel in &self.panels {
                doc.update_style(panel, |style| {
                    style.transition = Some(TransitionStyle::None)
                });
            }
            if let Some(progress) = self.progress.take() {
                progress.remove(doc);
            }
        }
        for &panel in &self.panels {
            doc.remove_class(panel, CURRENT_CLASS);
            doc.update_style(panel, |style| {
                style.position = Some(Position::Relative);
                style.z_index = Some(100);
                style.pointer_events = Some(PointerEvents::Auto);
                style.opacity = Some(1.0);
            });
        }
        self.detach(doc);
        self.timers.clear();
        self.rotation_timer = None;
        self.progress_timer = None;
        self.destroyed = true;
        tracing::debug!("rotator destroyed");
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn container(&self) -> ElementId {
        self.container
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_panel(&self) -> Option<ElementId> {
        self.panels.get(self.current).copied()
    }

    pub fn panels(&self) -> &[ElementId] {
        &self.panels
    }

    pub fn panel_count(&self) -> usize {
        self.panels.len()
    }

    pub fn options(&self) -> &RotatorOptions {
        &self.options
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    pub fn supports_transitions(&self) -> bool {
        self.support
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_active()
    }

    pub fn rotation_pending(&self) -> bool {
        self.rotation_timer
            .is_some_and(|id| self.timers.is_pending(id))
    }

    /// When the pending rotation will fire
    pub fn next_rotation(&self) -> Option<Millis> {
        self.rotation_timer.and_then(|id| self.timers.deadline(id))
    }

    pub fn pending_tasks(&self) -> usize {
        self.timers.len()
    }

    pub fn progress_element(&self) -> Option<ElementId> {
        self.progress.as_ref().map(ProgressIndicator::element)
    }

    /// Filled fraction of the progress indicator, `None` without one
    pub fn progress(&self, now: Millis) -> Option<f32> {
        self.progress.as_ref().map(|p| p.fraction(now))
    }

    pub fn snapshot(&self, now: Millis) -> RotatorSnapshot {
        RotatorSnapshot {
            current: self.current,
            panel_count: self.panels.len(),
            dragging: self.drag.is_active(),
            progress: self.progress(now),
            next_rotation: self.next_rotation(),
        }
    }
}
