//! Rotation, progress and drag behaviour of a rotator driven on a virtual clock

use qtrotator::{
    Capabilities, Rotator, RotatorOptions, CURRENT_CLASS, MIN_INTERVAL_MS, PANEL_CLASS,
    PROGRESS_CLASS,
};
use qtrotator_animation::TransitionStyle;
use qtrotator_core::events::event_types;
use qtrotator_core::Event;
use qtrotator_dom::{Document, ElementId, PointerEvents, Position};

/// Build a container with `n` panels plus one unrelated child
fn page(n: usize) -> (Document, ElementId) {
    let mut doc = Document::new();
    let container = doc.create_element("div");
    for i in 0..n {
        let panel = doc.create_with_class("div", PANEL_CLASS);
        doc.set_text(panel, format!("Panel {i}"));
        doc.append_child(container, panel);
    }
    let caption = doc.create_with_class("footer", "caption");
    doc.append_child(container, caption);
    (doc, container)
}

fn start(n: usize) -> (Document, Rotator) {
    let (mut doc, container) = page(n);
    let rotator = Rotator::initialize(
        &mut doc,
        container,
        RotatorOptions::default(),
        Capabilities::default(),
        0,
    )
    .expect("container exists");
    (doc, rotator)
}

fn marked(doc: &Document, rotator: &Rotator) -> Vec<usize> {
    rotator
        .panels()
        .iter()
        .enumerate()
        .filter(|(_, p)| doc.has_class(**p, CURRENT_CLASS))
        .map(|(i, _)| i)
        .collect()
}

#[test]
fn test_advance_cycles_back_to_start() {
    for n in 1..=7 {
        for offset in 0..n {
            let (mut doc, mut rotator) = start(n);
            for _ in 0..offset {
                rotator.advance(&mut doc, 0);
            }
            let origin = rotator.current_index();
            assert_eq!(origin, offset);

            for _ in 0..n {
                rotator.advance(&mut doc, 0);
            }
            assert_eq!(rotator.current_index(), origin, "n={n} offset={offset}");
        }
    }
}

#[test]
fn test_retreat_inverts_advance() {
    for n in 1..=5 {
        for offset in 0..n {
            let (mut doc, mut rotator) = start(n);
            for _ in 0..offset {
                rotator.advance(&mut doc, 0);
            }
            rotator.advance(&mut doc, 0);
            rotator.retreat(&mut doc, 0);
            assert_eq!(rotator.current_index(), offset);

            rotator.retreat(&mut doc, 0);
            rotator.advance(&mut doc, 0);
            assert_eq!(rotator.current_index(), offset);
        }
    }
}

#[test]
fn test_wrapping_at_both_ends() {
    let (mut doc, mut rotator) = start(3);

    rotator.retreat(&mut doc, 0);
    assert_eq!(rotator.current_index(), 2);

    rotator.advance(&mut doc, 0);
    assert_eq!(rotator.current_index(), 0);
}

#[test]
fn test_exactly_one_panel_marked() {
    let (mut doc, mut rotator) = start(4);
    assert_eq!(marked(&doc, &rotator), vec![0]);

    let mut now = 0;
    for step in 0..40 {
        now += 1300;
        match step % 5 {
            0 => rotator.advance(&mut doc, now),
            1 => rotator.retreat(&mut doc, now),
            2 => {
                rotator.handle_event(&mut doc, &Event::mouse_down(300.0, 0.0, now));
                rotator.handle_event(&mut doc, &Event::mouse_move(200.0, 0.0, now));
                rotator.handle_event(&mut doc, &Event::mouse_up(200.0, 0.0, now));
            }
            _ => {
                rotator.tick(&mut doc, now);
            }
        }
        assert_eq!(marked(&doc, &rotator), vec![rotator.current_index()]);
    }
}

#[test]
fn test_default_rotation_then_destroy() {
    let (mut doc, mut rotator) = start(3);
    let container = rotator.container();

    assert_eq!(rotator.current_index(), 0);
    assert!(doc.has_class(rotator.panels()[0], CURRENT_CLASS));
    assert_eq!(doc.elements_with_class(PROGRESS_CLASS).count(), 1);
    assert!(doc.has_listener(container, event_types::TOUCH_START));

    rotator.tick(&mut doc, 4999);
    assert_eq!(rotator.current_index(), 0);

    rotator.tick(&mut doc, 5000);
    assert_eq!(rotator.current_index(), 1);
    assert!(doc.has_class(rotator.panels()[1], CURRENT_CLASS));

    rotator.destroy(&mut doc);

    assert!(marked(&doc, &rotator).is_empty());
    assert_eq!(doc.elements_with_class(PROGRESS_CLASS).count(), 0);
    assert!(rotator.progress_element().is_none());
    assert!(!rotator.is_attached());
    assert!(!doc.has_listener(container, event_types::MOUSE_MOVE));
    assert_eq!(rotator.next_deadline(), None);

    for &panel in rotator.panels() {
        let style = doc.style(panel).cloned().unwrap_or_default();
        assert_eq!(style.transition, Some(TransitionStyle::None));
        assert_eq!(style.position, Some(Position::Relative));
        assert_eq!(style.z_index, Some(100));
        assert_eq!(style.pointer_events, Some(PointerEvents::Auto));
        assert_eq!(style.opacity, Some(1.0));
    }

    // nothing fires once destroyed
    assert_eq!(rotator.tick(&mut doc, 60_000), 0);
    assert_eq!(rotator.current_index(), 1);

    // a second destroy is harmless
    rotator.destroy(&mut doc);
    assert!(marked(&doc, &rotator).is_empty());
}

#[test]
fn test_drag_left_advances_and_pauses_rotation() {
    let (mut doc, mut rotator) = start(3);

    assert!(rotator.handle_event(&mut doc, &Event::mouse_down(100.0, 10.0, 1000)));
    // the pending rotation is gone before any move is seen
    assert!(!rotator.rotation_pending());
    assert!(rotator.is_dragging());

    rotator.handle_event(&mut doc, &Event::mouse_move(80.0, 10.0, 1010));
    assert_eq!(rotator.current_index(), 0);

    rotator.handle_event(&mut doc, &Event::mouse_move(40.0, 10.0, 1020));
    assert_eq!(rotator.current_index(), 1);
    assert!(!rotator.is_dragging());

    // further travel in the same gesture does not flip again
    rotator.handle_event(&mut doc, &Event::mouse_move(-200.0, 10.0, 1030));
    assert_eq!(rotator.current_index(), 1);

    // paused: no rotation however long the press lasts
    rotator.tick(&mut doc, 30_000);
    assert_eq!(rotator.current_index(), 1);

    rotator.handle_event(&mut doc, &Event::mouse_up(-200.0, 10.0, 30_000));
    assert_eq!(rotator.next_rotation(), Some(35_000));

    rotator.tick(&mut doc, 35_000);
    assert_eq!(rotator.current_index(), 2);
}

#[test]
fn test_drag_right_retreats() {
    let (mut doc, mut rotator) = start(3);

    rotator.handle_event(&mut doc, &Event::mouse_down(100.0, 0.0, 10));
    rotator.handle_event(&mut doc, &Event::mouse_move(151.0, 0.0, 20));
    assert_eq!(rotator.current_index(), 2);
}

#[test]
fn test_short_drag_changes_nothing() {
    let (mut doc, mut rotator) = start(3);

    rotator.handle_event(&mut doc, &Event::touch_start(100.0, 0.0, 10));
    rotator.handle_event(&mut doc, &Event::touch_move(150.0, 0.0, 20));
    rotator.handle_event(&mut doc, &Event::touch_move(50.0, 0.0, 30));
    rotator.handle_event(&mut doc, &Event::touch_end(40));

    assert_eq!(rotator.current_index(), 0);
    assert_eq!(rotator.next_rotation(), Some(5040));
}

#[test]
fn test_progress_restarts_on_navigation() {
    let (mut doc, mut rotator) = start(3);
    let progress = rotator.progress_element().expect("transitions supported");

    rotator.tick(&mut doc, 25);
    assert_eq!(doc.style(progress).and_then(|s| s.width_percent()), Some(100.0));
    assert_eq!(rotator.progress(2525), Some(0.5));

    rotator.advance(&mut doc, 3000);
    let style = doc.style(progress).cloned().unwrap_or_default();
    assert_eq!(style.width_percent(), Some(0.0));
    assert_eq!(style.transition, Some(TransitionStyle::None));
    assert_eq!(rotator.progress(3010), Some(0.0));

    rotator.tick(&mut doc, 3025);
    let style = doc.style(progress).cloned().unwrap_or_default();
    assert_eq!(style.width_percent(), Some(100.0));
    assert_eq!(
        style.transition.map(|t| t.to_string()).as_deref(),
        Some("width 5000ms linear")
    );
}

#[test]
fn test_late_tick_replays_missed_rotations() {
    let (mut doc, mut rotator) = start(4);

    rotator.tick(&mut doc, 15_000);
    assert_eq!(rotator.current_index(), 3);
    assert_eq!(rotator.next_rotation(), Some(20_000));
}

#[test]
fn test_zero_interval_rotates_once_per_millisecond() {
    let (mut doc, container) = page(3);
    let mut rotator = Rotator::initialize(
        &mut doc,
        container,
        RotatorOptions::default().interval(0),
        Capabilities::default(),
        0,
    )
    .unwrap();

    assert_eq!(rotator.options().interval, MIN_INTERVAL_MS);
    rotator.tick(&mut doc, 10);

    assert_eq!(rotator.current_index(), 1);
    assert_eq!(marked(&doc, &rotator), vec![1]);
    assert_eq!(rotator.next_rotation(), Some(11));
}

#[test]
fn test_custom_interval() {
    let (mut doc, container) = page(2);
    let mut rotator = Rotator::initialize(
        &mut doc,
        container,
        RotatorOptions::default().interval(1000).speed(300),
        Capabilities::default(),
        500,
    )
    .unwrap();

    rotator.tick(&mut doc, 1499);
    assert_eq!(rotator.current_index(), 0);
    rotator.tick(&mut doc, 1500);
    assert_eq!(rotator.current_index(), 1);
    rotator.tick(&mut doc, 2500);
    assert_eq!(rotator.current_index(), 0);
}

#[test]
fn test_no_panels_is_inert() {
    let (mut doc, mut rotator) = start(0);

    assert_eq!(rotator.panel_count(), 0);
    assert_eq!(rotator.current_panel(), None);

    rotator.advance(&mut doc, 0);
    rotator.retreat(&mut doc, 0);
    rotator.tick(&mut doc, 50_000);
    assert_eq!(rotator.current_index(), 0);

    rotator.destroy(&mut doc);
    assert_eq!(doc.elements_with_class(PROGRESS_CLASS).count(), 0);
}

#[test]
fn test_single_panel_stays_current() {
    let (mut doc, mut rotator) = start(1);

    rotator.advance(&mut doc, 0);
    rotator.retreat(&mut doc, 0);
    rotator.tick(&mut doc, 20_000);

    assert_eq!(rotator.current_index(), 0);
    assert_eq!(marked(&doc, &rotator), vec![0]);
}

#[test]
fn test_rotation_without_transition_support() {
    let (mut doc, container) = page(3);
    let mut rotator = Rotator::initialize(
        &mut doc,
        container,
        RotatorOptions::default(),
        Capabilities::detect_with(|| false),
        0,
    )
    .unwrap();

    assert_eq!(doc.elements_with_class(PROGRESS_CLASS).count(), 0);
    assert_eq!(rotator.progress(1000), None);

    rotator.tick(&mut doc, 5000);
    assert_eq!(rotator.current_index(), 1);

    rotator.handle_event(&mut doc, &Event::mouse_down(0.0, 0.0, 6000));
    rotator.handle_event(&mut doc, &Event::mouse_move(-60.0, 0.0, 6001));
    assert_eq!(rotator.current_index(), 2);

    rotator.destroy(&mut doc);
    for &panel in rotator.panels() {
        assert_eq!(doc.style(panel).and_then(|s| s.transition), None);
        assert_eq!(doc.style(panel).and_then(|s| s.opacity), Some(1.0));
    }
}
