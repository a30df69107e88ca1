use egui::{Pos2, Vec2, pos2};
use recognizing_gestures::{
    Angle, DragValue, GestureConfig, GestureEvent, GestureMask, GesturePhase, GestureRecognizer, PointerSample,
};

// Helpers building one frame of input each

fn press(time: f64, pos: Pos2) -> PointerSample {
    PointerSample {
        time,
        pos: Some(pos),
        pressed: true,
        down: true,
        ..Default::default()
    }
}

fn hold(time: f64, pos: Pos2) -> PointerSample {
    PointerSample {
        time,
        pos: Some(pos),
        down: true,
        ..Default::default()
    }
}

fn release(time: f64, pos: Pos2) -> PointerSample {
    PointerSample {
        time,
        pos: Some(pos),
        released: true,
        ..Default::default()
    }
}

fn twist(time: f64, delta: f32) -> PointerSample {
    PointerSample {
        time,
        pos: Some(pos2(50.0, 50.0)),
        touch_rotation: Some(delta),
        ..Default::default()
    }
}

fn recognizer(mask: GestureMask) -> GestureRecognizer {
    GestureRecognizer::new(GestureConfig::default(), mask)
}

#[test]
fn test_short_press_is_a_tap() {
    let mut recognizer = recognizer(GestureMask::TAP);
    assert!(recognizer.update(&press(0.0, pos2(10.0, 10.0)), |_| true).is_empty());
    let events = recognizer.update(&release(0.1, pos2(11.0, 10.0)), |_| true);
    assert_eq!(events, vec![GestureEvent::Tap { location: pos2(11.0, 10.0) }]);
    assert!(!recognizer.is_tracking());
}

#[test]
fn test_press_and_release_in_one_frame_is_a_tap() {
    let mut recognizer = recognizer(GestureMask::TAP);
    let sample = PointerSample {
        released: true,
        down: false,
        ..press(0.0, pos2(3.0, 4.0))
    };
    let events = recognizer.update(&sample, |_| true);
    assert_eq!(events, vec![GestureEvent::Tap { location: pos2(3.0, 4.0) }]);
}

#[test]
fn test_press_off_target_is_ignored() {
    let mut recognizer = recognizer(GestureMask::TAP);
    recognizer.update(&press(0.0, pos2(500.0, 500.0)), |pos| pos.x < 100.0);
    let events = recognizer.update(&release(0.1, pos2(50.0, 50.0)), |pos| pos.x < 100.0);
    assert!(events.is_empty());
}

#[test]
fn test_release_off_target_is_not_a_tap() {
    let mut recognizer = recognizer(GestureMask::TAP);
    recognizer.update(&press(0.0, pos2(50.0, 50.0)), |pos| pos.x < 100.0);
    let events = recognizer.update(&release(0.1, pos2(150.0, 50.0)), |pos| pos.x < 100.0);
    assert!(events.is_empty());
}

#[test]
fn test_long_press_fires_once_while_held() {
    let mut recognizer = recognizer(GestureMask::LONG_PRESS);
    recognizer.update(&press(0.0, pos2(20.0, 20.0)), |_| true);
    assert!(recognizer.update(&hold(0.3, pos2(21.0, 20.0)), |_| true).is_empty());

    let events = recognizer.update(&hold(0.6, pos2(21.0, 21.0)), |_| true);
    assert_eq!(events, vec![GestureEvent::LongPress { location: pos2(21.0, 21.0) }]);

    assert!(recognizer.update(&hold(1.5, pos2(21.0, 21.0)), |_| true).is_empty());
    assert!(recognizer.update(&release(1.6, pos2(21.0, 21.0)), |_| true).is_empty());
}

#[test]
fn test_long_press_does_not_also_tap() {
    let mut recognizer = recognizer(GestureMask {
        tap: true,
        long_press: true,
        ..GestureMask::NONE
    });
    recognizer.update(&press(0.0, pos2(20.0, 20.0)), |_| true);
    let held = recognizer.update(&hold(0.5, pos2(20.0, 20.0)), |_| true);
    let released = recognizer.update(&release(0.7, pos2(20.0, 20.0)), |_| true);

    assert_eq!(held.len(), 1);
    assert!(matches!(held[0], GestureEvent::LongPress { .. }));
    assert!(released.is_empty());
}

#[test]
fn test_moving_cancels_long_press() {
    let mut recognizer = recognizer(GestureMask::LONG_PRESS);
    recognizer.update(&press(0.0, pos2(20.0, 20.0)), |_| true);
    recognizer.update(&hold(0.2, pos2(60.0, 20.0)), |_| true);
    // Coming back does not revive it
    let events = recognizer.update(&hold(0.8, pos2(20.0, 20.0)), |_| true);
    assert!(events.is_empty());
}

#[test]
fn test_drag_reports_changes_then_end() {
    let mut recognizer = recognizer(GestureMask::DRAG);
    let start = pos2(10.0, 10.0);

    recognizer.update(&press(0.0, start), |_| true);
    // Below the drag threshold nothing is reported yet
    assert!(recognizer.update(&hold(0.05, pos2(12.0, 10.0)), |_| true).is_empty());

    let first = recognizer.update(&hold(0.1, pos2(25.0, 10.0)), |_| true);
    let second = recognizer.update(&hold(0.15, pos2(40.0, 30.0)), |_| true);
    let unchanged = recognizer.update(&hold(0.2, pos2(40.0, 30.0)), |_| true);
    let end = recognizer.update(&release(0.25, pos2(45.0, 30.0)), |_| true);

    let [GestureEvent::Drag { value, phase }] = first.as_slice() else {
        panic!("expected one drag event, got {first:?}");
    };
    assert_eq!(*phase, GesturePhase::Changed);
    assert_eq!(value.start_location, start);
    assert_eq!(value.translation(), Vec2::new(15.0, 0.0));

    let [GestureEvent::Drag { value, .. }] = second.as_slice() else {
        panic!("expected one drag event, got {second:?}");
    };
    assert_eq!(value.translation(), Vec2::new(30.0, 20.0));

    assert!(unchanged.is_empty());

    // The last move arrives together with the release
    let [
        GestureEvent::Drag {
            value: moved,
            phase: GesturePhase::Changed,
        },
        GestureEvent::Drag {
            value,
            phase: GesturePhase::Ended,
        },
    ] = end.as_slice()
    else {
        panic!("expected drag change and end, got {end:?}");
    };
    assert_eq!(moved.location, pos2(45.0, 30.0));
    assert_eq!(value.location, pos2(45.0, 30.0));
}

#[test]
fn test_release_without_move_only_ends_drag() {
    let mut recognizer = recognizer(GestureMask::DRAG);
    recognizer.update(&press(0.0, pos2(0.0, 0.0)), |_| true);
    recognizer.update(&hold(0.1, pos2(30.0, 0.0)), |_| true);
    let end = recognizer.update(&release(0.2, pos2(30.0, 0.0)), |_| true);
    assert!(matches!(
        end.as_slice(),
        [GestureEvent::Drag {
            phase: GesturePhase::Ended,
            ..
        }]
    ));
}

#[test]
fn test_flick_released_in_next_frame_is_a_drag() {
    let mut recognizer = recognizer(GestureMask::ALL);
    let start = pos2(0.0, 0.0);
    recognizer.update(&press(0.0, start), |_| true);
    let events = recognizer.update(&release(0.016, pos2(50.0, 0.0)), |_| true);

    let value = DragValue {
        start_location: start,
        location: pos2(50.0, 0.0),
    };
    assert_eq!(
        events,
        vec![
            GestureEvent::Drag {
                value,
                phase: GesturePhase::Changed
            },
            GestureEvent::Drag {
                value,
                phase: GesturePhase::Ended
            },
        ]
    );
    assert!(!recognizer.is_tracking());
}

#[test]
fn test_masked_gestures_are_not_reported() {
    let mut recognizer = recognizer(GestureMask::TAP);
    recognizer.update(&press(0.0, pos2(0.0, 0.0)), |_| true);
    assert!(recognizer.update(&hold(0.1, pos2(80.0, 0.0)), |_| true).is_empty());
    assert!(recognizer.update(&hold(2.0, pos2(80.0, 0.0)), |_| true).is_empty());
    // With drags masked out the movement did not stop the tap
    let events = recognizer.update(&release(2.1, pos2(80.0, 0.0)), |_| true);
    assert_eq!(events, vec![GestureEvent::Tap { location: pos2(80.0, 0.0) }]);
}

#[test]
fn test_touch_twist_accumulates_angle() {
    let mut recognizer = recognizer(GestureMask::ROTATION);
    let step = 5.0_f32.to_radians();

    let mut reported = Vec::new();
    for frame in 0..3 {
        reported.extend(recognizer.update(&twist(f64::from(frame) * 0.016, step), |_| true));
    }
    let ended = recognizer.update(&PointerSample::default(), |_| true);

    assert_eq!(reported.len(), 3);
    for (i, event) in reported.iter().enumerate() {
        let GestureEvent::Rotation { angle, phase } = event else {
            panic!("expected rotation, got {event:?}");
        };
        assert_eq!(*phase, GesturePhase::Changed);
        assert!((angle.radians() - step * (i + 1) as f32).abs() < 1e-5);
    }

    let [GestureEvent::Rotation { angle, phase }] = ended.as_slice() else {
        panic!("expected rotation end, got {ended:?}");
    };
    assert_eq!(*phase, GesturePhase::Ended);
    assert!((angle.degrees() - 15.0).abs() < 1e-3);
}

#[test]
fn test_tiny_twist_never_starts_rotation() {
    let mut recognizer = recognizer(GestureMask::ROTATION);
    let events = recognizer.update(&twist(0.0, 0.1_f32.to_radians()), |_| true);
    let ended = recognizer.update(&PointerSample::default(), |_| true);
    assert!(events.is_empty());
    assert!(ended.is_empty());
}

#[test]
fn test_twist_starting_off_target_is_ignored() {
    let mut recognizer = recognizer(GestureMask::ROTATION);
    let step = 30.0_f32.to_radians();
    for frame in 0..3 {
        let events = recognizer.update(&twist(f64::from(frame) * 0.016, step), |_| false);
        assert!(events.is_empty());
    }
    // Sliding onto the target does not revive it
    assert!(recognizer.update(&twist(0.05, step), |_| true).is_empty());
    assert!(recognizer.update(&PointerSample::default(), |_| true).is_empty());
    assert!(!recognizer.is_tracking());
}

#[test]
fn test_second_finger_cancels_drag() {
    let mut recognizer = recognizer(GestureMask::DRAG);
    recognizer.update(&press(0.0, pos2(0.0, 0.0)), |_| true);
    assert_eq!(recognizer.update(&hold(0.1, pos2(50.0, 0.0)), |_| true).len(), 1);

    recognizer.update(
        &PointerSample {
            touch_rotation: Some(0.0),
            ..hold(0.2, pos2(60.0, 0.0))
        },
        |_| true,
    );
    assert!(recognizer.update(&hold(0.3, pos2(70.0, 0.0)), |_| true).is_empty());
    assert!(recognizer.update(&release(0.4, pos2(70.0, 0.0)), |_| true).is_empty());
}

#[test]
fn test_alt_drag_twists_around_pivot() {
    let mut recognizer = recognizer(GestureMask::ROTATION);
    let pivot = pos2(100.0, 100.0);
    recognizer.set_pivot(Some(pivot));

    let alt = |sample: PointerSample| PointerSample { alt: true, ..sample };

    recognizer.update(&alt(press(0.0, pos2(200.0, 100.0))), |_| true);
    // A quarter turn, clockwise on screen
    let changed = recognizer.update(&alt(hold(0.1, pos2(100.0, 200.0))), |_| true);
    let ended = recognizer.update(&alt(release(0.2, pos2(100.0, 200.0))), |_| true);

    let [GestureEvent::Rotation { angle, phase: GesturePhase::Changed }] = changed.as_slice() else {
        panic!("expected rotation change, got {changed:?}");
    };
    assert!((angle.degrees() - 90.0).abs() < 1e-3);
    assert_eq!(
        ended,
        vec![GestureEvent::Rotation {
            angle: *angle,
            phase: GesturePhase::Ended
        }]
    );
}

#[test]
fn test_alt_twist_keeps_counting_past_half_turn() {
    let mut recognizer = recognizer(GestureMask::ROTATION);
    let pivot = pos2(0.0, 0.0);
    recognizer.set_pivot(Some(pivot));

    let path = [
        pos2(100.0, 0.0),
        pos2(0.0, 100.0),
        pos2(-100.0, 1.0),
        pos2(-100.0, -1.0),
        pos2(0.0, -100.0),
    ];
    recognizer.update(&PointerSample { alt: true, ..press(0.0, path[0]) }, |_| true);
    let mut last = Angle::ZERO;
    for (i, pos) in path.iter().enumerate().skip(1) {
        let sample = PointerSample {
            alt: true,
            ..hold(i as f64 * 0.1, *pos)
        };
        for event in recognizer.update(&sample, |_| true) {
            if let GestureEvent::Rotation { angle, .. } = event {
                last = angle;
            }
        }
    }
    assert!((last.degrees() - 270.0).abs() < 0.1);
}

#[test]
fn test_set_config_rejects_invalid() {
    let mut recognizer = recognizer(GestureMask::ALL);
    let bad = GestureConfig {
        long_press_secs: -2.0,
        ..Default::default()
    };
    assert!(recognizer.set_config(bad).is_err());
    assert_eq!(recognizer.config(), &GestureConfig::default());

    let custom = GestureConfig {
        min_drag_distance: 30.0,
        ..Default::default()
    };
    recognizer.set_config(custom.clone()).unwrap();
    assert_eq!(recognizer.config(), &custom);
}
