use egui::{Pos2, Vec2};

use super::PointerSample;
use crate::config::GestureConfig;
use crate::error::ConfigResult;
use crate::geometry::Angle;

/// Where a continuous gesture is in its lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    /// The gesture is in progress and its value moved
    Changed,
    /// The gesture finished; this is its final value
    Ended,
}

/// Locations reported by a drag, in the coordinates the samples were given in
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragValue {
    /// Where the pointer went down
    pub start_location: Pos2,
    /// Where the pointer is now
    pub location: Pos2,
}

impl DragValue {
    /// Total movement since the drag started
    pub fn translation(&self) -> Vec2 {
        self.location - self.start_location
    }
}

/// A recognized gesture
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    /// Pointer pressed and released over the target
    Tap { location: Pos2 },
    /// Pointer held still over the target long enough
    LongPress { location: Pos2 },
    /// Single pointer moved after pressing on the target
    Drag { value: DragValue, phase: GesturePhase },
    /// Two point twist, angle accumulated since the gesture began
    Rotation { angle: Angle, phase: GesturePhase },
}

impl GestureEvent {
    /// Discrete gestures only ever report their end
    pub fn phase(&self) -> GesturePhase {
        match self {
            Self::Tap { .. } | Self::LongPress { .. } => GesturePhase::Ended,
            Self::Drag { phase, .. } | Self::Rotation { phase, .. } => *phase,
        }
    }
}

/// Which gestures a recognizer reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GestureMask {
    pub tap: bool,
    pub long_press: bool,
    pub drag: bool,
    pub rotation: bool,
}

impl GestureMask {
    pub const NONE: Self = Self {
        tap: false,
        long_press: false,
        drag: false,
        rotation: false,
    };
    pub const TAP: Self = Self { tap: true, ..Self::NONE };
    pub const LONG_PRESS: Self = Self { long_press: true, ..Self::NONE };
    pub const DRAG: Self = Self { drag: true, ..Self::NONE };
    pub const ROTATION: Self = Self { rotation: true, ..Self::NONE };
    pub const ALL: Self = Self {
        tap: true,
        long_press: true,
        drag: true,
        rotation: true,
    };
}

/// Accumulated twist of a rotation gesture
#[derive(Debug, Clone, Copy, Default)]
struct Twist {
    angle: Angle,
    active: bool,
}

impl Twist {
    /// Add `delta` and return the new total once the gesture is active
    fn turn(&mut self, delta: Angle, min_angle: f32) -> Option<Angle> {
        if delta == Angle::ZERO {
            return None;
        }
        self.angle += delta;
        if !self.active && self.angle.abs().radians() >= min_angle {
            self.active = true;
        }
        self.active.then_some(self.angle)
    }
}

/// Two finger twist, decided when the touches go down
#[derive(Debug, Clone, Copy)]
enum TouchTwist {
    /// Touches landed off the target, wait for them to lift
    Ignored,
    Tracking(Twist),
}

#[derive(Debug, Clone, Copy)]
enum Tracking {
    Idle,
    /// Pressed off target, wait for the release
    Ignored,
    Pressed {
        start: Pos2,
        start_time: f64,
        last: Pos2,
        long_press_possible: bool,
        long_press_fired: bool,
    },
    Dragging {
        start: Pos2,
        last: Pos2,
    },
    /// Mouse emulation of a two finger twist around `pivot`
    Twisting {
        pivot: Pos2,
        last_heading: f32,
        twist: Twist,
    },
}

/// Turns a stream of pointer samples into tap, long press, drag and rotation events
#[derive(Debug)]
pub struct GestureRecognizer {
    config: GestureConfig,
    mask: GestureMask,
    pivot: Option<Pos2>,
    tracking: Tracking,
    touch_twist: Option<TouchTwist>,
}

impl GestureRecognizer {
    pub fn new(config: GestureConfig, mask: GestureMask) -> Self {
        Self {
            config,
            mask,
            pivot: None,
            tracking: Tracking::Idle,
            touch_twist: None,
        }
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Adopt a new configuration, keeping the current one if it is invalid
    pub fn set_config(&mut self, config: GestureConfig) -> ConfigResult<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Point a mouse twist (Alt + drag) rotates around
    pub fn set_pivot(&mut self, pivot: Option<Pos2>) {
        self.pivot = pivot;
    }

    /// True while a pointer or touch interaction is in progress
    pub fn is_tracking(&self) -> bool {
        !matches!(self.tracking, Tracking::Idle) || self.touch_twist.is_some()
    }

    /// Feed one frame of input and collect the gestures it completes or moves.
    ///
    /// `hit` decides whether a position is on the gesture target; it is asked
    /// when the pointer or the first of two touches goes down, and when a tap
    /// is released.
    pub fn update(&mut self, sample: &PointerSample, hit: impl Fn(Pos2) -> bool) -> Vec<GestureEvent> {
        let mut events = Vec::new();

        if let Some(delta) = sample.touch_rotation {
            self.update_touch_twist(delta, sample, &hit, &mut events);
            return events;
        }

        if let Some(TouchTwist::Tracking(twist)) = self.touch_twist.take() {
            if twist.active && self.mask.rotation {
                events.push(GestureEvent::Rotation {
                    angle: twist.angle,
                    phase: GesturePhase::Ended,
                });
            }
        }

        if sample.pressed {
            if let Some(pos) = sample.pos {
                self.begin(pos, sample, &hit);
            }
        }
        self.advance(sample, &hit, &mut events);

        events
    }

    fn begin(&mut self, pos: Pos2, sample: &PointerSample, hit: &impl Fn(Pos2) -> bool) {
        self.tracking = match self.pivot {
            _ if !hit(pos) => Tracking::Ignored,
            Some(pivot) if sample.alt && self.mask.rotation => Tracking::Twisting {
                pivot,
                last_heading: (pos - pivot).angle(),
                twist: Twist::default(),
            },
            _ => Tracking::Pressed {
                start: pos,
                start_time: sample.time,
                last: pos,
                long_press_possible: true,
                long_press_fired: false,
            },
        };
    }

    fn advance(&mut self, sample: &PointerSample, hit: &impl Fn(Pos2) -> bool, events: &mut Vec<GestureEvent>) {
        let ended = sample.released || !sample.down;

        self.tracking = match self.tracking {
            Tracking::Idle => Tracking::Idle,
            Tracking::Ignored if ended => Tracking::Idle,
            Tracking::Ignored => Tracking::Ignored,
            Tracking::Pressed {
                start,
                start_time,
                last,
                mut long_press_possible,
                mut long_press_fired,
            } => {
                let pos = sample.pos.unwrap_or(last);
                let moved = pos.distance(start);
                long_press_possible &= moved <= self.config.long_press_max_distance;

                let drag_started = self.mask.drag && moved >= self.config.min_drag_distance;
                let value = DragValue { start_location: start, location: pos };

                if drag_started {
                    events.push(GestureEvent::Drag { value, phase: GesturePhase::Changed });
                }

                if ended {
                    // Movement and release can land in the same frame
                    if drag_started {
                        events.push(GestureEvent::Drag { value, phase: GesturePhase::Ended });
                    } else if self.mask.tap && !long_press_fired && hit(pos) {
                        events.push(GestureEvent::Tap { location: pos });
                    }
                    Tracking::Idle
                } else if drag_started {
                    Tracking::Dragging { start, last: pos }
                } else {
                    let held = sample.time - start_time;
                    if self.mask.long_press
                        && long_press_possible
                        && !long_press_fired
                        && held >= f64::from(self.config.long_press_secs)
                    {
                        long_press_fired = true;
                        events.push(GestureEvent::LongPress { location: pos });
                    }
                    Tracking::Pressed {
                        start,
                        start_time,
                        last: pos,
                        long_press_possible,
                        long_press_fired,
                    }
                }
            }
            Tracking::Dragging { start, last } => {
                let pos = sample.pos.unwrap_or(last);
                let value = DragValue { start_location: start, location: pos };
                if pos != last {
                    events.push(GestureEvent::Drag { value, phase: GesturePhase::Changed });
                }
                if ended {
                    events.push(GestureEvent::Drag { value, phase: GesturePhase::Ended });
                    Tracking::Idle
                } else {
                    Tracking::Dragging { start, last: pos }
                }
            }
            Tracking::Twisting {
                pivot,
                mut last_heading,
                mut twist,
            } => {
                if let Some(pos) = sample.pos {
                    let heading = (pos - pivot).angle();
                    let delta = Angle::between(last_heading, heading);
                    last_heading = heading;
                    if let Some(angle) = twist.turn(delta, self.config.min_rotation_angle) {
                        events.push(GestureEvent::Rotation {
                            angle,
                            phase: GesturePhase::Changed,
                        });
                    }
                }

                if ended {
                    if twist.active {
                        events.push(GestureEvent::Rotation {
                            angle: twist.angle,
                            phase: GesturePhase::Ended,
                        });
                    }
                    Tracking::Idle
                } else {
                    Tracking::Twisting {
                        pivot,
                        last_heading,
                        twist,
                    }
                }
            }
        };
    }

    fn update_touch_twist(
        &mut self,
        delta: f32,
        sample: &PointerSample,
        hit: &impl Fn(Pos2) -> bool,
        events: &mut Vec<GestureEvent>,
    ) {
        // A second finger takes over from any single pointer gesture
        self.tracking = if sample.down {
            Tracking::Ignored
        } else {
            Tracking::Idle
        };

        let min_angle = self.config.min_rotation_angle;
        let touch = self.touch_twist.get_or_insert_with(|| {
            if sample.pos.is_some_and(hit) {
                TouchTwist::Tracking(Twist::default())
            } else {
                TouchTwist::Ignored
            }
        });
        let TouchTwist::Tracking(twist) = touch else {
            return;
        };
        if let Some(angle) = twist.turn(Angle::from_radians(delta), min_angle) {
            if self.mask.rotation {
                events.push(GestureEvent::Rotation {
                    angle,
                    phase: GesturePhase::Changed,
                });
            }
        }
    }
}
