use egui::{Context, Pos2};

pub mod gestures;

pub use gestures::{DragValue, GestureEvent, GestureMask, GesturePhase, GestureRecognizer};

/// One frame of pointer and touch input, as seen by the gesture recognizer
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointerSample {
    /// Seconds since the app started
    pub time: f64,
    /// Latest known pointer position
    pub pos: Option<Pos2>,
    /// The primary button (or first finger) went down this frame
    pub pressed: bool,
    /// The primary button (or first finger) is currently held
    pub down: bool,
    /// The primary button (or first finger) was let go this frame
    pub released: bool,
    /// Alt/Option is held, used to emulate a two finger twist with a mouse
    pub alt: bool,
    /// Rotation since the previous frame while two or more fingers touch the screen
    pub touch_rotation: Option<f32>,
}

impl PointerSample {
    /// Read the current frame's input from egui
    pub fn from_egui(ctx: &Context) -> Self {
        ctx.input(|i| Self {
            time: i.time,
            pos: i.pointer.latest_pos(),
            pressed: i.pointer.primary_pressed(),
            down: i.pointer.primary_down(),
            released: i.pointer.primary_released(),
            alt: i.modifiers.alt,
            touch_rotation: i
                .multi_touch()
                .filter(|touch| touch.num_touches >= 2)
                .map(|touch| touch.rotation_delta),
        })
    }

    /// Express the pointer position relative to `origin`
    pub fn relative_to(mut self, origin: Pos2) -> Self {
        self.pos = self.pos.map(|pos| pos - origin.to_vec2());
        self
    }
}
