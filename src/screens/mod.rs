use egui::{Painter, Pos2, Rect, Ui};

use crate::input::{GestureEvent, GestureMask, GesturePhase};
use crate::navigator::Destination;

/// Screen trait defines the interface for all gesture demo screens.
///
/// Gesture positions handed to a screen are relative to the top left of its
/// [`Screen::frame`], the shape's layout slot before any offset or rotation.
pub trait Screen {
    /// Which navigator entry this screen belongs to
    fn destination(&self) -> Destination;

    /// One line telling the user what to do
    fn instructions(&self) -> &'static str;

    /// The single gesture this screen binds
    fn gestures(&self) -> GestureMask;

    /// Restore the screen's state to its default
    fn reset(&mut self);

    /// Layout slot of the shape within the canvas, in screen coordinates
    fn frame(&self, canvas: Rect) -> Rect;

    /// Whether a frame-relative position is on the gesture target
    fn hit_test(&self, pos: Pos2) -> bool;

    /// Frame-relative point a mouse twist rotates around, if the screen rotates
    fn rotation_pivot(&self) -> Option<Pos2> {
        None
    }

    /// Handle an intermediate gesture event
    fn on_changed(&mut self, _event: &GestureEvent) {}

    /// Handle the final event of a gesture
    fn on_ended(&mut self, _event: &GestureEvent) {}

    /// Route an event to the handler for its phase
    fn handle(&mut self, event: &GestureEvent) {
        match event.phase() {
            GesturePhase::Changed => self.on_changed(event),
            GesturePhase::Ended => self.on_ended(event),
        }
    }

    /// Paint the shape into the canvas
    fn paint(&self, ui: &Ui, painter: &Painter, canvas: Rect, animation_secs: f32);
}

pub mod drag;
pub mod line_drawing;
pub mod long_press;
pub mod rotate;
pub mod tap;

pub use drag::DragScreen;
pub use line_drawing::LineDrawingScreen;
pub use long_press::LongPressScreen;
pub use rotate::RotateScreen;
pub use tap::TapScreen;

/// Enum holding whichever screen is currently pushed.
/// This keeps every screen a plain struct and avoids `Box<dyn Screen>`.
#[derive(Debug, Clone)]
pub enum ActiveScreen {
    Tap(TapScreen),
    LongPress(LongPressScreen),
    Drag(DragScreen),
    Rotate(RotateScreen),
    LineDrawing(LineDrawingScreen),
}

impl ActiveScreen {
    /// A fresh screen for `destination`, in its default state
    pub fn open(destination: Destination) -> Self {
        match destination {
            Destination::Tap => Self::Tap(TapScreen::default()),
            Destination::TouchAndHold => Self::LongPress(LongPressScreen::default()),
            Destination::Drag => Self::Drag(DragScreen::default()),
            Destination::Rotate => Self::Rotate(RotateScreen::default()),
            Destination::LineDrawing => Self::LineDrawing(LineDrawingScreen::default()),
        }
    }

    fn inner(&self) -> &dyn Screen {
        match self {
            Self::Tap(screen) => screen,
            Self::LongPress(screen) => screen,
            Self::Drag(screen) => screen,
            Self::Rotate(screen) => screen,
            Self::LineDrawing(screen) => screen,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn Screen {
        match self {
            Self::Tap(screen) => screen,
            Self::LongPress(screen) => screen,
            Self::Drag(screen) => screen,
            Self::Rotate(screen) => screen,
            Self::LineDrawing(screen) => screen,
        }
    }
}

impl Screen for ActiveScreen {
    fn destination(&self) -> Destination {
        self.inner().destination()
    }

    fn instructions(&self) -> &'static str {
        self.inner().instructions()
    }

    fn gestures(&self) -> GestureMask {
        self.inner().gestures()
    }

    fn reset(&mut self) {
        self.inner_mut().reset();
    }

    fn frame(&self, canvas: Rect) -> Rect {
        self.inner().frame(canvas)
    }

    fn hit_test(&self, pos: Pos2) -> bool {
        self.inner().hit_test(pos)
    }

    fn rotation_pivot(&self) -> Option<Pos2> {
        self.inner().rotation_pivot()
    }

    fn on_changed(&mut self, event: &GestureEvent) {
        self.inner_mut().on_changed(event);
    }

    fn on_ended(&mut self, event: &GestureEvent) {
        self.inner_mut().on_ended(event);
    }

    fn paint(&self, ui: &Ui, painter: &Painter, canvas: Rect, animation_secs: f32) {
        self.inner().paint(ui, painter, canvas, animation_secs);
    }
}

/// `size` centered in `canvas`
fn centered(canvas: Rect, size: egui::Vec2) -> Rect {
    Rect::from_center_size(canvas.center(), size)
}
