use egui::{Color32, Painter, Pos2, Rect, Stroke, Ui};

use super::Screen;
use crate::input::{GestureEvent, GestureMask};
use crate::navigator::Destination;

pub const LINE_WIDTH: f32 = 8.0;

const LINE_COLOR: Color32 = Color32::from_rgb(175, 82, 222);

/// Dragging anywhere on the canvas draws a single straight line
#[derive(Debug, Clone, Default)]
pub struct LineDrawingScreen {
    line_start: Pos2,
    line_end: Pos2,
}

impl LineDrawingScreen {
    pub fn line_start(&self) -> Pos2 {
        self.line_start
    }

    pub fn line_end(&self) -> Pos2 {
        self.line_end
    }
}

impl Screen for LineDrawingScreen {
    fn destination(&self) -> Destination {
        Destination::LineDrawing
    }

    fn instructions(&self) -> &'static str {
        "Touch and drag to make a line"
    }

    fn gestures(&self) -> GestureMask {
        GestureMask::DRAG
    }

    fn reset(&mut self) {
        self.line_start = Pos2::ZERO;
        self.line_end = Pos2::ZERO;
    }

    fn frame(&self, canvas: Rect) -> Rect {
        canvas
    }

    fn hit_test(&self, _pos: Pos2) -> bool {
        true
    }

    fn on_changed(&mut self, event: &GestureEvent) {
        if let GestureEvent::Drag { value, .. } = event {
            self.line_start = value.start_location;
            self.line_end = value.location;
        }
    }

    fn on_ended(&mut self, event: &GestureEvent) {
        if let GestureEvent::Drag { value, .. } = event {
            self.line_end = value.location;
            log::debug!("Line drawn from {:?} to {:?}", self.line_start, self.line_end);
        }
    }

    fn paint(&self, _ui: &Ui, painter: &Painter, canvas: Rect, _animation_secs: f32) {
        let offset = canvas.min.to_vec2();
        let (start, end) = (self.line_start + offset, self.line_end + offset);
        painter
            .with_clip_rect(canvas)
            .line_segment([start, end], Stroke::new(LINE_WIDTH, LINE_COLOR));
    }
}
