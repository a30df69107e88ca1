use egui::{Color32, Painter, Pos2, Rect, Shape, Stroke, Ui, Vec2};

use super::{Screen, centered};
use crate::geometry::Angle;
use crate::geometry::hit_testing::{rotated_rect_contains, rotated_rect_corners};
use crate::input::{GestureEvent, GestureMask};
use crate::navigator::Destination;

pub const SQUARE_SIZE: f32 = 225.0;

const SQUARE_COLOR: Color32 = Color32::from_rgb(255, 59, 48);

/// A square turned by a two finger rotation
#[derive(Debug, Clone, Default)]
pub struct RotateScreen {
    rotation: Angle,
}

impl RotateScreen {
    pub fn rotation(&self) -> Angle {
        self.rotation
    }

    fn local_rect() -> Rect {
        Rect::from_min_size(Pos2::ZERO, Vec2::splat(SQUARE_SIZE))
    }
}

impl Screen for RotateScreen {
    fn destination(&self) -> Destination {
        Destination::Rotate
    }

    fn instructions(&self) -> &'static str {
        "Use two fingers to rotate the box"
    }

    fn gestures(&self) -> GestureMask {
        GestureMask::ROTATION
    }

    fn reset(&mut self) {
        self.rotation = Angle::ZERO;
    }

    fn frame(&self, canvas: Rect) -> Rect {
        centered(canvas, Vec2::splat(SQUARE_SIZE))
    }

    fn hit_test(&self, pos: Pos2) -> bool {
        rotated_rect_contains(Self::local_rect(), self.rotation, pos)
    }

    fn rotation_pivot(&self) -> Option<Pos2> {
        Some(Self::local_rect().center())
    }

    fn on_changed(&mut self, event: &GestureEvent) {
        if let GestureEvent::Rotation { angle, .. } = event {
            self.rotation = *angle;
        }
    }

    fn on_ended(&mut self, event: &GestureEvent) {
        if let GestureEvent::Rotation { angle, .. } = event {
            self.rotation = *angle;
            log::debug!("Box rotated to {:.1}°", angle.degrees());
        }
    }

    fn paint(&self, _ui: &Ui, painter: &Painter, canvas: Rect, _animation_secs: f32) {
        let corners = rotated_rect_corners(self.frame(canvas), self.rotation);
        painter.add(Shape::convex_polygon(corners.to_vec(), SQUARE_COLOR, Stroke::NONE));
    }
}
