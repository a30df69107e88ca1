use egui::{Color32, Painter, Pos2, Rect, Ui, Vec2};

use super::{Screen, centered};
use crate::geometry::hit_testing::circle_contains;
use crate::input::{DragValue, GestureEvent, GestureMask};
use crate::navigator::Destination;

pub const CIRCLE_SIZE: f32 = 100.0;

const CIRCLE_COLOR: Color32 = Color32::from_rgb(48, 176, 199);

/// A circle that follows the pointer while dragged
#[derive(Debug, Clone, Default)]
pub struct DragScreen {
    offset: Vec2,
}

impl DragScreen {
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Offset that puts the circle's center under the pointer
    pub fn offset_for(value: &DragValue) -> Vec2 {
        value.start_location.to_vec2() + value.translation() - Vec2::splat(CIRCLE_SIZE / 2.0)
    }

    fn center(&self) -> Pos2 {
        Pos2::ZERO + self.offset + Vec2::splat(CIRCLE_SIZE / 2.0)
    }
}

impl Screen for DragScreen {
    fn destination(&self) -> Destination {
        Destination::Drag
    }

    fn instructions(&self) -> &'static str {
        "Use one finger to drag the circle around"
    }

    fn gestures(&self) -> GestureMask {
        GestureMask::DRAG
    }

    fn reset(&mut self) {
        self.offset = Vec2::ZERO;
    }

    fn frame(&self, canvas: Rect) -> Rect {
        centered(canvas, Vec2::splat(CIRCLE_SIZE))
    }

    fn hit_test(&self, pos: Pos2) -> bool {
        circle_contains(self.center(), CIRCLE_SIZE / 2.0, pos)
    }

    fn on_changed(&mut self, event: &GestureEvent) {
        if let GestureEvent::Drag { value, .. } = event {
            self.offset = Self::offset_for(value);
        }
    }

    fn on_ended(&mut self, event: &GestureEvent) {
        if let GestureEvent::Drag { .. } = event {
            log::debug!("Circle dropped at offset {:?}", self.offset);
        }
    }

    fn paint(&self, _ui: &Ui, painter: &Painter, canvas: Rect, _animation_secs: f32) {
        let center = self.frame(canvas).min + self.center().to_vec2();
        painter.circle_filled(center, CIRCLE_SIZE / 2.0, CIRCLE_COLOR);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn test_default_hit_area_is_layout_slot() {
        let screen = DragScreen::default();
        assert!(screen.hit_test(pos2(50.0, 50.0)));
        assert!(!screen.hit_test(pos2(150.0, 50.0)));
    }

    #[test]
    fn test_hit_area_follows_offset() {
        let mut screen = DragScreen::default();
        screen.on_changed(&GestureEvent::Drag {
            value: DragValue {
                start_location: pos2(50.0, 50.0),
                location: pos2(250.0, 50.0),
            },
            phase: crate::input::GesturePhase::Changed,
        });
        assert_eq!(screen.offset(), Vec2::new(200.0, 0.0));
        assert!(screen.hit_test(pos2(250.0, 50.0)));
        assert!(!screen.hit_test(pos2(50.0, 50.0)));
    }
}
