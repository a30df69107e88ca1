use egui::{Color32, Id, Painter, Pos2, Rect, Ui, Vec2};
use rand::Rng;

use super::{Screen, centered};
use crate::input::{GestureEvent, GestureMask};
use crate::navigator::Destination;

pub const RECTANGLE_SIZE: Vec2 = Vec2::new(250.0, 450.0);

/// A color with each channel in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RgbColor {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
}

impl RgbColor {
    /// Each channel drawn independently and uniformly from `[0, 1]`
    pub fn random(rng: &mut impl Rng) -> Self {
        Self {
            red: rng.random_range(0.0..=1.0),
            green: rng.random_range(0.0..=1.0),
            blue: rng.random_range(0.0..=1.0),
        }
    }

    pub fn to_color32(self) -> Color32 {
        let channel = |value: f32| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
        Color32::from_rgb(channel(self.red), channel(self.green), channel(self.blue))
    }

    fn from_color32(color: Color32) -> Self {
        Self {
            red: f32::from(color.r()) / 255.0,
            green: f32::from(color.g()) / 255.0,
            blue: f32::from(color.b()) / 255.0,
        }
    }
}

/// Color of the tap rectangle
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum TapColor {
    /// The theme's primary foreground color
    #[default]
    Primary,
    Rgb(RgbColor),
}

impl TapColor {
    fn resolve(self, ui: &Ui) -> RgbColor {
        match self {
            Self::Primary => RgbColor::from_color32(ui.visuals().strong_text_color()),
            Self::Rgb(rgb) => rgb,
        }
    }
}

/// Tapping the rectangle paints it a random color
#[derive(Debug, Clone, Default)]
pub struct TapScreen {
    color: TapColor,
}

impl TapScreen {
    pub fn color(&self) -> TapColor {
        self.color
    }

    /// Apply a finished tap, drawing the new color from `rng`
    pub fn tap_with(&mut self, rng: &mut impl Rng) {
        self.color = TapColor::Rgb(RgbColor::random(rng));
    }
}

impl Screen for TapScreen {
    fn destination(&self) -> Destination {
        Destination::Tap
    }

    fn instructions(&self) -> &'static str {
        "Tap the rectangle to change its color"
    }

    fn gestures(&self) -> GestureMask {
        GestureMask::TAP
    }

    fn reset(&mut self) {
        self.color = TapColor::Primary;
    }

    fn frame(&self, canvas: Rect) -> Rect {
        centered(canvas, RECTANGLE_SIZE)
    }

    fn hit_test(&self, pos: Pos2) -> bool {
        Rect::from_min_size(Pos2::ZERO, RECTANGLE_SIZE).contains(pos)
    }

    fn on_ended(&mut self, event: &GestureEvent) {
        if let GestureEvent::Tap { location } = event {
            self.tap_with(&mut rand::rng());
            log::debug!("Tap at {location:?} changed color to {:?}", self.color);
        }
    }

    fn paint(&self, ui: &Ui, painter: &Painter, canvas: Rect, animation_secs: f32) {
        let target = self.color.resolve(ui);
        let ctx = ui.ctx();
        let id = Id::new("tap_rectangle_color");
        let animated = RgbColor {
            red: ctx.animate_value_with_time(id.with("red"), target.red, animation_secs),
            green: ctx.animate_value_with_time(id.with("green"), target.green, animation_secs),
            blue: ctx.animate_value_with_time(id.with("blue"), target.blue, animation_secs),
        };

        painter.rect_filled(self.frame(canvas), 0.0, animated.to_color32());
    }
}
