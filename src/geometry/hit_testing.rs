use egui::emath::Rot2;
use egui::{Pos2, Rect};

use super::Angle;

/// Whether `pos` lies inside the circle
pub fn circle_contains(center: Pos2, radius: f32, pos: Pos2) -> bool {
    pos.distance(center) <= radius
}

/// Whether `pos` lies inside the capsule that fills `rect`.
///
/// The capsule's rounded ends have a radius of half its shorter side.
pub fn capsule_contains(rect: Rect, pos: Pos2) -> bool {
    if !rect.is_positive() {
        return false;
    }

    let radius = rect.width().min(rect.height()) / 2.0;
    let center = rect.center();
    let half_spine = (rect.size() / 2.0 - egui::vec2(radius, radius)).max(egui::Vec2::ZERO);

    // Distance from the spine segment running along the long axis
    let local = pos - center;
    let nearest = egui::vec2(
        local.x.clamp(-half_spine.x, half_spine.x),
        local.y.clamp(-half_spine.y, half_spine.y),
    );
    (local - nearest).length() <= radius
}

/// Whether `pos` lies inside `rect` once it is turned by `angle` about its center
pub fn rotated_rect_contains(rect: Rect, angle: Angle, pos: Pos2) -> bool {
    let center = rect.center();
    let unrotated = center + Rot2::from_angle(angle.radians()).inverse() * (pos - center);
    rect.contains(unrotated)
}

/// Corners of `rect` turned by `angle` about its center, clockwise from the top left
pub fn rotated_rect_corners(rect: Rect, angle: Angle) -> [Pos2; 4] {
    let center = rect.center();
    let rot = Rot2::from_angle(angle.radians());
    [
        rect.left_top(),
        rect.right_top(),
        rect.right_bottom(),
        rect.left_bottom(),
    ]
    .map(|corner| center + rot * (corner - center))
}
