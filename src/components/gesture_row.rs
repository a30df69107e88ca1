use eframe::egui;

use crate::navigator::Destination;

const ICON_WIDTH: f32 = 30.0;
const PADDING: f32 = 10.0;

/// A navigation list row: icon, bold title and a wrapped description
pub struct GestureRow {
    pub destination: Destination,
    pub selected: bool,
}

impl GestureRow {
    pub fn new(destination: Destination, selected: bool) -> Self {
        Self {
            destination,
            selected,
        }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let width = ui.available_width();
        let text_width = (width - ICON_WIDTH - 3.0 * PADDING).max(40.0);
        let visuals = ui.visuals().clone();

        let title = ui.painter().layout(
            self.destination.label().to_owned(),
            egui::FontId::proportional(20.0),
            visuals.strong_text_color(),
            text_width,
        );
        let description = ui.painter().layout(
            self.destination.description().to_owned(),
            egui::FontId::proportional(14.0),
            visuals.weak_text_color(),
            text_width,
        );
        let title_height = title.size().y;
        let height = 2.0 * PADDING + title_height + 2.0 + description.size().y;

        let (rect, response) = ui.allocate_exact_size(egui::vec2(width, height), egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let bg_color = if self.selected {
                visuals.selection.bg_fill
            } else if response.hovered() {
                visuals.widgets.hovered.weak_bg_fill
            } else {
                egui::Color32::TRANSPARENT
            };
            ui.painter().rect_filled(rect, 4.0, bg_color);

            ui.painter().text(
                egui::pos2(rect.left() + PADDING + ICON_WIDTH / 2.0, rect.center().y),
                egui::Align2::CENTER_CENTER,
                self.destination.icon(),
                egui::FontId::proportional(24.0),
                visuals.hyperlink_color,
            );

            let text_left = rect.left() + 2.0 * PADDING + ICON_WIDTH;
            ui.painter().galley(
                egui::pos2(text_left, rect.top() + PADDING),
                title,
                visuals.strong_text_color(),
            );
            ui.painter().galley(
                egui::pos2(text_left, rect.top() + PADDING + title_height + 2.0),
                description,
                visuals.weak_text_color(),
            );
        }

        response
    }
}
