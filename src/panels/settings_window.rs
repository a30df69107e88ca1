use egui::Slider;

use crate::GesturesApp;
use crate::config::GestureConfig;

pub fn settings_window(app: &mut GesturesApp, ctx: &egui::Context) {
    let mut open = app.show_settings;

    egui::Window::new("Settings")
        .open(&mut open)
        .resizable(false)
        .show(ctx, |ui| {
            let draft = &mut app.settings_draft;

            ui.add(Slider::new(&mut draft.min_drag_distance, 0.0..=50.0).text("Drag distance (pt)"));
            ui.add(Slider::new(&mut draft.long_press_secs, 0.1..=3.0).text("Long press (s)"));
            ui.add(
                Slider::new(&mut draft.long_press_max_distance, 0.0..=50.0)
                    .text("Long press slop (pt)"),
            );

            let mut degrees = draft.min_rotation_angle.to_degrees();
            if ui
                .add(Slider::new(&mut degrees, 0.0..=45.0).text("Rotation threshold (°)"))
                .changed()
            {
                draft.min_rotation_angle = degrees.to_radians();
            }

            ui.add(Slider::new(&mut draft.animation_secs, 0.0..=2.0).text("Animation (s)"));

            ui.separator();
            ui.horizontal(|ui| {
                let dirty = app.settings_draft != app.config;
                if ui.add_enabled(dirty, egui::Button::new("Apply")).clicked() {
                    if let Err(err) = app.apply_config(app.settings_draft.clone()) {
                        log::warn!("Rejected gesture configuration: {err}");
                        app.settings_draft = app.config.clone();
                    }
                }
                if ui.button("Defaults").clicked() {
                    app.settings_draft = GestureConfig::default();
                }
            });
        });

    app.show_settings = open;
}
