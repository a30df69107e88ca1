use egui::{Align, Layout, RichText, Sense};

use crate::GesturesApp;
use crate::input::PointerSample;
use crate::screens::Screen;

pub fn detail_panel(app: &mut GesturesApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let Some(screen) = app.screen() else {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("Select a Gesture Example").weak());
            });
            return;
        };
        let title = screen.destination().label();
        let instructions = screen.instructions();

        // Toolbar
        let mut reset = false;
        ui.horizontal(|ui| {
            ui.heading(title);
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                reset = ui.button("Reset").clicked();
            });
        });
        ui.label(instructions);
        ui.separator();
        if reset {
            app.reset_screen();
        }

        let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::click_and_drag());
        let canvas = response.rect;

        if let Some(screen) = app.screen() {
            let origin = screen.frame(canvas).min;
            let sample = PointerSample::from_egui(ctx).relative_to(origin);
            app.process_input(&sample, response.contains_pointer());
        }

        // Keep frames coming while held so the long press timer can fire
        if app.is_tracking_gesture() {
            ctx.request_repaint();
        }

        if let Some(screen) = app.screen() {
            screen.paint(ui, &painter, canvas, app.config().animation_secs);
        }
    });
}
