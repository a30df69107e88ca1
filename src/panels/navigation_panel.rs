use crate::GesturesApp;
use crate::components::gesture_row::GestureRow;
use crate::navigator::Destination;

pub fn navigation_panel(app: &mut GesturesApp, ctx: &egui::Context) {
    egui::SidePanel::left("navigation_panel")
        .resizable(true)
        .default_width(300.0)
        .show(ctx, |ui| {
            ui.heading("Gestures");
            ui.separator();

            let current = app.current_destination();
            for destination in Destination::ALL {
                let row = GestureRow::new(destination, current == Some(destination));
                if row.show(ui).clicked() {
                    app.navigate(destination);
                }
            }

            ui.separator();
            ui.toggle_value(&mut app.show_settings, "⚙ Settings");
        });
}
