mod detail_panel;
mod navigation_panel;
mod settings_window;

pub use detail_panel::detail_panel;
pub use navigation_panel::navigation_panel;
pub use settings_window::settings_window;
