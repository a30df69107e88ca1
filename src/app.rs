use crate::config::GestureConfig;
use crate::error::ConfigResult;
use crate::input::{GestureEvent, GestureMask, GestureRecognizer, PointerSample};
use crate::navigator::Destination;
use crate::panels::{detail_panel, navigation_panel, settings_window};
use crate::screens::{ActiveScreen, Screen};

/// Root of the app: the navigator selection and the screen it pushed.
///
/// Nothing here is saved on shutdown; every screen starts from its default.
#[derive(Debug)]
pub struct GesturesApp {
    pub(crate) config: GestureConfig,
    // Edited in the settings window, adopted on "Apply"
    pub(crate) settings_draft: GestureConfig,
    pub(crate) show_settings: bool,
    screen: Option<ActiveScreen>,
    recognizer: GestureRecognizer,
}

impl Default for GesturesApp {
    fn default() -> Self {
        let config = GestureConfig::default();
        Self {
            settings_draft: config.clone(),
            recognizer: GestureRecognizer::new(config.clone(), GestureMask::NONE),
            config,
            show_settings: false,
            screen: None,
        }
    }
}

impl GesturesApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    pub fn screen(&self) -> Option<&ActiveScreen> {
        self.screen.as_ref()
    }

    pub fn current_destination(&self) -> Option<Destination> {
        self.screen.as_ref().map(|screen| screen.destination())
    }

    pub fn is_tracking_gesture(&self) -> bool {
        self.recognizer.is_tracking()
    }

    /// Push the screen for `destination`.
    ///
    /// Leaving a screen discards its state; selecting the screen already shown keeps it.
    pub fn navigate(&mut self, destination: Destination) {
        if self.current_destination() == Some(destination) {
            return;
        }

        let screen = ActiveScreen::open(destination);
        let mut recognizer = GestureRecognizer::new(self.config.clone(), screen.gestures());
        recognizer.set_pivot(screen.rotation_pivot());

        log::info!("Navigated to {}", destination.label());
        self.screen = Some(screen);
        self.recognizer = recognizer;
    }

    /// The toolbar "Reset" action of the current screen
    pub fn reset_screen(&mut self) {
        if let Some(screen) = &mut self.screen {
            screen.reset();
            log::info!("Reset {}", screen.destination().label());
        }
    }

    /// Validate and adopt a new gesture configuration
    pub fn apply_config(&mut self, config: GestureConfig) -> ConfigResult<()> {
        self.recognizer.set_config(config.clone())?;
        log::info!("Gesture configuration updated: {config:?}");
        self.config = config;
        Ok(())
    }

    /// Run one frame of input through the recognizer and deliver the results
    /// to the current screen.
    ///
    /// `sample` must already be relative to the screen's frame. Presses only
    /// start a gesture when `over_canvas` is set and they land on the shape.
    pub fn process_input(&mut self, sample: &PointerSample, over_canvas: bool) -> Vec<GestureEvent> {
        let Some(screen) = self.screen.as_mut() else {
            return Vec::new();
        };

        let events = self
            .recognizer
            .update(sample, |pos| over_canvas && screen.hit_test(pos));
        for event in &events {
            log::trace!("{} received {event:?}", screen.destination().label());
            screen.handle(event);
        }

        events
    }
}

impl eframe::App for GesturesApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        navigation_panel(self, ctx);
        settings_window(self, ctx);
        detail_panel(self, ctx);
    }
}
