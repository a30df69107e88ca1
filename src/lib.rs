#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod geometry;
pub mod input;
pub mod navigator;
pub mod panels;
pub mod screens;

pub use app::GesturesApp;
pub use config::GestureConfig;
pub use error::{ConfigError, ConfigResult};
pub use geometry::Angle;
pub use input::{DragValue, GestureEvent, GestureMask, GesturePhase, GestureRecognizer, PointerSample};
pub use navigator::Destination;
pub use screens::{ActiveScreen, Screen};
