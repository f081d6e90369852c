/// Volumetrik GUI — egui-based dashboard frontend.
///
/// This crate contains all UI code. Scanning, analysis and persistence live
/// in `volumetrik-core`; the UI only draws its view models and feeds user
/// intents back into the dashboard controller.
pub mod app;
pub mod grid;
pub mod panels;
pub mod state;
pub mod theme;
pub mod widgets;

pub use app::{VolumetrikApp, VolumetrikState};
