/// Reusable UI widgets.
pub mod size_bar;
pub mod status_bar;
pub mod toolbar;
