/// Dashboard widgets and dialogs.
///
/// Each widget panel draws one view model and returns the intent the user
/// triggered, if any; the app applies it after the frame's windows are
/// drawn.
pub mod browse_dialog;
pub mod browser_panel;
pub mod capacity_panel;
pub mod chart_panel;
pub mod rankings_panel;
pub mod settings_panel;
pub mod type_usage_panel;
