/// Volumetrik Core — scan session, analysis, view models, and persistence.
///
/// This crate contains all dashboard logic with zero UI dependencies.
/// Frontends render the view models it produces and feed user intents back
/// through [`dashboard::Dashboard::dispatch`].
///
/// # Modules
///
/// - [`model`] — Entries, snapshots, browse listings, and formatting helpers.
/// - [`analysis`] — File-type aggregation, top-N rankings, and the sort engine.
/// - [`session`] — The cancellable scan session state machine.
/// - [`service`] — The collaborator interface plus local and HTTP implementations.
/// - [`settings`] — Settings document and the settings editing/sync layer.
/// - [`layout`] — Widget geometry with debounced persistence.
/// - [`view`] — View coordinator, per-widget view models, palettes.
/// - [`dashboard`] — Intent dispatch tying everything together.
pub mod analysis;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod i18n;
pub mod layout;
pub mod model;
pub mod service;
pub mod session;
pub mod settings;
pub mod view;
