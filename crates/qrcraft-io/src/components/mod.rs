//! Dioxus UI components for qrcraft.
//!
//! Provides the generator panel with its live preview, labeled
//! controls, and export format picker.

mod controls;
mod format_picker;
mod generator;
mod preview;

pub use format_picker::FormatPicker;
pub use generator::GeneratorPanel;
pub use preview::QrPreview;
