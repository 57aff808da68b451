//! qrcraft-io: Browser I/O and Dioxus component library.
//!
//! Handles Blob downloads and preview Blob URLs, and provides the
//! generator panel for the qrcraft web application.

pub mod components;
pub mod download;
pub mod raster;

pub use components::{FormatPicker, GeneratorPanel, QrPreview};
