//! qrcraft-export: Pure format serializers (sans-IO)
//!
//! Converts the generator state and its rendered artifact into
//! downloadable files: PNG, JPEG, PDF, and CSV.  The browser download
//! itself lives in `qrcraft-io`; this crate only produces bytes.

pub mod csv;
pub mod pdf;
pub mod raster;
pub mod timestamp;

pub use csv::to_csv;
pub use pdf::{Orientation, PdfLayout, to_pdf, truncate_caption};
pub use raster::{to_jpeg, to_png};

use qrcraft_render::{Artifact, ExportFormat, GeneratorState};

/// Errors that can occur while serializing an export.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// PNG or JPEG encoding failed.
    #[error("image encoding failed: {0}")]
    ImageEncode(#[from] image::ImageError),

    /// PDF document construction failed.
    #[error("PDF generation failed: {0}")]
    Pdf(#[from] lopdf::Error),

    /// Writing the serialized document failed.
    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),
}

/// An in-memory file ready to hand to a download mechanism.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    /// Suggested download filename (e.g. `qrcode.png`).
    pub filename: &'static str,
    /// MIME type for the browser `Blob`.
    pub mime_type: &'static str,
    /// Encoded file contents.
    pub bytes: Vec<u8>,
}

/// Build the export file for the state's selected format.
///
/// Returns `Ok(None)` (a silent no-op) when
/// - `state.content` is empty, for every format, or
/// - the format needs the raster and `artifact` is `None` (the render
///   has not been mounted yet or failed).
///
/// `timestamp` is only used by the CSV format.
///
/// # Errors
///
/// Returns [`ExportError`] if a serializer fails.  No serializer fails
/// for a well-formed artifact.
pub fn export(
    state: &GeneratorState,
    artifact: Option<&Artifact>,
    timestamp: &str,
) -> Result<Option<ExportFile>, ExportError> {
    if !state.can_export() {
        log::debug!("export skipped: content is empty");
        return Ok(None);
    }

    let format = state.export_format;
    let bytes = match (format, artifact) {
        (ExportFormat::Csv, _) => to_csv(state, timestamp).into_bytes(),
        (_, None) => {
            log::debug!("export skipped: no rendered artifact for {format}");
            return Ok(None);
        }
        (ExportFormat::Png, Some(artifact)) => to_png(artifact)?,
        (ExportFormat::Jpeg, Some(artifact)) => to_jpeg(artifact)?,
        (ExportFormat::Pdf, Some(artifact)) => to_pdf(artifact, &state.content)?,
    };

    log::debug!("exported {} ({} bytes)", format.filename(), bytes.len());
    Ok(Some(ExportFile {
        filename: format.filename(),
        mime_type: format.mime_type(),
        bytes,
    }))
}
