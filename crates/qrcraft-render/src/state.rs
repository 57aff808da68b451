//! Generator state: the single record driving rendering and export.

use serde::{Deserialize, Serialize};

/// File format produced by an export.
///
/// Each variant selects one export routine. Only [`ExportFormat::Csv`]
/// works without the rendered raster.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Lossless raster image.
    #[default]
    Png,
    /// Lossy raster image.
    Jpeg,
    /// Single-page document with title, image, and caption.
    Pdf,
    /// Two-column table of the generator settings.
    Csv,
}

impl ExportFormat {
    /// All formats in the order they appear in the UI.
    pub const ALL: [Self; 4] = [Self::Png, Self::Jpeg, Self::Pdf, Self::Csv];

    /// Download filename for this format.
    #[must_use]
    pub const fn filename(self) -> &'static str {
        match self {
            Self::Png => "qrcode.png",
            Self::Jpeg => "qrcode.jpg",
            Self::Pdf => "qrcode.pdf",
            Self::Csv => "qrcode-data.csv",
        }
    }

    /// MIME type passed to the browser `Blob`.
    #[must_use]
    pub const fn mime_type(self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
            Self::Pdf => "application/pdf",
            Self::Csv => "text/csv;charset=utf-8;",
        }
    }

    /// Short uppercase label used on buttons (e.g. `"PNG"`).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Png => "PNG",
            Self::Jpeg => "JPEG",
            Self::Pdf => "PDF",
            Self::Csv => "CSV",
        }
    }

    /// Human-readable name (e.g. `"PDF Document"`).
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Png => "PNG Image",
            Self::Jpeg => "JPEG Image",
            Self::Pdf => "PDF Document",
            Self::Csv => "CSV Data",
        }
    }

    /// One-line hint shown under the format picker.
    #[must_use]
    pub fn hint(self) -> String {
        match self {
            Self::Csv => "Exports QR code data and settings as a spreadsheet".to_owned(),
            other => format!("Downloads the QR code as a {}", other.description()),
        }
    }

    /// Whether the export routine reads the rendered raster.
    #[must_use]
    pub const fn needs_artifact(self) -> bool {
        !matches!(self, Self::Csv)
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// All mutable state of the generator panel.
///
/// Colors are stored exactly as typed; interpretation (and fallback for
/// malformed values) is left to the renderer.  The only validation is
/// the size bound, enforced by [`GeneratorState::set_size`] in the same
/// way the UI slider enforces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorState {
    /// Text or URL to encode.  Empty disables export.
    pub content: String,

    /// Edge length of the rendered artifact in pixels.
    ///
    /// Must lie within [`Self::MIN_SIZE`]..=[`Self::MAX_SIZE`].
    pub size: u32,

    /// Color of the dark modules.
    pub foreground_color: String,

    /// Color of the light modules and the quiet zone.
    pub background_color: String,

    /// Which export routine the download button runs.
    pub export_format: ExportFormat,
}

impl GeneratorState {
    pub const MIN_SIZE: u32 = 128;
    pub const MAX_SIZE: u32 = 512;

    pub const DEFAULT_CONTENT: &'static str = "https://example.com";
    pub const DEFAULT_SIZE: u32 = 256;
    pub const DEFAULT_FOREGROUND: &'static str = "#000000";
    pub const DEFAULT_BACKGROUND: &'static str = "#ffffff";

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    /// Set the artifact size, clamped to the slider range.
    pub fn set_size(&mut self, size: u32) {
        self.size = size.clamp(Self::MIN_SIZE, Self::MAX_SIZE);
    }

    pub fn set_foreground_color(&mut self, color: impl Into<String>) {
        self.foreground_color = color.into();
    }

    pub fn set_background_color(&mut self, color: impl Into<String>) {
        self.background_color = color.into();
    }

    pub const fn set_export_format(&mut self, format: ExportFormat) {
        self.export_format = format;
    }

    /// Returns `true` when there is content to export.
    #[must_use]
    pub fn can_export(&self) -> bool {
        !self.content.is_empty()
    }

    /// Returns `true` when `size` lies within the slider range.
    ///
    /// Always holds for states mutated through the setters; may fail
    /// for states deserialized from untrusted JSON.
    #[must_use]
    pub const fn size_in_range(&self) -> bool {
        self.size >= Self::MIN_SIZE && self.size <= Self::MAX_SIZE
    }
}

impl Default for GeneratorState {
    fn default() -> Self {
        Self {
            content: Self::DEFAULT_CONTENT.to_owned(),
            size: Self::DEFAULT_SIZE,
            foreground_color: Self::DEFAULT_FOREGROUND.to_owned(),
            background_color: Self::DEFAULT_BACKGROUND.to_owned(),
            export_format: ExportFormat::default(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_initial_page_state() {
        let state = GeneratorState::default();
        assert_eq!(state.content, "https://example.com");
        assert_eq!(state.size, 256);
        assert_eq!(state.foreground_color, "#000000");
        assert_eq!(state.background_color, "#ffffff");
        assert_eq!(state.export_format, ExportFormat::Png);
    }

    #[test]
    fn set_size_clamps_to_slider_range() {
        let mut state = GeneratorState::default();
        state.set_size(10);
        assert_eq!(state.size, GeneratorState::MIN_SIZE);
        state.set_size(4096);
        assert_eq!(state.size, GeneratorState::MAX_SIZE);
        state.set_size(300);
        assert_eq!(state.size, 300);
    }

    #[test]
    fn switching_format_touches_only_export_format() {
        let mut state = GeneratorState::default();
        state.set_content("hello");
        state.set_size(400);
        state.set_foreground_color("#123456");
        state.set_background_color("not-a-color");

        for format in ExportFormat::ALL {
            let before = state.clone();
            state.set_export_format(format);
            assert_eq!(state.export_format, format);
            assert_eq!(
                GeneratorState {
                    export_format: before.export_format,
                    ..state.clone()
                },
                before,
            );
        }
    }

    #[test]
    fn empty_content_disables_export() {
        let mut state = GeneratorState::default();
        assert!(state.can_export());
        state.set_content("");
        assert!(!state.can_export());
    }

    #[test]
    fn colors_are_stored_uninterpreted() {
        let mut state = GeneratorState::default();
        state.set_foreground_color("  definitely not a color ");
        assert_eq!(state.foreground_color, "  definitely not a color ");
    }

    #[test]
    fn format_metadata() {
        assert_eq!(ExportFormat::Png.filename(), "qrcode.png");
        assert_eq!(ExportFormat::Jpeg.filename(), "qrcode.jpg");
        assert_eq!(ExportFormat::Pdf.filename(), "qrcode.pdf");
        assert_eq!(ExportFormat::Csv.filename(), "qrcode-data.csv");
        assert_eq!(ExportFormat::Csv.mime_type(), "text/csv;charset=utf-8;");
        assert!(!ExportFormat::Csv.needs_artifact());
        assert!(ExportFormat::Pdf.needs_artifact());
        assert_eq!(ExportFormat::Jpeg.to_string(), "JPEG");
    }

    #[test]
    fn format_hints() {
        assert_eq!(
            ExportFormat::Pdf.hint(),
            "Downloads the QR code as a PDF Document"
        );
        assert_eq!(
            ExportFormat::Csv.hint(),
            "Exports QR code data and settings as a spreadsheet"
        );
    }

    #[test]
    fn state_json_round_trip_and_partial_input() {
        let state = GeneratorState {
            export_format: ExportFormat::Csv,
            ..GeneratorState::default()
        };
        let json = serde_json::to_string(&state).unwrap();
        assert!(json.contains(r#""export_format":"csv""#));
        let back: GeneratorState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);

        // Missing fields fall back to defaults.
        let partial: GeneratorState = serde_json::from_str(r#"{"content":"abc"}"#).unwrap();
        assert_eq!(partial.content, "abc");
        assert_eq!(partial.size, GeneratorState::DEFAULT_SIZE);
    }

    #[test]
    fn size_in_range_detects_untrusted_values() {
        let state: GeneratorState = serde_json::from_str(r#"{"size":64}"#).unwrap();
        assert!(!state.size_in_range());
        assert!(GeneratorState::default().size_in_range());
    }
}
