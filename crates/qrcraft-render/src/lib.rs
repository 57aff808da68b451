//! qrcraft-render: Generator state and QR rasterization (sans-IO).
//!
//! Holds the single flat record that drives the generator panel and
//! turns it into a raster visual artifact:
//! state -> render request -> QR symbol (level H) -> RGBA image.
//!
//! This crate has **no I/O dependencies** -- it operates on in-memory
//! values and returns structured data. All browser/filesystem
//! interaction lives in `qrcraft-io` and `qrcraft-cli`.

pub mod color;
pub mod render;
pub mod state;

pub use color::parse_css_color;
pub use render::{Artifact, ERROR_CORRECTION, QUIET_ZONE, RenderError, RenderRequest, render};
pub use state::{ExportFormat, GeneratorState};

/// Re-export `RgbaImage` so downstream crates can reference the
/// rendered raster without depending on `image` directly.
pub use image::RgbaImage;

/// Render the visual artifact for the current generator state.
///
/// Convenience wrapper around [`render`] using
/// [`RenderRequest::from_state`].
///
/// # Errors
///
/// Returns [`RenderError::DataTooLong`] if the content does not fit in
/// the largest QR version at error-correction level H.
pub fn render_state(state: &GeneratorState) -> Result<Artifact, RenderError> {
    render(&RenderRequest::from_state(state))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_state_renders_at_default_size() {
        let state = GeneratorState::default();
        let artifact = render_state(&state).unwrap();
        assert_eq!(artifact.width(), GeneratorState::DEFAULT_SIZE);
        assert_eq!(artifact.height(), GeneratorState::DEFAULT_SIZE);
    }

    #[test]
    fn every_valid_size_is_honored_exactly() {
        let mut state = GeneratorState::default();
        for size in GeneratorState::MIN_SIZE..=GeneratorState::MAX_SIZE {
            state.set_size(size);
            let artifact = render_state(&state).unwrap();
            assert_eq!(
                (artifact.width(), artifact.height()),
                (size, size),
                "artifact dimension mismatch at size {size}",
            );
        }
    }

    #[test]
    fn oversized_content_reports_data_too_long() {
        let mut state = GeneratorState::default();
        state.set_content("x".repeat(4000));
        let result = render_state(&state);
        assert!(matches!(result, Err(RenderError::DataTooLong)));
    }
}
