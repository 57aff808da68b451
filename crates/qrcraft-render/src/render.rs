//! QR symbol rasterization.
//!
//! Encodes the content with the [`qrcode`] crate at a fixed
//! error-correction level and paints the module grid into an RGBA
//! image whose edge length is exactly the requested size.
//!
//! The symbol is surrounded by a [`QUIET_ZONE`]-module margin.  Each
//! output pixel samples the module at `floor(pixel * cells / size)`, so
//! module edges may differ by one pixel when `size` is not a multiple of
//! the cell count, but the image dimensions are always exact.

use image::{Rgba, RgbaImage};
use qrcode::{Color, EcLevel, QrCode};

use crate::color::parse_css_color;
use crate::state::GeneratorState;

/// Error-correction level used for every symbol (highest redundancy).
pub const ERROR_CORRECTION: EcLevel = EcLevel::H;

/// Width of the light margin around the symbol, in modules.
pub const QUIET_ZONE: u32 = 4;

/// Content encoded when the text input is empty, so the preview keeps
/// showing a symbol while the user types.
const PLACEHOLDER_CONTENT: &str = " ";

const FALLBACK_FOREGROUND: Rgba<u8> = Rgba([0x00, 0x00, 0x00, 0xff]);
const FALLBACK_BACKGROUND: Rgba<u8> = Rgba([0xff, 0xff, 0xff, 0xff]);

/// Errors that can occur while rendering a QR code.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The content exceeds the capacity of the largest QR version at
    /// the configured error-correction level.
    #[error("content is too long to fit in a QR code")]
    DataTooLong,

    /// Any other encoder failure.
    #[error("failed to encode QR code: {0}")]
    Encode(String),
}

impl From<qrcode::types::QrError> for RenderError {
    fn from(err: qrcode::types::QrError) -> Self {
        match err {
            qrcode::types::QrError::DataTooLong => Self::DataTooLong,
            other => Self::Encode(other.to_string()),
        }
    }
}

/// Everything the renderer needs, borrowed from the generator state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderRequest<'a> {
    /// Text to encode.
    pub content: &'a str,
    /// Output edge length in pixels.
    pub size: u32,
    /// Dark module color (CSS syntax, uninterpreted until render).
    pub foreground: &'a str,
    /// Light module and margin color (CSS syntax).
    pub background: &'a str,
    /// Error-correction level.
    pub error_correction: EcLevel,
}

impl<'a> RenderRequest<'a> {
    /// Build a request from the current generator state using
    /// [`ERROR_CORRECTION`].
    #[must_use]
    pub fn from_state(state: &'a GeneratorState) -> Self {
        Self {
            content: &state.content,
            size: state.size,
            foreground: &state.foreground_color,
            background: &state.background_color,
            error_correction: ERROR_CORRECTION,
        }
    }
}

/// The rendered visual artifact: a square RGBA raster of a QR symbol.
///
/// Does not derive `PartialEq` on purpose; comparing pixel buffers on
/// every UI diff is wasteful.  Wrap in `Rc` and compare pointers.
#[derive(Debug, Clone)]
pub struct Artifact {
    image: RgbaImage,
    modules: u32,
}

impl Artifact {
    /// Width in pixels (equals the requested size).
    #[must_use]
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Height in pixels (equals the requested size).
    #[must_use]
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Number of modules along one side of the symbol, excluding the
    /// quiet zone.
    #[must_use]
    pub const fn modules(&self) -> u32 {
        self.modules
    }

    /// The underlying raster.
    #[must_use]
    pub const fn image(&self) -> &RgbaImage {
        &self.image
    }
}

/// Render a QR code for `request`.
///
/// Malformed colors do not fail: an unparseable foreground falls back to
/// black and an unparseable background to white.
///
/// # Errors
///
/// Returns [`RenderError::DataTooLong`] if the content does not fit at
/// the requested error-correction level, or [`RenderError::Encode`] for
/// other encoder failures.
pub fn render(request: &RenderRequest<'_>) -> Result<Artifact, RenderError> {
    let content = if request.content.is_empty() {
        PLACEHOLDER_CONTENT
    } else {
        request.content
    };
    let code = QrCode::with_error_correction_level(content.as_bytes(), request.error_correction)?;

    let fg = resolve_color(request.foreground, FALLBACK_FOREGROUND, "foreground");
    let bg = resolve_color(request.background, FALLBACK_BACKGROUND, "background");

    #[expect(clippy::cast_possible_truncation)]
    let modules = code.width() as u32;
    let colors = code.to_colors();
    let cells = modules + 2 * QUIET_ZONE;
    let size = request.size.max(1);

    let image = RgbaImage::from_fn(size, size, |x, y| {
        let cx = x * cells / size;
        let cy = y * cells / size;
        let in_symbol = (QUIET_ZONE..QUIET_ZONE + modules).contains(&cx)
            && (QUIET_ZONE..QUIET_ZONE + modules).contains(&cy);
        if !in_symbol {
            return bg;
        }
        let index = ((cy - QUIET_ZONE) * modules + (cx - QUIET_ZONE)) as usize;
        match colors.get(index) {
            Some(Color::Dark) => fg,
            _ => bg,
        }
    });

    log::debug!(
        "rendered {} bytes as {modules}x{modules} modules at {size}px",
        content.len(),
    );

    Ok(Artifact { image, modules })
}

fn resolve_color(spec: &str, fallback: Rgba<u8>, role: &str) -> Rgba<u8> {
    parse_css_color(spec).unwrap_or_else(|| {
        log::debug!("unrecognized {role} color {spec:?}, using fallback");
        fallback
    })
}
