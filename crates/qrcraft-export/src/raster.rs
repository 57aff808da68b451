//! Raster serializers: PNG and JPEG.
//!
//! Both work directly on the rendered [`Artifact`] and return encoded
//! bytes.  JPEG has no alpha channel, so the alpha of translucent colors
//! is discarded before encoding.

use image::ImageEncoder;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{DynamicImage, RgbImage};
use qrcraft_render::Artifact;

/// JPEG quality (0-100).  Equivalent to a `0.95` quality factor.
pub const JPEG_QUALITY: u8 = 95;

/// Encode the artifact as a lossless RGBA PNG.
///
/// # Errors
///
/// Returns [`image::ImageError`] if encoding fails.
pub fn to_png(artifact: &Artifact) -> Result<Vec<u8>, image::ImageError> {
    let image = artifact.image();
    let mut bytes = Vec::new();
    PngEncoder::new(&mut bytes).write_image(
        image.as_raw(),
        image.width(),
        image.height(),
        image::ExtendedColorType::Rgba8,
    )?;
    Ok(bytes)
}

/// Encode the artifact as a baseline JPEG at [`JPEG_QUALITY`].
///
/// # Errors
///
/// Returns [`image::ImageError`] if encoding fails.
pub fn to_jpeg(artifact: &Artifact) -> Result<Vec<u8>, image::ImageError> {
    let rgb = to_rgb(artifact);
    let mut bytes = Vec::new();
    JpegEncoder::new_with_quality(&mut bytes, JPEG_QUALITY).write_image(
        rgb.as_raw(),
        rgb.width(),
        rgb.height(),
        image::ExtendedColorType::Rgb8,
    )?;
    Ok(bytes)
}

/// Drop the alpha channel.  Shared with the PDF serializer, which embeds
/// an opaque `DeviceRGB` image.
pub(crate) fn to_rgb(artifact: &Artifact) -> RgbImage {
    DynamicImage::ImageRgba8(artifact.image().clone()).to_rgb8()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use qrcraft_render::{GeneratorState, render_state};

    fn artifact(size: u32) -> Artifact {
        let mut state = GeneratorState::default();
        state.set_size(size);
        render_state(&state).unwrap()
    }

    #[test]
    fn png_decodes_to_same_pixels() {
        let artifact = artifact(200);
        let png = to_png(&artifact).unwrap();
        assert!(png.starts_with(b"\x89PNG\r\n\x1a\n"));

        let decoded = image::load_from_memory(&png).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (200, 200));
        assert_eq!(decoded.as_raw(), artifact.image().as_raw());
    }

    #[test]
    fn jpeg_has_expected_dimensions() {
        let artifact = artifact(256);
        let jpeg = to_jpeg(&artifact).unwrap();
        // SOI marker.
        assert!(jpeg.starts_with(&[0xFF, 0xD8]));

        let decoded = image::load_from_memory(&jpeg).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (256, 256));
    }

    #[test]
    fn jpeg_corner_stays_near_background() {
        let artifact = artifact(256);
        let decoded = image::load_from_memory(&to_jpeg(&artifact).unwrap())
            .unwrap()
            .to_rgb8();
        let px = decoded.get_pixel(2, 2);
        assert!(px.0.iter().all(|&c| c > 240), "corner pixel {px:?} is not white-ish");
    }

    #[test]
    fn encoding_is_byte_identical_across_calls() {
        let artifact = artifact(300);
        assert_eq!(to_png(&artifact).unwrap(), to_png(&artifact).unwrap());
        assert_eq!(to_jpeg(&artifact).unwrap(), to_jpeg(&artifact).unwrap());
    }
}
