//! PDF export serializer.
//!
//! Produces a single-page document containing a "QR Code" title, the
//! rendered artifact at its native size, and a caption with the encoded
//! content.  Document objects are built and serialized with [`lopdf`].
//!
//! ## Geometry
//!
//! Layout coordinates are in CSS pixels measured from the top-left
//! corner of the page, matching how the page is described to users.  They
//! are converted to PDF points (`1px = 0.75pt`) with a bottom-left origin
//! only when the content stream is emitted.
//!
//! The base page format is `[size + 40, size + 80]`.  Sizes above
//! [`LANDSCAPE_THRESHOLD`] switch to landscape, which puts the longer side
//! horizontal.
//!
//! The output carries no creation date or document ID, so serializing the
//! same artifact and content twice yields identical bytes.

use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, dictionary};
use qrcraft_render::Artifact;

use crate::ExportError;
use crate::raster::to_rgb;

/// Sizes strictly greater than this produce a landscape page.
pub const LANDSCAPE_THRESHOLD: u32 = 200;

/// Captions longer than this many characters are truncated.
pub const CAPTION_MAX_CHARS: usize = 60;

/// Marker appended to a truncated caption.
pub const ELLIPSIS: &str = "...";

const PX_TO_PT: f32 = 0.75;
const MARGIN_X: f32 = 20.0;
const TITLE_BASELINE: f32 = 25.0;
const IMAGE_TOP: f32 = 35.0;
const CAPTION_OFFSET: f32 = 55.0;
const TITLE_FONT_SIZE: f32 = 14.0;
const CAPTION_FONT_SIZE: f32 = 8.0;

/// Page orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl Orientation {
    /// Orientation for a code of edge length `size`.
    #[must_use]
    pub const fn for_size(size: u32) -> Self {
        if size > LANDSCAPE_THRESHOLD {
            Self::Landscape
        } else {
            Self::Portrait
        }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Portrait => f.write_str("portrait"),
            Self::Landscape => f.write_str("landscape"),
        }
    }
}

/// A line of text on the page.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPlacement {
    pub text: String,
    /// Left edge, px from the page's left side.
    pub x: f32,
    /// Baseline, px from the page's top.
    pub baseline: f32,
    /// Font size in points.
    pub font_size: f32,
}

/// Where the raster is drawn, in px from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImagePlacement {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Resolved page layout for one export.
#[derive(Debug, Clone, PartialEq)]
pub struct PdfLayout {
    pub orientation: Orientation,
    /// Page width in px.
    pub page_width: f32,
    /// Page height in px.
    pub page_height: f32,
    pub title: TextPlacement,
    pub image: ImagePlacement,
    pub caption: TextPlacement,
}

impl PdfLayout {
    /// Compute the layout for a code of edge length `size` encoding
    /// `content`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn new(size: u32, content: &str) -> Self {
        let orientation = Orientation::for_size(size);
        let side = size as f32;
        let short = side + 40.0;
        let long = side + 80.0;
        let (page_width, page_height) = match orientation {
            Orientation::Portrait => (short, long),
            Orientation::Landscape => (long, short),
        };

        Self {
            orientation,
            page_width,
            page_height,
            title: TextPlacement {
                text: "QR Code".to_owned(),
                x: MARGIN_X,
                baseline: TITLE_BASELINE,
                font_size: TITLE_FONT_SIZE,
            },
            image: ImagePlacement {
                x: MARGIN_X,
                y: IMAGE_TOP,
                width: side,
                height: side,
            },
            caption: TextPlacement {
                text: format!("Content: {}", truncate_caption(content)),
                x: MARGIN_X,
                baseline: side + CAPTION_OFFSET,
                font_size: CAPTION_FONT_SIZE,
            },
        }
    }

    /// Page size in PDF points.
    #[must_use]
    pub fn media_box(&self) -> [f32; 4] {
        [0.0, 0.0, self.page_width * PX_TO_PT, self.page_height * PX_TO_PT]
    }

    /// Convert a top-left px y coordinate to bottom-left points.
    fn flip_y(&self, y: f32) -> f32 {
        (self.page_height - y) * PX_TO_PT
    }
}

/// Truncate `content` to [`CAPTION_MAX_CHARS`] characters, appending
/// [`ELLIPSIS`] when anything was cut.
///
/// Counts Unicode scalar values, so multi-byte characters are never
/// split.
#[must_use]
pub fn truncate_caption(content: &str) -> String {
    match content.char_indices().nth(CAPTION_MAX_CHARS) {
        Some((cut, _)) => format!("{}{ELLIPSIS}", &content[..cut]),
        None => content.to_owned(),
    }
}

/// Serialize the artifact into a single-page PDF.
///
/// # Errors
///
/// Returns [`ExportError::Pdf`] if the content stream cannot be encoded
/// and [`ExportError::Io`] if writing the document fails.
pub fn to_pdf(artifact: &Artifact, content: &str) -> Result<Vec<u8>, ExportError> {
    let layout = PdfLayout::new(artifact.width(), content);
    let rgb = to_rgb(artifact);

    let mut doc = Document::with_version("1.4");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });

    let image_id = doc.add_object(Stream::new(
        dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => i64::from(rgb.width()),
            "Height" => i64::from(rgb.height()),
            "ColorSpace" => "DeviceRGB",
            "BitsPerComponent" => 8_i64,
        },
        rgb.into_raw(),
    ));

    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
        "XObject" => dictionary! { "Im1" => image_id },
    });

    let content_stream = Content {
        operations: page_operations(&layout),
    };
    let content_id = doc.add_object(Stream::new(dictionary! {}, content_stream.encode()?));

    let media_box = layout.media_box().iter().copied().map(Object::Real).collect::<Vec<_>>();
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
        "Resources" => resources_id,
        "MediaBox" => media_box,
    });

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![Object::Reference(page_id)],
            "Count" => 1_i64,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.compress();

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)?;

    log::debug!(
        "built {} PDF: {}x{}px page, {} bytes",
        layout.orientation,
        layout.page_width,
        layout.page_height,
        bytes.len(),
    );
    Ok(bytes)
}

/// Content stream: title, image, caption.
fn page_operations(layout: &PdfLayout) -> Vec<Operation> {
    let image = layout.image;
    let mut ops = text_operations(layout, &layout.title);
    ops.extend([
        Operation::new("q", vec![]),
        Operation::new(
            "cm",
            vec![
                Object::Real(image.width * PX_TO_PT),
                Object::Integer(0),
                Object::Integer(0),
                Object::Real(image.height * PX_TO_PT),
                Object::Real(image.x * PX_TO_PT),
                Object::Real(layout.flip_y(image.y + image.height)),
            ],
        ),
        Operation::new("Do", vec![Object::Name(b"Im1".to_vec())]),
        Operation::new("Q", vec![]),
    ]);
    ops.extend(text_operations(layout, &layout.caption));
    ops
}

fn text_operations(layout: &PdfLayout, text: &TextPlacement) -> Vec<Operation> {
    vec![
        Operation::new("BT", vec![]),
        Operation::new(
            "Tf",
            vec![Object::Name(b"F1".to_vec()), Object::Real(text.font_size)],
        ),
        Operation::new(
            "Td",
            vec![
                Object::Real(text.x * PX_TO_PT),
                Object::Real(layout.flip_y(text.baseline)),
            ],
        ),
        Operation::new("Tj", vec![Object::string_literal(encode_win_ansi(&text.text))]),
        Operation::new("ET", vec![]),
    ]
}

/// Encode text for the standard Helvetica font.
///
/// Printable Latin-1 maps directly onto WinAnsi; everything else
/// (including the C1 range, which WinAnsi repurposes) becomes `?`.
fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|ch| match u8::try_from(u32::from(ch)) {
            Ok(b) if (0x20..0x7f).contains(&b) || b >= 0xa0 => b,
            _ => b'?',
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use qrcraft_render::{GeneratorState, render_state};

    fn artifact(size: u32) -> Artifact {
        let mut state = GeneratorState::default();
        state.set_size(size);
        render_state(&state).unwrap()
    }

    #[test]
    fn orientation_threshold() {
        assert_eq!(Orientation::for_size(128), Orientation::Portrait);
        assert_eq!(Orientation::for_size(200), Orientation::Portrait);
        assert_eq!(Orientation::for_size(201), Orientation::Landscape);
        assert_eq!(Orientation::for_size(256), Orientation::Landscape);
        assert_eq!(Orientation::Landscape.to_string(), "landscape");
    }

    #[test]
    fn portrait_page_is_taller_than_wide() {
        let layout = PdfLayout::new(128, "x");
        assert_eq!(layout.orientation, Orientation::Portrait);
        assert_eq!((layout.page_width, layout.page_height), (168.0, 208.0));
    }

    #[test]
    fn landscape_page_is_wider_than_tall() {
        let layout = PdfLayout::new(256, "x");
        assert_eq!(layout.orientation, Orientation::Landscape);
        assert_eq!((layout.page_width, layout.page_height), (336.0, 296.0));
    }

    #[test]
    fn image_drawn_at_native_size() {
        let layout = PdfLayout::new(300, "x");
        assert_eq!(
            layout.image,
            ImagePlacement {
                x: 20.0,
                y: 35.0,
                width: 300.0,
                height: 300.0
            }
        );
        assert_eq!(layout.caption.baseline, 355.0);
        assert_eq!(layout.title.text, "QR Code");
    }

    #[test]
    fn caption_keeps_short_content() {
        let content = "a".repeat(60);
        assert_eq!(truncate_caption(&content), content);
        let layout = PdfLayout::new(128, "https://example.com");
        assert_eq!(layout.caption.text, "Content: https://example.com");
        assert!(!layout.caption.text.ends_with(ELLIPSIS));
    }

    #[test]
    fn caption_truncates_long_content() {
        let content: String = ('a'..='z').cycle().take(61).collect();
        let caption = truncate_caption(&content);
        assert_eq!(caption, format!("{}...", &content[..60]));
        assert_eq!(caption.chars().count(), 63);
    }

    #[test]
    fn caption_truncation_counts_characters_not_bytes() {
        let content = "é".repeat(70);
        let caption = truncate_caption(&content);
        assert_eq!(caption, format!("{}...", "é".repeat(60)));
    }

    #[test]
    fn win_ansi_replaces_unencodable_characters() {
        assert_eq!(encode_win_ansi("Aé€\u{85}\n"), vec![b'A', 0xe9, b'?', b'?', b'?']);
    }

    #[test]
    fn document_parses_back_with_expected_media_box() {
        let bytes = to_pdf(&artifact(256), "https://example.com").unwrap();
        assert!(bytes.starts_with(b"%PDF-1.4"));

        let doc = Document::load_mem(&bytes).unwrap();
        let pages = doc.get_pages();
        assert_eq!(pages.len(), 1);

        let page_id = *pages.values().next().unwrap();
        let page = doc.get_object(page_id).unwrap().as_dict().unwrap();
        let media_box: Vec<f32> = page
            .get(b"MediaBox")
            .unwrap()
            .as_array()
            .unwrap()
            .iter()
            .map(|o| o.as_float().unwrap())
            .collect();
        assert_eq!(media_box, vec![0.0, 0.0, 336.0 * 0.75, 296.0 * 0.75]);
    }

    #[test]
    fn document_embeds_image_at_artifact_resolution() {
        let bytes = to_pdf(&artifact(150), "hello").unwrap();
        let doc = Document::load_mem(&bytes).unwrap();
        let image = doc
            .objects
            .values()
            .filter_map(|o| o.as_stream().ok())
            .find(|s| {
                s.dict
                    .get(b"Subtype")
                    .and_then(Object::as_name)
                    .is_ok_and(|n| n == b"Image")
            })
            .unwrap();
        assert_eq!(image.dict.get(b"Width").unwrap().as_i64().unwrap(), 150);
        assert_eq!(image.dict.get(b"Height").unwrap().as_i64().unwrap(), 150);
    }

    #[test]
    fn serialization_is_byte_identical_across_calls() {
        let artifact = artifact(220);
        let a = to_pdf(&artifact, "same").unwrap();
        let b = to_pdf(&artifact, "same").unwrap();
        assert_eq!(a, b);
    }
}
