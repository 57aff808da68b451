//! CSV export serializer.
//!
//! Writes the generator settings as a two-column `Field,Value` table.
//! Every cell is wrapped in double quotes and embedded quotes are doubled
//! (RFC 4180), so content containing `"`, `,` or newlines survives a
//! round trip through any spreadsheet.
//!
//! Rows are separated by `\n` with no trailing newline.
//!
//! This is a pure function with no I/O -- it returns a `String`.

use qrcraft_render::GeneratorState;

/// Header row.
pub const HEADER: [&str; 2] = ["Field", "Value"];

/// Field names of the data rows, in output order.
pub const FIELDS: [&str; 5] = [
    "Content",
    "Size",
    "QR Color",
    "Background Color",
    "Generated At",
];

/// Serialize `state` into CSV text.
///
/// `timestamp` is written verbatim into the `Generated At` row; callers
/// normally pass [`crate::timestamp::now_iso8601`].
///
/// # Examples
///
/// ```
/// use qrcraft_export::to_csv;
/// use qrcraft_render::GeneratorState;
///
/// let csv = to_csv(&GeneratorState::default(), "2026-01-01T00:00:00.000Z");
/// assert!(csv.starts_with("\"Field\",\"Value\"\n\"Content\",\"https://example.com\"\n"));
/// ```
#[must_use]
pub fn to_csv(state: &GeneratorState, timestamp: &str) -> String {
    let size = format!("{}px", state.size);
    let values = [
        state.content.as_str(),
        size.as_str(),
        state.foreground_color.as_str(),
        state.background_color.as_str(),
        timestamp,
    ];

    std::iter::once(HEADER)
        .chain(FIELDS.into_iter().zip(values).map(|(field, value)| [field, value]))
        .map(|row| row.map(quote).join(","))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Wrap a cell in double quotes, doubling any embedded quotes.
fn quote(cell: &str) -> String {
    format!("\"{}\"", cell.replace('"', "\"\""))
}
