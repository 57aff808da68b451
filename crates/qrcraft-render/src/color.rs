//! CSS color parsing for module and background colors.
//!
//! Accepts the color syntaxes a user can reasonably type into the
//! color text fields:
//!
//! - `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`
//! - `rgb(r, g, b)` and `rgba(r, g, b, a)` with `a` in `0.0..=1.0`
//! - the basic CSS named colors (`black`, `white`, `navy`, ...)
//!
//! Anything else yields `None`; the renderer decides the fallback.

use image::Rgba;

/// Basic CSS named colors (CSS Color Module Level 3, §4.1).
const NAMED_COLORS: &[(&str, [u8; 4])] = &[
    ("black", [0x00, 0x00, 0x00, 0xff]),
    ("silver", [0xc0, 0xc0, 0xc0, 0xff]),
    ("gray", [0x80, 0x80, 0x80, 0xff]),
    ("grey", [0x80, 0x80, 0x80, 0xff]),
    ("white", [0xff, 0xff, 0xff, 0xff]),
    ("maroon", [0x80, 0x00, 0x00, 0xff]),
    ("red", [0xff, 0x00, 0x00, 0xff]),
    ("purple", [0x80, 0x00, 0x80, 0xff]),
    ("fuchsia", [0xff, 0x00, 0xff, 0xff]),
    ("magenta", [0xff, 0x00, 0xff, 0xff]),
    ("green", [0x00, 0x80, 0x00, 0xff]),
    ("lime", [0x00, 0xff, 0x00, 0xff]),
    ("olive", [0x80, 0x80, 0x00, 0xff]),
    ("yellow", [0xff, 0xff, 0x00, 0xff]),
    ("navy", [0x00, 0x00, 0x80, 0xff]),
    ("blue", [0x00, 0x00, 0xff, 0xff]),
    ("teal", [0x00, 0x80, 0x80, 0xff]),
    ("aqua", [0x00, 0xff, 0xff, 0xff]),
    ("cyan", [0x00, 0xff, 0xff, 0xff]),
    ("orange", [0xff, 0xa5, 0x00, 0xff]),
    ("transparent", [0x00, 0x00, 0x00, 0x00]),
];

/// Parse a CSS color string into an RGBA pixel.
///
/// Leading/trailing whitespace is ignored and names are matched
/// case-insensitively.  Returns `None` for anything unrecognized.
#[must_use]
pub fn parse_css_color(s: &str) -> Option<Rgba<u8>> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex);
    }

    let lower = s.to_ascii_lowercase();
    if let Some(args) = strip_function(&lower, "rgba").or_else(|| strip_function(&lower, "rgb")) {
        return parse_rgb_function(args);
    }

    NAMED_COLORS
        .iter()
        .find(|(name, _)| *name == lower)
        .map(|(_, rgba)| Rgba(*rgba))
}

/// Parse the digits of a hex color (without the leading `#`).
fn parse_hex(hex: &str) -> Option<Rgba<u8>> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        // Short forms: each digit is doubled (#abc → #aabbcc).
        3 | 4 => {
            let mut rgba = [0xff_u8; 4];
            for (i, ch) in hex.chars().enumerate() {
                let n = ch.to_digit(16)?;
                #[expect(clippy::cast_possible_truncation)]
                {
                    rgba[i] = (n * 17) as u8;
                }
            }
            Some(Rgba(rgba))
        }
        6 | 8 => {
            let mut rgba = [0xff_u8; 4];
            for (i, slot) in rgba.iter_mut().enumerate().take(hex.len() / 2) {
                *slot = u8::from_str_radix(hex.get(i * 2..i * 2 + 2)?, 16).ok()?;
            }
            Some(Rgba(rgba))
        }
        _ => None,
    }
}

/// Return the argument list of `name(...)`, or `None` if `s` is not a
/// call to `name`.
fn strip_function<'a>(s: &'a str, name: &str) -> Option<&'a str> {
    s.strip_prefix(name)?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')
}

/// Parse `r, g, b` or `r, g, b, a`.
fn parse_rgb_function(args: &str) -> Option<Rgba<u8>> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    let (channels, alpha) = match parts.as_slice() {
        [r, g, b] => ([*r, *g, *b], None),
        [r, g, b, a] => ([*r, *g, *b], Some(*a)),
        _ => return None,
    };

    let mut rgba = [0xff_u8; 4];
    for (slot, part) in rgba.iter_mut().zip(channels) {
        *slot = part.parse::<u8>().ok()?;
    }
    if let Some(a) = alpha {
        let a: f64 = a.parse().ok()?;
        if !(0.0..=1.0).contains(&a) {
            return None;
        }
        #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        {
            rgba[3] = (a * 255.0).round() as u8;
        }
    }
    Some(Rgba(rgba))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_hex() {
        assert_eq!(parse_css_color("#1a2b3c"), Some(Rgba([0x1a, 0x2b, 0x3c, 0xff])));
        assert_eq!(parse_css_color("#FFFFFF"), Some(Rgba([0xff, 0xff, 0xff, 0xff])));
    }

    #[test]
    fn long_hex_with_alpha() {
        assert_eq!(parse_css_color("#11223380"), Some(Rgba([0x11, 0x22, 0x33, 0x80])));
    }

    #[test]
    fn short_hex() {
        assert_eq!(parse_css_color("#fff"), Some(Rgba([0xff, 0xff, 0xff, 0xff])));
        assert_eq!(parse_css_color(" #a0c "), Some(Rgba([0xaa, 0x00, 0xcc, 0xff])));
        assert_eq!(parse_css_color("#0008"), Some(Rgba([0, 0, 0, 0x88])));
    }

    #[test]
    fn rgb_functions() {
        assert_eq!(parse_css_color("rgb(1, 2, 3)"), Some(Rgba([1, 2, 3, 255])));
        assert_eq!(parse_css_color("RGB(10,20,30)"), Some(Rgba([10, 20, 30, 255])));
        assert_eq!(parse_css_color("rgba(0, 0, 0, 0.5)"), Some(Rgba([0, 0, 0, 128])));
    }

    #[test]
    fn named_colors() {
        assert_eq!(parse_css_color("Navy"), Some(Rgba([0, 0, 0x80, 0xff])));
        assert_eq!(parse_css_color("transparent"), Some(Rgba([0, 0, 0, 0])));
    }

    #[test]
    fn malformed_input_is_rejected() {
        for input in [
            "",
            "#",
            "#12",
            "#12345",
            "#gggggg",
            "123456",
            "rgb(1, 2)",
            "rgb(256, 0, 0)",
            "rgba(0, 0, 0, 2)",
            "rgb 1 2 3",
            "notacolor",
            "#ééé",
        ] {
            assert_eq!(parse_css_color(input), None, "expected None for {input:?}");
        }
    }
}
