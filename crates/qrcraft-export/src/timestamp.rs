//! ISO-8601 timestamps for export metadata.
//!
//! Produces the same shape as JavaScript's `Date.prototype.toISOString`
//! (`YYYY-MM-DDTHH:MM:SS.sssZ`, always UTC) so exported files read the
//! same whichever target generated them.

use std::fmt::Write;

use web_time::{SystemTime, UNIX_EPOCH};

const MILLIS_PER_DAY: u64 = 86_400_000;

/// Current wall-clock time as an ISO-8601 UTC string.
///
/// Uses `Date.now()` on WASM and the system clock natively.  A clock set
/// before 1970 is reported as the epoch.
#[must_use]
pub fn now_iso8601() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX));
    format_iso8601(millis)
}

/// Format milliseconds since the Unix epoch as `YYYY-MM-DDTHH:MM:SS.sssZ`.
///
/// # Examples
///
/// ```
/// use qrcraft_export::timestamp::format_iso8601;
///
/// assert_eq!(format_iso8601(0), "1970-01-01T00:00:00.000Z");
/// ```
#[must_use]
pub fn format_iso8601(unix_millis: u64) -> String {
    let days = unix_millis / MILLIS_PER_DAY;
    let ms_of_day = unix_millis % MILLIS_PER_DAY;

    let (year, month, day) = civil_from_days(days);
    let hours = ms_of_day / 3_600_000;
    let minutes = ms_of_day / 60_000 % 60;
    let seconds = ms_of_day / 1000 % 60;
    let millis = ms_of_day % 1000;

    let mut out = String::with_capacity(24);
    let _ = write!(
        out,
        "{year:04}-{month:02}-{day:02}T{hours:02}:{minutes:02}:{seconds:02}.{millis:03}Z"
    );
    out
}

/// Convert days since 1970-01-01 into a proleptic Gregorian
/// `(year, month, day)`.
///
/// Howard Hinnant's `civil_from_days`, restricted to non-negative input.
const fn civil_from_days(days: u64) -> (u64, u64, u64) {
    let z = days + 719_468;
    let era = z / 146_097;
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + if month <= 2 { 1 } else { 0 };
    (year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch() {
        assert_eq!(format_iso8601(0), "1970-01-01T00:00:00.000Z");
    }

    #[test]
    fn known_instant_with_millis() {
        // 2026-02-14T12:30:45.123Z
        assert_eq!(format_iso8601(1_771_072_245_123), "2026-02-14T12:30:45.123Z");
    }

    #[test]
    fn leap_day() {
        // 2024-02-29T00:00:00Z
        assert_eq!(format_iso8601(1_709_164_800_000), "2024-02-29T00:00:00.000Z");
        // One millisecond before 2024-03-01.
        assert_eq!(format_iso8601(1_709_251_199_999), "2024-02-29T23:59:59.999Z");
    }

    #[test]
    fn century_non_leap_year() {
        // 2100-03-01T00:00:00Z (2100 is not a leap year).
        assert_eq!(format_iso8601(4_107_542_400_000), "2100-03-01T00:00:00.000Z");
    }

    #[test]
    fn now_has_iso_shape() {
        let ts = now_iso8601();
        assert_eq!(ts.len(), 24);
        assert!(ts.ends_with('Z'));
        assert_eq!(&ts[4..5], "-");
        assert_eq!(&ts[10..11], "T");
    }
}
