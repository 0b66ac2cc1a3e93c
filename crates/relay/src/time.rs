//! Timestamp rendering for log entries.

use {
    chrono::{DateTime, Datelike, Timelike, Utc},
    chrono_tz::Tz,
};

use crate::{Error, Result};

/// Zone used when none is configured.
pub const DEFAULT_TIMEZONE: &str = "Asia/Bangkok";

const THAI_MONTHS: [&str; 12] = [
    "ม.ค.", "ก.พ.", "มี.ค.", "เม.ย.", "พ.ค.", "มิ.ย.", "ก.ค.", "ส.ค.", "ก.ย.", "ต.ค.", "พ.ย.", "ธ.ค.",
];

const BUDDHIST_ERA_OFFSET: i32 = 543;

/// Parse an IANA zone name such as `Asia/Bangkok`.
pub fn parse_timezone(name: &str) -> Result<Tz> {
    name.trim()
        .parse::<Tz>()
        .map_err(|e| Error::invalid_input(format!("unknown time zone {name:?}: {e}")))
}

/// Render `at` in `tz` as a Thai medium date and time, e.g.
/// `18 ต.ค. 2569 14:03:05`. The year is in the Buddhist era.
pub fn format_thai(at: DateTime<Utc>, tz: Tz) -> String {
    let local = at.with_timezone(&tz);
    format!(
        "{} {} {} {:02}:{:02}:{:02}",
        local.day(),
        THAI_MONTHS[local.month0() as usize],
        local.year() + BUDDHIST_ERA_OFFSET,
        local.hour(),
        local.minute(),
        local.second(),
    )
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use {super::*, chrono::TimeZone, rstest::rstest};

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
    }

    #[rstest]
    #[case(utc(2026, 10, 18, 7, 3, 5), "18 ต.ค. 2569 14:03:05")]
    #[case(utc(2025, 12, 31, 20, 0, 0), "1 ม.ค. 2569 03:00:00")]
    #[case(utc(2024, 2, 29, 0, 0, 9), "29 ก.พ. 2567 07:00:09")]
    fn bangkok_rendering(#[case] at: DateTime<Utc>, #[case] expected: &str) {
        let tz = parse_timezone(DEFAULT_TIMEZONE).unwrap();
        assert_eq!(format_thai(at, tz), expected);
    }

    #[test]
    fn other_zone_shifts_clock() {
        let tz = parse_timezone("UTC").unwrap();
        assert_eq!(format_thai(utc(2026, 5, 1, 23, 59, 59), tz), "1 พ.ค. 2569 23:59:59");
    }

    #[test]
    fn unknown_zone_is_rejected() {
        let err = parse_timezone("Mars/Olympus").unwrap_err();
        assert!(err.to_string().contains("Mars/Olympus"));
    }
}
