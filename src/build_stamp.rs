//! Build timestamp parsing and rendering, shared by the build script and the
//! crate's tests.

use chrono::{DateTime, NaiveDateTime};
use std::io;

const DATE_FORMAT: &str = "%b %e %Y";
const TIME_FORMAT: &str = "%H:%M:%S";

/// Parses a `SOURCE_DATE_EPOCH` value (seconds since the Unix epoch) as UTC.
///
/// # Errors
///
/// Returns `InvalidInput` when the value is not an integer or is out of range.
pub fn from_epoch(epoch: &str) -> io::Result<NaiveDateTime> {
    let seconds: i64 = epoch.trim().parse().map_err(|err| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("SOURCE_DATE_EPOCH must be an integer, got {epoch:?}: {err}"),
        )
    })?;

    DateTime::from_timestamp(seconds, 0)
        .map(|utc| utc.naive_utc())
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("SOURCE_DATE_EPOCH is out of range: {seconds}"),
            )
        })
}

/// Renders `timestamp` as `(date, time)` in the C `__DATE__`/`__TIME__` formats.
pub fn render(timestamp: &NaiveDateTime) -> (String, String) {
    (
        timestamp.format(DATE_FORMAT).to_string(),
        timestamp.format(TIME_FORMAT).to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stamp(epoch: &str) -> (String, String) {
        render(&from_epoch(epoch).unwrap())
    }

    #[test]
    fn epoch_is_utc() {
        assert_eq!(
            stamp("1700000000"),
            ("Nov 14 2023".to_string(), "22:13:20".to_string())
        );
        assert_eq!(
            stamp("0"),
            ("Jan  1 1970".to_string(), "00:00:00".to_string())
        );
    }

    #[test]
    fn single_digit_day_is_space_padded() {
        // 2023-11-05T00:00:00Z
        assert_eq!(
            stamp("1699142400"),
            ("Nov  5 2023".to_string(), "00:00:00".to_string())
        );
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(stamp(" 1700000000\n"), stamp("1700000000"));
    }

    #[test]
    fn non_integer_epoch_is_rejected() {
        for epoch in ["abc", "", "1700000000.5", "17e8"] {
            let err = from_epoch(epoch).unwrap_err();
            assert_eq!(err.kind(), io::ErrorKind::InvalidInput, "{epoch:?}");
        }
    }

    #[test]
    fn out_of_range_epoch_is_rejected() {
        let err = from_epoch(&i64::MAX.to_string()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }
}
