#![forbid(unsafe_code)]

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

const EPOCH_RFC3339: &str = "1970-01-01T00:00:00Z";

/// Renders a nanosecond Unix timestamp as RFC 3339 (UTC).
pub(crate) fn ts_ns_to_rfc3339(ts_ns: u64) -> String {
    let dt = OffsetDateTime::from_unix_timestamp_nanos(i128::from(ts_ns))
        .unwrap_or(OffsetDateTime::UNIX_EPOCH);
    dt.format(&Rfc3339)
        .unwrap_or_else(|_| EPOCH_RFC3339.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_nanosecond_timestamps() {
        assert_eq!(ts_ns_to_rfc3339(0), EPOCH_RFC3339);
        assert_eq!(
            ts_ns_to_rfc3339(1_700_000_000_123_456_789),
            "2023-11-14T22:13:20.123456789Z"
        );
    }

    #[test]
    fn largest_timestamp_is_representable() {
        assert!(ts_ns_to_rfc3339(u64::MAX).starts_with("2554-"));
    }
}
