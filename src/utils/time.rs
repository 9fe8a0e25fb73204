//! Time utilities: ISO-8601 instants and display formatting.

use chrono::{DateTime, Local, SecondsFormat, Utc};

/// Current instant as an ISO-8601 UTC string. This is the only clock the
/// store ever sees; lexicographic order on these strings is chronological
/// order.
pub fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Short local-time rendering of a stored ISO timestamp for table output.
/// Falls back to the raw string when it does not parse.
pub fn display_ts(iso: &str) -> String {
    match DateTime::parse_from_rfc3339(iso) {
        Ok(dt) => dt
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M")
            .to_string(),
        Err(_) => iso.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn now_iso_is_rfc3339_utc() {
        let ts = now_iso();
        assert!(ts.ends_with('Z'));
        assert!(DateTime::parse_from_rfc3339(&ts).is_ok());
    }

    #[test]
    fn display_falls_back_to_raw_on_garbage() {
        assert_eq!(display_ts("not-a-date"), "not-a-date");
    }
}
