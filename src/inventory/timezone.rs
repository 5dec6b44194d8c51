use chrono::{DateTime, Utc};
use chrono_tz::{Asia::Jakarta, Tz};

/// Jakarta timezone constant
pub const JAKARTA_TZ: Tz = Jakarta;

/// Timestamp format the stock backend expects
const SERVER_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Get current time in Jakarta timezone
pub fn jakarta_now() -> DateTime<Tz> {
    Utc::now().with_timezone(&JAKARTA_TZ)
}

/// Get current time formatted for the backend (`YYYY-MM-DD HH:mm:ss`)
pub fn server_timestamp() -> String {
    jakarta_now().format(SERVER_TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Offset;

    #[test]
    fn test_jakarta_timezone() {
        let jakarta_time = jakarta_now();

        // Jakarta should be 7 hours ahead of UTC
        let diff = jakarta_time.offset().fix().local_minus_utc();
        assert_eq!(diff, 7 * 3600);
    }

    #[test]
    fn test_server_timestamp_format() {
        let stamp = server_timestamp();
        // "2024-01-31 08:15:00" - 19 chars, space separator, no offset suffix
        assert_eq!(stamp.len(), 19);
        assert_eq!(stamp.as_bytes()[10], b' ');
        assert!(!stamp.contains('+'));
    }
}
