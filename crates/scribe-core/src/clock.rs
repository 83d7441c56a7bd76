use time::format_description::well_known::Rfc3339;
use time::{Duration, OffsetDateTime};

/// Format an elapsed duration floored to whole minutes.
///
/// Nonzero hour component renders as `"<H>h <M>m"`, otherwise `"<M>m"`.
/// There is no rounding beyond truncation: a 59-second span is `"0m"`.
pub fn format_duration(elapsed: Duration) -> String {
    let total_minutes = elapsed.whole_minutes().max(0);
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;
    if hours > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    }
}

/// 12-hour wall-clock rendering, e.g. `"02:45 PM"`.
pub fn format_clock(t: OffsetDateTime) -> String {
    let period = if t.hour() >= 12 { "PM" } else { "AM" };
    let h12 = match t.hour() % 12 {
        0 => 12,
        h => h,
    };
    format!("{h12:02}:{:02} {period}", t.minute())
}

/// Calendar date as `"YYYY-MM-DD"`; names the dated session folder.
pub fn format_date(t: OffsetDateTime) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        t.year(),
        u8::from(t.month()),
        t.day()
    )
}

/// RFC 3339 rendering, e.g. for `git log --since`. Falls back to the
/// plain timestamp shape (also accepted by git) if formatting fails.
pub fn format_rfc3339(t: OffsetDateTime) -> String {
    t.format(&Rfc3339).unwrap_or_else(|_| format_timestamp(t))
}

/// Full timestamp as `"YYYY-MM-DD HH:MM:SS"` for document footers.
pub fn format_timestamp(t: OffsetDateTime) -> String {
    format!(
        "{} {:02}:{:02}:{:02}",
        format_date(t),
        t.hour(),
        t.minute(),
        t.second()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_with_hours() {
        assert_eq!(format_duration(Duration::minutes(125)), "2h 5m");
    }

    #[test]
    fn duration_under_an_hour() {
        assert_eq!(format_duration(Duration::minutes(45)), "45m");
    }

    #[test]
    fn sub_minute_floors_to_zero() {
        assert_eq!(format_duration(Duration::seconds(45)), "0m");
        assert_eq!(format_duration(Duration::seconds(59)), "0m");
    }

    #[test]
    fn negative_clamps_to_zero() {
        assert_eq!(format_duration(Duration::seconds(-10)), "0m");
    }

    #[test]
    fn clock_covers_noon_and_midnight() {
        let base = OffsetDateTime::UNIX_EPOCH; // 1970-01-01 00:00:00 UTC
        assert_eq!(format_clock(base), "12:00 AM");
        assert_eq!(format_clock(base + Duration::hours(12)), "12:00 PM");
        assert_eq!(
            format_clock(base + Duration::hours(14) + Duration::minutes(45)),
            "02:45 PM"
        );
    }

    #[test]
    fn date_and_timestamp_shapes() {
        let t = OffsetDateTime::UNIX_EPOCH + Duration::days(30);
        assert_eq!(format_date(t), "1970-01-31");
        assert_eq!(format_timestamp(t), "1970-01-31 00:00:00");
    }
}
