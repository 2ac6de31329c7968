use chrono::{DateTime, Utc};

// Formats each x1000 step
pub fn format_number(number: u64) -> String {
    let num_str = number.to_string();
    let mut result = String::new();
    let len = num_str.len();

    for (i, c) in num_str.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

/// 15400 -> "15.4K", 2_500_000 -> "2.5M"
pub fn format_subscribers(count: u64) -> String {
    if count >= 1_000_000 {
        format!("{:.1}M", count as f64 / 1_000_000.0)
    } else if count >= 1_000 {
        format!("{:.1}K", count as f64 / 1_000.0)
    } else {
        count.to_string()
    }
}

/// Media running time as `MM:SS`; minutes are not wrapped into hours.
pub fn format_duration(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "00:00".to_string();
    }
    let total = seconds as u64;
    format!("{:02}:{:02}", total / 60, total % 60)
}

pub fn format_upload_date(date: DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}

pub fn today_upload_date() -> String {
    format_upload_date(Utc::now())
}

/// Base-36 id derived from the current time in milliseconds.
pub fn new_video_id() -> String {
    to_base36(Utc::now().timestamp_millis().unsigned_abs())
}

fn to_base36(mut value: u64) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if value == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while value > 0 {
        out.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn format_number_groups_thousands() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(12500), "12,500");
        assert_eq!(format_number(1234567), "1,234,567");
    }

    #[test]
    fn format_subscribers_abbreviates() {
        assert_eq!(format_subscribers(999), "999");
        assert_eq!(format_subscribers(15400), "15.4K");
        assert_eq!(format_subscribers(2_500_000), "2.5M");
    }

    #[test]
    fn format_duration_pads_minutes_and_seconds() {
        assert_eq!(format_duration(320.9), "05:20");
        assert_eq!(format_duration(3725.0), "62:05");
        assert_eq!(format_duration(f64::NAN), "00:00");
    }

    #[test]
    fn upload_date_is_short_month_form() {
        let date = Utc.with_ymd_and_hms(2024, 3, 7, 12, 0, 0).unwrap();
        assert_eq!(format_upload_date(date), "Mar 7, 2024");
    }

    #[test]
    fn base36_encoding() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
        assert!(!new_video_id().is_empty());
    }
}
