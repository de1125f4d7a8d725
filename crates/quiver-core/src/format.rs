//! Display formatting for prices, percentages, sizes, dates and text.
//!
//! Output follows US English conventions.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Format a dollar amount with two decimals and thousands separators.
pub fn currency(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let cents = (amount.abs() * 100.0).round() as u64;
    format!(
        "{sign}${}.{:02}",
        group_thousands(&(cents / 100).to_string()),
        cents % 100
    )
}

/// Format a count of cents as dollars.
pub fn cents(amount: u64) -> String {
    format!(
        "${}.{:02}",
        group_thousands(&(amount / 100).to_string()),
        amount % 100
    )
}

/// Abbreviate large numbers with K, M, B or T.
pub fn large_number(value: f64, decimals: usize) -> String {
    const SUFFIXES: [&str; 5] = ["", "K", "M", "B", "T"];

    if value == 0.0 {
        return "0".to_string();
    }

    let mut i = 0;
    let mut scaled = value.abs();
    while scaled >= 1000.0 && i < SUFFIXES.len() - 1 {
        scaled /= 1000.0;
        i += 1;
    }
    if i == 0 {
        return value.to_string();
    }

    let scaled = if value < 0.0 { -scaled } else { scaled };
    format!("{}{}", trim_fraction(&format!("{scaled:.decimals$}")), SUFFIXES[i])
}

/// Format a ratio as a percentage, e.g. `0.1234` as `+12.34%`.
pub fn percentage(value: f64, decimals: usize, show_sign: bool) -> String {
    let prefix = if show_sign && value > 0.0 { "+" } else { "" };
    format!("{prefix}{:.decimals$}%", value * 100.0)
}

/// Format a date as `Jan 5, 2024`.
pub fn date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Format a timestamp as `Jan 5, 2024, 03:04 PM`.
pub fn date_time(date_time: NaiveDateTime) -> String {
    date_time.format("%b %-d, %Y, %I:%M %p").to_string()
}

/// Describe how long ago `then` was, relative to `now`.
pub fn relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - then).num_seconds();
    if seconds < 60 {
        return "just now".to_string();
    }

    let minutes = seconds / 60;
    if minutes < 60 {
        return ago(minutes, "minute");
    }

    let hours = minutes / 60;
    if hours < 24 {
        return ago(hours, "hour");
    }

    let days = hours / 24;
    if days < 30 {
        return ago(days, "day");
    }

    let months = days / 30;
    if months < 12 {
        return ago(months, "month");
    }

    ago(months / 12, "year")
}

fn ago(count: i64, unit: &str) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("{count} {unit}{plural} ago")
}

/// Normalize a ticker symbol.
pub fn ticker(symbol: &str) -> String {
    symbol.trim().to_uppercase()
}

/// Format a US phone number; other inputs are returned unchanged.
pub fn phone(number: &str) -> String {
    let digits: String = number.chars().filter(char::is_ascii_digit).collect();
    match digits.len() {
        10 => format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..]),
        11 if digits.starts_with('1') => format!(
            "1 ({}) {}-{}",
            &digits[1..4],
            &digits[4..7],
            &digits[7..]
        ),
        _ => number.to_string(),
    }
}

/// Format a byte count with binary units.
pub fn file_size(bytes: u64, decimals: usize) -> String {
    const UNITS: [&str; 7] = ["Bytes", "KB", "MB", "GB", "TB", "PB", "EB"];

    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut i = 0;
    let mut scaled = bytes as f64;
    while scaled >= 1024.0 && i < UNITS.len() - 1 {
        scaled /= 1024.0;
        i += 1;
    }
    format!("{} {}", trim_fraction(&format!("{scaled:.decimals$}")), UNITS[i])
}

/// Lower-case, hyphen-separated identifier suitable for URLs.
pub fn slug(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_separator = false;

    for c in text.trim().to_lowercase().chars() {
        if c.is_whitespace() || c == '_' || c == '-' {
            pending_separator = true;
        } else if c.is_alphanumeric() {
            if pending_separator && !out.is_empty() {
                out.push('-');
            }
            pending_separator = false;
            out.push(c);
        }
    }
    out
}

/// Shorten `text` to at most `length` characters, ending with `suffix`.
pub fn truncate(text: &str, length: usize, suffix: &str) -> String {
    if text.chars().count() <= length {
        return text.to_string();
    }
    let keep = length.saturating_sub(suffix.chars().count());
    let mut out: String = text.chars().take(keep).collect();
    out.push_str(suffix);
    out
}

/// Capitalize the first letter of each word and lower-case the rest.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;

    for c in text.chars() {
        if c.is_whitespace() {
            in_word = false;
            out.push(c);
        } else if in_word {
            out.extend(c.to_lowercase());
        } else if c.is_alphanumeric() || c == '_' {
            in_word = true;
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Fixed-precision decimal.
pub fn decimal(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}")
}

/// Thousands-separated number with up to three fraction digits.
pub fn thousands(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let rounded = format!("{:.3}", value.abs());
    let (int_part, frac_part) = rounded.split_once('.').unwrap_or((&rounded, ""));
    let frac_part = frac_part.trim_end_matches('0');

    if frac_part.is_empty() {
        format!("{sign}{}", group_thousands(int_part))
    } else {
        format!("{sign}{}.{frac_part}", group_thousands(int_part))
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;

    #[test]
    fn test_currency() {
        assert_eq!(currency(25.0), "$25.00");
        assert_eq!(currency(1234567.891), "$1,234,567.89");
        assert_eq!(currency(-42.5), "-$42.50");
        assert_eq!(currency(0.0), "$0.00");
    }

    #[test]
    fn test_cents() {
        assert_eq!(cents(2500), "$25.00");
        assert_eq!(cents(25000), "$250.00");
        assert_eq!(cents(123456789), "$1,234,567.89");
    }

    #[test]
    fn test_large_number() {
        assert_eq!(large_number(0.0, 1), "0");
        assert_eq!(large_number(999.0, 1), "999");
        assert_eq!(large_number(1000.0, 1), "1K");
        assert_eq!(large_number(1500.0, 1), "1.5K");
        assert_eq!(large_number(2_540_000.0, 2), "2.54M");
        assert_eq!(large_number(-3_200_000_000.0, 1), "-3.2B");
        assert_eq!(large_number(7.0e15, 0), "7000T");
    }

    #[test]
    fn test_percentage() {
        assert_eq!(percentage(0.1234, 2, true), "+12.34%");
        assert_eq!(percentage(-0.05, 2, true), "-5.00%");
        assert_eq!(percentage(0.1, 1, false), "10.0%");
        assert_eq!(percentage(0.0, 2, true), "0.00%");
    }

    #[test]
    fn test_dates() {
        let day = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(date(day), "Jan 5, 2024");

        let at = day.and_hms_opt(15, 4, 0).unwrap();
        assert_eq!(date_time(at), "Jan 5, 2024, 03:04 PM");
    }

    #[test]
    fn test_relative_time() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        assert_eq!(relative_time(now - Duration::seconds(30), now), "just now");
        assert_eq!(relative_time(now - Duration::minutes(1), now), "1 minute ago");
        assert_eq!(relative_time(now - Duration::minutes(5), now), "5 minutes ago");
        assert_eq!(relative_time(now - Duration::hours(3), now), "3 hours ago");
        assert_eq!(relative_time(now - Duration::days(1), now), "1 day ago");
        assert_eq!(relative_time(now - Duration::days(65), now), "2 months ago");
        assert_eq!(relative_time(now - Duration::days(800), now), "2 years ago");
    }

    #[test]
    fn test_ticker() {
        assert_eq!(ticker(" nvda "), "NVDA");
        assert_eq!(ticker(""), "");
    }

    #[test]
    fn test_phone() {
        assert_eq!(phone("555-123-4567"), "(555) 123-4567");
        assert_eq!(phone("1 555 123 4567"), "1 (555) 123-4567");
        assert_eq!(phone("12345"), "12345");
    }

    #[test]
    fn test_file_size() {
        assert_eq!(file_size(0, 2), "0 Bytes");
        assert_eq!(file_size(512, 2), "512 Bytes");
        assert_eq!(file_size(1024, 2), "1 KB");
        assert_eq!(file_size(1536, 2), "1.5 KB");
        assert_eq!(file_size(5 * 1024 * 1024, 2), "5 MB");
    }

    #[test]
    fn test_slug() {
        assert_eq!(slug("  Government Contracts! "), "government-contracts");
        assert_eq!(slug("Patent_Search -- 2024"), "patent-search-2024");
        assert_eq!(slug("--Leading and trailing--"), "leading-and-trailing");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Short", 10, "..."), "Short");
        assert_eq!(truncate("Corporate Lobbying", 10, "..."), "Corpora...");
        assert_eq!(truncate("abc", 2, "..."), "...");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("insider TRADING dashboard"), "Insider Trading Dashboard");
        assert_eq!(title_case("(hello) world"), "(Hello) World");
    }

    #[test]
    fn test_decimal_and_thousands() {
        assert_eq!(decimal(3.14159, 2), "3.14");
        assert_eq!(thousands(1234567.0), "1,234,567");
        assert_eq!(thousands(1234.5678), "1,234.568");
        assert_eq!(thousands(-999.5), "-999.5");
        assert_eq!(thousands(12.0), "12");
    }
}
