// src/utils.rs

//! Display formatting and small helpers shared by the dashboard views.

pub mod time;

pub use time::{sleep, Time};

/// Number, currency and date formatting for dashboard display
pub mod format {
    use chrono::{DateTime, NaiveDate, Utc};

    /// Inserts `,` thousands separators into the integer part of `value`.
    fn group_thousands(value: u64) -> String {
        let digits = value.to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(',');
            }
            out.push(ch);
        }
        out
    }

    /// Formats a number with thousands separators, keeping up to two decimals
    /// when the value is fractional.
    pub fn format_number(value: f64) -> String {
        let sign = if value < 0.0 { "-" } else { "" };
        let abs = value.abs();
        let cents = (abs * 100.0).round() as u64;
        let whole = cents / 100;
        let fraction = cents % 100;

        if fraction == 0 {
            format!("{}{}", sign, group_thousands(whole))
        } else {
            format!("{}{}.{:02}", sign, group_thousands(whole), fraction)
        }
    }

    pub fn currency_symbol(code: &str) -> &'static str {
        match code.to_ascii_uppercase().as_str() {
            "USD" | "CAD" | "AUD" => "$",
            "EUR" => "€",
            "GBP" => "£",
            "INR" => "₹",
            "JPY" => "¥",
            _ => "$",
        }
    }

    /// Formats an amount in US dollars, e.g. `$1,247` or `$0.11`
    pub fn format_currency(amount: f64) -> String {
        format_currency_in(amount, "USD")
    }

    pub fn format_currency_in(amount: f64, currency: &str) -> String {
        let symbol = currency_symbol(currency);
        let rendered = format_number(amount.abs());
        if amount < 0.0 {
            format!("-{}{}", symbol, rendered)
        } else {
            format!("{}{}", symbol, rendered)
        }
    }

    /// Short form used on stat cards: `389K`, `1.2M`, `5.2K`
    pub fn format_compact(value: f64) -> String {
        let abs = value.abs();
        let (scaled, suffix) = if abs >= 1_000_000.0 {
            (value / 1_000_000.0, "M")
        } else if abs >= 1_000.0 {
            (value / 1_000.0, "K")
        } else {
            return format_number(value);
        };

        let rounded = (scaled * 10.0).round() / 10.0;
        if rounded.fract() == 0.0 {
            format!("{}{}", rounded as i64, suffix)
        } else {
            format!("{:.1}{}", rounded, suffix)
        }
    }

    pub fn format_percent(value: f64) -> String {
        if value.fract() == 0.0 {
            format!("{}%", value as i64)
        } else {
            format!("{:.1}%", value)
        }
    }

    /// Signed change indicator, e.g. `+12.5%` / `-2.1%`
    pub fn format_change(value: f64) -> String {
        if value >= 0.0 {
            format!("+{}", format_percent(value))
        } else {
            format!("-{}", format_percent(value.abs()))
        }
    }

    pub fn format_roas(value: f64) -> String {
        format!("{:.1}x", value)
    }

    pub fn format_date(date: NaiveDate) -> String {
        date.format("%b %-d, %Y").to_string()
    }

    /// Human relative time between `timestamp` and `now`
    pub fn format_relative_time(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
        let elapsed = now.signed_duration_since(timestamp);
        let minutes = elapsed.num_minutes();

        if minutes < 1 {
            return "just now".to_string();
        }
        if minutes < 60 {
            return plural(minutes, "minute");
        }

        let hours = elapsed.num_hours();
        if hours < 24 {
            return plural(hours, "hour");
        }

        plural(elapsed.num_days(), "day")
    }

    fn plural(count: i64, unit: &str) -> String {
        if count == 1 {
            format!("1 {} ago", unit)
        } else {
            format!("{} {}s ago", count, unit)
        }
    }

    /// Up to two uppercase initials for avatar badges
    pub fn initials(name: &str) -> String {
        let letters: String = name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect();

        if letters.is_empty() {
            "?".to_string()
        } else {
            letters
        }
    }
}

/// Validation utilities
pub mod validation {
    /// Email validation (basic)
    pub fn is_valid_email(email: &str) -> bool {
        match email.split_once('@') {
            Some((local, domain)) => {
                !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
            }
            None => false,
        }
    }

    /// URL validation (basic)
    pub fn is_valid_url(url: &str) -> bool {
        url.starts_with("http://") || url.starts_with("https://")
    }
}

#[cfg(test)]
mod tests {
    use super::format::*;
    use super::*;
    use chrono::{Duration, NaiveDate, TimeZone, Utc};

    #[test]
    fn test_number_formatting() {
        assert_eq!(format_number(125000.0), "125,000");
        assert_eq!(format_number(1234.5), "1,234.50");
        assert_eq!(format_number(89.0), "89");
        assert_eq!(format_number(-1247.0), "-1,247");
    }

    #[test]
    fn test_currency_formatting() {
        assert_eq!(format_currency(1247.0), "$1,247");
        assert_eq!(format_currency(0.11), "$0.11");
        assert_eq!(format_currency_in(480.0, "EUR"), "€480");
        assert_eq!(format_currency(-45.0), "-$45");
    }

    #[test]
    fn test_compact_formatting() {
        assert_eq!(format_compact(389_000.0), "389K");
        assert_eq!(format_compact(5_200.0), "5.2K");
        assert_eq!(format_compact(1_250_000.0), "1.3M");
        assert_eq!(format_compact(892.0), "892");
    }

    #[test]
    fn test_percent_and_change() {
        assert_eq!(format_percent(3.2), "3.2%");
        assert_eq!(format_percent(23.0), "23%");
        assert_eq!(format_change(12.5), "+12.5%");
        assert_eq!(format_change(-2.1), "-2.1%");
        assert_eq!(format_roas(4.2), "4.2x");
    }

    #[test]
    fn test_date_formatting() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 28).unwrap();
        assert_eq!(format_date(date), "Jan 28, 2024");
    }

    #[test]
    fn test_relative_time() {
        let now = Utc.with_ymd_and_hms(2024, 1, 29, 12, 0, 0).unwrap();
        assert_eq!(format_relative_time(now, now), "just now");
        assert_eq!(format_relative_time(now - Duration::minutes(15), now), "15 minutes ago");
        assert_eq!(format_relative_time(now - Duration::hours(1), now), "1 hour ago");
        assert_eq!(format_relative_time(now - Duration::hours(12), now), "12 hours ago");
        assert_eq!(format_relative_time(now - Duration::days(1), now), "1 day ago");
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("Alex Morgan"), "AM");
        assert_eq!(initials("sarah"), "S");
        assert_eq!(initials("  "), "?");
    }

    #[test]
    fn test_validation() {
        assert!(validation::is_valid_email("boss@reon.ai"));
        assert!(!validation::is_valid_email("boss.reon.ai"));
        assert!(!validation::is_valid_email("@reon.ai"));
        assert!(validation::is_valid_url("https://techstyle.com"));
        assert!(!validation::is_valid_url("techstyle.com"));
    }
}
