use chrono::{DateTime, Utc};

/// `-1234.5` -> `-$1,234.50`
pub fn format_currency(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let fraction = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    format!("{}${}.{:02}", sign, grouped, fraction)
}

pub fn format_percentage(value: f64) -> String {
    format!("{:.1}%", value)
}

pub fn format_date(ts: &DateTime<Utc>) -> String {
    ts.format("%b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, "$0.00")]
    #[case(82.5, "$82.50")]
    #[case(-1234.5, "-$1,234.50")]
    #[case(1_000_000.0, "$1,000,000.00")]
    #[case(0.004, "$0.00")]
    fn currency(#[case] value: f64, #[case] expected: &str) {
        assert_eq!(format_currency(value), expected);
    }

    #[test]
    fn percentage_has_one_decimal() {
        assert_eq!(format_percentage(66.666), "66.7%");
    }

    #[test]
    fn date_is_short_month() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 4, 10, 0, 0).unwrap();
        assert_eq!(format_date(&ts), "Mar 4, 2024");
    }
}
