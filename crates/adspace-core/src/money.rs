//! Currency helpers.
//!
//! Amounts are computed at full `f64` precision and only rounded when they are
//! presented (serialized into a response or printed by the CLI).

/// Round an amount to two decimal places, half away from zero.
pub fn round_currency(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Serialize an amount rounded to two decimals.
///
/// Use with `#[serde(serialize_with = "serialize_currency")]` on fields that
/// keep full precision in memory.
pub fn serialize_currency<S>(amount: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_f64(round_currency(*amount))
}

/// Format an amount with two decimals and thousands separators, e.g. `50,400.00`.
pub fn format_currency(amount: f64) -> String {
    let rounded = format!("{:.2}", round_currency(amount).abs());
    let (whole, fraction) = rounded.split_once('.').unwrap_or((rounded.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && round_currency(amount) != 0.0 {
        "-"
    } else {
        ""
    };
    format!("{}{}.{}", sign, grouped, fraction)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_currency() {
        assert_eq!(round_currency(45000.0), 45000.0);
        assert_eq!(round_currency(500.004), 500.0);
        assert_eq!(round_currency(500.005_1), 500.01);
        assert_eq!(round_currency(-12.345_6), -12.35);
    }

    #[test]
    fn test_serialize_currency() {
        #[derive(serde::Serialize)]
        struct Total {
            #[serde(serialize_with = "serialize_currency")]
            amount: f64,
        }

        let json = serde_json::to_string(&Total { amount: 2000.0 / 3.0 }).unwrap();
        assert_eq!(json, r#"{"amount":666.67}"#);
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(50400.0), "50,400.00");
        assert_eq!(format_currency(0.5), "0.50");
        assert_eq!(format_currency(999.999), "1,000.00");
        assert_eq!(format_currency(1234567.891), "1,234,567.89");
        assert_eq!(format_currency(-1500.0), "-1,500.00");
    }
}
