//! Locale-aware rendering of calculator figures.
//!
//! Output follows the Brazilian convention: `.` groups thousands, `,` marks
//! decimals, and the currency symbol comes first (`R$ 7.142,86`). Figures
//! with no finite value render as a dash so callers never print `inf`.

/// Placeholder shown for figures with no finite value.
pub const UNDEFINED_FIGURE: &str = "—";

/// Format a monetary value as Brazilian reais: `R$ 1.234,56`.
///
/// Negative values keep the sign between symbol and digits (`R$ -1.234,56`).
/// Non-finite values render as [`UNDEFINED_FIGURE`].
pub fn format_brl(value: f64) -> String {
    if !value.is_finite() {
        return UNDEFINED_FIGURE.to_string();
    }

    let fixed = format!("{:.2}", value);
    let (sign, digits) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits, "00"));

    format!("R$ {}{},{}", sign, group_thousands(int_part), frac_part)
}

/// Format a sales count as a whole number with `.` thousands separators.
///
/// Rounds half-to-even, so `0.5` becomes `0` and `1.5` becomes `2`.
/// Non-finite values render as [`UNDEFINED_FIGURE`].
pub fn format_count(value: f64) -> String {
    if !value.is_finite() {
        return UNDEFINED_FIGURE.to_string();
    }

    let rounded = value.round_ties_even() as i64;
    let sign = if rounded < 0 { "-" } else { "" };

    format!(
        "{}{}",
        sign,
        group_thousands(&rounded.unsigned_abs().to_string())
    )
}

/// Format a percentage with one decimal place: `20.0%`.
pub fn format_pct(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Insert `.` separators every three digits, right to left.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_brl_reference_values() {
        assert_eq!(format_brl(6250.0), "R$ 6.250,00");
        assert_eq!(format_brl(7142.857142857143), "R$ 7.142,86");
        assert_eq!(format_brl(100.0), "R$ 100,00");
        assert_eq!(format_brl(0.0), "R$ 0,00");
    }

    #[test]
    fn test_format_brl_groups_millions() {
        assert_eq!(format_brl(1234567.89), "R$ 1.234.567,89");
        assert_eq!(format_brl(1000000.0), "R$ 1.000.000,00");
    }

    #[test]
    fn test_format_brl_negative_keeps_sign_after_symbol() {
        assert_eq!(format_brl(-1234.56), "R$ -1.234,56");
        assert_eq!(format_brl(-0.5), "R$ -0,50");
    }

    #[test]
    fn test_format_brl_undefined() {
        assert_eq!(format_brl(f64::INFINITY), "—");
        assert_eq!(format_brl(f64::NEG_INFINITY), "—");
        assert_eq!(format_brl(f64::NAN), "—");
    }

    #[test]
    fn test_format_count_rounds_to_whole_units() {
        assert_eq!(format_count(71.43), "71");
        assert_eq!(format_count(71.5), "72");
        assert_eq!(format_count(99.9), "100");
    }

    #[test]
    fn test_format_count_ties_round_to_even() {
        assert_eq!(format_count(0.5), "0");
        assert_eq!(format_count(1.5), "2");
        assert_eq!(format_count(2.5), "2");
    }

    #[test]
    fn test_format_count_groups_thousands() {
        assert_eq!(format_count(1234567.0), "1.234.567");
        assert_eq!(format_count(1000.0), "1.000");
    }

    #[test]
    fn test_format_count_undefined() {
        assert_eq!(format_count(f64::INFINITY), "—");
        assert_eq!(format_count(f64::NAN), "—");
    }

    #[test]
    fn test_format_pct() {
        assert_eq!(format_pct(20.0), "20.0%");
        assert_eq!(format_pct(10.0), "10.0%");
        assert_eq!(format_pct(33.33), "33.3%");
    }
}
