//! Display helpers, applied only when rendering a breakdown

use crate::math::finite_or_zero;

/// Whole-unit currency with thousands separators, e.g. `$13,500`
pub fn format_currency(amount: f64) -> String {
    format_currency_with("$", amount)
}

/// Same as [`format_currency`] with a caller-chosen symbol
///
/// Rounds half away from zero; non-finite amounts render as zero.
pub fn format_currency_with(symbol: &str, amount: f64) -> String {
    let rounded = finite_or_zero(amount).round();
    let digits = format!("{:.0}", rounded.abs());
    let sign = if rounded < 0.0 { "-" } else { "" };

    format!("{}{}{}", sign, symbol, group_thousands(&digits))
}

/// Fraction as a percentage with up to two decimals, e.g. `22.5%`
pub fn format_percent(fraction: f64) -> String {
    let text = format!("{:.2}", finite_or_zero(fraction) * 100.0);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    let text = if text == "-0" { "0" } else { text };

    format!("{}%", text)
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_scenario_amounts() {
        assert_eq!(format_currency(13_500.0), "$13,500");
        assert_eq!(format_currency(48_300.0), "$48,300");
        assert_eq!(format_currency(450.0), "$450");
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(1_234_567.0), "$1,234,567");
    }

    #[test]
    fn test_currency_rounds_half_away_from_zero() {
        assert_eq!(format_currency(179.5), "$180");
        assert_eq!(format_currency(179.49), "$179");
        assert_eq!(format_currency(-1_500.5), "-$1,501");
        assert_eq!(format_currency(-0.4), "$0");
    }

    #[test]
    fn test_currency_non_finite() {
        assert_eq!(format_currency(f64::NAN), "$0");
        assert_eq!(format_currency(f64::INFINITY), "$0");
    }

    #[test]
    fn test_currency_custom_symbol() {
        assert_eq!(format_currency_with("€", 4_050.0), "€4,050");
    }

    #[test]
    fn test_percent() {
        assert_eq!(format_percent(0.72), "72%");
        assert_eq!(format_percent(0.225), "22.5%");
        assert_eq!(format_percent(0.025), "2.5%");
        assert_eq!(format_percent(0.75), "75%");
        assert_eq!(format_percent(0.0), "0%");
        assert_eq!(format_percent(f64::NAN), "0%");
    }
}
