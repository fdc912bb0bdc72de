use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Display currency. Amounts are never converted, only labelled.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    EnumIter,
    EnumString,
    Display,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    ValueEnum,
)]
#[strum(ascii_case_insensitive)]
pub enum Currency {
    #[default]
    #[value(name = "RM")]
    RM,
    #[value(name = "USD")]
    USD,
    #[value(name = "AED")]
    AED,
    #[value(name = "SAR")]
    SAR,
}

/// `"<CODE> <amount>"`, rounded half-up to a whole unit with thousands separators.
/// Non-finite amounts show as zero.
pub fn format_money(amount: f64, currency: Currency) -> String {
    format!("{} {}", currency, group_thousands(round_half_up(amount)))
}

fn round_half_up(amount: f64) -> i64 {
    let safe = if amount.is_finite() { amount } else { 0.0 };
    if safe >= 0.0 {
        safe.round() as i64
    } else {
        // -2.5 rounds toward +inf to -2
        (safe + 0.5).floor() as i64
    }
}

fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money_groups_thousands() {
        assert_eq!(format_money(129_000.0, Currency::RM), "RM 129,000");
        assert_eq!(format_money(1_234_567.4, Currency::USD), "USD 1,234,567");
        assert_eq!(format_money(999.0, Currency::AED), "AED 999");
        assert_eq!(format_money(0.0, Currency::SAR), "SAR 0");
    }

    #[test]
    fn test_format_money_rounds_half_up() {
        assert_eq!(format_money(10_749.5, Currency::RM), "RM 10,750");
        assert_eq!(format_money(-2.5, Currency::RM), "RM -2");
        assert_eq!(format_money(-2.6, Currency::RM), "RM -3");
    }

    #[test]
    fn test_format_money_just_below_half_rounds_down() {
        let below_half = f64::from_bits(0.5f64.to_bits() - 1);
        assert_eq!(format_money(below_half, Currency::RM), "RM 0");
        let below_two_and_half = f64::from_bits(2.5f64.to_bits() - 1);
        assert_eq!(format_money(below_two_and_half, Currency::USD), "USD 2");
    }

    #[test]
    fn test_format_money_non_finite_is_zero() {
        assert_eq!(format_money(f64::NAN, Currency::RM), "RM 0");
        assert_eq!(format_money(f64::INFINITY, Currency::USD), "USD 0");
    }

    #[test]
    fn test_currency_parses_case_insensitive() {
        assert_eq!("usd".parse::<Currency>().unwrap(), Currency::USD);
        assert!("EUR".parse::<Currency>().is_err());
    }
}
