//! Money type

use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;
use serde::Deserialize;
use serde::Serialize;

/// A monetary amount in pounds sterling.
///
/// Deserialises from JSON numbers or numeric strings.
///
/// # Example
///
/// ```
/// use transferboard_lib::model::Money;
///
/// let fee = Money::from_int(89_300_000);
/// assert_eq!(fee.format_gbp(), "£89,300,000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(pub Decimal);

impl Money {
    /// Creates a new Money value.
    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Returns the inner decimal value.
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Creates a Money value from whole pounds.
    pub fn from_int(value: i64) -> Self {
        Self(Decimal::new(value, 0))
    }

    /// Formats as en-US GBP currency with no fraction digits.
    ///
    /// Rounds half away from zero and groups thousands with commas:
    /// `1234567.5` becomes `£1,234,568`, `-1234` becomes `-£1,234`.
    pub fn format_gbp(&self) -> String {
        let whole = self
            .0
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .trunc();
        let negative = whole.is_sign_negative() && !whole.is_zero();
        let digits = whole.abs().to_string();

        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }

        if negative {
            format!("-£{}", grouped)
        } else {
            format!("£{}", grouped)
        }
    }
}

impl From<Decimal> for Money {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl From<Money> for Decimal {
    fn from(money: Money) -> Self {
        money.0
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.format_gbp())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_groups_thousands() {
        assert_eq!(Money::from_int(0).format_gbp(), "£0");
        assert_eq!(Money::from_int(999).format_gbp(), "£999");
        assert_eq!(Money::from_int(1_000).format_gbp(), "£1,000");
        assert_eq!(Money::from_int(12_500_000).format_gbp(), "£12,500,000");
    }

    #[test]
    fn test_format_rounds_half_away_from_zero() {
        assert_eq!(Money::new(Decimal::new(12345675, 1)).format_gbp(), "£1,234,568");
        assert_eq!(Money::new(Decimal::new(-25, 1)).format_gbp(), "-£3");
        assert_eq!(Money::new(Decimal::new(24, 1)).format_gbp(), "£2");
    }

    #[test]
    fn test_format_negative() {
        assert_eq!(Money::from_int(-1_234).format_gbp(), "-£1,234");
        assert_eq!(Money::new(Decimal::new(-4, 1)).format_gbp(), "£0");
    }

    #[test]
    fn test_deserialize_from_number() {
        let money: Money = serde_json::from_str("45000000").expect("integer");
        assert_eq!(money, Money::from_int(45_000_000));

        let money: Money = serde_json::from_str("1500.5").expect("float");
        assert_eq!(money.format_gbp(), "£1,501");
    }
}
