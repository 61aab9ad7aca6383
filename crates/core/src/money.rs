//! USD amounts in integer cents.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

const CENTS_PER_DOLLAR: u64 = 100;

/// Non-negative amount of money, stored in cents.
///
/// `Display` renders en-US currency: `$1,234.50`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub const fn cents(self) -> u64 {
        self.0
    }

    /// Convert a dollar amount, rounding to the nearest cent.
    pub fn from_dollars(amount: f64) -> Result<Self, DomainError> {
        if !amount.is_finite() {
            return Err(DomainError::validation("price must be a finite number"));
        }
        if amount < 0.0 {
            return Err(DomainError::validation("price must not be negative"));
        }
        let cents = (amount * CENTS_PER_DOLLAR as f64).round();
        if cents >= u64::MAX as f64 {
            return Err(DomainError::validation("price is too large"));
        }
        Ok(Self(cents as u64))
    }

    pub fn saturating_add(self, other: Money) -> Money {
        Money(self.0.saturating_add(other.0))
    }

    pub fn saturating_mul(self, qty: u32) -> Money {
        Money(self.0.saturating_mul(u64::from(qty)))
    }
}

impl core::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::ZERO, Money::saturating_add)
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let dollars = (self.0 / CENTS_PER_DOLLAR).to_string();
        let cents = self.0 % CENTS_PER_DOLLAR;

        let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
        for (i, ch) in dollars.chars().enumerate() {
            if i > 0 && (dollars.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }

        write!(f, "${grouped}.{cents:02}")
    }
}

/// Parses plain decimal amounts such as `9.99`, `10` or `$1,200.50`.
impl FromStr for Money {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::validation(format!("invalid amount: {s:?}"));

        let trimmed = s.trim();
        let digits = trimmed.strip_prefix('$').unwrap_or(trimmed).replace(',', "");
        let (whole, frac) = match digits.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (digits.as_str(), ""),
        };

        if whole.is_empty() || frac.len() > 2 {
            return Err(invalid());
        }
        if !whole.bytes().all(|b| b.is_ascii_digit()) || !frac.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let whole: u64 = whole.parse().map_err(|_| invalid())?;
        let frac: u64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<u64>().map_err(|_| invalid())? * 10,
            _ => frac.parse().map_err(|_| invalid())?,
        };

        whole
            .checked_mul(CENTS_PER_DOLLAR)
            .and_then(|c| c.checked_add(frac))
            .map(Money)
            .ok_or_else(invalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn formats_as_us_currency() {
        assert_eq!(Money::ZERO.to_string(), "$0.00");
        assert_eq!(Money::from_cents(999).to_string(), "$9.99");
        assert_eq!(Money::from_cents(10_994).to_string(), "$109.94");
        assert_eq!(Money::from_cents(123_456).to_string(), "$1,234.56");
        assert_eq!(Money::from_cents(100_000_000).to_string(), "$1,000,000.00");
        assert_eq!(Money::from_cents(5).to_string(), "$0.05");
    }

    #[test]
    fn from_dollars_rounds_to_nearest_cent() {
        assert_eq!(Money::from_dollars(9.99).unwrap().cents(), 999);
        assert_eq!(Money::from_dollars(19.99).unwrap().cents(), 1999);
        assert_eq!(Money::from_dollars(0.005).unwrap().cents(), 1);
        assert_eq!(Money::from_dollars(0.0).unwrap(), Money::ZERO);
    }

    #[test]
    fn from_dollars_rejects_negative_and_non_finite() {
        assert!(matches!(Money::from_dollars(-0.01), Err(DomainError::Validation(_))));
        assert!(matches!(Money::from_dollars(f64::NAN), Err(DomainError::Validation(_))));
        assert!(matches!(Money::from_dollars(f64::INFINITY), Err(DomainError::Validation(_))));
    }

    #[test]
    fn parses_decimal_strings() {
        assert_eq!("9.99".parse::<Money>().unwrap().cents(), 999);
        assert_eq!("10".parse::<Money>().unwrap().cents(), 1000);
        assert_eq!("10.5".parse::<Money>().unwrap().cents(), 1050);
        assert_eq!("$1,234.56".parse::<Money>().unwrap().cents(), 123_456);

        for bad in ["", ".50", "-1.00", "1.234", "abc", "1.2x"] {
            assert!(bad.parse::<Money>().is_err(), "{bad:?} should not parse");
        }
    }

    #[test]
    fn line_arithmetic() {
        let price = Money::from_cents(1999);
        assert_eq!(price.saturating_mul(3), Money::from_cents(5997));
        assert_eq!(Money::from_cents(u64::MAX).saturating_mul(2).cents(), u64::MAX);

        let total: Money = [Money::from_cents(1998), Money::from_cents(1999)].into_iter().sum();
        assert_eq!(total.to_string(), "$39.97");
    }

    proptest! {
        /// Property: every thousands group after the first has three digits.
        #[test]
        fn thousands_groups_are_three_digits(cents in 0u64..10_000_000_000_000u64) {
            let formatted = Money::from_cents(cents).to_string();
            let dollars = formatted
                .strip_prefix('$')
                .and_then(|s| s.split_once('.'))
                .map(|(dollars, _)| dollars)
                .unwrap();

            let mut groups = dollars.split(',');
            let head = groups.next().unwrap();
            prop_assert!((1..=3).contains(&head.len()));
            for group in groups {
                prop_assert_eq!(group.len(), 3);
            }
            prop_assert_eq!(dollars.replace(',', "").parse::<u64>().unwrap(), cents / 100);
        }
    }
}
