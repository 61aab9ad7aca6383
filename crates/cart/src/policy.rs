//! What a quantity update does with non-positive values.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, DomainResult};

/// Handling of `SetQuantity` requests with `qty <= 0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuantityPolicy {
    /// Fail with a validation error.
    #[default]
    Reject,
    /// Treat the request as a quantity of one.
    Clamp,
    /// Zero removes the line; negative values fail.
    RemoveOnZero,
}

/// Outcome of resolving a requested quantity against a policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityChange {
    Set(u32),
    Remove,
}

impl QuantityPolicy {
    pub fn resolve(self, requested: i64) -> DomainResult<QuantityChange> {
        if requested > 0 {
            return u32::try_from(requested)
                .map(QuantityChange::Set)
                .map_err(|_| DomainError::validation(format!("quantity {requested} is too large")));
        }

        match (self, requested) {
            (QuantityPolicy::Clamp, _) => Ok(QuantityChange::Set(1)),
            (QuantityPolicy::RemoveOnZero, 0) => Ok(QuantityChange::Remove),
            _ => Err(DomainError::validation(format!(
                "quantity must be positive, got {requested}"
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            QuantityPolicy::Reject => "reject",
            QuantityPolicy::Clamp => "clamp",
            QuantityPolicy::RemoveOnZero => "remove-on-zero",
        }
    }
}

impl core::fmt::Display for QuantityPolicy {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuantityPolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "reject" => Ok(QuantityPolicy::Reject),
            "clamp" => Ok(QuantityPolicy::Clamp),
            "remove-on-zero" => Ok(QuantityPolicy::RemoveOnZero),
            other => Err(DomainError::validation(format!(
                "unknown quantity policy {other:?}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_quantities_pass_under_every_policy() {
        for policy in [QuantityPolicy::Reject, QuantityPolicy::Clamp, QuantityPolicy::RemoveOnZero] {
            assert_eq!(policy.resolve(5), Ok(QuantityChange::Set(5)));
        }
    }

    #[test]
    fn oversized_quantities_fail_under_every_policy() {
        let too_big = i64::from(u32::MAX) + 1;
        for policy in [QuantityPolicy::Reject, QuantityPolicy::Clamp, QuantityPolicy::RemoveOnZero] {
            assert!(matches!(policy.resolve(too_big), Err(DomainError::Validation(_))));
        }
    }

    #[test]
    fn reject_refuses_zero_and_negative() {
        assert!(QuantityPolicy::Reject.resolve(0).is_err());
        assert!(QuantityPolicy::Reject.resolve(-3).is_err());
    }

    #[test]
    fn clamp_raises_to_one() {
        assert_eq!(QuantityPolicy::Clamp.resolve(0), Ok(QuantityChange::Set(1)));
        assert_eq!(QuantityPolicy::Clamp.resolve(-4), Ok(QuantityChange::Set(1)));
    }

    #[test]
    fn remove_on_zero_removes_but_refuses_negative() {
        assert_eq!(QuantityPolicy::RemoveOnZero.resolve(0), Ok(QuantityChange::Remove));
        assert!(QuantityPolicy::RemoveOnZero.resolve(-1).is_err());
    }

    #[test]
    fn parses_config_spellings() {
        assert_eq!("reject".parse::<QuantityPolicy>(), Ok(QuantityPolicy::Reject));
        assert_eq!(" Clamp ".parse::<QuantityPolicy>(), Ok(QuantityPolicy::Clamp));
        assert_eq!("remove_on_zero".parse::<QuantityPolicy>(), Ok(QuantityPolicy::RemoveOnZero));
        assert_eq!("remove-on-zero".parse::<QuantityPolicy>(), Ok(QuantityPolicy::RemoveOnZero));
        assert!("allow".parse::<QuantityPolicy>().is_err());
        assert_eq!(QuantityPolicy::RemoveOnZero.to_string(), "remove-on-zero");
    }
}
