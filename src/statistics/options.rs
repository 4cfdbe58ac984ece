//! statistics::options — configuration for pair reductions.
//!
//! Purpose
//! -------
//! Carry the policy knobs of the bivariate statistics in one small value
//! type, so callers configure behavior once and thread it through
//! [`covariance_with`](crate::statistics::bivariate::covariance_with) and
//! [`correlation_coefficient_with`](crate::statistics::bivariate::correlation_coefficient_with).
//!
//! Key behaviors
//! -------------
//! - [`SumProductPolicy`] decides whether a negative Σxy is an error.
//! - [`BivariateOptions`] bundles the policy; its `Default` matches the
//!   plain `covariance` / `correlation_coefficient` entry points.
//! - Policies parse from snake_case names for the Python surface.
//!
//! Conventions
//! -----------
//! - Rejecting a negative Σxy is a sanity check inherited from return-series
//!   workflows where all inputs share a sign. It is not a property of dot
//!   products: mixed-sign series legitimately produce negative Σxy, and
//!   general-purpose callers should opt into
//!   [`SumProductPolicy::AllowNegative`].
use std::str::FromStr;

use crate::statistics::errors::StatsError;

/// Treatment of a negative sum of products.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SumProductPolicy {
    /// Fail with `StatsError::NegativeResult` when Σxy < 0.
    #[default]
    RejectNegative,
    /// Return Σxy regardless of sign.
    AllowNegative,
}

impl SumProductPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SumProductPolicy::RejectNegative => "reject_negative",
            SumProductPolicy::AllowNegative => "allow_negative",
        }
    }
}

impl FromStr for SumProductPolicy {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reject_negative" | "reject" => Ok(SumProductPolicy::RejectNegative),
            "allow_negative" | "allow" => Ok(SumProductPolicy::AllowNegative),
            _ => Err(StatsError::InvalidPolicy(s.to_string())),
        }
    }
}

/// BivariateOptions — configuration for covariance and correlation.
///
/// Fields
/// ------
/// - `sum_product`: [`SumProductPolicy`]
///   Applied to the Σxy reduction inside both statistics. Defaults to
///   [`SumProductPolicy::RejectNegative`].
///
/// Notes
/// -----
/// - Small and `Copy`; pass by reference or value as convenient.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BivariateOptions {
    pub sum_product: SumProductPolicy,
}

impl BivariateOptions {
    pub fn new(sum_product: SumProductPolicy) -> Self {
        BivariateOptions { sum_product }
    }

    /// Builder-style override of the sum-product policy.
    pub fn with_sum_product_policy(mut self, policy: SumProductPolicy) -> Self {
        self.sum_product = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Purpose
    // -------
    // The default options must reproduce the plain entry points.
    //
    // Given
    // -----
    // - `BivariateOptions::default()`.
    //
    // Expect
    // ------
    // - `sum_product == RejectNegative`.
    fn default_options_reject_negative_sum_product() {
        let opts = BivariateOptions::default();
        assert_eq!(opts.sum_product, SumProductPolicy::RejectNegative);
        assert_eq!(
            opts.with_sum_product_policy(SumProductPolicy::AllowNegative).sum_product,
            SumProductPolicy::AllowNegative
        );
    }

    #[test]
    // Purpose
    // -------
    // Policy names parse case-insensitively and round-trip through `as_str`.
    //
    // Given
    // -----
    // - "Allow_Negative", " reject ", and the canonical names.
    //
    // Expect
    // ------
    // - The matching variants; an unknown name yields `InvalidPolicy`.
    fn policy_parses_known_names_and_rejects_unknown() {
        assert_eq!("Allow_Negative".parse::<SumProductPolicy>(), Ok(SumProductPolicy::AllowNegative));
        assert_eq!(" reject ".parse::<SumProductPolicy>(), Ok(SumProductPolicy::RejectNegative));
        for policy in [SumProductPolicy::RejectNegative, SumProductPolicy::AllowNegative] {
            assert_eq!(policy.as_str().parse::<SumProductPolicy>(), Ok(policy));
        }

        match "clip".parse::<SumProductPolicy>() {
            Err(StatsError::InvalidPolicy(name)) => assert_eq!(name, "clip"),
            other => panic!("expected InvalidPolicy, got {other:?}"),
        }
    }
}
