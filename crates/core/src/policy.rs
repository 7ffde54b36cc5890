//! Tiered retention policies

use crate::error::{FilterError, Result};

/// Period of the daily tier
pub const DAILY_PERIOD_DAYS: u32 = 1;
/// Period of the weekly tier
pub const WEEKLY_PERIOD_DAYS: u32 = 7;
/// Period of the monthly tier
pub const MONTHLY_PERIOD_DAYS: u32 = 30;
/// Largest generation count a tier may ask for
pub const MAX_GENERATION_COUNT: u32 = 10_000;

/// Keep up to `generation_count` buckets, each `period_days` consecutive days wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetentionTier {
    /// Width of one bucket in calendar days
    pub period_days: u32,
    /// Number of buckets this tier keeps
    pub generation_count: u32,
}

impl RetentionTier {
    pub const fn new(period_days: u32, generation_count: u32) -> Self {
        Self {
            period_days,
            generation_count,
        }
    }

    /// Total number of days the tier can cover.
    pub fn span_days(&self) -> u64 {
        u64::from(self.period_days) * u64::from(self.generation_count)
    }
}

/// Ordered tiers, finest granularity first.
///
/// The group mapper consumes tiers in order, so each tier starts where the
/// previous one stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetentionPolicy {
    tiers: Vec<RetentionTier>,
}

impl RetentionPolicy {
    /// Build a policy from explicit tiers.
    pub fn new(tiers: Vec<RetentionTier>) -> Result<Self> {
        if tiers.is_empty() {
            return Err(FilterError::EmptyPolicy);
        }
        if let Some(index) = tiers.iter().position(|t| t.period_days == 0) {
            return Err(FilterError::ZeroPeriod { index });
        }
        if let Some(index) = tiers
            .iter()
            .position(|t| t.generation_count > MAX_GENERATION_COUNT)
        {
            return Err(FilterError::TooManyGenerations {
                index,
                count: tiers[index].generation_count,
                max: MAX_GENERATION_COUNT,
            });
        }
        Ok(Self { tiers })
    }

    /// Build the standard daily / weekly / monthly policy.
    ///
    /// The daily tier is mandatory. Weekly and monthly tiers are only added
    /// when their counts are non-zero.
    pub fn from_counts(daily: u32, weekly: u32, monthly: u32) -> Result<Self> {
        if daily == 0 {
            return Err(FilterError::NoDailyRetention);
        }

        let mut tiers = vec![RetentionTier::new(DAILY_PERIOD_DAYS, daily)];
        if weekly > 0 {
            tiers.push(RetentionTier::new(WEEKLY_PERIOD_DAYS, weekly));
        }
        if monthly > 0 {
            tiers.push(RetentionTier::new(MONTHLY_PERIOD_DAYS, monthly));
        }

        Self::new(tiers)
    }

    pub fn tiers(&self) -> &[RetentionTier] {
        &self.tiers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_counts_all_tiers() {
        let policy = RetentionPolicy::from_counts(7, 3, 5).unwrap();
        assert_eq!(
            policy.tiers(),
            &[
                RetentionTier::new(1, 7),
                RetentionTier::new(7, 3),
                RetentionTier::new(30, 5),
            ]
        );
    }

    #[test]
    fn test_from_counts_skips_zero_tiers() {
        let policy = RetentionPolicy::from_counts(4, 0, 2).unwrap();
        assert_eq!(
            policy.tiers(),
            &[RetentionTier::new(1, 4), RetentionTier::new(30, 2)]
        );

        let policy = RetentionPolicy::from_counts(1, 0, 0).unwrap();
        assert_eq!(policy.tiers(), &[RetentionTier::new(1, 1)]);
    }

    #[test]
    fn test_from_counts_requires_daily() {
        let err = RetentionPolicy::from_counts(0, 3, 5).unwrap_err();
        assert!(matches!(err, FilterError::NoDailyRetention));
        assert_eq!(err.to_string(), "at least 1 daily backup is required");
    }

    #[test]
    fn test_new_validation() {
        assert!(matches!(
            RetentionPolicy::new(Vec::new()),
            Err(FilterError::EmptyPolicy)
        ));
        assert!(matches!(
            RetentionPolicy::new(vec![RetentionTier::new(1, 2), RetentionTier::new(0, 2)]),
            Err(FilterError::ZeroPeriod { index: 1 })
        ));
    }

    #[test]
    fn test_generation_count_is_capped() {
        assert!(RetentionPolicy::from_counts(7, 3, MAX_GENERATION_COUNT).is_ok());

        let err = RetentionPolicy::from_counts(7, 3, 4_000_000_000).unwrap_err();
        assert!(matches!(
            err,
            FilterError::TooManyGenerations { index: 2, count: 4_000_000_000, .. }
        ));
        assert!(err.to_string().contains("at most"));

        assert!(matches!(
            RetentionPolicy::from_counts(MAX_GENERATION_COUNT + 1, 0, 0),
            Err(FilterError::TooManyGenerations { index: 0, .. })
        ));
    }

    #[test]
    fn test_span_days() {
        assert_eq!(RetentionTier::new(7, 3).span_days(), 21);
        assert_eq!(RetentionTier::new(30, 0).span_days(), 0);
    }
}
