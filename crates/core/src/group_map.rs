//! Calendar day to retention group table
//!
//! The table is built by walking backward one calendar day at a time from a
//! reference day, consuming the policy's tiers in order. Every day visited
//! gets the current group id; a tier opens a new id at each bucket boundary.
//! Days older than the last tier are never inserted and look up as
//! [`GroupId::UNASSIGNED`].

use crate::policy::{RetentionPolicy, RetentionTier};
use ahash::AHashMap;
use chrono::NaiveDate;
use std::fmt;

/// Identifier of one retention bucket.
///
/// Ids grow as days move into the past. `0` means "older than every tier".
#[derive(Debug, Clone, Copy, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct GroupId(pub u32);

impl GroupId {
    /// Group of every day outside the configured tiers
    pub const UNASSIGNED: GroupId = GroupId(0);

    pub fn is_assigned(self) -> bool {
        self != Self::UNASSIGNED
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Receives the mapper's progress as it walks back through the calendar.
pub trait GroupObserver {
    /// `day` was assigned to `group`.
    fn assigned(&mut self, day: NaiveDate, group: GroupId);

    /// Tier `index` stopped consuming days; `next_day` is the first day the
    /// following tier will see.
    fn tier_exhausted(&mut self, _index: usize, _tier: &RetentionTier, _next_day: NaiveDate) {}
}

/// Observer that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl GroupObserver for NoopObserver {
    fn assigned(&mut self, _day: NaiveDate, _group: GroupId) {}
}

/// Observer that reports every assignment as a `tracing` debug event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl GroupObserver for TracingObserver {
    fn assigned(&mut self, day: NaiveDate, group: GroupId) {
        tracing::debug!(%day, %group, "group assigned");
    }

    fn tier_exhausted(&mut self, index: usize, tier: &RetentionTier, next_day: NaiveDate) {
        tracing::debug!(
            tier = index,
            period_days = tier.period_days,
            generations = tier.generation_count,
            %next_day,
            "tier exhausted"
        );
    }
}

/// Read-only mapping from calendar day to group id.
#[derive(Debug, Clone, Default)]
pub struct GroupMap {
    groups: AHashMap<NaiveDate, GroupId>,
}

impl GroupMap {
    /// Walk back from `reference_day` through the policy's tiers.
    pub fn build<O>(policy: &RetentionPolicy, reference_day: NaiveDate, observer: &mut O) -> Self
    where
        O: GroupObserver + ?Sized,
    {
        let tiers = policy.tiers();
        let mut groups = AHashMap::new();

        let mut day = reference_day;
        let mut next_group = 1u32;
        let mut tier_index = 0usize;
        let mut buckets_filled = 0u32;
        let mut days_into_tier = 0u64;

        while let Some(tier) = tiers.get(tier_index) {
            let group = GroupId(next_group);
            groups.insert(day, group);
            observer.assigned(day, group);

            if buckets_filled < tier.generation_count
                && days_into_tier % u64::from(tier.period_days) == 0
            {
                buckets_filled += 1;
                next_group += 1;
            }

            day = match day.pred_opt() {
                Some(prev) => prev,
                None => break,
            };
            days_into_tier += 1;

            // The next tier starts counting at 1, which shifts its bucket
            // boundaries by one day unless its period is a single day.
            if buckets_filled >= tier.generation_count || days_into_tier > tier.span_days() {
                observer.tier_exhausted(tier_index, tier, day);
                buckets_filled = 0;
                days_into_tier = 1;
                tier_index += 1;
            }
        }

        Self { groups }
    }

    /// Group of `day`, or [`GroupId::UNASSIGNED`] when no tier reaches it.
    pub fn lookup(&self, day: NaiveDate) -> GroupId {
        self.groups.get(&day).copied().unwrap_or_default()
    }

    /// Number of mapped days
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Oldest day any tier reaches.
    pub fn oldest_mapped_day(&self) -> Option<NaiveDate> {
        self.groups.keys().min().copied()
    }

    /// All mapped days, newest first.
    pub fn sorted_entries(&self) -> Vec<(NaiveDate, GroupId)> {
        let mut entries: Vec<_> = self.groups.iter().map(|(&d, &g)| (d, g)).collect();
        entries.sort_unstable_by(|a, b| b.0.cmp(&a.0));
        entries
    }
}
