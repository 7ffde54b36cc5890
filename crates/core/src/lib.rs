//! Grandfather-father-son retention decisions for dated backups
//!
//! This crate provides:
//! - Tiered retention policies (daily / weekly / monthly generations)
//! - The calendar-day to group-id table built by walking back from "now"
//! - The single-pass partitioner that picks one day to keep per group
//! - Timestamp parsing and input ordering helpers
//!
//! Nothing here touches storage. Callers get back the subset of their own
//! lines that should be kept or deleted.

pub mod error;
pub mod group_map;
pub mod order;
pub mod partition;
pub mod policy;
pub mod timestamp;

// Re-exports
pub use error::{FilterError, Result};
pub use group_map::{GroupId, GroupMap, GroupObserver, NoopObserver, TracingObserver};
pub use order::Order;
pub use partition::{clusters, filter, partition, Cluster, Clusters, Partition, Selection};
pub use policy::{RetentionPolicy, RetentionTier};
pub use timestamp::{parse_records, Layout, TimestampRecord, DEFAULT_LAYOUT};

use chrono::NaiveDate;

/// Parse `lines` (oldest first), bucket them against `policy` relative to
/// `reference_day`, and return the lines picked by `selection`.
///
/// Every line is parsed before anything is decided, so a single bad line
/// fails the whole call.
pub fn select<'a, S, O>(
    policy: &RetentionPolicy,
    lines: &'a [S],
    layout: &Layout,
    reference_day: NaiveDate,
    selection: Selection,
    observer: &mut O,
) -> Result<Vec<&'a str>>
where
    S: AsRef<str>,
    O: GroupObserver + ?Sized,
{
    let records = parse_records(lines, layout)?;
    let map = GroupMap::build(policy, reference_day, observer);
    let selected = filter(&map, &records, selection);

    tracing::info!(
        total = records.len(),
        selected = selected.len(),
        mode = %selection,
        "retention decision complete"
    );

    Ok(selected)
}
