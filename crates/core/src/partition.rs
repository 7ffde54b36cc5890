//! Single-pass keep/delete partitioning of oldest-first records
//!
//! Records are split into clusters: maximal runs sharing one group id.
//! Within a cluster the first (oldest) record is the anchor, records on the
//! anchor's exact date are its duplicates, and everything newer is excess.
//! Anchor and duplicates are kept together; excess is deletable.

use crate::group_map::{GroupId, GroupMap};
use crate::timestamp::TimestampRecord;
use std::fmt;
use std::ops::Range;

/// Which side of the decision to report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Selection {
    /// Lines that are redundant and may be removed
    #[default]
    Delete,
    /// Lines that must be retained
    Keep,
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::Delete => f.write_str("delete"),
            Selection::Keep => f.write_str("keep"),
        }
    }
}

/// One group cluster, as index ranges into the record slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cluster {
    pub group: GroupId,
    /// Index of the oldest record
    pub anchor: usize,
    /// Records after the anchor on the same calendar date
    pub duplicates: Range<usize>,
    /// Newer records in the same group
    pub excess: Range<usize>,
}

impl Cluster {
    /// Anchor plus duplicates
    pub fn kept(&self) -> Range<usize> {
        self.anchor..self.duplicates.end
    }
}

/// Iterator over the clusters of an oldest-first record slice.
pub struct Clusters<'m, 'r, 'a> {
    map: &'m GroupMap,
    records: &'r [TimestampRecord<'a>],
    next: usize,
}

/// Walk `records` (oldest first) cluster by cluster.
pub fn clusters<'m, 'r, 'a>(
    map: &'m GroupMap,
    records: &'r [TimestampRecord<'a>],
) -> Clusters<'m, 'r, 'a> {
    Clusters {
        map,
        records,
        next: 0,
    }
}

impl Iterator for Clusters<'_, '_, '_> {
    type Item = Cluster;

    fn next(&mut self) -> Option<Cluster> {
        let records = self.records;
        let anchor = self.next;
        let date = records.get(anchor)?.date;
        let group = self.map.lookup(date);

        let mut dup_end = anchor + 1;
        while dup_end < records.len() && records[dup_end].date == date {
            dup_end += 1;
        }

        let mut excess_end = dup_end;
        while excess_end < records.len() && self.map.lookup(records[excess_end].date) == group {
            excess_end += 1;
        }

        self.next = excess_end;
        Some(Cluster {
            group,
            anchor,
            duplicates: anchor + 1..dup_end,
            excess: dup_end..excess_end,
        })
    }
}

/// Both halves of a retention decision, each in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition<'a> {
    pub keep: Vec<&'a str>,
    pub delete: Vec<&'a str>,
}

/// Lines picked by `selection`, in input order.
pub fn filter<'a>(
    map: &GroupMap,
    records: &[TimestampRecord<'a>],
    selection: Selection,
) -> Vec<&'a str> {
    let mut selected = Vec::new();

    for cluster in clusters(map, records) {
        tracing::debug!(
            group = %cluster.group,
            anchor = records[cluster.anchor].line,
            kept = cluster.kept().len(),
            excess = cluster.excess.len(),
            "cluster"
        );

        let range = match selection {
            Selection::Keep => cluster.kept(),
            Selection::Delete => cluster.excess,
        };
        selected.extend(records[range].iter().map(|r| r.line));
    }

    selected
}

/// Split `records` into kept and deletable lines in one pass.
pub fn partition<'a>(map: &GroupMap, records: &[TimestampRecord<'a>]) -> Partition<'a> {
    let mut result = Partition::default();

    for cluster in clusters(map, records) {
        result
            .keep
            .extend(records[cluster.kept()].iter().map(|r| r.line));
        result
            .delete
            .extend(records[cluster.excess].iter().map(|r| r.line));
    }

    result
}
