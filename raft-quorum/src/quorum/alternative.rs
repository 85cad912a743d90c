//! An independently coded committed-index computation, kept in-tree as the
//! reference the parity harness cross-checks the real implementation
//! against. It is `O(n²)` and makes no attempt to be clever, which is the
//! point.

use std::collections::BTreeMap;

use crate::quorum::majority::majority_of;
use crate::quorum::CommitRange;
use crate::quorum::IndexLookup;
use crate::quorum::MajorityConfig;
use crate::raft_types::LogIndex;
use crate::raft_types::INF;

pub(crate) fn alternative_committed_index<L>(config: &MajorityConfig, lookup: &L) -> CommitRange
where L: IndexLookup {
    if config.is_empty() {
        return CommitRange::new(INF, INF);
    }

    let mut id_to_idx = BTreeMap::new();
    for id in config.iter() {
        if let Some(idx) = lookup.acked_index(id) {
            id_to_idx.insert(id, idx);
        }
    }

    let pending = config.len() - id_to_idx.len();

    // For every candidate index, count the voters that acked it or higher.
    let mut idx_to_votes: BTreeMap<LogIndex, usize> =
        id_to_idx.values().map(|&idx| (idx, 0)).collect();

    for &idx in id_to_idx.values() {
        for (&candidate, count) in idx_to_votes.iter_mut() {
            if candidate <= idx {
                *count += 1;
            }
        }
    }

    let quorum = majority_of(config.len());

    // The greatest candidate that already reached quorum.
    let mut definitely = 0;
    for (&idx, &count) in idx_to_votes.iter() {
        if count >= quorum && idx > definitely {
            definitely = idx;
        }
    }

    // The greatest candidate the pending voters could still push through,
    // unbounded if the pending voters alone are a quorum.
    let mut maybe = 0;
    for (&idx, &count) in idx_to_votes.iter() {
        if count + pending >= quorum && idx > maybe {
            maybe = idx;
        }
    }
    if pending >= quorum {
        maybe = INF;
    }

    CommitRange::new(definitely, maybe)
}
