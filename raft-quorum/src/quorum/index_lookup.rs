use std::collections::BTreeMap;
use std::collections::HashMap;

use crate::raft_types::LogIndex;
use crate::raft_types::NodeId;

/// Looks up the log index a voter has acknowledged.
///
/// `None` means the voter has not reported an acknowledgement yet in this
/// epoch; it is not the same as having acknowledged index `0`.
///
/// An implementation has to answer consistently within a single kernel call:
/// asked twice for the same id, it returns the same value. Across calls it
/// may change, which is what lets callers back a lookup with a live
/// per-voter progress table.
pub trait IndexLookup {
    fn acked_index(&self, id: NodeId) -> Option<LogIndex>;
}

impl IndexLookup for BTreeMap<NodeId, LogIndex> {
    fn acked_index(&self, id: NodeId) -> Option<LogIndex> {
        self.get(&id).copied()
    }
}

impl IndexLookup for HashMap<NodeId, LogIndex> {
    fn acked_index(&self, id: NodeId) -> Option<LogIndex> {
        self.get(&id).copied()
    }
}

/// Adapts a closure into an [`IndexLookup`].
///
/// A blanket impl for `F: Fn(..)` would conflict with the map impls, hence
/// the named wrapper:
///
/// ```
/// use raft_quorum::{FnLookup, MajorityConfig};
///
/// let config: MajorityConfig = [1, 2, 3].into_iter().collect();
/// let cr = config.committed_index(&FnLookup(|id| Some(id * 10)));
/// assert_eq!((20, 20), (cr.definitely, cr.maybe));
/// ```
pub struct FnLookup<F>(pub F);

impl<F> IndexLookup for FnLookup<F>
where F: Fn(NodeId) -> Option<LogIndex>
{
    fn acked_index(&self, id: NodeId) -> Option<LogIndex> {
        (self.0)(id)
    }
}
