use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::fmt;

use crate::quorum::CommitRange;
use crate::quorum::IndexLookup;
use crate::quorum::MajorityConfig;
use crate::quorum::VoteResult;
use crate::raft_types::NodeId;

/// Two possibly overlapping majority configs deciding jointly.
///
/// A decision requires a majority in **each** config. By convention the
/// first config is the outgoing membership and the second the incoming one,
/// but every operation is symmetric in them. Either side may be empty, in
/// which case the joint degenerates to the other side.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JointConfig {
    configs: [MajorityConfig; 2],
}

impl JointConfig {
    pub fn new(outgoing: MajorityConfig, incoming: MajorityConfig) -> Self {
        Self {
            configs: [outgoing, incoming],
        }
    }

    /// The union of the two configs' voter ids.
    ///
    /// This is the set of voters the surrounding state machine has to track
    /// while the joint config is in effect.
    pub fn union(&self) -> BTreeSet<NodeId> {
        let mut ids = BTreeSet::new();
        for config in self.configs.iter() {
            ids.extend(config.iter());
        }
        ids
    }

    /// Compute the joint committed index: an index is jointly committed iff
    /// it is committed on both sides, so both components compose by `min`.
    ///
    /// An empty side contributes `(INF, INF)` and drops out of the `min`,
    /// which is what lets a joint config degenerate to a single majority.
    pub fn committed_index<L>(&self, lookup: &L) -> CommitRange
    where L: IndexLookup {
        let cr0 = self.configs[0].committed_index(lookup);
        let cr1 = self.configs[1].committed_index(lookup);

        CommitRange::new(
            cr0.definitely.min(cr1.definitely),
            cr0.maybe.min(cr1.maybe),
        )
    }

    /// Resolve a yes/no vote: both sides must win for the joint to win, a
    /// "no" majority on either side loses it, anything else is still open.
    pub fn vote_result(&self, votes: &BTreeMap<NodeId, bool>) -> VoteResult {
        let r0 = self.configs[0].vote_result(votes);
        let r1 = self.configs[1].vote_result(votes);

        match (r0, r1) {
            (a, b) if a == b => a,
            (VoteResult::Lost, _) | (_, VoteResult::Lost) => VoteResult::Lost,
            _ => VoteResult::Pending,
        }
    }

    /// Render the per-voter state of the union as a single majority config.
    pub fn describe<L>(&self, lookup: &L) -> String
    where L: IndexLookup {
        MajorityConfig::from(self.union()).describe(lookup)
    }
}

/// Prints as `(1 2 3)&&(3 4 5)`; the second config is omitted when empty.
impl fmt::Display for JointConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.configs[0])?;
        if !self.configs[1].is_empty() {
            write!(f, "&&{}", self.configs[1])?;
        }
        Ok(())
    }
}
