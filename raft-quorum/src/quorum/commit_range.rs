use std::error::Error;
use std::fmt;

use validit::Validate;

use crate::raft_types::LogIndex;
use crate::raft_types::INF;

/// The outcome of a committed-index query.
///
/// `definitely` is the greatest index currently known to be acknowledged by a
/// quorum. `maybe` is the greatest index that could still become committed if
/// every voter that has not reported yet acknowledged an arbitrarily high
/// index. The range is **final** when the two coincide; otherwise it is
/// malleable and `definitely` can only grow toward `maybe` as knowledge
/// arrives.
///
/// [`INF`] in `maybe` means no upper bound is known yet. The empty config
/// commits `(INF, INF)`, the neutral element of the joint min-composition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CommitRange {
    /// Greatest index acknowledged by a quorum.
    pub definitely: LogIndex,

    /// Greatest index that could still reach a quorum.
    pub maybe: LogIndex,
}

impl CommitRange {
    pub fn new(definitely: LogIndex, maybe: LogIndex) -> Self {
        debug_assert!(
            definitely <= maybe,
            "malformed commit range: {} > {}",
            definitely,
            maybe
        );
        Self { definitely, maybe }
    }

    /// A range is final when no future acknowledgement can move it.
    pub fn is_final(&self) -> bool {
        self.definitely == self.maybe
    }
}

impl Validate for CommitRange {
    fn validate(&self) -> Result<(), Box<dyn Error>> {
        validit::less_equal!(self.definitely, self.maybe);
        Ok(())
    }
}

/// A final range prints as a single index, a malleable one as `a-b`, with
/// `∞` substituted for the unbounded sentinel.
impl fmt::Display for CommitRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.maybe == INF {
            if self.definitely == INF {
                return write!(f, "∞");
            }
            return write!(f, "{}-∞", self.definitely);
        }
        if self.definitely == self.maybe {
            return write!(f, "{}", self.definitely);
        }
        write!(f, "{}-{}", self.definitely, self.maybe)
    }
}
