use std::cell::Cell;
use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::fmt;
use std::fmt::Write;

use crate::quorum::CommitRange;
use crate::quorum::IndexLookup;
use crate::quorum::VoteResult;
use crate::raft_types::LogIndex;
use crate::raft_types::NodeId;
use crate::raft_types::INF;

/// A set of voter ids that decides by simple majority.
///
/// Insertion order is irrelevant and membership is unique. The empty config
/// is a valid value with defined semantics: it commits `(INF, INF)` and wins
/// every vote, which is what makes it the identity of joint composition.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MajorityConfig {
    voters: BTreeSet<NodeId>,
}

/// The count constituting a majority of `n` voters.
pub(crate) fn majority_of(n: usize) -> usize {
    n / 2 + 1
}

thread_local! {
    /// Scratch buffer reused across commit computations on this thread.
    ///
    /// Taken out for the duration of a computation and put back cleared, so
    /// a lookup that re-enters the kernel allocates instead of corrupting.
    static SCRATCH: Cell<Vec<LogIndex>> = const { Cell::new(Vec::new()) };
}

impl MajorityConfig {
    pub fn len(&self) -> usize {
        self.voters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.voters.is_empty()
    }

    /// Iterate over voter ids in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.voters.iter().copied()
    }

    /// Compute the committed index from the acknowledgements in `lookup`.
    ///
    /// The result is final if enough voters are reflected in the lookup.
    /// Otherwise `maybe` exceeds `definitely` (the greatest index known
    /// committed so far) and `definitely` may still grow, bounded by
    /// `maybe`, as missing voters report in.
    ///
    /// The empty config returns `(INF, INF)`: the neutral element of the
    /// element-wise `min` composing joint ranges. A caller that wants
    /// "empty commits zero" has to test for emptiness itself.
    ///
    /// # Algorithm
    ///
    /// Collect the known acked indexes into an `n`-slot slice filled from
    /// the right; the zeroed slots on the left stand for voters that may
    /// still report in. After sorting ascending, the slot `n/2 + 1` from the
    /// end holds the greatest index acked by a majority:
    ///
    /// ```text
    /// voters:  {1, 2, 3, 4, 5}    acks: 1→101, 4→103, 5→104
    /// srt:     [0, 0, 101, 103, 104]
    ///                  ^pos            definitely = 101
    /// ```
    ///
    /// Every voter still missing can shift `pos` left by one slot at most by
    /// acking an arbitrarily high index, so `srt[pos + n - votes_cast]`
    /// bounds the final outcome. If the missing voters alone could form a
    /// majority, nothing bounds it yet and `maybe` is `INF`.
    pub fn committed_index<L>(&self, lookup: &L) -> CommitRange
    where L: IndexLookup {
        let n = self.voters.len();
        if n == 0 {
            return CommitRange::new(INF, INF);
        }

        let mut srt = SCRATCH.with(Cell::take);
        srt.clear();
        srt.resize(n, 0);

        let mut votes_cast = 0;
        for id in self.iter() {
            if let Some(idx) = lookup.acked_index(id) {
                votes_cast += 1;
                srt[n - votes_cast] = idx;
            }
        }

        srt.sort_unstable();

        // From the end of the slice, move a majority count to the left,
        // accounting for zero-indexing.
        let pos = n - majority_of(n);
        let definitely = srt[pos];

        let maybe = if votes_cast > pos {
            debug_assert!(pos + (n - votes_cast) < n);
            srt[pos + (n - votes_cast)]
        } else {
            INF
        };

        srt.clear();
        SCRATCH.with(|p| p.set(srt));

        let cr = CommitRange::new(definitely, maybe);
        tracing::trace!("committed_index of {}: {}", self, cr);
        cr
    }

    /// Resolve a yes/no vote.
    ///
    /// Voters missing from `votes` are still pending. Entries for ids
    /// outside this config are ignored.
    ///
    /// A vote is a committed-index computation in which "yes" acks index one
    /// and "no" acks index zero, so the reduction reuses
    /// [`committed_index`](Self::committed_index): a malleable range means
    /// the vote is still open, a final range at one is a win, at zero a
    /// loss. The empty config wins every vote; without voters there is
    /// nobody to dissent, and this identity is what makes joint votes
    /// degrade gracefully when one side is empty.
    pub fn vote_result(&self, votes: &BTreeMap<NodeId, bool>) -> VoteResult {
        let lookup: BTreeMap<NodeId, LogIndex> =
            votes.iter().map(|(&id, &yes)| (id, LogIndex::from(yes))).collect();

        let cr = self.committed_index(&lookup);

        if !cr.is_final() {
            return VoteResult::Pending;
        }
        if cr.definitely == 1 || self.is_empty() {
            return VoteResult::Won;
        }
        VoteResult::Lost
    }

    /// Render one row per voter in ascending id order, each with a textual
    /// progress bar whose length is the rank of that voter's acked index
    /// within the config. Equal indexes get equal bars; a voter the lookup
    /// does not know yet renders as `?`.
    pub fn describe<L>(&self, lookup: &L) -> String
    where L: IndexLookup {
        if self.voters.is_empty() {
            return "<empty majority quorum>".to_string();
        }

        struct Row {
            id: NodeId,
            idx: LogIndex,
            ok: bool,
            bar: usize,
        }

        let n = self.voters.len();

        let mut info: Vec<Row> = self
            .iter()
            .map(|id| {
                let acked = lookup.acked_index(id);
                Row {
                    id,
                    idx: acked.unwrap_or(0),
                    ok: acked.is_some(),
                    bar: 0,
                }
            })
            .collect();

        // Rank rows by index: the row starting a strictly greater run gets a
        // bar equal to its position, rows of the same run share it.
        info.sort_by_key(|row| (row.idx, row.id));

        let mut bar = 0;
        for i in 1..n {
            if info[i - 1].idx < info[i].idx {
                bar = i;
            }
            info[i].bar = bar;
        }

        info.sort_by_key(|row| row.id);

        let mut buf = String::new();
        buf.push_str(&" ".repeat(n));
        buf.push_str("    idx\n");

        for row in info.iter() {
            if !row.ok {
                buf.push('?');
                buf.push_str(&" ".repeat(n));
            } else {
                buf.push_str(&"x".repeat(row.bar));
                buf.push('>');
                buf.push_str(&" ".repeat(n - row.bar));
            }
            let _ = writeln!(buf, " {:>5}    (id={})", row.idx, row.id);
        }
        buf
    }
}

impl From<BTreeSet<NodeId>> for MajorityConfig {
    fn from(voters: BTreeSet<NodeId>) -> Self {
        Self { voters }
    }
}

impl FromIterator<NodeId> for MajorityConfig {
    fn from_iter<T: IntoIterator<Item = NodeId>>(iter: T) -> Self {
        Self {
            voters: iter.into_iter().collect(),
        }
    }
}

/// Prints as `(1 2 3)`.
impl fmt::Display for MajorityConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, id) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", id)?;
        }
        write!(f, ")")
    }
}
