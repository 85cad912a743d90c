//! The quorum decision kernel of a raft-style consensus protocol.
//!
//! Given a set of voters and the log indexes they have acknowledged, the
//! kernel answers the two questions replication safety hangs on:
//!
//! - what is the highest log index known to be on a quorum, and can that
//!   answer still move as more voters report in ([`MajorityConfig::committed_index`]);
//! - has an election been won, lost, or is it still open ([`MajorityConfig::vote_result`]).
//!
//! Both questions are also answered for [`JointConfig`], the two-group
//! configuration used during membership changes, where a decision requires a
//! majority in each group.
//!
//! Commit queries return a [`CommitRange`] rather than a single index: the
//! pair `(definitely, maybe)` bounds where the committed index can end up as
//! late acknowledgements arrive. The caller uses `definitely < maybe` to
//! decide whether waiting for more responses can change the outcome.
//!
//! The kernel is pure. It performs no I/O, keeps no state across calls other
//! than a thread-local scratch buffer, and never mutates its inputs.
//!
//! ```
//! use std::collections::BTreeMap;
//!
//! use raft_quorum::MajorityConfig;
//!
//! let config: MajorityConfig = [1, 2, 3].into_iter().collect();
//! let acked = BTreeMap::from([(1, 12), (2, 5)]);
//!
//! let cr = config.committed_index(&acked);
//! assert_eq!((5, 12), (cr.definitely, cr.maybe));
//! assert!(!cr.is_final());
//! ```

#![cfg_attr(feature = "bench", feature(test))]

mod quorum;
mod raft_types;

pub use crate::quorum::CommitRange;
pub use crate::quorum::FnLookup;
pub use crate::quorum::IndexLookup;
pub use crate::quorum::JointConfig;
pub use crate::quorum::MajorityConfig;
pub use crate::quorum::VoteResult;
pub use crate::raft_types::LogIndex;
pub use crate::raft_types::NodeId;
pub use crate::raft_types::INF;
