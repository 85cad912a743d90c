/// The identifier of a cluster member that counts toward quorum.
///
/// IDs are opaque to the kernel; `0` is as valid as any other value.
pub type NodeId = u64;

/// A position in the raft log.
pub type LogIndex = u64;

/// Sentinel log index meaning "unbounded above", rendered as `∞`.
///
/// It is the neutral element of the element-wise `min` that composes joint
/// commit ranges, which is why an empty [`MajorityConfig`] commits
/// `(INF, INF)` rather than zero.
///
/// [`MajorityConfig`]: crate::MajorityConfig
pub const INF: LogIndex = u64::MAX;
