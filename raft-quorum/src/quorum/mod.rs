//! Quorum decisions over majority and joint voter configurations.
//!
//! A quorum for a group of `n` voters is any subset of at least `n/2 + 1` of
//! them. A [`MajorityConfig`] decides with a single group; a [`JointConfig`]
//! pairs two groups and requires a majority in each, which is what makes
//! membership changes safe.

mod commit_range;
mod index_lookup;
mod joint;
mod majority;
mod vote_result;

#[cfg(feature = "bench")]
#[cfg(test)]
mod bench;

#[cfg(test)] mod alternative;

pub use commit_range::CommitRange;
pub use index_lookup::FnLookup;
pub use index_lookup::IndexLookup;
pub use joint::JointConfig;
pub use majority::MajorityConfig;
pub use vote_result::VoteResult;
