use std::fmt;

/// The outcome of a yes/no vote under quorum rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VoteResult {
    /// Neither "yes" nor "no" has reached quorum; future votes decide.
    Pending,

    /// A quorum has voted "no".
    Lost,

    /// A quorum has voted "yes".
    Won,
}

impl fmt::Display for VoteResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VoteResult::Pending => write!(f, "Pending"),
            VoteResult::Lost => write!(f, "Lost"),
            VoteResult::Won => write!(f, "Won"),
        }
    }
}
