/// Errors surfaced by parsing, classification and equity enumeration.
///
/// Every operation in this crate is deterministic, so none of these
/// are retried: they indicate a malformed input from the caller.
/// A tied comparison is not an error, see [`Verdict::Tie`].
///
/// [`Verdict::Tie`]: crate::cards::Verdict::Tie
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A rank or suit token (or numeric value) outside the defined ranges.
    InvalidCard(String),
    /// Wrong cardinality, duplicated cards, or overlapping card sets.
    InvalidInput(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCard(s) => write!(f, "invalid card: {}", s),
            Self::InvalidInput(s) => write!(f, "invalid input: {}", s),
        }
    }
}

impl std::error::Error for Error {}
