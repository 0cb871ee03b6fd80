use super::strength::Strength;
use std::cmp::Ordering;

/// Outcome of comparing two classified hands.
///
/// `Tie` is a regular outcome, not a failure: two hands with the same
/// category and the same tie-break key split, whatever their suits.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Verdict {
    Greater,
    Less,
    Tie,
}

impl Verdict {
    /// Higher category wins outright; otherwise the tie-break keys
    /// are compared rank by rank in priority order.
    pub fn of(a: &Strength, b: &Strength) -> Self {
        let ordering = a
            .category()
            .cmp(&b.category())
            .then_with(|| a.kickers().cmp(&b.kickers()));
        Self::from(ordering)
    }
}

impl From<Ordering> for Verdict {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Greater => Verdict::Greater,
            Ordering::Less => Verdict::Less,
            Ordering::Equal => Verdict::Tie,
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Verdict::Greater => write!(f, "greater"),
            Verdict::Less => write!(f, "less"),
            Verdict::Tie => write!(f, "tie"),
        }
    }
}

/// Free-function form of [`Verdict::of`].
pub fn compare(a: &Strength, b: &Strength) -> Verdict {
    Verdict::of(a, b)
}
