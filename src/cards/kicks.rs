use super::rank::Rank;

/// The ordered tie-break key of a classified hand.
///
/// Up to five ranks in descending priority. Two hands of the same category
/// compare their keys lexicographically; equal keys are an exact tie.
/// Only the first `len` slots are meaningful.
#[derive(Debug, Default, Clone, Copy, Hash, Eq, PartialEq)]
pub struct Kickers {
    ranks: [Rank; 5],
    len: usize,
}

impl Kickers {
    pub fn ranks(&self) -> &[Rank] {
        &self.ranks[..self.len]
    }
    pub fn len(&self) -> usize {
        self.len
    }
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Ord for Kickers {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.ranks().cmp(other.ranks())
    }
}
impl PartialOrd for Kickers {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// &[Rank] isomorphism, truncated to five ranks
impl From<&[Rank]> for Kickers {
    fn from(ranks: &[Rank]) -> Self {
        let mut this = Self::default();
        for (slot, rank) in this.ranks.iter_mut().zip(ranks) {
            *slot = *rank;
            this.len += 1;
        }
        this
    }
}
impl From<Kickers> for Vec<Rank> {
    fn from(k: Kickers) -> Self {
        k.ranks().to_vec()
    }
}

impl std::fmt::Display for Kickers {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let ranks = self
            .ranks()
            .iter()
            .map(|r| r.to_string())
            .collect::<Vec<_>>();
        write!(f, "[{}]", ranks.join(","))
    }
}
