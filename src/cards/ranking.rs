use super::category::Category;
use super::kicks::Kickers;
use super::rank::Rank;

/// A poker hand's value: its category together with exactly the ranks
/// needed to break ties within that category.
///
/// Ordering is category first, then [`Ranking::kickers`] lexicographically.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Ranking {
    HighCard([Rank; 5]),            // 5 ranks
    Pair(Rank, [Rank; 3]),          // pair + 3 kickers
    TwoPair(Rank, Rank, Rank),      // high pair, low pair, kicker
    ThreeOfAKind(Rank, [Rank; 2]),  // trips + 2 kickers
    Straight(Rank),                 // high card, Five for the wheel
    Flush([Rank; 5]),               // 5 ranks
    FullHouse(Rank, Rank),          // trips, pair
    FourOfAKind(Rank, Rank),        // quads, kicker
    StraightFlush(Rank),            // high card
    RoyalFlush,
}

impl Ranking {
    pub fn category(&self) -> Category {
        match self {
            Ranking::HighCard(..) => Category::HighCard,
            Ranking::Pair(..) => Category::Pair,
            Ranking::TwoPair(..) => Category::TwoPair,
            Ranking::ThreeOfAKind(..) => Category::ThreeOfAKind,
            Ranking::Straight(..) => Category::Straight,
            Ranking::Flush(..) => Category::Flush,
            Ranking::FullHouse(..) => Category::FullHouse,
            Ranking::FourOfAKind(..) => Category::FourOfAKind,
            Ranking::StraightFlush(..) => Category::StraightFlush,
            Ranking::RoyalFlush => Category::RoyalFlush,
        }
    }

    /// The tie-break key, highest priority first.
    pub fn kickers(&self) -> Kickers {
        match *self {
            Ranking::RoyalFlush => Kickers::default(),
            Ranking::Straight(hi) | Ranking::StraightFlush(hi) => Kickers::from(&[hi][..]),
            Ranking::FullHouse(a, b) | Ranking::FourOfAKind(a, b) => Kickers::from(&[a, b][..]),
            Ranking::TwoPair(hi, lo, k) => Kickers::from(&[hi, lo, k][..]),
            Ranking::ThreeOfAKind(t, [k1, k2]) => Kickers::from(&[t, k1, k2][..]),
            Ranking::Pair(p, [k1, k2, k3]) => Kickers::from(&[p, k1, k2, k3][..]),
            Ranking::HighCard(ranks) | Ranking::Flush(ranks) => Kickers::from(&ranks[..]),
        }
    }
}

impl Ord for Ranking {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.category()
            .cmp(&other.category())
            .then_with(|| self.kickers().cmp(&other.kickers()))
    }
}
impl PartialOrd for Ranking {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for Ranking {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<14}{}", self.category(), self.kickers())
    }
}
