use super::card::Card;
use super::category::Category;
use super::kicks::Kickers;
use super::ranking::Ranking;
use super::showdown::Verdict;

/// A classified hand: its [`Ranking`] and the exact five cards that make it.
///
/// Built once by the [`Evaluator`] and consumed right away by a comparison
/// or a histogram. The cards are kept for display and inspection only;
/// comparisons never look at suits.
///
/// [`Evaluator`]: super::evaluator::Evaluator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strength {
    ranking: Ranking,
    cards: [Card; 5],
}

impl Strength {
    pub fn ranking(&self) -> Ranking {
        self.ranking
    }
    pub fn category(&self) -> Category {
        self.ranking.category()
    }
    pub fn kickers(&self) -> Kickers {
        self.ranking.kickers()
    }
    /// The five cards forming the hand, in pattern-then-kicker order.
    pub fn cards(&self) -> [Card; 5] {
        self.cards
    }
    /// Shorthand for [`Verdict::of`].
    pub fn versus(&self, other: &Self) -> Verdict {
        Verdict::of(self, other)
    }
}

impl From<(Ranking, [Card; 5])> for Strength {
    fn from((ranking, cards): (Ranking, [Card; 5])) -> Self {
        Self { ranking, cards }
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let cards = self.cards.map(|c| c.to_string()).join(" ");
        write!(f, "{:<28}{}", self.ranking.to_string(), cards)
    }
}
