use super::card::Card;
use super::distribution::Distribution;
use super::distribution::Group;
use super::hand::Hand;
use super::rank::Rank;
use super::ranking::Ranking;
use super::straight::Straight;
use super::strength::Strength;
use super::suit::Suit;
use crate::Error;
use crate::HAND_SIZE;
use crate::HOLE_SIZE;
use crate::MAX_CARDS;
use crate::MIN_CARDS;

/// Classifies 5 to 7 cards into their best five-card hand.
///
/// Rather than trying all 21 five-card subsets of seven cards, we short-circuit
/// through a decision tree:
///
/// 1. If some suit has five or more cards, the answer is a flush, a straight
///    flush or a royal flush. With at most seven cards, five of one suit leave
///    too few cards for quads or a full house, so nothing else needs checking.
/// 2. Otherwise group the cards by rank and look at the two largest groups
///    for quads and full houses.
/// 3. With at least five distinct ranks, look for a straight.
/// 4. Fall through trips, two pair, pair and high card.
///
/// The result is always the same hand an exhaustive search would pick.
pub struct Evaluator;

impl Evaluator {
    /// Classifies any set of 5 to 7 distinct cards.
    pub fn classify(cards: &[Card]) -> Result<Strength, Error> {
        let sorted = Self::validate(cards)?;
        let hand = Hand::from(cards);
        let flush = Suit::all()
            .into_iter()
            .find(|suit| hand.of(suit).size() >= HAND_SIZE);
        Ok(Self::evaluate(&sorted, flush))
    }

    /// Classifies two hole cards together with 3 to 5 board cards.
    ///
    /// Same result as [`Evaluator::classify`] on the union, but the flush
    /// check starts from the board: unless the board holds three cards of a
    /// suit, no flush can be made and the suit counting stops there.
    pub fn holdem(hole: &[Card], board: &[Card]) -> Result<Strength, Error> {
        if hole.len() != HOLE_SIZE {
            return Err(Error::InvalidInput(format!(
                "expected {} hole cards, got {}",
                HOLE_SIZE,
                hole.len()
            )));
        }
        let cards = hole.iter().chain(board).copied().collect::<Vec<Card>>();
        let sorted = Self::validate(&cards)?;
        Ok(Self::evaluate(&sorted, Self::flush_reachable(hole, board)))
    }

    /// Checks cardinality and uniqueness, returns the cards sorted descending.
    fn validate(cards: &[Card]) -> Result<Vec<Card>, Error> {
        if !(MIN_CARDS..=MAX_CARDS).contains(&cards.len()) {
            return Err(Error::InvalidInput(format!(
                "expected {} to {} cards, got {}",
                MIN_CARDS,
                MAX_CARDS,
                cards.len()
            )));
        }
        if Hand::from(cards).size() != cards.len() {
            return Err(Error::InvalidInput(format!(
                "duplicate card in {}",
                cards.iter().map(|c| c.to_string()).collect::<Vec<_>>().join(" ")
            )));
        }
        let mut sorted = cards.to_vec();
        Card::sort_desc(&mut sorted);
        Ok(sorted)
    }

    /// The suit of the flush, if the board makes one possible and the
    /// hole cards complete it. A board of at most five cards cannot hold
    /// three cards of two different suits, so the most common board suit
    /// is the only candidate.
    fn flush_reachable(hole: &[Card], board: &[Card]) -> Option<Suit> {
        let board = Hand::from(board);
        let (suit, n) = Suit::all()
            .into_iter()
            .map(|suit| (suit, board.of(&suit).size()))
            .max_by_key(|&(_, n)| n)?;
        if n < 3 {
            return None;
        }
        let n = n + hole.iter().filter(|c| c.suit() == suit).count();
        (n >= HAND_SIZE).then_some(suit)
    }

    fn evaluate(sorted: &[Card], flush: Option<Suit>) -> Strength {
        match flush {
            Some(suit) => Self::find_flush(sorted, suit),
            None => Self::find_grouped(sorted),
        }
    }

    fn find_flush(sorted: &[Card], suit: Suit) -> Strength {
        let suited = sorted
            .iter()
            .copied()
            .filter(|c| c.suit() == suit)
            .collect::<Vec<Card>>();
        match Straight::detect(&suited) {
            Some(run) if run.low() == Rank::Ten => Strength::from((Ranking::RoyalFlush, run.cards())),
            Some(run) => Strength::from((Ranking::StraightFlush(run.high()), run.cards())),
            None => {
                let cards = Self::five(suited.into_iter());
                Strength::from((Ranking::Flush(cards.map(|c| c.rank())), cards))
            }
        }
    }

    fn find_grouped(sorted: &[Card]) -> Strength {
        let distribution = Distribution::from(sorted);
        let best = distribution.best().copied();
        let second = distribution.second().copied();
        if let Some(quads) = best.filter(|g| g.count() == 4) {
            return Self::find_4_oak(sorted, quads);
        }
        if let (Some(trips), Some(pair)) = (best, second) {
            if trips.count() == 3 && pair.count() >= 2 {
                return Self::find_3_oak_2_oak(trips, pair);
            }
        }
        if distribution.distinct() >= HAND_SIZE {
            if let Some(run) = Straight::detect(sorted) {
                return Strength::from((Ranking::Straight(run.high()), run.cards()));
            }
        }
        match (best, second) {
            (Some(trips), _) if trips.count() == 3 => Self::find_3_oak(sorted, trips),
            (Some(hi), Some(lo)) if hi.count() == 2 && lo.count() == 2 => {
                Self::find_2_oak_2_oak(sorted, hi, lo)
            }
            (Some(pair), _) if pair.count() == 2 => Self::find_2_oak(sorted, pair),
            _ => Self::find_1_oak(sorted),
        }
    }

    fn find_4_oak(sorted: &[Card], quads: Group) -> Strength {
        let cards = Self::five(quads.cards().chain(Self::rest(sorted, &[quads.rank()])));
        let ranking = Ranking::FourOfAKind(quads.rank(), cards[4].rank());
        Strength::from((ranking, cards))
    }
    fn find_3_oak_2_oak(trips: Group, pair: Group) -> Strength {
        // the second group may itself be trips; any two of it will do
        let cards = Self::five(trips.cards().chain(pair.cards().take(2)));
        let ranking = Ranking::FullHouse(trips.rank(), pair.rank());
        Strength::from((ranking, cards))
    }
    fn find_3_oak(sorted: &[Card], trips: Group) -> Strength {
        let cards = Self::five(trips.cards().chain(Self::rest(sorted, &[trips.rank()])));
        let ranking = Ranking::ThreeOfAKind(trips.rank(), [cards[3].rank(), cards[4].rank()]);
        Strength::from((ranking, cards))
    }
    fn find_2_oak_2_oak(sorted: &[Card], hi: Group, lo: Group) -> Strength {
        let used = [hi.rank(), lo.rank()];
        let cards = Self::five(hi.cards().chain(lo.cards()).chain(Self::rest(sorted, &used)));
        let ranking = Ranking::TwoPair(hi.rank(), lo.rank(), cards[4].rank());
        Strength::from((ranking, cards))
    }
    fn find_2_oak(sorted: &[Card], pair: Group) -> Strength {
        let cards = Self::five(pair.cards().chain(Self::rest(sorted, &[pair.rank()])));
        let kicks = [cards[2].rank(), cards[3].rank(), cards[4].rank()];
        Strength::from((Ranking::Pair(pair.rank(), kicks), cards))
    }
    fn find_1_oak(sorted: &[Card]) -> Strength {
        let cards = Self::five(sorted.iter().copied());
        Strength::from((Ranking::HighCard(cards.map(|c| c.rank())), cards))
    }

    /// Cards not of the given ranks, highest first.
    fn rest<'a>(sorted: &'a [Card], used: &'a [Rank]) -> impl Iterator<Item = Card> + 'a {
        sorted
            .iter()
            .copied()
            .filter(move |c| !used.contains(&c.rank()))
    }
    /// The first five cards of the iterator. Callers guarantee there are five.
    fn five(cards: impl Iterator<Item = Card>) -> [Card; 5] {
        let mut hand = [Card::default(); 5];
        let mut n = 0;
        for (slot, card) in hand.iter_mut().zip(cards) {
            *slot = card;
            n += 1;
        }
        debug_assert!(n == HAND_SIZE);
        hand
    }
}

impl TryFrom<&[Card]> for Strength {
    type Error = Error;
    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        Evaluator::classify(cards)
    }
}
