//! Brute-force reference classifier for differential testing.
//!
//! Scores every five-card subset independently with a naive counting
//! approach and keeps the best. Slow, but shares no code with the
//! [`Evaluator`](super::evaluator::Evaluator) beyond the card types.

use super::card::Card;
use super::rank::Rank;
use super::ranking::Ranking;

/// Naive score of exactly five cards.
pub fn five(cards: [Card; 5]) -> Ranking {
    let mut counts = [0usize; 15];
    for card in cards.iter() {
        counts[card.rank().value() as usize] += 1;
    }
    // (count, rank) pairs, biggest groups first, then higher ranks
    let mut groups = (2..=14u8)
        .rev()
        .filter(|&v| counts[v as usize] > 0)
        .map(|v| (counts[v as usize], rank(v)))
        .collect::<Vec<(usize, Rank)>>();
    groups.sort_by(|a, b| b.0.cmp(&a.0));
    let flush = cards.iter().all(|c| c.suit() == cards[0].suit());
    let high = if groups.len() == 5 {
        let top = groups[0].1.value();
        let low = groups[4].1.value();
        match (top, low) {
            (14, 2) if groups[1].1.value() == 5 => Some(Rank::Five),
            (t, l) if t - l == 4 => Some(groups[0].1),
            _ => None,
        }
    } else {
        None
    };
    let ranks = |n: usize| groups[n].1;
    match (flush, high, groups[0].0, groups.len()) {
        (true, Some(Rank::Ace), _, _) => Ranking::RoyalFlush,
        (true, Some(h), _, _) => Ranking::StraightFlush(h),
        (_, _, 4, _) => Ranking::FourOfAKind(ranks(0), ranks(1)),
        (_, _, 3, 2) => Ranking::FullHouse(ranks(0), ranks(1)),
        (true, None, _, _) => Ranking::Flush([ranks(0), ranks(1), ranks(2), ranks(3), ranks(4)]),
        (false, Some(h), _, _) => Ranking::Straight(h),
        (_, _, 3, _) => Ranking::ThreeOfAKind(ranks(0), [ranks(1), ranks(2)]),
        (_, _, 2, 3) => Ranking::TwoPair(ranks(0), ranks(1), ranks(2)),
        (_, _, 2, _) => Ranking::Pair(ranks(0), [ranks(1), ranks(2), ranks(3)]),
        _ => Ranking::HighCard([ranks(0), ranks(1), ranks(2), ranks(3), ranks(4)]),
    }
}

/// Best [`five`] score over every five-card subset.
pub fn best(cards: &[Card]) -> Ranking {
    let n = cards.len();
    let mut best = None::<Ranking>;
    for a in 0..n {
        for b in a + 1..n {
            for c in b + 1..n {
                for d in c + 1..n {
                    for e in d + 1..n {
                        let score = five([cards[a], cards[b], cards[c], cards[d], cards[e]]);
                        best = Some(best.map_or(score, |b| b.max(score)));
                    }
                }
            }
        }
    }
    best.unwrap()
}

fn rank(value: u8) -> Rank {
    Rank::try_from(value).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::deck::Deck;
    use crate::cards::evaluator::Evaluator;
    use crate::cards::hand::Hand;
    use crate::cards::suit::Suit;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn agree(cards: &[Card]) {
        let strength = Evaluator::classify(cards).unwrap();
        assert_eq!(strength.ranking(), best(cards), "{}", Hand::from(cards));
        // the chosen cards come from the input and score the same on their own
        assert!(strength.cards().iter().all(|c| cards.contains(c)));
        assert_eq!(five(strength.cards()), strength.ranking());
    }

    #[test]
    fn oracle_categories() {
        let parse = |s: &str| <[Card; 5]>::try_from(Card::parse(s).unwrap()).unwrap();
        assert_eq!(five(parse("As 2d 3c 4h 5s")), Ranking::Straight(Rank::Five));
        assert_eq!(five(parse("Ts Js Qs Ks As")), Ranking::RoyalFlush);
        assert_eq!(five(parse("9s 9d 9c 4h 4s")), Ranking::FullHouse(Rank::Nine, Rank::Four));
        assert_eq!(five(parse("9s 9d 4c 4h Ks")), Ranking::TwoPair(Rank::Nine, Rank::Four, Rank::King));
    }

    #[test]
    fn random_five_card_hands() {
        let mut rng = SmallRng::seed_from_u64(5);
        for _ in 0..2_000 {
            let cards = Vec::<Card>::from(Deck::new().deal(5, &mut rng).unwrap());
            agree(&cards);
        }
    }

    #[test]
    fn random_six_card_hands() {
        let mut rng = SmallRng::seed_from_u64(6);
        for _ in 0..2_000 {
            let cards = Vec::<Card>::from(Deck::new().deal(6, &mut rng).unwrap());
            agree(&cards);
        }
    }

    #[test]
    fn random_seven_card_hands() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..5_000 {
            let cards = Vec::<Card>::from(Deck::new().deal(7, &mut rng).unwrap());
            agree(&cards);
            let holdem = Evaluator::holdem(&cards[..2], &cards[2..]).unwrap();
            assert_eq!(holdem.ranking(), Evaluator::classify(&cards).unwrap().ranking());
        }
    }

    #[test]
    fn flush_heavy_hands() {
        // suit-constrained deals hit the flush branch far more often
        let mut rng = SmallRng::seed_from_u64(8);
        let hearts = Hand::full()
            .filter(|c| c.rank() >= Rank::Eight || c.suit() == Suit::H)
            .collect::<Hand>();
        for _ in 0..2_000 {
            let mut deck = Deck::from(hearts);
            let cards = Vec::<Card>::from(deck.deal(7, &mut rng).unwrap());
            agree(&cards);
        }
    }
}
