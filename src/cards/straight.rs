use super::card::Card;
use super::rank::Rank;

/// Five cards of consecutive rank, highest first.
///
/// For the wheel the Ace plays low: cards are 5-4-3-2-A and the high rank is Five.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Straight {
    cards: [Card; 5],
}

impl Straight {
    pub fn cards(&self) -> [Card; 5] {
        self.cards
    }
    pub fn high(&self) -> Rank {
        self.cards[0].rank()
    }
    /// Lowest rank of the run. Ten means the run is broadway.
    pub fn low(&self) -> Rank {
        self.cards[4].rank()
    }

    /// Finds the highest five-card run in cards sorted descending by rank.
    ///
    /// Single pass: a card one rank below the run's tail extends it, a card
    /// of the same rank is skipped, anything lower restarts the run. The scan
    /// visits higher ranks first, so the first run to reach five is the best.
    /// If the scan ends on a four-card run down to Two and an Ace was seen,
    /// that Ace completes the wheel.
    pub fn detect(sorted: &[Card]) -> Option<Self> {
        debug_assert!(sorted.windows(2).all(|w| w[0].rank() >= w[1].rank()));
        let (first, rest) = sorted.split_first()?;
        let mut run = [*first; 5];
        let mut len = 1;
        for card in rest {
            let tail = run[len - 1].rank().value();
            let rank = card.rank().value();
            if rank + 1 == tail {
                run[len] = *card;
                len += 1;
                if len == 5 {
                    return Some(Self { cards: run });
                }
            } else if rank != tail {
                run[0] = *card;
                len = 1;
            }
        }
        if len == 4 && run[3].rank() == Rank::Two {
            let ace = sorted.iter().find(|c| c.rank() == Rank::Ace)?;
            run[4] = *ace;
            return Some(Self { cards: run });
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detect(s: &str) -> Option<Straight> {
        let mut cards = Card::parse(s).unwrap();
        Card::sort_desc(&mut cards);
        Straight::detect(&cards)
    }

    #[test]
    fn plain_straight() {
        let straight = detect("4h 3d 5c 6d 7s 3c Jc").unwrap();
        assert_eq!(straight.high(), Rank::Seven);
        assert_eq!(straight.low(), Rank::Three);
    }

    #[test]
    fn highest_of_overlapping_runs() {
        let straight = detect("4h 5d 6c 7d 8s 9c Td").unwrap();
        assert_eq!(straight.high(), Rank::Ten);
        assert_eq!(straight.cards().map(|c| c.rank().value()), [10, 9, 8, 7, 6]);
    }

    #[test]
    fn duplicates_do_not_break_runs() {
        let straight = detect("9h 9d 8c 8s 7d 6c 5h").unwrap();
        assert_eq!(straight.high(), Rank::Nine);
    }

    #[test]
    fn broken_runs() {
        assert!(detect("Ah Kd Qc Js 9d 8c 7h").is_none());
        assert!(detect("2h 3d 4c 6s 7d 8c Kh").is_none());
    }

    #[test]
    fn wheel() {
        let straight = detect("Ah 3d 2c 4d 5s 3c Jc").unwrap();
        assert_eq!(straight.high(), Rank::Five);
        assert_eq!(straight.cards()[4], Card::try_from("Ah").unwrap());
    }

    #[test]
    fn six_high_beats_wheel() {
        let straight = detect("Ah 2d 3c 4d 5s 6c").unwrap();
        assert_eq!(straight.high(), Rank::Six);
    }

    #[test]
    fn four_to_the_wheel_without_ace() {
        assert!(detect("Kh 2d 3c 4d 5s 9c").is_none());
    }

    #[test]
    fn broadway() {
        let straight = detect("Kh Ah 5c 6s Qh Jh Th").unwrap();
        assert_eq!(straight.high(), Rank::Ace);
        assert_eq!(straight.low(), Rank::Ten);
    }
}
