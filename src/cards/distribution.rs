use super::card::Card;
use super::hand::Hand;
use super::rank::Rank;

/// All the cards of one rank within a card set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Group {
    rank: Rank,
    cards: Hand,
}

impl Group {
    pub fn rank(&self) -> Rank {
        self.rank
    }
    pub fn count(&self) -> usize {
        self.cards.size()
    }
    pub fn cards(&self) -> Hand {
        self.cards
    }
}

/// Rank groups of a card set, ordered by (count desc, rank desc).
///
/// Built once per classification by bucketing the cards by rank, so the
/// best and second-best groups (quads, trips, pairs) are the first two
/// entries and the number of distinct ranks is the length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Distribution(Vec<Group>);

impl Distribution {
    /// The group with the most cards, ties going to the higher rank.
    pub fn best(&self) -> Option<&Group> {
        self.0.first()
    }
    /// The runner-up group under the same ordering.
    pub fn second(&self) -> Option<&Group> {
        self.0.get(1)
    }
    /// Number of distinct ranks. Below five, no straight is possible.
    pub fn distinct(&self) -> usize {
        self.0.len()
    }
    pub fn groups(&self) -> impl Iterator<Item = &Group> {
        self.0.iter()
    }
}

/// the input does not need to be sorted
impl From<&[Card]> for Distribution {
    fn from(cards: &[Card]) -> Self {
        let mut buckets = [Hand::empty(); 13];
        for card in cards {
            buckets[card.rank().index()].insert(*card);
        }
        let mut groups = Rank::all()
            .into_iter()
            .rev()
            .zip(buckets.into_iter().rev())
            .filter(|(_, cards)| cards.size() > 0)
            .map(|(rank, cards)| Group { rank, cards })
            .collect::<Vec<Group>>();
        // stable, so equal counts stay in descending rank order
        groups.sort_by(|a, b| b.count().cmp(&a.count()));
        Self(groups)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn distribution(s: &str) -> Distribution {
        Distribution::from(Card::parse(s).unwrap().as_slice())
    }

    #[test]
    fn full_house_groups() {
        let d = distribution("8h 8d 8c Td 2s 2c Jc");
        assert_eq!(d.best().map(|g| (g.rank(), g.count())), Some((Rank::Eight, 3)));
        assert_eq!(d.second().map(|g| (g.rank(), g.count())), Some((Rank::Two, 2)));
        assert_eq!(d.distinct(), 4);
    }

    #[test]
    fn equal_counts_prefer_higher_rank() {
        let d = distribution("4h 7d 7c Td Ts Jc Jd");
        assert_eq!(d.best().map(|g| g.rank()), Some(Rank::Jack));
        assert_eq!(d.second().map(|g| g.rank()), Some(Rank::Ten));
        let ranks = d.groups().map(|g| g.rank()).collect::<Vec<_>>();
        assert_eq!(ranks, vec![Rank::Jack, Rank::Ten, Rank::Seven, Rank::Four]);
    }

    #[test]
    fn singletons_descending() {
        let d = distribution("4h 8d 7c Td 2s 3c Jc");
        assert_eq!(d.distinct(), 7);
        assert_eq!(d.best().map(|g| (g.rank(), g.count())), Some((Rank::Jack, 1)));
        assert_eq!(d.second().map(|g| g.rank()), Some(Rank::Ten));
    }

    #[test]
    fn group_holds_its_cards() {
        let d = distribution("Ah As Kd Ac");
        let best = d.best().copied().unwrap();
        assert_eq!(best.count(), 3);
        assert!(best.cards().all(|c| c.rank() == Rank::Ace));
    }
}
