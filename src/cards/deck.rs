use super::card::Card;
use super::hand::Hand;
use crate::Error;
use rand::Rng;

/// The 52-card deck minus whatever has already been used.
///
/// Wraps a [`Hand`] of the remaining cards. The equity engine takes its
/// pool from here, and Monte Carlo trials draw from a copy of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deck(Hand);

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// Creates a fresh 52-card deck.
    pub fn new() -> Self {
        Self(Hand::full())
    }
    /// A fresh deck with the used cards taken out.
    ///
    /// Fails if the same card is listed twice: a physical card
    /// cannot be dealt to two places.
    pub fn without(used: &[Card]) -> Result<Self, Error> {
        let hand = Hand::from(used);
        if hand.size() != used.len() {
            return Err(Error::InvalidInput(format!(
                "duplicate card among used cards: {}",
                hand
            )));
        }
        Ok(Self(hand.complement()))
    }
    /// Tests whether a card is still in the deck.
    pub fn contains(&self, card: &Card) -> bool {
        self.0.contains(card)
    }
    pub fn remove(&mut self, card: Card) {
        self.0.remove(card);
    }
    pub fn size(&self) -> usize {
        self.0.size()
    }
    /// The remaining cards, ascending.
    pub fn pool(&self) -> Vec<Card> {
        Vec::from(self.0)
    }
    /// Draws and removes a uniformly random card from the deck.
    pub fn draw<R: Rng>(&mut self, rng: &mut R) -> Option<Card> {
        match self.0.size() {
            0 => None,
            n => {
                let i = rng.random_range(0..n);
                let mut remaining = self.0;
                let card = remaining.nth(i)?;
                self.0.remove(card);
                Some(card)
            }
        }
    }
    /// Draws `n` distinct cards as one Hand.
    pub fn deal<R: Rng>(&mut self, n: usize, rng: &mut R) -> Option<Hand> {
        (0..n)
            .map(|_| self.draw(rng).map(Hand::from))
            .try_fold(Hand::empty(), |acc, card| card.map(|c| Hand::add(acc, c)))
    }
}

impl From<Deck> for Hand {
    fn from(deck: Deck) -> Self {
        deck.0
    }
}
impl From<Hand> for Deck {
    fn from(hand: Hand) -> Self {
        Self(hand)
    }
}
