use super::rank::Rank;
use super::suit::Suit;
use crate::Error;

/// A playing card encoded as a single byte.
///
/// The 52 cards are bijectively mapped to `0..52` where the encoding is
/// `rank_index * 4 + suit`. Equality is identity of the physical card
/// (rank AND suit); hand strength only ever looks at [`Card::rank`],
/// and [`Card::sort_desc`] orders by rank alone.
///
/// # Parsing
///
/// Cards are parsed from a rank token followed by a suit token, like
/// `"As"` (ace of spades), `"Tc"` or `"10c"` (ten of clubs), `"7♥"`.
/// Use [`Card::parse`] for several cards at once.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card(u8);

impl Card {
    /// Extracts the rank component (2 through Ace).
    pub fn rank(&self) -> Rank {
        Rank::all()[(self.0 / 4) as usize]
    }
    /// Extracts the suit component (clubs, diamonds, hearts, spades).
    pub fn suit(&self) -> Suit {
        Suit::all()[(self.0 % 4) as usize]
    }
    /// Stable descending sort by rank only. Cards of equal rank keep
    /// their relative input order, since suit never affects strength.
    pub fn sort_desc(cards: &mut [Card]) {
        cards.sort_by(|a, b| b.rank().cmp(&a.rank()));
    }
    /// Parses a list of cards separated by whitespace or commas.
    ///
    /// Tokens that are not a single card are read as concatenated
    /// two-character cards, so `"AsKd"` and `"As, Kd"` are the same.
    pub fn parse(s: &str) -> Result<Vec<Self>, Error> {
        let mut cards = Vec::new();
        for token in s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
        {
            match Self::try_from(token) {
                Ok(card) => cards.push(card),
                Err(e) => {
                    let chars = token.chars().collect::<Vec<_>>();
                    if chars.len() <= 3 || chars.len() % 2 != 0 {
                        return Err(e);
                    }
                    for pair in chars.chunks(2) {
                        let pair = pair.iter().collect::<String>();
                        cards.push(Self::try_from(pair.as_str())?);
                    }
                }
            }
        }
        Ok(cards)
    }
}

/// (Rank, Suit) isomorphism
impl From<(Rank, Suit)> for Card {
    fn from((r, s): (Rank, Suit)) -> Self {
        Self(r.index() as u8 * 4 + u8::from(s))
    }
}
impl From<Card> for (Rank, Suit) {
    fn from(c: Card) -> Self {
        (c.rank(), c.suit())
    }
}

/// u8 isomorphism
/// each card is mapped to its location in a sorted deck 0..52
/// Ts
/// 35
/// 0b00100011
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c.0
    }
}
impl TryFrom<u8> for Card {
    type Error = Error;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            0..52 => Ok(Self(n)),
            _ => Err(Error::InvalidCard(format!("card byte out of range: {}", n))),
        }
    }
}

/// u64 representation
/// each card is just one bit turned on. this is a one-way morphism
/// Ts
/// xxxxxxxxxxxx 0000000000000000100000000000000000000000000000000000
impl From<Card> for u64 {
    fn from(c: Card) -> u64 {
        1 << u8::from(c)
    }
}

/// str isomorphism
/// the last character is the suit, everything before it the rank
impl TryFrom<&str> for Card {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim();
        match s.char_indices().last() {
            Some((i, _)) if (1..=2).contains(&s[..i].chars().count()) => {
                let rank = Rank::try_from(&s[..i])?;
                let suit = Suit::try_from(&s[i..])?;
                Ok(Card::from((rank, suit)))
            }
            _ => Err(Error::InvalidCard(format!("expected rank and suit: {:?}", s))),
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}
