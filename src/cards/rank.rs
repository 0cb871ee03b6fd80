use crate::Error;

/// Card rank, Two through Ace.
///
/// Discriminants are the numeric rank values (2..=14), so the derived
/// ordering is the ordering used for hand strength. The Ace is always
/// high here; the wheel straight is handled by the straight detector.
#[derive(Debug, Default, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rank {
    #[default]
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    Ace = 14,
}

impl Rank {
    /// All thirteen ranks, ascending.
    pub const fn all() -> [Rank; 13] {
        [
            Rank::Two,
            Rank::Three,
            Rank::Four,
            Rank::Five,
            Rank::Six,
            Rank::Seven,
            Rank::Eight,
            Rank::Nine,
            Rank::Ten,
            Rank::Jack,
            Rank::Queen,
            Rank::King,
            Rank::Ace,
        ]
    }
    /// Numeric value, 2..=14.
    pub const fn value(&self) -> u8 {
        *self as u8
    }
    /// Zero-based position, 0..13. Used for array indexing and card bytes.
    pub const fn index(&self) -> usize {
        *self as usize - 2
    }
}

/// u8 isomorphism over the numeric values 2..=14
impl TryFrom<u8> for Rank {
    type Error = Error;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            2..=14 => Ok(Rank::all()[n as usize - 2]),
            _ => Err(Error::InvalidCard(format!("rank value out of range: {}", n))),
        }
    }
}
impl From<Rank> for u8 {
    fn from(r: Rank) -> u8 {
        r.value()
    }
}

/// str isomorphism
impl TryFrom<&str> for Rank {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_uppercase().as_str() {
            "2" => Ok(Rank::Two),
            "3" => Ok(Rank::Three),
            "4" => Ok(Rank::Four),
            "5" => Ok(Rank::Five),
            "6" => Ok(Rank::Six),
            "7" => Ok(Rank::Seven),
            "8" => Ok(Rank::Eight),
            "9" => Ok(Rank::Nine),
            "T" | "10" => Ok(Rank::Ten),
            "J" => Ok(Rank::Jack),
            "Q" => Ok(Rank::Queen),
            "K" => Ok(Rank::King),
            "A" => Ok(Rank::Ace),
            _ => Err(Error::InvalidCard(format!("invalid rank str: {}", s))),
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Rank::Two => "2",
                Rank::Three => "3",
                Rank::Four => "4",
                Rank::Five => "5",
                Rank::Six => "6",
                Rank::Seven => "7",
                Rank::Eight => "8",
                Rank::Nine => "9",
                Rank::Ten => "T",
                Rank::Jack => "J",
                Rank::Queen => "Q",
                Rank::King => "K",
                Rank::Ace => "A",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        for rank in Rank::all() {
            assert_eq!(rank, Rank::try_from(u8::from(rank)).unwrap());
        }
    }

    #[test]
    fn numeric_values() {
        assert_eq!(Rank::Two.value(), 2);
        assert_eq!(Rank::Ten.value(), 10);
        assert_eq!(Rank::Ace.value(), 14);
        assert_eq!(Rank::Ace.index(), 12);
    }

    #[test]
    fn ordered_by_value() {
        assert!(Rank::Ace > Rank::King);
        assert!(Rank::Three > Rank::Two);
        assert!(Rank::all().windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn out_of_range() {
        assert!(matches!(Rank::try_from(1u8), Err(Error::InvalidCard(_))));
        assert!(matches!(Rank::try_from(15u8), Err(Error::InvalidCard(_))));
        assert!(matches!(Rank::try_from("1"), Err(Error::InvalidCard(_))));
        assert!(matches!(Rank::try_from("X"), Err(Error::InvalidCard(_))));
    }

    #[test]
    fn parse_tokens() {
        assert_eq!(Rank::try_from("t").unwrap(), Rank::Ten);
        assert_eq!(Rank::try_from("10").unwrap(), Rank::Ten);
        assert_eq!(Rank::try_from("a").unwrap(), Rank::Ace);
    }
}
