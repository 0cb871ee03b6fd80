use crate::cards::card::Card;
use crate::cards::hand::Hand;

/// Iterates every k-card subset of a card pool, each exactly once.
///
/// Walks k-bit words over the pool's n indices in increasing order with
/// Gosper's hack, then scatters the set bits onto the pool cards. No
/// combination list is ever materialized, so memory stays constant while
/// enumerating the ~1.5M five-card boards of a 47-card pool.
///
/// Choosing zero cards yields the empty board exactly once.
pub struct Boards {
    next: u64,
    last: u64,
    pool: Vec<Card>,
    done: bool,
}

impl Boards {
    /// C(n, k) without overflow for any pool of at most 52 cards.
    pub fn combinations(n: usize, k: usize) -> usize {
        if k > n {
            0
        } else {
            (0..k).fold(1, |x, i| x * (n - i) / (i + 1))
        }
    }

    fn permute(&self) -> u64 {
        let  x = /* 000_100                       */ self.next;
        let  a = /* 000_111 <- 000_100 || 000_110 */ x | (x - 1);
        let  b = /* 001_000 <-                    */ a + 1;
        let  c = /* 111_000 <-                    */ !   a;
        let  d = /* 001_000 <- 111_000 && 001_000 */ c & b;
        let  e = /* 000_111 <-                    */ d - 1;
        let  f = /*         << xxx                */ 1 + x.trailing_zeros();
        let  g = /* 000_000 <-                    */ e >> f;
        let  h = /* 001_000 <- 001_000 || 000_000 */ b | g;
        h
    }

    fn current(&self) -> Hand {
        let mut bits = self.next;
        let mut hand = Hand::empty();
        while bits != 0 {
            hand.insert(self.pool[bits.trailing_zeros() as usize]);
            bits &= bits - 1;
        }
        hand
    }
}

impl Iterator for Boards {
    type Item = Hand;
    fn next(&mut self) -> Option<Self::Item> {
        if self.done || self.next >= self.last {
            None
        } else {
            let board = self.current();
            match self.next {
                0 => self.done = true,
                _ => self.next = self.permute(),
            }
            Some(board)
        }
    }
}

/// board size and pool are immutable and must be decided at construction
impl From<(usize, Hand)> for Boards {
    fn from((k, pool): (usize, Hand)) -> Self {
        let pool = Vec::<Card>::from(pool);
        debug_assert!(k < 64);
        Self {
            next: (1u64 << k) - 1,
            last: 1u64 << pool.len(),
            pool,
            done: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::deck::Deck;

    fn pool(s: &str) -> Hand {
        Hand::from(Card::parse(s).unwrap().as_slice())
    }

    #[test]
    fn five_choose_three() {
        let boards = Boards::from((3, pool("2c 3c 4c 5c 6c"))).collect::<Vec<Hand>>();
        assert_eq!(boards.len(), 10);
        assert_eq!(boards[0], pool("2c 3c 4c"));
        assert_eq!(boards[1], pool("2c 3c 5c"));
        assert_eq!(boards[9], pool("4c 5c 6c"));
    }

    #[test]
    fn boards_are_distinct() {
        let mut boards = Boards::from((2, pool("As Kd Qh Jc Ts 9d"))).collect::<Vec<Hand>>();
        boards.sort();
        boards.dedup();
        assert_eq!(boards.len(), Boards::combinations(6, 2));
        assert!(boards.iter().all(|b| b.size() == 2));
    }

    #[test]
    fn scattered_pool() {
        let used = Card::parse("As Ks Qs Js Ts").unwrap();
        let pool = Hand::from(Deck::without(&used).unwrap());
        let boards = Boards::from((1, pool)).collect::<Vec<Hand>>();
        assert_eq!(boards.len(), 47);
        assert!(boards.iter().all(|b| !b.overlaps(&Hand::from(used.as_slice()))));
    }

    #[test]
    fn choose_zero() {
        let boards = Boards::from((0, pool("As Kd"))).collect::<Vec<Hand>>();
        assert_eq!(boards, vec![Hand::empty()]);
    }

    #[test]
    fn choose_more_than_pool() {
        assert_eq!(Boards::from((3, pool("As Kd"))).count(), 0);
        assert_eq!(Boards::combinations(2, 3), 0);
    }

    #[test]
    fn choose_all() {
        let boards = Boards::from((4, pool("As Kd Qh Jc"))).collect::<Vec<Hand>>();
        assert_eq!(boards, vec![pool("As Kd Qh Jc")]);
    }

    #[test]
    fn combination_counts() {
        assert_eq!(Boards::combinations(47, 5), 1_533_939);
        assert_eq!(Boards::combinations(48, 5), 1_712_304);
        assert_eq!(Boards::combinations(46, 1), 46);
        assert_eq!(Boards::combinations(10, 0), 1);
        assert_eq!(Boards::from((3, pool("2c 3c 4c 5c 6c 7c 8c"))).count(), 35);
    }
}
