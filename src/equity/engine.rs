use super::boards::Boards;
use super::histogram::Histogram;
use crate::BOARD_SIZE;
use crate::Error;
use crate::HOLE_SIZE;
use crate::SAMPLING_BATCH;
use crate::cards::card::Card;
use crate::cards::category::Category;
use crate::cards::deck::Deck;
use crate::cards::evaluator::Evaluator;
use crate::cards::hand::Hand;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rayon::iter::IntoParallelIterator;
use rayon::iter::ParallelBridge;
use rayon::iter::ParallelIterator;

/// How the missing board cards are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Every k-subset of the pool, once.
    Exhaustive,
    /// This many independent uniform k-subsets of the pool, with replacement
    /// across trials. May exceed the exhaustive count.
    Sampled(usize),
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Mode::Exhaustive => write!(f, "exhaustive"),
            Mode::Sampled(n) => write!(f, "sampled({})", n),
        }
    }
}

/// Category histogram of one starting hand over the boards it can see.
///
/// Holds the two hole cards, whatever part of the board is already known,
/// and the pool the rest of the board is drawn from. All three are
/// validated disjoint at construction, so every board evaluated later
/// is a legal seven-card set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Equity {
    hole: [Card; 2],
    board: Hand,
    pool: Hand,
    seed: Option<u64>,
}

impl Equity {
    /// Hole cards and known board against an explicit pool.
    pub fn new(hole: &[Card], board: &[Card], pool: &[Card]) -> Result<Self, Error> {
        let hole = <[Card; 2]>::try_from(hole).map_err(|_| {
            Error::InvalidInput(format!("expected {} hole cards, got {}", HOLE_SIZE, hole.len()))
        })?;
        if board.len() > BOARD_SIZE {
            return Err(Error::InvalidInput(format!(
                "expected at most {} board cards, got {}",
                BOARD_SIZE,
                board.len()
            )));
        }
        let known = hole.iter().chain(board).copied().collect::<Vec<Card>>();
        if Hand::from(known.as_slice()).size() != known.len() {
            return Err(Error::InvalidInput(format!(
                "duplicate card among hole and board: {}",
                Hand::from(known.as_slice())
            )));
        }
        let pool_hand = Hand::from(pool);
        if pool_hand.size() != pool.len() {
            return Err(Error::InvalidInput(format!("duplicate card in pool: {}", pool_hand)));
        }
        if pool_hand.overlaps(&Hand::from(known.as_slice())) {
            return Err(Error::InvalidInput(format!(
                "pool overlaps hole or board: {}",
                pool_hand
            )));
        }
        let this = Self {
            hole,
            board: Hand::from(board),
            pool: pool_hand,
            seed: None,
        };
        if this.pool.size() < this.missing() {
            return Err(Error::InvalidInput(format!(
                "pool of {} cards cannot complete a board missing {}",
                this.pool.size(),
                this.missing()
            )));
        }
        Ok(this)
    }

    /// Hole cards and known board against the rest of the deck.
    pub fn deal(hole: &[Card], board: &[Card]) -> Result<Self, Error> {
        let used = hole.iter().chain(board).copied().collect::<Vec<Card>>();
        let pool = Deck::without(&used)?.pool();
        Self::new(hole, board, &pool)
    }

    /// Fixes the base seed of sampled runs, making them reproducible.
    pub fn seeded(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn hole(&self) -> [Card; 2] {
        self.hole
    }
    pub fn board(&self) -> Hand {
        self.board
    }
    pub fn pool(&self) -> Hand {
        self.pool
    }
    /// Board cards still to come.
    pub fn missing(&self) -> usize {
        BOARD_SIZE - self.board.size()
    }
    /// Size of the exhaustive enumeration.
    pub fn combinations(&self) -> usize {
        Boards::combinations(self.pool.size(), self.missing())
    }

    pub fn histogram(&self, mode: Mode) -> Result<Histogram, Error> {
        let start = std::time::Instant::now();
        let histogram = match mode {
            Mode::Exhaustive => self.exhaustive(),
            Mode::Sampled(0) => Err(Error::InvalidInput("sampled mode needs at least one trial".into())),
            Mode::Sampled(n) => self.sampled(n),
        }?;
        log::info!(
            "{} histogram of {} boards in {:.2?}",
            mode,
            histogram.mass(),
            start.elapsed()
        );
        Ok(histogram)
    }

    /// Every completion of the board, split across the rayon pool.
    fn exhaustive(&self) -> Result<Histogram, Error> {
        log::debug!("enumerating {} boards", self.combinations());
        Boards::from((self.missing(), self.pool))
            .par_bridge()
            .map(|board| self.showdown(board))
            .try_fold(Histogram::default, Self::folding)
            .try_reduce(Histogram::default, Self::merging)
    }

    /// Independent random completions in fixed-size batches.
    /// Each batch owns an rng seeded from the base seed and its index,
    /// so a seeded run gives the same histogram on any number of threads.
    fn sampled(&self, n: usize) -> Result<Histogram, Error> {
        let seed = self.seed.unwrap_or_else(rand::random);
        let batches = n.div_ceil(SAMPLING_BATCH);
        log::debug!("sampling {} boards in {} batches (seed {})", n, batches, seed);
        (0..batches)
            .into_par_iter()
            .map(|batch| {
                let trials = SAMPLING_BATCH.min(n - batch * SAMPLING_BATCH);
                let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(batch as u64));
                (0..trials)
                    .map(|_| self.sample(&mut rng))
                    .try_fold(Histogram::default(), Self::folding)
            })
            .try_reduce(Histogram::default, Self::merging)
    }

    fn sample(&self, rng: &mut SmallRng) -> Result<Category, Error> {
        let board = Deck::from(self.pool)
            .deal(self.missing(), rng)
            .ok_or_else(|| Error::InvalidInput("pool exhausted while sampling".into()))?;
        self.showdown(board)
    }

    /// Category of the hole cards on the known board plus these cards.
    fn showdown(&self, drawn: Hand) -> Result<Category, Error> {
        let board = Vec::<Card>::from(Hand::add(self.board, drawn));
        Evaluator::holdem(&self.hole, &board).map(|strength| strength.category())
    }

    fn folding(hist: Histogram, category: Result<Category, Error>) -> Result<Histogram, Error> {
        category.map(|c| hist.increment(c))
    }
    fn merging(mut a: Histogram, b: Histogram) -> Result<Histogram, Error> {
        a.absorb(&b);
        Ok(a)
    }
}

/// Histogram of two hole cards over five-card boards drawn from the pool.
pub fn compute_histogram(hole: &[Card], pool: &[Card], mode: Mode) -> Result<Histogram, Error> {
    Equity::new(hole, &[], pool)?.histogram(mode)
}
