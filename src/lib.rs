pub mod cards;
pub mod equity;

mod error;
pub use error::Error;

pub type Probability = f32;

// ============================================================================
// CARD COUNTS
// ============================================================================
/// Community cards on a complete board.
pub const BOARD_SIZE: usize = 5;
/// Private cards per player.
pub const HOLE_SIZE: usize = 2;
/// Cards in a poker hand.
pub const HAND_SIZE: usize = 5;
/// Fewest cards the classifier accepts.
pub const MIN_CARDS: usize = HAND_SIZE;
/// Most cards the classifier accepts: hole cards plus a full board.
pub const MAX_CARDS: usize = HOLE_SIZE + BOARD_SIZE;

// ============================================================================
// SAMPLING
// ============================================================================
/// Monte Carlo trials when none are requested explicitly.
pub const DEFAULT_SAMPLES: usize = 100_000;
/// Trials per parallel task. Each task owns one rng.
pub const SAMPLING_BATCH: usize = 4_096;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging at the given level, plus an optional
/// file logger that always records DEBUG.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter, file: Option<&std::path::Path>) -> std::io::Result<()> {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let term = simplelog::TermLogger::new(
        level,
        config.clone(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
    let mut loggers: Vec<Box<dyn simplelog::SharedLogger>> = vec![term];
    if let Some(path) = file {
        let file = simplelog::WriteLogger::new(
            log::LevelFilter::Debug,
            config.clone(),
            std::fs::File::create(path)?,
        );
        loggers.push(file);
    }
    simplelog::CombinedLogger::init(loggers).map_err(std::io::Error::other)
}
