pub mod card;
pub use card::*;

pub mod category;
pub use category::*;

pub mod deck;
pub use deck::*;

pub mod distribution;
pub use distribution::*;

pub mod evaluator;
pub use evaluator::*;

pub mod hand;
pub use hand::*;

pub mod kicks;
pub use kicks::*;

pub mod rank;
pub use rank::*;

pub mod ranking;
pub use ranking::*;

pub mod showdown;
pub use showdown::*;

pub mod straight;
pub use straight::*;

pub mod strength;
pub use strength::*;

pub mod suit;
pub use suit::*;

#[cfg(test)]
mod oracle;
