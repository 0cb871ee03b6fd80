pub mod boards;
pub use boards::*;

pub mod engine;
pub use engine::*;

pub mod histogram;
pub use histogram::*;
