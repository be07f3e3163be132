pub mod error;
pub mod generator;
pub mod pool;
pub mod random;

pub use error::{Error, Result};
pub use generator::Generator;
pub use pool::WordPool;
pub use random::{DefaultRandom, RandomSource, SeededRandom};
