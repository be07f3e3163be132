use zeroize::Zeroizing;

use crate::pool::WordPool;
use crate::random::{DefaultRandom, RandomSource};

/// Separator placed between the words of a finished passphrase.
pub const DELIMITER: &str = "-";

/// Draws words from an immutable pool using an injected random source.
///
/// A generator owns its pool and its source; no other state changes
/// across calls, so repeated generation is cheap.
pub struct Generator<R: RandomSource> {
    pool: WordPool,
    random: R,
}

impl<R: RandomSource> Generator<R> {
    /// Builds a generator over `pool` drawing indices from `random`.
    ///
    /// The source is required here and is never defaulted; use
    /// [`Generator::with_default_random`] to opt into the process-wide
    /// default instead.
    pub fn new(pool: WordPool, random: R) -> Self {
        Self { pool, random }
    }

    /// Generates a passphrase of `count` words joined by [`DELIMITER`].
    ///
    /// Words are drawn independently and with replacement, so a word may
    /// repeat within one phrase. A `count` of zero yields the empty
    /// string. Never fails; each call advances the random source.
    ///
    /// ```
    /// use correcthorse::{Generator, SeededRandom, WordPool};
    ///
    /// let pool = WordPool::from_words(["correct", "horse", "battery", "staple"], 3, 9)?;
    /// let mut generator = Generator::new(pool, SeededRandom::new(42));
    /// let phrase = generator.generate(4);
    /// assert_eq!(phrase.split('-').count(), 4);
    /// # Ok::<(), correcthorse::Error>(())
    /// ```
    pub fn generate(&mut self, count: usize) -> Zeroizing<String> {
        let mut components = Vec::with_capacity(count);
        for _ in 0..count {
            let index = self.random.next_index(self.pool.len());
            components.push(self.pool.word(index));
        }

        Zeroizing::new(components.join(DELIMITER))
    }

    /// The pool this generator draws from.
    pub fn pool(&self) -> &WordPool {
        &self.pool
    }
}

impl Generator<DefaultRandom> {
    /// Convenience constructor that deliberately selects the process-wide
    /// default source; equivalent to
    /// `Generator::new(pool, DefaultRandom::new())`.
    pub fn with_default_random(pool: WordPool) -> Self {
        Self::new(pool, DefaultRandom::new())
    }
}
