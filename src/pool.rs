// This file is part of correcthorse.
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

use crate::error::{Error, Result};

/// Characters that disqualify a word outright, besides whitespace.
const FORBIDDEN: [char; 4] = ['-', '\'', '"', '#'];

/// An immutable, ordered pool of usable words.
///
/// Built once from raw candidates; every retained word is non-empty,
/// within the byte-length bounds given at construction, and free of
/// forbidden characters. Duplicates are kept, in first-seen order.
#[derive(Clone, Debug)]
pub struct WordPool {
    words: Vec<String>,
}

impl WordPool {
    /// Filters `candidates` into a pool.
    ///
    /// Each candidate is trimmed of surrounding whitespace, then dropped
    /// if it is empty, shorter than `min_length` or longer than
    /// `max_length` (inclusive byte bounds; word lists are expected to be
    /// ASCII), or if it contains `-`, `'`, `"`, `#`, or interior
    /// whitespace. Survivors keep their input order and are not
    /// deduplicated.
    ///
    /// Fails with [`Error::EmptyPool`] when nothing survives.
    ///
    /// ```
    /// use correcthorse::WordPool;
    ///
    /// let pool = WordPool::from_words(["dog", "ill-egal", " cat "], 3, 5)?;
    /// assert_eq!(pool.words(), &["dog", "cat"]);
    /// # Ok::<(), correcthorse::Error>(())
    /// ```
    pub fn from_words<I, S>(candidates: I, min_length: usize, max_length: usize) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<String> = candidates
            .into_iter()
            .filter_map(|candidate| {
                let word = candidate.as_ref().trim();
                is_usable(word, min_length, max_length).then(|| word.to_string())
            })
            .collect();

        if words.is_empty() {
            return Err(Error::EmptyPool);
        }

        Ok(Self { words })
    }

    /// Splits `reader` on line boundaries and filters the lines into a
    /// pool. Read failures surface as [`Error::Io`].
    pub fn from_reader<R: Read>(reader: R, min_length: usize, max_length: usize) -> Result<Self> {
        let candidates: Vec<String> = BufReader::new(reader)
            .lines()
            .collect::<io::Result<_>>()?;
        Self::from_words(candidates, min_length, max_length)
    }

    /// Opens the file at `path` and filters its lines into a pool.
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        min_length: usize,
        max_length: usize,
    ) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(file, min_length, max_length)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The word at `index`; panics when `index >= self.len()`.
    pub fn word(&self, index: usize) -> &str {
        &self.words[index]
    }

    /// All pooled words, in acceptance order.
    pub fn words(&self) -> &[String] {
        &self.words
    }
}

fn is_usable(word: &str, min_length: usize, max_length: usize) -> bool {
    !word.is_empty()
        && word.len() >= min_length
        && word.len() <= max_length
        && !word
            .chars()
            .any(|c| c.is_whitespace() || FORBIDDEN.contains(&c))
}
