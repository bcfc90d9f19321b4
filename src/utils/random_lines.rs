use crate::error::{ChoiceError, Result};
use crate::prefs::StudentLine;
use crate::utils::permutation::RandomPermutation;
use rand::Rng;
use std::io::Write;
use std::num::NonZeroUsize;
use tracing::debug;

/// Parses the student count given on the command line.
pub fn parse_count(value: &str) -> Result<NonZeroUsize> {
    let parsed: i128 = value
        .trim()
        .parse()
        .map_err(|_| ChoiceError::InvalidArgument(format!("{value:?} is not an integer")))?;

    usize::try_from(parsed)
        .ok()
        .and_then(NonZeroUsize::new)
        .ok_or_else(|| {
            ChoiceError::InvalidArgument(format!("count must be a positive integer, got {parsed}"))
        })
}

/// Student `index` picks a random number of distinct identifiers from `1..=n`,
/// in random order. The shuffle happens before the length is drawn.
pub fn generate_line(index: usize, n: usize, rng: &mut impl Rng) -> StudentLine {
    let permutation = RandomPermutation::generate(n, rng);
    let len = rng.random_range(0..=n);
    StudentLine::new(index, permutation.truncated(len))
}

/// Yields `Student 1` through `Student n`, drawing from an owned RNG.
pub struct Generator<R: Rng> {
    n: usize,
    next: usize,
    rng: R,
}

impl<R: Rng> Generator<R> {
    pub fn new(n: NonZeroUsize, rng: R) -> Self {
        Generator {
            n: n.get(),
            next: 1,
            rng,
        }
    }
}

impl<R: Rng> Iterator for Generator<R> {
    type Item = StudentLine;

    fn next(&mut self) -> Option<StudentLine> {
        if self.next > self.n {
            return None;
        }
        let line = generate_line(self.next, self.n, &mut self.rng);
        self.next += 1;
        Some(line)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.n + 1).saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl<R: Rng> ExactSizeIterator for Generator<R> {}

/// Writes every line followed by `\n`, then flushes. Returns the number of
/// lines written.
pub fn write_lines<W: Write>(writer: &mut W, n: NonZeroUsize, rng: impl Rng) -> Result<usize> {
    debug!(n = n.get(), "generating student lines");
    let mut written = 0usize;
    for line in Generator::new(n, rng) {
        writeln!(writer, "{line}")?;
        written += 1;
    }
    writer.flush()?;
    Ok(written)
}
