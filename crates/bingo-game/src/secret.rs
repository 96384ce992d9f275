//! The hidden number and its comparison.

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Outcome of comparing a guess against the secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    TooBig,
    TooSmall,
    Exact,
}

impl Verdict {
    /// The reply the user gives for this outcome.
    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::TooBig => "Too big!",
            Verdict::TooSmall => "Too small!",
            Verdict::Exact => "Bingo!",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A secret drawn uniformly from `[0, max]`.
#[derive(Debug)]
pub struct GuessState {
    secret: u32,
    max: u32,
    rng: StdRng,
}

impl GuessState {
    /// Create a state seeded from OS entropy, with a fresh secret.
    pub fn new(max: u32) -> Self {
        Self::with_rng(max, StdRng::from_entropy())
    }

    /// Create a state whose secrets are reproducible for a given seed.
    pub fn seeded(max: u32, seed: u64) -> Self {
        Self::with_rng(max, StdRng::seed_from_u64(seed))
    }

    fn with_rng(max: u32, rng: StdRng) -> Self {
        let mut state = Self { secret: 0, max, rng };
        state.reset();
        state
    }

    /// Draw a new secret and return it.
    pub fn reset(&mut self) -> u32 {
        self.secret = self.rng.gen_range(0..=self.max);
        self.secret
    }

    pub fn guess(&self, n: i64) -> Verdict {
        let secret = i64::from(self.secret);
        if n > secret {
            Verdict::TooBig
        } else if n < secret {
            Verdict::TooSmall
        } else {
            Verdict::Exact
        }
    }

    pub fn secret(&self) -> u32 {
        self.secret
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    #[cfg(test)]
    pub(crate) fn set_secret(&mut self, secret: u32) {
        self.secret = secret;
    }
}
