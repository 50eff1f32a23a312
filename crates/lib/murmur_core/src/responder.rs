//! Canned reply generator.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::ChatError;

/// Picks a reply uniformly at random from a fixed candidate list.
///
/// The random source is a type parameter so tests can seed it.
#[derive(Debug)]
pub struct Responder<R = StdRng> {
    candidates: Vec<String>,
    rng: R,
}

impl<R: Rng> Responder<R> {
    /// Build a responder. An empty candidate list is rejected.
    pub fn new(candidates: Vec<String>, rng: R) -> Result<Self, ChatError> {
        if candidates.is_empty() {
            return Err(ChatError::NoCandidates);
        }
        Ok(Self { candidates, rng })
    }

    /// Draw one candidate. Draws are independent; repeats are allowed.
    pub fn reply(&mut self) -> &str {
        let i = self.rng.random_range(0..self.candidates.len());
        &self.candidates[i]
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }
}

impl Responder<StdRng> {
    /// Build a responder seeded from the operating system.
    pub fn from_os_rng(candidates: Vec<String>) -> Result<Self, ChatError> {
        Self::new(candidates, StdRng::from_os_rng())
    }
}
