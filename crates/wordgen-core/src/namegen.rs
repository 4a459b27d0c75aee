//! Streaming name generation from two word pools.
//!
//! A name is 2-3 title-cased words drawn from the noun/verb pools, shuffled,
//! with a random number in [0,256) appended, all concatenated with no
//! separator (e.g. `RunDog42`). Names are produced on a dedicated thread
//! behind a zero-capacity channel: exactly `n` emissions in FIFO order, then
//! the stream closes.

use crate::words::WordPool;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::sync::mpsc::{self, Receiver};
use std::thread;

/// Generated numbers are in `[0, NUMBER_BOUND)`.
pub const NUMBER_BOUND: u16 = 0x100;

/// Name generation failure.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// A pool has no eligible words; drawing from it would be out of range.
    #[error("{0} word pool is empty")]
    EmptyPool(&'static str),
}

/// Finite, non-restartable stream of exactly `n` generated names.
#[derive(Debug)]
pub struct NameStream {
    rx: Receiver<String>,
}

impl Iterator for NameStream {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.rx.recv().ok()
    }
}

/// Generates `n` names with an entropy-seeded RNG.
pub fn generate(n: usize, nouns: WordPool, verbs: WordPool) -> Result<NameStream, GenerateError> {
    generate_with_rng(n, nouns, verbs, StdRng::from_entropy())
}

/// Generates `n` names drawing randomness from `rng`.
///
/// Both pools are validated non-empty up front. The producer suspends after
/// each emitted name until the consumer takes it; dropping the stream early
/// terminates the producer.
pub fn generate_with_rng<R>(
    n: usize,
    nouns: WordPool,
    verbs: WordPool,
    mut rng: R,
) -> Result<NameStream, GenerateError>
where
    R: Rng + Send + 'static,
{
    if nouns.is_empty() {
        return Err(GenerateError::EmptyPool("noun"));
    }
    if verbs.is_empty() {
        return Err(GenerateError::EmptyPool("verb"));
    }

    let (tx, rx) = mpsc::sync_channel(0);
    thread::spawn(move || {
        for _ in 0..n {
            let segment_count = rng.gen_range(2..=3);
            let mut segments: Vec<String> = Vec::with_capacity(segment_count + 1);
            for _ in 0..segment_count {
                let pool = if rng.gen_range(0..2) == 0 { &nouns } else { &verbs };
                segments.push(title_case(pool.choose(&mut rng)));
            }
            segments.shuffle(&mut rng);
            segments.push(rng.gen_range(0..NUMBER_BOUND).to_string());
            if tx.send(segments.concat()).is_err() {
                return;
            }
        }
    });
    Ok(NameStream { rx })
}

/// Uppercases the first character, leaving the rest unchanged.
fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
