//! Streaming word tokens out of a dictionary exception file.
//!
//! Each file is scanned by a dedicated producer thread that hands tokens to
//! the consumer one at a time through a zero-capacity channel: the producer
//! blocks at every emitted token until the consumer takes it, so memory stays
//! bounded no matter how large the dictionary is.

use rand::Rng;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::mpsc::{self, Receiver};
use std::thread;

/// Tokens of this length or longer are dropped; short words combine into
/// pronounceable names, long ones don't.
pub const MAX_WORD_LEN: usize = 8;

/// Characters trimmed from both ends of each line before splitting.
const LINE_TRIM: [char; 3] = ['_', '-', '\''];

/// Finite, non-restartable stream of dictionary tokens in file order.
pub struct WordStream {
    rx: Receiver<String>,
}

impl Iterator for WordStream {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        // Producer side closed means the stream is exhausted (or was aborted).
        self.rx.recv().ok()
    }
}

/// Opens `path` and lazily yields its eligible tokens.
///
/// If the file cannot be opened or read, the failure is logged and the stream
/// simply closes with zero elements; callers observe an empty pool rather
/// than an error.
pub fn stream(path: &Path) -> WordStream {
    let (tx, rx) = mpsc::sync_channel(0);
    let path = path.to_path_buf();
    thread::spawn(move || {
        let file = match File::open(&path) {
            Ok(f) => f,
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "failed to open dictionary file");
                return;
            }
        };
        let reader = BufReader::new(file);
        for line in reader.lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    tracing::error!(path = %path.display(), error = %e, "failed to read dictionary file");
                    return;
                }
            };
            for token in line.trim_matches(LINE_TRIM.as_slice()).split(' ') {
                if token.is_empty() || token.len() >= MAX_WORD_LEN {
                    continue;
                }
                if tx.send(token.to_string()).is_err() {
                    // Consumer went away; stop scanning.
                    return;
                }
            }
        }
    });
    WordStream { rx }
}

/// Immutable ordered pool of eligible tokens from one dictionary file.
///
/// Built once at startup by draining a `WordStream`; read-only afterwards and
/// safe to share across threads.
#[derive(Debug, Clone)]
pub struct WordPool {
    words: Vec<String>,
}

impl WordPool {
    /// Drains `stream(path)` into a pool.
    pub fn load(path: &Path) -> Self {
        let words: Vec<String> = stream(path).collect();
        tracing::debug!(path = %path.display(), count = words.len(), "word pool loaded");
        Self { words }
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Uniform draw. Panics if the pool is empty; callers must validate
    /// non-emptiness first (the generator constructor does).
    pub fn choose<R: Rng>(&self, rng: &mut R) -> &str {
        &self.words[rng.gen_range(0..self.words.len())]
    }
}
