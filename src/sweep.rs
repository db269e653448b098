//! Differential sweep: run the classifier over a range of bit patterns and
//! collect every input where a reference oracle answers differently.

use std::fmt;

use either::Either;
use log::{debug, info, warn};
use rayon::prelude::*;

use crate::bits::from_bits;
use crate::classify::{admit, is_whole_integer};
use crate::disagreement::Disagreement;
use crate::oracle::disagreements;

const DEFAULT_PROGRESS_STEP: u32 = 0x0FFF_FFFF;
const PARTS_PER_THREAD: usize = 4;

/// An input on which at least one oracle disagreed with the classifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Mismatch {
    pub bits: u32,
    pub whole: bool,
    pub disagreement: Disagreement,
}

impl Mismatch {
    pub fn value(&self) -> f32 {
        from_bits(self.bits)
    }
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "0x{:08x} ({:e}): classifier says {}, {} disagree",
            self.bits,
            self.value(),
            self.whole,
            self.disagreement
        )
    }
}

/// Inclusive range of bit patterns to check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sweep {
    start: u32,
    end: u32,
    progress_step: u32,
}

impl Sweep {
    pub fn new(start: u32, end: u32) -> Sweep {
        Sweep {
            start: start.min(end),
            end: start.max(end),
            progress_step: DEFAULT_PROGRESS_STEP,
        }
    }

    /// Every one of the 2^32 patterns.
    pub fn full() -> Sweep {
        Sweep::new(0, u32::MAX)
    }

    pub fn with_progress_step(self, step: u32) -> Sweep {
        Sweep {
            progress_step: step.max(1),
            ..self
        }
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    pub fn len(&self) -> u64 {
        self.end as u64 - self.start as u64 + 1
    }

    pub fn run(&self) -> Vec<Mismatch> {
        self.run_with(is_whole_integer)
    }

    /// Sweeps with an arbitrary classifier in place of [`is_whole_integer`].
    pub fn run_with(&self, classify: impl Fn(u32) -> bool) -> Vec<Mismatch> {
        let total = self.len();
        let step = self.progress_step as u64;
        let mut mismatches = Vec::new();
        let mut skipped = 0u64;

        for bits in self.start..=self.end {
            let done = (bits - self.start) as u64;
            if done % step == 0 {
                info!(
                    "0x{:08x}..=0x{:08x}: {}% done",
                    self.start,
                    self.end,
                    done * 100 / total
                );
            }

            let f = from_bits(bits);
            let bits = match admit(f) {
                Either::Left(_) => {
                    skipped += 1;
                    continue;
                }
                Either::Right(bits) => bits,
            };

            let whole = classify(bits);
            let disagreement = disagreements(f, whole);
            if !disagreement.is_none() {
                let mismatch = Mismatch { bits, whole, disagreement };
                warn!("{}", mismatch);
                mismatches.push(mismatch);
            }
        }

        info!(
            "0x{:08x}..=0x{:08x}: done, {} checked, {} skipped, {} mismatches",
            self.start,
            self.end,
            total - skipped,
            skipped,
            mismatches.len()
        );

        mismatches
    }

    /// Splits into at most `parts` contiguous sub-ranges that together
    /// cover this one exactly.
    pub fn partition(&self, parts: usize) -> Vec<Sweep> {
        let len = self.len();
        let parts = (parts.max(1) as u64).min(len);
        let chunk = len / parts + (len % parts != 0) as u64;
        let end = self.end as u64;

        let mut sweeps = Vec::new();
        let mut lo = self.start as u64;
        while lo <= end {
            let hi = (lo + chunk - 1).min(end);
            sweeps.push(Sweep {
                start: lo as u32,
                end: hi as u32,
                progress_step: self.progress_step,
            });
            lo = hi + 1;
        }

        sweeps
    }

    pub fn run_parallel(&self) -> Vec<Mismatch> {
        self.run_parallel_with(is_whole_integer)
    }

    /// Runs the partitions on the rayon pool, each reporting its own
    /// progress. Results come back in pattern order.
    pub fn run_parallel_with<F>(&self, classify: F) -> Vec<Mismatch>
    where
        F: Fn(u32) -> bool + Sync,
    {
        let threads = rayon::current_num_threads();
        let parts = self.partition(threads * PARTS_PER_THREAD);
        debug!(
            "sweeping {} patterns in {} parts on {} threads",
            self.len(),
            parts.len(),
            threads
        );

        parts
            .par_iter()
            .flat_map_iter(|part| part.run_with(&classify))
            .collect()
    }
}
