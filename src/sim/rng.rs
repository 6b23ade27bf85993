//! Random sign providers
//!
//! The simulation only ever needs a coin flip (serve direction on the
//! vertical axis, tie-break for a dead-center paddle hit), so randomness is
//! injected as a `±1` source. Production seeds a PCG; tests script it.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Source of `+1` / `-1` values
pub trait SignSource {
    fn next_sign(&mut self) -> i32;
}

/// Seeded PCG coin flips
#[derive(Debug, Clone)]
pub struct PcgSigns {
    seed: u64,
    rng: Pcg32,
}

impl PcgSigns {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl SignSource for PcgSigns {
    fn next_sign(&mut self) -> i32 {
        if self.rng.random_bool(0.5) { 1 } else { -1 }
    }
}

/// Replays a fixed sequence of signs, cycling when exhausted
#[derive(Debug, Clone)]
pub struct ScriptedSigns {
    signs: Vec<i32>,
    cursor: usize,
}

impl ScriptedSigns {
    /// Non-positive entries become `-1`, positive ones `+1`. An empty script yields `+1`.
    pub fn new(signs: impl IntoIterator<Item = i32>) -> Self {
        Self {
            signs: signs
                .into_iter()
                .map(|s| if s > 0 { 1 } else { -1 })
                .collect(),
            cursor: 0,
        }
    }

    /// Number of signs handed out so far
    pub fn drawn(&self) -> usize {
        self.cursor
    }
}

impl SignSource for ScriptedSigns {
    fn next_sign(&mut self) -> i32 {
        if self.signs.is_empty() {
            self.cursor += 1;
            return 1;
        }
        let sign = self.signs[self.cursor % self.signs.len()];
        self.cursor += 1;
        sign
    }
}
