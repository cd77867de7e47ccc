//! Random bits consumed by the engine.
//!
//! Scan direction (one draw per row per frame), diagonal tie-breaks and
//! fresh particle seeds all come from a single injected source, so a seeded
//! source replays a run exactly.

use rand::{Rng, RngCore};

pub trait RandomSource {
    /// Uniform value in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Fair coin flip.
    fn next_bool(&mut self) -> bool {
        self.next_unit() < 0.5
    }
}

impl<R: RngCore + ?Sized> RandomSource for R {
    fn next_unit(&mut self) -> f64 {
        self.gen::<f64>()
    }

    fn next_bool(&mut self) -> bool {
        self.gen_bool(0.5)
    }
}

/// Replays a fixed list of unit values, cycling when exhausted.
#[cfg(test)]
#[derive(Debug)]
pub(crate) struct ScriptedSource {
    values: Vec<f64>,
    cursor: usize,
}

#[cfg(test)]
impl ScriptedSource {
    pub(crate) fn new(values: &[f64]) -> Self {
        assert!(!values.is_empty(), "script needs at least one value");
        Self {
            values: values.to_vec(),
            cursor: 0,
        }
    }

    /// How many values have been drawn so far.
    pub(crate) fn draws(&self) -> usize {
        self.cursor
    }
}

#[cfg(test)]
impl RandomSource for ScriptedSource {
    fn next_unit(&mut self) -> f64 {
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}
