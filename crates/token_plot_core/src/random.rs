use rand::Rng;

/// Upper (exclusive) bound of a plot point's random coordinate.
pub const RANDOM_VALUE_SCALE: f64 = 10.0;

/// Source of the z-axis spread. Injected so callers can pin the values.
pub trait RandomSource {
    /// Returns a value in `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn next_unit(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

/// Replays a fixed sequence of unit values, wrapping around at the end.
///
/// Values are reduced modulo 1 so the `[0, 1)` contract holds for any input.
/// An empty sequence always yields `0.0`.
#[derive(Debug, Clone, Default)]
pub struct FixedRandom {
    values: Vec<f64>,
    cursor: usize,
}

impl FixedRandom {
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }
}

impl RandomSource for FixedRandom {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        // rem_euclid rounds tiny negatives up to exactly 1.0
        let unit = value.rem_euclid(1.0);
        if unit >= 1.0 {
            0.0
        } else {
            unit
        }
    }
}
