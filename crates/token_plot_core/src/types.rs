use std::fmt;

use serde::Serialize;

/// One token placed in plot space.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotPoint {
    /// 0-based position of the token in the sentence.
    pub index: usize,
    /// Character count of the token.
    pub length: usize,
    /// Visual spread only, in `[0, 10)`.
    pub random_value: f64,
    pub label: String,
}

/// Mean token length of a non-empty sentence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Prediction {
    pub mean: f64,
}

impl Prediction {
    /// The mean rounded half away from zero to two decimal places.
    pub fn rounded(&self) -> f64 {
        (self.mean * 100.0).round() / 100.0
    }
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.rounded())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub points: Vec<PlotPoint>,
    pub prediction: Prediction,
}

impl Summary {
    pub fn plot_spec(&self) -> PlotSpec {
        PlotSpec {
            x: self.points.iter().map(|p| p.index).collect(),
            y: self.points.iter().map(|p| p.length).collect(),
            z: self.points.iter().map(|p| p.random_value).collect(),
            text: self.points.iter().map(|p| p.label.clone()).collect(),
        }
    }
}

/// Parallel arrays for a client-side 3D scatter trace.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotSpec {
    pub x: Vec<usize>,
    pub y: Vec<usize>,
    pub z: Vec<f64>,
    pub text: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::Prediction;

    #[test]
    fn prediction_displays_two_decimals() {
        assert_eq!(Prediction { mean: 11.0 / 3.0 }.to_string(), "3.67");
        assert_eq!(Prediction { mean: 2.0 }.to_string(), "2.00");
        assert_eq!(Prediction { mean: 4.125 }.to_string(), "4.13");
    }

    #[test]
    fn rounded_keeps_two_decimals() {
        assert_eq!(Prediction { mean: 11.0 / 3.0 }.rounded(), 3.67);
        assert_eq!(Prediction { mean: 4.5 }.rounded(), 4.5);
    }
}
