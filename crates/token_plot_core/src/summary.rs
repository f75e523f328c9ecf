use plot_logging::plot_trace;

use crate::random::{RandomSource, RANDOM_VALUE_SCALE};
use crate::types::{PlotPoint, Prediction, Summary};

#[derive(Debug, Clone, Copy, thiserror::Error, PartialEq, Eq)]
pub enum SummaryError {
    #[error("cannot predict length of empty sentence")]
    EmptySentence,
}

/// Places each token in plot space and computes the mean token length.
///
/// One random value is drawn per token, in token order.
pub fn summarize<S: AsRef<str>>(
    tokens: &[S],
    random: &mut dyn RandomSource,
) -> Result<Summary, SummaryError> {
    if tokens.is_empty() {
        return Err(SummaryError::EmptySentence);
    }

    let points: Vec<PlotPoint> = tokens
        .iter()
        .enumerate()
        .map(|(index, token)| {
            let label = token.as_ref();
            PlotPoint {
                index,
                length: label.chars().count(),
                random_value: random.next_unit() * RANDOM_VALUE_SCALE,
                label: label.to_string(),
            }
        })
        .collect();

    let total: usize = points.iter().map(|p| p.length).sum();
    let prediction = Prediction {
        mean: total as f64 / points.len() as f64,
    };
    plot_trace!(
        "summarized {} tokens, total length {}, mean {}",
        points.len(),
        total,
        prediction.mean
    );

    Ok(Summary { points, prediction })
}
