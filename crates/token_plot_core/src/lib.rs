//! Token plot core: pure tokenize-and-summarize pipeline.
mod analysis;
mod random;
mod summary;
mod token;
mod types;

pub use analysis::{analyze, Analysis};
pub use random::{FixedRandom, RandomSource, RANDOM_VALUE_SCALE};
pub use summary::{summarize, SummaryError};
pub use token::{TokenizerKind, Tokenizer, WhitespaceTokenizer, WordTokenizer};
pub use types::{PlotPoint, PlotSpec, Prediction, Summary};
