use thiserror::Error;
use trend_core::TrendError;

#[derive(Debug, Error, PartialEq)]
pub enum ChartError {
    #[error(transparent)]
    Core(#[from] TrendError),

    #[error("range highlight [{start}, {end}] is outside a dataset of {len} points")]
    RangeOutOfBounds { start: usize, end: usize, len: usize },
}
