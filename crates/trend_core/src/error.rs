use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum TrendError {
    #[error("corner radius must be finite and non-negative (got {0})")]
    InvalidRadius(f32),

    #[error("value at index {index} is not finite ({value})")]
    NonFiniteValue { index: usize, value: f32 },

    #[error("path syntax error at byte {offset}: {message}")]
    PathSyntax { offset: usize, message: String },
}
