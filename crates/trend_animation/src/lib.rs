//! Trend Animation
//!
//! Stroke "auto-draw" animation for Trend paths.
//!
//! # Features
//!
//! - **Easing**: CSS timing functions, parsed from and rendered back to CSS
//! - **Auto-draw**: dash-offset keyframes sized to the rendered path length

pub mod autodraw;
pub mod easing;

pub use autodraw::AutoDraw;
pub use easing::Easing;

use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum AnimationError {
    #[error("unknown easing '{0}'")]
    UnknownEasing(String),

    #[error("invalid cubic-bezier easing '{0}'")]
    InvalidCubicBezier(String),
}
