//! Error type returned by [`crate::diff`].

use derive_more::Display;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which input of a comparison an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Side {
    #[display(fmt = "left")]
    Left,

    #[display(fmt = "right")]
    Right,
}

/// Errors raised while diffing two texts
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiffError {
    /// One input has more lines than the configured ceiling. The comparison
    /// is rejected before any table is allocated.
    #[error("{side} input has {lines} lines, exceeding the limit of {limit}")]
    InputTooLarge {
        side: Side,
        lines: usize,
        limit: usize,
    },
}

/// Error returned when parsing an unknown view mode name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown view mode '{0}', expected 'unified' or 'split'")]
pub struct ParseViewModeError(pub String);
