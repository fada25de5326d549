// Core diff library for line-diff
// This crate computes line-level edit scripts between two texts and renders them

mod edit_script;
mod error;
mod lcs;
mod normalize;
mod render;
mod text_diff;

pub use edit_script::{DiffStats, EditKind, EditOp, EditScript};
pub use error::{DiffError, ParseViewModeError, Side};
pub use lcs::align;
pub use normalize::{normalize, NormalizeOptions};
pub use render::{
    escape_html, render, RenderedView, SplitCell, SplitView, UnifiedRow, UnifiedView, ViewMode,
};
pub use text_diff::{diff, tokenize, DiffConfig, DiffResult, TextDiff};
