use log::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::edit_script::{DiffStats, EditScript};
use crate::error::{DiffError, Side};
use crate::lcs::align;
use crate::normalize::{normalize, NormalizeOptions};
use crate::render::{render, RenderedView, ViewMode};

/// Options for a text comparison.
///
/// Doubles as a builder: `TextDiff::configure().ignore_case(true).diff(a, b)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DiffConfig {
    /// Collapse whitespace runs (including line breaks) before comparing
    pub ignore_whitespace: bool,

    /// Compare case-insensitively
    pub ignore_case: bool,

    /// Rendering produced in [`DiffResult::rendered`]
    pub view: ViewMode,

    /// Reject inputs with more lines than this on either side
    pub max_lines: Option<usize>,
}

impl DiffConfig {
    pub fn ignore_whitespace(mut self, ignore: bool) -> Self {
        self.ignore_whitespace = ignore;
        self
    }

    pub fn ignore_case(mut self, ignore: bool) -> Self {
        self.ignore_case = ignore;
        self
    }

    pub fn view(mut self, view: ViewMode) -> Self {
        self.view = view;
        self
    }

    pub fn max_lines(mut self, limit: Option<usize>) -> Self {
        self.max_lines = limit;
        self
    }

    /// The normalization part of this configuration
    pub fn normalize_options(&self) -> NormalizeOptions {
        NormalizeOptions {
            ignore_whitespace: self.ignore_whitespace,
            ignore_case: self.ignore_case,
        }
    }

    /// Compare two texts with this configuration
    pub fn diff(&self, left: &str, right: &str) -> Result<DiffResult, DiffError> {
        diff(left, right, self)
    }
}

/// The outcome of comparing two texts
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DiffResult {
    pub stats: DiffStats,

    /// True when no line was added or removed
    pub identical: bool,

    /// The script rendered in the configured view
    pub rendered: RenderedView,

    /// The line-level edit script over the normalized texts
    pub script: EditScript<String>,
}

impl DiffResult {
    /// Render the script again in another view mode
    pub fn render(&self, view: ViewMode) -> RenderedView {
        render(&self.script, view)
    }
}

/// Split text into line tokens on `'\n'`.
///
/// Empty text yields one empty token, and a trailing newline yields a trailing
/// empty token, so joining the tokens with `'\n'` gives back the input.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split('\n').map(str::to_owned).collect()
}

/// Compare two texts line by line.
///
/// Both texts are normalized according to `config`, split into lines, aligned
/// and rendered in `config.view`.
pub fn diff(left: &str, right: &str, config: &DiffConfig) -> Result<DiffResult, DiffError> {
    let options = config.normalize_options();
    let left_lines = tokenize(&normalize(left, &options));
    let right_lines = tokenize(&normalize(right, &options));

    if let Some(limit) = config.max_lines {
        check_size(Side::Left, left_lines.len(), limit)?;
        check_size(Side::Right, right_lines.len(), limit)?;
    }

    let script = align(&left_lines, &right_lines);
    let stats = script.stats();
    debug!(
        "Diff finished: +{} -{} ={}",
        stats.added, stats.removed, stats.unchanged
    );

    Ok(DiffResult {
        stats,
        identical: stats.is_identical(),
        rendered: render(&script, config.view),
        script,
    })
}

fn check_size(side: Side, lines: usize, limit: usize) -> Result<(), DiffError> {
    if lines > limit {
        debug!("Rejecting {} input: {} lines over limit {}", side, lines, limit);
        return Err(DiffError::InputTooLarge { side, lines, limit });
    }
    Ok(())
}

/// Entry points for text diffs
pub struct TextDiff;

impl TextDiff {
    /// Start a configuration with every option at its default
    pub fn configure() -> DiffConfig {
        DiffConfig::default()
    }

    /// Create a diff between two texts with the default configuration
    pub fn diff(old_text: &str, new_text: &str) -> Result<DiffResult, DiffError> {
        diff(old_text, new_text, &DiffConfig::default())
    }

    /// Compare the texts in reverse order, treating `new_text` as the left side
    pub fn swap(
        old_text: &str,
        new_text: &str,
        config: &DiffConfig,
    ) -> Result<DiffResult, DiffError> {
        diff(new_text, old_text, config)
    }
}
