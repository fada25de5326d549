use std::fmt;
use std::str::FromStr;

use derive_more::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::edit_script::{EditKind, EditOp, EditScript};
use crate::error::ParseViewModeError;

/// How an edit script is presented
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ViewMode {
    /// A single column of added, removed and unchanged lines
    #[default]
    #[display(fmt = "unified")]
    Unified,

    /// Left and right texts side by side
    #[display(fmt = "split")]
    Split,
}

impl FromStr for ViewMode {
    type Err = ParseViewModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unified" => Ok(ViewMode::Unified),
            "split" => Ok(ViewMode::Split),
            _ => Err(ParseViewModeError(s.to_string())),
        }
    }
}

/// A row of the unified view
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UnifiedRow {
    pub kind: EditKind,

    /// Right-side line number for added and unchanged rows, left-side for
    /// removed rows (1-based)
    pub line_number: usize,

    pub content: String,
}

impl UnifiedRow {
    /// The `+`, `-` or space marker of this row
    pub fn prefix(&self) -> char {
        self.kind.prefix()
    }

    /// Plain-text form of the row with the line number right-aligned to
    /// `number_width` columns
    pub fn to_text(&self, number_width: usize) -> String {
        format!(
            "{:>width$} {}{}",
            self.line_number,
            self.prefix(),
            self.content,
            width = number_width
        )
    }

    fn write_html(&self, out: &mut String) {
        out.push_str(&format!(
            r#"<div class="diff-line {}"><span class="line-number">{}</span><span class="prefix">{}</span>{}</div>"#,
            self.kind,
            self.line_number,
            self.prefix(),
            escape_html(&self.content)
        ));
    }
}

/// Single-column rendering of an edit script
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UnifiedView {
    pub rows: Vec<UnifiedRow>,
}

impl UnifiedView {
    /// Build the unified rows, one per operation
    pub fn from_script<T: AsRef<str>>(script: &EditScript<T>) -> Self {
        let rows = script
            .iter()
            .map(|op| {
                let line_number = match op {
                    EditOp::Removed { left_index, .. } => left_index + 1,
                    EditOp::Added { right_index, .. } | EditOp::Unchanged { right_index, .. } => {
                        right_index + 1
                    }
                };

                UnifiedRow {
                    kind: op.kind(),
                    line_number,
                    content: op.content().as_ref().to_owned(),
                }
            })
            .collect();

        Self { rows }
    }

    /// Columns needed for the widest line number
    pub fn number_width(&self) -> usize {
        self.rows
            .iter()
            .map(|row| digits(row.line_number))
            .max()
            .unwrap_or(1)
    }

    /// HTML markup with one `diff-line` element per row
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for row in &self.rows {
            row.write_html(&mut out);
        }
        out
    }
}

impl fmt::Display for UnifiedView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.number_width();
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", row.to_text(width))?;
        }
        Ok(())
    }
}

/// One cell of a split view column
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "lowercase"))]
pub enum SplitCell {
    /// A line of this side's text
    Line {
        kind: EditKind,
        line_number: usize,
        content: String,
    },

    /// Blank filler opposite a line that only exists on the other side
    Placeholder,
}

impl SplitCell {
    fn line(kind: EditKind, index: usize, content: &str) -> Self {
        SplitCell::Line {
            kind,
            line_number: index + 1,
            content: content.to_owned(),
        }
    }

    /// The kind of the line in this cell, `None` for placeholders
    pub fn kind(&self) -> Option<EditKind> {
        match self {
            SplitCell::Line { kind, .. } => Some(*kind),
            SplitCell::Placeholder => None,
        }
    }

    pub fn line_number(&self) -> Option<usize> {
        match self {
            SplitCell::Line { line_number, .. } => Some(*line_number),
            SplitCell::Placeholder => None,
        }
    }

    pub fn content(&self) -> &str {
        match self {
            SplitCell::Line { content, .. } => content,
            SplitCell::Placeholder => "",
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, SplitCell::Placeholder)
    }

    /// Plain-text form of the cell, padded to `number_width` and
    /// `content_width` columns
    pub fn to_text(&self, number_width: usize, content_width: usize) -> String {
        let number = self
            .line_number()
            .map(|n| n.to_string())
            .unwrap_or_default();
        let content = self.content();
        let padding = content_width.saturating_sub(content.chars().count());

        format!(
            "{:>width$} {}{}",
            number,
            content,
            " ".repeat(padding),
            width = number_width
        )
    }

    fn write_html(&self, out: &mut String) {
        match self {
            SplitCell::Line {
                kind,
                line_number,
                content,
            } => out.push_str(&format!(
                r#"<div class="diff-line {}"><span class="line-number">{}</span>{}</div>"#,
                kind,
                line_number,
                escape_html(content)
            )),
            SplitCell::Placeholder => out.push_str(
                r#"<div class="diff-line" style="opacity: 0.3;"><span class="line-number"></span></div>"#,
            ),
        }
    }
}

/// Two-column rendering of an edit script.
///
/// Both columns always have one cell per operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SplitView {
    pub left: Vec<SplitCell>,
    pub right: Vec<SplitCell>,
}

impl SplitView {
    /// Build both columns from the script
    pub fn from_script<T: AsRef<str>>(script: &EditScript<T>) -> Self {
        let mut left = Vec::with_capacity(script.len());
        let mut right = Vec::with_capacity(script.len());

        for op in script {
            match op {
                EditOp::Unchanged {
                    left_index,
                    right_index,
                    content,
                } => {
                    left.push(SplitCell::line(EditKind::Unchanged, *left_index, content.as_ref()));
                    right.push(SplitCell::line(EditKind::Unchanged, *right_index, content.as_ref()));
                }
                EditOp::Removed {
                    left_index,
                    content,
                } => {
                    left.push(SplitCell::line(EditKind::Removed, *left_index, content.as_ref()));
                    right.push(SplitCell::Placeholder);
                }
                EditOp::Added {
                    right_index,
                    content,
                } => {
                    left.push(SplitCell::Placeholder);
                    right.push(SplitCell::line(EditKind::Added, *right_index, content.as_ref()));
                }
            }
        }

        Self { left, right }
    }

    /// Number of rows, equal for both columns
    pub fn row_count(&self) -> usize {
        self.left.len()
    }

    /// Iterate over `(left, right)` cell pairs
    pub fn rows(&self) -> impl Iterator<Item = (&SplitCell, &SplitCell)> + '_ {
        self.left.iter().zip(self.right.iter())
    }

    /// Columns needed for the widest line number on either side
    pub fn number_width(&self) -> usize {
        self.left
            .iter()
            .chain(self.right.iter())
            .filter_map(SplitCell::line_number)
            .map(digits)
            .max()
            .unwrap_or(1)
    }

    /// Columns needed for the widest left-hand content
    pub fn left_content_width(&self) -> usize {
        self.left
            .iter()
            .map(|cell| cell.content().chars().count())
            .max()
            .unwrap_or(0)
    }

    /// HTML markup with one `split-panel` element per column
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for column in [&self.left, &self.right] {
            out.push_str(r#"<div class="split-panel">"#);
            for cell in column {
                cell.write_html(&mut out);
            }
            out.push_str("</div>");
        }
        out
    }
}

impl fmt::Display for SplitView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let number_width = self.number_width();
        let content_width = self.left_content_width();

        for (i, (left, right)) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let line = format!(
                "{} | {}",
                left.to_text(number_width, content_width),
                right.to_text(number_width, 0)
            );
            write!(f, "{}", line.trim_end())?;
        }
        Ok(())
    }
}

/// An edit script rendered in one of the view modes
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "view", rename_all = "lowercase"))]
pub enum RenderedView {
    Unified(UnifiedView),
    Split(SplitView),
}

impl RenderedView {
    /// The view mode this rendering was produced with
    pub fn view_mode(&self) -> ViewMode {
        match self {
            RenderedView::Unified(_) => ViewMode::Unified,
            RenderedView::Split(_) => ViewMode::Split,
        }
    }

    /// Number of rows in the rendering
    pub fn row_count(&self) -> usize {
        match self {
            RenderedView::Unified(view) => view.rows.len(),
            RenderedView::Split(view) => view.row_count(),
        }
    }

    /// HTML markup for the rendering
    pub fn to_html(&self) -> String {
        match self {
            RenderedView::Unified(view) => view.to_html(),
            RenderedView::Split(view) => view.to_html(),
        }
    }
}

impl fmt::Display for RenderedView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderedView::Unified(view) => fmt::Display::fmt(view, f),
            RenderedView::Split(view) => fmt::Display::fmt(view, f),
        }
    }
}

/// Render an edit script in the given view mode
pub fn render<T: AsRef<str>>(script: &EditScript<T>, view: ViewMode) -> RenderedView {
    match view {
        ViewMode::Unified => RenderedView::Unified(UnifiedView::from_script(script)),
        ViewMode::Split => RenderedView::Split(SplitView::from_script(script)),
    }
}

/// Escape text for inclusion in HTML element content or attributes
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn digits(mut n: usize) -> usize {
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}
