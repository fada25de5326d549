use derive_more::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The kind of a single edit operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum EditKind {
    /// The line only exists in the right (new) sequence
    #[display(fmt = "added")]
    Added,

    /// The line only exists in the left (old) sequence
    #[display(fmt = "removed")]
    Removed,

    /// The line exists in both sequences
    #[display(fmt = "unchanged")]
    Unchanged,
}

impl EditKind {
    /// The marker printed in front of a line of this kind
    pub fn prefix(self) -> char {
        match self {
            EditKind::Added => '+',
            EditKind::Removed => '-',
            EditKind::Unchanged => ' ',
        }
    }
}

/// One step of an edit script.
///
/// Indices are 0-based positions in the token sequences; use
/// [`EditOp::left_line`] and [`EditOp::right_line`] for 1-based line numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "lowercase"))]
pub enum EditOp<T = String> {
    /// Token present at both positions
    Unchanged {
        left_index: usize,
        right_index: usize,
        content: T,
    },

    /// Token present only in the left sequence
    Removed { left_index: usize, content: T },

    /// Token present only in the right sequence
    Added { right_index: usize, content: T },
}

impl<T> EditOp<T> {
    /// The kind of this operation
    pub fn kind(&self) -> EditKind {
        match self {
            EditOp::Unchanged { .. } => EditKind::Unchanged,
            EditOp::Removed { .. } => EditKind::Removed,
            EditOp::Added { .. } => EditKind::Added,
        }
    }

    /// The token carried by this operation
    pub fn content(&self) -> &T {
        match self {
            EditOp::Unchanged { content, .. }
            | EditOp::Removed { content, .. }
            | EditOp::Added { content, .. } => content,
        }
    }

    /// 0-based index in the left sequence, if the token is present there
    pub fn left_index(&self) -> Option<usize> {
        match *self {
            EditOp::Unchanged { left_index, .. } | EditOp::Removed { left_index, .. } => {
                Some(left_index)
            }
            EditOp::Added { .. } => None,
        }
    }

    /// 0-based index in the right sequence, if the token is present there
    pub fn right_index(&self) -> Option<usize> {
        match *self {
            EditOp::Unchanged { right_index, .. } | EditOp::Added { right_index, .. } => {
                Some(right_index)
            }
            EditOp::Removed { .. } => None,
        }
    }

    /// 1-based line number in the left text
    pub fn left_line(&self) -> Option<usize> {
        self.left_index().map(|i| i + 1)
    }

    /// 1-based line number in the right text
    pub fn right_line(&self) -> Option<usize> {
        self.right_index().map(|i| i + 1)
    }

    /// Check if this operation changes anything
    pub fn is_change(&self) -> bool {
        self.kind() != EditKind::Unchanged
    }
}

/// Summary counts of an edit script
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DiffStats {
    /// Number of added lines
    pub added: usize,

    /// Number of removed lines
    pub removed: usize,

    /// Number of unchanged lines
    pub unchanged: usize,
}

impl DiffStats {
    fn from_ops<T>(ops: &[EditOp<T>]) -> Self {
        ops.iter().fold(Self::default(), |mut stats, op| {
            match op.kind() {
                EditKind::Added => stats.added += 1,
                EditKind::Removed => stats.removed += 1,
                EditKind::Unchanged => stats.unchanged += 1,
            }
            stats
        })
    }

    /// True when nothing was added or removed
    pub fn is_identical(&self) -> bool {
        self.added == 0 && self.removed == 0
    }

    /// Number of added plus removed lines
    pub fn changes(&self) -> usize {
        self.added + self.removed
    }

    /// Total number of operations
    pub fn total(&self) -> usize {
        self.added + self.removed + self.unchanged
    }
}

/// An ordered list of edit operations transforming a left sequence into a
/// right sequence.
///
/// Reading the `Unchanged` and `Removed` operations in order yields the left
/// sequence; reading the `Unchanged` and `Added` operations yields the right
/// one. Scripts are only built by [`crate::align`], which upholds this.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct EditScript<T = String> {
    ops: Vec<EditOp<T>>,
}

impl<T> EditScript<T> {
    pub(crate) fn from_ops(ops: Vec<EditOp<T>>) -> Self {
        Self { ops }
    }

    /// Get the operations
    pub fn ops(&self) -> &[EditOp<T>] {
        &self.ops
    }

    /// Get the number of operations
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Check if the script has no operations
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Iterate over the operations in order
    pub fn iter(&self) -> std::slice::Iter<'_, EditOp<T>> {
        self.ops.iter()
    }

    /// Count the operations by kind
    pub fn stats(&self) -> DiffStats {
        DiffStats::from_ops(&self.ops)
    }

    /// Check if the script contains no additions or removals
    pub fn is_identical(&self) -> bool {
        !self.ops.iter().any(EditOp::is_change)
    }

    /// The left sequence, rebuilt from the script
    pub fn left_lines(&self) -> impl Iterator<Item = &T> + '_ {
        self.ops
            .iter()
            .filter(|op| op.left_index().is_some())
            .map(EditOp::content)
    }

    /// The right sequence, rebuilt from the script
    pub fn right_lines(&self) -> impl Iterator<Item = &T> + '_ {
        self.ops
            .iter()
            .filter(|op| op.right_index().is_some())
            .map(EditOp::content)
    }

    /// Consume the script, returning its operations
    pub fn into_ops(self) -> Vec<EditOp<T>> {
        self.ops
    }
}

impl<T> IntoIterator for EditScript<T> {
    type Item = EditOp<T>;
    type IntoIter = std::vec::IntoIter<EditOp<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a EditScript<T> {
    type Item = &'a EditOp<T>;
    type IntoIter = std::slice::Iter<'a, EditOp<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}
