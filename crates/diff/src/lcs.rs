use log::{debug, trace};

use crate::edit_script::{EditOp, EditScript};

/// Longest-common-subsequence table for two sequences, stored row-major in a
/// flat vector of `(m + 1) * (n + 1)` cells.
struct LcsTable {
    cells: Vec<u32>,
    width: usize,
}

impl LcsTable {
    fn build<T: PartialEq>(left: &[T], right: &[T]) -> Self {
        let width = right.len() + 1;
        let mut cells = vec![0u32; (left.len() + 1) * width];

        for i in 1..=left.len() {
            for j in 1..=right.len() {
                cells[i * width + j] = if left[i - 1] == right[j - 1] {
                    cells[(i - 1) * width + (j - 1)] + 1
                } else {
                    cells[(i - 1) * width + j].max(cells[i * width + (j - 1)])
                };
            }
        }

        Self { cells, width }
    }

    fn get(&self, i: usize, j: usize) -> u32 {
        self.cells[i * self.width + j]
    }
}

/// Align two token sequences and return the edit script turning `left` into
/// `right`.
///
/// The script is derived from a dynamic-programming LCS table and is minimal:
/// its `Unchanged` operations form a longest common subsequence. When two
/// alignments are equally long the backtrace prefers `Added` over `Removed`,
/// so a swapped pair `[a, b] -> [b, a]` renders as `-a, b, +a`.
pub fn align<T: PartialEq + Clone>(left: &[T], right: &[T]) -> EditScript<T> {
    let (m, n) = (left.len(), right.len());
    debug!("Building LCS table of {}x{} cells", m + 1, n + 1);

    let table = LcsTable::build(left, right);
    trace!("Longest common subsequence has {} tokens", table.get(m, n));

    let mut ops = Vec::with_capacity(m + n - table.get(m, n) as usize);
    let (mut i, mut j) = (m, n);

    while i > 0 || j > 0 {
        if i > 0 && j > 0 && left[i - 1] == right[j - 1] {
            ops.push(EditOp::Unchanged {
                left_index: i - 1,
                right_index: j - 1,
                content: left[i - 1].clone(),
            });
            i -= 1;
            j -= 1;
        } else if j > 0 && (i == 0 || table.get(i, j - 1) >= table.get(i - 1, j)) {
            ops.push(EditOp::Added {
                right_index: j - 1,
                content: right[j - 1].clone(),
            });
            j -= 1;
        } else {
            ops.push(EditOp::Removed {
                left_index: i - 1,
                content: left[i - 1].clone(),
            });
            i -= 1;
        }
    }

    // The backtrace walks from the end of both sequences
    ops.reverse();

    EditScript::from_ops(ops)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_table_holds_lcs_length() {
        let left = ["a", "b", "c", "b", "d", "a", "b"];
        let right = ["b", "d", "c", "a", "b", "a"];

        let table = LcsTable::build(&left, &right);

        assert_eq!(table.get(left.len(), right.len()), 4);
        assert_eq!(table.get(0, right.len()), 0);
        assert_eq!(table.get(left.len(), 0), 0);
    }

    #[test]
    fn test_empty_sequences() {
        let script = align::<&str>(&[], &[]);
        assert!(script.is_empty());
    }

    #[test]
    fn test_one_side_empty() {
        let script = align(&["a", "b"], &[]);
        assert_eq!(
            script.ops(),
            &[
                EditOp::Removed {
                    left_index: 0,
                    content: "a"
                },
                EditOp::Removed {
                    left_index: 1,
                    content: "b"
                },
            ]
        );

        let script = align(&[], &["a"]);
        assert_eq!(
            script.ops(),
            &[EditOp::Added {
                right_index: 0,
                content: "a"
            }]
        );
    }

    #[test]
    fn test_works_on_non_string_tokens() {
        let script = align(&[1, 2, 3], &[1, 3, 4]);
        let stats = script.stats();

        assert_eq!((stats.added, stats.removed, stats.unchanged), (1, 1, 2));
    }
}
