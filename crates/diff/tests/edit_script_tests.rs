use line_diff::{align, DiffStats, EditKind, EditOp};
use pretty_assertions::assert_eq;

#[test]
fn test_edit_op_accessors() {
    let unchanged = EditOp::Unchanged {
        left_index: 2,
        right_index: 4,
        content: "same",
    };
    assert_eq!(unchanged.kind(), EditKind::Unchanged);
    assert_eq!(unchanged.left_index(), Some(2));
    assert_eq!(unchanged.right_index(), Some(4));
    assert_eq!(unchanged.left_line(), Some(3));
    assert_eq!(unchanged.right_line(), Some(5));
    assert!(!unchanged.is_change());

    let removed = EditOp::Removed {
        left_index: 0,
        content: "gone",
    };
    assert_eq!(removed.kind(), EditKind::Removed);
    assert_eq!(removed.right_index(), None);
    assert_eq!(*removed.content(), "gone");
    assert!(removed.is_change());

    let added = EditOp::Added {
        right_index: 7,
        content: "new",
    };
    assert_eq!(added.kind(), EditKind::Added);
    assert_eq!(added.left_line(), None);
    assert_eq!(added.right_line(), Some(8));
}

#[test]
fn test_edit_kind_display_and_prefix() {
    assert_eq!(EditKind::Added.to_string(), "added");
    assert_eq!(EditKind::Removed.to_string(), "removed");
    assert_eq!(EditKind::Unchanged.to_string(), "unchanged");

    assert_eq!(EditKind::Added.prefix(), '+');
    assert_eq!(EditKind::Removed.prefix(), '-');
    assert_eq!(EditKind::Unchanged.prefix(), ' ');
}

#[test]
fn test_stats_match_script() {
    let script = align(&["a", "b", "c", "d"], &["a", "x", "c", "y", "z"]);
    let stats = script.stats();

    assert_eq!(
        stats,
        DiffStats {
            added: 3,
            removed: 2,
            unchanged: 2,
        }
    );
    assert_eq!(stats.changes(), 5);
    assert_eq!(stats.total(), script.len());
    assert!(!stats.is_identical());
    assert!(!script.is_identical());
}

#[test]
fn test_reconstruction_iterators() {
    let left = ["fn main() {", "    old();", "}"];
    let right = ["fn main() {", "    new();", "    more();", "}"];

    let script = align(&left, &right);

    assert_eq!(script.left_lines().copied().collect::<Vec<_>>(), left);
    assert_eq!(script.right_lines().copied().collect::<Vec<_>>(), right);
}

#[test]
fn test_indices_are_sequential() {
    let script = align(&["a", "b", "c", "a", "b"], &["b", "a", "b", "c"]);

    let left: Vec<usize> = script.iter().filter_map(EditOp::left_index).collect();
    let right: Vec<usize> = script.iter().filter_map(EditOp::right_index).collect();

    assert_eq!(left, (0..5).collect::<Vec<_>>());
    assert_eq!(right, (0..4).collect::<Vec<_>>());
}

#[test]
fn test_into_iterator() {
    let script = align(&["a"], &["b"]);

    let borrowed: Vec<EditKind> = (&script).into_iter().map(EditOp::kind).collect();
    let owned: Vec<EditKind> = script.into_iter().map(|op| op.kind()).collect();

    assert_eq!(borrowed, owned);
    assert_eq!(owned, vec![EditKind::Removed, EditKind::Added]);
}

#[test]
fn test_default_stats_are_identical() {
    let stats = DiffStats::default();

    assert!(stats.is_identical());
    assert_eq!(stats.total(), 0);
}
