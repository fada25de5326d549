use anyhow::Result;
use line_diff::{EditKind, TextDiff, ViewMode};

fn main() -> Result<()> {
    // Two sample texts to compare
    let text1 = "This is the first line.\nHere is the second line.\nAnd the third line.";
    let text2 = "This is the first line.\nThis is a completely different second line.\nAnd the third line.\nPlus a new fourth line.";

    let diff = TextDiff::diff(text1, text2)?;

    // Print the unified rendering
    println!("Unified diff:");
    println!("{}", diff.rendered);

    // Print diff statistics
    println!("\nDiff statistics:");
    println!("  Added lines: {}", diff.stats.added);
    println!("  Removed lines: {}", diff.stats.removed);
    println!("  Unchanged lines: {}", diff.stats.unchanged);
    println!("  Identical: {}", diff.identical);

    // Print each operation with color-coded kinds
    println!("\nOperations:");
    for op in &diff.script {
        let label = match op.kind() {
            EditKind::Removed => "\x1b[31mRemoved\x1b[0m",
            EditKind::Added => "\x1b[32mAdded\x1b[0m",
            EditKind::Unchanged => "\x1b[37mUnchanged\x1b[0m",
        };
        println!(
            "  {:<20} left={:<4} right={:<4} {}",
            label,
            op.left_line().map(|n| n.to_string()).unwrap_or_default(),
            op.right_line().map(|n| n.to_string()).unwrap_or_default(),
            op.content()
        );
    }

    // Show the same comparison side by side
    println!("\nSplit view:");
    println!("{}", diff.render(ViewMode::Split));

    Ok(())
}
