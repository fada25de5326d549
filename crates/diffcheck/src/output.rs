use std::io::Write;

use anyhow::Result;
use colored::{ColoredString, Colorize};
use line_diff::{DiffResult, DiffStats, EditKind, RenderedView, SplitView, UnifiedView};

use crate::args::OutputFormat;

fn paint(text: &str, kind: Option<EditKind>) -> ColoredString {
    match kind {
        Some(EditKind::Added) => text.green(),
        Some(EditKind::Removed) => text.red(),
        Some(EditKind::Unchanged) => text.normal(),
        None => text.dimmed(),
    }
}

/// The one-line `+A -R =U` summary
pub fn stats_line(stats: &DiffStats) -> String {
    format!(
        "{} {} {}",
        format!("+{}", stats.added).green(),
        format!("-{}", stats.removed).red(),
        format!("={}", stats.unchanged).dimmed()
    )
}

fn write_unified(out: &mut impl Write, view: &UnifiedView) -> Result<()> {
    let width = view.number_width();
    for row in &view.rows {
        writeln!(out, "{}", paint(&row.to_text(width), Some(row.kind)))?;
    }
    Ok(())
}

fn write_split(out: &mut impl Write, view: &SplitView) -> Result<()> {
    let number_width = view.number_width();
    let content_width = view.left_content_width();

    for (left, right) in view.rows() {
        let left_text = left.to_text(number_width, content_width);
        let right_text = right.to_text(number_width, 0);
        let right_text = right_text.trim_end();

        if right_text.is_empty() {
            writeln!(out, "{} |", paint(&left_text, left.kind()))?;
        } else {
            writeln!(
                out,
                "{} | {}",
                paint(&left_text, left.kind()),
                paint(right_text, right.kind())
            )?;
        }
    }
    Ok(())
}

fn write_text(out: &mut impl Write, result: &DiffResult, stats_only: bool) -> Result<()> {
    writeln!(out, "{}", stats_line(&result.stats))?;

    if stats_only {
        return Ok(());
    }

    if result.identical {
        writeln!(out, "No differences found")?;
        return Ok(());
    }

    match &result.rendered {
        RenderedView::Unified(view) => write_unified(out, view),
        RenderedView::Split(view) => write_split(out, view),
    }
}

/// Write a comparison result in the requested format
pub fn write_result(
    out: &mut impl Write,
    result: &DiffResult,
    format: OutputFormat,
    stats_only: bool,
) -> Result<()> {
    match format {
        OutputFormat::Text => write_text(out, result, stats_only)?,
        OutputFormat::Html => writeln!(out, "{}", result.rendered.to_html())?,
        OutputFormat::Json if stats_only => {
            writeln!(out, "{}", serde_json::to_string_pretty(&result.stats)?)?
        }
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(result)?)?,
    }
    Ok(())
}
