use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use line_diff::{DiffConfig, ViewMode};

/// Default per-side line ceiling for the LCS table
pub const DEFAULT_MAX_LINES: usize = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable rows, colored when writing to a terminal
    Text,
    /// `diff-line` markup for embedding in a web page
    Html,
    /// The full result as JSON
    Json,
}

#[derive(Debug, Parser)]
#[command(
    name = "diffcheck",
    version,
    about = "Compare two texts line by line",
    long_about = "Compare two texts line by line and show which lines were added, \
    removed or left unchanged. Either input may be '-' to read it from stdin.\n\n\
    Exit status is 0 when the inputs are identical, 1 when they differ and 2 on error."
)]
pub struct Args {
    #[arg(index = 1, help = "The left (old) input")]
    pub left: PathBuf,

    #[arg(index = 2, help = "The right (new) input")]
    pub right: PathBuf,

    #[arg(
        short = 'w',
        long,
        help = "Collapse whitespace runs, including line breaks, before comparing"
    )]
    pub ignore_whitespace: bool,

    #[arg(short = 'i', long, help = "Compare case-insensitively")]
    pub ignore_case: bool,

    #[arg(long, default_value = "unified", help = "Rendering: unified or split")]
    pub view: ViewMode,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text, help = "Output format")]
    pub format: OutputFormat,

    #[arg(long, help = "Compare RIGHT against LEFT")]
    pub swap: bool,

    #[arg(long, help = "Only print the statistics line")]
    pub stats: bool,

    #[arg(
        long,
        env = "DIFFCHECK_MAX_LINES",
        default_value_t = DEFAULT_MAX_LINES,
        help = "Refuse inputs with more lines than this on either side (0 disables the limit)"
    )]
    pub max_lines: usize,

    #[arg(long, help = "Disable colored output")]
    pub no_color: bool,

    #[arg(short, long, action = ArgAction::Count, help = "Increase log verbosity")]
    pub verbose: u8,
}

impl Args {
    /// The library configuration described by these arguments
    pub fn diff_config(&self) -> DiffConfig {
        DiffConfig::default()
            .ignore_whitespace(self.ignore_whitespace)
            .ignore_case(self.ignore_case)
            .view(self.view)
            .max_lines((self.max_lines > 0).then_some(self.max_lines))
    }

    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["diffcheck", "a.txt", "b.txt"]);
        let config = args.diff_config();

        assert_eq!(args.format, OutputFormat::Text);
        assert_eq!(config.view, ViewMode::Unified);
        assert_eq!(config.max_lines, Some(DEFAULT_MAX_LINES));
        assert!(!config.ignore_case);
        assert_eq!(args.log_level(), log::LevelFilter::Warn);
    }

    #[test]
    fn test_flags() {
        let args = Args::parse_from([
            "diffcheck",
            "-w",
            "-i",
            "--view",
            "split",
            "--max-lines",
            "0",
            "-vv",
            "a.txt",
            "b.txt",
        ]);
        let config = args.diff_config();

        assert!(config.ignore_whitespace);
        assert!(config.ignore_case);
        assert_eq!(config.view, ViewMode::Split);
        assert_eq!(config.max_lines, None);
        assert_eq!(args.log_level(), log::LevelFilter::Debug);
    }

    #[test]
    fn test_rejects_unknown_view() {
        assert!(Args::try_parse_from(["diffcheck", "--view", "sideways", "a", "b"]).is_err());
    }
}
