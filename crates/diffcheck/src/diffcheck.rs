mod args;
mod input;
mod output;

use std::io::Write;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use line_diff::TextDiff;
use log::{debug, info};

use crate::args::{Args, OutputFormat};

/// How a comparison ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Identical,
    Different,
}

impl Outcome {
    fn exit_code(self) -> ExitCode {
        match self {
            Outcome::Identical => ExitCode::SUCCESS,
            Outcome::Different => ExitCode::from(1),
        }
    }
}

fn init_logging(args: &Args) {
    // RUST_LOG takes precedence over the -v flags
    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .init();
}

fn run(args: &Args) -> Result<Outcome> {
    if args.no_color {
        colored::control::set_override(false);
    }

    let (left, right) = input::read_inputs(&args.left, &args.right)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if args.format == OutputFormat::Text && left.is_empty() && right.is_empty() {
        writeln!(out, "Nothing to compare")?;
        return Ok(Outcome::Identical);
    }

    let config = args.diff_config();
    debug!("Comparing with {:?}", config);
    let result = if args.swap {
        info!("Comparing {} against {}", args.right.display(), args.left.display());
        TextDiff::swap(&left, &right, &config)?
    } else {
        config.diff(&left, &right)?
    };

    output::write_result(&mut out, &result, args.format, args.stats)?;
    out.flush()?;

    Ok(if result.identical {
        Outcome::Identical
    } else {
        Outcome::Different
    })
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(&args);

    match run(&args) {
        Ok(outcome) => outcome.exit_code(),
        Err(err) => {
            eprintln!("diffcheck: {:#}", err);
            ExitCode::from(2)
        }
    }
}
