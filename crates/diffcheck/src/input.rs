//! Reading the two inputs of a comparison.

use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context, Result};
use log::info;

const STDIN: &str = "-";

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == STDIN
}

/// Read one input, either a file or `-` for stdin
pub fn read_input(path: &Path) -> Result<String> {
    if is_stdin(path) {
        info!("Reading input from stdin");
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;
        return Ok(text);
    }

    info!("Reading input from {}", path.display());
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Read both inputs, allowing at most one of them to come from stdin
pub fn read_inputs(left: &Path, right: &Path) -> Result<(String, String)> {
    if is_stdin(left) && is_stdin(right) {
        bail!("Only one input can be read from stdin");
    }

    Ok((read_input(left)?, read_input(right)?))
}
