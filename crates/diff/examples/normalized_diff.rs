use anyhow::Result;
use line_diff::{TextDiff, ViewMode};
use std::env;
use std::path::Path;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 3 {
        println!("Usage: normalized_diff <old_file> <new_file> [--ignore-ws] [--ignore-case] [--split] [--html]");
        return Ok(());
    }

    let old_file = &args[1];
    let new_file = &args[2];

    // Parse options
    let mut config = TextDiff::configure();
    let mut html = false;
    for arg in &args[3..] {
        match arg.as_str() {
            "--ignore-ws" => config = config.ignore_whitespace(true),
            "--ignore-case" => config = config.ignore_case(true),
            "--split" => config = config.view(ViewMode::Split),
            "--html" => html = true,
            _ => println!("Ignoring unknown option {}", arg),
        }
    }

    println!("Comparing {} and {} with {:?}", old_file, new_file, config);

    // Read the file contents
    let old_content = std::fs::read_to_string(Path::new(old_file))?;
    let new_content = std::fs::read_to_string(Path::new(new_file))?;

    let diff = config.diff(&old_content, &new_content)?;

    if diff.identical {
        println!("\nNo differences found");
    } else if html {
        println!("{}", diff.rendered.to_html());
    } else {
        println!("\n{}", diff.rendered);
    }

    Ok(())
}
