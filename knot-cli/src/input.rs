//! Puzzle input loading. Only the first line of the source is used.

use std::io::BufRead;

use crate::error::CliError;

/// Read the first line of the file at `path`, without its line terminator.
pub fn read_first_line(path: &str) -> Result<String, CliError> {
    let contents = std::fs::read_to_string(path).map_err(|e| CliError::InputError {
        reason: format!("failed to read input file '{}': {}", path, e),
    })?;
    let line = first_line(&contents);
    tracing::info!(path, bytes = line.len(), "loaded input");
    Ok(line)
}

/// Read the first line from standard input.
pub fn read_stdin_line() -> Result<String, CliError> {
    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(first_line(&line))
}

/// Pick the single input line from an inline argument, a file, or stdin,
/// in that order of preference.
pub fn resolve(inline: Option<String>, path: Option<&str>) -> Result<String, CliError> {
    match (inline, path) {
        (Some(_), Some(_)) => Err(CliError::InputError {
            reason: "pass either an inline value or --input, not both".to_string(),
        }),
        (Some(text), None) => Ok(text),
        (None, Some(path)) => read_first_line(path),
        (None, None) => read_stdin_line(),
    }
}

fn first_line(contents: &str) -> String {
    contents.lines().next().unwrap_or_default().to_string()
}
