use std::fmt;

use crate::models::arguments::Arguments;

/// Errors produced while parsing the `-f <filename> -d <date>` flags.
#[derive(Debug, PartialEq, Eq)]
pub enum CliError {
    Usage,
    UnknownArgument(String),
    MissingValue,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Usage => write!(f, "Usage: -f <filename> -d <date>"),
            CliError::UnknownArgument(token) => write!(f, "Unknown argument: {}", token),
            CliError::MissingValue => write!(f, "Both -f and -d arguments must be provided"),
        }
    }
}

impl std::error::Error for CliError {}

/// Parse command-line arguments (program name excluded) into an Arguments
/// pair. Flags are consumed as (flag, value) pairs and may appear in either
/// order.
pub fn parse_arguments(args: &[String]) -> Result<Arguments, CliError> {
    if args.len() != 4 {
        return Err(CliError::Usage);
    }

    let mut file_path = String::new();
    let mut date = String::new();

    for pair in args.chunks(2) {
        match pair[0].as_str() {
            "-f" => file_path = pair[1].clone(),
            "-d" => date = pair[1].clone(),
            other => return Err(CliError::UnknownArgument(other.to_string())),
        }
    }

    if file_path.trim().is_empty() || date.trim().is_empty() {
        return Err(CliError::MissingValue);
    }

    Ok(Arguments { file_path, date })
}
