//! Shared utilities for CLI commands

use serde::Serialize;
use tabled::{Table, settings::Style};

use crate::cli::error::{CliError, CliResult};

/// Output format accepted by listing commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

impl OutputFormat {
    pub fn parse(format: &str) -> CliResult<Self> {
        match format {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(CliError::UnsupportedFormat {
                format: other.to_string(),
            }),
        }
    }
}

/// Truncate a string with ellipsis if it exceeds max length
pub fn truncate_with_ellipsis(s: &str, max: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max - 3).collect();
        format!("{}...", truncated)
    }
}

/// Apply consistent table styling
pub fn apply_table_style(table: &mut Table) {
    table.with(Style::rounded());
}

pub fn to_json<T: Serialize>(value: &T) -> CliResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_strings() {
        assert_eq!(truncate_with_ellipsis("short", 10), "short");
    }

    #[test]
    fn truncate_shortens_long_strings() {
        assert_eq!(truncate_with_ellipsis("abcdefghijkl", 8), "abcde...");
    }

    #[test]
    fn parse_known_formats() {
        assert_eq!(OutputFormat::parse("table").unwrap(), OutputFormat::Table);
        assert_eq!(OutputFormat::parse("json").unwrap(), OutputFormat::Json);
        assert!(matches!(
            OutputFormat::parse("yaml"),
            Err(CliError::UnsupportedFormat { .. })
        ));
    }
}
