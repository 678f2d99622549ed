// Copyright 2024 Java Problem Reporter Contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Formatting problems for different output formats

use crate::context::CompilationUnit;
use crate::location::SourceRange;
use crate::problem::Problem;

/// Output format for problems
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// Human-readable text format
    #[default]
    Text,
    /// JSON format
    Json,
    /// Compact single-line format
    Compact,
}

impl std::str::FromStr for Format {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "text" => Ok(Format::Text),
            "json" => Ok(Format::Json),
            "compact" => Ok(Format::Compact),
            other => Err(format!("unknown format '{other}'")),
        }
    }
}

/// Formatter for problems
#[derive(Debug, Clone)]
pub struct ProblemFormatter {
    format: Format,
    show_id: bool,
    show_category: bool,
    #[cfg(feature = "terminal")]
    use_color: bool,
}

impl ProblemFormatter {
    pub fn new(format: Format) -> Self {
        Self {
            format,
            show_id: true,
            show_category: false,
            #[cfg(feature = "terminal")]
            use_color: true,
        }
    }

    /// Set whether to show problem identifiers
    pub fn with_id(mut self, show: bool) -> Self {
        self.show_id = show;
        self
    }

    pub fn with_category(mut self, show: bool) -> Self {
        self.show_category = show;
        self
    }

    /// Set whether to use color (terminal feature only)
    #[cfg(feature = "terminal")]
    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    pub fn format(&self, problem: &Problem) -> String {
        match self.format {
            Format::Text => self.format_text(problem, None),
            Format::Json => self.format_json(problem),
            Format::Compact => self.format_compact(problem),
        }
    }

    /// Format a problem, quoting the offending source line in text mode
    pub fn format_with_source(&self, problem: &Problem, unit: &CompilationUnit) -> String {
        match self.format {
            Format::Text => self.format_text(problem, Some(unit)),
            _ => self.format(problem),
        }
    }

    pub fn format_all(&self, problems: &[Problem]) -> String {
        match self.format {
            Format::Text => problems
                .iter()
                .map(|p| self.format_text(p, None))
                .collect::<Vec<_>>()
                .join("\n"),
            Format::Json => serde_json::to_string_pretty(problems).unwrap_or_else(|e| {
                log::warn!("Failed to serialize problems: {e}");
                String::from("[]")
            }),
            Format::Compact => problems
                .iter()
                .map(|p| self.format_compact(p))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }

    fn level(&self, problem: &Problem) -> String {
        let level = problem.severity.level();
        #[cfg(feature = "terminal")]
        if self.use_color {
            use crate::severity::SeverityLevel;
            use colored::Colorize;
            let text = level.to_string();
            return match level {
                SeverityLevel::Error => text.red().bold().to_string(),
                SeverityLevel::Warning => text.yellow().bold().to_string(),
                SeverityLevel::Info => text.blue().bold().to_string(),
                SeverityLevel::Ignore => text,
            };
        }
        level.to_string()
    }

    fn format_text(&self, problem: &Problem, unit: Option<&CompilationUnit>) -> String {
        let mut result = format!("{}: {}", self.level(problem), problem.message);
        if self.show_id {
            result.push_str(&format!(" [{}]", problem.id));
        }
        if self.show_category {
            result.push_str(&format!(" ({})", problem.category.label()));
        }
        result.push('\n');
        result.push_str(&format!(" --> {}\n", problem.location()));

        if let Some(unit) = unit {
            let line_start = unit.line_table().line_start(problem.line);
            let line_end = unit
                .line_table()
                .line_ends()
                .get(problem.line.saturating_sub(1))
                .map_or(unit.contents().len(), |end| *end);
            let text = unit.text(SourceRange::new(line_start, line_end.saturating_sub(1)));
            let text = text.trim_end_matches(['\r', '\n']);
            result.push_str(&format!("{:4} | {}\n", problem.line, text));

            let width = (problem.end.min(line_end.saturating_sub(1)) + 1).saturating_sub(problem.start).max(1);
            result.push_str("     | ");
            result.push_str(&" ".repeat(problem.column.saturating_sub(1)));
            result.push_str(&"^".repeat(width));
            result.push('\n');
        }
        result
    }

    fn format_json(&self, problem: &Problem) -> String {
        serde_json::to_string_pretty(problem).unwrap_or_else(|e| {
            log::warn!("Failed to serialize {}: {e}", problem.id);
            String::from("{}")
        })
    }

    fn format_compact(&self, problem: &Problem) -> String {
        let id = if self.show_id {
            format!("[{}] ", problem.id)
        } else {
            String::new()
        };
        format!(
            "{}: {}: {}{}",
            problem.location(),
            problem.severity.level(),
            id,
            problem.message
        )
    }
}

impl Default for ProblemFormatter {
    fn default() -> Self {
        Self::new(Format::Text)
    }
}

/// Extension trait for formatting problems
pub trait ProblemFormat {
    /// Format as human-readable text
    fn to_text(&self) -> String;

    /// Format as JSON
    fn to_json(&self) -> String;

    /// Format as compact single line
    fn to_compact(&self) -> String;
}

impl ProblemFormat for Problem {
    fn to_text(&self) -> String {
        plain(Format::Text).format(self)
    }

    fn to_json(&self) -> String {
        plain(Format::Json).format(self)
    }

    fn to_compact(&self) -> String {
        plain(Format::Compact).format(self)
    }
}

fn plain(format: Format) -> ProblemFormatter {
    let formatter = ProblemFormatter::new(format);
    #[cfg(feature = "terminal")]
    let formatter = formatter.with_color(false);
    formatter
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;
    use crate::problem::ProblemId;
    use crate::severity::Severity;
    use pretty_assertions::assert_eq;

    fn unused_import() -> Problem {
        Problem {
            id: ProblemId::UNUSED_IMPORT,
            severity: Severity::WARNING | Severity::OPTIONAL,
            category: Category::UnnecessaryCode,
            arguments: vec!["java.util.List".to_string()],
            message_arguments: vec!["java.util.List".to_string()],
            message: "The import java.util.List is never used".to_string(),
            start: 7,
            end: 20,
            line: 1,
            column: 8,
            file_name: Some("A.java".to_string()),
            mandatory: false,
        }
    }

    #[test]
    fn test_compact_format() {
        assert_eq!(
            unused_import().to_compact(),
            "A.java:1:8: warning: [UnusedImport] The import java.util.List is never used"
        );
    }

    #[test]
    fn test_text_format_with_source() {
        let unit = CompilationUnit::new("A.java", "import java.util.List;\nclass A {}\n");
        let text = plain(Format::Text).format_with_source(&unused_import(), &unit);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "warning: The import java.util.List is never used [UnusedImport]");
        assert_eq!(lines[1], " --> A.java:1:8");
        assert_eq!(lines[2], "   1 | import java.util.List;");
        assert_eq!(lines[3], "     |        ^^^^^^^^^^^^^^");
    }

    #[test]
    fn test_json_format() {
        let json: serde_json::Value = serde_json::from_str(&unused_import().to_json()).unwrap();
        assert_eq!(json["message_arguments"][0], "java.util.List");
        assert_eq!(json["start"], 7);
    }
}
