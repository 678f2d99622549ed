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

//! Error types for configuration loading and aborted compilations

use crate::problem::Problem;
use crate::severity::Severity;
use std::fmt;
use thiserror::Error;

/// Result type for settings parsing
pub type OptionsResult<T> = Result<T, OptionsError>;

/// Errors raised while building [`CompilerOptions`](crate::options::CompilerOptions)
#[derive(Error, Debug)]
pub enum OptionsError {
    /// Value of a severity key is not ignore, info, warning or error
    #[error("Invalid severity '{value}' for {key}")]
    InvalidSeverity {
        /// Settings key
        key: String,
        /// Rejected value
        value: String,
    },

    /// Value of a visibility key is not public, protected, default or private
    #[error("Invalid visibility '{value}' for {key}")]
    InvalidVisibility {
        /// Settings key
        key: String,
        /// Rejected value
        value: String,
    },

    /// Source or compliance level that is not a known Java release
    #[error("Invalid Java level '{value}' for {key}")]
    InvalidLevel {
        /// Settings key
        key: String,
        /// Rejected value
        value: String,
    },

    /// Value that does not fit the key (boolean flags, tag description modes)
    #[error("Invalid value '{value}' for {key}")]
    InvalidValue {
        /// Settings key
        key: String,
        /// Rejected value
        value: String,
    },

    /// Properties line without a key
    #[error("Malformed settings line {line}: {content}")]
    Malformed {
        /// 1-based line number
        line: usize,
        /// Offending line
        content: String,
    },

    /// JSON settings that are not an object of strings or booleans
    #[error("JSON settings error: {0}")]
    Json(#[from] serde_json::Error),

    /// Settings file could not be read
    #[error("Cannot read settings: {0}")]
    Io(#[from] std::io::Error),
}

/// Scope abandoned by a fatal problem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum AbortLevel {
    /// The whole compilation stops
    Compilation,
    /// Analysis of the current compilation unit stops
    CompilationUnit,
    /// Analysis of the current type stops
    Type,
    /// Analysis of the current method or constructor stops
    Method,
}

impl AbortLevel {
    /// Abort level encoded by a single abort bit
    pub fn from_severity(severity: Severity) -> Option<Self> {
        let bits = severity.abort_bits();
        if bits == Severity::ABORT_COMPILATION {
            Some(AbortLevel::Compilation)
        } else if bits == Severity::ABORT_COMPILATION_UNIT {
            Some(AbortLevel::CompilationUnit)
        } else if bits == Severity::ABORT_TYPE {
            Some(AbortLevel::Type)
        } else if bits == Severity::ABORT_METHOD {
            Some(AbortLevel::Method)
        } else {
            None
        }
    }

    pub fn severity(self) -> Severity {
        match self {
            AbortLevel::Compilation => Severity::ABORT_COMPILATION,
            AbortLevel::CompilationUnit => Severity::ABORT_COMPILATION_UNIT,
            AbortLevel::Type => Severity::ABORT_TYPE,
            AbortLevel::Method => Severity::ABORT_METHOD,
        }
    }
}

impl fmt::Display for AbortLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AbortLevel::Compilation => "compilation",
            AbortLevel::CompilationUnit => "compilation unit",
            AbortLevel::Type => "type",
            AbortLevel::Method => "method",
        };
        f.write_str(name)
    }
}

/// Control flow signal: the scope named by `level` must not be analyzed further
#[derive(Error, Debug, Clone)]
#[error("Aborted {level}: {problem}")]
pub struct AbortCompilation {
    /// Scope to abandon
    pub level: AbortLevel,
    /// Problem that caused the abort
    pub problem: Box<Problem>,
}

/// Result of a reporting call
pub type ReportResult = Result<(), AbortCompilation>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abort_level_from_single_bit() {
        assert_eq!(
            AbortLevel::from_severity(Severity::ERROR | Severity::ABORT_METHOD),
            Some(AbortLevel::Method)
        );
        assert_eq!(AbortLevel::from_severity(Severity::ERROR | Severity::ABORT), None);
        assert_eq!(AbortLevel::from_severity(Severity::ERROR), None);
    }

    #[test]
    fn test_options_error_messages() {
        let err = OptionsError::InvalidSeverity {
            key: "org.eclipse.jdt.core.compiler.problem.unusedImport".to_string(),
            value: "loud".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid severity 'loud' for org.eclipse.jdt.core.compiler.problem.unusedImport"
        );
    }
}
