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

//! A realized problem occurrence

use super::ProblemId;
use crate::category::Category;
use crate::irritant::{Irritant, irritant_of};
use crate::severity::Severity;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One problem raised against a compilation unit.
///
/// Offsets are character offsets into the unit's source; `end` is
/// inclusive. Line and column are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    pub id: ProblemId,
    pub severity: Severity,
    pub category: Category,
    /// Fully qualified arguments
    pub arguments: Vec<String>,
    /// Short arguments used to fill the message template
    pub message_arguments: Vec<String>,
    pub message: String,
    pub start: usize,
    pub end: usize,
    pub line: usize,
    pub column: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    /// Non-optional error that must reach the problem sink
    pub mandatory: bool,
}

impl Problem {
    pub fn is_error(&self) -> bool {
        self.severity.is_error()
    }

    pub fn is_warning(&self) -> bool {
        self.severity.is_warning()
    }

    pub fn is_info(&self) -> bool {
        self.severity.is_info()
    }

    /// Irritant governing this problem
    pub fn irritant(&self) -> Option<Irritant> {
        irritant_of(self.id)
    }

    /// Location prefix, `File.java:12:5`
    pub fn location(&self) -> String {
        match &self.file_name {
            Some(file) => format!("{file}:{}:{}", self.line, self.column),
            None => format!("{}:{}", self.line, self.column),
        }
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}: {} [{}]",
            self.location(),
            self.severity.level(),
            self.message,
            self.id
        )
    }
}
