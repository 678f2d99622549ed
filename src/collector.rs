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

//! Collecting problems reported against compilation units

use crate::category::Category;
use crate::context::ProblemSink;
use crate::problem::{Problem, ProblemId};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Summary statistics for collected problems
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProblemSummary {
    /// Total number of problems kept
    pub total_count: usize,
    pub error_count: usize,
    pub warning_count: usize,
    pub info_count: usize,
    /// Errors that are not governed by an irritant
    pub mandatory_count: usize,
    /// Optional problems dropped once the limit was reached
    pub dropped_count: usize,
    /// Number of problems per category
    pub by_category: BTreeMap<Category, usize>,
    /// Most frequent identifiers, most frequent first
    pub common_problems: Vec<(ProblemId, usize)>,
}

/// Configuration for problem collection
#[derive(Debug, Clone)]
pub struct CollectorConfig {
    /// Optional problems kept per compilation unit; mandatory ones are
    /// always kept
    pub max_problems_per_unit: usize,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            max_problems_per_unit: 100,
        }
    }
}

/// Problem sink that keeps problems in reporting order
#[derive(Debug, Clone, Default)]
pub struct ProblemCollector {
    problems: Vec<Problem>,
    per_unit: BTreeMap<String, usize>,
    dropped: usize,
    config: CollectorConfig,
}

impl ProblemCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: CollectorConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Add a problem, honoring the per unit limit for optional problems
    pub fn add_problem(&mut self, problem: Problem, mandatory: bool) {
        let unit = problem.file_name.clone().unwrap_or_default();
        let count = self.per_unit.entry(unit).or_insert(0);
        if !mandatory && *count >= self.config.max_problems_per_unit {
            log::trace!("Problem limit reached, dropping {}", problem.id);
            self.dropped += 1;
            return;
        }
        *count += 1;
        self.problems.push(problem);
    }

    pub fn problems(&self) -> &[Problem] {
        &self.problems
    }

    pub fn into_problems(self) -> Vec<Problem> {
        self.problems
    }

    pub fn errors(&self) -> impl Iterator<Item = &Problem> {
        self.problems.iter().filter(|p| p.is_error())
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Problem> {
        self.problems.iter().filter(|p| p.is_warning())
    }

    pub fn infos(&self) -> impl Iterator<Item = &Problem> {
        self.problems.iter().filter(|p| p.is_info())
    }

    pub fn has_errors(&self) -> bool {
        self.problems.iter().any(Problem::is_error)
    }

    /// Problems of one compilation unit
    pub fn problems_of<'a>(&'a self, file_name: &'a str) -> impl Iterator<Item = &'a Problem> + 'a {
        self.problems
            .iter()
            .filter(move |p| p.file_name.as_deref() == Some(file_name))
    }

    pub fn group_by_category(&self) -> BTreeMap<Category, Vec<&Problem>> {
        let mut grouped: BTreeMap<Category, Vec<&Problem>> = BTreeMap::new();
        for problem in &self.problems {
            grouped.entry(problem.category).or_default().push(problem);
        }
        grouped
    }

    /// Order problems by file, then by position
    pub fn sort(&mut self) {
        self.problems
            .sort_by(|a, b| (&a.file_name, a.start, a.end).cmp(&(&b.file_name, b.start, b.end)));
    }

    pub fn summary(&self) -> ProblemSummary {
        let mut summary = ProblemSummary {
            total_count: self.problems.len(),
            dropped_count: self.dropped,
            ..ProblemSummary::default()
        };
        let mut id_counts: BTreeMap<ProblemId, usize> = BTreeMap::new();

        for problem in &self.problems {
            if problem.is_error() {
                summary.error_count += 1;
            } else if problem.is_info() {
                summary.info_count += 1;
            } else {
                summary.warning_count += 1;
            }
            if problem.mandatory {
                summary.mandatory_count += 1;
            }
            *summary.by_category.entry(problem.category).or_insert(0) += 1;
            *id_counts.entry(problem.id).or_insert(0) += 1;
        }

        let mut common: Vec<_> = id_counts.into_iter().collect();
        common.sort_by(|a, b| b.1.cmp(&a.1));
        common.truncate(5);
        summary.common_problems = common;
        summary
    }

    pub fn clear(&mut self) {
        self.problems.clear();
        self.per_unit.clear();
        self.dropped = 0;
    }

    pub fn len(&self) -> usize {
        self.problems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }
}

impl ProblemSink for ProblemCollector {
    fn record(&mut self, problem: Problem, mandatory: bool) {
        self.add_problem(problem, mandatory);
    }
}

impl fmt::Display for ProblemSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} problems ({} errors, {} warnings, {} infos)",
            self.total_count, self.error_count, self.warning_count, self.info_count
        )?;
        if self.dropped_count > 0 {
            write!(f, ", {} dropped", self.dropped_count)?;
        }
        for (category, count) in &self.by_category {
            write!(f, "\n  {}: {}", category.label(), count)?;
        }
        Ok(())
    }
}
