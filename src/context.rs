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

//! Compilation units, problem sinks and the per-call reference context

use crate::error::AbortLevel;
use crate::irritant::Irritant;
use crate::location::{LineTable, Position, SourceRange};
use crate::problem::Problem;

/// Source region covered by a `@SuppressWarnings` annotation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suppression {
    pub range: SourceRange,
    pub irritants: Vec<Irritant>,
}

impl Suppression {
    /// Region silencing the irritants named by `tokens`. Unknown tokens are
    /// skipped.
    pub fn from_tokens<S: AsRef<str>>(range: SourceRange, tokens: &[S]) -> Self {
        let mut irritants = Vec::new();
        for token in tokens {
            let token = token.as_ref();
            if !Irritant::is_known_warning_token(token) {
                log::debug!("Unsupported @SuppressWarnings(\"{token}\")");
                continue;
            }
            for irritant in Irritant::for_warning_token(token) {
                if !irritants.contains(&irritant) {
                    irritants.push(irritant);
                }
            }
        }
        Self { range, irritants }
    }

    pub fn covers(&self, irritant: Irritant, range: SourceRange) -> bool {
        self.range.encloses(&range) && self.irritants.contains(&irritant)
    }
}

/// Source text of one compilation unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilationUnit {
    file_name: String,
    contents: Vec<char>,
    line_table: LineTable,
    suppressions: Vec<Suppression>,
}

impl CompilationUnit {
    pub fn new(file_name: impl Into<String>, source: &str) -> Self {
        let contents: Vec<char> = source.chars().collect();
        let line_table = LineTable::new(&contents);
        Self {
            file_name: file_name.into(),
            contents,
            line_table,
            suppressions: Vec::new(),
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn contents(&self) -> &[char] {
        &self.contents
    }

    pub fn line_table(&self) -> &LineTable {
        &self.line_table
    }

    pub fn position(&self, offset: usize) -> Position {
        self.line_table.position(offset)
    }

    /// Text of `range`, clamped to the unit
    pub fn text(&self, range: SourceRange) -> String {
        let end = (range.end + 1).min(self.contents.len());
        let start = range.start.min(end);
        self.contents[start..end].iter().collect()
    }

    /// Register a `@SuppressWarnings` region
    pub fn add_suppression<S: AsRef<str>>(&mut self, range: SourceRange, tokens: &[S]) {
        self.suppressions.push(Suppression::from_tokens(range, tokens));
    }

    pub fn with_suppression<S: AsRef<str>>(mut self, range: SourceRange, tokens: &[S]) -> Self {
        self.add_suppression(range, tokens);
        self
    }

    pub fn suppressions(&self) -> &[Suppression] {
        &self.suppressions
    }

    /// Whether a problem governed by `irritant` at `range` is suppressed
    pub fn is_suppressed(&self, irritant: Irritant, range: SourceRange) -> bool {
        self.suppressions.iter().any(|s| s.covers(irritant, range))
    }
}

/// Receiver of reported problems
pub trait ProblemSink {
    /// Accept a problem; `mandatory` problems are non-optional errors
    fn record(&mut self, problem: Problem, mandatory: bool);
}

impl ProblemSink for Vec<Problem> {
    fn record(&mut self, problem: Problem, _mandatory: bool) {
        self.push(problem);
    }
}

/// Kind of declaration currently being analyzed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScopeKind {
    #[default]
    CompilationUnit,
    Type,
    Method,
}

impl ScopeKind {
    /// Level abandoned when a fatal problem does not name one
    pub fn abort_level(self) -> AbortLevel {
        match self {
            ScopeKind::CompilationUnit => AbortLevel::CompilationUnit,
            ScopeKind::Type => AbortLevel::Type,
            ScopeKind::Method => AbortLevel::Method,
        }
    }
}

/// Where a problem is being reported: the unit, the sink that receives
/// problems for it and the enclosing declaration.
pub struct ReferenceContext<'a> {
    unit: &'a CompilationUnit,
    sink: &'a mut dyn ProblemSink,
    scope: ScopeKind,
    has_errors: bool,
    ignored_mandatory_errors: bool,
}

impl<'a> ReferenceContext<'a> {
    pub fn new(unit: &'a CompilationUnit, sink: &'a mut dyn ProblemSink) -> Self {
        Self {
            unit,
            sink,
            scope: ScopeKind::CompilationUnit,
            has_errors: false,
            ignored_mandatory_errors: false,
        }
    }

    pub fn with_scope(mut self, scope: ScopeKind) -> Self {
        self.scope = scope;
        self
    }

    pub fn enter(&mut self, scope: ScopeKind) {
        self.scope = scope;
    }

    pub fn unit(&self) -> &'a CompilationUnit {
        self.unit
    }

    pub fn scope(&self) -> ScopeKind {
        self.scope
    }

    /// A fatal error was reported in this context
    pub fn has_errors(&self) -> bool {
        self.has_errors
    }

    pub fn tag_as_having_errors(&mut self) {
        self.has_errors = true;
    }

    /// A mandatory error was dropped by the error handling policy
    pub fn has_ignored_mandatory_errors(&self) -> bool {
        self.ignored_mandatory_errors
    }

    pub(crate) fn tag_as_having_ignored_mandatory_errors(&mut self) {
        self.ignored_mandatory_errors = true;
    }

    pub(crate) fn record(&mut self, problem: Problem, mandatory: bool) {
        self.sink.record(problem, mandatory);
    }
}

impl std::fmt::Debug for ReferenceContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReferenceContext")
            .field("unit", &self.unit.file_name())
            .field("scope", &self.scope)
            .field("has_errors", &self.has_errors)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suppression_tokens() {
        let unit = CompilationUnit::new("A.java", "class A { void m() { int x; } }")
            .with_suppression(SourceRange::new(10, 28), &["unused", "bogus"]);

        let suppression = &unit.suppressions()[0];
        assert!(suppression.irritants.contains(&Irritant::UnusedLocalVariable));
        assert!(unit.is_suppressed(Irritant::UnusedLocalVariable, SourceRange::new(25, 25)));
        assert!(!unit.is_suppressed(Irritant::UnusedLocalVariable, SourceRange::new(2, 6)));
        assert!(!unit.is_suppressed(Irritant::RawTypeReference, SourceRange::new(25, 25)));
    }

    #[test]
    fn test_text_and_position() {
        let unit = CompilationUnit::new("A.java", "class A {\n  int x;\n}");
        assert_eq!(unit.text(SourceRange::new(12, 14)), "int");
        assert_eq!(unit.position(12), Position::new(2, 3));
        assert_eq!(unit.text(SourceRange::new(19, 40)), "}");
    }

    #[test]
    fn test_context_records() {
        let unit = CompilationUnit::new("A.java", "");
        let mut problems: Vec<Problem> = Vec::new();
        let mut context = ReferenceContext::new(&unit, &mut problems).with_scope(ScopeKind::Method);
        assert_eq!(context.scope().abort_level(), AbortLevel::Method);
        assert!(!context.has_errors());
        context.tag_as_having_errors();
        assert!(context.has_errors());
    }
}
