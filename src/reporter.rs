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

//! The problem reporter
//!
//! Every problem goes through the same steps: classify the identifier,
//! stop early when it is ignored, assemble its arguments, drop it when a
//! `@SuppressWarnings` region covers it, hand it to the sink of the
//! reference context and finally decide whether analysis must abort.

use crate::classifier::ProblemClassifier;
use crate::context::{CompilationUnit, ReferenceContext, ScopeKind};
use crate::error::{AbortCompilation, AbortLevel, ReportResult};
use crate::irritant::{Irritant, irritant_of};
use crate::location::SourceRange;
use crate::messages;
use crate::options::CompilerOptions;
use crate::problem::{Problem, ProblemId};
use crate::report::Report;
use crate::scanner::PositionScanner;
use crate::severity::Severity;

/// What happens after an error has been reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ErrorHandlingPolicy {
    /// Keep analyzing; only problems that carry abort bits stop it
    #[default]
    ProceedOnErrors,
    /// Abort the compilation at the first fatal error
    StopOnFirstError,
    /// Drop every problem except internal errors
    IgnoreAllErrors,
}

/// Arguments of a problem reported by identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProblemArguments {
    pub arguments: Vec<String>,
    pub message_arguments: Vec<String>,
}

impl ProblemArguments {
    pub fn new(arguments: Vec<String>, message_arguments: Vec<String>) -> Self {
        Self {
            arguments,
            message_arguments,
        }
    }

    /// Same arguments for the problem and its message
    pub fn same<S: Into<String>>(arguments: Vec<S>) -> Self {
        let arguments: Vec<String> = arguments.into_iter().map(Into::into).collect();
        Self {
            message_arguments: arguments.clone(),
            arguments,
        }
    }
}

/// Identity of the unit loaded in the scanner
#[derive(Debug, Clone, PartialEq, Eq)]
struct ScannedUnit {
    file_name: String,
    address: usize,
    len: usize,
}

impl ScannedUnit {
    fn of(unit: &CompilationUnit) -> Self {
        Self {
            file_name: unit.file_name().to_string(),
            address: unit.contents().as_ptr() as usize,
            len: unit.contents().len(),
        }
    }
}

/// Classifies, renders and dispatches problems
#[derive(Debug)]
pub struct ProblemReporter {
    options: CompilerOptions,
    policy: ErrorHandlingPolicy,
    scanner: PositionScanner,
    scanned_unit: Option<ScannedUnit>,
}

impl ProblemReporter {
    pub fn new(options: CompilerOptions) -> Self {
        Self {
            options,
            policy: ErrorHandlingPolicy::default(),
            scanner: PositionScanner::new(),
            scanned_unit: None,
        }
    }

    pub fn with_policy(mut self, policy: ErrorHandlingPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn options(&self) -> &CompilerOptions {
        &self.options
    }

    pub fn policy(&self) -> ErrorHandlingPolicy {
        self.policy
    }

    pub fn classifier(&self) -> ProblemClassifier<'_> {
        ProblemClassifier::new(&self.options)
    }

    /// Report a condition found by analysis.
    ///
    /// Without a context errors abort the whole compilation and everything
    /// else is dropped.
    pub fn report(&mut self, report: &Report, context: Option<&mut ReferenceContext<'_>>) -> ReportResult {
        let id = report.id();
        let severity = self.classifier().severity_of(id);
        if severity.is_ignore() {
            log::trace!("Ignoring {id}");
            return Ok(());
        }

        self.load_unit(context.as_deref().map(ReferenceContext::unit));
        let Some(rendered) = report.render(&self.options, &mut self.scanner) else {
            log::trace!("{id} not reported under the current options");
            return Ok(());
        };

        let arguments = ProblemArguments::new(rendered.arguments, rendered.message_arguments);
        self.dispatch(rendered.id, severity, arguments, rendered.range, context)
    }

    /// Report a catalog problem with caller assembled arguments
    pub fn handle(
        &mut self,
        id: ProblemId,
        arguments: ProblemArguments,
        range: SourceRange,
        context: Option<&mut ReferenceContext<'_>>,
    ) -> ReportResult {
        let severity = self.classifier().severity_of(id);
        self.handle_with_severity(id, severity, arguments, range, context)
    }

    /// Report a problem with a severity that bypasses the options
    pub fn handle_with_severity(
        &mut self,
        id: ProblemId,
        severity: Severity,
        arguments: ProblemArguments,
        range: SourceRange,
        context: Option<&mut ReferenceContext<'_>>,
    ) -> ReportResult {
        if severity.is_ignore() {
            log::trace!("Ignoring {id}");
            return Ok(());
        }
        self.dispatch(id, severity, arguments, range, context)
    }

    /// Point the scanner at `unit`, rescanning only when the unit changed.
    /// Without a unit spans are not narrowed.
    fn load_unit(&mut self, unit: Option<&CompilationUnit>) {
        let key = unit.map(ScannedUnit::of);
        if key == self.scanned_unit {
            return;
        }
        match unit {
            Some(unit) => self.scanner.set_source(unit.contents()),
            None => self.scanner.set_source(&[]),
        }
        self.scanned_unit = key;
    }

    fn dispatch(
        &self,
        id: ProblemId,
        severity: Severity,
        arguments: ProblemArguments,
        range: SourceRange,
        context: Option<&mut ReferenceContext<'_>>,
    ) -> ReportResult {
        let mandatory = severity.is_mandatory();

        let Some(context) = context else {
            if severity.is_error() {
                let problem = self.create_problem(id, severity, arguments, range, None);
                log::debug!("Aborting compilation on {id} reported outside of any context");
                return Err(AbortCompilation {
                    level: AbortLevel::Compilation,
                    problem: Box::new(problem),
                });
            }
            log::trace!("Dropping {id} reported outside of any context");
            return Ok(());
        };

        if self.policy == ErrorHandlingPolicy::IgnoreAllErrors && !severity.contains(Severity::INTERNAL_ERROR) {
            if mandatory {
                context.tag_as_having_ignored_mandatory_errors();
            }
            return Ok(());
        }

        if self.is_suppressed(id, severity, range, context) {
            log::trace!("{id} suppressed at {range}");
            return Ok(());
        }

        let problem = self.create_problem(id, severity, arguments, range, Some(&*context));
        if !(severity.is_error() && severity.is_fatal()) {
            context.record(problem, mandatory);
            return Ok(());
        }

        context.record(problem.clone(), mandatory);
        context.tag_as_having_errors();
        let level = match self.policy {
            ErrorHandlingPolicy::StopOnFirstError => Some(AbortLevel::Compilation),
            _ => abort_level(severity, context.scope()),
        };
        match level {
            Some(level) => {
                log::debug!("Aborting {level} on {id}");
                Err(AbortCompilation {
                    level,
                    problem: Box::new(problem),
                })
            }
            None => Ok(()),
        }
    }

    /// Optional problems inside a `@SuppressWarnings` region covering their
    /// irritant are dropped. Optional errors only when configured so.
    fn is_suppressed(
        &self,
        id: ProblemId,
        severity: Severity,
        range: SourceRange,
        context: &ReferenceContext<'_>,
    ) -> bool {
        if !severity.is_optional() || !self.options.suppress_warnings {
            return false;
        }
        if severity.is_error() && !self.options.suppress_optional_errors {
            return false;
        }
        match irritant_of(id) {
            Some(Irritant::UnusedWarningToken) | None => false,
            Some(irritant) => context.unit().is_suppressed(irritant, range),
        }
    }

    fn create_problem(
        &self,
        id: ProblemId,
        severity: Severity,
        arguments: ProblemArguments,
        range: SourceRange,
        context: Option<&ReferenceContext<'_>>,
    ) -> Problem {
        let (line, column, file_name) = match context {
            Some(context) => {
                let unit = context.unit();
                let position = unit.position(range.start);
                (position.line, position.column, Some(unit.file_name().to_string()))
            }
            None => (0, 0, None),
        };
        Problem {
            id,
            severity,
            category: self.classifier().category_of(severity, id),
            message: messages::render(id, &arguments.message_arguments),
            arguments: arguments.arguments,
            message_arguments: arguments.message_arguments,
            start: range.start,
            end: range.end,
            line,
            column,
            file_name,
            mandatory: severity.is_mandatory(),
        }
    }
}

/// Scope abandoned for a fatal problem raised in `scope`.
///
/// A single abort bit names its level, never finer than the enclosing
/// scope. Several bits resolve to the enclosing scope itself.
fn abort_level(severity: Severity, scope: ScopeKind) -> Option<AbortLevel> {
    if severity.abort_bits().bits() == 0 {
        return None;
    }
    let enclosing = scope.abort_level();
    Some(match AbortLevel::from_severity(severity) {
        Some(level) => level.min(enclosing),
        None => enclosing,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;
    use crate::names::{ImportRef, MethodRef, TypeRef};
    use crate::nodes::SourceNode;
    use crate::severity::SeverityLevel;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    const SOURCE: &str = "import java.util.List;\nclass A {\n  void m() { int x; }\n}\n";

    fn unit() -> CompilationUnit {
        CompilationUnit::new("A.java", SOURCE)
    }

    #[test]
    fn test_unused_import_is_recorded_as_warning() {
        let unit = unit();
        let mut problems: Vec<Problem> = Vec::new();
        let mut context = ReferenceContext::new(&unit, &mut problems);
        let mut reporter = ProblemReporter::new(CompilerOptions::default());

        let report = Report::unused_import(ImportRef::single("java.util.List"), SourceNode::expression(7, 20));
        reporter.report(&report, Some(&mut context)).unwrap();
        drop(context);

        assert_eq!(problems.len(), 1);
        let problem = &problems[0];
        assert_eq!(problem.severity, Severity::WARNING | Severity::OPTIONAL);
        assert_eq!(problem.category, Category::UnnecessaryCode);
        assert_eq!(problem.message, "The import java.util.List is never used");
        assert_eq!((problem.line, problem.column), (1, 8));
        assert!(!problem.mandatory);
    }

    #[test]
    fn test_ignored_problem_never_reaches_sink() {
        let unit = unit();
        let mut problems: Vec<Problem> = Vec::new();
        let mut context = ReferenceContext::new(&unit, &mut problems);
        let options = CompilerOptions::default().with_severity(Irritant::UnusedImport, SeverityLevel::Ignore);
        let mut reporter = ProblemReporter::new(options);

        let report = Report::unused_import(ImportRef::single("java.util.List"), SourceNode::expression(7, 20));
        reporter.report(&report, Some(&mut context)).unwrap();
        drop(context);
        assert!(problems.is_empty());
    }

    #[test]
    fn test_code_too_large_aborts_method() {
        let unit = unit();
        let mut problems: Vec<Problem> = Vec::new();
        let mut context = ReferenceContext::new(&unit, &mut problems).with_scope(ScopeKind::Method);
        let mut reporter = ProblemReporter::new(CompilerOptions::quiet());

        let method = MethodRef::method(TypeRef::parse("A"), "m", Vec::new());
        let report = Report::code_too_large(method, SourceNode::expression(35, 53));
        let abort = reporter.report(&report, Some(&mut context)).unwrap_err();

        assert_eq!(abort.level, AbortLevel::Method);
        assert_eq!(abort.problem.severity, Severity::ERROR | Severity::ABORT | Severity::FATAL);
        assert!(abort.problem.mandatory);
        assert!(context.has_errors());
        drop(context);
        assert_eq!(problems.len(), 1);
    }

    #[test]
    fn test_code_too_large_by_identifier_aborts() {
        let unit = unit();
        let mut problems: Vec<Problem> = Vec::new();
        let mut context = ReferenceContext::new(&unit, &mut problems).with_scope(ScopeKind::Type);
        let mut reporter = ProblemReporter::new(CompilerOptions::default());

        let abort = reporter
            .handle(
                ProblemId::BYTECODE_EXCEEDS_64K_LIMIT_FOR_CLINIT,
                ProblemArguments::same(Vec::<String>::new()),
                SourceRange::new(23, 57),
                Some(&mut context),
            )
            .unwrap_err();
        assert_eq!(abort.level, AbortLevel::Type);
        assert_eq!(abort.problem.severity, Severity::ERROR | Severity::ABORT | Severity::FATAL);
        assert_eq!(
            abort.problem.message,
            "The code for the static initializer is exceeding the 65535 bytes limit"
        );
    }

    #[test]
    fn test_scanner_follows_the_reported_unit() {
        let first = unit();
        let second = CompilationUnit::new("B.java", "class B {}");
        let mut reporter = ProblemReporter::new(CompilerOptions::default());
        let report = Report::unused_import(ImportRef::single("a.B"), SourceNode::expression(0, 1));

        let mut problems: Vec<Problem> = Vec::new();
        let mut context = ReferenceContext::new(&first, &mut problems);
        reporter.report(&report, Some(&mut context)).unwrap();
        assert_eq!(reporter.scanner.source(), first.contents());

        let mut context = ReferenceContext::new(&second, &mut problems);
        reporter.report(&report, Some(&mut context)).unwrap();
        assert_eq!(reporter.scanner.source(), second.contents());
        assert_eq!(reporter.scanned_unit.as_ref().map(|u| u.file_name.as_str()), Some("B.java"));

        reporter.report(&report, None).unwrap();
        assert!(reporter.scanner.source().is_empty());
        assert_eq!(reporter.scanned_unit, None);
    }

    #[test]
    fn test_abort_level_follows_entered_scope() {
        let unit = unit();
        let mut problems: Vec<Problem> = Vec::new();
        let mut context = ReferenceContext::new(&unit, &mut problems);
        let mut reporter = ProblemReporter::new(CompilerOptions::default());
        let method = MethodRef::method(TypeRef::parse("A"), "m", Vec::new());
        let report = Report::code_too_large(method, SourceNode::expression(35, 53));

        context.enter(ScopeKind::Type);
        assert_eq!(reporter.report(&report, Some(&mut context)).unwrap_err().level, AbortLevel::Type);
        context.enter(ScopeKind::Method);
        assert_eq!(context.scope(), ScopeKind::Method);
        assert_eq!(reporter.report(&report, Some(&mut context)).unwrap_err().level, AbortLevel::Method);
    }

    #[test]
    fn test_fatal_error_without_abort_bits_proceeds() {
        let unit = unit();
        let mut problems: Vec<Problem> = Vec::new();
        let mut context = ReferenceContext::new(&unit, &mut problems);
        let mut reporter = ProblemReporter::new(CompilerOptions::default());

        let report = Report::undefined_type(TypeRef::parse("Missing"), SourceNode::name(24, 28));
        reporter.report(&report, Some(&mut context)).unwrap();
        assert!(context.has_errors());
    }

    #[test]
    fn test_stop_on_first_error() {
        let unit = unit();
        let mut problems: Vec<Problem> = Vec::new();
        let mut context = ReferenceContext::new(&unit, &mut problems);
        let mut reporter =
            ProblemReporter::new(CompilerOptions::default()).with_policy(ErrorHandlingPolicy::StopOnFirstError);

        let report = Report::undefined_type(TypeRef::parse("Missing"), SourceNode::name(24, 28));
        let abort = reporter.report(&report, Some(&mut context)).unwrap_err();
        assert_eq!(abort.level, AbortLevel::Compilation);
        assert_eq!(abort.problem.message, "Missing cannot be resolved to a type");
    }

    #[test]
    fn test_ignore_all_errors_policy() {
        let unit = unit();
        let mut problems: Vec<Problem> = Vec::new();
        let mut context = ReferenceContext::new(&unit, &mut problems);
        let mut reporter =
            ProblemReporter::new(CompilerOptions::default()).with_policy(ErrorHandlingPolicy::IgnoreAllErrors);

        let report = Report::undefined_type(TypeRef::parse("Missing"), SourceNode::name(24, 28));
        reporter.report(&report, Some(&mut context)).unwrap();
        assert!(context.has_ignored_mandatory_errors());
        assert!(!context.has_errors());
        drop(context);
        assert!(problems.is_empty());
    }

    #[test]
    fn test_without_context() {
        let mut reporter = ProblemReporter::new(CompilerOptions::default());
        let warning = Report::unused_import(ImportRef::single("a.B"), SourceNode::expression(0, 1));
        assert!(reporter.report(&warning, None).is_ok());

        let error = Report::undefined_type(TypeRef::parse("Missing"), SourceNode::name(0, 6));
        let abort = reporter.report(&error, None).unwrap_err();
        assert_eq!(abort.level, AbortLevel::Compilation);
        assert_eq!(abort.problem.file_name, None);
    }

    #[test]
    fn test_suppressed_warning() {
        let unit = unit().with_suppression(SourceRange::new(24, 56), &["unused"]);
        let mut problems: Vec<Problem> = Vec::new();
        let mut context = ReferenceContext::new(&unit, &mut problems);
        let mut reporter = ProblemReporter::new(CompilerOptions::default());

        reporter
            .handle(
                ProblemId::LOCAL_VARIABLE_IS_NEVER_USED,
                ProblemArguments::same(vec!["x"]),
                SourceRange::new(50, 50),
                Some(&mut context),
            )
            .unwrap();
        drop(context);
        assert!(problems.is_empty());
    }

    #[rstest]
    #[case(false, 1)]
    #[case(true, 0)]
    fn test_suppressed_optional_error(#[case] suppress_optional_errors: bool, #[case] expected: usize) {
        let unit = unit().with_suppression(SourceRange::new(24, 56), &["unused"]);
        let mut problems: Vec<Problem> = Vec::new();
        let mut context = ReferenceContext::new(&unit, &mut problems);
        let mut options =
            CompilerOptions::default().with_severity(Irritant::UnusedLocalVariable, SeverityLevel::Error);
        options.suppress_optional_errors = suppress_optional_errors;
        let mut reporter = ProblemReporter::new(options);

        reporter
            .handle(
                ProblemId::LOCAL_VARIABLE_IS_NEVER_USED,
                ProblemArguments::same(vec!["x"]),
                SourceRange::new(50, 50),
                Some(&mut context),
            )
            .unwrap();
        drop(context);
        assert_eq!(problems.len(), expected);
    }

    #[rstest]
    #[case(Severity::ERROR | Severity::FATAL, ScopeKind::Method, None)]
    #[case(Severity::ERROR | Severity::ABORT_TYPE, ScopeKind::Method, Some(AbortLevel::Type))]
    #[case(Severity::ERROR | Severity::ABORT_METHOD, ScopeKind::CompilationUnit, Some(AbortLevel::CompilationUnit))]
    #[case(Severity::ERROR | Severity::ABORT, ScopeKind::Type, Some(AbortLevel::Type))]
    #[case(Severity::ERROR | Severity::ABORT_COMPILATION, ScopeKind::Method, Some(AbortLevel::Compilation))]
    fn test_abort_level(#[case] severity: Severity, #[case] scope: ScopeKind, #[case] expected: Option<AbortLevel>) {
        assert_eq!(abort_level(severity, scope), expected);
    }
}
