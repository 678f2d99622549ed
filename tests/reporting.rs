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

//! End to end reporting through a compilation unit and a collector

use java_problem_reporter::{
    AbortLevel, Category, CompilationUnit, CompilerOptions, ErrorHandlingPolicy, ImportRef,
    JavadocTarget, MethodRef, ProblemArguments, ProblemCollector, ProblemId, ProblemReporter,
    ReferenceContext, Report, ScopeKind, Severity, SourceNode, SourceRange, TypeRef, Visibility,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

const SOURCE: &str = "\
import java.util.List;
class Sample {
  Map<String, Integer> values;
  void run() { int unused; }
}
";

fn unit() -> CompilationUnit {
    CompilationUnit::new("Sample.java", SOURCE)
}

#[test]
fn type_mismatch_with_same_simple_names_uses_qualified_names() {
    let unit = unit();
    let mut collector = ProblemCollector::new();
    let mut context = ReferenceContext::new(&unit, &mut collector);
    let mut reporter = ProblemReporter::new(CompilerOptions::default());

    let report = Report::type_mismatch(
        TypeRef::parse("com.a.Foo"),
        TypeRef::parse("com.b.Foo"),
        SourceNode::expression(40, 45),
    );
    reporter.report(&report, Some(&mut context)).unwrap();
    assert!(context.has_errors());
    drop(context);

    let problem = &collector.problems()[0];
    assert_eq!(problem.id, ProblemId::TYPE_MISMATCH);
    assert_eq!(problem.message, "Type mismatch: cannot convert from com.a.Foo to com.b.Foo");
    assert_eq!(problem.severity, Severity::ERROR | Severity::FATAL);
    assert_eq!(problem.category, Category::Type);
    assert!(problem.mandatory);
}

#[test]
fn vararg_parameters_render_with_ellipsis() {
    let unit = unit();
    let mut collector = ProblemCollector::new();
    let mut context = ReferenceContext::new(&unit, &mut collector);
    let mut reporter = ProblemReporter::new(CompilerOptions::default());

    let method = MethodRef::method(
        TypeRef::parse("java.util.Formatter"),
        "format",
        vec![TypeRef::parse("java.lang.String"), TypeRef::primitive("int").array(1)],
    )
    .with_varargs();
    reporter
        .report(&Report::undefined_method(method, SourceNode::expression(40, 45)), Some(&mut context))
        .unwrap();
    drop(context);

    assert_eq!(
        collector.problems()[0].message,
        "The method format(String, int...) is undefined for the type Formatter"
    );
}

#[rstest]
#[case::defaults(CompilerOptions::default())]
#[case::strict(CompilerOptions::strict())]
#[case::quiet(CompilerOptions::quiet())]
fn code_too_large_ignores_the_options(#[case] options: CompilerOptions) {
    let unit = unit();
    let mut collector = ProblemCollector::new();
    let mut context = ReferenceContext::new(&unit, &mut collector);
    let mut reporter = ProblemReporter::new(options);

    let method = MethodRef::method(TypeRef::parse("Sample"), "run", Vec::new());
    let abort = reporter
        .report(&Report::code_too_large(method, SourceNode::expression(71, 96)), Some(&mut context))
        .unwrap_err();

    assert_eq!(abort.level, AbortLevel::CompilationUnit);
    assert_eq!(abort.problem.severity, Severity::ERROR | Severity::ABORT | Severity::FATAL);
    assert_eq!(abort.problem.message, "The code of method run() is exceeding the 65535 bytes limit");
    drop(context);
    assert_eq!(collector.len(), 1);
}

#[rstest]
#[case(ScopeKind::CompilationUnit, AbortLevel::CompilationUnit)]
#[case(ScopeKind::Type, AbortLevel::Type)]
#[case(ScopeKind::Method, AbortLevel::Method)]
fn abort_follows_the_enclosing_scope(#[case] scope: ScopeKind, #[case] expected: AbortLevel) {
    let unit = unit();
    let mut collector = ProblemCollector::new();
    let mut context = ReferenceContext::new(&unit, &mut collector).with_scope(scope);
    let mut reporter = ProblemReporter::new(CompilerOptions::default());

    let method = MethodRef::method(TypeRef::parse("Sample"), "run", Vec::new());
    let abort = reporter
        .report(&Report::code_too_large(method, SourceNode::expression(71, 96)), Some(&mut context))
        .unwrap_err();
    assert_eq!(abort.level, expected);
}

#[test]
fn missing_javadoc_comment_is_prefixed() {
    let unit = unit();
    let mut collector = ProblemCollector::new();
    let mut context = ReferenceContext::new(&unit, &mut collector);
    let mut reporter = ProblemReporter::new(CompilerOptions::all_warnings());

    let report = Report::JavadocMissing {
        target: JavadocTarget::new(Visibility::Public),
        node: SourceNode::name(29, 34),
    };
    reporter.report(&report, Some(&mut context)).unwrap();
    drop(context);

    let problem = &collector.problems()[0];
    assert_eq!(problem.message, "Javadoc: Missing comment for public declaration");
    assert_eq!(problem.severity, Severity::WARNING | Severity::OPTIONAL);
    assert_eq!(problem.category, Category::Javadoc);
    assert_eq!((problem.line, problem.column), (2, 7));
}

#[test]
fn suppressed_warnings_never_reach_the_collector() {
    let unit = unit().with_suppression(SourceRange::new(71, 98), &["unused"]);
    let mut collector = ProblemCollector::new();
    let mut context = ReferenceContext::new(&unit, &mut collector);
    let mut reporter = ProblemReporter::new(CompilerOptions::default());

    reporter
        .handle(
            ProblemId::LOCAL_VARIABLE_IS_NEVER_USED,
            ProblemArguments::same(vec!["unused"]),
            SourceRange::new(88, 93),
            Some(&mut context),
        )
        .unwrap();
    reporter
        .report(
            &Report::unused_import(ImportRef::single("java.util.List"), SourceNode::expression(7, 20)),
            Some(&mut context),
        )
        .unwrap();
    drop(context);

    assert_eq!(collector.len(), 1);
    assert_eq!(collector.problems()[0].id, ProblemId::UNUSED_IMPORT);
    assert!(!collector.has_errors());
}

#[test]
fn parameterized_type_span_reaches_the_closing_bracket() {
    let unit = unit();
    let mut collector = ProblemCollector::new();
    let mut context = ReferenceContext::new(&unit, &mut collector);
    let mut reporter = ProblemReporter::new(CompilerOptions::default());

    let report = Report::other(
        ProblemId::TYPE_ARGUMENT_MISMATCH,
        vec!["String", "Map", "K", "Comparable"],
        SourceNode::parameterized_type_reference(40, 42),
    );
    reporter.report(&report, Some(&mut context)).unwrap();
    drop(context);

    let problem = &collector.problems()[0];
    assert_eq!((problem.start, problem.end), (40, 59));
    assert_eq!((problem.line, problem.column), (3, 3));
    assert_eq!(
        problem.message,
        "Bound mismatch: The type String is not a valid substitute for the bounded parameter <K extends Comparable> of the type Map"
    );
}

#[test]
fn ignore_all_errors_keeps_warnings_out_too() {
    let unit = unit();
    let mut collector = ProblemCollector::new();
    let mut context = ReferenceContext::new(&unit, &mut collector);
    let mut reporter =
        ProblemReporter::new(CompilerOptions::default()).with_policy(ErrorHandlingPolicy::IgnoreAllErrors);

    reporter
        .report(
            &Report::unused_import(ImportRef::single("java.util.List"), SourceNode::expression(7, 20)),
            Some(&mut context),
        )
        .unwrap();
    assert!(!context.has_ignored_mandatory_errors());
    drop(context);
    assert!(collector.is_empty());
}
