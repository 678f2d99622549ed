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

//! Classification properties over the whole catalog

use java_problem_reporter::irritant::problems_of;
use java_problem_reporter::problem::catalog;
use java_problem_reporter::{
    Category, CompilerOptions, Irritant, ProblemClassifier, ProblemId, Severity, SeverityLevel,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[test]
fn irritant_problems_share_the_irritant_category() {
    let options = CompilerOptions::default();
    let classifier = ProblemClassifier::new(&options);
    let severity = Severity::WARNING | Severity::OPTIONAL;

    for irritant in Irritant::ALL {
        let Some(category) = irritant.category() else {
            continue;
        };
        for id in problems_of(*irritant) {
            assert_eq!(
                classifier.category_of(severity, id),
                category,
                "{id} governed by {irritant}"
            );
        }
    }
}

#[test]
fn classification_is_pure() {
    let options = CompilerOptions::all_warnings();
    let classifier = ProblemClassifier::new(&options);
    let again = ProblemClassifier::new(&options);

    for descriptor in catalog::all() {
        assert_eq!(classifier.classify(descriptor.id), again.classify(descriptor.id));
        assert_eq!(classifier.classify(descriptor.id), classifier.classify(descriptor.id));
    }
}

#[test]
fn javadoc_problems_are_ignored_without_doc_comment_support() {
    let options = CompilerOptions::all_warnings()
        .with_severity(Irritant::InvalidJavadoc, SeverityLevel::Error)
        .with_severity(Irritant::MissingJavadocComments, SeverityLevel::Error)
        .with_doc_comment_support(false);
    let classifier = ProblemClassifier::new(&options);

    for descriptor in catalog::all().iter().filter(|d| d.id.is_javadoc()) {
        assert_eq!(classifier.severity_of(descriptor.id), Severity::IGNORE, "{}", descriptor.name);
    }
}

#[test]
fn syntax_wins_over_import() {
    let options = CompilerOptions::default();
    let classifier = ProblemClassifier::new(&options);
    let id = ProblemId::new(ProblemId::SYNTAX | ProblemId::IMPORT_RELATED | 0x7_FFF0);

    let classification = classifier.classify(id);
    assert_eq!(classification.irritant, None);
    assert_eq!(classification.severity, Severity::ERROR | Severity::FATAL);
    assert_eq!(classification.category, Category::Syntax);
}

#[rstest]
#[case(ProblemId::UNUSED_IMPORT, Severity::WARNING | Severity::OPTIONAL, Category::UnnecessaryCode)]
#[case(ProblemId::UNDEFINED_TYPE, Severity::ERROR | Severity::FATAL, Category::Type)]
#[case(ProblemId::UNDEFINED_METHOD, Severity::ERROR | Severity::FATAL, Category::Member)]
#[case(ProblemId::IMPORT_NOT_FOUND, Severity::ERROR | Severity::FATAL, Category::Import)]
#[case(ProblemId::PARSING_ERROR, Severity::ERROR | Severity::FATAL, Category::Syntax)]
#[case(ProblemId::IS_CLASS_PATH_CORRECT, Severity::ERROR | Severity::FATAL, Category::BuildPath)]
#[case(ProblemId::VARARGS_CONFLICT, Severity::WARNING, Category::Member)]
#[case(ProblemId::BYTECODE_EXCEEDS_64K_LIMIT, Severity::ERROR | Severity::ABORT | Severity::FATAL, Category::Internal)]
#[case(ProblemId::LAMBDA_SHAPE_COMPUTATION_ERROR, Severity::INTERNAL_ERROR, Category::Internal)]
fn default_classification(#[case] id: ProblemId, #[case] severity: Severity, #[case] category: Category) {
    let options = CompilerOptions::default();
    let classification = ProblemClassifier::new(&options).classify(id);
    assert_eq!(classification.severity, severity, "{id}");
    assert_eq!(classification.category, category, "{id}");
}

#[test]
fn unknown_identifier_is_a_fatal_internal_error() {
    let options = CompilerOptions::default();
    let classification = ProblemClassifier::new(&options).classify(ProblemId::new(ProblemId::INTERNAL | 0x7_FFF1));
    assert_eq!(classification.severity, Severity::ERROR | Severity::FATAL);
    assert_eq!(classification.category, Category::Internal);
}

#[test]
fn fatal_optional_errors() {
    let options = CompilerOptions::default()
        .with_severity(Irritant::UnusedImport, SeverityLevel::Error)
        .with_severity(Irritant::UnusedWarningToken, SeverityLevel::Error)
        .with_fatal_optional_errors(true);
    let classifier = ProblemClassifier::new(&options);

    let unused = classifier.classify(ProblemId::UNUSED_IMPORT);
    assert_eq!(unused.severity, Severity::ERROR | Severity::OPTIONAL | Severity::FATAL);
    assert_eq!(unused.category, Category::Import);

    let token = classifier.severity_of(ProblemId::UNUSED_WARNING_TOKEN);
    assert_eq!(token, Severity::ERROR | Severity::OPTIONAL);
}
