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

//! Loading compiler settings from the supported formats

use java_problem_reporter::options::{DOC_COMMENT_SUPPORT, SOURCE};
use java_problem_reporter::{
    CompilerOptions, Irritant, JavaLevel, OptionsError, ProblemClassifier, ProblemId, Severity,
    SeverityLevel, Visibility,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

const PREFS: &str = "\
# project settings
eclipse.preferences.version=1
org.eclipse.jdt.core.compiler.source=1.7
org.eclipse.jdt.core.compiler.doc.comment.support=enabled
org.eclipse.jdt.core.compiler.problem.unusedImport=error
org.eclipse.jdt.core.compiler.problem.missingJavadocComments=warning
org.eclipse.jdt.core.compiler.problem.missingJavadocCommentsVisibility=protected
";

#[test]
fn prefs_file_overrides_defaults() {
    let options = CompilerOptions::from_prefs_str(PREFS).unwrap();

    assert_eq!(options.source_level, JavaLevel::JDK1_7);
    assert!(options.doc_comment_support);
    assert_eq!(options.severity_level(Irritant::UnusedImport), SeverityLevel::Error);
    assert_eq!(options.severity_level(Irritant::MissingJavadocComments), SeverityLevel::Warning);
    assert_eq!(options.missing_javadoc_comments_visibility, Visibility::Protected);
    assert_eq!(options.severity_level(Irritant::UnusedLocalVariable), SeverityLevel::Warning);

    let classifier = ProblemClassifier::new(&options);
    assert_eq!(
        classifier.severity_of(ProblemId::UNUSED_IMPORT),
        Severity::ERROR | Severity::OPTIONAL
    );
}

#[test]
fn json_settings_accept_booleans() {
    let json = r#"{
        "org.eclipse.jdt.core.compiler.doc.comment.support": true,
        "org.eclipse.jdt.core.compiler.problem.unusedLocal": "ignore",
        "org.eclipse.jdt.core.compiler.source": "17"
    }"#;
    let options = CompilerOptions::from_json_str(json).unwrap();

    assert!(options.doc_comment_support);
    assert_eq!(options.source_level, JavaLevel::JDK17);
    assert_eq!(options.severity_level(Irritant::UnusedLocalVariable), SeverityLevel::Ignore);
}

#[test]
fn json_settings_reject_numbers() {
    let json = r#"{ "org.eclipse.jdt.core.compiler.problem.unusedLocal": 3 }"#;
    assert!(matches!(
        CompilerOptions::from_json_str(json),
        Err(OptionsError::InvalidValue { .. })
    ));
    assert!(matches!(
        CompilerOptions::from_json_str("[1, 2]"),
        Err(OptionsError::Json(_))
    ));
}

#[test]
fn malformed_line_is_reported_with_its_number() {
    let text = "org.eclipse.jdt.core.compiler.source=11\n=error\n";
    match CompilerOptions::from_prefs_str(text) {
        Err(OptionsError::Malformed { line, content }) => {
            assert_eq!(line, 2);
            assert_eq!(content, "=error");
        }
        other => panic!("expected a malformed line error, got {other:?}"),
    }
}

#[rstest]
#[case("org.eclipse.jdt.core.compiler.problem.unusedImport", "loud")]
#[case("org.eclipse.jdt.core.compiler.problem.deprecation", "")]
fn unknown_severity_is_rejected(#[case] key: &str, #[case] value: &str) {
    let error = CompilerOptions::from_settings([(key, value)]).unwrap_err();
    assert!(matches!(error, OptionsError::InvalidSeverity { .. }));
    assert!(error.to_string().contains(key));
}

#[test]
fn unrelated_keys_are_ignored() {
    let options = CompilerOptions::from_settings([
        ("org.eclipse.jdt.core.formatter.tabulation.char", "space"),
        ("org.eclipse.jdt.core.compiler.problem.notYetKnown", "error"),
    ])
    .unwrap();
    assert_eq!(options, CompilerOptions::default());
}

#[test]
fn settings_survive_a_reload() {
    let options = CompilerOptions::strict().with_doc_comment_support(true);
    let settings = options.to_settings();

    assert_eq!(settings[DOC_COMMENT_SUPPORT], "enabled");
    assert_eq!(settings[SOURCE], options.source_level.to_string());
    assert_eq!(settings[Irritant::UnusedImport.option_key()], "error");

    let reloaded = CompilerOptions::from_settings(settings.clone()).unwrap();
    assert_eq!(reloaded.to_settings(), settings);
    assert_eq!(
        reloaded.get_severity(Irritant::UnusedImport),
        Severity::ERROR | Severity::OPTIONAL | Severity::FATAL
    );
}
