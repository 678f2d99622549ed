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

//! Irritant, severity and category resolution
//!
//! Classification is a pure function of the problem identifier and the
//! compiler options it was built with. It never fails: identifiers that are
//! not in the catalog classify as fatal internal errors.

use crate::category::Category;
use crate::irritant::{Irritant, irritant_of};
use crate::options::{CompilerOptions, JavaLevel, TagDescriptionMode};
use crate::problem::ProblemId;
use crate::severity::Severity;
use serde::Serialize;

/// Result of classifying one identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub id: ProblemId,
    pub irritant: Option<Irritant>,
    pub severity: Severity,
    pub category: Category,
}

/// Doc comment problems about references that cannot be resolved
const JAVADOC_REFERENCE_ERRORS: &[ProblemId] = &[
    ProblemId::JAVADOC_GENERIC_METHOD_TYPE_ARGUMENT_MISMATCH,
    ProblemId::JAVADOC_NON_GENERIC_METHOD,
    ProblemId::JAVADOC_INCORRECT_ARITY_FOR_PARAMETERIZED_METHOD,
    ProblemId::JAVADOC_PARAMETERIZED_METHOD_ARGUMENT_TYPE_MISMATCH,
    ProblemId::JAVADOC_TYPE_ARGUMENTS_FOR_RAW_GENERIC_METHOD,
    ProblemId::JAVADOC_GENERIC_CONSTRUCTOR_TYPE_ARGUMENT_MISMATCH,
    ProblemId::JAVADOC_NON_GENERIC_CONSTRUCTOR,
    ProblemId::JAVADOC_INCORRECT_ARITY_FOR_PARAMETERIZED_CONSTRUCTOR,
    ProblemId::JAVADOC_PARAMETERIZED_CONSTRUCTOR_ARGUMENT_TYPE_MISMATCH,
    ProblemId::JAVADOC_TYPE_ARGUMENTS_FOR_RAW_GENERIC_CONSTRUCTOR,
    ProblemId::JAVADOC_INVALID_PARAM_TAG_NAME,
    ProblemId::JAVADOC_DUPLICATE_PARAM_NAME,
    ProblemId::JAVADOC_INVALID_PARAM_NAME,
    ProblemId::JAVADOC_INVALID_THROWS_CLASS_NAME,
    ProblemId::JAVADOC_DUPLICATE_THROWS_CLASS_NAME,
    ProblemId::JAVADOC_UNDEFINED_CONSTRUCTOR,
    ProblemId::JAVADOC_UNDEFINED_FIELD,
    ProblemId::JAVADOC_UNDEFINED_METHOD,
    ProblemId::JAVADOC_UNDEFINED_TYPE,
    ProblemId::JAVADOC_AMBIGUOUS_CONSTRUCTOR,
    ProblemId::JAVADOC_AMBIGUOUS_FIELD,
    ProblemId::JAVADOC_AMBIGUOUS_METHOD,
    ProblemId::JAVADOC_AMBIGUOUS_METHOD_REFERENCE,
    ProblemId::JAVADOC_AMBIGUOUS_TYPE,
    ProblemId::JAVADOC_PARAMETER_MISMATCH,
    ProblemId::JAVADOC_NO_MESSAGE_SEND_ON_ARRAY_TYPE,
    ProblemId::JAVADOC_NO_MESSAGE_SEND_ON_BASE_TYPE,
    ProblemId::JAVADOC_INHERITED_FIELD_HIDES_ENCLOSING_NAME,
    ProblemId::JAVADOC_INHERITED_METHOD_HIDES_ENCLOSING_NAME,
    ProblemId::JAVADOC_INHERITED_NAME_HIDES_ENCLOSING_TYPE_NAME,
];

const JAVADOC_DEPRECATED_REFERENCES: &[ProblemId] = &[
    ProblemId::JAVADOC_USING_DEPRECATED_CONSTRUCTOR,
    ProblemId::JAVADOC_USING_DEPRECATED_FIELD,
    ProblemId::JAVADOC_USING_DEPRECATED_METHOD,
    ProblemId::JAVADOC_USING_DEPRECATED_TYPE,
];

const JAVADOC_NOT_VISIBLE_REFERENCES: &[ProblemId] = &[
    ProblemId::JAVADOC_HIDDEN_REFERENCE,
    ProblemId::JAVADOC_NOT_VISIBLE_CONSTRUCTOR,
    ProblemId::JAVADOC_NOT_VISIBLE_FIELD,
    ProblemId::JAVADOC_NOT_VISIBLE_METHOD,
    ProblemId::JAVADOC_NOT_VISIBLE_TYPE,
];

/// Methods whose bytecode cannot be emitted at all
const CODE_TOO_LARGE: &[ProblemId] = &[
    ProblemId::BYTECODE_EXCEEDS_64K_LIMIT,
    ProblemId::BYTECODE_EXCEEDS_64K_LIMIT_FOR_CLINIT,
    ProblemId::BYTECODE_EXCEEDS_64K_LIMIT_FOR_CONSTRUCTOR,
];

/// Resolves irritants, severities and categories against fixed options
#[derive(Debug, Clone)]
pub struct ProblemClassifier<'a> {
    options: &'a CompilerOptions,
}

impl<'a> ProblemClassifier<'a> {
    pub fn new(options: &'a CompilerOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &'a CompilerOptions {
        self.options
    }

    /// Irritant governing `id`, if it is configurable
    pub fn irritant_of(&self, id: ProblemId) -> Option<Irritant> {
        irritant_of(id)
    }

    /// Effective severity of `id`
    pub fn severity_of(&self, id: ProblemId) -> Severity {
        let options = self.options;

        if CODE_TOO_LARGE.contains(&id) {
            return Severity::ERROR | Severity::ABORT | Severity::FATAL;
        }
        if id == ProblemId::VARARGS_CONFLICT || id == ProblemId::TYPE_COLLIDES_WITH_PACKAGE {
            return Severity::WARNING;
        }
        if JAVADOC_REFERENCE_ERRORS.contains(&id) && !options.report_invalid_javadoc_tags {
            return Severity::IGNORE;
        }
        if JAVADOC_DEPRECATED_REFERENCES.contains(&id)
            && !(options.report_invalid_javadoc_tags
                && options.report_invalid_javadoc_tags_deprecated_ref)
        {
            return Severity::IGNORE;
        }
        if JAVADOC_NOT_VISIBLE_REFERENCES.contains(&id)
            && !(options.report_invalid_javadoc_tags
                && options.report_invalid_javadoc_tags_not_visible_ref)
        {
            return Severity::IGNORE;
        }
        if id == ProblemId::JAVADOC_EMPTY_RETURN_TAG
            && options.missing_javadoc_tag_description == TagDescriptionMode::NoTag
        {
            return Severity::IGNORE;
        }
        if id == ProblemId::JAVADOC_MISSING_TAG_DESCRIPTION
            && options.missing_javadoc_tag_description != TagDescriptionMode::AllStandardTags
        {
            return Severity::IGNORE;
        }
        if id == ProblemId::ILLEGAL_USE_OF_UNDERSCORE_AS_AN_IDENTIFIER
            && options.source_level < JavaLevel::JDK9
        {
            return Severity::WARNING;
        }
        if id == ProblemId::LAMBDA_SHAPE_COMPUTATION_ERROR {
            return Severity::INTERNAL_ERROR;
        }

        match irritant_of(id) {
            Some(_) if id.is_javadoc() && !options.doc_comment_support => Severity::IGNORE,
            Some(irritant) => options.get_severity(irritant),
            None => Severity::ERROR | Severity::FATAL,
        }
    }

    /// Presentation category of `id` raised with `severity`.
    ///
    /// Fatal problems skip the irritant step; irritants without a category
    /// fall through to the family bits of the identifier.
    pub fn category_of(&self, severity: Severity, id: ProblemId) -> Category {
        if !severity.is_fatal() {
            if let Some(category) = irritant_of(id).and_then(Irritant::category) {
                return category;
            }
        }
        Category::from_problem_id(id)
    }

    /// Irritant, severity and category in one pass
    pub fn classify(&self, id: ProblemId) -> Classification {
        let severity = self.severity_of(id);
        Classification {
            id,
            irritant: irritant_of(id),
            severity,
            category: self.category_of(severity, id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::severity::SeverityLevel;
    use rstest::rstest;

    #[test]
    fn test_unconfigurable_problems_are_fatal_errors() {
        let options = CompilerOptions::default();
        let classifier = ProblemClassifier::new(&options);
        assert_eq!(
            classifier.severity_of(ProblemId::TYPE_MISMATCH),
            Severity::ERROR | Severity::FATAL
        );
        assert_eq!(
            classifier.severity_of(ProblemId::new(0x0000_1234)),
            Severity::ERROR | Severity::FATAL
        );
    }

    #[rstest]
    #[case(ProblemId::BYTECODE_EXCEEDS_64K_LIMIT, CompilerOptions::default())]
    #[case(ProblemId::BYTECODE_EXCEEDS_64K_LIMIT_FOR_CLINIT, CompilerOptions::quiet())]
    #[case(ProblemId::BYTECODE_EXCEEDS_64K_LIMIT_FOR_CONSTRUCTOR, CompilerOptions::strict())]
    fn test_code_too_large_always_aborts(#[case] id: ProblemId, #[case] options: CompilerOptions) {
        let classification = ProblemClassifier::new(&options).classify(id);
        assert_eq!(classification.severity, Severity::ERROR | Severity::ABORT | Severity::FATAL);
        assert_eq!(classification.irritant, None);
        assert_eq!(classification.category, Category::Internal);
    }

    #[rstest]
    #[case(ProblemId::VARARGS_CONFLICT)]
    #[case(ProblemId::TYPE_COLLIDES_WITH_PACKAGE)]
    fn test_hard_wired_warnings(#[case] id: ProblemId) {
        let options = CompilerOptions::strict();
        assert_eq!(ProblemClassifier::new(&options).severity_of(id), Severity::WARNING);
    }

    #[test]
    fn test_javadoc_reference_gates() {
        let base = CompilerOptions::all_warnings();
        let mut options = base.clone();
        options.report_invalid_javadoc_tags = false;
        let classifier = ProblemClassifier::new(&options);
        assert_eq!(classifier.severity_of(ProblemId::JAVADOC_UNDEFINED_FIELD), Severity::IGNORE);

        let options = base.clone().with_invalid_javadoc_tags(false, false);
        let classifier = ProblemClassifier::new(&options);
        assert_eq!(
            classifier.severity_of(ProblemId::JAVADOC_UNDEFINED_FIELD),
            Severity::WARNING | Severity::OPTIONAL
        );
        assert_eq!(
            classifier.severity_of(ProblemId::JAVADOC_USING_DEPRECATED_TYPE),
            Severity::IGNORE
        );
        assert_eq!(classifier.severity_of(ProblemId::JAVADOC_HIDDEN_REFERENCE), Severity::IGNORE);

        let options = base.with_invalid_javadoc_tags(true, true);
        let classifier = ProblemClassifier::new(&options);
        assert_eq!(
            classifier.severity_of(ProblemId::JAVADOC_USING_DEPRECATED_TYPE),
            Severity::WARNING | Severity::OPTIONAL
        );
        assert_eq!(
            classifier.severity_of(ProblemId::JAVADOC_NOT_VISIBLE_METHOD),
            Severity::WARNING | Severity::OPTIONAL
        );
    }

    #[rstest]
    #[case(TagDescriptionMode::NoTag, true, true)]
    #[case(TagDescriptionMode::ReturnTag, false, true)]
    #[case(TagDescriptionMode::AllStandardTags, false, false)]
    fn test_tag_description_modes(
        #[case] mode: TagDescriptionMode,
        #[case] empty_return_ignored: bool,
        #[case] missing_description_ignored: bool,
    ) {
        let mut options = CompilerOptions::all_warnings();
        options.missing_javadoc_tag_description = mode;
        let classifier = ProblemClassifier::new(&options);
        assert_eq!(
            classifier.severity_of(ProblemId::JAVADOC_EMPTY_RETURN_TAG).is_ignore(),
            empty_return_ignored
        );
        assert_eq!(
            classifier
                .severity_of(ProblemId::JAVADOC_MISSING_TAG_DESCRIPTION)
                .is_ignore(),
            missing_description_ignored
        );
    }

    #[test]
    fn test_underscore_identifier_depends_on_source_level() {
        let old = CompilerOptions::default().with_source_level(JavaLevel::JDK1_8);
        assert_eq!(
            ProblemClassifier::new(&old).severity_of(ProblemId::ILLEGAL_USE_OF_UNDERSCORE_AS_AN_IDENTIFIER),
            Severity::WARNING
        );
        let new = CompilerOptions::default().with_source_level(JavaLevel::JDK11);
        assert_eq!(
            ProblemClassifier::new(&new).severity_of(ProblemId::ILLEGAL_USE_OF_UNDERSCORE_AS_AN_IDENTIFIER),
            Severity::ERROR | Severity::FATAL
        );
    }

    #[test]
    fn test_lambda_shape_is_internal_error() {
        let options = CompilerOptions::default();
        assert_eq!(
            ProblemClassifier::new(&options).severity_of(ProblemId::LAMBDA_SHAPE_COMPUTATION_ERROR),
            Severity::INTERNAL_ERROR
        );
    }

    #[test]
    fn test_doc_comment_support_disabled_ignores_javadoc() {
        let options = CompilerOptions::default()
            .with_severity(Irritant::InvalidJavadoc, SeverityLevel::Error)
            .with_severity(Irritant::MissingJavadocComments, SeverityLevel::Error)
            .with_doc_comment_support(false);
        let classifier = ProblemClassifier::new(&options);
        assert_eq!(classifier.severity_of(ProblemId::JAVADOC_MISSING), Severity::IGNORE);
        assert_eq!(classifier.severity_of(ProblemId::JAVADOC_INVALID_TAG), Severity::IGNORE);
    }

    #[test]
    fn test_fatal_skips_irritant_category() {
        let options = CompilerOptions::default();
        let classifier = ProblemClassifier::new(&options);
        let fatal = Severity::ERROR | Severity::FATAL;
        assert_eq!(
            classifier.category_of(Severity::WARNING, ProblemId::UNUSED_IMPORT),
            Category::UnnecessaryCode
        );
        assert_eq!(classifier.category_of(fatal, ProblemId::UNUSED_IMPORT), Category::Import);
    }

    #[test]
    fn test_irritant_without_category_falls_through() {
        let options = CompilerOptions::default();
        let classifier = ProblemClassifier::new(&options);
        assert_eq!(
            classifier.category_of(
                Severity::WARNING,
                ProblemId::UNUSED_TYPE_ARGUMENTS_FOR_METHOD_INVOCATION
            ),
            Category::Member
        );
    }

    #[test]
    fn test_classify_unused_import() {
        let options = CompilerOptions::default();
        let classification = ProblemClassifier::new(&options).classify(ProblemId::UNUSED_IMPORT);
        assert_eq!(classification.irritant, Some(Irritant::UnusedImport));
        assert_eq!(classification.severity, Severity::WARNING | Severity::OPTIONAL);
        assert!(!classification.severity.is_fatal());
        assert_eq!(classification.category, Category::UnnecessaryCode);
    }
}
