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

//! Compiler options consulted while classifying problems
//!
//! Options can be built from defaults, adjusted with builder methods, or
//! loaded from settings in the `.prefs` properties format used by Java
//! tooling (`org.eclipse.jdt.core.compiler.problem.unusedImport=warning`)
//! or from a flat JSON object with the same keys.

use crate::error::{OptionsError, OptionsResult};
use crate::irritant::Irritant;
use crate::severity::{Severity, SeverityLevel};
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

const PROBLEM_PREFIX: &str = "org.eclipse.jdt.core.compiler.problem.";

pub const DOC_COMMENT_SUPPORT: &str = "org.eclipse.jdt.core.compiler.doc.comment.support";
pub const SOURCE: &str = "org.eclipse.jdt.core.compiler.source";
pub const COMPLIANCE: &str = "org.eclipse.jdt.core.compiler.compliance";
pub const INVALID_JAVADOC_TAGS: &str = "org.eclipse.jdt.core.compiler.problem.invalidJavadocTags";
pub const INVALID_JAVADOC_TAGS_DEPRECATED_REF: &str =
    "org.eclipse.jdt.core.compiler.problem.invalidJavadocTagsDeprecatedRef";
pub const INVALID_JAVADOC_TAGS_NOT_VISIBLE_REF: &str =
    "org.eclipse.jdt.core.compiler.problem.invalidJavadocTagsNotVisibleRef";
pub const INVALID_JAVADOC_TAGS_VISIBILITY: &str =
    "org.eclipse.jdt.core.compiler.problem.invalidJavadocTagsVisibility";
pub const MISSING_JAVADOC_TAG_DESCRIPTION: &str =
    "org.eclipse.jdt.core.compiler.problem.missingJavadocTagDescription";
pub const MISSING_JAVADOC_COMMENTS_VISIBILITY: &str =
    "org.eclipse.jdt.core.compiler.problem.missingJavadocCommentsVisibility";
pub const MISSING_JAVADOC_COMMENTS_OVERRIDING: &str =
    "org.eclipse.jdt.core.compiler.problem.missingJavadocCommentsOverriding";
pub const MISSING_JAVADOC_TAGS_VISIBILITY: &str =
    "org.eclipse.jdt.core.compiler.problem.missingJavadocTagsVisibility";
pub const MISSING_JAVADOC_TAGS_OVERRIDING: &str =
    "org.eclipse.jdt.core.compiler.problem.missingJavadocTagsOverriding";
pub const FATAL_OPTIONAL_ERROR: &str = "org.eclipse.jdt.core.compiler.problem.fatalOptionalError";
pub const SUPPRESS_WARNINGS: &str = "org.eclipse.jdt.core.compiler.problem.suppressWarnings";
pub const SUPPRESS_OPTIONAL_ERRORS: &str =
    "org.eclipse.jdt.core.compiler.problem.suppressOptionalErrors";
pub const NULL_ANALYSIS: &str = "org.eclipse.jdt.core.compiler.annotation.nullanalysis";
pub const NONNULL_ANNOTATION: &str = "org.eclipse.jdt.core.compiler.annotation.nonnull";
pub const NULLABLE_ANNOTATION: &str = "org.eclipse.jdt.core.compiler.annotation.nullable";

/// Member visibility, ordered from most to least visible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Default,
    Private,
}

impl Visibility {
    pub fn as_setting(self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Protected => "protected",
            Visibility::Default => "default",
            Visibility::Private => "private",
        }
    }

    pub fn from_setting(value: &str) -> Option<Self> {
        match value.trim() {
            "public" => Some(Visibility::Public),
            "protected" => Some(Visibility::Protected),
            "default" => Some(Visibility::Default),
            "private" => Some(Visibility::Private),
            _ => None,
        }
    }

    /// Whether a member with `visibility` falls within this threshold
    pub fn includes(self, visibility: Visibility) -> bool {
        visibility <= self
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_setting())
    }
}

/// Which Javadoc tags require a description
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TagDescriptionMode {
    NoTag,
    #[default]
    ReturnTag,
    AllStandardTags,
}

impl TagDescriptionMode {
    pub fn as_setting(self) -> &'static str {
        match self {
            TagDescriptionMode::NoTag => "no_tag",
            TagDescriptionMode::ReturnTag => "return_tag",
            TagDescriptionMode::AllStandardTags => "all_standard_tags",
        }
    }

    pub fn from_setting(value: &str) -> Option<Self> {
        match value.trim() {
            "no_tag" => Some(TagDescriptionMode::NoTag),
            "return_tag" => Some(TagDescriptionMode::ReturnTag),
            "all_standard_tags" => Some(TagDescriptionMode::AllStandardTags),
            _ => None,
        }
    }
}

/// Java language level, stored as its major release number (`1.8` is 8)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct JavaLevel(u32);

impl JavaLevel {
    pub const JDK1_3: JavaLevel = JavaLevel(3);
    pub const JDK1_4: JavaLevel = JavaLevel(4);
    pub const JDK1_5: JavaLevel = JavaLevel(5);
    pub const JDK1_7: JavaLevel = JavaLevel(7);
    pub const JDK1_8: JavaLevel = JavaLevel(8);
    pub const JDK9: JavaLevel = JavaLevel(9);
    pub const JDK11: JavaLevel = JavaLevel(11);
    pub const JDK17: JavaLevel = JavaLevel(17);
    pub const JDK21: JavaLevel = JavaLevel(21);

    const LATEST: u32 = 25;

    pub const fn major(self) -> u32 {
        self.0
    }

    /// Parse `1.1` through `1.8` or a plain release number from 9 on
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        let major = match value.strip_prefix("1.") {
            Some(minor) => match minor.parse::<u32>().ok()? {
                m @ 1..=8 => m,
                _ => return None,
            },
            None => match value.parse::<u32>().ok()? {
                m @ 9..=Self::LATEST => m,
                _ => return None,
            },
        };
        Some(JavaLevel(major))
    }
}

impl Default for JavaLevel {
    fn default() -> Self {
        JavaLevel::JDK1_8
    }
}

impl fmt::Display for JavaLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 <= 8 {
            write!(f, "1.{}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Settings that decide how problems are classified and reported
#[derive(Debug, Clone, PartialEq)]
pub struct CompilerOptions {
    severities: FxHashMap<Irritant, SeverityLevel>,

    /// Doc comments are analyzed at all
    pub doc_comment_support: bool,
    pub report_invalid_javadoc_tags: bool,
    pub report_invalid_javadoc_tags_deprecated_ref: bool,
    pub report_invalid_javadoc_tags_not_visible_ref: bool,
    pub invalid_javadoc_tags_visibility: Visibility,
    pub missing_javadoc_tag_description: TagDescriptionMode,
    pub missing_javadoc_comments_visibility: Visibility,
    pub missing_javadoc_comments_overriding: bool,
    pub missing_javadoc_tags_visibility: Visibility,
    pub missing_javadoc_tags_overriding: bool,

    pub source_level: JavaLevel,
    pub compliance_level: JavaLevel,

    /// Optional errors also carry the fatal bit
    pub treat_optional_error_as_fatal: bool,
    /// `@SuppressWarnings` is honored
    pub suppress_warnings: bool,
    /// `@SuppressWarnings` also silences optional errors
    pub suppress_optional_errors: bool,

    pub null_analysis_enabled: bool,
    pub nonnull_annotation_name: String,
    pub nullable_annotation_name: String,
}

impl CompilerOptions {
    /// Options with the compiler's default severities
    pub fn new() -> Self {
        Self::default()
    }

    /// Every irritant reported as a warning, doc comments analyzed
    pub fn all_warnings() -> Self {
        let mut options = Self::default().with_doc_comment_support(true);
        for irritant in Irritant::ALL {
            options.set_severity(*irritant, SeverityLevel::Warning);
        }
        options.report_invalid_javadoc_tags = true;
        options
    }

    /// Default severities with every warning promoted to a fatal error
    pub fn strict() -> Self {
        let mut options = Self::default();
        for irritant in Irritant::ALL {
            if options.severity_level(*irritant) == SeverityLevel::Warning {
                options.set_severity(*irritant, SeverityLevel::Error);
            }
        }
        options.treat_optional_error_as_fatal = true;
        options
    }

    /// Every irritant ignored; only mandatory problems remain
    pub fn quiet() -> Self {
        let mut options = Self::default();
        for irritant in Irritant::ALL {
            options.set_severity(*irritant, SeverityLevel::Ignore);
        }
        options
    }

    /// Configured level of an irritant
    pub fn severity_level(&self, irritant: Irritant) -> SeverityLevel {
        self.severities
            .get(&irritant)
            .copied()
            .unwrap_or_else(|| irritant.default_level())
    }

    pub fn set_severity(&mut self, irritant: Irritant, level: SeverityLevel) {
        self.severities.insert(irritant, level);
    }

    pub fn with_severity(mut self, irritant: Irritant, level: SeverityLevel) -> Self {
        self.set_severity(irritant, level);
        self
    }

    pub fn with_doc_comment_support(mut self, enabled: bool) -> Self {
        self.doc_comment_support = enabled;
        self
    }

    pub fn with_invalid_javadoc_tags(mut self, deprecated_ref: bool, not_visible_ref: bool) -> Self {
        self.report_invalid_javadoc_tags = true;
        self.report_invalid_javadoc_tags_deprecated_ref = deprecated_ref;
        self.report_invalid_javadoc_tags_not_visible_ref = not_visible_ref;
        self
    }

    pub fn with_source_level(mut self, level: JavaLevel) -> Self {
        self.source_level = level;
        self
    }

    pub fn with_null_analysis(mut self, enabled: bool) -> Self {
        self.null_analysis_enabled = enabled;
        self
    }

    pub fn with_fatal_optional_errors(mut self, enabled: bool) -> Self {
        self.treat_optional_error_as_fatal = enabled;
        self
    }

    /// Severity bits for a problem governed by `irritant`
    pub fn get_severity(&self, irritant: Irritant) -> Severity {
        match self.severity_level(irritant) {
            SeverityLevel::Error => {
                let mut severity = Severity::ERROR | Severity::OPTIONAL;
                if self.treat_optional_error_as_fatal && irritant != Irritant::UnusedWarningToken {
                    severity |= Severity::FATAL;
                }
                severity
            }
            SeverityLevel::Warning => Severity::WARNING | Severity::OPTIONAL,
            SeverityLevel::Info => Severity::INFO | Severity::OPTIONAL,
            SeverityLevel::Ignore => Severity::IGNORE,
        }
    }

    /// Simple name of the non-null annotation (`NonNull`)
    pub fn nonnull_simple_name(&self) -> &str {
        simple_name(&self.nonnull_annotation_name)
    }

    pub fn nullable_simple_name(&self) -> &str {
        simple_name(&self.nullable_annotation_name)
    }

    /// Build options from `key -> value` settings applied over the defaults
    pub fn from_settings<I, K, V>(settings: I) -> OptionsResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut options = Self::default();
        for (key, value) in settings {
            options.apply_setting(key.as_ref(), value.as_ref())?;
        }
        Ok(options)
    }

    /// Apply a single setting
    pub fn apply_setting(&mut self, key: &str, value: &str) -> OptionsResult<()> {
        let key = key.trim();
        let value = value.trim();
        match key {
            DOC_COMMENT_SUPPORT => self.doc_comment_support = parse_flag(key, value)?,
            SOURCE => self.source_level = parse_level(key, value)?,
            COMPLIANCE => self.compliance_level = parse_level(key, value)?,
            INVALID_JAVADOC_TAGS => self.report_invalid_javadoc_tags = parse_flag(key, value)?,
            INVALID_JAVADOC_TAGS_DEPRECATED_REF => {
                self.report_invalid_javadoc_tags_deprecated_ref = parse_flag(key, value)?
            }
            INVALID_JAVADOC_TAGS_NOT_VISIBLE_REF => {
                self.report_invalid_javadoc_tags_not_visible_ref = parse_flag(key, value)?
            }
            INVALID_JAVADOC_TAGS_VISIBILITY => {
                self.invalid_javadoc_tags_visibility = parse_visibility(key, value)?
            }
            MISSING_JAVADOC_TAG_DESCRIPTION => {
                self.missing_javadoc_tag_description = TagDescriptionMode::from_setting(value)
                    .ok_or_else(|| invalid_value(key, value))?
            }
            MISSING_JAVADOC_COMMENTS_VISIBILITY => {
                self.missing_javadoc_comments_visibility = parse_visibility(key, value)?
            }
            MISSING_JAVADOC_COMMENTS_OVERRIDING => {
                self.missing_javadoc_comments_overriding = parse_flag(key, value)?
            }
            MISSING_JAVADOC_TAGS_VISIBILITY => {
                self.missing_javadoc_tags_visibility = parse_visibility(key, value)?
            }
            MISSING_JAVADOC_TAGS_OVERRIDING => {
                self.missing_javadoc_tags_overriding = parse_flag(key, value)?
            }
            FATAL_OPTIONAL_ERROR => self.treat_optional_error_as_fatal = parse_flag(key, value)?,
            SUPPRESS_WARNINGS => self.suppress_warnings = parse_flag(key, value)?,
            SUPPRESS_OPTIONAL_ERRORS => self.suppress_optional_errors = parse_flag(key, value)?,
            NULL_ANALYSIS => self.null_analysis_enabled = parse_flag(key, value)?,
            NONNULL_ANNOTATION => self.nonnull_annotation_name = value.to_string(),
            NULLABLE_ANNOTATION => self.nullable_annotation_name = value.to_string(),
            _ => match Irritant::ALL.iter().find(|i| i.option_key() == key) {
                Some(irritant) => {
                    let level = SeverityLevel::from_setting(value).ok_or_else(|| {
                        OptionsError::InvalidSeverity {
                            key: key.to_string(),
                            value: value.to_string(),
                        }
                    })?;
                    self.set_severity(*irritant, level);
                }
                None if key.starts_with(PROBLEM_PREFIX) => {
                    log::warn!("Unknown problem setting '{key}' ignored");
                }
                None => log::debug!("Setting '{key}' does not affect problem reporting"),
            },
        }
        Ok(())
    }

    /// Parse the `.prefs` properties format: `key=value` lines, `#` comments
    pub fn from_prefs_str(text: &str) -> OptionsResult<Self> {
        let mut settings = Vec::new();
        for (index, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }
            match line.split_once(['=', ':']) {
                Some((key, value)) if !key.trim().is_empty() => {
                    settings.push((key.trim().to_string(), value.trim().to_string()));
                }
                _ => {
                    return Err(OptionsError::Malformed {
                        line: index + 1,
                        content: line.to_string(),
                    });
                }
            }
        }
        Self::from_settings(settings)
    }

    /// Parse a flat JSON object; values are strings or booleans
    pub fn from_json_str(text: &str) -> OptionsResult<Self> {
        let object: BTreeMap<String, serde_json::Value> = serde_json::from_str(text)?;
        let mut settings = Vec::with_capacity(object.len());
        for (key, value) in object {
            let value = match value {
                serde_json::Value::String(s) => s,
                serde_json::Value::Bool(true) => "enabled".to_string(),
                serde_json::Value::Bool(false) => "disabled".to_string(),
                other => return Err(invalid_value(&key, &other.to_string())),
            };
            settings.push((key, value));
        }
        Self::from_settings(settings)
    }

    /// Load a settings file, choosing the format from its extension
    pub fn from_file(path: impl AsRef<Path>) -> OptionsResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        log::debug!("Loading compiler settings from {}", path.display());
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_str(&text),
            _ => Self::from_prefs_str(&text),
        }
    }

    /// Effective settings, one entry per known key
    pub fn to_settings(&self) -> BTreeMap<String, String> {
        let flag = |b: bool| if b { "enabled" } else { "disabled" }.to_string();
        let mut settings = BTreeMap::new();
        for irritant in Irritant::ALL {
            settings.insert(
                irritant.option_key().to_string(),
                self.severity_level(*irritant).as_setting().to_string(),
            );
        }
        let entries = [
            (DOC_COMMENT_SUPPORT, flag(self.doc_comment_support)),
            (SOURCE, self.source_level.to_string()),
            (COMPLIANCE, self.compliance_level.to_string()),
            (INVALID_JAVADOC_TAGS, flag(self.report_invalid_javadoc_tags)),
            (INVALID_JAVADOC_TAGS_DEPRECATED_REF, flag(self.report_invalid_javadoc_tags_deprecated_ref)),
            (INVALID_JAVADOC_TAGS_NOT_VISIBLE_REF, flag(self.report_invalid_javadoc_tags_not_visible_ref)),
            (INVALID_JAVADOC_TAGS_VISIBILITY, self.invalid_javadoc_tags_visibility.to_string()),
            (MISSING_JAVADOC_TAG_DESCRIPTION, self.missing_javadoc_tag_description.as_setting().to_string()),
            (MISSING_JAVADOC_COMMENTS_VISIBILITY, self.missing_javadoc_comments_visibility.to_string()),
            (MISSING_JAVADOC_COMMENTS_OVERRIDING, flag(self.missing_javadoc_comments_overriding)),
            (MISSING_JAVADOC_TAGS_VISIBILITY, self.missing_javadoc_tags_visibility.to_string()),
            (MISSING_JAVADOC_TAGS_OVERRIDING, flag(self.missing_javadoc_tags_overriding)),
            (FATAL_OPTIONAL_ERROR, flag(self.treat_optional_error_as_fatal)),
            (SUPPRESS_WARNINGS, flag(self.suppress_warnings)),
            (SUPPRESS_OPTIONAL_ERRORS, flag(self.suppress_optional_errors)),
            (NULL_ANALYSIS, flag(self.null_analysis_enabled)),
            (NONNULL_ANNOTATION, self.nonnull_annotation_name.clone()),
            (NULLABLE_ANNOTATION, self.nullable_annotation_name.clone()),
        ];
        for (key, value) in entries {
            settings.insert(key.to_string(), value);
        }
        settings
    }
}

impl Default for CompilerOptions {
    fn default() -> Self {
        Self {
            severities: FxHashMap::default(),
            doc_comment_support: false,
            report_invalid_javadoc_tags: false,
            report_invalid_javadoc_tags_deprecated_ref: false,
            report_invalid_javadoc_tags_not_visible_ref: false,
            invalid_javadoc_tags_visibility: Visibility::Public,
            missing_javadoc_tag_description: TagDescriptionMode::ReturnTag,
            missing_javadoc_comments_visibility: Visibility::Public,
            missing_javadoc_comments_overriding: false,
            missing_javadoc_tags_visibility: Visibility::Public,
            missing_javadoc_tags_overriding: false,
            source_level: JavaLevel::default(),
            compliance_level: JavaLevel::default(),
            treat_optional_error_as_fatal: false,
            suppress_warnings: true,
            suppress_optional_errors: false,
            null_analysis_enabled: false,
            nonnull_annotation_name: "org.eclipse.jdt.annotation.NonNull".to_string(),
            nullable_annotation_name: "org.eclipse.jdt.annotation.Nullable".to_string(),
        }
    }
}

fn simple_name(qualified: &str) -> &str {
    qualified.rsplit('.').next().unwrap_or(qualified)
}

fn invalid_value(key: &str, value: &str) -> OptionsError {
    OptionsError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    }
}

fn parse_flag(key: &str, value: &str) -> OptionsResult<bool> {
    match value {
        "enabled" | "true" => Ok(true),
        "disabled" | "false" => Ok(false),
        _ => Err(invalid_value(key, value)),
    }
}

fn parse_visibility(key: &str, value: &str) -> OptionsResult<Visibility> {
    Visibility::from_setting(value).ok_or_else(|| OptionsError::InvalidVisibility {
        key: key.to_string(),
        value: value.to_string(),
    })
}

fn parse_level(key: &str, value: &str) -> OptionsResult<JavaLevel> {
    JavaLevel::parse(value).ok_or_else(|| OptionsError::InvalidLevel {
        key: key.to_string(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_defaults() {
        let options = CompilerOptions::default();
        assert!(!options.doc_comment_support);
        assert_eq!(options.severity_level(Irritant::UnusedImport), SeverityLevel::Warning);
        assert_eq!(options.severity_level(Irritant::ForbiddenReference), SeverityLevel::Error);
        assert_eq!(options.severity_level(Irritant::UnusedArgument), SeverityLevel::Ignore);
        assert_eq!(options.missing_javadoc_tag_description, TagDescriptionMode::ReturnTag);
        assert!(options.suppress_warnings);
    }

    #[rstest]
    #[case(SeverityLevel::Error, false, Severity::ERROR | Severity::OPTIONAL)]
    #[case(SeverityLevel::Error, true, Severity::ERROR | Severity::OPTIONAL | Severity::FATAL)]
    #[case(SeverityLevel::Warning, true, Severity::WARNING | Severity::OPTIONAL)]
    #[case(SeverityLevel::Info, false, Severity::INFO | Severity::OPTIONAL)]
    #[case(SeverityLevel::Ignore, false, Severity::IGNORE)]
    fn test_get_severity(
        #[case] level: SeverityLevel,
        #[case] fatal: bool,
        #[case] expected: Severity,
    ) {
        let options = CompilerOptions::default()
            .with_severity(Irritant::DeadCode, level)
            .with_fatal_optional_errors(fatal);
        assert_eq!(options.get_severity(Irritant::DeadCode), expected);
    }

    #[test]
    fn test_unused_warning_token_is_never_fatal() {
        let options = CompilerOptions::default()
            .with_severity(Irritant::UnusedWarningToken, SeverityLevel::Error)
            .with_fatal_optional_errors(true);
        assert_eq!(
            options.get_severity(Irritant::UnusedWarningToken),
            Severity::ERROR | Severity::OPTIONAL
        );
    }

    #[test]
    fn test_presets() {
        let strict = CompilerOptions::strict();
        assert_eq!(strict.severity_level(Irritant::UnusedImport), SeverityLevel::Error);
        assert_eq!(strict.severity_level(Irritant::UnusedArgument), SeverityLevel::Ignore);
        assert!(strict.treat_optional_error_as_fatal);

        let quiet = CompilerOptions::quiet();
        assert!(Irritant::ALL.iter().all(|i| quiet.severity_level(*i) == SeverityLevel::Ignore));

        let loud = CompilerOptions::all_warnings();
        assert_eq!(loud.severity_level(Irritant::ForbiddenReference), SeverityLevel::Warning);
        assert!(loud.doc_comment_support);
    }

    #[test]
    fn test_from_prefs() {
        let prefs = "# project settings
eclipse.preferences.version=1
org.eclipse.jdt.core.compiler.problem.unusedImport=error
org.eclipse.jdt.core.compiler.doc.comment.support=enabled
org.eclipse.jdt.core.compiler.source=1.7
org.eclipse.jdt.core.compiler.problem.missingJavadocTagDescription=all_standard_tags
org.eclipse.jdt.core.compiler.problem.invalidJavadocTagsVisibility=private
";
        let options = CompilerOptions::from_prefs_str(prefs).unwrap();
        assert_eq!(options.severity_level(Irritant::UnusedImport), SeverityLevel::Error);
        assert!(options.doc_comment_support);
        assert_eq!(options.source_level, JavaLevel::JDK1_7);
        assert_eq!(
            options.missing_javadoc_tag_description,
            TagDescriptionMode::AllStandardTags
        );
        assert_eq!(options.invalid_javadoc_tags_visibility, Visibility::Private);
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "org.eclipse.jdt.core.compiler.problem.deadCode": "ignore",
            "org.eclipse.jdt.core.compiler.annotation.nullanalysis": true
        }"#;
        let options = CompilerOptions::from_json_str(json).unwrap();
        assert_eq!(options.severity_level(Irritant::DeadCode), SeverityLevel::Ignore);
        assert!(options.null_analysis_enabled);
    }

    #[test]
    fn test_invalid_settings() {
        let err = CompilerOptions::from_settings([(
            "org.eclipse.jdt.core.compiler.problem.unusedImport",
            "loud",
        )])
        .unwrap_err();
        assert!(matches!(err, OptionsError::InvalidSeverity { .. }));

        let err = CompilerOptions::from_settings([(SOURCE, "1.9")]).unwrap_err();
        assert!(matches!(err, OptionsError::InvalidLevel { .. }));

        let err = CompilerOptions::from_prefs_str("=warning").unwrap_err();
        assert!(matches!(err, OptionsError::Malformed { line: 1, .. }));
    }

    #[test]
    fn test_settings_round_trip() {
        let options = CompilerOptions::strict().with_doc_comment_support(true);
        let reloaded = CompilerOptions::from_settings(options.to_settings()).unwrap();
        for irritant in Irritant::ALL {
            assert_eq!(reloaded.severity_level(*irritant), options.severity_level(*irritant));
        }
        assert!(reloaded.doc_comment_support);
        assert!(reloaded.treat_optional_error_as_fatal);
    }

    #[rstest]
    #[case("1.8", Some(8))]
    #[case("1.4", Some(4))]
    #[case("11", Some(11))]
    #[case("1.9", None)]
    #[case("8", None)]
    fn test_java_level(#[case] value: &str, #[case] expected: Option<u32>) {
        assert_eq!(JavaLevel::parse(value).map(JavaLevel::major), expected);
    }

    #[test]
    fn test_visibility_threshold() {
        assert!(Visibility::Protected.includes(Visibility::Public));
        assert!(!Visibility::Public.includes(Visibility::Protected));
        assert!(Visibility::Private.includes(Visibility::Default));
    }
}
