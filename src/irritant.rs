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

//! Irritants: the user configurable switches that govern optional problems
//!
//! Each irritant carries its settings key, its default level, the category
//! it groups under and the `@SuppressWarnings` token that silences it. The
//! problem to irritant table maps many identifiers onto one irritant.

use crate::category::Category;
use crate::problem::ProblemId;
use crate::severity::SeverityLevel;
use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;
use std::fmt;

macro_rules! problem_key {
    ($name:literal) => {
        concat!("org.eclipse.jdt.core.compiler.problem.", $name)
    };
}

macro_rules! irritants {
    ($($variant:ident => $key:expr, $category:expr, $level:ident, $token:expr;)*) => {
        /// User configurable warning or error switch
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[derive(serde::Serialize, serde::Deserialize)]
        pub enum Irritant {
            $($variant,)*
        }

        impl Irritant {
            /// Every irritant in declaration order
            pub const ALL: &'static [Irritant] = &[$(Irritant::$variant,)*];

            /// Settings key controlling this irritant
            pub const fn option_key(self) -> &'static str {
                match self {
                    $(Irritant::$variant => $key,)*
                }
            }

            /// Category used for problems governed by this irritant
            pub const fn category(self) -> Option<Category> {
                match self {
                    $(Irritant::$variant => $category,)*
                }
            }

            /// Level used when no setting overrides it
            pub const fn default_level(self) -> SeverityLevel {
                match self {
                    $(Irritant::$variant => SeverityLevel::$level,)*
                }
            }

            /// `@SuppressWarnings` token silencing this irritant
            pub const fn warning_token(self) -> Option<&'static str> {
                match self {
                    $(Irritant::$variant => $token,)*
                }
            }

            pub const fn name(self) -> &'static str {
                match self {
                    $(Irritant::$variant => stringify!($variant),)*
                }
            }
        }
    };
}

use Category::*;

irritants! {
    MethodWithConstructorName => problem_key!("methodWithConstructorName"), Some(CodeStyle), Warning, None;
    OverriddenPackageDefaultMethod => problem_key!("overridingPackageDefaultMethod"), Some(NameShadowingConflict), Warning, None;
    UsingDeprecatedAPI => problem_key!("deprecation"), Some(Deprecation), Warning, Some("deprecation");
    MaskedCatchBlock => problem_key!("hiddenCatchBlock"), Some(PotentialProgrammingProblem), Warning, Some("hiding");
    UnusedLocalVariable => problem_key!("unusedLocal"), Some(UnnecessaryCode), Warning, Some("unused");
    UnusedArgument => problem_key!("unusedParameter"), Some(UnnecessaryCode), Ignore, Some("unused");
    UnusedExceptionParameter => problem_key!("unusedExceptionParameter"), Some(UnnecessaryCode), Ignore, Some("unused");
    NoImplicitStringConversion => problem_key!("noImplicitStringConversion"), Some(PotentialProgrammingProblem), Warning, None;
    AccessEmulation => problem_key!("syntheticAccessEmulation"), Some(CodeStyle), Ignore, Some("synthetic-access");
    NonExternalizedString => problem_key!("nonExternalizedStringLiteral"), Some(Nls), Ignore, Some("nls");
    AssertUsedAsAnIdentifier => problem_key!("assertIdentifier"), Some(CodeStyle), Warning, None;
    EnumUsedAsAnIdentifier => problem_key!("enumIdentifier"), Some(CodeStyle), Warning, None;
    UnusedImport => problem_key!("unusedImport"), Some(UnnecessaryCode), Warning, Some("unused");
    NonStaticAccessToStatic => problem_key!("staticAccessReceiver"), Some(CodeStyle), Warning, Some("static-access");
    Tasks => problem_key!("tasks"), Some(Unspecified), Warning, None;
    NoEffectAssignment => problem_key!("noEffectAssignment"), Some(PotentialProgrammingProblem), Warning, None;
    IncompatibleNonInheritedInterfaceMethod => problem_key!("incompatibleNonInheritedInterfaceMethod"), Some(NameShadowingConflict), Warning, None;
    UnusedPrivateMember => problem_key!("unusedPrivateMember"), Some(UnnecessaryCode), Warning, Some("unused");
    LocalVariableHiding => problem_key!("localVariableHiding"), Some(NameShadowingConflict), Ignore, Some("hiding");
    FieldHiding => problem_key!("fieldHiding"), Some(NameShadowingConflict), Ignore, Some("hiding");
    TypeHiding => problem_key!("typeParameterHiding"), Some(NameShadowingConflict), Warning, Some("hiding");
    AccidentalBooleanAssign => problem_key!("possibleAccidentalBooleanAssignment"), Some(PotentialProgrammingProblem), Ignore, None;
    EmptyStatement => problem_key!("emptyStatement"), Some(PotentialProgrammingProblem), Ignore, None;
    MissingJavadocComments => problem_key!("missingJavadocComments"), Some(Javadoc), Ignore, Some("javadoc");
    MissingJavadocTags => problem_key!("missingJavadocTags"), Some(Javadoc), Ignore, Some("javadoc");
    InvalidJavadoc => problem_key!("invalidJavadoc"), Some(Javadoc), Ignore, Some("javadoc");
    UnqualifiedFieldAccess => problem_key!("unqualifiedFieldAccess"), Some(CodeStyle), Ignore, Some("unqualified-field-access");
    UnusedDeclaredThrownException => problem_key!("unusedDeclaredThrownException"), Some(UnnecessaryCode), Ignore, Some("unused");
    FinallyBlockNotCompleting => problem_key!("finallyBlockNotCompletingNormally"), Some(PotentialProgrammingProblem), Warning, Some("finally");
    UnnecessaryTypeCheck => problem_key!("unnecessaryTypeCheck"), Some(UnnecessaryCode), Ignore, Some("cast");
    UndocumentedEmptyBlock => problem_key!("undocumentedEmptyBlock"), Some(CodeStyle), Ignore, None;
    IndirectStaticAccess => problem_key!("indirectStaticAccess"), Some(CodeStyle), Ignore, Some("static-access");
    UnnecessaryElse => problem_key!("unnecessaryElse"), Some(UnnecessaryCode), Ignore, None;
    UncheckedTypeOperation => problem_key!("uncheckedTypeOperation"), Some(UncheckedRaw), Warning, Some("unchecked");
    RawTypeReference => problem_key!("rawTypeReference"), Some(UncheckedRaw), Warning, Some("rawtypes");
    FinalParameterBound => problem_key!("finalParameterBound"), Some(CodeStyle), Warning, None;
    MissingSerialVersion => problem_key!("missingSerialVersion"), Some(PotentialProgrammingProblem), Warning, Some("serial");
    ForbiddenReference => problem_key!("forbiddenReference"), Some(Restriction), Error, Some("restriction");
    DiscouragedReference => problem_key!("discouragedReference"), Some(Restriction), Warning, Some("restriction");
    VarargsArgumentNeedCast => problem_key!("varargsArgumentNeedCast"), Some(PotentialProgrammingProblem), Warning, None;
    NullReference => problem_key!("nullReference"), Some(PotentialProgrammingProblem), Warning, Some("null");
    PotentialNullReference => problem_key!("potentialNullReference"), Some(PotentialProgrammingProblem), Ignore, Some("null");
    RedundantNullCheck => problem_key!("redundantNullCheck"), Some(PotentialProgrammingProblem), Ignore, Some("null");
    AutoBoxing => problem_key!("autoboxing"), Some(CodeStyle), Ignore, Some("boxing");
    AnnotationSuperInterface => problem_key!("annotationSuperInterface"), Some(CodeStyle), Warning, None;
    MissingOverrideAnnotation => problem_key!("missingOverrideAnnotation"), Some(CodeStyle), Ignore, None;
    MissingDeprecatedAnnotation => problem_key!("missingDeprecatedAnnotation"), Some(CodeStyle), Ignore, Some("dep-ann");
    IncompleteEnumSwitch => problem_key!("incompleteEnumSwitch"), Some(PotentialProgrammingProblem), Ignore, Some("incomplete-switch");
    MissingDefaultCase => problem_key!("missingDefaultCase"), Some(PotentialProgrammingProblem), Ignore, Some("incomplete-switch");
    UnhandledWarningToken => problem_key!("unhandledWarningToken"), Some(UnnecessaryCode), Warning, None;
    UnusedWarningToken => problem_key!("unusedWarningToken"), Some(UnnecessaryCode), Warning, Some("unused");
    UnusedLabel => problem_key!("unusedLabel"), Some(UnnecessaryCode), Warning, Some("unused");
    ParameterAssignment => problem_key!("parameterAssignment"), Some(CodeStyle), Ignore, None;
    FallthroughCase => problem_key!("fallthroughCase"), Some(PotentialProgrammingProblem), Ignore, Some("fallthrough");
    OverridingMethodWithoutSuperInvocation => problem_key!("overridingMethodWithoutSuperInvocation"), Some(PotentialProgrammingProblem), Ignore, Some("super");
    UnusedTypeArguments => problem_key!("unusedTypeArgumentsForMethodInvocation"), None, Warning, Some("unused");
    RedundantSuperinterface => problem_key!("redundantSuperinterface"), Some(UnnecessaryCode), Ignore, Some("unused");
    ComparingIdentical => problem_key!("comparingIdentical"), Some(PotentialProgrammingProblem), Warning, None;
    MissingSynchronizedModifierInInheritedMethod => problem_key!("missingSynchronizedOnInheritedMethod"), Some(PotentialProgrammingProblem), Ignore, Some("sync-override");
    ShouldImplementHashcode => problem_key!("missingHashCodeMethod"), Some(PotentialProgrammingProblem), Ignore, None;
    DeadCode => problem_key!("deadCode"), Some(PotentialProgrammingProblem), Warning, Some("unused");
    UnusedObjectAllocation => problem_key!("unusedObjectAllocation"), Some(PotentialProgrammingProblem), Ignore, Some("unused");
    MethodCanBeStatic => problem_key!("reportMethodCanBeStatic"), Some(CodeStyle), Ignore, Some("static-method");
    MethodCanBePotentiallyStatic => problem_key!("reportMethodCanBePotentiallyStatic"), Some(CodeStyle), Ignore, Some("static-method");
    RedundantSpecificationOfTypeArguments => problem_key!("redundantSpecificationOfTypeArguments"), Some(UnnecessaryCode), Ignore, Some("unused");
    UnclosedCloseable => problem_key!("unclosedCloseable"), Some(PotentialProgrammingProblem), Warning, Some("resource");
    PotentiallyUnclosedCloseable => problem_key!("potentiallyUnclosedCloseable"), Some(PotentialProgrammingProblem), Ignore, Some("resource");
    ExplicitlyClosedAutoCloseable => problem_key!("explicitlyClosedAutoCloseable"), Some(CodeStyle), Ignore, Some("resource");
    NullSpecViolation => problem_key!("nullSpecViolation"), Some(PotentialProgrammingProblem), Error, Some("null");
    NullAnnotationInferenceConflict => problem_key!("nullAnnotationInferenceConflict"), Some(PotentialProgrammingProblem), Error, Some("null");
    NullUncheckedConversion => problem_key!("nullUncheckedConversion"), Some(PotentialProgrammingProblem), Warning, Some("null");
    RedundantNullAnnotation => problem_key!("redundantNullAnnotation"), Some(UnnecessaryCode), Warning, Some("null");
    MissingNonNullByDefaultAnnotation => "org.eclipse.jdt.core.compiler.annotation.missingNonNullByDefaultAnnotation", Some(PotentialProgrammingProblem), Ignore, Some("null");
    UnusedTypeParameter => problem_key!("unusedTypeParameter"), Some(UnnecessaryCode), Ignore, Some("unused");
    UnlikelyCollectionMethodArgumentType => problem_key!("unlikelyCollectionMethodArgumentType"), Some(PotentialProgrammingProblem), Warning, Some("unlikely-arg-type");
    UnlikelyEqualsArgumentType => problem_key!("unlikelyEqualsArgumentType"), Some(PotentialProgrammingProblem), Ignore, Some("unlikely-arg-type");
    UsingTerminallyDeprecatedAPI => problem_key!("terminalDeprecation"), Some(Deprecation), Warning, Some("removal");
}

impl Irritant {
    /// Look up an irritant by its variant name or its settings key
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|i| i.name().eq_ignore_ascii_case(value) || i.option_key() == value)
    }

    /// Irritants silenced by a `@SuppressWarnings` token.
    ///
    /// `all` covers every irritant that has a token. Unknown tokens yield an
    /// empty list.
    pub fn for_warning_token(token: &str) -> Vec<Irritant> {
        let token = token.trim();
        Self::ALL
            .iter()
            .copied()
            .filter(|i| match i.warning_token() {
                Some(t) => token == "all" || t == token,
                None => false,
            })
            .collect()
    }

    /// Whether a `@SuppressWarnings` token is understood
    pub fn is_known_warning_token(token: &str) -> bool {
        token == "all" || Self::ALL.iter().any(|i| i.warning_token() == Some(token))
    }
}

impl fmt::Display for Irritant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

static IRRITANT_TABLE: Lazy<FxHashMap<ProblemId, Irritant>> = Lazy::new(|| {
    use Irritant::*;

    let groups: &[(Irritant, &[ProblemId])] = &[
        (MethodWithConstructorName, &[ProblemId::METHOD_BUT_WITH_CONSTRUCTOR_NAME]),
        (OverriddenPackageDefaultMethod, &[ProblemId::OVERRIDING_NON_VISIBLE_METHOD]),
        (
            IncompatibleNonInheritedInterfaceMethod,
            &[
                ProblemId::INCOMPATIBLE_EXCEPTION_IN_THROWS_CLAUSE_FOR_NON_INHERITED_INTERFACE_METHOD,
                ProblemId::INCOMPATIBLE_RETURN_TYPE_FOR_NON_INHERITED_INTERFACE_METHOD,
            ],
        ),
        (
            UsingDeprecatedAPI,
            &[
                ProblemId::OVERRIDING_DEPRECATED_METHOD,
                ProblemId::USING_DEPRECATED_TYPE,
                ProblemId::USING_DEPRECATED_METHOD,
                ProblemId::USING_DEPRECATED_CONSTRUCTOR,
                ProblemId::USING_DEPRECATED_FIELD,
            ],
        ),
        (
            UsingTerminallyDeprecatedAPI,
            &[
                ProblemId::OVERRIDING_TERMINALLY_DEPRECATED_METHOD,
                ProblemId::USING_TERMINALLY_DEPRECATED_TYPE,
                ProblemId::USING_TERMINALLY_DEPRECATED_METHOD,
                ProblemId::USING_TERMINALLY_DEPRECATED_CONSTRUCTOR,
                ProblemId::USING_TERMINALLY_DEPRECATED_FIELD,
            ],
        ),
        (MaskedCatchBlock, &[ProblemId::MASKED_CATCH]),
        (UnusedLocalVariable, &[ProblemId::LOCAL_VARIABLE_IS_NEVER_USED]),
        (UnusedArgument, &[ProblemId::ARGUMENT_IS_NEVER_USED]),
        (UnusedExceptionParameter, &[ProblemId::EXCEPTION_PARAMETER_IS_NEVER_USED]),
        (
            NoImplicitStringConversion,
            &[ProblemId::NO_IMPLICIT_STRING_CONVERSION_FOR_CHAR_ARRAY_EXPRESSION],
        ),
        (
            AccessEmulation,
            &[
                ProblemId::NEED_TO_EMULATE_FIELD_READ_ACCESS,
                ProblemId::NEED_TO_EMULATE_FIELD_WRITE_ACCESS,
                ProblemId::NEED_TO_EMULATE_METHOD_ACCESS,
                ProblemId::NEED_TO_EMULATE_CONSTRUCTOR_ACCESS,
            ],
        ),
        (
            NonExternalizedString,
            &[ProblemId::NON_EXTERNALIZED_STRING_LITERAL, ProblemId::UNNECESSARY_NLS_TAG],
        ),
        (AssertUsedAsAnIdentifier, &[ProblemId::USE_ASSERT_AS_AN_IDENTIFIER]),
        (EnumUsedAsAnIdentifier, &[ProblemId::USE_ENUM_AS_AN_IDENTIFIER]),
        (UnusedImport, &[ProblemId::UNUSED_IMPORT]),
        (
            NonStaticAccessToStatic,
            &[
                ProblemId::NON_STATIC_ACCESS_TO_STATIC_METHOD,
                ProblemId::NON_STATIC_ACCESS_TO_STATIC_FIELD,
            ],
        ),
        (
            IndirectStaticAccess,
            &[
                ProblemId::INDIRECT_ACCESS_TO_STATIC_FIELD,
                ProblemId::INDIRECT_ACCESS_TO_STATIC_METHOD,
                ProblemId::INDIRECT_ACCESS_TO_STATIC_TYPE,
            ],
        ),
        (NoEffectAssignment, &[ProblemId::ASSIGNMENT_HAS_NO_EFFECT]),
        (
            UnusedPrivateMember,
            &[
                ProblemId::UNUSED_PRIVATE_CONSTRUCTOR,
                ProblemId::UNUSED_PRIVATE_METHOD,
                ProblemId::UNUSED_PRIVATE_FIELD,
                ProblemId::UNUSED_PRIVATE_TYPE,
            ],
        ),
        (Tasks, &[ProblemId::TASK]),
        (
            LocalVariableHiding,
            &[
                ProblemId::LOCAL_VARIABLE_HIDING_LOCAL_VARIABLE,
                ProblemId::LOCAL_VARIABLE_HIDING_FIELD,
                ProblemId::ARGUMENT_HIDING_LOCAL_VARIABLE,
                ProblemId::ARGUMENT_HIDING_FIELD,
            ],
        ),
        (
            FieldHiding,
            &[ProblemId::FIELD_HIDING_LOCAL_VARIABLE, ProblemId::FIELD_HIDING_FIELD],
        ),
        (
            TypeHiding,
            &[
                ProblemId::TYPE_PARAMETER_HIDING_TYPE,
                ProblemId::TYPE_HIDING_TYPE_PARAMETER_FROM_TYPE,
                ProblemId::TYPE_HIDING_TYPE_PARAMETER_FROM_METHOD,
                ProblemId::TYPE_HIDING_TYPE,
            ],
        ),
        (AccidentalBooleanAssign, &[ProblemId::POSSIBLE_ACCIDENTAL_BOOLEAN_ASSIGNMENT]),
        (
            EmptyStatement,
            &[ProblemId::SUPERFLUOUS_SEMICOLON, ProblemId::EMPTY_CONTROL_FLOW_STATEMENT],
        ),
        (UndocumentedEmptyBlock, &[ProblemId::UNDOCUMENTED_EMPTY_BLOCK]),
        (
            UnnecessaryTypeCheck,
            &[ProblemId::UNNECESSARY_CAST, ProblemId::UNNECESSARY_INSTANCEOF],
        ),
        (FinallyBlockNotCompleting, &[ProblemId::FINALLY_MUST_COMPLETE_NORMALLY]),
        (
            UnusedDeclaredThrownException,
            &[
                ProblemId::UNUSED_METHOD_DECLARED_THROWN_EXCEPTION,
                ProblemId::UNUSED_CONSTRUCTOR_DECLARED_THROWN_EXCEPTION,
            ],
        ),
        (UnqualifiedFieldAccess, &[ProblemId::UNQUALIFIED_FIELD_ACCESS]),
        (UnnecessaryElse, &[ProblemId::UNNECESSARY_ELSE]),
        (
            UncheckedTypeOperation,
            &[
                ProblemId::UNSAFE_RAW_CONSTRUCTOR_INVOCATION,
                ProblemId::UNSAFE_RAW_METHOD_INVOCATION,
                ProblemId::UNSAFE_TYPE_CONVERSION,
                ProblemId::UNSAFE_ELEMENT_TYPE_CONVERSION,
                ProblemId::UNSAFE_RAW_FIELD_ASSIGNMENT,
                ProblemId::UNSAFE_GENERIC_CAST,
                ProblemId::UNSAFE_RETURN_TYPE_OVERRIDE,
                ProblemId::UNSAFE_RAW_GENERIC_METHOD_INVOCATION,
                ProblemId::UNSAFE_RAW_GENERIC_CONSTRUCTOR_INVOCATION,
                ProblemId::UNSAFE_GENERIC_ARRAY_FOR_VARARGS,
            ],
        ),
        (RawTypeReference, &[ProblemId::RAW_TYPE_REFERENCE]),
        (FinalParameterBound, &[ProblemId::FINAL_BOUND_FOR_TYPE_VARIABLE]),
        (MissingSerialVersion, &[ProblemId::MISSING_SERIAL_VERSION]),
        (ForbiddenReference, &[ProblemId::FORBIDDEN_REFERENCE]),
        (DiscouragedReference, &[ProblemId::DISCOURAGED_REFERENCE]),
        (
            VarargsArgumentNeedCast,
            &[
                ProblemId::METHOD_VARARGS_ARGUMENT_NEED_CAST,
                ProblemId::CONSTRUCTOR_VARARGS_ARGUMENT_NEED_CAST,
            ],
        ),
        (
            NullReference,
            &[ProblemId::NULL_LOCAL_VARIABLE_REFERENCE, ProblemId::NULL_UNBOXING],
        ),
        (
            PotentialNullReference,
            &[
                ProblemId::POTENTIAL_NULL_LOCAL_VARIABLE_REFERENCE,
                ProblemId::POTENTIAL_NULL_UNBOXING,
                ProblemId::POTENTIAL_NULL_MESSAGE_SEND_REFERENCE,
                ProblemId::NULLABLE_FIELD_REFERENCE,
            ],
        ),
        (
            RedundantNullCheck,
            &[
                ProblemId::REDUNDANT_LOCAL_VARIABLE_NULL_ASSIGNMENT,
                ProblemId::REDUNDANT_NULL_CHECK_ON_NON_NULL_LOCAL_VARIABLE,
                ProblemId::REDUNDANT_NULL_CHECK_ON_NULL_LOCAL_VARIABLE,
                ProblemId::NON_NULL_LOCAL_VARIABLE_COMPARISON_YIELDS_FALSE,
                ProblemId::NULL_LOCAL_VARIABLE_COMPARISON_YIELDS_FALSE,
                ProblemId::NULL_LOCAL_VARIABLE_INSTANCEOF_YIELDS_FALSE,
            ],
        ),
        (
            NullSpecViolation,
            &[
                ProblemId::REQUIRED_NON_NULL_BUT_PROVIDED_NULL,
                ProblemId::ILLEGAL_RETURN_NULLITY_REDEFINITION,
            ],
        ),
        (
            NullAnnotationInferenceConflict,
            &[ProblemId::REQUIRED_NON_NULL_BUT_PROVIDED_POTENTIAL_NULL],
        ),
        (NullUncheckedConversion, &[ProblemId::REQUIRED_NON_NULL_BUT_PROVIDED_UNKNOWN]),
        (RedundantNullAnnotation, &[ProblemId::REDUNDANT_NULL_ANNOTATION]),
        (
            MissingNonNullByDefaultAnnotation,
            &[
                ProblemId::MISSING_NON_NULL_BY_DEFAULT_ANNOTATION_ON_PACKAGE,
                ProblemId::MISSING_NON_NULL_BY_DEFAULT_ANNOTATION_ON_TYPE,
            ],
        ),
        (
            AutoBoxing,
            &[ProblemId::BOXING_CONVERSION, ProblemId::UNBOXING_CONVERSION],
        ),
        (AnnotationSuperInterface, &[ProblemId::ANNOTATION_TYPE_USED_AS_SUPER_INTERFACE]),
        (
            MissingOverrideAnnotation,
            &[
                ProblemId::MISSING_OVERRIDE_ANNOTATION,
                ProblemId::MISSING_OVERRIDE_ANNOTATION_FOR_INTERFACE_METHOD_IMPLEMENTATION,
            ],
        ),
        (
            MissingDeprecatedAnnotation,
            &[
                ProblemId::FIELD_MISSING_DEPRECATED_ANNOTATION,
                ProblemId::METHOD_MISSING_DEPRECATED_ANNOTATION,
                ProblemId::TYPE_MISSING_DEPRECATED_ANNOTATION,
            ],
        ),
        (
            IncompleteEnumSwitch,
            &[
                ProblemId::MISSING_ENUM_CONSTANT_CASE,
                ProblemId::MISSING_ENUM_CONSTANT_CASE_DESPITE_DEFAULT,
            ],
        ),
        (
            MissingDefaultCase,
            &[ProblemId::MISSING_DEFAULT_CASE, ProblemId::MISSING_ENUM_DEFAULT_CASE],
        ),
        (UnhandledWarningToken, &[ProblemId::UNHANDLED_WARNING_TOKEN]),
        (UnusedWarningToken, &[ProblemId::UNUSED_WARNING_TOKEN]),
        (UnusedLabel, &[ProblemId::UNUSED_LABEL]),
        (ParameterAssignment, &[ProblemId::PARAMETER_ASSIGNMENT]),
        (FallthroughCase, &[ProblemId::FALLTHROUGH_CASE]),
        (
            OverridingMethodWithoutSuperInvocation,
            &[ProblemId::OVERRIDING_METHOD_WITHOUT_SUPER_INVOCATION],
        ),
        (
            UnusedTypeArguments,
            &[
                ProblemId::UNUSED_TYPE_ARGUMENTS_FOR_METHOD_INVOCATION,
                ProblemId::UNUSED_TYPE_ARGUMENTS_FOR_CONSTRUCTOR_INVOCATION,
            ],
        ),
        (RedundantSuperinterface, &[ProblemId::REDUNDANT_SUPERINTERFACE]),
        (ComparingIdentical, &[ProblemId::COMPARING_IDENTICAL]),
        (
            MissingSynchronizedModifierInInheritedMethod,
            &[ProblemId::MISSING_SYNCHRONIZED_MODIFIER_IN_INHERITED_METHOD],
        ),
        (ShouldImplementHashcode, &[ProblemId::SHOULD_IMPLEMENT_HASHCODE]),
        (DeadCode, &[ProblemId::DEAD_CODE]),
        (UnusedObjectAllocation, &[ProblemId::UNUSED_OBJECT_ALLOCATION]),
        (MethodCanBeStatic, &[ProblemId::METHOD_CAN_BE_STATIC]),
        (MethodCanBePotentiallyStatic, &[ProblemId::METHOD_CAN_BE_POTENTIALLY_STATIC]),
        (
            RedundantSpecificationOfTypeArguments,
            &[ProblemId::REDUNDANT_SPECIFICATION_OF_TYPE_ARGUMENTS],
        ),
        (
            UnclosedCloseable,
            &[ProblemId::UNCLOSED_CLOSEABLE, ProblemId::UNCLOSED_CLOSEABLE_AT_EXIT],
        ),
        (
            PotentiallyUnclosedCloseable,
            &[
                ProblemId::POTENTIALLY_UNCLOSED_CLOSEABLE,
                ProblemId::POTENTIALLY_UNCLOSED_CLOSEABLE_AT_EXIT,
            ],
        ),
        (ExplicitlyClosedAutoCloseable, &[ProblemId::EXPLICITLY_CLOSED_AUTO_CLOSEABLE]),
        (UnusedTypeParameter, &[ProblemId::UNUSED_TYPE_PARAMETER]),
        (
            UnlikelyCollectionMethodArgumentType,
            &[ProblemId::UNLIKELY_COLLECTION_METHOD_ARGUMENT_TYPE],
        ),
        (UnlikelyEqualsArgumentType, &[ProblemId::UNLIKELY_EQUALS_ARGUMENT_TYPE]),
        (MissingJavadocComments, &[ProblemId::JAVADOC_MISSING]),
        (
            MissingJavadocTags,
            &[
                ProblemId::JAVADOC_MISSING_PARAM_TAG,
                ProblemId::JAVADOC_MISSING_RETURN_TAG,
                ProblemId::JAVADOC_MISSING_THROWS_TAG,
            ],
        ),
    ];

    let mut table = FxHashMap::default();
    for (irritant, ids) in groups {
        for id in *ids {
            table.insert(*id, *irritant);
        }
    }
    table
});

/// Irritant governing a problem.
///
/// Any remaining doc comment problem falls back to [`Irritant::InvalidJavadoc`].
/// `None` means the problem is not configurable and always reported.
pub fn irritant_of(id: ProblemId) -> Option<Irritant> {
    if let Some(irritant) = IRRITANT_TABLE.get(&id) {
        return Some(*irritant);
    }
    if id.is_javadoc() {
        return Some(Irritant::InvalidJavadoc);
    }
    None
}

/// Problems governed by an irritant, in catalog order
pub fn problems_of(irritant: Irritant) -> Vec<ProblemId> {
    crate::problem::catalog::all()
        .iter()
        .map(|d| d.id)
        .filter(|id| irritant_of(*id) == Some(irritant))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashSet;

    #[test]
    fn test_option_keys_are_unique() {
        let keys: HashSet<_> = Irritant::ALL.iter().map(|i| i.option_key()).collect();
        assert_eq!(keys.len(), Irritant::ALL.len());
    }

    #[rstest]
    #[case(ProblemId::USING_DEPRECATED_TYPE, Irritant::UsingDeprecatedAPI)]
    #[case(ProblemId::USING_DEPRECATED_METHOD, Irritant::UsingDeprecatedAPI)]
    #[case(ProblemId::USING_DEPRECATED_CONSTRUCTOR, Irritant::UsingDeprecatedAPI)]
    #[case(ProblemId::USING_DEPRECATED_FIELD, Irritant::UsingDeprecatedAPI)]
    #[case(ProblemId::OVERRIDING_DEPRECATED_METHOD, Irritant::UsingDeprecatedAPI)]
    #[case(ProblemId::UNUSED_PRIVATE_FIELD, Irritant::UnusedPrivateMember)]
    #[case(ProblemId::UNUSED_PRIVATE_TYPE, Irritant::UnusedPrivateMember)]
    #[case(ProblemId::UNUSED_IMPORT, Irritant::UnusedImport)]
    #[case(ProblemId::JAVADOC_MISSING, Irritant::MissingJavadocComments)]
    #[case(ProblemId::JAVADOC_MISSING_RETURN_TAG, Irritant::MissingJavadocTags)]
    #[case(ProblemId::JAVADOC_UNDEFINED_FIELD, Irritant::InvalidJavadoc)]
    #[case(ProblemId::JAVADOC_USING_DEPRECATED_METHOD, Irritant::InvalidJavadoc)]
    fn test_irritant_of(#[case] id: ProblemId, #[case] expected: Irritant) {
        assert_eq!(irritant_of(id), Some(expected));
    }

    #[rstest]
    #[case(ProblemId::TYPE_MISMATCH)]
    #[case(ProblemId::PARSING_ERROR)]
    #[case(ProblemId::BYTECODE_EXCEEDS_64K_LIMIT)]
    #[case(ProblemId::VARARGS_CONFLICT)]
    #[case(ProblemId::new(0))]
    fn test_not_configurable(#[case] id: ProblemId) {
        assert_eq!(irritant_of(id), None);
    }

    #[test]
    fn test_table_only_references_catalog_entries() {
        for id in IRRITANT_TABLE.keys() {
            assert!(id.name().is_some(), "{id} is not in the catalog");
        }
    }

    #[test]
    fn test_warning_tokens() {
        let unused = Irritant::for_warning_token("unused");
        assert!(unused.contains(&Irritant::UnusedImport));
        assert!(unused.contains(&Irritant::UnusedPrivateMember));
        assert!(!unused.contains(&Irritant::UsingDeprecatedAPI));

        let hiding = Irritant::for_warning_token("hiding");
        assert_eq!(
            hiding,
            vec![
                Irritant::MaskedCatchBlock,
                Irritant::LocalVariableHiding,
                Irritant::FieldHiding,
                Irritant::TypeHiding,
            ]
        );

        assert!(Irritant::for_warning_token("all").contains(&Irritant::NullReference));
        assert!(Irritant::for_warning_token("bogus").is_empty());
        assert!(Irritant::is_known_warning_token("rawtypes"));
        assert!(!Irritant::is_known_warning_token("bogus"));
    }

    #[test]
    fn test_parse() {
        assert_eq!(Irritant::parse("UnusedImport"), Some(Irritant::UnusedImport));
        assert_eq!(
            Irritant::parse("org.eclipse.jdt.core.compiler.problem.deprecation"),
            Some(Irritant::UsingDeprecatedAPI)
        );
        assert_eq!(Irritant::parse("nope"), None);
    }

    #[test]
    fn test_problems_of() {
        let problems = problems_of(Irritant::UsingDeprecatedAPI);
        assert_eq!(problems.len(), 5);
    }
}
