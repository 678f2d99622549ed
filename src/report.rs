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

//! What is being reported
//!
//! A [`Report`] names the condition found by analysis together with the
//! symbols involved and the node it is anchored to. Rendering turns it into
//! a problem identifier, full and short arguments and a source range. Reports
//! about symbols whose types are missing from the class path are redirected
//! to the missing type problem instead of producing a cascade of secondary
//! errors.

use crate::location::SourceRange;
use crate::names::{FieldRef, ImportRef, MethodRef, ReadableName, TypeRef, disambiguated_pair, types_as_string};
use crate::nodes::SourceNode;
use crate::options::{CompilerOptions, JavaLevel, Visibility};
use crate::problem::ProblemId;
use crate::scanner::PositionScanner;

/// Declaration a doc comment problem is raised for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct JavadocTarget {
    pub visibility: Visibility,
    /// The declaration overrides or implements an inherited method
    pub overriding: bool,
}

impl JavadocTarget {
    pub fn new(visibility: Visibility) -> Self {
        Self {
            visibility,
            overriding: false,
        }
    }

    pub fn overriding(mut self) -> Self {
        self.overriding = true;
        self
    }
}

/// A condition found by analysis, with its payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    UndefinedType { type_ref: TypeRef, node: SourceNode },
    NotVisibleType { type_ref: TypeRef, node: SourceNode },
    DeprecatedType { type_ref: TypeRef, terminally: bool, node: SourceNode },
    TypeMismatch { actual: TypeRef, expected: TypeRef, node: SourceNode },
    RawTypeReference { type_ref: TypeRef, node: SourceNode },
    UnnecessaryCast { from: TypeRef, to: TypeRef, node: SourceNode },

    UndefinedMethod { method: MethodRef, node: SourceNode },
    NotVisibleMethod { method: MethodRef, node: SourceNode },
    DeprecatedMethod { method: MethodRef, terminally: bool, node: SourceNode },
    /// No applicable method for the argument types
    ParameterMismatch { method: MethodRef, arguments: Vec<TypeRef>, node: SourceNode },
    NonStaticAccessToStaticMethod { method: MethodRef, node: SourceNode },
    /// Type arguments passed to a method that is not generic
    UnusedTypeArguments { method: MethodRef, type_arguments: Vec<TypeRef>, node: SourceNode },
    UndefinedConstructor { constructor: MethodRef, node: SourceNode },
    ConstructorParameterMismatch { constructor: MethodRef, arguments: Vec<TypeRef>, node: SourceNode },

    /// `segment` selects the part of a qualified name bound to the field
    UndefinedField { field: FieldRef, segment: Option<usize>, node: SourceNode },
    NotVisibleField { field: FieldRef, segment: Option<usize>, node: SourceNode },
    DeprecatedField { field: FieldRef, terminally: bool, segment: Option<usize>, node: SourceNode },
    NonStaticAccessToStaticField { field: FieldRef, segment: Option<usize>, node: SourceNode },
    UnusedLocal { variable: FieldRef, node: SourceNode },
    UnusedArgument { variable: FieldRef, node: SourceNode },
    LocalHidingField { local: FieldRef, field: FieldRef, node: SourceNode },
    FieldHidingField { field: FieldRef, hidden: FieldRef, node: SourceNode },

    UnusedImport { import: ImportRef, node: SourceNode },
    ImportNotFound { import: ImportRef, node: SourceNode },

    JavadocMissing { target: JavadocTarget, node: SourceNode },
    JavadocMissingParamTag { name: String, target: JavadocTarget, node: SourceNode },
    JavadocMissingReturnTag { target: JavadocTarget, node: SourceNode },
    JavadocMissingThrowsTag { exception: TypeRef, target: JavadocTarget, node: SourceNode },
    JavadocInvalidTag { node: SourceNode },
    JavadocUndefinedField { name: String, target: JavadocTarget, node: SourceNode },
    JavadocUndefinedType { type_ref: TypeRef, target: JavadocTarget, node: SourceNode },

    /// Unexpected token; `expected` lists what the parser could accept
    ParsingError { token: String, expected: Option<String>, node: SourceNode },
    UnhandledWarningToken { token: String, node: SourceNode },
    UnusedWarningToken { token: String, node: SourceNode },
    Task { tag: String, message: String, node: SourceNode },

    /// Generated code of a method exceeds the class file limit. `None`
    /// stands for the static initializer.
    CodeTooLarge { method: Option<MethodRef>, node: SourceNode },

    /// Any catalog problem with caller supplied arguments
    Other {
        id: ProblemId,
        arguments: Vec<String>,
        message_arguments: Vec<String>,
        node: SourceNode,
    },
}

/// Arguments and range of a rendered report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedReport {
    pub id: ProblemId,
    pub arguments: Vec<String>,
    pub message_arguments: Vec<String>,
    pub range: SourceRange,
}

impl RenderedReport {
    fn new(id: ProblemId, arguments: Vec<String>, message_arguments: Vec<String>, range: SourceRange) -> Self {
        Self {
            id,
            arguments,
            message_arguments,
            range,
        }
    }

    fn same(id: ProblemId, arguments: Vec<String>, range: SourceRange) -> Self {
        Self::new(id, arguments.clone(), arguments, range)
    }
}

/// Problem actually raised for a report
enum Target<'a> {
    Own(ProblemId),
    MissingType(&'a TypeRef),
    MissingInMethod(&'a MethodRef, &'a TypeRef),
    MissingInConstructor(&'a MethodRef, &'a TypeRef),
}

impl Target<'_> {
    fn id(&self) -> ProblemId {
        match self {
            Target::Own(id) => *id,
            Target::MissingType(_) => ProblemId::UNDEFINED_TYPE,
            Target::MissingInMethod(..) => ProblemId::MISSING_TYPE_IN_METHOD,
            Target::MissingInConstructor(..) => ProblemId::MISSING_TYPE_IN_CONSTRUCTOR,
        }
    }
}

fn leaf(type_ref: &TypeRef) -> TypeRef {
    let mut leaf = type_ref.clone();
    leaf.dimensions = 0;
    leaf
}

fn null_aware(options: &CompilerOptions) -> Option<&CompilerOptions> {
    options.null_analysis_enabled.then_some(options)
}

fn full_and_short<T: ReadableName + ?Sized>(symbol: &T) -> (String, String) {
    (symbol.readable_name(), symbol.short_readable_name())
}

impl Report {
    pub fn undefined_type(type_ref: TypeRef, node: SourceNode) -> Self {
        Report::UndefinedType { type_ref, node }
    }

    pub fn type_mismatch(actual: TypeRef, expected: TypeRef, node: SourceNode) -> Self {
        Report::TypeMismatch { actual, expected, node }
    }

    pub fn undefined_method(method: MethodRef, node: SourceNode) -> Self {
        Report::UndefinedMethod { method, node }
    }

    pub fn undefined_constructor(constructor: MethodRef, node: SourceNode) -> Self {
        Report::UndefinedConstructor { constructor, node }
    }

    pub fn unused_import(import: ImportRef, node: SourceNode) -> Self {
        Report::UnusedImport { import, node }
    }

    pub fn code_too_large(method: MethodRef, node: SourceNode) -> Self {
        Report::CodeTooLarge {
            method: Some(method),
            node,
        }
    }

    /// Catalog problem whose full and short arguments are the same
    pub fn other<S: Into<String>>(id: ProblemId, arguments: Vec<S>, node: SourceNode) -> Self {
        let arguments: Vec<String> = arguments.into_iter().map(Into::into).collect();
        Report::Other {
            id,
            message_arguments: arguments.clone(),
            arguments,
            node,
        }
    }

    pub fn node(&self) -> &SourceNode {
        match self {
            Report::UndefinedType { node, .. }
            | Report::NotVisibleType { node, .. }
            | Report::DeprecatedType { node, .. }
            | Report::TypeMismatch { node, .. }
            | Report::RawTypeReference { node, .. }
            | Report::UnnecessaryCast { node, .. }
            | Report::UndefinedMethod { node, .. }
            | Report::NotVisibleMethod { node, .. }
            | Report::DeprecatedMethod { node, .. }
            | Report::ParameterMismatch { node, .. }
            | Report::NonStaticAccessToStaticMethod { node, .. }
            | Report::UnusedTypeArguments { node, .. }
            | Report::UndefinedConstructor { node, .. }
            | Report::ConstructorParameterMismatch { node, .. }
            | Report::UndefinedField { node, .. }
            | Report::NotVisibleField { node, .. }
            | Report::DeprecatedField { node, .. }
            | Report::NonStaticAccessToStaticField { node, .. }
            | Report::UnusedLocal { node, .. }
            | Report::UnusedArgument { node, .. }
            | Report::LocalHidingField { node, .. }
            | Report::FieldHidingField { node, .. }
            | Report::UnusedImport { node, .. }
            | Report::ImportNotFound { node, .. }
            | Report::JavadocMissing { node, .. }
            | Report::JavadocMissingParamTag { node, .. }
            | Report::JavadocMissingReturnTag { node, .. }
            | Report::JavadocMissingThrowsTag { node, .. }
            | Report::JavadocInvalidTag { node }
            | Report::JavadocUndefinedField { node, .. }
            | Report::JavadocUndefinedType { node, .. }
            | Report::ParsingError { node, .. }
            | Report::UnhandledWarningToken { node, .. }
            | Report::UnusedWarningToken { node, .. }
            | Report::Task { node, .. }
            | Report::CodeTooLarge { node, .. }
            | Report::Other { node, .. } => node,
        }
    }

    fn target(&self) -> Target<'_> {
        match self {
            Report::TypeMismatch { actual, expected, .. } => {
                if actual.missing {
                    Target::MissingType(actual)
                } else if expected.missing {
                    Target::MissingType(expected)
                } else {
                    Target::Own(ProblemId::TYPE_MISMATCH)
                }
            }
            Report::UndefinedMethod { method, .. } | Report::ParameterMismatch { method, .. } => {
                if method.declaring_type.missing {
                    Target::MissingType(&method.declaring_type)
                } else if let Some(missing) = method.missing_type() {
                    Target::MissingInMethod(method, missing)
                } else if matches!(self, Report::UndefinedMethod { .. }) {
                    Target::Own(ProblemId::UNDEFINED_METHOD)
                } else {
                    Target::Own(ProblemId::PARAMETER_MISMATCH)
                }
            }
            Report::UndefinedConstructor { constructor, .. }
            | Report::ConstructorParameterMismatch { constructor, .. } => {
                if constructor.declaring_type.missing {
                    Target::MissingType(&constructor.declaring_type)
                } else if let Some(missing) = constructor.missing_type() {
                    Target::MissingInConstructor(constructor, missing)
                } else if matches!(self, Report::UndefinedConstructor { .. }) {
                    Target::Own(ProblemId::UNDEFINED_CONSTRUCTOR)
                } else {
                    Target::Own(ProblemId::CONSTRUCTOR_PARAMETER_MISMATCH)
                }
            }
            other => Target::Own(other.own_id()),
        }
    }

    fn own_id(&self) -> ProblemId {
        match self {
            Report::UndefinedType { .. } => ProblemId::UNDEFINED_TYPE,
            Report::NotVisibleType { .. } => ProblemId::NOT_VISIBLE_TYPE,
            Report::DeprecatedType { terminally: false, .. } => ProblemId::USING_DEPRECATED_TYPE,
            Report::DeprecatedType { terminally: true, .. } => ProblemId::USING_TERMINALLY_DEPRECATED_TYPE,
            Report::TypeMismatch { .. } => ProblemId::TYPE_MISMATCH,
            Report::RawTypeReference { .. } => ProblemId::RAW_TYPE_REFERENCE,
            Report::UnnecessaryCast { .. } => ProblemId::UNNECESSARY_CAST,
            Report::UndefinedMethod { .. } => ProblemId::UNDEFINED_METHOD,
            Report::NotVisibleMethod { .. } => ProblemId::NOT_VISIBLE_METHOD,
            Report::DeprecatedMethod { method, terminally, .. } => {
                match (method.is_constructor, *terminally) {
                    (false, false) => ProblemId::USING_DEPRECATED_METHOD,
                    (false, true) => ProblemId::USING_TERMINALLY_DEPRECATED_METHOD,
                    (true, false) => ProblemId::USING_DEPRECATED_CONSTRUCTOR,
                    (true, true) => ProblemId::USING_TERMINALLY_DEPRECATED_CONSTRUCTOR,
                }
            }
            Report::ParameterMismatch { .. } => ProblemId::PARAMETER_MISMATCH,
            Report::NonStaticAccessToStaticMethod { .. } => ProblemId::NON_STATIC_ACCESS_TO_STATIC_METHOD,
            Report::UnusedTypeArguments { .. } => ProblemId::UNUSED_TYPE_ARGUMENTS_FOR_METHOD_INVOCATION,
            Report::UndefinedConstructor { .. } => ProblemId::UNDEFINED_CONSTRUCTOR,
            Report::ConstructorParameterMismatch { .. } => ProblemId::CONSTRUCTOR_PARAMETER_MISMATCH,
            Report::UndefinedField { .. } => ProblemId::UNDEFINED_FIELD,
            Report::NotVisibleField { .. } => ProblemId::NOT_VISIBLE_FIELD,
            Report::DeprecatedField { terminally: false, .. } => ProblemId::USING_DEPRECATED_FIELD,
            Report::DeprecatedField { terminally: true, .. } => ProblemId::USING_TERMINALLY_DEPRECATED_FIELD,
            Report::NonStaticAccessToStaticField { .. } => ProblemId::NON_STATIC_ACCESS_TO_STATIC_FIELD,
            Report::UnusedLocal { .. } => ProblemId::LOCAL_VARIABLE_IS_NEVER_USED,
            Report::UnusedArgument { .. } => ProblemId::ARGUMENT_IS_NEVER_USED,
            Report::LocalHidingField { .. } => ProblemId::LOCAL_VARIABLE_HIDING_FIELD,
            Report::FieldHidingField { .. } => ProblemId::FIELD_HIDING_FIELD,
            Report::UnusedImport { .. } => ProblemId::UNUSED_IMPORT,
            Report::ImportNotFound { .. } => ProblemId::IMPORT_NOT_FOUND,
            Report::JavadocMissing { .. } => ProblemId::JAVADOC_MISSING,
            Report::JavadocMissingParamTag { .. } => ProblemId::JAVADOC_MISSING_PARAM_TAG,
            Report::JavadocMissingReturnTag { .. } => ProblemId::JAVADOC_MISSING_RETURN_TAG,
            Report::JavadocMissingThrowsTag { .. } => ProblemId::JAVADOC_MISSING_THROWS_TAG,
            Report::JavadocInvalidTag { .. } => ProblemId::JAVADOC_INVALID_TAG,
            Report::JavadocUndefinedField { .. } => ProblemId::JAVADOC_UNDEFINED_FIELD,
            Report::JavadocUndefinedType { .. } => ProblemId::JAVADOC_UNDEFINED_TYPE,
            Report::ParsingError { expected: Some(_), .. } => ProblemId::PARSING_ERROR,
            Report::ParsingError { expected: None, .. } => ProblemId::PARSING_ERROR_NO_SUGGESTION,
            Report::UnhandledWarningToken { .. } => ProblemId::UNHANDLED_WARNING_TOKEN,
            Report::UnusedWarningToken { .. } => ProblemId::UNUSED_WARNING_TOKEN,
            Report::Task { .. } => ProblemId::TASK,
            Report::CodeTooLarge { method: None, .. } => ProblemId::BYTECODE_EXCEEDS_64K_LIMIT_FOR_CLINIT,
            Report::CodeTooLarge { method: Some(m), .. } if m.is_constructor => {
                ProblemId::BYTECODE_EXCEEDS_64K_LIMIT_FOR_CONSTRUCTOR
            }
            Report::CodeTooLarge { .. } => ProblemId::BYTECODE_EXCEEDS_64K_LIMIT,
            Report::Other { id, .. } => *id,
        }
    }

    /// Identifier of the problem raised, after missing type redirection
    pub fn id(&self) -> ProblemId {
        self.target().id()
    }

    /// Arguments and range of the problem, or `None` when the options
    /// exclude this occurrence (doc comment visibility thresholds, raw
    /// types before generics existed)
    pub fn render(&self, options: &CompilerOptions, scanner: &mut PositionScanner) -> Option<RenderedReport> {
        match self.target() {
            Target::Own(id) => self.render_own(id, options, scanner),
            Target::MissingType(missing) => {
                let (full, short) = full_and_short(&leaf(missing));
                Some(RenderedReport::new(
                    ProblemId::UNDEFINED_TYPE,
                    vec![full],
                    vec![short],
                    self.node().range(),
                ))
            }
            Target::MissingInMethod(method, missing) => {
                let (declaring, declaring_short) = full_and_short(&method.declaring_type);
                let (missing, missing_short) = full_and_short(&leaf(missing));
                Some(RenderedReport::new(
                    ProblemId::MISSING_TYPE_IN_METHOD,
                    vec![declaring, method.selector().to_string(), method.parameters_as_string(false), missing],
                    vec![
                        declaring_short,
                        method.selector().to_string(),
                        method.parameters_as_string(true),
                        missing_short,
                    ],
                    self.node().span(scanner),
                ))
            }
            Target::MissingInConstructor(constructor, missing) => {
                let (declaring, declaring_short) = full_and_short(&constructor.declaring_type);
                let (missing, missing_short) = full_and_short(&leaf(missing));
                Some(RenderedReport::new(
                    ProblemId::MISSING_TYPE_IN_CONSTRUCTOR,
                    vec![declaring, constructor.parameters_as_string(false), missing],
                    vec![declaring_short, constructor.parameters_as_string(true), missing_short],
                    self.node().range(),
                ))
            }
        }
    }

    fn render_own(
        &self,
        id: ProblemId,
        options: &CompilerOptions,
        scanner: &mut PositionScanner,
    ) -> Option<RenderedReport> {
        match self {
            Report::UndefinedType { .. }
            | Report::NotVisibleType { .. }
            | Report::DeprecatedType { .. }
            | Report::TypeMismatch { .. }
            | Report::RawTypeReference { .. }
            | Report::UnnecessaryCast { .. } => self.render_type(id, options, scanner),

            Report::UndefinedMethod { .. }
            | Report::NotVisibleMethod { .. }
            | Report::DeprecatedMethod { .. }
            | Report::ParameterMismatch { .. }
            | Report::NonStaticAccessToStaticMethod { .. }
            | Report::UnusedTypeArguments { .. }
            | Report::UndefinedConstructor { .. }
            | Report::ConstructorParameterMismatch { .. } => Some(self.render_method(id, options, scanner)),

            Report::UndefinedField { .. }
            | Report::NotVisibleField { .. }
            | Report::DeprecatedField { .. }
            | Report::NonStaticAccessToStaticField { .. }
            | Report::UnusedLocal { .. }
            | Report::UnusedArgument { .. }
            | Report::LocalHidingField { .. }
            | Report::FieldHidingField { .. } => Some(self.render_field(id, scanner)),

            Report::UnusedImport { import, node } | Report::ImportNotFound { import, node } => {
                Some(RenderedReport::same(id, vec![import.tokens.join(".")], node.range()))
            }

            Report::JavadocMissing { .. }
            | Report::JavadocMissingParamTag { .. }
            | Report::JavadocMissingReturnTag { .. }
            | Report::JavadocMissingThrowsTag { .. }
            | Report::JavadocInvalidTag { .. }
            | Report::JavadocUndefinedField { .. }
            | Report::JavadocUndefinedType { .. } => self.render_javadoc(id, options),

            Report::ParsingError { .. }
            | Report::UnhandledWarningToken { .. }
            | Report::UnusedWarningToken { .. }
            | Report::Task { .. } => Some(self.render_source(id)),

            Report::CodeTooLarge { method, node } => {
                let (arguments, short) = match method {
                    Some(method) => (
                        vec![method.selector().to_string(), method.parameters_as_string(false)],
                        vec![method.selector().to_string(), method.parameters_as_string(true)],
                    ),
                    None => (Vec::new(), Vec::new()),
                };
                Some(RenderedReport::new(id, arguments, short, node.range()))
            }

            Report::Other {
                arguments,
                message_arguments,
                node,
                ..
            } => Some(RenderedReport::new(
                id,
                arguments.clone(),
                message_arguments.clone(),
                node.span(scanner),
            )),
        }
    }

    fn render_type(
        &self,
        id: ProblemId,
        options: &CompilerOptions,
        scanner: &mut PositionScanner,
    ) -> Option<RenderedReport> {
        let rendered = match self {
            Report::UndefinedType { type_ref, node }
            | Report::NotVisibleType { type_ref, node }
            | Report::DeprecatedType { type_ref, node, .. } => {
                let (full, short) = full_and_short(&leaf(type_ref));
                RenderedReport::new(id, vec![full], vec![short], node.span(scanner))
            }
            Report::TypeMismatch { actual, expected, node }
            | Report::UnnecessaryCast {
                from: actual,
                to: expected,
                node,
            } => {
                let names = disambiguated_pair(actual, expected, options);
                RenderedReport::new(id, names.full.to_vec(), names.short.to_vec(), node.range())
            }
            Report::RawTypeReference { type_ref, node } => {
                if options.source_level < JavaLevel::JDK1_5 {
                    return None;
                }
                let raw = leaf(type_ref);
                let erasure = raw.erasure();
                RenderedReport::new(
                    id,
                    vec![raw.readable_name(), erasure.readable_name()],
                    vec![raw.short_readable_name(), erasure.short_readable_name()],
                    node.span(scanner),
                )
            }
            _ => return None,
        };
        Some(rendered)
    }

    fn render_method(&self, id: ProblemId, options: &CompilerOptions, scanner: &mut PositionScanner) -> RenderedReport {
        let null_annotations = null_aware(options);
        match self {
            Report::UndefinedConstructor { constructor, node }
            | Report::DeprecatedMethod {
                method: constructor,
                node,
                ..
            } if id == ProblemId::UNDEFINED_CONSTRUCTOR || constructor.is_constructor => {
                let (declaring, declaring_short) = full_and_short(&constructor.declaring_type);
                RenderedReport::new(
                    id,
                    vec![declaring, constructor.parameters_as_string(false)],
                    vec![declaring_short, constructor.parameters_as_string(true)],
                    node.range(),
                )
            }
            Report::ConstructorParameterMismatch {
                constructor,
                arguments,
                node,
            } => {
                let (declaring, declaring_short) = full_and_short(&constructor.declaring_type);
                RenderedReport::new(
                    id,
                    vec![
                        declaring,
                        types_as_string(&constructor.parameters, constructor.varargs, false, null_annotations),
                        types_as_string(arguments, false, false, null_annotations),
                    ],
                    vec![
                        declaring_short,
                        types_as_string(&constructor.parameters, constructor.varargs, true, null_annotations),
                        types_as_string(arguments, false, true, null_annotations),
                    ],
                    node.arguments_span(scanner),
                )
            }
            Report::ParameterMismatch { method, arguments, node } => {
                let (declaring, declaring_short) = full_and_short(&method.declaring_type);
                let selector = method.selector().to_string();
                RenderedReport::new(
                    id,
                    vec![
                        declaring,
                        selector.clone(),
                        types_as_string(&method.parameters, method.varargs, false, null_annotations),
                        types_as_string(arguments, false, false, null_annotations),
                    ],
                    vec![
                        declaring_short,
                        selector,
                        types_as_string(&method.parameters, method.varargs, true, null_annotations),
                        types_as_string(arguments, false, true, null_annotations),
                    ],
                    node.arguments_span(scanner),
                )
            }
            Report::UnusedTypeArguments {
                method,
                type_arguments,
                node,
            } => {
                let (declaring, declaring_short) = full_and_short(&method.declaring_type);
                let selector = method.selector().to_string();
                RenderedReport::new(
                    id,
                    vec![
                        declaring,
                        selector.clone(),
                        method.parameters_as_string(false),
                        types_as_string(type_arguments, false, false, None),
                    ],
                    vec![
                        declaring_short,
                        selector,
                        method.parameters_as_string(true),
                        types_as_string(type_arguments, false, true, None),
                    ],
                    node.range(),
                )
            }
            Report::UndefinedMethod { method, node }
            | Report::NotVisibleMethod { method, node }
            | Report::DeprecatedMethod { method, node, .. }
            | Report::NonStaticAccessToStaticMethod { method, node } => {
                let (declaring, declaring_short) = full_and_short(&method.declaring_type);
                let selector = method.selector().to_string();
                RenderedReport::new(
                    id,
                    vec![declaring, selector.clone(), method.parameters_as_string(false)],
                    vec![declaring_short, selector, method.parameters_as_string(true)],
                    node.span(scanner),
                )
            }
            other => RenderedReport::same(id, Vec::new(), other.node().range()),
        }
    }

    fn render_field(&self, id: ProblemId, scanner: &mut PositionScanner) -> RenderedReport {
        let field_span = |node: &SourceNode, segment: &Option<usize>, scanner: &mut PositionScanner| match segment {
            Some(index) => node.segment_span(*index),
            None => node.span(scanner),
        };
        let declaring = |field: &FieldRef| match &field.declaring_type {
            Some(declaring) => full_and_short(declaring),
            None => (String::new(), String::new()),
        };
        match self {
            Report::UndefinedField { field, segment, node } => {
                RenderedReport::same(id, vec![field.name.clone()], field_span(node, segment, scanner))
            }
            Report::NotVisibleField { field, segment, node }
            | Report::DeprecatedField { field, segment, node, .. }
            | Report::NonStaticAccessToStaticField { field, segment, node } => {
                let (full, short) = declaring(field);
                RenderedReport::new(
                    id,
                    vec![full, field.name.clone()],
                    vec![short, field.name.clone()],
                    field_span(node, segment, scanner),
                )
            }
            Report::UnusedLocal { variable, node } | Report::UnusedArgument { variable, node } => {
                RenderedReport::same(id, vec![variable.name.clone()], node.span(scanner))
            }
            Report::LocalHidingField { local, field, node } => {
                let (full, short) = declaring(field);
                RenderedReport::new(
                    id,
                    vec![local.name.clone(), full],
                    vec![local.name.clone(), short],
                    node.span(scanner),
                )
            }
            Report::FieldHidingField { field, hidden, node } => {
                let (full, short) = declaring(field);
                let (hidden_full, hidden_short) = declaring(hidden);
                RenderedReport::new(
                    id,
                    vec![full, field.name.clone(), hidden_full],
                    vec![short, field.name.clone(), hidden_short],
                    node.span(scanner),
                )
            }
            other => RenderedReport::same(id, Vec::new(), other.node().range()),
        }
    }

    fn render_javadoc(&self, id: ProblemId, options: &CompilerOptions) -> Option<RenderedReport> {
        let missing_tag_reported = |target: &JavadocTarget| {
            (!target.overriding || options.missing_javadoc_tags_overriding)
                && options.missing_javadoc_tags_visibility.includes(target.visibility)
        };
        let reference_reported =
            |target: &JavadocTarget| options.invalid_javadoc_tags_visibility.includes(target.visibility);

        let rendered = match self {
            Report::JavadocMissing { target, node } => {
                if target.overriding && !options.missing_javadoc_comments_overriding {
                    return None;
                }
                let visibility = javadoc_visibility_argument(options.missing_javadoc_comments_visibility, target.visibility)?;
                RenderedReport::same(id, vec![visibility.to_string()], node.range())
            }
            Report::JavadocMissingParamTag { name, target, node } => {
                if !missing_tag_reported(target) {
                    return None;
                }
                RenderedReport::same(id, vec![name.clone()], node.range())
            }
            Report::JavadocMissingReturnTag { target, node } => {
                if !missing_tag_reported(target) {
                    return None;
                }
                RenderedReport::same(id, Vec::new(), node.range())
            }
            Report::JavadocMissingThrowsTag { exception, target, node } => {
                if !missing_tag_reported(target) {
                    return None;
                }
                let (full, short) = full_and_short(exception);
                RenderedReport::new(id, vec![full], vec![short], node.range())
            }
            Report::JavadocInvalidTag { node } => RenderedReport::same(id, Vec::new(), node.range()),
            Report::JavadocUndefinedField { name, target, node } => {
                if !reference_reported(target) {
                    return None;
                }
                RenderedReport::same(id, vec![name.clone()], node.range())
            }
            Report::JavadocUndefinedType { type_ref, target, node } => {
                if !reference_reported(target) {
                    return None;
                }
                let (full, short) = full_and_short(&leaf(type_ref));
                RenderedReport::new(id, vec![full], vec![short], node.range())
            }
            _ => return None,
        };
        Some(rendered)
    }

    fn render_source(&self, id: ProblemId) -> RenderedReport {
        match self {
            Report::ParsingError { token, expected, node } => {
                let mut arguments = vec![token.clone()];
                arguments.extend(expected.iter().cloned());
                RenderedReport::same(id, arguments, node.range())
            }
            Report::UnhandledWarningToken { token, node } | Report::UnusedWarningToken { token, node } => {
                RenderedReport::same(id, vec![token.clone()], node.range())
            }
            Report::Task { tag, message, node } => {
                RenderedReport::same(id, vec![tag.clone(), message.clone()], node.range())
            }
            other => RenderedReport::same(id, Vec::new(), other.node().range()),
        }
    }
}

/// Visibility name used as message argument when `visibility` falls within
/// `threshold`
pub fn javadoc_visibility_argument(threshold: Visibility, visibility: Visibility) -> Option<&'static str> {
    threshold.includes(visibility).then(|| visibility.as_setting())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn scanner(source: &str) -> PositionScanner {
        let mut scanner = PositionScanner::new();
        scanner.set_source(&source.chars().collect::<Vec<_>>());
        scanner
    }

    fn render(report: &Report, options: &CompilerOptions) -> RenderedReport {
        report
            .render(options, &mut scanner(""))
            .expect("report should render")
    }

    #[test]
    fn test_type_mismatch_with_colliding_short_names() {
        let report = Report::type_mismatch(
            TypeRef::parse("com.a.Foo"),
            TypeRef::parse("com.b.Foo"),
            SourceNode::expression(10, 20),
        );
        let rendered = render(&report, &CompilerOptions::default());
        assert_eq!(rendered.id, ProblemId::TYPE_MISMATCH);
        assert_eq!(rendered.arguments, vec!["com.a.Foo", "com.b.Foo"]);
        assert_eq!(rendered.message_arguments, vec!["com.a.Foo", "com.b.Foo"]);
        assert_eq!(rendered.range, SourceRange::new(10, 20));
    }

    #[test]
    fn test_type_mismatch_with_distinct_short_names() {
        let report = Report::type_mismatch(
            TypeRef::parse("java.lang.String"),
            TypeRef::primitive("int"),
            SourceNode::expression(0, 4),
        );
        let rendered = render(&report, &CompilerOptions::default());
        assert_eq!(rendered.message_arguments, vec!["String", "int"]);
        assert_eq!(rendered.arguments, vec!["java.lang.String", "int"]);
    }

    #[test]
    fn test_missing_type_redirects_mismatch() {
        let report = Report::type_mismatch(
            TypeRef::parse("org.missing.Gone").as_missing(),
            TypeRef::parse("java.lang.String"),
            SourceNode::expression(0, 4),
        );
        assert_eq!(report.id(), ProblemId::UNDEFINED_TYPE);
        let rendered = render(&report, &CompilerOptions::default());
        assert_eq!(rendered.arguments, vec!["org.missing.Gone"]);
        assert_eq!(rendered.message_arguments, vec!["Gone"]);
    }

    #[test]
    fn test_undefined_method_with_varargs() {
        let method = MethodRef::method(
            TypeRef::parse("java.util.Formatter"),
            "format",
            vec![TypeRef::parse("java.lang.String"), TypeRef::primitive("int").array(1)],
        )
        .with_varargs();
        let report = Report::undefined_method(method, SourceNode::expression(0, 9));
        let rendered = render(&report, &CompilerOptions::default());
        assert_eq!(
            rendered.message_arguments,
            vec!["Formatter", "format", "String, int..."]
        );
        assert_eq!(
            rendered.arguments,
            vec!["java.util.Formatter", "format", "java.lang.String, int..."]
        );
    }

    #[test]
    fn test_missing_parameter_type_redirects_method() {
        let method = MethodRef::method(
            TypeRef::parse("p.Service"),
            "call",
            vec![TypeRef::parse("q.Absent").as_missing()],
        );
        let report = Report::undefined_method(method, SourceNode::expression(0, 9));
        assert_eq!(report.id(), ProblemId::MISSING_TYPE_IN_METHOD);
        let rendered = render(&report, &CompilerOptions::default());
        assert_eq!(rendered.message_arguments, vec!["Service", "call", "Absent", "Absent"]);
    }

    #[test]
    fn test_missing_return_type_redirects_method() {
        let method = MethodRef::method(TypeRef::parse("p.Service"), "load", Vec::new())
            .returning(TypeRef::parse("q.Gone").as_missing());
        let report = Report::undefined_method(method, SourceNode::expression(0, 9));
        assert_eq!(report.id(), ProblemId::MISSING_TYPE_IN_METHOD);
        let rendered = render(&report, &CompilerOptions::default());
        assert_eq!(rendered.arguments, vec!["p.Service", "load", "", "q.Gone"]);
        assert_eq!(rendered.message_arguments, vec!["Service", "load", "", "Gone"]);
    }

    #[test]
    fn test_missing_parameter_type_redirects_constructor() {
        let constructor = MethodRef::constructor(
            TypeRef::parse("p.Service"),
            vec![TypeRef::parse("q.Absent").as_missing()],
        );
        let report = Report::undefined_constructor(constructor, SourceNode::expression(0, 9));
        assert_eq!(report.id(), ProblemId::MISSING_TYPE_IN_CONSTRUCTOR);
        let rendered = render(&report, &CompilerOptions::default());
        assert_eq!(rendered.arguments, vec!["p.Service", "q.Absent", "q.Absent"]);
    }

    #[test]
    fn test_undefined_constructor_arguments() {
        let constructor = MethodRef::constructor(TypeRef::parse("p.Point"), vec![TypeRef::primitive("int")]);
        let report = Report::undefined_constructor(constructor, SourceNode::expression(4, 15));
        let rendered = render(&report, &CompilerOptions::default());
        assert_eq!(rendered.id, ProblemId::UNDEFINED_CONSTRUCTOR);
        assert_eq!(rendered.message_arguments, vec!["Point", "int"]);
        assert_eq!(rendered.range, SourceRange::new(4, 15));
    }

    #[test]
    fn test_code_too_large() {
        let method = MethodRef::method(TypeRef::parse("p.Big"), "run", Vec::new());
        let report = Report::code_too_large(method, SourceNode::expression(0, 100));
        assert_eq!(report.id(), ProblemId::BYTECODE_EXCEEDS_64K_LIMIT);
        assert_eq!(render(&report, &CompilerOptions::default()).message_arguments, vec!["run", ""]);
        let clinit = Report::CodeTooLarge {
            method: None,
            node: SourceNode::expression(0, 1),
        };
        assert_eq!(clinit.id(), ProblemId::BYTECODE_EXCEEDS_64K_LIMIT_FOR_CLINIT);
    }

    #[test]
    fn test_unused_import() {
        let report = Report::unused_import(ImportRef::single("java.util.List"), SourceNode::expression(7, 20));
        let rendered = render(&report, &CompilerOptions::default());
        assert_eq!(rendered.arguments, vec!["java.util.List"]);
    }

    #[test]
    fn test_javadoc_missing_visibility_threshold() {
        let mut options = CompilerOptions::default();
        options.missing_javadoc_comments_visibility = Visibility::Protected;
        let node = SourceNode::expression(0, 5);

        let public = Report::JavadocMissing {
            target: JavadocTarget::new(Visibility::Public),
            node: node.clone(),
        };
        assert_eq!(render(&public, &options).arguments, vec!["public"]);

        let private = Report::JavadocMissing {
            target: JavadocTarget::new(Visibility::Private),
            node: node.clone(),
        };
        assert!(private.render(&options, &mut scanner("")).is_none());

        let overriding = Report::JavadocMissing {
            target: JavadocTarget::new(Visibility::Public).overriding(),
            node,
        };
        assert!(overriding.render(&options, &mut scanner("")).is_none());
        options.missing_javadoc_comments_overriding = true;
        assert!(overriding.render(&options, &mut scanner("")).is_some());
    }

    #[test]
    fn test_raw_type_needs_generics() {
        let report = Report::RawTypeReference {
            type_ref: TypeRef::parse("java.util.List"),
            node: SourceNode::type_reference(0, 3),
        };
        let old = CompilerOptions::default().with_source_level(JavaLevel::JDK1_4);
        assert!(report.render(&old, &mut scanner("List l;")).is_none());
        let rendered = render(&report, &CompilerOptions::default());
        assert_eq!(rendered.message_arguments, vec!["List", "List"]);
        assert_eq!(rendered.arguments, vec!["java.util.List", "java.util.List"]);
    }

    #[test]
    fn test_field_in_qualified_name() {
        let field = FieldRef::field(TypeRef::parse("p.Config"), "LIMIT", TypeRef::primitive("int"));
        let node = SourceNode::qualified_name(vec![SourceRange::new(0, 5), SourceRange::new(7, 11)]);
        let report = Report::DeprecatedField {
            field,
            terminally: false,
            segment: Some(1),
            node,
        };
        let rendered = render(&report, &CompilerOptions::default());
        assert_eq!(rendered.id, ProblemId::USING_DEPRECATED_FIELD);
        assert_eq!(rendered.message_arguments, vec!["Config", "LIMIT"]);
        assert_eq!(rendered.range, SourceRange::new(7, 11));
    }

    #[test]
    fn test_field_access_on_expression() {
        let field = FieldRef::field(TypeRef::parse("p.Config"), "limit", TypeRef::primitive("int"));
        let report = Report::NotVisibleField {
            field,
            segment: None,
            node: SourceNode::field_reference(0, 12, 16),
        };
        let rendered = report
            .render(&CompilerOptions::default(), &mut scanner("getConfig().limit"))
            .expect("report should render");
        assert_eq!(rendered.id, ProblemId::NOT_VISIBLE_FIELD);
        assert_eq!(rendered.arguments, vec!["p.Config", "limit"]);
        assert_eq!(rendered.range, SourceRange::new(12, 16));
    }

    #[test]
    fn test_parsing_error_without_suggestion() {
        let report = Report::ParsingError {
            token: "else".to_string(),
            expected: None,
            node: SourceNode::expression(3, 6),
        };
        assert_eq!(report.id(), ProblemId::PARSING_ERROR_NO_SUGGESTION);
        assert_eq!(render(&report, &CompilerOptions::default()).arguments, vec!["else"]);
    }
}
