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

//! Catalog of every problem the compiler can raise
//!
//! Each entry declares the identifier constant, its stable catalog name and
//! its message template. Templates use `{n}` placeholders that are filled
//! from the short (message) arguments of a problem.

use super::id::ProblemId;
use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

/// Static description of one catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProblemDescriptor {
    /// Problem identifier
    pub id: ProblemId,
    /// Stable name, as used in settings files and on the command line
    pub name: &'static str,
    /// Message template
    pub template: &'static str,
}

const TYPE: u32 = ProblemId::TYPE_RELATED;
const FIELD: u32 = ProblemId::FIELD_RELATED;
const METHOD: u32 = ProblemId::METHOD_RELATED;
const CTOR: u32 = ProblemId::CONSTRUCTOR_RELATED;
const IMPORT: u32 = ProblemId::IMPORT_RELATED;
const INTERNAL: u32 = ProblemId::INTERNAL;
const SYNTAX: u32 = ProblemId::SYNTAX;
const JAVADOC: u32 = ProblemId::JAVADOC;

macro_rules! problems {
    ($($konst:ident = $value:expr => $name:literal, $template:literal;)*) => {
        #[allow(missing_docs)]
        impl ProblemId {
            $(pub const $konst: ProblemId = ProblemId($value);)*
        }

        static CATALOG: &[ProblemDescriptor] = &[
            $(ProblemDescriptor {
                id: ProblemId::$konst,
                name: $name,
                template: $template,
            },)*
        ];
    };
}

problems! {
    // Types
    OBJECT_HAS_NO_SUPERCLASS = TYPE + 1 => "ObjectHasNoSuperclass", "java.lang.Object cannot have a superclass";
    UNDEFINED_TYPE = TYPE + 2 => "UndefinedType", "{0} cannot be resolved to a type";
    NOT_VISIBLE_TYPE = TYPE + 3 => "NotVisibleType", "The type {0} is not visible";
    AMBIGUOUS_TYPE = TYPE + 4 => "AmbiguousType", "The type {0} is ambiguous";
    USING_DEPRECATED_TYPE = TYPE + 5 => "UsingDeprecatedType", "The type {0} is deprecated";
    INTERNAL_TYPE_NAME_PROVIDED = TYPE + 6 => "InternalTypeNameProvided", "The nested type {0} cannot be referenced using its binary name";
    UNUSED_PRIVATE_TYPE = INTERNAL + TYPE + 7 => "UnusedPrivateType", "The type {0} is never used locally";
    INCOMPATIBLE_TYPES_IN_EQUALITY_OPERATOR = TYPE + 15 => "IncompatibleTypesInEqualityOperator", "Incompatible operand types {0} and {1}";
    INCOMPATIBLE_TYPES_IN_CONDITIONAL_OPERATOR = TYPE + 16 => "IncompatibleTypesInConditionalOperator", "Incompatible conditional operand types {0} and {1}";
    TYPE_MISMATCH = TYPE + 17 => "TypeMismatch", "Type mismatch: cannot convert from {0} to {1}";
    INDIRECT_ACCESS_TO_STATIC_TYPE = INTERNAL + TYPE + 18 => "IndirectAccessToStaticType", "The static type {0} should be accessed directly via its declaring type {1}";
    MISSING_ENCLOSING_INSTANCE_FOR_CONSTRUCTOR_CALL = TYPE + 20 => "MissingEnclosingInstanceForConstructorCall", "No enclosing instance of type {0} is available due to some intermediate constructor invocation";
    MISSING_ENCLOSING_INSTANCE = TYPE + 21 => "MissingEnclosingInstance", "No enclosing instance of the type {0} is accessible in scope";
    INCORRECT_ENCLOSING_INSTANCE_REFERENCE = TYPE + 22 => "IncorrectEnclosingInstanceReference", "Illegal enclosing instance specification for type {0}";
    ILLEGAL_ENCLOSING_INSTANCE_SPECIFICATION = TYPE + 23 => "IllegalEnclosingInstanceSpecification", "Cannot use an expression of the type {0} as a valid enclosing instance";
    CANNOT_DEFINE_STATIC_INITIALIZER_IN_LOCAL_TYPE = INTERNAL + 24 => "CannotDefineStaticInitializerInLocalType", "Cannot define static initializer in inner type {0}";
    OUTER_LOCAL_MUST_BE_FINAL = INTERNAL + 25 => "OuterLocalMustBeFinal", "Cannot refer to a non-final variable {0} inside an inner class defined in a different method";
    CANNOT_DEFINE_INTERFACE_IN_LOCAL_TYPE = INTERNAL + 26 => "CannotDefineInterfaceInLocalType", "The member interface {0} can only be defined inside a top-level class or interface";
    ANONYMOUS_CLASS_CANNOT_EXTEND_FINAL_CLASS = TYPE + 29 => "AnonymousClassCannotExtendFinalClass", "An anonymous class cannot subclass the final class {0}";
    TYPE_HIDING_TYPE = TYPE + 33 => "TypeHidingType", "The type {0} is hiding the type {1}";

    // Variables
    UNDEFINED_NAME = INTERNAL + FIELD + 50 => "UndefinedName", "{0} cannot be resolved";
    UNINITIALIZED_LOCAL_VARIABLE = INTERNAL + 51 => "UninitializedLocalVariable", "The local variable {0} may not have been initialized";
    VARIABLE_TYPE_CANNOT_BE_VOID = INTERNAL + 52 => "VariableTypeCannotBeVoid", "void is an invalid type for the variable {0}";
    REDEFINED_LOCAL = INTERNAL + 55 => "RedefinedLocal", "Duplicate local variable {0}";
    REDEFINED_ARGUMENT = INTERNAL + 56 => "RedefinedArgument", "Duplicate parameter {0}";
    DUPLICATE_FINAL_LOCAL_INITIALIZATION = INTERNAL + 57 => "DuplicateFinalLocalInitialization", "The final local variable {0} may already have been assigned";
    NON_BLANK_FINAL_LOCAL_ASSIGNMENT = INTERNAL + 58 => "NonBlankFinalLocalAssignment", "The final local variable {0} cannot be assigned. It must be blank and not using a compound assignment";
    PARAMETER_ASSIGNMENT = INTERNAL + 59 => "ParameterAssignment", "The parameter {0} should not be assigned";
    FINAL_OUTER_LOCAL_ASSIGNMENT = INTERNAL + 60 => "FinalOuterLocalAssignment", "The final local variable {0} cannot be assigned, since it is defined in an enclosing type";
    LOCAL_VARIABLE_IS_NEVER_USED = INTERNAL + 61 => "LocalVariableIsNeverUsed", "The value of the local variable {0} is not used";
    ARGUMENT_IS_NEVER_USED = INTERNAL + 62 => "ArgumentIsNeverUsed", "The value of the parameter {0} is not used";
    BYTECODE_EXCEEDS_64K_LIMIT = INTERNAL + 63 => "BytecodeExceeds64KLimit", "The code of method {0}({1}) is exceeding the 65535 bytes limit";
    BYTECODE_EXCEEDS_64K_LIMIT_FOR_CLINIT = INTERNAL + 64 => "BytecodeExceeds64KLimitForClinit", "The code for the static initializer is exceeding the 65535 bytes limit";
    TOO_MANY_ARGUMENT_SLOTS = INTERNAL + 65 => "TooManyArgumentSlots", "Too many parameters, parameter {0} is exceeding the limit of 255 words eligible for method parameters";
    TOO_MANY_LOCAL_VARIABLE_SLOTS = INTERNAL + 66 => "TooManyLocalVariableSlots", "Too many local variables, local variable {0} is exceeding the limit of 65535 words eligible for method local variables";
    TOO_MANY_ARRAY_DIMENSIONS = INTERNAL + 68 => "TooManyArrayDimensions", "Type {0} exceeds the limit of 255 array dimensions";
    BYTECODE_EXCEEDS_64K_LIMIT_FOR_CONSTRUCTOR = INTERNAL + 69 => "BytecodeExceeds64KLimitForConstructor", "The code of constructor {0}({1}) is exceeding the 65535 bytes limit";

    // Fields
    UNDEFINED_FIELD = FIELD + 70 => "UndefinedField", "{0} cannot be resolved or is not a field";
    NOT_VISIBLE_FIELD = FIELD + 71 => "NotVisibleField", "The field {0}.{1} is not visible";
    AMBIGUOUS_FIELD = FIELD + 72 => "AmbiguousField", "The field {1} is ambiguous";
    USING_DEPRECATED_FIELD = FIELD + 73 => "UsingDeprecatedField", "The field {0}.{1} is deprecated";
    NON_STATIC_FIELD_FROM_STATIC_INVOCATION = FIELD + 74 => "NonStaticFieldFromStaticInvocation", "Cannot make a static reference to the non-static field {1}";
    REFERENCE_TO_FORWARD_FIELD = FIELD + INTERNAL + 75 => "ReferenceToForwardField", "Cannot reference a field before it is defined";
    NON_STATIC_ACCESS_TO_STATIC_FIELD = INTERNAL + FIELD + 76 => "NonStaticAccessToStaticField", "The static field {0}.{1} should be accessed in a static way";
    UNUSED_PRIVATE_FIELD = INTERNAL + FIELD + 77 => "UnusedPrivateField", "The value of the field {0}.{1} is not used";
    INDIRECT_ACCESS_TO_STATIC_FIELD = INTERNAL + FIELD + 78 => "IndirectAccessToStaticField", "The static field {0}.{1} should be accessed directly";
    UNQUALIFIED_FIELD_ACCESS = INTERNAL + FIELD + 79 => "UnqualifiedFieldAccess", "Unqualified access to the field {0}.{1}";
    FINAL_FIELD_ASSIGNMENT = FIELD + 80 => "FinalFieldAssignment", "The final field {0}.{1} cannot be assigned";
    UNINITIALIZED_BLANK_FINAL_FIELD = FIELD + 81 => "UninitializedBlankFinalField", "The blank final field {1} may not have been initialized";
    DUPLICATE_BLANK_FINAL_FIELD_INITIALIZATION = FIELD + 82 => "DuplicateBlankFinalFieldInitialization", "The final field {1} may already have been assigned";
    UNRESOLVED_VARIABLE = FIELD + 83 => "UnresolvedVariable", "{0} cannot be resolved to a variable";

    // Hiding
    LOCAL_VARIABLE_HIDING_LOCAL_VARIABLE = INTERNAL + 90 => "LocalVariableHidingLocalVariable", "The local variable {0} is hiding another local variable defined in an enclosing scope";
    LOCAL_VARIABLE_HIDING_FIELD = INTERNAL + FIELD + 91 => "LocalVariableHidingField", "The local variable {0} is hiding a field from type {1}";
    FIELD_HIDING_LOCAL_VARIABLE = INTERNAL + FIELD + 92 => "FieldHidingLocalVariable", "The field {0}.{1} is hiding another local variable defined in an enclosing scope";
    FIELD_HIDING_FIELD = INTERNAL + FIELD + 93 => "FieldHidingField", "The field {0}.{1} is hiding a field from type {2}";
    ARGUMENT_HIDING_LOCAL_VARIABLE = INTERNAL + 94 => "ArgumentHidingLocalVariable", "The parameter {0} is hiding another local variable defined in an enclosing scope";
    ARGUMENT_HIDING_FIELD = INTERNAL + 95 => "ArgumentHidingField", "The parameter {0} is hiding a field from type {1}";
    MISSING_SERIAL_VERSION = INTERNAL + 96 => "MissingSerialVersion", "The serializable class {0} does not declare a static final serialVersionUID field of type long";

    // Methods
    UNDEFINED_METHOD = METHOD + 100 => "UndefinedMethod", "The method {1}({2}) is undefined for the type {0}";
    NOT_VISIBLE_METHOD = METHOD + 101 => "NotVisibleMethod", "The method {1}({2}) from the type {0} is not visible";
    AMBIGUOUS_METHOD = METHOD + 102 => "AmbiguousMethod", "The method {1}({2}) is ambiguous for the type {0}";
    USING_DEPRECATED_METHOD = METHOD + 103 => "UsingDeprecatedMethod", "The method {1}({2}) from the type {0} is deprecated";
    DIRECT_INVOCATION_OF_ABSTRACT_METHOD = METHOD + 104 => "DirectInvocationOfAbstractMethod", "Cannot directly invoke the abstract method {1}({2}) for the type {0}";
    VOID_METHOD_RETURNS_VALUE = METHOD + 105 => "VoidMethodReturnsValue", "Void methods cannot return a value";
    METHOD_RETURNS_VOID = METHOD + 106 => "MethodReturnsVoid", "Cannot return a void result";
    METHOD_REQUIRES_BODY = INTERNAL + METHOD + 107 => "MethodRequiresBody", "This method requires a body instead of a semicolon";
    SHOULD_RETURN_VALUE = INTERNAL + METHOD + 108 => "ShouldReturnValue", "This method must return a result of type {0}";
    METHOD_BUT_WITH_CONSTRUCTOR_NAME = METHOD + 110 => "MethodButWithConstructorName", "This method has a constructor name";
    MISSING_RETURN_TYPE = TYPE + 111 => "MissingReturnType", "Return type for the method is missing";
    BODY_FOR_NATIVE_METHOD = INTERNAL + METHOD + 112 => "BodyForNativeMethod", "Native methods do not specify a body";
    BODY_FOR_ABSTRACT_METHOD = INTERNAL + METHOD + 113 => "BodyForAbstractMethod", "Abstract methods do not specify a body";
    NO_MESSAGE_SEND_ON_BASE_TYPE = METHOD + 114 => "NoMessageSendOnBaseType", "Cannot invoke {1}({2}) on the primitive type {0}";
    PARAMETER_MISMATCH = METHOD + 115 => "ParameterMismatch", "The method {1}({2}) in the type {0} is not applicable for the arguments ({3})";
    NO_MESSAGE_SEND_ON_ARRAY_TYPE = METHOD + 116 => "NoMessageSendOnArrayType", "Cannot invoke {1}({2}) on the array type {0}";
    NON_STATIC_ACCESS_TO_STATIC_METHOD = INTERNAL + METHOD + 117 => "NonStaticAccessToStaticMethod", "The static method {1}({2}) from the type {0} should be accessed in a static way";
    UNUSED_PRIVATE_METHOD = INTERNAL + METHOD + 118 => "UnusedPrivateMethod", "The method {1}({2}) from the type {0} is never used locally";
    INDIRECT_ACCESS_TO_STATIC_METHOD = INTERNAL + METHOD + 119 => "IndirectAccessToStaticMethod", "The static method {1}({2}) from the type {0} should be accessed directly";
    MISSING_TYPE_IN_METHOD = METHOD + 120 => "MissingTypeInMethod", "The method {1}({2}) from the type {0} refers to the missing type {3}";
    METHOD_CAN_BE_STATIC = INTERNAL + METHOD + 121 => "MethodCanBeStatic", "The method {1}({2}) from the type {0} can be declared as static";
    METHOD_CAN_BE_POTENTIALLY_STATIC = INTERNAL + METHOD + 122 => "MethodCanBePotentiallyStatic", "The method {1}({2}) from the type {0} can potentially be declared as static";

    // Constructors
    UNDEFINED_CONSTRUCTOR = CTOR + 130 => "UndefinedConstructor", "The constructor {0}({1}) is undefined";
    NOT_VISIBLE_CONSTRUCTOR = CTOR + 131 => "NotVisibleConstructor", "The constructor {0}({1}) is not visible";
    AMBIGUOUS_CONSTRUCTOR = CTOR + 132 => "AmbiguousConstructor", "The constructor {0}({1}) is ambiguous";
    USING_DEPRECATED_CONSTRUCTOR = CTOR + 133 => "UsingDeprecatedConstructor", "The constructor {0}({1}) is deprecated";
    UNUSED_PRIVATE_CONSTRUCTOR = INTERNAL + METHOD + 134 => "UnusedPrivateConstructor", "The constructor {0}({1}) is never used locally";
    INSTANCE_FIELD_DURING_CONSTRUCTOR_INVOCATION = CTOR + 135 => "InstanceFieldDuringConstructorInvocation", "Cannot refer to an instance field {0} while explicitly invoking a constructor";
    INSTANCE_METHOD_DURING_CONSTRUCTOR_INVOCATION = CTOR + 136 => "InstanceMethodDuringConstructorInvocation", "Cannot refer to an instance method while explicitly invoking a constructor";
    RECURSIVE_CONSTRUCTOR_INVOCATION = CTOR + 137 => "RecursiveConstructorInvocation", "Recursive constructor invocation {0}({1})";
    THIS_SUPER_DURING_CONSTRUCTOR_INVOCATION = CTOR + 138 => "ThisSuperDuringConstructorInvocation", "Cannot refer to 'this' nor 'super' while explicitly invoking a constructor";
    MISSING_TYPE_IN_CONSTRUCTOR = CTOR + 139 => "MissingTypeInConstructor", "The constructor {0}({1}) refers to the missing type {2}";
    CONSTRUCTOR_PARAMETER_MISMATCH = CTOR + 140 => "ConstructorParameterMismatch", "The constructor {0}({1}) is not applicable for the arguments ({2})";
    UNDEFINED_CONSTRUCTOR_IN_DEFAULT_CONSTRUCTOR = CTOR + 141 => "UndefinedConstructorInDefaultConstructor", "Implicit super constructor {0}({1}) is undefined for default constructor. Must define an explicit constructor";

    // Expressions and statements
    ARRAY_REFERENCE_REQUIRED = INTERNAL + 150 => "ArrayReferenceRequired", "The type of the expression must be an array type but it resolved to {0}";
    NO_IMPLICIT_STRING_CONVERSION_FOR_CHAR_ARRAY_EXPRESSION = INTERNAL + 151 => "NoImplicitStringConversionForCharArrayExpression", "Must explicitly convert the char[] to a String";
    STRING_CONSTANT_IS_EXCEEDING_UTF8_LIMIT = INTERNAL + 152 => "StringConstantIsExceedingUtf8Limit", "The string literal is longer than 65535 characters";
    NON_CONSTANT_EXPRESSION = INTERNAL + 153 => "NonConstantExpression", "Case expressions must be constant expressions";
    NUMERIC_VALUE_OUT_OF_RANGE = INTERNAL + 154 => "NumericValueOutOfRange", "The literal {1} of type {0} is out of range";
    ILLEGAL_CAST = TYPE + 156 => "IllegalCast", "Cannot cast from {0} to {1}";
    INVALID_CLASS_INSTANTIATION = TYPE + 157 => "InvalidClassInstantiation", "Cannot instantiate the type {0}";
    INVALID_OPERATOR = INTERNAL + 160 => "InvalidOperator", "The operator {0} is undefined for the argument type(s) {1}";
    CODE_CANNOT_BE_REACHED = INTERNAL + 161 => "CodeCannotBeReached", "Unreachable code";
    CANNOT_RETURN_IN_INITIALIZER = INTERNAL + 162 => "CannotReturnInInitializer", "Cannot return from within an initializer";
    INITIALIZER_MUST_COMPLETE_NORMALLY = INTERNAL + 163 => "InitializerMustCompleteNormally", "Initializer does not complete normally";
    INVALID_VOID_EXPRESSION = INTERNAL + 164 => "InvalidVoidExpression", "Expression must return a value";
    MASKED_CATCH = TYPE + 165 => "MaskedCatch", "Unreachable catch block for {0}. It is already handled by the catch block for {1}";
    DUPLICATE_DEFAULT_CASE = INTERNAL + 166 => "DuplicateDefaultCase", "The default case is already defined";
    UNREACHABLE_CATCH = TYPE + METHOD + 167 => "UnreachableCatch", "Unreachable catch block for {0}. This exception is never thrown from the try statement body";
    UNHANDLED_EXCEPTION = TYPE + 168 => "UnhandledException", "Unhandled exception type {0}";
    INCORRECT_SWITCH_TYPE = TYPE + 169 => "IncorrectSwitchType", "Cannot switch on a value of type {0}. Only convertible int values or enum variables are permitted";
    DUPLICATE_CASE = FIELD + 170 => "DuplicateCase", "Duplicate case";
    DUPLICATE_LABEL = INTERNAL + 171 => "DuplicateLabel", "Duplicate label {0}";
    INVALID_BREAK = INTERNAL + 172 => "InvalidBreak", "break cannot be used outside of a loop or a switch";
    INVALID_CONTINUE = INTERNAL + 173 => "InvalidContinue", "continue cannot be used outside of a loop";
    UNDEFINED_LABEL = INTERNAL + 174 => "UndefinedLabel", "The label {0} is missing";
    INVALID_TYPE_TO_SYNCHRONIZED = INTERNAL + 175 => "InvalidTypeToSynchronized", "Cannot synchronize on the primitive type {0}";
    INVALID_NULL_TO_SYNCHRONIZED = INTERNAL + 176 => "InvalidNullToSynchronized", "Cannot synchronize on a null value";
    CANNOT_THROW_NULL = INTERNAL + 177 => "CannotThrowNull", "Cannot throw null as an exception";
    ASSIGNMENT_HAS_NO_EFFECT = INTERNAL + 178 => "AssignmentHasNoEffect", "The assignment to variable {0} has no effect";
    POSSIBLE_ACCIDENTAL_BOOLEAN_ASSIGNMENT = INTERNAL + 179 => "PossibleAccidentalBooleanAssignment", "Possible accidental assignment in place of a comparison. A condition expression should not be reduced to an assignment";
    SUPERFLUOUS_SEMICOLON = INTERNAL + 180 => "SuperfluousSemicolon", "Unnecessary semicolon";
    UNNECESSARY_CAST = INTERNAL + TYPE + 181 => "UnnecessaryCast", "Unnecessary cast from {0} to {1}";
    UNNECESSARY_INSTANCEOF = INTERNAL + TYPE + 183 => "UnnecessaryInstanceof", "The expression of type {0} is already an instance of type {1}";
    FINALLY_MUST_COMPLETE_NORMALLY = INTERNAL + 184 => "FinallyMustCompleteNormally", "finally block does not complete normally";
    UNUSED_METHOD_DECLARED_THROWN_EXCEPTION = INTERNAL + 185 => "UnusedMethodDeclaredThrownException", "The declared exception {3} is not actually thrown by the method {1}({2}) from type {0}";
    UNUSED_CONSTRUCTOR_DECLARED_THROWN_EXCEPTION = INTERNAL + 186 => "UnusedConstructorDeclaredThrownException", "The declared exception {2} is not actually thrown by the constructor {0}({1})";
    INVALID_CATCH_BLOCK_SEQUENCE = INTERNAL + TYPE + 187 => "InvalidCatchBlockSequence", "Unreachable catch block for {0}. It is already handled by the catch block for {1}";
    EMPTY_CONTROL_FLOW_STATEMENT = INTERNAL + TYPE + 188 => "EmptyControlFlowStatement", "Empty control-flow statement";
    UNNECESSARY_ELSE = INTERNAL + 189 => "UnnecessaryElse", "Statement unnecessarily nested within else clause. The corresponding then clause does not complete normally";
    NEED_TO_EMULATE_FIELD_READ_ACCESS = FIELD + 190 => "NeedToEmulateFieldReadAccess", "Read access to enclosing field {0}.{1} is emulated by a synthetic accessor method";
    NEED_TO_EMULATE_FIELD_WRITE_ACCESS = FIELD + 191 => "NeedToEmulateFieldWriteAccess", "Write access to enclosing field {0}.{1} is emulated by a synthetic accessor method";
    NEED_TO_EMULATE_METHOD_ACCESS = METHOD + 192 => "NeedToEmulateMethodAccess", "Access to enclosing method {1}({2}) from the type {0} is emulated by a synthetic accessor method";
    NEED_TO_EMULATE_CONSTRUCTOR_ACCESS = METHOD + 193 => "NeedToEmulateConstructorAccess", "Access to enclosing constructor {0}({1}) is emulated by a synthetic accessor method";
    FALLTHROUGH_CASE = INTERNAL + 194 => "FallthroughCase", "Switch case may be entered by falling through previous case";
    INHERITED_METHOD_HIDES_ENCLOSING_NAME = METHOD + 195 => "InheritedMethodHidesEnclosingName", "The method {1} is defined in an inherited type and an enclosing scope";
    INHERITED_FIELD_HIDES_ENCLOSING_NAME = FIELD + 196 => "InheritedFieldHidesEnclosingName", "The field {1} is defined in an inherited type and an enclosing scope";
    INHERITED_TYPE_HIDES_ENCLOSING_NAME = TYPE + 197 => "InheritedTypeHidesEnclosingName", "The type {0} is defined in an inherited type and an enclosing scope";
    ILLEGAL_USAGE_OF_QUALIFIED_TYPE_REFERENCE = INTERNAL + SYNTAX + 198 => "IllegalUsageOfQualifiedTypeReference", "Illegal usage of the qualified type reference {0}";
    UNUSED_LABEL = INTERNAL + 199 => "UnusedLabel", "The label {0} is never explicitly referenced";
    THIS_IN_STATIC_CONTEXT = INTERNAL + 200 => "ThisInStaticContext", "Cannot use this in a static context";
    STATIC_METHOD_REQUESTED = INTERNAL + METHOD + 201 => "StaticMethodRequested", "Cannot make a static reference to the non-static method {1}({2}) from the type {0}";
    ILLEGAL_DIMENSION = INTERNAL + 202 => "IllegalDimension", "Cannot specify an array dimension after an empty dimension";
    INVALID_TYPE_EXPRESSION = INTERNAL + 203 => "InvalidTypeExpression", "The type {0} cannot be used as an expression";
    COMPARING_IDENTICAL = INTERNAL + 211 => "ComparingIdentical", "Comparing identical expressions";

    // Syntax
    PARSING_ERROR = SYNTAX + INTERNAL + 204 => "ParsingError", "Syntax error on token \"{0}\", {1} expected";
    PARSING_ERROR_NO_SUGGESTION = SYNTAX + INTERNAL + 205 => "ParsingErrorNoSuggestion", "Syntax error on token \"{0}\"";
    INVALID_UNARY_EXPRESSION = SYNTAX + INTERNAL + 206 => "InvalidUnaryExpression", "Invalid argument to operation ++/--";
    INTERFACE_CANNOT_HAVE_CONSTRUCTORS = SYNTAX + INTERNAL + 207 => "InterfaceCannotHaveConstructors", "Interfaces cannot have constructors";
    ARRAY_CONSTANTS_ONLY_IN_ARRAY_INITIALIZERS = SYNTAX + INTERNAL + 208 => "ArrayConstantsOnlyInArrayInitializers", "Array constants can only be used in initializers";
    PARSING_ERROR_ON_KEYWORD = SYNTAX + INTERNAL + 209 => "ParsingErrorOnKeyword", "Syntax error on keyword \"{0}\"; {1} expected";
    PARSING_ERROR_ON_KEYWORD_NO_SUGGESTION = SYNTAX + INTERNAL + 210 => "ParsingErrorOnKeywordNoSuggestion", "Syntax error on keyword \"{0}\"";
    UNMATCHED_BRACKET = SYNTAX + INTERNAL + 220 => "UnmatchedBracket", "Unmatched bracket";
    NO_FIELD_ON_BASE_TYPE = FIELD + 221 => "NoFieldOnBaseType", "The primitive type {0} of {1} does not have a field {2}";
    INVALID_EXPRESSION_AS_STATEMENT = SYNTAX + INTERNAL + 222 => "InvalidExpressionAsStatement", "Syntax error, insert \"AssignmentOperator Expression\" to complete Expression";
    EXPRESSION_SHOULD_BE_A_VARIABLE = SYNTAX + INTERNAL + 223 => "ExpressionShouldBeAVariable", "The left-hand side of an assignment must be a variable";
    MISSING_SEMI_COLON = SYNTAX + INTERNAL + 224 => "MissingSemiColon", "Syntax error, insert \";\" to complete {0}";
    INVALID_PARENTHESIZED_EXPRESSION = SYNTAX + INTERNAL + 225 => "InvalidParenthesizedExpression", "Syntax error on token \"(\", invalid parenthesized expression";
    PARSING_ERROR_INSERT_TOKEN_BEFORE = SYNTAX + INTERNAL + 230 => "ParsingErrorInsertTokenBefore", "Syntax error on token \"{0}\", {1} expected before this token";
    PARSING_ERROR_INSERT_TOKEN_AFTER = SYNTAX + INTERNAL + 231 => "ParsingErrorInsertTokenAfter", "Syntax error on token \"{0}\", {1} expected after this token";
    PARSING_ERROR_DELETE_TOKEN = SYNTAX + INTERNAL + 232 => "ParsingErrorDeleteToken", "Syntax error on token \"{0}\", delete this token";
    PARSING_ERROR_DELETE_TOKENS = SYNTAX + INTERNAL + 233 => "ParsingErrorDeleteTokens", "Syntax error on tokens, delete these tokens";
    PARSING_ERROR_MERGE_TOKENS = SYNTAX + INTERNAL + 234 => "ParsingErrorMergeTokens", "Syntax error on tokens \"{0}\", {1} expected";
    PARSING_ERROR_INVALID_TOKEN = SYNTAX + INTERNAL + 235 => "ParsingErrorInvalidToken", "Syntax error on token \"{0}\", {1} expected";
    PARSING_ERROR_MISPLACED_CONSTRUCT = SYNTAX + INTERNAL + 236 => "ParsingErrorMisplacedConstruct", "Syntax error on token(s), misplaced construct(s)";
    PARSING_ERROR_REPLACE_TOKENS = SYNTAX + INTERNAL + 237 => "ParsingErrorReplaceTokens", "Syntax error on tokens, {0} expected instead";
    PARSING_ERROR_NO_SUGGESTION_FOR_TOKENS = SYNTAX + INTERNAL + 238 => "ParsingErrorNoSuggestionForTokens", "Syntax error on tokens, delete these tokens";
    PARSING_ERROR_UNEXPECTED_EOF = SYNTAX + INTERNAL + 239 => "ParsingErrorUnexpectedEOF", "Syntax error, unexpected {0}";
    PARSING_ERROR_INSERT_TO_COMPLETE = SYNTAX + INTERNAL + 240 => "ParsingErrorInsertToComplete", "Syntax error, insert \"{0}\" to complete {1}";
    PARSING_ERROR_INSERT_TO_COMPLETE_SCOPE = SYNTAX + INTERNAL + 241 => "ParsingErrorInsertToCompleteScope", "Syntax error, insert \"{0}\" to complete scope";
    PARSING_ERROR_INSERT_TO_COMPLETE_PHRASE = SYNTAX + INTERNAL + 242 => "ParsingErrorInsertToCompletePhrase", "Syntax error, insert \"{0}\" to complete phrase";
    END_OF_SOURCE = SYNTAX + INTERNAL + 250 => "EndOfSource", "Syntax error, unexpected end of file";
    INVALID_HEXA = SYNTAX + INTERNAL + 251 => "InvalidHexa", "Invalid hex literal number";
    INVALID_OCTAL = SYNTAX + INTERNAL + 252 => "InvalidOctal", "Invalid octal literal number";
    INVALID_CHARACTER_CONSTANT = SYNTAX + INTERNAL + 253 => "InvalidCharacterConstant", "Invalid character constant";
    INVALID_ESCAPE = SYNTAX + INTERNAL + 254 => "InvalidEscape", "Invalid escape sequence (valid ones are  \\b  \\t  \\n  \\f  \\r  \\\"  \\'  \\\\ )";
    INVALID_INPUT = SYNTAX + INTERNAL + 255 => "InvalidInput", "Invalid character";
    INVALID_UNICODE_ESCAPE = SYNTAX + INTERNAL + 256 => "InvalidUnicodeEscape", "Invalid unicode";
    INVALID_FLOAT = SYNTAX + INTERNAL + 257 => "InvalidFloat", "Invalid float literal number";
    NULL_SOURCE_STRING = SYNTAX + INTERNAL + 258 => "NullSourceString", "Null source string";
    UNTERMINATED_STRING = SYNTAX + INTERNAL + 259 => "UnterminatedString", "String literal is not properly closed by a double-quote";
    UNTERMINATED_COMMENT = SYNTAX + INTERNAL + 260 => "UnterminatedComment", "Unexpected end of comment";
    NON_EXTERNALIZED_STRING_LITERAL = INTERNAL + 261 => "NonExternalizedStringLiteral", "Non-externalized string literal; it should be followed by //$NON-NLS-<n>$";
    INVALID_DIGIT = SYNTAX + INTERNAL + 262 => "InvalidDigit", "Invalid digit (valid ones are 0..9)";
    INVALID_LOW_SURROGATE = SYNTAX + INTERNAL + 263 => "InvalidLowSurrogate", "Invalid low surrogate: must be within 0xDC00 and 0xDFFF";
    INVALID_HIGH_SURROGATE = SYNTAX + INTERNAL + 264 => "InvalidHighSurrogate", "Invalid high surrogate: must be within 0xD800 and 0xDBFF";
    UNNECESSARY_NLS_TAG = INTERNAL + 265 => "UnnecessaryNLSTag", "Unnecessary $NON-NLS$ tag";
    INVALID_BINARY = SYNTAX + INTERNAL + 266 => "InvalidBinary", "Invalid binary literal number (only '0' and '1' are expected)";
    BINARY_LITERAL_NOT_BELOW_17 = SYNTAX + INTERNAL + 267 => "BinaryLiteralNotBelow17", "Binary literals can only be used with source level 1.7 or greater";
    ILLEGAL_UNDERSCORE_POSITION = SYNTAX + INTERNAL + 268 => "IllegalUnderscorePosition", "Underscores have to be located within digits";
    UNDERSCORES_IN_LITERALS_NOT_BELOW_17 = SYNTAX + INTERNAL + 269 => "UnderscoresInLiteralsNotBelow17", "Underscores can only be used with source level 1.7 or greater";
    ILLEGAL_HEXA_LITERAL = SYNTAX + INTERNAL + 270 => "IllegalHexaLiteral", "Invalid hexadecimal literal number";

    // Access restrictions
    DISCOURAGED_REFERENCE = TYPE + 280 => "DiscouragedReference", "Discouraged access: {0}";
    FORBIDDEN_REFERENCE = TYPE + 307 => "ForbiddenReference", "Access restriction: {0}";

    // Type declarations
    INTERFACE_CANNOT_HAVE_INITIALIZERS = TYPE + 300 => "InterfaceCannotHaveInitializers", "The interface {0} cannot define an initializer";
    DUPLICATE_MODIFIER_FOR_TYPE = TYPE + 301 => "DuplicateModifierForType", "Duplicate modifier for the type {0}";
    ILLEGAL_MODIFIER_FOR_CLASS = TYPE + 302 => "IllegalModifierForClass", "Illegal modifier for the class {0}; only public, abstract & final are permitted";
    ILLEGAL_MODIFIER_FOR_INTERFACE = TYPE + 303 => "IllegalModifierForInterface", "Illegal modifier for the interface {0}; only public & abstract are permitted";
    ILLEGAL_MODIFIER_FOR_MEMBER_CLASS = TYPE + 304 => "IllegalModifierForMemberClass", "Illegal modifier for the member class {0}; only public, protected, private, static, abstract & final are permitted";
    ILLEGAL_MODIFIER_FOR_MEMBER_INTERFACE = TYPE + 305 => "IllegalModifierForMemberInterface", "Illegal modifier for the member interface {0}; only public, protected, private, static & abstract are permitted";
    ILLEGAL_MODIFIER_FOR_LOCAL_CLASS = TYPE + 306 => "IllegalModifierForLocalClass", "Illegal modifier for the local class {0}; only abstract or final is permitted";
    ILLEGAL_MODIFIER_COMBINATION_FINAL_ABSTRACT_FOR_CLASS = TYPE + 308 => "IllegalModifierCombinationFinalAbstractForClass", "The class {0} can be either abstract or final, not both";
    SUPERCLASS_MUST_BE_A_CLASS = TYPE + 312 => "SuperclassMustBeAClass", "The type {0} cannot be the superclass of {1}; a superclass must be a class";
    CLASS_EXTEND_FINAL_CLASS = TYPE + 313 => "ClassExtendFinalClass", "The type {1} cannot subclass the final class {0}";
    DUPLICATE_SUPER_INTERFACE = TYPE + 314 => "DuplicateSuperInterface", "Duplicate interface {0} for the type {1}";
    SUPER_INTERFACE_MUST_BE_AN_INTERFACE = TYPE + 315 => "SuperInterfaceMustBeAnInterface", "The type {0} cannot be a superinterface of {1}; a superinterface must be an interface";
    HIERARCHY_CIRCULARITY_SELF_REFERENCE = TYPE + 316 => "HierarchyCircularitySelfReference", "Cycle detected: the type {0} cannot extend/implement itself or one of its own member types";
    HIERARCHY_CIRCULARITY = TYPE + 317 => "HierarchyCircularity", "Cycle detected: a cycle exists in the type hierarchy between {0} and {1}";
    HIDING_ENCLOSING_TYPE = TYPE + 318 => "HidingEnclosingType", "The nested type {0} cannot hide an enclosing type";
    DUPLICATE_NESTED_TYPE = TYPE + 319 => "DuplicateNestedType", "The type {0} is already defined";
    CANNOT_THROW_TYPE = TYPE + 320 => "CannotThrowType", "No exception of type {0} can be thrown; an exception type must be a subclass of Throwable";
    PACKAGE_COLLIDES_WITH_TYPE = TYPE + 321 => "PackageCollidesWithType", "The package {0} collides with a type";
    TYPE_COLLIDES_WITH_PACKAGE = TYPE + 322 => "TypeCollidesWithPackage", "The type {1} collides with a package";
    DUPLICATE_TYPES = TYPE + 323 => "DuplicateTypes", "The type {1} is already defined";
    IS_CLASS_PATH_CORRECT = TYPE + 324 => "IsClassPathCorrect", "The type {0} cannot be resolved. It is indirectly referenced from required .class files";
    PUBLIC_CLASS_MUST_MATCH_FILE_NAME = TYPE + 325 => "PublicClassMustMatchFileName", "The public type {1} must be defined in its own file";
    MUST_SPECIFY_PACKAGE = INTERNAL + 326 => "MustSpecifyPackage", "A package must be specified in {0} or a default package created";
    HIERARCHY_HAS_PROBLEMS = TYPE + 327 => "HierarchyHasProblems", "The hierarchy of the type {0} is inconsistent";
    PACKAGE_IS_NOT_EXPECTED_PACKAGE = INTERNAL + 328 => "PackageIsNotExpectedPackage", "The declared package \"{0}\" does not match the expected package \"{1}\"";
    OBJECT_CANNOT_HAVE_SUPER_TYPES = INTERNAL + 329 => "ObjectCannotHaveSuperTypes", "The type java.lang.Object cannot have a superclass or superinterfaces";
    OBJECT_MUST_BE_CLASS = INTERNAL + 330 => "ObjectMustBeClass", "The type java.lang.Object must be a class";
    SUPERCLASS_NOT_FOUND = TYPE + 330 => "SuperclassNotFound", "{0} cannot be resolved to a type";
    SUPERCLASS_NOT_VISIBLE = TYPE + 331 => "SuperclassNotVisible", "The type {0} is not visible";
    SUPERCLASS_AMBIGUOUS = TYPE + 332 => "SuperclassAmbiguous", "The type {0} is ambiguous";
    INTERFACE_NOT_FOUND = TYPE + 335 => "InterfaceNotFound", "{0} cannot be resolved to a type";
    INTERFACE_NOT_VISIBLE = TYPE + 336 => "InterfaceNotVisible", "The type {0} is not visible";
    INTERFACE_AMBIGUOUS = TYPE + 337 => "InterfaceAmbiguous", "The type {0} is ambiguous";
    REDUNDANT_SUPERINTERFACE = TYPE + 341 => "RedundantSuperinterface", "Redundant superinterface {0} for the type {1}, already defined by {2}";
    SHOULD_IMPLEMENT_HASHCODE = TYPE + 342 => "ShouldImplementHashcode", "The type {0} should also implement hashCode() since it overrides Object.equals()";
    ABSTRACT_METHODS_IN_CONCRETE_CLASS = TYPE + 343 => "AbstractMethodsInConcreteClass", "The type {0} must be an abstract class to define abstract methods";

    // Imports
    CONFLICTING_IMPORT = IMPORT + 385 => "ConflictingImport", "The import {0} conflicts with a type defined in the same file";
    DUPLICATE_IMPORT = IMPORT + 386 => "DuplicateImport", "The import {0} is a duplicate";
    CANNOT_IMPORT_PACKAGE = IMPORT + 387 => "CannotImportPackage", "Only a type can be imported. {0} resolves to a package";
    UNUSED_IMPORT = INTERNAL + IMPORT + 388 => "UnusedImport", "The import {0} is never used";
    IMPORT_NOT_FOUND = IMPORT + 390 => "ImportNotFound", "The import {0} cannot be resolved";
    IMPORT_NOT_VISIBLE = IMPORT + 391 => "ImportNotVisible", "The type {0} is not visible";
    IMPORT_AMBIGUOUS = IMPORT + 392 => "ImportAmbiguous", "The import {0} is ambiguous";
    IMPORT_INTERNAL_NAME_PROVIDED = IMPORT + 393 => "ImportInternalNameProvided", "The import {0} cannot be resolved";
    IMPORT_INHERITED_NAME_HIDES_ENCLOSING_NAME = IMPORT + 394 => "ImportInheritedNameHidesEnclosingName", "The import {0} cannot be resolved";

    // Local declarations
    DUPLICATE_MODIFIER_FOR_VARIABLE = METHOD + 395 => "DuplicateModifierForVariable", "Duplicate modifier for the variable {0}";
    ILLEGAL_MODIFIER_FOR_VARIABLE = METHOD + 396 => "IllegalModifierForVariable", "Illegal modifier for the variable {0}; only final is permitted";

    // Inheritance
    ABSTRACT_METHOD_MUST_BE_IMPLEMENTED = METHOD + 400 => "AbstractMethodMustBeImplemented", "The type {0} must implement the inherited abstract method {1}";
    FINAL_METHOD_CANNOT_BE_OVERRIDDEN = METHOD + 401 => "FinalMethodCannotBeOverridden", "Cannot override the final method from {0}";
    INCOMPATIBLE_EXCEPTION_IN_THROWS_CLAUSE = METHOD + 402 => "IncompatibleExceptionInThrowsClause", "Exception {0} is not compatible with throws clause in {1}";
    INCOMPATIBLE_EXCEPTION_IN_INHERITED_METHOD_THROWS_CLAUSE = METHOD + 403 => "IncompatibleExceptionInInheritedMethodThrowsClause", "Exception {0} in throws clause of {1} is not compatible with {2}";
    INCOMPATIBLE_RETURN_TYPE = METHOD + 404 => "IncompatibleReturnType", "The return type is incompatible with {0}";
    INHERITED_METHOD_REDUCES_VISIBILITY = METHOD + 405 => "InheritedMethodReducesVisibility", "The inherited method {0} cannot hide the public abstract method in {1}";
    CANNOT_OVERRIDE_A_STATIC_METHOD_WITH_AN_INSTANCE_METHOD = METHOD + 406 => "CannotOverrideAStaticMethodWithAnInstanceMethod", "This instance method cannot override the static method from {0}";
    CANNOT_HIDE_AN_INSTANCE_METHOD_WITH_A_STATIC_METHOD = METHOD + 407 => "CannotHideAnInstanceMethodWithAStaticMethod", "This static method cannot hide the instance method from {0}";
    STATIC_INHERITED_METHOD_CONFLICTS = METHOD + 408 => "StaticInheritedMethodConflicts", "The static method {0} conflicts with the abstract method in {1}";
    METHOD_REDUCES_VISIBILITY = METHOD + 409 => "MethodReducesVisibility", "Cannot reduce the visibility of the inherited method from {0}";
    OVERRIDING_NON_VISIBLE_METHOD = METHOD + 410 => "OverridingNonVisibleMethod", "The method {0} does not override the inherited method from {1} since it is private to a different package";
    ABSTRACT_METHOD_CANNOT_BE_OVERRIDDEN = METHOD + 411 => "AbstractMethodCannotBeOverridden", "Cannot override the abstract method {0} from {1}";
    OVERRIDING_DEPRECATED_METHOD = METHOD + 412 => "OverridingDeprecatedMethod", "The method {0} overrides a deprecated method from {1}";
    INCOMPATIBLE_RETURN_TYPE_FOR_NON_INHERITED_INTERFACE_METHOD = METHOD + 413 => "IncompatibleReturnTypeForNonInheritedInterfaceMethod", "The return type is incompatible with {0}, thus this interface cannot be implemented";
    INCOMPATIBLE_EXCEPTION_IN_THROWS_CLAUSE_FOR_NON_INHERITED_INTERFACE_METHOD = METHOD + 414 => "IncompatibleExceptionInThrowsClauseForNonInheritedInterfaceMethod", "Exception {0} in throws clause of {1} is not compatible with {2}, thus this interface cannot be implemented";
    ILLEGAL_VARARG = METHOD + 415 => "IllegalVararg", "Extended dimensions are illegal for a variable argument";
    OVERRIDING_METHOD_WITHOUT_SUPER_INVOCATION = METHOD + 416 => "OverridingMethodWithoutSuperInvocation", "The method {0} is overriding a method without making a super invocation";
    MISSING_SYNCHRONIZED_MODIFIER_IN_INHERITED_METHOD = METHOD + 417 => "MissingSynchronizedModifierInInheritedMethod", "The method {0} is overriding a synchronized method without being synchronized";
    ABSTRACT_METHOD_MUST_BE_IMPLEMENTED_OVER_CONCRETE_METHOD = METHOD + 418 => "AbstractMethodMustBeImplementedOverConcreteMethod", "The inherited method {0} cannot hide the public abstract method in {1}";
    INHERITED_INCOMPATIBLE_RETURN_TYPE = METHOD + 419 => "InheritedIncompatibleReturnType", "The return types are incompatible for the inherited methods {0}";

    // Code generation limits
    TOO_MANY_CONSTANTS_IN_CONSTANT_POOL = INTERNAL + 430 => "TooManyConstantsInConstantPool", "The type generates a class file with more than 65535 constants";
    TOO_MANY_BYTES_FOR_STRING_CONSTANT = INTERNAL + 431 => "TooManyBytesForStringConstant", "The string constant in type {0} exceeds the limit of 65535 bytes of UTF8 encoding";
    TOO_MANY_FIELDS = INTERNAL + 432 => "TooManyFields", "Too many fields for type {0}. Maximum is 65535";
    TOO_MANY_METHODS = INTERNAL + 433 => "TooManyMethods", "Too many methods for type {0}. Maximum is 65535";

    // Identifiers
    USE_ASSERT_AS_AN_IDENTIFIER = INTERNAL + 440 => "UseAssertAsAnIdentifier", "'assert' should not be used as an identifier, since it is a reserved keyword from source level 1.4 on";
    USE_ENUM_AS_AN_IDENTIFIER = INTERNAL + 441 => "UseEnumAsAnIdentifier", "'enum' should not be used as an identifier, since it is a reserved keyword from source level 1.5 on";
    ENUM_CONSTANTS_CANNOT_BE_SURROUNDED_BY_PARENTHESIS = SYNTAX + INTERNAL + 442 => "EnumConstantsCannotBeSurroundedByParenthesis", "Enum constants cannot be surrounded by parenthesis";
    ILLEGAL_USE_OF_UNDERSCORE_AS_AN_IDENTIFIER = SYNTAX + INTERNAL + 443 => "IllegalUseOfUnderscoreAsAnIdentifier", "'_' should not be used as an identifier, since it is a reserved keyword from source level 1.8 on";

    // Tasks and flow analysis
    TASK = INTERNAL + 450 => "Task", "{0} {1}";
    NULL_LOCAL_VARIABLE_REFERENCE = INTERNAL + 451 => "NullLocalVariableReference", "Null pointer access: The variable {0} can only be null at this location";
    POTENTIAL_NULL_LOCAL_VARIABLE_REFERENCE = INTERNAL + 452 => "PotentialNullLocalVariableReference", "Potential null pointer access: The variable {0} may be null at this location";
    REDUNDANT_NULL_CHECK_ON_NULL_LOCAL_VARIABLE = INTERNAL + 453 => "RedundantNullCheckOnNullLocalVariable", "Redundant null check: The variable {0} can only be null at this location";
    NULL_LOCAL_VARIABLE_COMPARISON_YIELDS_FALSE = INTERNAL + 454 => "NullLocalVariableComparisonYieldsFalse", "Null comparison always yields false: The variable {0} can only be null at this location";
    REDUNDANT_LOCAL_VARIABLE_NULL_ASSIGNMENT = INTERNAL + 455 => "RedundantLocalVariableNullAssignment", "Redundant assignment: The variable {0} can only be null at this location";
    NULL_LOCAL_VARIABLE_INSTANCEOF_YIELDS_FALSE = INTERNAL + 456 => "NullLocalVariableInstanceofYieldsFalse", "instanceof always yields false: The variable {0} can only be null at this location";
    REDUNDANT_NULL_CHECK_ON_NON_NULL_LOCAL_VARIABLE = INTERNAL + 457 => "RedundantNullCheckOnNonNullLocalVariable", "Redundant null check: The variable {0} cannot be null at this location";
    NON_NULL_LOCAL_VARIABLE_COMPARISON_YIELDS_FALSE = INTERNAL + 458 => "NonNullLocalVariableComparisonYieldsFalse", "Null comparison always yields false: The variable {0} cannot be null at this location";
    POTENTIAL_NULL_UNBOXING = INTERNAL + 459 => "PotentialNullUnboxing", "Potential null pointer access: This expression of type {0} may be null but requires auto-unboxing";
    UNDOCUMENTED_EMPTY_BLOCK = INTERNAL + 460 => "UndocumentedEmptyBlock", "Empty block should be documented";
    NULL_UNBOXING = INTERNAL + 461 => "NullUnboxing", "Null pointer access: This expression of type {0} is null but requires auto-unboxing";

    // Javadoc
    JAVADOC_INVALID_SEE_URL_REFERENCE = JAVADOC + INTERNAL + 462 => "JavadocInvalidSeeUrlReference", "Invalid URL reference. Double quote the reference or use the href syntax";
    JAVADOC_MISSING_TAG_DESCRIPTION = JAVADOC + INTERNAL + 463 => "JavadocMissingTagDescription", "Description expected after this reference";
    JAVADOC_DUPLICATE_TAG = JAVADOC + INTERNAL + 464 => "JavadocDuplicateTag", "Duplicate tag for {0}";
    JAVADOC_HIDDEN_REFERENCE = JAVADOC + INTERNAL + 465 => "JavadocHiddenReference", "{0} is not visible";
    JAVADOC_INVALID_MEMBER_TYPE_QUALIFICATION = JAVADOC + INTERNAL + 466 => "JavadocInvalidMemberTypeQualification", "Invalid member type qualification";
    JAVADOC_MISSING_IDENTIFIER = JAVADOC + INTERNAL + 467 => "JavadocMissingIdentifier", "Missing identifier";
    JAVADOC_NON_STATIC_TYPE_FROM_STATIC_INVOCATION = JAVADOC + INTERNAL + 468 => "JavadocNonStaticTypeFromStaticInvocation", "Cannot make a static reference to the non-static type variable {0}";
    JAVADOC_INVALID_PARAM_TAG_TYPE_PARAMETER = JAVADOC + INTERNAL + 469 => "JavadocInvalidParamTagTypeParameter", "Invalid param tag type parameter name";
    JAVADOC_UNEXPECTED_TAG = JAVADOC + INTERNAL + 470 => "JavadocUnexpectedTag", "Unexpected tag";
    JAVADOC_MISSING_PARAM_TAG = JAVADOC + INTERNAL + 471 => "JavadocMissingParamTag", "Missing tag for parameter {0}";
    JAVADOC_MISSING_PARAM_NAME = JAVADOC + INTERNAL + 472 => "JavadocMissingParamName", "Missing parameter name";
    JAVADOC_DUPLICATE_PARAM_NAME = JAVADOC + INTERNAL + 473 => "JavadocDuplicateParamName", "Duplicate tag for parameter";
    JAVADOC_INVALID_PARAM_NAME = JAVADOC + INTERNAL + 474 => "JavadocInvalidParamName", "Parameter {0} is not declared";
    JAVADOC_MISSING_RETURN_TAG = JAVADOC + INTERNAL + 475 => "JavadocMissingReturnTag", "Missing tag for return type";
    JAVADOC_DUPLICATE_RETURN_TAG = JAVADOC + INTERNAL + 476 => "JavadocDuplicateReturnTag", "Duplicate tag for return type";
    JAVADOC_MISSING_THROWS_TAG = JAVADOC + INTERNAL + 477 => "JavadocMissingThrowsTag", "Missing tag for declared exception {0}";
    JAVADOC_MISSING_THROWS_CLASS_NAME = JAVADOC + INTERNAL + 478 => "JavadocMissingThrowsClassName", "Missing class name";
    JAVADOC_INVALID_THROWS_CLASS = JAVADOC + INTERNAL + 479 => "JavadocInvalidThrowsClass", "Invalid class name";
    JAVADOC_DUPLICATE_THROWS_CLASS_NAME = JAVADOC + INTERNAL + 480 => "JavadocDuplicateThrowsClassName", "Duplicate tag for thrown exception";
    JAVADOC_INVALID_THROWS_CLASS_NAME = JAVADOC + INTERNAL + 481 => "JavadocInvalidThrowsClassName", "Exception {0} is not declared";
    JAVADOC_MISSING_SEE_REFERENCE = JAVADOC + INTERNAL + 482 => "JavadocMissingSeeReference", "Missing reference";
    JAVADOC_INVALID_SEE_REFERENCE = JAVADOC + INTERNAL + 483 => "JavadocInvalidSeeReference", "Invalid reference";
    JAVADOC_INVALID_SEE_HREF = JAVADOC + INTERNAL + 484 => "JavadocInvalidSeeHref", "Malformed link reference";
    JAVADOC_INVALID_SEE_ARGS = JAVADOC + INTERNAL + 485 => "JavadocInvalidSeeArgs", "Invalid parameters declaration";
    JAVADOC_MISSING = JAVADOC + INTERNAL + 486 => "JavadocMissing", "Missing comment for {0} declaration";
    JAVADOC_INVALID_TAG = JAVADOC + INTERNAL + 487 => "JavadocInvalidTag", "Invalid tag";
    JAVADOC_UNDEFINED_FIELD = JAVADOC + INTERNAL + 488 => "JavadocUndefinedField", "{0} cannot be resolved or is not a field";
    JAVADOC_NOT_VISIBLE_FIELD = JAVADOC + INTERNAL + 489 => "JavadocNotVisibleField", "The field {0}.{1} is not visible";
    JAVADOC_AMBIGUOUS_FIELD = JAVADOC + INTERNAL + 490 => "JavadocAmbiguousField", "The field {1} is ambiguous";
    JAVADOC_USING_DEPRECATED_FIELD = JAVADOC + INTERNAL + 491 => "JavadocUsingDeprecatedField", "The field {0}.{1} is deprecated";
    JAVADOC_UNDEFINED_CONSTRUCTOR = JAVADOC + INTERNAL + 492 => "JavadocUndefinedConstructor", "The constructor {0}({1}) is undefined";
    JAVADOC_NOT_VISIBLE_CONSTRUCTOR = JAVADOC + INTERNAL + 493 => "JavadocNotVisibleConstructor", "The constructor {0}({1}) is not visible";
    JAVADOC_AMBIGUOUS_CONSTRUCTOR = JAVADOC + INTERNAL + 494 => "JavadocAmbiguousConstructor", "The constructor {0}({1}) is ambiguous";
    JAVADOC_USING_DEPRECATED_CONSTRUCTOR = JAVADOC + INTERNAL + 495 => "JavadocUsingDeprecatedConstructor", "The constructor {0}({1}) is deprecated";
    JAVADOC_UNDEFINED_METHOD = JAVADOC + INTERNAL + 496 => "JavadocUndefinedMethod", "The method {1}({2}) is undefined for the type {0}";
    JAVADOC_NOT_VISIBLE_METHOD = JAVADOC + INTERNAL + 497 => "JavadocNotVisibleMethod", "The method {1}({2}) from the type {0} is not visible";
    JAVADOC_AMBIGUOUS_METHOD = JAVADOC + INTERNAL + 498 => "JavadocAmbiguousMethod", "The method {1}({2}) is ambiguous for the type {0}";
    JAVADOC_USING_DEPRECATED_METHOD = JAVADOC + INTERNAL + 499 => "JavadocUsingDeprecatedMethod", "The method {1}({2}) from the type {0} is deprecated";
    JAVADOC_NO_MESSAGE_SEND_ON_BASE_TYPE = JAVADOC + INTERNAL + 500 => "JavadocNoMessageSendOnBaseType", "Cannot invoke {1}({2}) on the primitive type {0}";
    JAVADOC_PARAMETER_MISMATCH = JAVADOC + INTERNAL + 501 => "JavadocParameterMismatch", "The method {1}({2}) in the type {0} is not applicable for the arguments ({3})";
    JAVADOC_NO_MESSAGE_SEND_ON_ARRAY_TYPE = JAVADOC + INTERNAL + 502 => "JavadocNoMessageSendOnArrayType", "Cannot invoke {1}({2}) on the array type {0}";
    JAVADOC_UNDEFINED_TYPE = JAVADOC + INTERNAL + 503 => "JavadocUndefinedType", "{0} cannot be resolved to a type";
    JAVADOC_NOT_VISIBLE_TYPE = JAVADOC + INTERNAL + 504 => "JavadocNotVisibleType", "The type {0} is not visible";
    JAVADOC_AMBIGUOUS_TYPE = JAVADOC + INTERNAL + 505 => "JavadocAmbiguousType", "The type {0} is ambiguous";
    JAVADOC_USING_DEPRECATED_TYPE = JAVADOC + INTERNAL + 506 => "JavadocUsingDeprecatedType", "The type {0} is deprecated";
    JAVADOC_INTERNAL_TYPE_NAME_PROVIDED = JAVADOC + INTERNAL + 507 => "JavadocInternalTypeNameProvided", "The nested type {0} cannot be referenced using its binary name";
    JAVADOC_INHERITED_METHOD_HIDES_ENCLOSING_NAME = JAVADOC + INTERNAL + 508 => "JavadocInheritedMethodHidesEnclosingName", "The method {1} is defined in an inherited type and an enclosing scope";
    JAVADOC_INHERITED_FIELD_HIDES_ENCLOSING_NAME = JAVADOC + INTERNAL + 509 => "JavadocInheritedFieldHidesEnclosingName", "The field {1} is defined in an inherited type and an enclosing scope";
    JAVADOC_INHERITED_NAME_HIDES_ENCLOSING_TYPE_NAME = JAVADOC + INTERNAL + 510 => "JavadocInheritedNameHidesEnclosingTypeName", "The type {0} is defined in an inherited type and an enclosing scope";
    JAVADOC_AMBIGUOUS_METHOD_REFERENCE = JAVADOC + INTERNAL + 511 => "JavadocAmbiguousMethodReference", "Reference {0} is ambiguous";
    JAVADOC_UNTERMINATED_INLINE_TAG = JAVADOC + INTERNAL + 512 => "JavadocUnterminatedInlineTag", "Missing closing brace for inline tag";
    JAVADOC_MALFORMED_SEE_REFERENCE = JAVADOC + INTERNAL + 513 => "JavadocMalformedSeeReference", "Malformed reference (missing end space separator)";
    JAVADOC_MESSAGE_PREFIX = INTERNAL + 514 => "JavadocMessagePrefix", "Javadoc: ";
    JAVADOC_MISSING_HASH_CHARACTER = JAVADOC + INTERNAL + 515 => "JavadocMissingHashCharacter", "Missing '#' character in reference {0}";
    JAVADOC_EMPTY_RETURN_TAG = JAVADOC + INTERNAL + 516 => "JavadocEmptyReturnTag", "Description expected after @return";
    JAVADOC_INVALID_VALUE_REFERENCE = JAVADOC + INTERNAL + 517 => "JavadocInvalidValueReference", "Only static field reference is allowed for @value tag";
    JAVADOC_UNEXPECTED_TEXT = JAVADOC + INTERNAL + 518 => "JavadocUnexpectedText", "Unexpected text";
    JAVADOC_INVALID_PARAM_TAG_NAME = JAVADOC + INTERNAL + 519 => "JavadocInvalidParamTagName", "Invalid param tag name";

    // Generics
    TYPE_PARAMETER_HIDING_TYPE = TYPE + 520 => "TypeParameterHidingType", "The type parameter {0} is hiding the type {1}";
    RAW_TYPE_REFERENCE = TYPE + 521 => "RawTypeReference", "{0} is a raw type. References to generic type {1} should be parameterized";
    NO_ADDITIONAL_BOUND_AFTER_TYPE_VARIABLE = TYPE + 522 => "NoAdditionalBoundAfterTypeVariable", "The type {0} is not an interface; it cannot be specified as a bounded parameter";
    UNSAFE_GENERIC_ARRAY_FOR_VARARGS = METHOD + 523 => "UnsafeGenericArrayForVarargs", "Type safety: A generic array of {0} is created for a varargs parameter";
    TYPE_HIDING_TYPE_PARAMETER_FROM_TYPE = TYPE + 525 => "TypeHidingTypeParameterFromType", "The type {0} is hiding the type parameter {1} of type {2}";
    TYPE_HIDING_TYPE_PARAMETER_FROM_METHOD = TYPE + 526 => "TypeHidingTypeParameterFromMethod", "The type {0} is hiding the type parameter {1} of the generic method {2}({3}) of type {4}";
    INVALID_USAGE_OF_WILDCARD = SYNTAX + INTERNAL + 527 => "InvalidUsageOfWildcard", "Wildcard is not allowed at this location";
    UNUSED_TYPE_ARGUMENTS_FOR_METHOD_INVOCATION = METHOD + 528 => "UnusedTypeArgumentsForMethodInvocation", "Unused type arguments for the non generic method {1}({2}) of type {0}; it should not be parameterized with arguments <{3}>";
    INCOMPATIBLE_TYPES_IN_FOREACH = TYPE + 530 => "IncompatibleTypesInForeach", "Type mismatch: cannot convert from element type {0} to {1}";
    INVALID_TYPE_FOR_COLLECTION = INTERNAL + 532 => "InvalidTypeForCollection", "Can only iterate over an array or an instance of java.lang.Iterable";
    NON_GENERIC_TYPE = TYPE + 540 => "NonGenericType", "The type {0} is not generic; it cannot be parameterized with arguments <{1}>";
    INCORRECT_ARITY_FOR_PARAMETERIZED_TYPE = TYPE + 541 => "IncorrectArityForParameterizedType", "Incorrect number of arguments for type {0}; it cannot be parameterized with arguments <{1}>";
    TYPE_ARGUMENT_MISMATCH = TYPE + 542 => "TypeArgumentMismatch", "Bound mismatch: The type {0} is not a valid substitute for the bounded parameter <{2} extends {3}> of the type {1}";
    DUPLICATE_METHOD_ERASURE = TYPE + 543 => "DuplicateMethodErasure", "Erasure of method {0}({1}) is the same as another method in type {2}";
    REFERENCE_TO_FORWARD_TYPE_VARIABLE = TYPE + 544 => "ReferenceToForwardTypeVariable", "Illegal forward reference to type parameter {0}";
    BOUND_MUST_BE_AN_INTERFACE = TYPE + 545 => "BoundMustBeAnInterface", "The type {0} is not an interface; it cannot be specified as a bounded parameter";
    UNSAFE_RAW_CONSTRUCTOR_INVOCATION = TYPE + 546 => "UnsafeRawConstructorInvocation", "Type safety: The constructor {0}({1}) belongs to the raw type {0}. References to generic type {2} should be parameterized";
    UNSAFE_RAW_METHOD_INVOCATION = TYPE + 547 => "UnsafeRawMethodInvocation", "Type safety: The method {1}({2}) belongs to the raw type {0}. References to generic type {3} should be parameterized";
    UNSAFE_TYPE_CONVERSION = TYPE + 548 => "UnsafeTypeConversion", "Type safety: The expression of type {0} needs unchecked conversion to conform to {1}";
    INVALID_TYPE_VARIABLE_EXCEPTION_TYPE = TYPE + 549 => "InvalidTypeVariableExceptionType", "Cannot use the type parameter {0} in a catch block";
    INVALID_PARAMETERIZED_EXCEPTION_TYPE = TYPE + 550 => "InvalidParameterizedExceptionType", "Cannot use the parameterized type {0} either in catch block or throws clause";
    ILLEGAL_GENERIC_ARRAY = TYPE + 551 => "IllegalGenericArray", "Cannot create a generic array of {0}";
    UNSAFE_RAW_FIELD_ASSIGNMENT = TYPE + 552 => "UnsafeRawFieldAssignment", "Type safety: The field {1} from the raw type {2} is assigned a value of type {0}. References to generic type {3} should be parameterized";
    FINAL_BOUND_FOR_TYPE_VARIABLE = TYPE + 553 => "FinalBoundForTypeVariable", "The type parameter {0} should not be bounded by the final type {1}. Final types cannot be further extended";
    SUPER_INTERFACES_COLLIDE = TYPE + 555 => "SuperInterfacesCollide", "The interface {2} cannot be implemented more than once with different arguments: {0} and {1}";
    UNSAFE_GENERIC_CAST = TYPE + 561 => "UnsafeGenericCast", "Type safety: Unchecked cast from {0} to {1}";
    ILLEGAL_INSTANCEOF_PARAMETERIZED_TYPE = TYPE + 562 => "IllegalInstanceofParameterizedType", "Cannot perform instanceof check against parameterized type {0}. Use the form {1} instead since further generic type information will be erased at runtime";
    NON_GENERIC_METHOD = TYPE + 564 => "NonGenericMethod", "The method {1}({2}) of type {0} is not generic; it cannot be parameterized with arguments <{3}>";
    INCORRECT_ARITY_FOR_PARAMETERIZED_METHOD = TYPE + 565 => "IncorrectArityForParameterizedMethod", "Incorrect number of type arguments for generic method <{3}>{1}({2}) of type {0}; it cannot be parameterized with arguments <{4}>";
    UNSAFE_RETURN_TYPE_OVERRIDE = METHOD + 575 => "UnsafeReturnTypeOverride", "Type safety: The return type {0} for {1}({2}) from the type {3} needs unchecked conversion to conform to {4} from the type {5}";
    METHOD_NAME_CLASH = METHOD + 576 => "MethodNameClash", "Name clash: The method {0}({1}) of type {2} has the same erasure as {0}({3}) of type {4} but does not override it";
    UNSAFE_RAW_GENERIC_CONSTRUCTOR_INVOCATION = TYPE + 585 => "UnsafeRawGenericConstructorInvocation", "Type safety: The constructor {0}({1}) belongs to the raw type {0}. References to generic type {2} should be parameterized";
    UNSAFE_RAW_GENERIC_METHOD_INVOCATION = TYPE + 586 => "UnsafeRawGenericMethodInvocation", "Type safety: The method {1}({2}) belongs to the raw type {0}. References to generic type {3} should be parameterized";
    UNSAFE_ELEMENT_TYPE_CONVERSION = TYPE + 588 => "UnsafeElementTypeConversion", "Type safety: The expression of type {0} needs unchecked conversion to conform to {1}";
    INVALID_USAGE_OF_TYPE_PARAMETERS = SYNTAX + INTERNAL + 590 => "InvalidUsageOfTypeParameters", "Syntax error, type parameters are only available if source level is 1.5 or greater";
    INVALID_USAGE_OF_STATIC_IMPORTS = SYNTAX + INTERNAL + 591 => "InvalidUsageOfStaticImports", "Syntax error, static imports are only available if source level is 1.5 or greater";
    INVALID_USAGE_OF_FOREACH_STATEMENTS = SYNTAX + INTERNAL + 592 => "InvalidUsageOfForeachStatements", "Syntax error, 'for each' statements are only available if source level is 1.5 or greater";
    INVALID_USAGE_OF_TYPE_ARGUMENTS = SYNTAX + INTERNAL + 593 => "InvalidUsageOfTypeArguments", "Syntax error, parameterized types are only available if source level is 1.5 or greater";
    INVALID_USAGE_OF_ENUM_DECLARATIONS = SYNTAX + INTERNAL + 594 => "InvalidUsageOfEnumDeclarations", "Syntax error, enum declarations are only available if source level is 1.5 or greater";
    INVALID_USAGE_OF_VARARGS = SYNTAX + INTERNAL + 595 => "InvalidUsageOfVarargs", "Syntax error, varargs are only available if source level is 1.5 or greater";
    INVALID_USAGE_OF_ANNOTATIONS = SYNTAX + INTERNAL + 596 => "InvalidUsageOfAnnotations", "Syntax error, annotations are only available if source level is 1.5 or greater";

    // Annotations
    ANNOTATION_TYPE_USED_AS_SUPER_INTERFACE = TYPE + 617 => "AnnotationTypeUsedAsSuperInterface", "The annotation type {0} should not be used as a superinterface for {1}";
    DEAD_CODE = INTERNAL + 622 => "DeadCode", "Dead code";
    MISSING_OVERRIDE_ANNOTATION = METHOD + 623 => "MissingOverrideAnnotation", "The method {1}({2}) of type {0} should be tagged with @Override since it actually overrides a superclass method";
    FIELD_MISSING_DEPRECATED_ANNOTATION = INTERNAL + FIELD + 624 => "FieldMissingDeprecatedAnnotation", "The deprecated field {0}.{1} should be annotated with @Deprecated";
    METHOD_MISSING_DEPRECATED_ANNOTATION = INTERNAL + METHOD + 625 => "MethodMissingDeprecatedAnnotation", "The deprecated method {1}({2}) of type {0} should be annotated with @Deprecated";
    TYPE_MISSING_DEPRECATED_ANNOTATION = INTERNAL + TYPE + 626 => "TypeMissingDeprecatedAnnotation", "The deprecated type {0} should be annotated with @Deprecated";
    UNHANDLED_WARNING_TOKEN = INTERNAL + 627 => "UnhandledWarningToken", "Unsupported @SuppressWarnings(\"{0}\")";
    UNUSED_OBJECT_ALLOCATION = INTERNAL + 629 => "UnusedObjectAllocation", "The allocated object is never used";
    MISSING_OVERRIDE_ANNOTATION_FOR_INTERFACE_METHOD_IMPLEMENTATION = METHOD + 634 => "MissingOverrideAnnotationForInterfaceMethodImplementation", "The method {1}({2}) of type {0} should be tagged with @Override since it actually overrides a superinterface method";
    UNUSED_WARNING_TOKEN = INTERNAL + 635 => "UnusedWarningToken", "Unnecessary @SuppressWarnings(\"{0}\")";
    EXCEPTION_PARAMETER_IS_NEVER_USED = INTERNAL + 636 => "ExceptionParameterIsNeverUsed", "The value of the exception parameter {0} is not used";
    UNUSED_TYPE_ARGUMENTS_FOR_CONSTRUCTOR_INVOCATION = METHOD + 660 => "UnusedTypeArgumentsForConstructorInvocation", "Unused type arguments for the non generic constructor {0}({1}) of type {0}; it should not be parameterized with arguments <{2}>";

    // Corrupted input
    CORRUPTED_SIGNATURE = INTERNAL + 700 => "CorruptedSignature", "The class file {0} contains a signature '{1}' ill-formed at position {2}";
    INVALID_ENCODING = INTERNAL + 701 => "InvalidEncoding", "Invalid encoding for {0}: {1}";
    CANNOT_READ_SOURCE = INTERNAL + 702 => "CannotReadSource", "Cannot read the source from {0}; {1}";

    // Boxing
    BOXING_CONVERSION = INTERNAL + 720 => "BoxingConversion", "The expression of type {0} is boxed into {1}";
    UNBOXING_CONVERSION = INTERNAL + 721 => "UnboxingConversion", "The expression of type {0} is unboxed into {1}";

    // Enums and switches
    MISSING_ENUM_CONSTANT_CASE = FIELD + 766 => "MissingEnumConstantCase", "The enum constant {1} needs a corresponding case label in this enum switch on {0}";
    MISSING_ENUM_CONSTANT_CASE_DESPITE_DEFAULT = FIELD + 767 => "MissingEnumConstantCaseDespiteDefault", "The enum constant {1} should have a corresponding case label in this enum switch on {0}";
    MISSING_DEFAULT_CASE = INTERNAL + 1010 => "MissingDefaultCase", "The switch statement should have a default case";
    MISSING_ENUM_DEFAULT_CASE = INTERNAL + 1011 => "MissingEnumDefaultCase", "The enum switch statement should have a default case";

    // Varargs
    METHOD_VARARGS_ARGUMENT_NEED_CAST = METHOD + 800 => "MethodVarargsArgumentNeedCast", "Type {0} of the last argument to method {1}({2}) doesn't exactly match the vararg parameter type. Cast to {3} to confirm the non-varargs invocation, or pass individual arguments of type {4} for a varargs invocation.";
    CONSTRUCTOR_VARARGS_ARGUMENT_NEED_CAST = CTOR + 801 => "ConstructorVarargsArgumentNeedCast", "Type {0} of the last argument to constructor {1}({2}) doesn't exactly match the vararg parameter type. Cast to {3} to confirm the non-varargs invocation, or pass individual arguments of type {4} for a varargs invocation.";
    VARARGS_CONFLICT = METHOD + 802 => "VarargsConflict", "Varargs methods should only override or be overridden by other varargs methods unlike {0}.{1}({2}) and {3}.{1}({4})";

    // Javadoc on generics
    JAVADOC_GENERIC_METHOD_TYPE_ARGUMENT_MISMATCH = JAVADOC + INTERNAL + 850 => "JavadocGenericMethodTypeArgumentMismatch", "Bound mismatch: The generic method {1}({2}) of type {0} is not applicable for the arguments ({3})";
    JAVADOC_NON_GENERIC_METHOD = JAVADOC + INTERNAL + 851 => "JavadocNonGenericMethod", "The method {1}({2}) of type {0} is not generic; it cannot be parameterized with arguments <{3}>";
    JAVADOC_INCORRECT_ARITY_FOR_PARAMETERIZED_METHOD = JAVADOC + INTERNAL + 852 => "JavadocIncorrectArityForParameterizedMethod", "Incorrect number of type arguments for generic method <{3}>{1}({2}) of type {0}";
    JAVADOC_PARAMETERIZED_METHOD_ARGUMENT_TYPE_MISMATCH = JAVADOC + INTERNAL + 853 => "JavadocParameterizedMethodArgumentTypeMismatch", "The parameterized method <{3}>{1}({2}) of type {0} is not applicable for the arguments ({4})";
    JAVADOC_TYPE_ARGUMENTS_FOR_RAW_GENERIC_METHOD = JAVADOC + INTERNAL + 854 => "JavadocTypeArgumentsForRawGenericMethod", "The method {1}({2}) of raw type {0} is no longer generic; it cannot be parameterized with arguments <{3}>";
    JAVADOC_GENERIC_CONSTRUCTOR_TYPE_ARGUMENT_MISMATCH = JAVADOC + INTERNAL + 855 => "JavadocGenericConstructorTypeArgumentMismatch", "Bound mismatch: The generic constructor {0}({1}) of type {0} is not applicable for the arguments ({2})";
    JAVADOC_NON_GENERIC_CONSTRUCTOR = JAVADOC + INTERNAL + 856 => "JavadocNonGenericConstructor", "The constructor {0}({1}) of type {0} is not generic; it cannot be parameterized with arguments <{2}>";
    JAVADOC_INCORRECT_ARITY_FOR_PARAMETERIZED_CONSTRUCTOR = JAVADOC + INTERNAL + 857 => "JavadocIncorrectArityForParameterizedConstructor", "Incorrect number of type arguments for generic constructor <{2}>{0}({1}) of type {0}";
    JAVADOC_PARAMETERIZED_CONSTRUCTOR_ARGUMENT_TYPE_MISMATCH = JAVADOC + INTERNAL + 858 => "JavadocParameterizedConstructorArgumentTypeMismatch", "The parameterized constructor <{2}>{0}({1}) of type {0} is not applicable for the arguments ({3})";
    JAVADOC_TYPE_ARGUMENTS_FOR_RAW_GENERIC_CONSTRUCTOR = JAVADOC + INTERNAL + 859 => "JavadocTypeArgumentsForRawGenericConstructor", "The constructor {0}({1}) of raw type {0} is no longer generic; it cannot be parameterized with arguments <{2}>";

    // Resources and type arguments
    REDUNDANT_SPECIFICATION_OF_TYPE_ARGUMENTS = TYPE + 881 => "RedundantSpecificationOfTypeArguments", "Redundant specification of type arguments <{0}>";
    UNCLOSED_CLOSEABLE = INTERNAL + 885 => "UnclosedCloseable", "Resource leak: '{0}' is never closed";
    UNCLOSED_CLOSEABLE_AT_EXIT = INTERNAL + 886 => "UnclosedCloseableAtExit", "Resource leak: '{0}' is not closed at this location";
    POTENTIALLY_UNCLOSED_CLOSEABLE = INTERNAL + 887 => "PotentiallyUnclosedCloseable", "Potential resource leak: '{0}' may not be closed";
    POTENTIALLY_UNCLOSED_CLOSEABLE_AT_EXIT = INTERNAL + 888 => "PotentiallyUnclosedCloseableAtExit", "Potential resource leak: '{0}' may not be closed at this location";
    EXPLICITLY_CLOSED_AUTO_CLOSEABLE = INTERNAL + 889 => "ExplicitlyClosedAutoCloseable", "Resource '{0}' should be managed by try-with-resource";

    // Null annotations
    REQUIRED_NON_NULL_BUT_PROVIDED_NULL = TYPE + 910 => "RequiredNonNullButProvidedNull", "Null type mismatch: required '{0}' but the provided value is null";
    REQUIRED_NON_NULL_BUT_PROVIDED_POTENTIAL_NULL = TYPE + 911 => "RequiredNonNullButProvidedPotentialNull", "Null type mismatch: required '{0}' but the provided value is inferred as @{1}";
    REQUIRED_NON_NULL_BUT_PROVIDED_UNKNOWN = TYPE + 912 => "RequiredNonNullButProvidedUnknown", "Null type safety: The expression of type '{1}' needs unchecked conversion to conform to '{0}'";
    MISSING_NON_NULL_BY_DEFAULT_ANNOTATION_ON_PACKAGE = INTERNAL + 913 => "MissingNonNullByDefaultAnnotationOnPackage", "A default nullness annotation has not been specified for the package {0}";
    ILLEGAL_RETURN_NULLITY_REDEFINITION = METHOD + 915 => "IllegalReturnNullityRedefinition", "The return type is incompatible with '{1}' returned from {0} (mismatching null constraints)";
    POTENTIAL_NULL_MESSAGE_SEND_REFERENCE = INTERNAL + 918 => "PotentialNullMessageSendReference", "Potential null pointer access: The method {1}({2}) may return null";
    MISSING_NON_NULL_BY_DEFAULT_ANNOTATION_ON_TYPE = INTERNAL + 921 => "MissingNonNullByDefaultAnnotationOnType", "A default nullness annotation has not been specified for the type {0}";
    REDUNDANT_NULL_ANNOTATION = INTERNAL + 931 => "RedundantNullAnnotation", "The nullness annotation is redundant with a default that applies to this location";
    NULLABLE_FIELD_REFERENCE = FIELD + 939 => "NullableFieldReference", "Potential null pointer access: The field {0} is specified as @{1}";

    // Lambdas
    LAMBDA_SHAPE_COMPUTATION_ERROR = INTERNAL + 1101 => "LambdaShapeComputationError", "Internal error computing the shape of a lambda expression: {0}";

    // Recent lint checks
    UNUSED_TYPE_PARAMETER = TYPE + 1100 => "UnusedTypeParameter", "Unused type parameter {0}";
    UNLIKELY_COLLECTION_METHOD_ARGUMENT_TYPE = INTERNAL + 1200 => "UnlikelyCollectionMethodArgumentType", "Unlikely argument type {0} for {1} on a {2}";
    UNLIKELY_EQUALS_ARGUMENT_TYPE = INTERNAL + 1201 => "UnlikelyEqualsArgumentType", "Unlikely argument type for equals(): {0} seems to be unrelated to {1}";

    // Terminal deprecation
    USING_TERMINALLY_DEPRECATED_TYPE = TYPE + 1400 => "UsingTerminallyDeprecatedType", "The type {0} has been deprecated and marked for removal";
    USING_TERMINALLY_DEPRECATED_METHOD = METHOD + 1401 => "UsingTerminallyDeprecatedMethod", "The method {1}({2}) from the type {0} has been deprecated and marked for removal";
    USING_TERMINALLY_DEPRECATED_CONSTRUCTOR = CTOR + 1402 => "UsingTerminallyDeprecatedConstructor", "The constructor {0}({1}) has been deprecated and marked for removal";
    USING_TERMINALLY_DEPRECATED_FIELD = FIELD + 1403 => "UsingTerminallyDeprecatedField", "The field {0}.{1} has been deprecated and marked for removal";
    OVERRIDING_TERMINALLY_DEPRECATED_METHOD = METHOD + 1404 => "OverridingTerminallyDeprecatedMethod", "The method {0} overrides a method from {1} that has been deprecated and marked for removal";
}

static BY_ID: Lazy<FxHashMap<ProblemId, &'static ProblemDescriptor>> =
    Lazy::new(|| CATALOG.iter().map(|d| (d.id, d)).collect());

static BY_NAME: Lazy<FxHashMap<&'static str, &'static ProblemDescriptor>> =
    Lazy::new(|| CATALOG.iter().map(|d| (d.name, d)).collect());

/// All catalog entries in declaration order
pub fn all() -> &'static [ProblemDescriptor] {
    CATALOG
}

/// Catalog entry for an identifier
pub fn descriptor(id: ProblemId) -> Option<&'static ProblemDescriptor> {
    BY_ID.get(&id).copied()
}

/// Catalog entry for a name
pub fn by_name(name: &str) -> Option<&'static ProblemDescriptor> {
    BY_NAME.get(name).copied()
}
