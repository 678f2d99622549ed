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

//! Readable names of types and members
//!
//! Messages show short names (`List<String>`) while problem arguments keep
//! the qualified ones (`java.util.List<java.lang.String>`). When two short
//! names collide the qualified names are used in the message instead.

use crate::options::CompilerOptions;

/// Rendering of a symbol in qualified and short form
pub trait ReadableName {
    /// Fully qualified rendering
    fn readable_name(&self) -> String;

    /// Minimally qualified rendering
    fn short_readable_name(&self) -> String;

    /// Rendering with nullness annotations spelled out
    fn null_annotated_readable_name(&self, _options: &CompilerOptions, short: bool) -> String {
        if short {
            self.short_readable_name()
        } else {
            self.readable_name()
        }
    }
}

/// Declared or inferred nullness of a type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Nullness {
    #[default]
    Unspecified,
    NonNull,
    Nullable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Primitive,
    Reference,
    TypeVariable,
    Wildcard,
    /// Type of the `null` literal
    Null,
}

const PRIMITIVES: &[&str] = &[
    "boolean", "byte", "char", "short", "int", "long", "float", "double", "void",
];

/// A type as far as problem messages need it
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeRef {
    pub kind: TypeKind,
    /// Dotted package name; empty for the default package
    pub package: String,
    /// Simple name preceded by its enclosing types, outermost first
    pub names: Vec<String>,
    pub arguments: Vec<TypeRef>,
    pub dimensions: usize,
    pub nullness: Nullness,
    /// The type could not be found on the class path
    pub missing: bool,
}

impl TypeRef {
    fn new(kind: TypeKind, package: impl Into<String>, names: Vec<String>) -> Self {
        Self {
            kind,
            package: package.into(),
            names,
            arguments: Vec::new(),
            dimensions: 0,
            nullness: Nullness::Unspecified,
            missing: false,
        }
    }

    pub fn primitive(name: &str) -> Self {
        Self::new(TypeKind::Primitive, "", vec![name.to_string()])
    }

    pub fn type_variable(name: &str) -> Self {
        Self::new(TypeKind::TypeVariable, "", vec![name.to_string()])
    }

    /// Unbounded wildcard `?`
    pub fn wildcard() -> Self {
        Self::new(TypeKind::Wildcard, "", vec!["?".to_string()])
    }

    pub fn null_type() -> Self {
        Self::new(TypeKind::Null, "", vec!["null".to_string()])
    }

    /// Parse a source name such as `java.util.Map.Entry` or `Outer$Inner`.
    ///
    /// Segments starting with an upper case letter are types, the ones
    /// before them the package. Primitive names and array suffixes are
    /// recognized.
    pub fn parse(name: &str) -> Self {
        let mut name = name.trim();
        let mut dimensions = 0;
        while let Some(stripped) = name.strip_suffix("[]") {
            name = stripped.trim_end();
            dimensions += 1;
        }
        let mut parsed = if PRIMITIVES.contains(&name) {
            Self::primitive(name)
        } else {
            let segments: Vec<&str> = name.split(['.', '$']).filter(|s| !s.is_empty()).collect();
            let first_type = segments
                .iter()
                .position(|s| s.chars().next().is_some_and(char::is_uppercase))
                .unwrap_or(segments.len().saturating_sub(1));
            let package = segments[..first_type].join(".");
            let names = segments[first_type..].iter().map(|s| s.to_string()).collect();
            Self::new(TypeKind::Reference, package, names)
        };
        parsed.dimensions = dimensions;
        parsed
    }

    pub fn with_arguments(mut self, arguments: Vec<TypeRef>) -> Self {
        self.arguments = arguments;
        self
    }

    pub fn array(mut self, dimensions: usize) -> Self {
        self.dimensions += dimensions;
        self
    }

    pub fn with_nullness(mut self, nullness: Nullness) -> Self {
        self.nullness = nullness;
        self
    }

    pub fn as_missing(mut self) -> Self {
        self.missing = true;
        self
    }

    pub fn is_array(&self) -> bool {
        self.dimensions > 0
    }

    pub fn is_primitive(&self) -> bool {
        self.kind == TypeKind::Primitive && self.dimensions == 0
    }

    pub fn is_parameterized(&self) -> bool {
        !self.arguments.is_empty()
    }

    /// Array type with one dimension less
    pub fn element_type(&self) -> TypeRef {
        let mut element = self.clone();
        element.dimensions = element.dimensions.saturating_sub(1);
        element
    }

    /// Same type without type arguments
    pub fn erasure(&self) -> TypeRef {
        let mut erased = self.clone();
        erased.arguments.clear();
        erased
    }

    /// Simple name without enclosing types
    pub fn simple_name(&self) -> &str {
        self.names.last().map(String::as_str).unwrap_or("")
    }

    /// Qualified name without type arguments or dimensions
    pub fn qualified_name(&self) -> String {
        if self.package.is_empty() {
            self.names.join(".")
        } else {
            format!("{}.{}", self.package, self.names.join("."))
        }
    }

    fn render(&self, short: bool, annotations: Option<&CompilerOptions>) -> String {
        let mut out = String::new();
        let annotation = annotations.and_then(|options| match self.nullness {
            Nullness::Unspecified => None,
            Nullness::NonNull if short => Some(options.nonnull_simple_name()),
            Nullness::NonNull => Some(options.nonnull_annotation_name.as_str()),
            Nullness::Nullable if short => Some(options.nullable_simple_name()),
            Nullness::Nullable => Some(options.nullable_annotation_name.as_str()),
        });

        if !short && !self.package.is_empty() {
            out.push_str(&self.package);
            out.push('.');
        }
        let (enclosing, simple) = match self.names.split_last() {
            Some((simple, enclosing)) => (enclosing, simple.as_str()),
            None => (&[][..], ""),
        };
        for name in enclosing {
            out.push_str(name);
            out.push('.');
        }
        if let Some(annotation) = annotation {
            out.push('@');
            out.push_str(annotation);
            out.push(' ');
        }
        out.push_str(simple);

        if !self.arguments.is_empty() {
            let arguments: Vec<String> = self
                .arguments
                .iter()
                .map(|a| a.render(short, annotations))
                .collect();
            out.push('<');
            out.push_str(&arguments.join(","));
            out.push('>');
        }
        for _ in 0..self.dimensions {
            out.push_str("[]");
        }
        out
    }
}

impl ReadableName for TypeRef {
    fn readable_name(&self) -> String {
        self.render(false, None)
    }

    fn short_readable_name(&self) -> String {
        self.render(true, None)
    }

    fn null_annotated_readable_name(&self, options: &CompilerOptions, short: bool) -> String {
        self.render(short, Some(options))
    }
}

/// A method or constructor
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MethodRef {
    pub declaring_type: TypeRef,
    /// Selector; ignored for constructors
    pub name: String,
    pub parameters: Vec<TypeRef>,
    pub return_type: TypeRef,
    /// Last parameter is a variable arity parameter
    pub varargs: bool,
    pub is_constructor: bool,
}

impl MethodRef {
    pub fn method(declaring_type: TypeRef, name: &str, parameters: Vec<TypeRef>) -> Self {
        Self {
            declaring_type,
            name: name.to_string(),
            parameters,
            return_type: TypeRef::primitive("void"),
            varargs: false,
            is_constructor: false,
        }
    }

    pub fn constructor(declaring_type: TypeRef, parameters: Vec<TypeRef>) -> Self {
        let name = declaring_type.simple_name().to_string();
        Self {
            is_constructor: true,
            ..Self::method(declaring_type, &name, parameters)
        }
    }

    pub fn returning(mut self, return_type: TypeRef) -> Self {
        self.return_type = return_type;
        self
    }

    pub fn with_varargs(mut self) -> Self {
        self.varargs = true;
        self
    }

    /// Selector, or the simple name of the declaring type for constructors
    pub fn selector(&self) -> &str {
        if self.is_constructor {
            self.declaring_type.simple_name()
        } else {
            &self.name
        }
    }

    /// Parameter list as it appears in messages
    pub fn parameters_as_string(&self, short: bool) -> String {
        types_as_string(&self.parameters, self.varargs, short, None)
    }

    /// First missing type referenced by the signature
    pub fn missing_type(&self) -> Option<&TypeRef> {
        std::iter::once(&self.return_type)
            .chain(self.parameters.iter())
            .find(|t| t.missing)
    }
}

impl ReadableName for MethodRef {
    fn readable_name(&self) -> String {
        format!("{}({})", self.selector(), self.parameters_as_string(false))
    }

    fn short_readable_name(&self) -> String {
        format!("{}({})", self.selector(), self.parameters_as_string(true))
    }

    fn null_annotated_readable_name(&self, options: &CompilerOptions, short: bool) -> String {
        format!(
            "{}({})",
            self.selector(),
            types_as_string(&self.parameters, self.varargs, short, Some(options))
        )
    }
}

/// A field or local variable
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldRef {
    /// `None` for local variables and parameters
    pub declaring_type: Option<TypeRef>,
    pub name: String,
    pub field_type: TypeRef,
}

impl FieldRef {
    pub fn field(declaring_type: TypeRef, name: &str, field_type: TypeRef) -> Self {
        Self {
            declaring_type: Some(declaring_type),
            name: name.to_string(),
            field_type,
        }
    }

    pub fn local(name: &str, variable_type: TypeRef) -> Self {
        Self {
            declaring_type: None,
            name: name.to_string(),
            field_type: variable_type,
        }
    }
}

impl ReadableName for FieldRef {
    fn readable_name(&self) -> String {
        self.name.clone()
    }

    fn short_readable_name(&self) -> String {
        self.name.clone()
    }
}

/// An import declaration
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImportRef {
    pub tokens: Vec<String>,
    pub on_demand: bool,
}

impl ImportRef {
    pub fn single(name: &str) -> Self {
        Self {
            tokens: name.split('.').map(str::to_string).collect(),
            on_demand: false,
        }
    }

    pub fn on_demand(package: &str) -> Self {
        Self {
            on_demand: true,
            ..Self::single(package)
        }
    }
}

impl ReadableName for ImportRef {
    fn readable_name(&self) -> String {
        let mut name = self.tokens.join(".");
        if self.on_demand {
            name.push_str(".*");
        }
        name
    }

    fn short_readable_name(&self) -> String {
        self.readable_name()
    }
}

/// Render a parameter list, `int, java.lang.String...`.
///
/// With `varargs` the last parameter shows its element type followed by
/// `...` instead of the array brackets. Passing options renders nullness
/// annotations.
pub fn types_as_string(
    types: &[TypeRef],
    varargs: bool,
    short: bool,
    null_annotations: Option<&CompilerOptions>,
) -> String {
    let render = |t: &TypeRef| match null_annotations {
        Some(options) => t.null_annotated_readable_name(options, short),
        None if short => t.short_readable_name(),
        None => t.readable_name(),
    };
    let mut rendered = Vec::with_capacity(types.len());
    for (index, t) in types.iter().enumerate() {
        if varargs && index + 1 == types.len() && t.is_array() {
            rendered.push(format!("{}...", render(&t.element_type())));
        } else {
            rendered.push(render(t));
        }
    }
    rendered.join(", ")
}

/// Full and short argument strings for two names shown side by side
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamePair {
    pub full: [String; 2],
    pub short: [String; 2],
}

/// Names for a pair of types such as the two sides of a type mismatch.
///
/// When the short names collide the qualified names fill the short slots.
/// When the qualified names collide as well, both slots show the null
/// annotated names, since only nullness can tell the types apart.
pub fn disambiguated_pair<T: ReadableName + ?Sized>(
    first: &T,
    second: &T,
    options: &CompilerOptions,
) -> NamePair {
    let mut full = [first.readable_name(), second.readable_name()];
    let mut short = [first.short_readable_name(), second.short_readable_name()];
    if short[0] == short[1] {
        if full[0] == full[1] {
            full = [
                first.null_annotated_readable_name(options, false),
                second.null_annotated_readable_name(options, false),
            ];
            short = [
                first.null_annotated_readable_name(options, true),
                second.null_annotated_readable_name(options, true),
            ];
        } else {
            short = full.clone();
        }
    }
    NamePair { full, short }
}
