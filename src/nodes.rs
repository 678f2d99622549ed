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

//! Source shapes a problem can be anchored to
//!
//! Callers describe the node that caused a problem by its outer range plus
//! the inner ranges the parser knows. The narrowing rules pick the part of
//! the node the problem is about, re-scanning the text when the parser did
//! not keep the exact offsets.

use crate::location::SourceRange;
use crate::scanner::PositionScanner;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceNode {
    /// Any expression or statement taken as a whole
    Expression(SourceRange),
    /// A simple name such as `count`
    SingleName(SourceRange),
    /// A dotted name `a.b.c` with the range of every segment
    QualifiedName {
        range: SourceRange,
        segments: Vec<SourceRange>,
    },
    /// A type reference. The parser's range of a parameterized reference
    /// stops at its last name; the span extends to the closing `>`.
    TypeReference {
        range: SourceRange,
        parameterized: bool,
    },
    /// `new Type(args)`
    Allocation {
        range: SourceRange,
        type_range: SourceRange,
    },
    /// `receiver.selector(args)`
    MessageSend {
        range: SourceRange,
        selector: SourceRange,
    },
    /// `receiver.field`; problems about the field sit on its name
    FieldReference {
        range: SourceRange,
        name: SourceRange,
    },
    /// A type, method, field or variable declaration
    Declaration {
        range: SourceRange,
        name: SourceRange,
    },
}

impl SourceNode {
    pub fn expression(start: usize, end: usize) -> Self {
        SourceNode::Expression(SourceRange::new(start, end))
    }

    pub fn name(start: usize, end: usize) -> Self {
        SourceNode::SingleName(SourceRange::new(start, end))
    }

    /// Qualified name from its segment ranges, outermost first
    pub fn qualified_name(segments: Vec<SourceRange>) -> Self {
        let range = match (segments.first(), segments.last()) {
            (Some(first), Some(last)) => first.merge(last),
            _ => SourceRange::default(),
        };
        SourceNode::QualifiedName { range, segments }
    }

    /// Field access spanning `start..=end` whose field name ends the range
    pub fn field_reference(start: usize, name_start: usize, end: usize) -> Self {
        SourceNode::FieldReference {
            range: SourceRange::new(start, end),
            name: SourceRange::new(name_start, end),
        }
    }

    pub fn type_reference(start: usize, end: usize) -> Self {
        SourceNode::TypeReference {
            range: SourceRange::new(start, end),
            parameterized: false,
        }
    }

    pub fn parameterized_type_reference(start: usize, end: usize) -> Self {
        SourceNode::TypeReference {
            range: SourceRange::new(start, end),
            parameterized: true,
        }
    }

    /// Outer range of the node
    pub fn range(&self) -> SourceRange {
        match self {
            SourceNode::Expression(range) | SourceNode::SingleName(range) => *range,
            SourceNode::QualifiedName { range, .. }
            | SourceNode::TypeReference { range, .. }
            | SourceNode::Allocation { range, .. }
            | SourceNode::MessageSend { range, .. }
            | SourceNode::FieldReference { range, .. }
            | SourceNode::Declaration { range, .. } => *range,
        }
    }

    /// Range a problem about the node as a whole is reported on
    pub fn span(&self, scanner: &mut PositionScanner) -> SourceRange {
        match self {
            SourceNode::TypeReference {
                range,
                parameterized: true,
            } => {
                let end = scanner.closing_angle_bracket(range.end);
                if end > range.end {
                    SourceRange::new(range.start, end)
                } else {
                    *range
                }
            }
            SourceNode::MessageSend { range, selector } => SourceRange::new(selector.start, range.end),
            SourceNode::FieldReference { name, .. } | SourceNode::Declaration { name, .. } => *name,
            other => other.range(),
        }
    }

    /// Range of segment `index` of a qualified name.
    ///
    /// Used for problems about the field bound to that segment. Other
    /// nodes, and indexes past the last segment, give the whole range.
    pub fn segment_span(&self, index: usize) -> SourceRange {
        match self {
            SourceNode::QualifiedName { segments, .. } => {
                segments.get(index).copied().unwrap_or_else(|| self.range())
            }
            other => other.range(),
        }
    }

    /// Range from the first to the last argument of an allocation or
    /// invocation; the whole node when there are no arguments
    pub fn arguments_span(&self, scanner: &mut PositionScanner) -> SourceRange {
        let (range, from) = match self {
            SourceNode::Allocation { range, type_range } => (*range, type_range.end + 1),
            SourceNode::MessageSend { range, selector } => (*range, selector.end + 1),
            other => return other.range(),
        };
        let start = scanner.position_after_opening_parenthesis(from, range.end);
        let end = scanner.position_before_closing_parenthesis(from, range.end);
        match (start, end) {
            (Some(start), Some(end)) if start <= end => SourceRange::new(start, end),
            _ => range,
        }
    }
}
