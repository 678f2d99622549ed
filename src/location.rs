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

//! Source ranges and line/column computation
//!
//! Offsets count characters, not bytes, and both ends of a range are
//! inclusive, matching the positions recorded by Java parsers.

use std::fmt;

/// A position in source text (1-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Position {
    /// Line number (1-based)
    pub line: usize,
    /// Column number (1-based, in characters)
    pub column: usize,
}

impl Position {
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Inclusive range of character offsets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct SourceRange {
    pub start: usize,
    /// Offset of the last character in the range
    pub end: usize,
}

impl SourceRange {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Range of `len` characters starting at `start`
    pub const fn with_len(start: usize, len: usize) -> Self {
        Self {
            start,
            end: (start + len).saturating_sub(1),
        }
    }

    pub fn len(&self) -> usize {
        if self.end < self.start {
            0
        } else {
            self.end - self.start + 1
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset <= self.end
    }

    /// Whether `other` lies completely inside this range
    pub fn encloses(&self, other: &SourceRange) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Smallest range covering both
    pub fn merge(&self, other: &SourceRange) -> SourceRange {
        SourceRange {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

impl fmt::Display for SourceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}

/// Offsets of the line terminators of a source text
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LineTable {
    line_ends: Vec<usize>,
}

impl LineTable {
    /// Record the offset of every `\n`, and of every `\r` not followed by one
    pub fn new(chars: &[char]) -> Self {
        let mut line_ends = Vec::new();
        for (offset, ch) in chars.iter().enumerate() {
            match ch {
                '\n' => line_ends.push(offset),
                '\r' if chars.get(offset + 1) != Some(&'\n') => line_ends.push(offset),
                _ => {}
            }
        }
        Self { line_ends }
    }

    pub fn from_line_ends(line_ends: Vec<usize>) -> Self {
        Self { line_ends }
    }

    pub fn line_ends(&self) -> &[usize] {
        &self.line_ends
    }

    /// 1-based line containing `offset`; a terminator belongs to its line
    pub fn line_of(&self, offset: usize) -> usize {
        self.line_ends.partition_point(|&end| end < offset) + 1
    }

    /// Offset of the first character of a 1-based line
    pub fn line_start(&self, line: usize) -> usize {
        match line {
            0 | 1 => 0,
            n => self.line_ends.get(n - 2).map_or(0, |end| end + 1),
        }
    }

    /// 1-based line and column of `offset`
    pub fn position(&self, offset: usize) -> Position {
        let line = self.line_of(offset);
        Position::new(line, offset - self.line_start(line) + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(source: &str) -> LineTable {
        LineTable::new(&source.chars().collect::<Vec<_>>())
    }

    #[test]
    fn test_position_from_offset() {
        let lines = table("hello\nworld\ntest");

        assert_eq!(lines.position(0), Position::new(1, 1));
        assert_eq!(lines.position(5), Position::new(1, 6));
        assert_eq!(lines.position(6), Position::new(2, 1));
        assert_eq!(lines.position(12), Position::new(3, 1));
    }

    #[test]
    fn test_carriage_returns() {
        let lines = table("a\r\nb\rc");
        assert_eq!(lines.line_ends(), &[2, 4]);
        assert_eq!(lines.line_of(3), 2);
        assert_eq!(lines.line_of(5), 3);
    }

    #[test]
    fn test_range() {
        let range = SourceRange::new(5, 9);
        assert_eq!(range.len(), 5);
        assert!(range.contains(9));
        assert!(!range.contains(10));
        assert!(range.encloses(&SourceRange::new(6, 8)));
        assert_eq!(range.merge(&SourceRange::new(2, 6)), SourceRange::new(2, 9));
        assert_eq!(SourceRange::with_len(4, 3), SourceRange::new(4, 6));
    }
}
