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

//! Re-scanning of source text to locate brackets and parentheses
//!
//! The parsed structure does not always record where a type argument list
//! ends or where an argument list starts. The scanner walks the raw
//! characters between two offsets, skipping whitespace, comments and
//! literals, and reports the offsets of the punctuation it meets.

use crate::location::SourceRange;

pub fn is_identifier_start(c: char) -> bool {
    unicode_xid::UnicodeXID::is_xid_start(c) || c == '_' || c == '$'
}

pub fn is_identifier_continue(c: char) -> bool {
    unicode_xid::UnicodeXID::is_xid_continue(c) || c == '$'
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Identifier,
    Literal,
    Less,
    /// A single `>`; shift operators are split into one token per character
    Greater,
    LParen,
    RParen,
    LBrace,
    RBrace,
    Semicolon,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub range: SourceRange,
}

/// Reusable scanner over the characters of one compilation unit
#[derive(Debug, Default)]
pub struct PositionScanner {
    source: Vec<char>,
    position: usize,
    limit: usize,
}

impl PositionScanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the scanned text, keeping the allocation
    pub fn set_source(&mut self, source: &[char]) {
        self.source.clear();
        self.source.extend_from_slice(source);
        self.position = 0;
        self.limit = self.source.len();
    }

    pub fn source(&self) -> &[char] {
        &self.source
    }

    /// Scan from `start` up to and including `end`
    pub fn reset_to(&mut self, start: usize, end: usize) {
        self.position = start.min(self.source.len());
        self.limit = end.saturating_add(1).min(self.source.len());
    }

    fn peek(&self, offset: usize) -> Option<char> {
        let index = self.position + offset;
        if index < self.limit {
            self.source.get(index).copied()
        } else {
            None
        }
    }

    fn skip_trivia(&mut self) {
        loop {
            match (self.peek(0), self.peek(1)) {
                (Some(c), _) if c.is_whitespace() => self.position += 1,
                (Some('/'), Some('/')) => {
                    while let Some(c) = self.peek(0) {
                        if c == '\n' || c == '\r' {
                            break;
                        }
                        self.position += 1;
                    }
                }
                (Some('/'), Some('*')) => {
                    self.position += 2;
                    loop {
                        match (self.peek(0), self.peek(1)) {
                            (Some('*'), Some('/')) => {
                                self.position += 2;
                                break;
                            }
                            (Some(_), _) => self.position += 1,
                            (None, _) => break,
                        }
                    }
                }
                _ => break,
            }
        }
    }

    fn skip_quoted(&mut self, quote: char) {
        self.position += 1;
        while let Some(c) = self.peek(0) {
            self.position += 1;
            match c {
                '\\' => self.position += 1,
                c if c == quote => break,
                '\n' | '\r' => break,
                _ => {}
            }
        }
        self.position = self.position.min(self.limit);
    }

    /// Next significant token, or `None` at the end of the range
    pub fn next_token(&mut self) -> Option<Token> {
        self.skip_trivia();
        let start = self.position;
        let c = self.peek(0)?;
        let kind = match c {
            '<' => self.single(TokenKind::Less),
            '>' => self.single(TokenKind::Greater),
            '(' => self.single(TokenKind::LParen),
            ')' => self.single(TokenKind::RParen),
            '{' => self.single(TokenKind::LBrace),
            '}' => self.single(TokenKind::RBrace),
            ';' => self.single(TokenKind::Semicolon),
            '"' | '\'' => {
                self.skip_quoted(c);
                TokenKind::Literal
            }
            c if c.is_ascii_digit() => {
                while self
                    .peek(0)
                    .is_some_and(|c| c.is_ascii_alphanumeric() || c == '.' || c == '_')
                {
                    self.position += 1;
                }
                TokenKind::Literal
            }
            c if is_identifier_start(c) => {
                while self.peek(0).is_some_and(is_identifier_continue) {
                    self.position += 1;
                }
                TokenKind::Identifier
            }
            _ => self.single(TokenKind::Other),
        };
        Some(Token {
            kind,
            range: SourceRange::new(start, self.position - 1),
        })
    }

    fn single(&mut self, kind: TokenKind) -> TokenKind {
        self.position += 1;
        kind
    }

    /// Offset of the `>` closing the type argument list opened at or after
    /// `start`. Scanning stops at `{`; when no bracket closes the list
    /// `start` is returned.
    pub fn closing_angle_bracket(&mut self, start: usize) -> usize {
        let len = self.source.len();
        if len == 0 {
            return start;
        }
        self.reset_to(start, len - 1);
        let mut depth = 0usize;
        while let Some(token) = self.next_token() {
            match token.kind {
                TokenKind::Less => depth += 1,
                TokenKind::Greater => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        return token.range.end;
                    }
                }
                TokenKind::LBrace => break,
                _ => {}
            }
        }
        start
    }

    /// Offset of the first token after the first `(` within `[start, end]`
    pub fn position_after_opening_parenthesis(&mut self, start: usize, end: usize) -> Option<usize> {
        self.reset_to(start, end);
        while let Some(token) = self.next_token() {
            if token.kind == TokenKind::LParen {
                return self.next_token().map(|t| t.range.start);
            }
        }
        None
    }

    /// Offset of the last character before the parenthesis that closes the
    /// first `(` within `[start, end]`
    pub fn position_before_closing_parenthesis(&mut self, start: usize, end: usize) -> Option<usize> {
        self.reset_to(start, end);
        let mut depth = 0usize;
        let mut previous_end = None;
        while let Some(token) = self.next_token() {
            match token.kind {
                TokenKind::LParen => {
                    depth += 1;
                    if depth == 1 {
                        continue;
                    }
                }
                TokenKind::RParen if depth == 1 => return previous_end,
                TokenKind::RParen => depth = depth.saturating_sub(1),
                _ => {}
            }
            if depth > 0 {
                previous_end = Some(token.range.end);
            }
        }
        None
    }

    /// Range of the first identifier within `[start, end]`
    pub fn first_identifier(&mut self, start: usize, end: usize) -> Option<SourceRange> {
        self.reset_to(start, end);
        while let Some(token) = self.next_token() {
            if token.kind == TokenKind::Identifier {
                return Some(token.range);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn scanner(source: &str) -> PositionScanner {
        let mut scanner = PositionScanner::new();
        scanner.set_source(&source.chars().collect::<Vec<_>>());
        scanner
    }

    #[rstest]
    #[case("List<String> list;", 0, 11)]
    #[case("Map<String, List<Integer>> m;", 0, 25)]
    #[case("Map<String, List<Integer>>> m;", 12, 24)]
    #[case("List</* > */ String> l;", 0, 19)]
    #[case("List { }", 0, 0)]
    fn test_closing_angle_bracket(#[case] source: &str, #[case] start: usize, #[case] expected: usize) {
        assert_eq!(scanner(source).closing_angle_bracket(start), expected);
    }

    #[test]
    fn test_parenthesis_positions() {
        let source = "new Foo( a, \")\", (b) ) ;";
        let mut scanner = scanner(source);
        let end = source.chars().count() - 1;
        assert_eq!(scanner.position_after_opening_parenthesis(0, end), Some(9));
        assert_eq!(scanner.position_before_closing_parenthesis(0, end), Some(19));
    }

    #[test]
    fn test_empty_argument_list() {
        let mut scanner = scanner("foo()");
        assert_eq!(scanner.position_before_closing_parenthesis(0, 4), None);
    }

    #[test]
    fn test_identifiers() {
        let mut scanner = scanner("  // note\n  $value_1 = 3;");
        assert_eq!(scanner.first_identifier(0, 20), Some(SourceRange::new(12, 19)));
    }
}
