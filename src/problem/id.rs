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

//! Problem identifiers and their family bits

use std::fmt;

/// Identifier of one diagnostic condition.
///
/// The high bits classify the problem into families (type related, syntax,
/// Javadoc, ...). The low bits are an ordinal that is only meaningful
/// together with the family bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct ProblemId(pub u32);

impl ProblemId {
    /// Problem concerns a type
    pub const TYPE_RELATED: u32 = 0x0100_0000;
    /// Problem concerns a field or variable
    pub const FIELD_RELATED: u32 = 0x0200_0000;
    /// Problem concerns a method
    pub const METHOD_RELATED: u32 = 0x0400_0000;
    /// Problem concerns a constructor
    pub const CONSTRUCTOR_RELATED: u32 = 0x0800_0000;
    /// Problem concerns an import declaration
    pub const IMPORT_RELATED: u32 = 0x1000_0000;
    /// Problem not tied to a declaration kind
    pub const INTERNAL: u32 = 0x2000_0000;
    /// Problem raised by the parser
    pub const SYNTAX: u32 = 0x4000_0000;
    /// Problem found in a doc comment
    pub const JAVADOC: u32 = 0x8000_0000;

    /// Mask keeping only the ordinal part of an identifier
    pub const IGNORE_CATEGORIES_MASK: u32 = 0x007F_FFFF;

    /// Mask of all member families
    pub const MEMBER_RELATED: u32 =
        Self::FIELD_RELATED | Self::METHOD_RELATED | Self::CONSTRUCTOR_RELATED;

    /// Create an identifier from its raw value
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Raw integer value
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Ordinal with the family bits stripped
    pub const fn ordinal(self) -> u32 {
        self.0 & Self::IGNORE_CATEGORIES_MASK
    }

    /// Whether any of the given family bits are set
    pub const fn has_family(self, family: u32) -> bool {
        self.0 & family != 0
    }

    pub const fn is_syntax(self) -> bool {
        self.has_family(Self::SYNTAX)
    }

    pub const fn is_import_related(self) -> bool {
        self.has_family(Self::IMPORT_RELATED)
    }

    pub const fn is_type_related(self) -> bool {
        self.has_family(Self::TYPE_RELATED)
    }

    pub const fn is_member_related(self) -> bool {
        self.has_family(Self::MEMBER_RELATED)
    }

    pub const fn is_javadoc(self) -> bool {
        self.has_family(Self::JAVADOC)
    }

    /// Catalog name of the problem, if it is a known identifier
    pub fn name(self) -> Option<&'static str> {
        super::catalog::descriptor(self).map(|d| d.name)
    }

    /// Look up a known identifier by its catalog name
    pub fn from_name(name: &str) -> Option<Self> {
        super::catalog::by_name(name).map(|d| d.id)
    }
}

impl From<u32> for ProblemId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl fmt::Display for ProblemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{name}"),
            None => write!(f, "#{:#010x}", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_bits() {
        let id = ProblemId::new(ProblemId::SYNTAX | ProblemId::INTERNAL | 204);
        assert!(id.is_syntax());
        assert!(!id.is_import_related());
        assert_eq!(id.ordinal(), 204);
    }

    #[test]
    fn test_javadoc_bit_is_high_bit() {
        let id = ProblemId::new(ProblemId::JAVADOC | ProblemId::INTERNAL | 486);
        assert!(id.is_javadoc());
        assert!(id.raw() > i32::MAX as u32);
    }

    #[test]
    fn test_display_unknown() {
        let id = ProblemId::new(ProblemId::INTERNAL | 0x7_FFFF);
        assert_eq!(id.to_string(), "#0x2007ffff");
        assert!(id.name().is_none());
    }
}
