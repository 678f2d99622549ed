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

//! Presentation categories for problems

use crate::problem::ProblemId;
use std::fmt;

/// Coarse grouping of problems used by tools that present them.
///
/// The numeric identifiers are stable and match the values persisted by
/// existing tooling, so they must never be renumbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Category {
    Unspecified,
    BuildPath,
    Syntax,
    Import,
    Type,
    Member,
    Internal,
    Javadoc,
    CodeStyle,
    PotentialProgrammingProblem,
    NameShadowingConflict,
    Deprecation,
    UnnecessaryCode,
    UncheckedRaw,
    Nls,
    Restriction,
}

impl Category {
    pub const ALL: [Category; 16] = [
        Category::Unspecified,
        Category::BuildPath,
        Category::Syntax,
        Category::Import,
        Category::Type,
        Category::Member,
        Category::Internal,
        Category::Javadoc,
        Category::CodeStyle,
        Category::PotentialProgrammingProblem,
        Category::NameShadowingConflict,
        Category::Deprecation,
        Category::UnnecessaryCode,
        Category::UncheckedRaw,
        Category::Nls,
        Category::Restriction,
    ];

    /// Stable numeric identifier
    pub const fn id(self) -> u32 {
        match self {
            Category::Unspecified => 0,
            Category::BuildPath => 10,
            Category::Syntax => 20,
            Category::Import => 30,
            Category::Type => 40,
            Category::Member => 50,
            Category::Internal => 60,
            Category::Javadoc => 70,
            Category::CodeStyle => 80,
            Category::PotentialProgrammingProblem => 90,
            Category::NameShadowingConflict => 100,
            Category::Deprecation => 110,
            Category::UnnecessaryCode => 120,
            Category::UncheckedRaw => 130,
            Category::Nls => 140,
            Category::Restriction => 150,
        }
    }

    pub fn from_id(id: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.id() == id)
    }

    /// Human readable label
    pub fn label(self) -> &'static str {
        match self {
            Category::Unspecified => "Unspecified",
            Category::BuildPath => "Build Path",
            Category::Syntax => "Syntax",
            Category::Import => "Imports",
            Category::Type => "Types",
            Category::Member => "Members",
            Category::Internal => "Internal",
            Category::Javadoc => "Javadoc",
            Category::CodeStyle => "Code Style",
            Category::PotentialProgrammingProblem => "Potential Programming Problems",
            Category::NameShadowingConflict => "Name Shadowing and Conflicts",
            Category::Deprecation => "Deprecation",
            Category::UnnecessaryCode => "Unnecessary Code",
            Category::UncheckedRaw => "Generic Types",
            Category::Nls => "NLS",
            Category::Restriction => "Restricted API",
        }
    }

    /// Parse a variant name (`UnnecessaryCode`) or a numeric id (`120`)
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if let Ok(id) = value.parse::<u32>() {
            return Self::from_id(id);
        }
        Self::ALL
            .into_iter()
            .find(|c| format!("{c:?}").eq_ignore_ascii_case(value))
    }

    /// Category derived from the family bits of an identifier.
    ///
    /// Checks run in a fixed order; an identifier carrying several family
    /// bits gets the first matching category.
    pub fn from_problem_id(id: ProblemId) -> Self {
        if id == ProblemId::IS_CLASS_PATH_CORRECT || id == ProblemId::CORRUPTED_SIGNATURE {
            return Category::BuildPath;
        }
        if id.is_syntax() {
            Category::Syntax
        } else if id.is_import_related() {
            Category::Import
        } else if id.is_type_related() {
            Category::Type
        } else if id.is_member_related() {
            Category::Member
        } else {
            Category::Internal
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_ids_are_unique() {
        let mut ids: Vec<u32> = Category::ALL.iter().map(|c| c.id()).collect();
        ids.dedup();
        assert_eq!(ids.len(), Category::ALL.len());
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[rstest]
    #[case(ProblemId::IS_CLASS_PATH_CORRECT, Category::BuildPath)]
    #[case(ProblemId::CORRUPTED_SIGNATURE, Category::BuildPath)]
    #[case(ProblemId::PARSING_ERROR, Category::Syntax)]
    #[case(ProblemId::IMPORT_NOT_FOUND, Category::Import)]
    #[case(ProblemId::UNDEFINED_TYPE, Category::Type)]
    #[case(ProblemId::UNDEFINED_FIELD, Category::Member)]
    #[case(ProblemId::UNDEFINED_METHOD, Category::Member)]
    #[case(ProblemId::UNDEFINED_CONSTRUCTOR, Category::Member)]
    #[case(ProblemId::CODE_CANNOT_BE_REACHED, Category::Internal)]
    fn test_from_problem_id(#[case] id: ProblemId, #[case] expected: Category) {
        assert_eq!(Category::from_problem_id(id), expected);
    }

    #[test]
    fn test_syntax_wins_over_import() {
        let synthetic = ProblemId::new(ProblemId::SYNTAX | ProblemId::IMPORT_RELATED | 1);
        assert_eq!(Category::from_problem_id(synthetic), Category::Syntax);

        let import_and_type = ProblemId::new(ProblemId::IMPORT_RELATED | ProblemId::TYPE_RELATED | 1);
        assert_eq!(Category::from_problem_id(import_and_type), Category::Import);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Category::parse("UnnecessaryCode"), Some(Category::UnnecessaryCode));
        assert_eq!(Category::parse("120"), Some(Category::UnnecessaryCode));
        assert_eq!(Category::parse("nls"), Some(Category::Nls));
        assert_eq!(Category::parse("7"), None);
    }
}
