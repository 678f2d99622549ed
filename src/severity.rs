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

//! Problem severities
//!
//! A severity is a bit set: a base level (warning, error, info or ignore)
//! combined with modifiers such as `FATAL`, `OPTIONAL` or the abort levels.
//! The bit values match the ones compilers and build tools persist, so a
//! severity can be stored as a plain integer.

use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};

/// Bit set describing how a problem is reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Severity(u32);

impl Severity {
    pub const WARNING: Severity = Severity(0);
    pub const ERROR: Severity = Severity(1);
    pub const ABORT_COMPILATION: Severity = Severity(2);
    pub const ABORT_COMPILATION_UNIT: Severity = Severity(4);
    pub const ABORT_TYPE: Severity = Severity(8);
    pub const ABORT_METHOD: Severity = Severity(16);
    /// Union of all abort levels
    pub const ABORT: Severity = Severity(30);
    /// Error caused by an earlier one
    pub const SECONDARY_ERROR: Severity = Severity(64);
    pub const FATAL: Severity = Severity(128);
    pub const IGNORE: Severity = Severity(256);
    /// Problem governed by a configurable irritant
    pub const OPTIONAL: Severity = Severity(512);
    pub const INTERNAL_ERROR: Severity = Severity(1024);
    pub const INFO: Severity = Severity(2048);

    /// Create a severity from persisted bits
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Whether every bit of `other` is set
    pub const fn contains(self, other: Severity) -> bool {
        self.0 & other.0 == other.0
    }

    /// Whether any bit of `other` is set
    pub const fn intersects(self, other: Severity) -> bool {
        self.0 & other.0 != 0
    }

    pub const fn is_ignore(self) -> bool {
        self.intersects(Self::IGNORE)
    }

    pub const fn is_error(self) -> bool {
        self.intersects(Self::ERROR)
    }

    pub const fn is_fatal(self) -> bool {
        self.intersects(Self::FATAL)
    }

    pub const fn is_info(self) -> bool {
        self.intersects(Self::INFO)
    }

    /// A plain warning: no error, info or ignore bit
    pub const fn is_warning(self) -> bool {
        !self.intersects(Severity(Self::ERROR.0 | Self::INFO.0 | Self::IGNORE.0))
    }

    pub const fn is_optional(self) -> bool {
        self.intersects(Self::OPTIONAL)
    }

    /// Abort bits carried by this severity
    pub const fn abort_bits(self) -> Severity {
        Severity(self.0 & Self::ABORT.0)
    }

    /// Errors that are not optional must reach the problem sink
    pub const fn is_mandatory(self) -> bool {
        self.0 & (Self::ERROR.0 | Self::OPTIONAL.0) == Self::ERROR.0
    }

    /// Base level as used in settings files
    pub fn level(self) -> SeverityLevel {
        if self.is_ignore() {
            SeverityLevel::Ignore
        } else if self.is_error() {
            SeverityLevel::Error
        } else if self.is_info() {
            SeverityLevel::Info
        } else {
            SeverityLevel::Warning
        }
    }
}

impl BitOr for Severity {
    type Output = Severity;

    fn bitor(self, rhs: Self) -> Self::Output {
        Severity(self.0 | rhs.0)
    }
}

impl BitOrAssign for Severity {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for Severity {
    type Output = Severity;

    fn bitand(self, rhs: Self) -> Self::Output {
        Severity(self.0 & rhs.0)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Self::INTERNAL_ERROR {
            return write!(f, "internal error");
        }
        write!(f, "{}", self.level())?;
        let modifiers = [
            (Self::FATAL, "fatal"),
            (Self::OPTIONAL, "optional"),
            (Self::SECONDARY_ERROR, "secondary"),
            (Self::ABORT_COMPILATION, "abort-compilation"),
            (Self::ABORT_COMPILATION_UNIT, "abort-unit"),
            (Self::ABORT_TYPE, "abort-type"),
            (Self::ABORT_METHOD, "abort-method"),
        ];
        for (bit, name) in modifiers {
            if self.intersects(bit) {
                write!(f, "|{name}")?;
            }
        }
        Ok(())
    }
}

/// Configurable severity of an irritant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityLevel {
    #[default]
    Ignore,
    Info,
    Warning,
    Error,
}

impl SeverityLevel {
    /// Setting value as written in `.prefs` files
    pub fn as_setting(self) -> &'static str {
        match self {
            SeverityLevel::Ignore => "ignore",
            SeverityLevel::Info => "info",
            SeverityLevel::Warning => "warning",
            SeverityLevel::Error => "error",
        }
    }

    /// Parse a setting value
    pub fn from_setting(value: &str) -> Option<Self> {
        match value.trim() {
            "ignore" => Some(SeverityLevel::Ignore),
            "info" => Some(SeverityLevel::Info),
            "warning" => Some(SeverityLevel::Warning),
            "error" => Some(SeverityLevel::Error),
            _ => None,
        }
    }
}

impl fmt::Display for SeverityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_setting())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_abort_is_union_of_levels() {
        let union = Severity::ABORT_COMPILATION
            | Severity::ABORT_COMPILATION_UNIT
            | Severity::ABORT_TYPE
            | Severity::ABORT_METHOD;
        assert_eq!(union, Severity::ABORT);
    }

    #[rstest]
    #[case(Severity::ERROR, true)]
    #[case(Severity::ERROR | Severity::FATAL, true)]
    #[case(Severity::ERROR | Severity::OPTIONAL, false)]
    #[case(Severity::WARNING | Severity::OPTIONAL, false)]
    #[case(Severity::WARNING, false)]
    fn test_mandatory(#[case] severity: Severity, #[case] expected: bool) {
        assert_eq!(severity.is_mandatory(), expected);
    }

    #[rstest]
    #[case(Severity::IGNORE, SeverityLevel::Ignore)]
    #[case(Severity::WARNING | Severity::OPTIONAL, SeverityLevel::Warning)]
    #[case(Severity::INFO | Severity::OPTIONAL, SeverityLevel::Info)]
    #[case(Severity::ERROR | Severity::FATAL, SeverityLevel::Error)]
    fn test_level(#[case] severity: Severity, #[case] expected: SeverityLevel) {
        assert_eq!(severity.level(), expected);
    }

    #[test]
    fn test_display() {
        assert_eq!(Severity::WARNING.to_string(), "warning");
        assert_eq!(
            (Severity::ERROR | Severity::ABORT | Severity::FATAL).to_string(),
            "error|fatal|abort-compilation|abort-unit|abort-type|abort-method"
        );
        assert_eq!(Severity::INTERNAL_ERROR.to_string(), "internal error");
    }

    #[test]
    fn test_setting_values() {
        assert_eq!(SeverityLevel::from_setting("warning"), Some(SeverityLevel::Warning));
        assert_eq!(SeverityLevel::from_setting(" error "), Some(SeverityLevel::Error));
        assert_eq!(SeverityLevel::from_setting("loud"), None);
    }
}
