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

//! Problem reporting for a Java compiler
//!
//! Decides for every problem found by parsing and analysis which irritant
//! governs it, which severity and category it resolves to under the active
//! compiler options, which arguments fill its message and which source
//! range it is anchored to.

pub mod category;
pub mod classifier;
pub mod collector;
pub mod context;
pub mod error;
pub mod formatter;
pub mod irritant;
pub mod location;
pub mod messages;
pub mod names;
pub mod nodes;
pub mod options;
pub mod problem;
pub mod report;
pub mod reporter;
pub mod scanner;
pub mod severity;

// Re-export main types
pub use category::Category;
pub use classifier::{Classification, ProblemClassifier};
pub use collector::{ProblemCollector, ProblemSummary};
pub use context::{CompilationUnit, ProblemSink, ReferenceContext, ScopeKind};
pub use error::{AbortCompilation, AbortLevel, OptionsError, OptionsResult, ReportResult};
pub use formatter::{Format, ProblemFormat, ProblemFormatter};
pub use irritant::{Irritant, irritant_of};
pub use location::{LineTable, Position, SourceRange};
pub use names::{FieldRef, ImportRef, MethodRef, ReadableName, TypeRef};
pub use nodes::SourceNode;
pub use options::{CompilerOptions, JavaLevel, TagDescriptionMode, Visibility};
pub use problem::{Problem, ProblemDescriptor, ProblemId};
pub use report::{JavadocTarget, Report};
pub use reporter::{ErrorHandlingPolicy, ProblemArguments, ProblemReporter};
pub use severity::{Severity, SeverityLevel};
