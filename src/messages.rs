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

//! Message templates and placeholder substitution

use crate::problem::{ProblemId, catalog};

/// Text used when an identifier has no catalog entry
pub const UNDEFINED_PROBLEM: &str = "Undefined problem";

/// Message template of `id`
pub fn template(id: ProblemId) -> Option<&'static str> {
    catalog::descriptor(id).map(|d| d.template)
}

/// Replace every `{n}` in `template` with `arguments[n]`.
///
/// Placeholders without a matching argument are kept as written, and a
/// `{` that does not start a placeholder is copied through.
pub fn substitute<S: AsRef<str>>(template: &str, arguments: &[S]) -> String {
    let mut output = String::with_capacity(template.len() + 16 * arguments.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        output.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let placeholder = after
            .find('}')
            .and_then(|close| after[..close].parse::<usize>().ok().map(|index| (close, index)));
        match placeholder {
            Some((close, index)) => {
                match arguments.get(index) {
                    Some(argument) => output.push_str(argument.as_ref()),
                    None => output.push_str(&rest[open..open + close + 2]),
                }
                rest = &after[close + 1..];
            }
            None => {
                output.push('{');
                rest = after;
            }
        }
    }
    output.push_str(rest);
    output
}

/// Localized message of a problem.
///
/// Doc comment problems are prefixed with `Javadoc: `.
pub fn render<S: AsRef<str>>(id: ProblemId, arguments: &[S]) -> String {
    let Some(template) = template(id) else {
        log::debug!("No message template for {id}");
        return format!("{UNDEFINED_PROBLEM} ({id})");
    };
    let message = substitute(template, arguments);
    if id.is_javadoc() {
        let prefix = self::template(ProblemId::JAVADOC_MESSAGE_PREFIX).unwrap_or("Javadoc: ");
        format!("{prefix}{message}")
    } else {
        message
    }
}
