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

//! Command line tool to inspect problem classification
//!
//! Shows how problems resolve to irritants, severities and categories under
//! a given set of compiler settings, and renders their messages.

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use comfy_table::{Table, presets::UTF8_FULL};
use java_problem_reporter::problem::catalog;
use java_problem_reporter::{
    Category, Classification, CompilerOptions, Irritant, ProblemClassifier, ProblemId, messages,
};
use std::path::Path;

#[derive(Parser)]
#[command(name = "java-problems")]
#[command(about = "Inspect how Java compiler problems are classified and reported")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show irritant, severity and category of problems
    Classify {
        /// Problem names (`UnusedImport`) or numeric identifiers
        #[arg(required = true)]
        problems: Vec<String>,
        /// Compiler settings (.prefs or .json)
        #[arg(short, long)]
        settings: Option<String>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// List catalog entries
    List {
        /// Only problems of this category
        #[arg(short, long)]
        category: Option<String>,
        /// Only problems governed by this irritant
        #[arg(short, long)]
        irritant: Option<String>,
    },
    /// Show the effective severity of every irritant
    Options {
        /// Compiler settings (.prefs or .json)
        #[arg(short, long)]
        settings: Option<String>,
    },
    /// Render the message of a problem
    Render {
        /// Problem name or numeric identifier
        problem: String,
        /// Message arguments
        arguments: Vec<String>,
    },
}

fn main() -> anyhow::Result<()> {
    human_panic::setup_panic!();

    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new().filter_level(level).init();

    match cli.command {
        Commands::Classify {
            problems,
            settings,
            json,
        } => handle_classify(&problems, settings.as_deref(), json),
        Commands::List { category, irritant } => handle_list(category.as_deref(), irritant.as_deref()),
        Commands::Options { settings } => handle_options(settings.as_deref()),
        Commands::Render { problem, arguments } => handle_render(&problem, &arguments),
    }
}

fn load_options(settings: Option<&str>) -> anyhow::Result<CompilerOptions> {
    match settings {
        Some(path) => CompilerOptions::from_file(Path::new(path))
            .with_context(|| format!("Failed to load settings from '{path}'")),
        None => Ok(CompilerOptions::default()),
    }
}

fn parse_problem(value: &str) -> anyhow::Result<ProblemId> {
    if let Some(id) = ProblemId::from_name(value) {
        return Ok(id);
    }
    let raw = match value.strip_prefix("0x") {
        Some(hex) => u32::from_str_radix(hex, 16).ok(),
        None => value.parse::<u32>().ok(),
    };
    match raw {
        Some(raw) => Ok(ProblemId::new(raw)),
        None => bail!("Unknown problem '{value}'"),
    }
}

fn handle_classify(problems: &[String], settings: Option<&str>, json: bool) -> anyhow::Result<()> {
    let options = load_options(settings)?;
    let classifier = ProblemClassifier::new(&options);
    let classifications = problems
        .iter()
        .map(|p| parse_problem(p).map(|id| classifier.classify(id)))
        .collect::<anyhow::Result<Vec<Classification>>>()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&classifications)?);
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Problem", "Irritant", "Option key", "Severity", "Category"]);
    for classification in &classifications {
        let (irritant, key) = match classification.irritant {
            Some(irritant) => (irritant.name(), irritant.option_key()),
            None => ("-", "-"),
        };
        table.add_row(vec![
            classification.id.to_string(),
            irritant.to_string(),
            key.to_string(),
            classification.severity.to_string(),
            classification.category.label().to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}

fn handle_list(category: Option<&str>, irritant: Option<&str>) -> anyhow::Result<()> {
    let category = category
        .map(|c| Category::parse(c).with_context(|| format!("Unknown category '{c}'")))
        .transpose()?;
    let irritant = irritant
        .map(|i| Irritant::parse(i).with_context(|| format!("Unknown irritant '{i}'")))
        .transpose()?;

    let options = CompilerOptions::default();
    let classifier = ProblemClassifier::new(&options);

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Id", "Name", "Category", "Message"]);
    let mut count = 0;
    for descriptor in catalog::all() {
        let classification = classifier.classify(descriptor.id);
        if category.is_some_and(|c| c != classification.category) {
            continue;
        }
        if irritant.is_some() && irritant != classification.irritant {
            continue;
        }
        table.add_row(vec![
            format!("{:#010x}", descriptor.id.raw()),
            descriptor.name.to_string(),
            classification.category.label().to_string(),
            descriptor.template.to_string(),
        ]);
        count += 1;
    }
    println!("{table}");
    println!("{count} problems");
    Ok(())
}

fn handle_options(settings: Option<&str>) -> anyhow::Result<()> {
    let options = load_options(settings)?;

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Irritant", "Option key", "Level", "Token"]);
    for irritant in Irritant::ALL {
        table.add_row(vec![
            irritant.name().to_string(),
            irritant.option_key().to_string(),
            options.severity_level(*irritant).to_string(),
            irritant.warning_token().unwrap_or("-").to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}

fn handle_render(problem: &str, arguments: &[String]) -> anyhow::Result<()> {
    let id = parse_problem(problem)?;
    if messages::template(id).is_none() {
        bail!("No message template for '{problem}'");
    }
    println!("{}", messages::render(id, arguments));
    Ok(())
}
