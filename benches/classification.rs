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

//! Classification and reporting benchmarks

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use java_problem_reporter::problem::catalog;
use java_problem_reporter::{
    CompilationUnit, CompilerOptions, ImportRef, ProblemClassifier, ProblemCollector, ProblemId,
    ProblemReporter, ReferenceContext, Report, SourceNode, irritant_of,
};
use std::hint::black_box;

const SAMPLE_IDS: &[(&str, ProblemId)] = &[
    ("unused_import", ProblemId::UNUSED_IMPORT),
    ("undefined_type", ProblemId::UNDEFINED_TYPE),
    ("javadoc_missing", ProblemId::JAVADOC_MISSING),
    ("parsing_error", ProblemId::PARSING_ERROR),
];

fn bench_irritant_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("irritant");
    group.throughput(Throughput::Elements(catalog::all().len() as u64));

    group.bench_function("whole_catalog", |b| {
        b.iter(|| {
            for descriptor in catalog::all() {
                black_box(irritant_of(black_box(descriptor.id)));
            }
        })
    });

    group.finish();
}

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");
    group.throughput(Throughput::Elements(1));

    let options = CompilerOptions::all_warnings();
    let classifier = ProblemClassifier::new(&options);
    for (name, id) in SAMPLE_IDS {
        group.bench_with_input(BenchmarkId::new("classify", name), id, |b, id| {
            b.iter(|| black_box(classifier.classify(black_box(*id))))
        });
    }

    group.finish();
}

fn bench_report(c: &mut Criterion) {
    let mut group = c.benchmark_group("report");
    group.throughput(Throughput::Elements(1));

    let unit = CompilationUnit::new("A.java", "import java.util.List;\nclass A {}\n");
    let report = Report::unused_import(ImportRef::single("java.util.List"), SourceNode::expression(7, 20));
    let mut reporter = ProblemReporter::new(CompilerOptions::default());

    group.bench_function("unused_import", |b| {
        b.iter(|| {
            let mut collector = ProblemCollector::new();
            let mut context = ReferenceContext::new(&unit, &mut collector);
            black_box(reporter.report(black_box(&report), Some(&mut context)).is_ok())
        })
    });

    group.finish();
}

criterion_group!(benches, bench_irritant_lookup, bench_classify, bench_report);
criterion_main!(benches);
