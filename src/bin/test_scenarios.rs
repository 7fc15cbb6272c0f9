//! Scenario runner CLI
//!
//! Runs the TOML scenarios and prints a capture/miss tally per category.
//!
//!   cargo run --bin test-scenarios                      # everything
//!   cargo run --bin test-scenarios -- capture/          # one category
//!   cargo run --bin test-scenarios -- -v physics/drop   # full failure detail

use std::collections::BTreeMap;
use std::path::Path;
use std::process::ExitCode;

use minigolf::testing::{
    SCENARIOS_DIR, TestResult, discover_tests, parser::parse_test_file, runner::run_test,
};

#[derive(Default)]
struct Tally {
    passed: u32,
    failed: u32,
    captures: u32,
    misses: u32,
}

impl Tally {
    fn add(&mut self, result: &TestResult) {
        match result {
            TestResult::Pass {
                captures, misses, ..
            } => {
                self.passed += 1;
                self.captures += captures;
                self.misses += misses;
            }
            TestResult::Fail { .. } | TestResult::Error { .. } => self.failed += 1,
        }
    }

    fn merge(&mut self, other: &Tally) {
        self.passed += other.passed;
        self.failed += other.failed;
        self.captures += other.captures;
        self.misses += other.misses;
    }
}

fn main() -> ExitCode {
    let mut verbose = false;
    let mut filter = None;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "-v" | "--verbose" => verbose = true,
            a if a.starts_with('-') => eprintln!("Warning: unknown argument {}", a),
            _ => filter = Some(arg),
        }
    }

    let base = Path::new(SCENARIOS_DIR);
    let tests = discover_tests(base, filter.as_deref());
    if tests.is_empty() {
        eprintln!(
            "No scenarios under {} match {}",
            base.display(),
            filter.as_deref().unwrap_or("*")
        );
        return ExitCode::FAILURE;
    }

    let mut categories: BTreeMap<String, Tally> = BTreeMap::new();
    for path in &tests {
        let rel = path.strip_prefix(base).unwrap_or(path);
        let category = rel
            .parent()
            .map(|p| p.to_string_lossy().into_owned())
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| ".".to_string());

        let result = match parse_test_file(path) {
            Ok(def) => run_test(&def),
            Err(message) => TestResult::Error { message },
        };
        report(&rel.with_extension("").to_string_lossy(), &result, verbose);
        categories.entry(category).or_default().add(&result);
    }

    println!();
    println!(
        "{:<16} {:>6} {:>6} {:>6} {:>6}",
        "category", "pass", "fail", "holes", "misses"
    );
    let mut total = Tally::default();
    for (name, tally) in &categories {
        print_row(name, tally);
        total.merge(tally);
    }
    print_row("total", &total);

    if total.failed > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn report(name: &str, result: &TestResult, verbose: bool) {
    match result {
        TestResult::Pass {
            frames,
            captures,
            misses,
        } => println!(
            "ok    {:<40} {:>5} frames  {} in, {} out",
            name, frames, captures, misses
        ),
        TestResult::Fail { error } => {
            println!("FAIL  {}", name);
            if verbose {
                println!("      {}", error);
            } else {
                println!("      {}", error.message);
            }
        }
        TestResult::Error { message } => {
            println!("ERROR {}", name);
            println!("      {}", message);
        }
    }
}

fn print_row(name: &str, tally: &Tally) {
    println!(
        "{:<16} {:>6} {:>6} {:>6} {:>6}",
        name, tally.passed, tally.failed, tally.captures, tally.misses
    );
}
