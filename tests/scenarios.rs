//! Runs every TOML scenario under tests/scenarios through the library

use std::path::Path;

use minigolf::testing::{SCENARIOS_DIR, discover_tests, parser::parse_test_file, run_test};

#[test]
fn all_scenarios_pass() {
    let base = Path::new(env!("CARGO_MANIFEST_DIR")).join(SCENARIOS_DIR);
    let tests = discover_tests(&base, None);
    assert!(!tests.is_empty(), "no scenarios found in {}", base.display());

    let mut failures = Vec::new();
    for path in &tests {
        let def = match parse_test_file(path) {
            Ok(def) => def,
            Err(message) => {
                failures.push(format!("{}: {}", path.display(), message));
                continue;
            }
        };
        let result = run_test(&def);
        if !result.is_pass() {
            failures.push(format!("{} ({}): {:?}", path.display(), def.name, result));
        }
    }

    assert!(failures.is_empty(), "{}", failures.join("\n"));
}
