//! Structural tests for architectural boundary enforcement.
//!
//! These tests scan source files to verify that the layer boundaries
//! between domain, application, infra and presentation are maintained.

use std::path::{Path, PathBuf};

/// Collect all `.rs` files under a directory recursively.
fn collect_rs_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                files.extend(collect_rs_files(&path));
            } else if path.extension().and_then(|e| e.to_str()) == Some("rs") {
                files.push(path);
            }
        }
    }
    files
}

fn src_dir(sub: &[&str]) -> PathBuf {
    sub.iter()
        .fold(Path::new(env!("CARGO_MANIFEST_DIR")).join("src"), |p, s| p.join(s))
}

fn relative(file: &Path) -> String {
    file.strip_prefix(env!("CARGO_MANIFEST_DIR"))
        .unwrap_or(file)
        .display()
        .to_string()
        .replace('\\', "/")
}

/// Track brace depth and return whether a line is inside a `#[cfg(test)]` block.
struct CfgTestTracker {
    in_test_block: bool,
    brace_depth: i32,
    test_block_start_depth: i32,
}

impl CfgTestTracker {
    fn new() -> Self {
        Self {
            in_test_block: false,
            brace_depth: 0,
            test_block_start_depth: 0,
        }
    }

    /// Process a line and return `true` if it's inside a `#[cfg(test)]` block.
    fn process_line(&mut self, line: &str) -> bool {
        if line.trim().contains("#[cfg(test)]") {
            self.in_test_block = true;
            self.test_block_start_depth = self.brace_depth;
        }
        for ch in line.chars() {
            match ch {
                '{' => self.brace_depth += 1,
                '}' => {
                    self.brace_depth -= 1;
                    if self.in_test_block && self.brace_depth <= self.test_block_start_depth {
                        self.in_test_block = false;
                    }
                }
                _ => {}
            }
        }
        self.in_test_block
    }
}

/// Non-comment lines outside `#[cfg(test)]` blocks, with their line numbers.
fn production_lines(path: &Path) -> Vec<(usize, String)> {
    let Ok(content) = std::fs::read_to_string(path) else {
        return Vec::new();
    };
    let mut tracker = CfgTestTracker::new();
    content
        .lines()
        .enumerate()
        .filter_map(|(i, line)| {
            let in_test = tracker.process_line(line);
            let trimmed = line.trim();
            let comment = trimmed.starts_with("//") || trimmed.starts_with("/*") || trimmed.starts_with('*');
            (!in_test && !comment).then(|| (i + 1, line.to_string()))
        })
        .collect()
}

/// Every production line under `dir` containing one of `forbidden`.
fn scan(dir: &Path, forbidden: &[&str]) -> Vec<String> {
    let mut violations = Vec::new();
    for file in collect_rs_files(dir) {
        let rel = relative(&file);
        for (lineno, line) in production_lines(&file) {
            for needle in forbidden {
                if line.contains(needle) {
                    violations.push(format!("{rel}:{lineno}: `{needle}`: {}", line.trim()));
                }
            }
        }
    }
    violations
}

#[test]
fn domain_is_pure() {
    let violations = scan(
        &src_dir(&["domain"]),
        &[
            "crate::infra",
            "crate::commands",
            "crate::output",
            "crate::application",
            "tokio",
            "std::fs",
            "std::process",
            "std::net",
        ],
    );
    assert!(
        violations.is_empty(),
        "domain/ must not perform I/O or depend on outer layers:\n{}",
        violations.join("\n")
    );
}

#[test]
fn application_depends_only_on_domain() {
    let violations = scan(
        &src_dir(&["application"]),
        &["crate::infra", "crate::commands", "crate::output", "std::process::Command"],
    );
    assert!(
        violations.is_empty(),
        "application/ must reach I/O through ports only:\n{}",
        violations.join("\n")
    );
}

#[test]
fn infra_has_no_imports_from_commands_or_output() {
    let violations = scan(&src_dir(&["infra"]), &["crate::commands", "crate::output"]);
    assert!(
        violations.is_empty(),
        "infra/ must not import from commands/ or output/:\n{}",
        violations.join("\n")
    );
}

#[test]
fn infra_has_no_print_macros_outside_tests() {
    let violations = scan(&src_dir(&["infra"]), &["println!", "eprintln!"]);
    assert!(
        violations.is_empty(),
        "infra/ must not use println!/eprintln! outside #[cfg(test)]:\n{}",
        violations.join("\n")
    );
}

#[test]
fn no_inline_json_branching_in_commands() {
    let mut violations = scan(&src_dir(&["commands"]), &["json: bool"]);
    for file in collect_rs_files(&src_dir(&["commands"])) {
        for (lineno, line) in production_lines(&file) {
            let trimmed = line.trim();
            if trimmed.starts_with("if json") || trimmed.starts_with("if !json") {
                violations.push(format!("{}:{lineno}: inline JSON branch: {trimmed}", relative(&file)));
            }
        }
    }
    assert!(
        violations.is_empty(),
        "Found inline JSON branching in commands/; use app.renderer() instead:\n{}",
        violations.join("\n")
    );
}

#[test]
fn command_runner_is_only_built_in_infra_or_app() {
    let mut violations = Vec::new();
    for file in collect_rs_files(&src_dir(&[])) {
        let rel = relative(&file);
        if rel.contains("/infra/") || rel.ends_with("app.rs") {
            continue;
        }
        for (lineno, line) in production_lines(&file) {
            if line.contains("TokioCommandRunner::new") {
                violations.push(format!("{rel}:{lineno}: {}", line.trim()));
            }
        }
    }
    assert!(
        violations.is_empty(),
        "TokioCommandRunner must only be constructed by infra/ or AppContext:\n{}",
        violations.join("\n")
    );
}

#[test]
fn services_take_trait_bounds_not_concrete_adapters() {
    let concrete = ["DockerCompose<", "DockerRuntimeProbe<", "EnvFileStore", "YamlSettingsStore"];
    let violations: Vec<_> = scan(&src_dir(&["application"]), &concrete);
    assert!(
        violations.is_empty(),
        "application/ must use port traits, not infra adapters:\n{}",
        violations.join("\n")
    );
}

/// All confirmation prompts in `commands/` must go through `app.confirm()`.
#[test]
fn commands_use_standardized_confirmation() {
    let violations = scan(
        &src_dir(&["commands"]),
        &["io::stdin().lock()", "Confirm::new()"],
    );
    assert!(
        violations.is_empty(),
        "Commands must use app.confirm() for user prompts:\n{}",
        violations.join("\n")
    );
}

/// Command files that touch `app.` must receive `&AppContext`.
#[test]
fn command_handlers_accept_app_context() {
    let mut violations = Vec::new();
    for file in collect_rs_files(&src_dir(&["commands"])) {
        let Ok(content) = std::fs::read_to_string(&file) else {
            continue;
        };
        if content.contains("app.") && !content.contains("app: &AppContext") {
            violations.push(relative(&file));
        }
    }
    assert!(
        violations.is_empty(),
        "Command handlers that use AppContext fields must accept &AppContext:\n{}",
        violations.join("\n")
    );
}
