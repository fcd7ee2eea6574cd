//! Behaviour tests for the architecture guardrails.
//!
//! Each scenario writes a throwaway crate layout to a temporary directory
//! and lints it through the same entry point the CLI uses.

use std::fs;
use std::path::PathBuf;

use architecture_lint::{ArchitectureLintError, LintSource, Violation};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};
use tempfile::TempDir;

#[derive(Default, ScenarioState)]
struct LintWorld {
    sources: Slot<Vec<LintSource>>,
    outcome: Slot<Result<(), Vec<Violation>>>,
}

impl LintWorld {
    fn add_source(&self, file: &str, contents: &str) {
        let mut sources = self.sources.get().unwrap_or_default();
        sources.push(LintSource {
            file: PathBuf::from(file),
            contents: contents.to_owned(),
        });
        self.sources.set(sources);
    }

    fn violations(&self) -> Vec<Violation> {
        match self.outcome.get().expect("lint must have run") {
            Ok(()) => panic!("expected violations, lint succeeded"),
            Err(violations) => violations,
        }
    }
}

#[fixture]
fn world() -> LintWorld {
    LintWorld::default()
}

#[given("valid domain, inbound, and outbound modules")]
fn valid_modules(world: &LintWorld) {
    world.add_source(
        "domain/snapshot.rs",
        "use crate::domain::ports::UserPostsSource; use tracing::debug; pub struct SnapshotLoader;",
    );
    world.add_source(
        "inbound/cli.rs",
        "use clap::Parser; use crate::domain::DemoOrchestrator; fn render() { println!(\"ok\"); }",
    );
    world.add_source(
        "outbound/api/http_transport.rs",
        "use reqwest::Client; use url::Url; use crate::domain::ports::Transport; pub struct HttpTransport;",
    );
}

#[given("an inbound module that imports the HTTP transport adapter")]
fn inbound_imports_outbound(world: &LintWorld) {
    world.add_source(
        "inbound/cli.rs",
        "use feed::outbound::api::HttpTransport; fn run() { let _ = HttpTransport::new; }",
    );
}

#[given("an outbound module that imports the CLI commands")]
fn outbound_imports_inbound(world: &LintWorld) {
    world.add_source(
        "outbound/api/dto.rs",
        "use crate::inbound::cli::FeedCommand; fn decode(_: FeedCommand) {}",
    );
}

#[given("a domain module that imports reqwest")]
fn domain_imports_reqwest(world: &LintWorld) {
    world.add_source(
        "domain/snapshot.rs",
        "use reqwest::Client; fn load() { let _ = Client::new(); }",
    );
}

#[given("a domain module that prints with println")]
fn domain_prints(world: &LintWorld) {
    world.add_source(
        "domain/summary.rs",
        "fn to_summary() { println!(\"summary\"); }",
    );
}

#[when("the architecture lint runs")]
fn run_architecture_lint(world: &LintWorld) {
    let sources = world.sources.get().unwrap_or_default();
    let temp_dir = TempDir::new().expect("tempdir");
    let crate_dir = temp_dir.path().join("feed");
    let src_dir = crate_dir.join("src");
    for source in &sources {
        let path = src_dir.join(&source.file);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent directories");
        }
        fs::write(&path, &source.contents).expect("write source file");
    }

    let outcome = match architecture_lint::lint_crate_sources(&crate_dir) {
        Ok(()) => Ok(()),
        Err(ArchitectureLintError::Violations(violations)) => Err(violations),
        Err(other) => panic!("expected violations or success, got: {other}"),
    };
    world.outcome.set(outcome);
}

#[then("the lint succeeds")]
fn lint_succeeds(world: &LintWorld) {
    let outcome = world.outcome.get().expect("lint must have run");
    assert!(outcome.is_ok(), "expected success, got: {outcome:?}");
}

#[then("the lint reports \"{expected}\" in \"{file}\"")]
fn lint_reports(world: &LintWorld, expected: String, file: String) {
    let file = PathBuf::from(file);
    let violations = world.violations();
    assert!(
        violations
            .iter()
            .any(|violation| violation.file == file && violation.message.contains(&expected)),
        "expected violation in {file:?} containing '{expected}', got: {violations:?}"
    );
}

#[then("the lint reports {count} violations")]
fn lint_reports_count(world: &LintWorld, count: usize) {
    let violations = world.violations();
    assert_eq!(violations.len(), count, "got: {violations:?}");
}

#[scenario(
    path = "tests/features/architecture_guardrails.feature",
    name = "Well-layered modules pass"
)]
fn well_layered_modules_pass(world: LintWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/architecture_guardrails.feature",
    name = "Inbound code reaching into outbound adapters"
)]
fn inbound_reaching_into_outbound(world: LintWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/architecture_guardrails.feature",
    name = "Outbound code reaching into the CLI"
)]
fn outbound_reaching_into_cli(world: LintWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/architecture_guardrails.feature",
    name = "Domain code using the HTTP client"
)]
fn domain_using_http_client(world: LintWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/architecture_guardrails.feature",
    name = "Domain code printing to the console"
)]
fn domain_printing(world: LintWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/architecture_guardrails.feature",
    name = "Every violation is reported"
)]
fn every_violation_reported(world: LintWorld) {
    let _ = world;
}
