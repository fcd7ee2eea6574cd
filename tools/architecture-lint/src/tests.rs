//! Unit tests for the architecture lint.

use std::path::PathBuf;

use rstest::rstest;

use super::*;

fn lint_one(file: &str, contents: &str) -> Result<(), ArchitectureLintError> {
    lint_sources(&[LintSource {
        file: PathBuf::from(file),
        contents: contents.to_owned(),
    }])
}

fn messages(result: Result<(), ArchitectureLintError>) -> Vec<String> {
    match result {
        Err(ArchitectureLintError::Violations(violations)) => violations
            .into_iter()
            .map(|violation| violation.message)
            .collect(),
        other => panic!("expected violations, got: {other:?}"),
    }
}

#[rstest]
#[case("domain/snapshot.rs", "use crate::domain::ports::UserPostsSource; use tracing::debug;")]
#[case("domain/feature.rs", "fn f(url: &str) -> usize { url.len() }")]
#[case("inbound/cli.rs", "use clap::Parser; use crate::domain::DemoOrchestrator;")]
#[case("outbound/api/http_source.rs", "use reqwest::Client; use url::Url; use crate::domain::User;")]
#[case("outbound/example_users.rs", "use example_data::ExampleUserGenerator;")]
#[case("domain/summary.rs", "fn label() -> String { format!(\"{}\", 1) }")]
fn accepts_allowed_dependencies(#[case] file: &str, #[case] contents: &str) {
    let result = lint_one(file, contents);
    assert!(result.is_ok(), "result: {result:?}");
}

#[rstest]
#[case("domain/orchestrator.rs", "use crate::outbound::api::HttpTransport;", "crate::outbound")]
#[case("domain/orchestrator.rs", "use feed::inbound::cli::run;", "crate::inbound")]
#[case("domain/snapshot.rs", "use crate::config::FeedSettings;", "crate::config")]
#[case("domain/snapshot.rs", "use reqwest::Client;", "external crate `reqwest`")]
#[case("domain/bulk.rs", "fn f() { let _ = example_data::ExampleUserGenerator::new(1); }", "external crate `example_data`")]
#[case("domain/ui_model.rs", "use ortho_config::OrthoConfig;", "external crate `ortho_config`")]
#[case("inbound/cli.rs", "use crate::outbound::example_users::ExampleDataUserFactory;", "crate::outbound")]
#[case("inbound/cli.rs", "use outbound::api::HttpTransport;", "crate::outbound")]
#[case("inbound/cli.rs", "fn f() { let _ = reqwest::Client::new(); }", "external crate `reqwest`")]
#[case("outbound/api/dto.rs", "use crate::inbound::cli::FeedCommand;", "crate::inbound")]
#[case("outbound/api/dto.rs", "use clap::Parser;", "external crate `clap`")]
#[case("outbound/api/mod.rs", "use self::super::super::config::FeedSettings;", "crate::config")]
fn rejects_boundary_crossings(#[case] file: &str, #[case] contents: &str, #[case] expected: &str) {
    let found = messages(lint_one(file, contents));
    assert!(
        found.iter().any(|message| message.contains(expected)),
        "expected '{expected}' in {found:?}"
    );
}

#[rstest]
#[case("domain/summary.rs", "fn f() { println!(\"x\"); }", "`println!`")]
#[case("domain/summary.rs", "fn f() { eprintln!(\"x\"); }", "`eprintln!`")]
#[case("domain/summary.rs", "fn f() { std::print!(\"x\"); }", "`print!`")]
#[case("outbound/api/mod.rs", "fn f() { dbg!(1); }", "`dbg!`")]
fn rejects_console_output(#[case] file: &str, #[case] contents: &str, #[case] expected: &str) {
    let found = messages(lint_one(file, contents));
    assert!(
        found.iter().any(|message| message.contains(expected)),
        "expected '{expected}' in {found:?}"
    );
}

#[test]
fn inbound_may_print() {
    assert!(lint_one("inbound/cli.rs", "fn f() { println!(\"ok\"); }").is_ok());
}

#[test]
fn repeated_imports_report_once() {
    let found = messages(lint_one(
        "domain/snapshot.rs",
        "use reqwest::Client; fn f() { let _ = reqwest::Client::new(); }",
    ));
    assert_eq!(found, ["domain module must not depend on external crate `reqwest`"]);
}

#[test]
fn file_outside_layers_is_rejected() {
    let result = lint_one("main.rs", "fn main() {}");
    assert!(matches!(result, Err(ArchitectureLintError::Parse { .. })));
}

#[test]
fn unparsable_source_is_rejected() {
    let result = lint_one("domain/broken.rs", "fn broken( {");
    assert!(matches!(result, Err(ArchitectureLintError::Parse { .. })));
}

#[test]
fn violations_render_one_per_line() {
    let error = ArchitectureLintError::Violations(vec![
        Violation {
            file: PathBuf::from("domain/a.rs"),
            message: "first".to_owned(),
        },
        Violation {
            file: PathBuf::from("inbound/b.rs"),
            message: "second".to_owned(),
        },
    ]);
    assert_eq!(
        error.to_string(),
        "architecture boundary violations:\n- domain/a.rs: first\n- inbound/b.rs: second"
    );
}
