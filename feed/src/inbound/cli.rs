//! Command-line surface over the demo orchestrator.
//!
//! Parsing lives in [`CliArgs`]; [`run`] executes one [`FeedCommand`] and
//! returns a serialisable [`CommandOutput`]. Printing is left to the binary.

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;

use crate::domain::ports::{Transport, UserFactory, UserPostsSource};
use crate::domain::{DemoOrchestrator, FeatureCatalog, FeatureSnapshot, FeedError, Snapshot, UiModel};

/// `feed` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "feed",
    about = "Build feed snapshots and UI models for users",
    version
)]
pub struct CliArgs {
    /// Operation to run.
    #[command(subcommand)]
    pub command: FeedCommand,
}

/// Operations exposed by the `feed` binary.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum FeedCommand {
    /// Build the UI model for one user.
    Build {
        /// User to load.
        #[arg(value_name = "user-id", allow_negative_numbers = true)]
        user_id: i64,
    },
    /// Send an empty GET and print the status code.
    Ping {
        /// Path relative to the API base URL.
        #[arg(value_name = "path")]
        path: String,
    },
    /// Build the UI model for generated demo users.
    Demo {
        /// Number of users to generate.
        #[arg(value_name = "count")]
        count: u32,
    },
    /// Print the raw snapshot for one user.
    Snapshot {
        /// User to load.
        #[arg(value_name = "user-id", allow_negative_numbers = true)]
        user_id: i64,
    },
    /// Load one snapshot per numbered feature.
    Sweep {
        /// First feature suffix.
        #[arg(long, value_name = "n")]
        start: u32,
        /// Number of features.
        #[arg(long, value_name = "n")]
        count: u32,
        /// User loaded by every feature.
        #[arg(
            long = "user-id",
            value_name = "id",
            default_value_t = 1,
            allow_negative_numbers = true
        )]
        user_id: i64,
    },
}

/// Result of one command, printed as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CommandOutput {
    /// A UI model from `build` or `demo`.
    Ui(UiModel),
    /// Status code from `ping`.
    Status {
        /// Status code returned by the transport.
        code: u16,
    },
    /// Raw snapshot from `snapshot`.
    Snapshot(Snapshot),
    /// Per-feature checksums from `sweep`.
    Sweep(Vec<FeatureSnapshot>),
}

/// Execute `command` against `orchestrator`.
///
/// # Errors
///
/// Returns [`FeedError`] when a port fails.
pub async fn run<S, T, F>(
    command: FeedCommand,
    orchestrator: &DemoOrchestrator<S, T, F>,
) -> Result<CommandOutput, FeedError>
where
    S: UserPostsSource + ?Sized,
    T: Transport + ?Sized,
    F: UserFactory + ?Sized,
{
    let output = match command {
        FeedCommand::Build { user_id } => {
            let model = orchestrator.build_for_user(user_id).await?;
            info!(user_id, header = %model.header, "feed built");
            CommandOutput::Ui(model)
        }
        FeedCommand::Ping { path } => {
            let code = orchestrator.ping(&path).await?;
            info!(%path, code, "ping finished");
            CommandOutput::Status { code }
        }
        FeedCommand::Demo { count } => {
            let model = orchestrator.demo_flow(count);
            info!(count, "demo feed built");
            CommandOutput::Ui(model)
        }
        FeedCommand::Snapshot { user_id } => {
            let snapshot = orchestrator.load(user_id).await?;
            info!(user_id, checksum = snapshot.checksum, "snapshot loaded");
            CommandOutput::Snapshot(snapshot)
        }
        FeedCommand::Sweep {
            start,
            count,
            user_id,
        } => {
            let catalog = FeatureCatalog::range(start, count);
            let reports = catalog.sweep(orchestrator.loader(), user_id).await?;
            info!(features = reports.len(), user_id, "feature sweep finished");
            CommandOutput::Sweep(reports)
        }
    };
    Ok(output)
}
