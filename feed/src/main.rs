//! `feed` entry-point: loads settings, wires adapters and runs one command.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::ffi::OsString;
use std::io;
use std::sync::Arc;

use clap::Parser;
use ortho_config::OrthoConfig;
use reqwest::Url;
use tokio::runtime::Builder;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use feed::config::FeedSettings;
use feed::domain::ports::{
    FixtureTransport, FixtureUserFactory, FixtureUserPostsSource, Transport, UserFactory,
    UserPostsSource,
};
use feed::domain::{DemoOrchestrator, SnapshotLoader, UiProjector};
use feed::inbound::cli::{CliArgs, run};
use feed::outbound::api::{HttpTransport, HttpUserPostsSource};
use feed::outbound::example_users::ExampleDataUserFactory;

type Orchestrator = DemoOrchestrator<dyn UserPostsSource, dyn Transport, dyn UserFactory>;

fn main() -> io::Result<()> {
    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|error| io::Error::other(format!("create Tokio runtime: {error}")))?;
    runtime.block_on(async_main())
}

async fn async_main() -> io::Result<()> {
    let args = CliArgs::try_parse().map_err(io::Error::other)?;
    let settings = FeedSettings::load_from_iter([OsString::from("feed")])
        .map_err(|error| io::Error::other(format!("load settings: {error}")))?;

    if settings.enable_logging() {
        init_tracing();
    }

    let orchestrator = build_orchestrator(&settings)?;
    let output = run(args.command, &orchestrator)
        .await
        .map_err(|error| io::Error::other(format!("feed command failed: {error}")))?;

    let rendered = serde_json::to_string_pretty(&output)
        .map_err(|error| io::Error::other(format!("render output: {error}")))?;
    println!("{rendered}");
    Ok(())
}

fn init_tracing() {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }
}

fn build_orchestrator(settings: &FeedSettings) -> io::Result<Orchestrator> {
    let feature = settings.feature_name().map_err(|error| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("invalid feature name: {error}"),
        )
    })?;

    let (source, transport) = match settings.api_base_url.as_deref() {
        Some(raw) => http_adapters(raw, settings)?,
        None => fixture_adapters(),
    };

    let factory: Arc<dyn UserFactory> = match settings.example_seed {
        Some(seed) => Arc::new(ExampleDataUserFactory::new(seed)),
        None => Arc::new(FixtureUserFactory),
    };

    Ok(DemoOrchestrator::new(
        SnapshotLoader::new(source, settings.page_size()),
        transport,
        factory,
        UiProjector::new(feature),
    ))
}

type Adapters = (Arc<dyn UserPostsSource>, Arc<dyn Transport>);

fn http_adapters(raw: &str, settings: &FeedSettings) -> io::Result<Adapters> {
    let base = Url::parse(raw).map_err(|error| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("invalid API base URL '{raw}': {error}"),
        )
    })?;
    let timeout = settings.request_timeout();
    let source: Arc<dyn UserPostsSource> = Arc::new(
        HttpUserPostsSource::new(base.clone(), timeout)
            .map_err(|error| io::Error::other(format!("build HTTP source: {error}")))?,
    );
    let transport: Arc<dyn Transport> = Arc::new(
        HttpTransport::new(base, timeout)
            .map_err(|error| io::Error::other(format!("build HTTP transport: {error}")))?,
    );
    Ok((source, transport))
}

fn fixture_adapters() -> Adapters {
    let source: Arc<dyn UserPostsSource> = Arc::new(FixtureUserPostsSource);
    let transport: Arc<dyn Transport> = Arc::new(FixtureTransport);
    (source, transport)
}
