//! Tests for the demo orchestrator.

use std::sync::Arc;

use mockall::predicate::eq;
use rstest::rstest;

use super::*;
use crate::domain::feature::FeatureName;
use crate::domain::ports::{
    FixtureTransport, FixtureUserFactory, FixtureUserPostsSource, MockTransport, MockUserFactory,
    MockUserPostsSource, NetworkResponse, TransportError, UserPostsSourceError,
};
use crate::domain::ui_model::ListItem;
use crate::domain::user::Post;

fn projector() -> UiProjector {
    UiProjector::new(FeatureName::new("Feed").expect("valid feature"))
}

fn with_source(
    source: MockUserPostsSource,
) -> DemoOrchestrator<MockUserPostsSource, FixtureTransport, FixtureUserFactory> {
    DemoOrchestrator::new(
        SnapshotLoader::new(Arc::new(source), 20),
        Arc::new(FixtureTransport),
        Arc::new(FixtureUserFactory),
        projector(),
    )
}

fn with_transport(
    transport: MockTransport,
) -> DemoOrchestrator<FixtureUserPostsSource, MockTransport, FixtureUserFactory> {
    DemoOrchestrator::new(
        SnapshotLoader::new(Arc::new(FixtureUserPostsSource), 20),
        Arc::new(transport),
        Arc::new(FixtureUserFactory),
        projector(),
    )
}

#[tokio::test]
async fn build_for_user_forces_active_and_drops_email() {
    let mut source = MockUserPostsSource::new();
    source.expect_get_user().with(eq(5)).return_once(|_| {
        Ok(Some(User::new(
            5,
            "Amy",
            Some("amy@example.com".to_owned()),
            false,
        )))
    });
    source
        .expect_get_posts()
        .with(eq(5), eq(20))
        .return_once(|_, _| Ok(vec![Post::new(1, "Hi")]));

    let model = with_source(source)
        .build_for_user(5)
        .await
        .expect("build succeeds");

    assert_eq!(model.header, "Feed Feed (1)");
    assert_eq!(
        model.items,
        vec![ListItem {
            id: 0,
            title: "1. User Amy".to_owned(),
            subtitle: "Active".to_owned(),
            selected: true,
        }]
    );
}

#[tokio::test]
async fn build_for_user_without_user_is_empty_model() {
    let mut source = MockUserPostsSource::new();
    source.expect_get_user().return_once(|_| Ok(None));
    source.expect_get_posts().return_once(|_, _| Ok(Vec::new()));

    let orchestrator = with_source(source);
    let model = orchestrator.build_for_user(3).await.expect("build succeeds");

    assert_eq!(model, orchestrator.projector().empty());
}

#[tokio::test]
async fn build_for_user_surfaces_source_failures() {
    let mut source = MockUserPostsSource::new();
    source
        .expect_get_user()
        .return_once(|_| Err(UserPostsSourceError::timeout("10s elapsed")));

    let error = with_source(source)
        .build_for_user(1)
        .await
        .expect_err("build fails");

    assert_eq!(
        error,
        FeedError::SourceUnavailable(UserPostsSourceError::timeout("10s elapsed"))
    );
}

#[rstest]
#[case(200)]
#[case(404)]
#[case(503)]
#[tokio::test]
async fn ping_reports_status_verbatim(#[case] code: u16) {
    let mut transport = MockTransport::new();
    transport
        .expect_execute()
        .with(eq(NetworkRequest::get("/health")))
        .times(1)
        .return_once(move |_| {
            Ok(NetworkResponse {
                code,
                body: Vec::new(),
            })
        });

    let status = with_transport(transport)
        .ping("/health")
        .await
        .expect("ping answered");

    assert_eq!(status, code);
}

#[tokio::test]
async fn ping_surfaces_transport_failures() {
    let mut transport = MockTransport::new();
    transport
        .expect_execute()
        .return_once(|_| Err(TransportError::connection("refused")));

    let error = with_transport(transport)
        .ping("/")
        .await
        .expect_err("ping fails");

    assert_eq!(
        error,
        FeedError::Transport(TransportError::connection("refused"))
    );
}

#[test]
fn demo_flow_lists_factory_users_in_order() {
    let model = with_transport(MockTransport::new()).demo_flow(3);

    assert_eq!(model.header, "Feed Feed (3)");
    let selected: Vec<bool> = model.items.iter().map(|item| item.selected).collect();
    assert_eq!(selected, [true, false, true]);
    assert_eq!(model.items[2].title, "3. User User-2");
}

#[test]
fn demo_flow_asks_factory_once_per_index() {
    let mut factory = MockUserFactory::new();
    for index in 0..2_u32 {
        factory
            .expect_create_user()
            .with(eq(index))
            .times(1)
            .return_const(User::new(i64::from(index), format!("U{index}"), None, true));
    }
    let orchestrator = DemoOrchestrator::new(
        SnapshotLoader::new(Arc::new(FixtureUserPostsSource), 20),
        Arc::new(FixtureTransport),
        Arc::new(factory),
        projector(),
    );

    let model = orchestrator.demo_flow(2);

    assert_eq!(model.items.len(), 2);
    assert_eq!(model.items[1].id, 1);
}

#[test]
fn demo_flow_of_zero_is_an_empty_listing() {
    let model = with_transport(MockTransport::new()).demo_flow(0);
    assert!(model.items.is_empty());
    assert_eq!(model.header, "Feed Feed (0)");
}

#[tokio::test]
async fn load_exposes_the_snapshot() {
    let snapshot = with_transport(MockTransport::new())
        .load(7)
        .await
        .expect("load succeeds");
    assert_eq!(snapshot.users.len(), 1);
    assert_eq!(snapshot.posts.len(), 20);
}
