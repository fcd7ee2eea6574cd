//! Driven ports for the feed pipeline, with in-memory fixture adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod transport;
mod user_factory;
mod user_posts_source;

#[cfg(test)]
pub use transport::MockTransport;
pub use transport::{
    FixtureTransport, HttpMethod, NetworkRequest, NetworkResponse, Transport, TransportError,
};
#[cfg(test)]
pub use user_factory::MockUserFactory;
pub use user_factory::{FixtureUserFactory, UserFactory};
#[cfg(test)]
pub use user_posts_source::MockUserPostsSource;
pub use user_posts_source::{FixtureUserPostsSource, UserPostsSource, UserPostsSourceError};
