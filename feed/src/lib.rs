//! Feed pipeline: user snapshots, summaries, feed items and UI models.
//!
//! The crate follows a hexagonal layout:
//!
//! - [`domain`] holds the pipeline and its driven ports;
//! - [`outbound`] implements those ports over HTTP and generated data;
//! - [`inbound`] exposes the pipeline as a command-line surface;
//! - [`config`] loads settings for wiring.

pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;
