//! Inbound adapters driving the feed pipeline.

pub mod cli;
