//! One-shot MongoDB connectivity probe.
//!
//! Connects to a deployment, pings it, reads one document from a collection
//! and prints what happened. The connection is released on every path.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod mongo;
pub mod probe;
pub mod report;
