//! devmap: a registry of projects organized by language
//!
//! Projects live under a root directory laid out as `<root>/<language>/<folder>`.
//! A JSON registry records each project's owner, creation time, size and
//! version-control status, and [`sync::synchronize`] keeps the registry and
//! the tree in agreement in both directions.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod context;
pub mod error;
pub mod install;
pub mod logging;
pub mod materialize;
pub mod probe;
pub mod registry;
pub mod sync;
pub mod views;
pub mod wizard;
