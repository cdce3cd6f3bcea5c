//! Integration tests for the devmap project registry

mod catalog_workflow;
mod cli_route;
mod config_integration;
mod install_flow;
mod store_format;
mod sync_scenarios;
mod test_utils;
