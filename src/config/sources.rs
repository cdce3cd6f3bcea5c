//! Configuration sources in precedence order.

pub mod env;
pub mod global_file;
