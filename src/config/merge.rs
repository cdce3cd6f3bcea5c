//! Merge policy: defaults first, then files, then environment.

pub mod merge_policy;
