//! Project registry
//!
//! The persisted record of known languages, projects and users, and the
//! store that reads and writes it.

pub mod model;
pub mod store;
pub mod timestamp;

pub use model::{
    is_single_segment, validate_segment, Project, ProjectKey, ProjectRecord, Registry,
    RegistryDocument, UNKNOWN_USER,
};
