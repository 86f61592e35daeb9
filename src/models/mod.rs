//! Data models for one query/render cycle.
//!
//! - `commit`: CommitRecord and friends, deserialized from the GitHub
//!   list-commits response
//! - `query`: the validated (account, repository) pair from the form

pub mod commit;
pub mod query;

pub use commit::*;
pub use query::*;
