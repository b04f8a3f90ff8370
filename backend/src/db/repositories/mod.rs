//! Repository implementations module.
//!
//! - `local`: in-memory implementation over the loaded [`Dataset`](crate::models::Dataset)
pub mod local;

pub use local::LocalRepository;
