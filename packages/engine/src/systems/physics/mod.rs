//! Physics helpers shared by movement rules.

pub mod raycast;
mod types;

pub use raycast::move_test;
pub use types::{Collision, MoveTestResult};
