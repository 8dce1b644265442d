//! Systems: movement rules and the collision probe they share.

pub mod movement;
pub mod physics;
