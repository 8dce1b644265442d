//! Host-facing bindings

pub mod wasm;
