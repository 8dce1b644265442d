//! Core helpers shared by every layer.

// Macros first so later modules can use them
#[macro_use]
pub mod utils {
    #[macro_use]
    pub mod contract;
}

pub mod logging;
pub mod random;
