//! Contract checks
//!
//! Caller bugs (mutating outside the grid, building a zero-sized world) are
//! not runtime conditions, so they abort with a message instead of
//! surfacing as a `Result`.
//!
//! Usage:
//! ```rust
//! use sandfall_engine::contract;
//!
//! let width = 8u32;
//! let x = 3u32;
//! contract!(x < width, "x={} outside width {}", x, width);
//! ```
//!
//! `debug_contract!` is the hot-path variant: checked in debug builds,
//! compiled out in release where the surrounding code already guarantees it.

/// Always-on contract check
#[macro_export]
macro_rules! contract {
    ($cond:expr, $($msg:tt)+) => {{
        if !$cond {
            panic!("contract violation: {}", format_args!($($msg)+));
        }
    }};
}

/// Debug-only contract check for per-cell paths
#[macro_export]
macro_rules! debug_contract {
    ($cond:expr, $($msg:tt)+) => {{
        #[cfg(debug_assertions)]
        {
            $crate::contract!($cond, $($msg)+);
        }
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn passing_contract_is_silent() {
        let w = 4u32;
        contract!(2 < w, "never shown");
    }

    #[test]
    #[should_panic(expected = "contract violation: x=9")]
    fn failing_contract_panics_with_message() {
        let x = 9;
        contract!(x < 4, "x={}", x);
    }

    #[test]
    #[should_panic]
    #[cfg(debug_assertions)]
    fn debug_contract_checks_in_debug() {
        debug_contract!(1 > 2, "debug only");
    }
}
