//! Millisecond stopwatch for tick timing.
//!
//! The browser has no monotonic `Instant`, so wasm32 reads `Date.now()`.

#[cfg(target_arch = "wasm32")]
type Stamp = f64;
#[cfg(not(target_arch = "wasm32"))]
type Stamp = std::time::Instant;

#[inline]
fn now() -> Stamp {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::Instant::now()
    }
}

#[derive(Clone, Copy)]
pub(crate) struct PerfTimer {
    started: Stamp,
}

impl PerfTimer {
    /// Running timer when perf metrics are on, nothing otherwise
    pub(crate) fn start_if(enabled: bool) -> Option<Self> {
        enabled.then(|| PerfTimer { started: now() })
    }

    pub(crate) fn elapsed_ms(&self) -> f64 {
        #[cfg(target_arch = "wasm32")]
        {
            now() - self.started
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.started.elapsed().as_secs_f64() * 1000.0
        }
    }
}
