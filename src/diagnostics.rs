#[cfg(not(target_arch = "wasm32"))]
use once_cell::sync::Lazy;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Instant;
use tracing::debug;

#[cfg(not(target_arch = "wasm32"))]
static EPOCH: Lazy<Instant> = Lazy::new(Instant::now);

// `Instant::now` panics on wasm32-unknown-unknown, so the browser clock is used there.
#[cfg(target_arch = "wasm32")]
fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
fn now_ms() -> f64 {
    EPOCH.elapsed().as_secs_f64() * 1000.0
}

#[inline]
pub fn log_perf(scope: &str, started_at_ms: f64, details: &str) {
    let elapsed_ms = (now_ms() - started_at_ms).max(0.0).round() as u64;
    if details.trim().is_empty() {
        debug!("[perf] {scope} took {elapsed_ms}ms");
    } else {
        debug!("[perf] {scope} took {elapsed_ms}ms | {details}");
    }
}

pub struct PerfTimer {
    scope: &'static str,
    started_at_ms: f64,
}

impl PerfTimer {
    pub fn start(scope: &'static str) -> Self {
        Self {
            scope,
            started_at_ms: now_ms(),
        }
    }

    pub fn finish(self, details: &str) {
        log_perf(self.scope, self.started_at_ms, details);
    }
}
