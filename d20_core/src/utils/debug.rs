//! Debug-mode detection.
//!
//! `D20_DEBUG=1` turns on verbose tracing output. The check is cached after
//! the first call, so the variable must be set before anything queries it
//! (the CLI sets it while parsing arguments).

use std::sync::OnceLock;

static DEBUG_ENABLED: OnceLock<bool> = OnceLock::new();

/// Whether debug mode is enabled, cached at first access.
#[inline]
pub fn is_debug_enabled() -> bool {
    *DEBUG_ENABLED.get_or_init(|| {
        std::env::var("D20_DEBUG")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    })
}
