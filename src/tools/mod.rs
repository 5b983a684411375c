//! Support helpers for the `qrtag` binary.

use std::sync::OnceLock;

use crate::models::RenderOptions;

fn parse_env_usize(name: &str, default: usize) -> usize {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(default)
}

static MODULE_PX: OnceLock<usize> = OnceLock::new();

/// Default pixels per module, overridable via `QR_MODULE_PX`
pub fn module_px_from_env() -> usize {
    *MODULE_PX
        .get_or_init(|| parse_env_usize("QR_MODULE_PX", RenderOptions::default().module_px).max(1))
}

static QUIET_ZONE: OnceLock<usize> = OnceLock::new();

/// Default quiet zone width in modules, overridable via `QR_QUIET_ZONE`
pub fn quiet_zone_from_env() -> usize {
    *QUIET_ZONE.get_or_init(|| parse_env_usize("QR_QUIET_ZONE", RenderOptions::default().quiet_zone))
}
