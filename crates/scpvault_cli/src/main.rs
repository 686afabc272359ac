//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `scpvault_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    // Why: keep a tiny CLI probe to validate core crate wiring independently
    // from Flutter/FFI runtime setup.
    println!("scpvault_core ping={}", scpvault_core::ping());
    println!("scpvault_core version={}", scpvault_core::core_version());
}
