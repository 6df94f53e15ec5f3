//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `clientbook_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("clientbook_core ping={}", clientbook_core::ping());
    println!("clientbook_core version={}", clientbook_core::core_version());
}
