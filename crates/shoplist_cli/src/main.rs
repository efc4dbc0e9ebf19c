//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `shoplist_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("shoplist_core ping={}", shoplist_core::ping());
    println!("shoplist_core version={}", shoplist_core::core_version());
}
