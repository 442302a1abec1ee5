//! bikemi-rs — workspace umbrella crate.
//!
//! Re-exports [`bikemi_core`] so the demos under `demos/` can be run with
//! `cargo run --example <name>` from the workspace root.

pub use bikemi_core::*;
