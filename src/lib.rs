//! Library half of the nomad firmware.
//!
//! Everything that does not touch a peripheral (bitmaps and fonts, the
//! menu, the scene renderers, the application state machine, melody
//! sequencing) builds on the host and is unit-tested there. The
//! `embedded` feature adds the drivers and async loops that `main.rs`
//! spawns on the nRF52840.
//!
//! Usage: `cargo test --lib` (host) or
//! `cargo run --release --target thumbv7em-none-eabihf --features embedded`.

#![cfg_attr(not(test), no_std)]

pub mod app;
pub mod assets;
pub mod audio;
pub mod config;
pub mod error;
pub mod game_state;
pub mod gfx;
pub mod scenes;
pub mod ui;

pub use app::{App, Screen};
pub use error::{Error, Result};
pub use ui::ButtonEvent;

// ═══════════════════════════════════════════════════════════════════════════
// Cross-module tests
// ═══════════════════════════════════════════════════════════════════════════
