// File: src/lib.rs
pub mod client;
pub mod color;
pub mod config;
pub mod enrich;
pub mod error;
pub mod gender;
pub mod model;
pub mod paths;
pub mod screen;

#[cfg(feature = "tui")]
pub mod logging;

#[cfg(feature = "tui")]
pub mod tui;

// --- MOBILE SUPPORT ---
#[cfg(any(target_os = "android", target_os = "ios"))]
pub mod mobile;

#[cfg(any(target_os = "android", target_os = "ios"))]
uniffi::setup_scaffolding!();
