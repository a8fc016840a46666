//! Platform abstraction layer
//!
//! Browser specifics live behind `wasm32`:
//! - Canvas2D draw surface
//! - Sprite image loading
//!
//! Input wiring and the frame loop are in the binary's wasm entry point.

#[cfg(target_arch = "wasm32")]
pub mod web;
