//! Concentric-rings watchface
//!
//! Steps, minutes, hours and battery charge drawn as nested arcs on any
//! `embedded-graphics` surface. The host (firmware or simulator) owns the
//! event loop and feeds a [`RenderContext`] once per minute or whenever the
//! screen needs repainting.

#![cfg_attr(not(test), no_std)]

mod fmt;

pub mod config;
pub mod context;
pub mod services;
pub mod state;
pub mod ui;

pub use config::{FaceConfig, Palette};
pub use context::RenderContext;
pub use services::{ActivityMask, BatteryInfo, BatteryService, HealthService, NullHealth};
pub use state::ClockState;
