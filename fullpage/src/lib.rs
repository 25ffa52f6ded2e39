//! A headless full-page slide navigation engine.
//!
//! For adapter-level utilities (input adapters, transition tweens, fullscreen), see the
//! `fullpage-adapter` crate.
//!
//! This crate focuses on the state machine behind "snap to section" scrolling: an ordered
//! registry of full-viewport slides, an active slide index, a clamped vertical translation,
//! and a transition window during which further navigation is ignored.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - slide geometry (top offset/height) at registration time
//! - container and viewport heights
//! - scroll/resize/keyboard events and a monotonic `now_ms` timestamp
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod navigator;
mod options;
mod registry;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use navigator::Navigator;
pub use options::{NavigatorOptions, OnChangeCallback};
pub use registry::SlideRegistry;
pub use state::NavState;
pub use types::{NavPhase, Slide, SlideEntry, SlideKey, SlideTransform};

#[doc(hidden)]
pub use types::NavKey;
