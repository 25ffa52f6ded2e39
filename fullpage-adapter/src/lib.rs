//! Adapter utilities for the `fullpage` crate.
//!
//! The `fullpage` crate is UI-agnostic and focuses on the navigation state machine. This
//! crate provides small, framework-neutral helpers commonly needed by hosts:
//!
//! - Input adapters: scroll (frame-gated + cool-down throttled), keyboard, resize
//! - A fullscreen toggle over a host-supplied driver
//! - A transition tween for hosts that want ready-made interpolation
//! - A [`Controller`] gluing a navigator to all of the above
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui/DOM bindings). Hosts
//! feed it raw scroll offsets, measured heights, and key codes, plus a monotonic `now_ms`.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod fullscreen;
mod keyboard;
mod resize;
mod scroll;
mod transition;


pub use controller::Controller;
pub use fullscreen::{FullscreenDriver, FullscreenError, FullscreenToggle};
pub use keyboard::{KeyCode, NavCommand, dispatch_code, dispatch_key};
pub use resize::ResizeAdapter;
pub use scroll::{ScrollAdapter, ScrollMotion};
pub use transition::{Easing, Transition};
