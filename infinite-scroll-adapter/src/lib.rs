//! Viewport hosts for the `infinite-scroll` crate.
//!
//! The `infinite-scroll` crate decides *when* the viewport has to move; this crate provides
//! small, framework-neutral hosts that know *where* to move it:
//!
//! - [`ListViewport`]: full-width rows scrolling vertically
//! - [`GridViewport`]: fixed-size cells flowing into lines, in either direction
//! - Nearest-to-center item search (hit test, then closest visible item)
//! - Tween-based snap animations (adapter-driven via `tick(now_ms)`)
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings). Wrap a host in
//! `Rc<RefCell<_>>`, hand it to `InfiniteScroll::set_host`, and read its [`ScrollView`] back to
//! position the real scroll container.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(test)]
extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod geometry;
mod grid;
mod layout;
mod list;
mod tween;
mod view;

#[cfg(test)]
mod tests;

pub use geometry::{Alignment, Axis, ItemFrame, Point, Rect};
pub use grid::GridViewport;
pub use layout::FlowLayout;
pub use list::ListViewport;
pub use tween::{Easing, Tween};
pub use view::{DEFAULT_SNAP_DURATION_MS, ScrollChrome, ScrollView};
