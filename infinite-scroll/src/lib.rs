//! A headless controller for infinitely-looping lists, grids and carousels.
//!
//! For concrete row/grid viewport hosts and snap animations, see the `infinite-scroll-adapter`
//! crate.
//!
//! The trick is to over-allocate: the host is told it displays a large virtual item count, and
//! every virtual position maps back onto a small finite source with floored modulo. The viewport
//! starts in the middle of the virtual range, so the user would have to scroll for a very long
//! time to reach an edge, and after every drag or fling it snaps to the closest item.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to:
//! - implement [`ViewportHost`] (prepare, reload, move to center, snap to closest item)
//! - forward layout passes and drag/deceleration events to [`InfiniteScroll`]
//! - render the items returned by [`InfiniteScroll::item_at`]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod circular;
mod host;
mod infinite_scroll;
mod options;
mod types;


pub use circular::{CircularGet, CircularIndex, circular_index};
pub use host::ViewportHost;
pub use infinite_scroll::InfiniteScroll;
pub use options::{DEFAULT_VIRTUAL_SIZE, InfiniteScrollOptions, MAX_SAFE_VIRTUAL_SIZE};
pub use types::CenteringState;
