/// Default number of virtual positions exposed to the host for a non-empty source.
pub const DEFAULT_VIRTUAL_SIZE: usize = 100;

/// The largest virtual size that is still safe for hosts doing 32-bit layout arithmetic with
/// items a few thousand units tall.
pub const MAX_SAFE_VIRTUAL_SIZE: usize = (i32::MAX / 5000) as usize;

/// Configuration for [`crate::InfiniteScroll`].
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InfiniteScrollOptions {
    /// The fake item count reported to the host while the source is non-empty.
    ///
    /// It has to be large enough that a user cannot fling from the reference position to either
    /// edge, and small enough that the host's content size does not overflow. Values below 1 are
    /// treated as 1.
    pub virtual_size: usize,

    /// Whether snapping to the nearest item after a drag or fling is animated.
    pub animate_snap: bool,
}

impl InfiniteScrollOptions {
    pub fn new() -> Self {
        Self {
            virtual_size: DEFAULT_VIRTUAL_SIZE,
            animate_snap: true,
        }
    }

    pub fn with_virtual_size(mut self, virtual_size: usize) -> Self {
        self.virtual_size = virtual_size;
        self
    }

    pub fn with_animate_snap(mut self, animate_snap: bool) -> Self {
        self.animate_snap = animate_snap;
        self
    }

    pub(crate) fn effective_virtual_size(&self) -> usize {
        self.virtual_size.max(1)
    }
}

impl Default for InfiniteScrollOptions {
    fn default() -> Self {
        Self::new()
    }
}
