use alloc::rc::{Rc, Weak};
use core::cell::RefCell;
use core::fmt;

/// The view that displays an infinite scroll.
///
/// Implemented by the UI layer (a row list, a grid, a carousel...). The controller never
/// computes geometry itself; it only asks the host to move its viewport. Row- vs grid-specific
/// behavior (estimated sizes, scroll-direction-aware centering) lives entirely in the
/// implementation.
pub trait ViewportHost {
    /// Disables anything that would reveal the ends of the virtual range: scroll-to-top
    /// gestures, scroll indicators and automatic content inset adjustment.
    ///
    /// Row-oriented hosts should also fix their estimated row size to the viewport size.
    fn prepare(&mut self);

    /// Positions the viewport, without animation, so that item `count / 2` sits at the centered
    /// alignment.
    fn move_to_center(&mut self);

    /// Aligns the visible item nearest to the viewport's visual center.
    ///
    /// If no item covers the exact center point, the visible item whose center is closest to it
    /// is used instead.
    fn move_to_center_closest_item(&mut self, animated: bool);

    /// Discards displayed content and refetches it. `virtual_count` is the new total item count.
    fn reload_data(&mut self, virtual_count: usize);
}

/// A non-owning handle to a [`ViewportHost`].
///
/// A host that has been dropped, or that is already mutably borrowed further up the stack, is
/// reported as unavailable.
#[derive(Clone, Default)]
pub(crate) struct HostRef {
    host: Option<Weak<RefCell<dyn ViewportHost>>>,
}

impl HostRef {
    pub(crate) fn attach<H: ViewportHost + 'static>(host: &Rc<RefCell<H>>) -> Self {
        let host: Rc<RefCell<dyn ViewportHost>> = host.clone();
        Self {
            host: Some(Rc::downgrade(&host)),
        }
    }

    pub(crate) fn is_attached(&self) -> bool {
        self.host.is_some()
    }

    pub(crate) fn is_available(&self) -> bool {
        self.host
            .as_ref()
            .is_some_and(|host| host.strong_count() > 0)
    }

    /// Runs `f` against the host if it is available. Returns `false` when the call was skipped.
    pub(crate) fn with(&self, f: impl FnOnce(&mut dyn ViewportHost)) -> bool {
        let Some(strong) = self.host.as_ref().and_then(Weak::upgrade) else {
            return false;
        };
        let Ok(mut host) = strong.try_borrow_mut() else {
            iwarn!("ViewportHost is already borrowed; skipping call");
            return false;
        };
        f(&mut *host);
        true
    }
}

impl fmt::Debug for HostRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostRef")
            .field("attached", &self.is_attached())
            .field("available", &self.is_available())
            .finish()
    }
}
