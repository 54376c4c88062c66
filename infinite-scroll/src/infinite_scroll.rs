use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::mem;

use crate::host::HostRef;
use crate::{CenteringState, CircularGet, CircularIndex, InfiniteScrollOptions, ViewportHost};

/// Drives an infinitely-looping list over a finite source.
///
/// The host is told there are [`virtual_count`](Self::virtual_count) items. Every virtual
/// position maps back onto the source with floored modulo, relative to a reference position in
/// the middle of the virtual range. On the first layout pass the viewport jumps to that
/// reference, so the user has the same headroom in both directions and never reaches an edge.
///
/// This type does not hold any UI objects:
/// - The host is referenced weakly and may go away at any time; calls are then skipped.
/// - Your UI layer forwards lifecycle events (`on_layout_pass`, `on_drag_end`,
///   `on_deceleration_end`) and queries items with `item_at`.
///
/// The controller is single-threaded: it holds `Rc`/`RefCell` handles and is neither `Send` nor
/// `Sync`.
#[derive(Clone, Debug)]
pub struct InfiniteScroll<T> {
    options: InfiniteScrollOptions,
    source: Vec<T>,
    centering: CenteringState,
    host: HostRef,
}

impl<T> InfiniteScroll<T> {
    /// Creates a controller with an empty source and no host.
    pub fn new(options: InfiniteScrollOptions) -> Self {
        Self::with_source(Vec::new(), options)
    }

    /// Creates a controller that starts out with `source`.
    ///
    /// Nothing is reloaded since no host is attached yet; the first layout pass centers the
    /// viewport.
    pub fn with_source(source: Vec<T>, options: InfiniteScrollOptions) -> Self {
        idebug!(
            len = source.len(),
            virtual_size = options.effective_virtual_size(),
            "InfiniteScroll::new"
        );
        Self {
            options,
            source,
            centering: CenteringState::NotCentered,
            host: HostRef::default(),
        }
    }

    pub fn options(&self) -> &InfiniteScrollOptions {
        &self.options
    }

    /// Replaces the options.
    ///
    /// Changing the virtual size moves the reference position, so the host is reloaded and the
    /// viewport is centered again.
    pub fn set_options(&mut self, options: InfiniteScrollOptions) {
        let prev_size = self.options.effective_virtual_size();
        self.options = options;
        itrace!(
            virtual_size = self.options.effective_virtual_size(),
            animate_snap = self.options.animate_snap,
            "InfiniteScroll::set_options"
        );
        if self.options.effective_virtual_size() != prev_size {
            self.centering = CenteringState::NotCentered;
            self.reload_host();
            self.on_layout_pass();
        }
    }

    /// Copies the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut InfiniteScrollOptions)) {
        let mut next = self.options;
        f(&mut next);
        self.set_options(next);
    }

    /// Attaches the view displaying the scroll, asks it to prepare itself and loads the current
    /// virtual count into it.
    ///
    /// Only a weak handle is kept: the caller owns the host, and dropping it detaches it.
    /// Attach the host before its first layout pass so the initial centering reaches it.
    pub fn set_host<H: ViewportHost + 'static>(&mut self, host: &Rc<RefCell<H>>) {
        self.host = HostRef::attach(host);
        let count = self.virtual_count();
        idebug!(count, "InfiniteScroll::set_host");
        self.host.with(|host| {
            host.prepare();
            host.reload_data(count);
        });
    }

    pub fn detach_host(&mut self) {
        self.host = HostRef::default();
    }

    /// Returns `true` if a host is attached and still alive.
    pub fn has_host(&self) -> bool {
        self.host.is_available()
    }

    pub fn source(&self) -> &[T] {
        &self.source
    }

    pub fn len(&self) -> usize {
        self.source.len()
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    pub fn centering_state(&self) -> CenteringState {
        self.centering
    }

    /// Replaces the source and returns the previous one.
    ///
    /// The host is reloaded and a layout pass runs before this returns, so the host can query
    /// `virtual_count`/`item_at` right away. Centering is reset only when the previous source was
    /// empty: updating a non-empty source keeps the user's scroll position.
    pub fn set_source(&mut self, source: Vec<T>) -> Vec<T> {
        let previous = mem::replace(&mut self.source, source);
        idebug!(
            previous_len = previous.len(),
            len = self.source.len(),
            "InfiniteScroll::set_source"
        );
        if previous.is_empty() {
            self.centering = CenteringState::NotCentered;
        }
        self.reload_host();
        self.on_layout_pass();
        previous
    }

    /// The number of items the host should display: the virtual size, or a single placeholder
    /// slot when the source is empty.
    pub fn virtual_count(&self) -> usize {
        if self.source.is_empty() {
            1
        } else {
            self.options.effective_virtual_size()
        }
    }

    /// The virtual position mapped onto the first source element.
    pub fn reference_position(&self) -> usize {
        self.options.effective_virtual_size() / 2
    }

    /// Returns the source element displayed at `virtual_position`, or `None` if the source is
    /// empty (render a placeholder).
    pub fn item_at(&self, virtual_position: usize) -> Option<&T> {
        self.source
            .get_circular(self.offset_from_reference(virtual_position))
    }

    /// Returns the source index displayed at `virtual_position`, or `None` if the source is
    /// empty.
    pub fn source_index_at(&self, virtual_position: usize) -> Option<usize> {
        self.offset_from_reference(virtual_position)
            .resolve(self.source.len())
    }

    /// Returns the virtual position of `source_index` within the reference cycle.
    ///
    /// Returns `None` if the index is out of range or falls outside the virtual range.
    pub fn center_position_of(&self, source_index: usize) -> Option<usize> {
        if source_index >= self.source.len() {
            return None;
        }
        let position = self.reference_position().checked_add(source_index)?;
        (position < self.virtual_count()).then_some(position)
    }

    /// Call this every time the host recomputes its layout (first appearance, resize, rotation).
    ///
    /// The host is always re-prepared. The viewport jumps to the reference position only once
    /// per empty → non-empty transition, so unrelated layout passes never fight the user's own
    /// scroll position.
    pub fn on_layout_pass(&mut self) {
        let needs_center = !self.centering.is_centered();
        let reached = self.host.with(|host| {
            host.prepare();
            if needs_center {
                host.move_to_center();
            }
        });
        if !reached {
            itrace!("on_layout_pass: host unavailable");
            return;
        }
        if needs_center {
            self.centering = CenteringState::Centered;
            idebug!(
                reference = self.reference_position(),
                "on_layout_pass: moved to center"
            );
        }
    }

    /// Call this when the user lifts their finger.
    ///
    /// Without momentum, the viewport snaps to the closest item right away. With momentum, the
    /// snap is deferred to [`on_deceleration_end`](Self::on_deceleration_end).
    pub fn on_drag_end(&mut self, will_decelerate: bool) {
        if will_decelerate {
            itrace!("on_drag_end: deferring snap to deceleration end");
            return;
        }
        self.snap_to_closest_item();
    }

    /// Call this when a fling comes to rest. Snaps the viewport to the closest item.
    pub fn on_deceleration_end(&mut self) {
        self.snap_to_closest_item();
    }

    fn snap_to_closest_item(&mut self) {
        let animated = self.options.animate_snap;
        if !self
            .host
            .with(|host| host.move_to_center_closest_item(animated))
        {
            itrace!("snap_to_closest_item: host unavailable");
            return;
        }
        itrace!(animated, "snap_to_closest_item");
    }

    fn reload_host(&mut self) {
        let count = self.virtual_count();
        if !self.host.with(|host| host.reload_data(count)) {
            itrace!(count, "reload_host: host unavailable");
        }
    }

    fn offset_from_reference(&self, virtual_position: usize) -> CircularIndex {
        let position = isize::try_from(virtual_position).unwrap_or(isize::MAX);
        let reference = isize::try_from(self.reference_position()).unwrap_or(isize::MAX);
        CircularIndex(position.saturating_sub(reference))
    }
}
