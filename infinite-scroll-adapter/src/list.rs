use infinite_scroll::ViewportHost;

use crate::{Axis, Easing, FlowLayout, Rect, ScrollView};

/// A row-oriented [`ViewportHost`]: one full-width row per line, scrolling vertically.
///
/// Rows are always centered in the viewport.
#[derive(Clone, Debug)]
pub struct ListViewport {
    view: ScrollView,
    estimated_row_extent: Option<u32>,
}

impl ListViewport {
    /// Creates a list whose rows are `row_extent` tall inside a viewport of `rect`.
    pub fn new(rect: Rect, row_extent: u32) -> Self {
        Self {
            view: ScrollView::new(Axis::Vertical, rect, FlowLayout::rows(row_extent)),
            estimated_row_extent: None,
        }
    }

    pub fn with_spacing(mut self, spacing: u32) -> Self {
        self.view = self.view.with_spacing(spacing);
        self
    }

    pub fn with_snap_animation(mut self, duration_ms: u64, easing: Easing) -> Self {
        self.view = self.view.with_snap_animation(duration_ms, easing);
        self
    }

    pub fn view(&self) -> &ScrollView {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut ScrollView {
        &mut self.view
    }

    /// The row size estimate handed to the platform, fixed to the viewport height by
    /// `prepare`.
    ///
    /// Estimating per row makes loading a large virtual range very slow.
    pub fn estimated_row_extent(&self) -> Option<u32> {
        self.estimated_row_extent
    }
}

impl ViewportHost for ListViewport {
    fn prepare(&mut self) {
        self.view.disable_chrome();
        self.estimated_row_extent = Some(self.view.rect().main);
    }

    fn move_to_center(&mut self) {
        self.view.jump_to_middle();
    }

    fn move_to_center_closest_item(&mut self, animated: bool) {
        self.view.snap_to_center_item(animated);
    }

    fn reload_data(&mut self, virtual_count: usize) {
        self.view.reload(virtual_count);
    }
}
