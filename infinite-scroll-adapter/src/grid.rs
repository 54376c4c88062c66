use infinite_scroll::ViewportHost;

use crate::{Alignment, Axis, Easing, FlowLayout, Rect, ScrollView};

/// A grid-oriented [`ViewportHost`]: fixed-size cells flowing into lines across the scroll
/// axis.
///
/// Cells are centered along the scroll axis. Use [`Alignment::Start`] for layouts that cannot
/// center an item; it is then aligned to the viewport's leading edge instead.
#[derive(Clone, Debug)]
pub struct GridViewport {
    view: ScrollView,
}

impl GridViewport {
    pub fn new(axis: Axis, rect: Rect, cell: Rect) -> Self {
        Self {
            view: ScrollView::new(axis, rect, FlowLayout::grid(cell)),
        }
    }

    /// A single line of cells, e.g. a horizontal carousel.
    pub fn carousel(rect: Rect, cell_main: u32) -> Self {
        Self::new(Axis::Horizontal, rect, Rect::new(cell_main, rect.cross))
    }

    pub fn with_spacing(mut self, spacing: u32) -> Self {
        self.view = self.view.with_spacing(spacing);
        self
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.view = self.view.with_alignment(alignment);
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
}

impl ViewportHost for GridViewport {
    fn prepare(&mut self) {
        self.view.disable_chrome();
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
