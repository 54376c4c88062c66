use crate::{ItemFrame, Point, Rect};

/// A uniform flow layout: items of one size, packed into lines across the scroll axis.
///
/// Rows are the special case of one item per line spanning the whole viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlowLayout {
    pub item: Rect,
    /// Space between lines and between items of a line.
    pub spacing: u32,
    /// When set, every line holds a single item stretched to the viewport's cross extent.
    pub fill_cross: bool,
}

impl FlowLayout {
    /// One item per line, `item_main` long along the scroll axis.
    pub fn rows(item_main: u32) -> Self {
        Self {
            item: Rect::new(item_main, 0),
            spacing: 0,
            fill_cross: true,
        }
    }

    pub fn grid(item: Rect) -> Self {
        Self {
            item,
            spacing: 0,
            fill_cross: false,
        }
    }

    pub fn with_spacing(mut self, spacing: u32) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn item_size(&self, viewport_cross: u32) -> Rect {
        if self.fill_cross {
            Rect::new(self.item.main, viewport_cross)
        } else {
            self.item
        }
    }

    pub fn items_per_line(&self, viewport_cross: u32) -> usize {
        if self.fill_cross {
            return 1;
        }
        let stride = self.cross_stride(viewport_cross);
        if stride == 0 {
            return 1;
        }
        let fit = (viewport_cross as u64 + self.spacing as u64) / stride;
        usize::try_from(fit).unwrap_or(usize::MAX).max(1)
    }

    pub fn line_stride(&self) -> u64 {
        self.item.main as u64 + self.spacing as u64
    }

    fn cross_stride(&self, viewport_cross: u32) -> u64 {
        self.item_size(viewport_cross).cross as u64 + self.spacing as u64
    }

    pub fn line_count(&self, count: usize, viewport_cross: u32) -> usize {
        count.div_ceil(self.items_per_line(viewport_cross))
    }

    /// Total extent of `count` items along the scroll axis (no trailing spacing).
    pub fn content_main(&self, count: usize, viewport_cross: u32) -> u64 {
        let lines = self.line_count(count, viewport_cross) as u64;
        if lines == 0 {
            return 0;
        }
        lines
            .saturating_mul(self.line_stride())
            .saturating_sub(self.spacing as u64)
    }

    pub fn item_frame(&self, index: usize, viewport_cross: u32) -> ItemFrame {
        let per_line = self.items_per_line(viewport_cross);
        let line = (index / per_line) as u64;
        let slot = (index % per_line) as u64;
        ItemFrame {
            index,
            main_start: line.saturating_mul(self.line_stride()),
            cross_start: slot.saturating_mul(self.cross_stride(viewport_cross)),
            size: self.item_size(viewport_cross),
        }
    }

    /// Returns the item covering `point`, if any. Points in the spacing hit nothing.
    pub fn hit_test(&self, point: Point, count: usize, viewport_cross: u32) -> Option<usize> {
        if point.main < 0.0 || point.cross < 0.0 {
            return None;
        }
        let size = self.item_size(viewport_cross);
        let line_stride = self.line_stride();
        let cross_stride = self.cross_stride(viewport_cross);
        if line_stride == 0 || cross_stride == 0 {
            return None;
        }

        let main = point.main as u64;
        let cross = point.cross as u64;
        if main % line_stride >= size.main as u64 || cross % cross_stride >= size.cross as u64 {
            return None;
        }

        let per_line = self.items_per_line(viewport_cross);
        let slot = usize::try_from(cross / cross_stride).ok()?;
        if slot >= per_line {
            return None;
        }
        let line = usize::try_from(main / line_stride).ok()?;
        let index = line.checked_mul(per_line)?.checked_add(slot)?;
        (index < count).then_some(index)
    }
}
