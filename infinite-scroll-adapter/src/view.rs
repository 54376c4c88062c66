use core::ops::Range;

use crate::{Alignment, Axis, Easing, FlowLayout, ItemFrame, Point, Rect, Tween};

/// Default duration of an animated snap.
pub const DEFAULT_SNAP_DURATION_MS: u64 = 250;

/// Scroll view features that would reveal the ends of an infinite scroll.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollChrome {
    /// Tapping the status bar jumps to the first item.
    pub scrolls_to_top: bool,
    pub shows_indicators: bool,
    /// The platform insets the content for safe areas/bars.
    pub adjusts_content_inset: bool,
}

impl ScrollChrome {
    /// Everything disabled.
    pub fn infinite() -> Self {
        Self {
            scrolls_to_top: false,
            shows_indicators: false,
            adjusts_content_inset: false,
        }
    }
}

impl Default for ScrollChrome {
    fn default() -> Self {
        Self {
            scrolls_to_top: true,
            shows_indicators: true,
            adjusts_content_inset: true,
        }
    }
}

/// Framework-neutral scroll geometry shared by the row and grid hosts.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `set_rect` when the viewport is resized
/// - `on_scroll` when the user moves the content
/// - `tick(now_ms)` each frame while a snap animation runs
///
/// and read `offset()`/`visible_range()` back to position the real scroll container.
#[derive(Clone, Debug)]
pub struct ScrollView {
    axis: Axis,
    rect: Rect,
    layout: FlowLayout,
    alignment: Alignment,
    count: usize,
    offset: u64,
    chrome: ScrollChrome,
    snap_duration_ms: u64,
    easing: Easing,
    tween: Option<Tween>,
    /// The tween's clock starts on the next `tick`.
    tween_pending: bool,
    reloads: u64,
}

impl ScrollView {
    pub fn new(axis: Axis, rect: Rect, layout: FlowLayout) -> Self {
        Self {
            axis,
            rect,
            layout,
            alignment: Alignment::Center,
            count: 0,
            offset: 0,
            chrome: ScrollChrome::default(),
            snap_duration_ms: DEFAULT_SNAP_DURATION_MS,
            easing: Easing::default(),
            tween: None,
            tween_pending: false,
            reloads: 0,
        }
    }

    pub fn with_spacing(mut self, spacing: u32) -> Self {
        self.layout.spacing = spacing;
        self
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn with_snap_animation(mut self, duration_ms: u64, easing: Easing) -> Self {
        self.snap_duration_ms = duration_ms;
        self.easing = easing;
        self
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn layout(&self) -> &FlowLayout {
        &self.layout
    }

    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn chrome(&self) -> ScrollChrome {
        self.chrome
    }

    /// How many times the content was reloaded.
    pub fn reloads(&self) -> u64 {
        self.reloads
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    pub fn cancel_animation(&mut self) {
        self.tween = None;
        self.tween_pending = false;
    }

    /// The scroll offset as `(x, y)`.
    pub fn content_offset_xy(&self) -> (u64, u64) {
        match self.axis {
            Axis::Vertical => (0, self.offset),
            Axis::Horizontal => (self.offset, 0),
        }
    }

    pub fn set_rect(&mut self, rect: Rect) {
        if self.rect == rect {
            return;
        }
        self.rect = rect;
        self.offset = self.clamp_offset(self.offset);
    }

    pub fn content_main(&self) -> u64 {
        self.layout.content_main(self.count, self.rect.cross)
    }

    pub fn max_offset(&self) -> u64 {
        self.content_main().saturating_sub(self.rect.main as u64)
    }

    pub fn clamp_offset(&self, offset: u64) -> u64 {
        offset.min(self.max_offset())
    }

    pub fn item_frame(&self, index: usize) -> Option<ItemFrame> {
        (index < self.count).then(|| self.layout.item_frame(index, self.rect.cross))
    }

    /// Indexes of the items intersecting the viewport.
    pub fn visible_range(&self) -> Range<usize> {
        let stride = self.layout.line_stride();
        if self.count == 0 || self.rect.main == 0 || stride == 0 {
            return 0..0;
        }
        let per_line = self.layout.items_per_line(self.rect.cross);
        let first_line = self.offset / stride;
        let last_line = (self.offset + self.rect.main as u64 - 1) / stride;
        let start = usize::try_from(first_line)
            .unwrap_or(usize::MAX)
            .saturating_mul(per_line)
            .min(self.count);
        let end = usize::try_from(last_line)
            .unwrap_or(usize::MAX)
            .saturating_add(1)
            .saturating_mul(per_line)
            .min(self.count);
        start..end
    }

    /// The viewport's visual center in content coordinates.
    pub fn viewport_center(&self) -> Point {
        Point::new(
            self.offset as f64 + self.rect.main as f64 / 2.0,
            self.rect.cross as f64 / 2.0,
        )
    }

    pub fn hit_test(&self, point: Point) -> Option<usize> {
        self.layout.hit_test(point, self.count, self.rect.cross)
    }

    /// The visible item whose center is closest to `point`.
    pub fn closest_visible_item(&self, point: Point) -> Option<usize> {
        self.visible_range()
            .map(|index| {
                let frame = self.layout.item_frame(index, self.rect.cross);
                (index, frame.center().distance_squared(point))
            })
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(index, _)| index)
    }

    /// The item under the viewport's center, falling back to the closest visible one.
    pub fn item_at_center(&self) -> Option<usize> {
        let center = self.viewport_center();
        self.hit_test(center)
            .or_else(|| self.closest_visible_item(center))
    }

    /// The clamped offset that aligns `index` according to the view's alignment.
    pub fn offset_for_item(&self, index: usize) -> Option<u64> {
        let frame = self.item_frame(index)?;
        let target = match self.alignment {
            Alignment::Center => frame
                .main_start
                .saturating_mul(2)
                .saturating_add(frame.size.main as u64)
                .saturating_sub(self.rect.main as u64)
                / 2,
            Alignment::Start => frame.main_start,
        };
        Some(self.clamp_offset(target))
    }

    /// Scrolls to `index`, either immediately or with a snap animation driven by `tick`.
    ///
    /// An animation starts at the first `tick` after the request, so hosts do not need to know
    /// the current time when the controller asks them to move.
    ///
    /// Returns the target offset, or `None` if the index is out of range.
    pub fn scroll_to_item(&mut self, index: usize, animated: bool) -> Option<u64> {
        let to = self.offset_for_item(index)?;
        if animated && to != self.offset {
            atrace!(index, from = self.offset, to, "scroll_to_item: animating");
            self.tween = Some(Tween::new(
                self.offset,
                to,
                0,
                self.snap_duration_ms,
                self.easing,
            ));
            self.tween_pending = true;
        } else {
            atrace!(index, to, "scroll_to_item: jumping");
            self.cancel_animation();
            self.offset = to;
        }
        Some(to)
    }

    /// Call this when the user moves the content (drag, wheel, fling). Cancels any snap
    /// animation.
    pub fn on_scroll(&mut self, offset: u64) {
        self.cancel_animation();
        self.offset = self.clamp_offset(offset);
    }

    /// Advances the snap animation.
    ///
    /// Returns the new offset while an animation is running, `None` otherwise.
    pub fn tick(&mut self, now_ms: u64) -> Option<u64> {
        let tween = self.tween.as_mut()?;
        if self.tween_pending {
            tween.start_ms = now_ms;
            self.tween_pending = false;
        }
        let tween = *tween;
        self.offset = self.clamp_offset(tween.sample(now_ms));
        if tween.is_done(now_ms) {
            self.cancel_animation();
        }
        Some(self.offset)
    }

    pub(crate) fn disable_chrome(&mut self) {
        self.chrome = ScrollChrome::infinite();
    }

    pub(crate) fn reload(&mut self, count: usize) {
        adebug!(count, previous = self.count, "ScrollView::reload");
        self.count = count;
        self.reloads = self.reloads.saturating_add(1);
        let max = self.max_offset();
        self.offset = self.offset.min(max);
        if let Some(tween) = self.tween.as_mut() {
            tween.to = tween.to.min(max);
        }
    }

    /// Jumps to item `count / 2` without animation.
    pub(crate) fn jump_to_middle(&mut self) {
        let middle = self.count / 2;
        if self.scroll_to_item(middle, false).is_none() {
            atrace!(count = self.count, "jump_to_middle: nothing to center");
        }
    }

    pub(crate) fn snap_to_center_item(&mut self, animated: bool) {
        let Some(index) = self.item_at_center() else {
            atrace!("snap_to_center_item: no visible item");
            return;
        };
        self.scroll_to_item(index, animated);
    }
}
