use crate::*;

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;

use infinite_scroll::{InfiniteScroll, InfiniteScrollOptions, ViewportHost};

fn loaded_list(spacing: u32) -> ListViewport {
    let mut list = ListViewport::new(Rect::new(300, 200), 100).with_spacing(spacing);
    list.reload_data(100);
    list
}

#[test]
fn list_prepare_disables_chrome_and_fixes_estimate() {
    let mut list = ListViewport::new(Rect::new(300, 200), 40);
    assert_eq!(list.view().chrome(), ScrollChrome::default());
    assert_eq!(list.estimated_row_extent(), None);

    list.prepare();
    assert_eq!(list.view().chrome(), ScrollChrome::infinite());
    assert_eq!(list.estimated_row_extent(), Some(300));
}

#[test]
fn list_move_to_center_aligns_middle_row() {
    let mut list = loaded_list(0);
    list.move_to_center();

    let view = list.view();
    assert_eq!(view.offset(), 4900);
    assert!(!view.is_animating());
    assert_eq!(view.item_at_center(), Some(50));
    assert_eq!(view.visible_range(), 49..52);
    assert_eq!(view.content_offset_xy(), (0, 4900));
}

#[test]
fn list_snaps_to_row_under_center() {
    let mut list = loaded_list(0);
    list.move_to_center();
    list.view_mut().on_scroll(4960);

    list.move_to_center_closest_item(false);
    assert_eq!(list.view().offset(), 5000);
    assert_eq!(list.view().item_at_center(), Some(51));
}

#[test]
fn center_in_spacing_falls_back_to_closest_visible_row() {
    let mut list = loaded_list(20);
    list.move_to_center();
    assert_eq!(list.view().offset(), 5900);

    list.view_mut().on_scroll(5955);
    let center = list.view().viewport_center();
    assert_eq!(list.view().hit_test(center), None);
    assert_eq!(list.view().closest_visible_item(center), Some(50));

    list.move_to_center_closest_item(true);
    assert!(list.view().is_animating());

    assert_eq!(list.view_mut().tick(1_000), Some(5955));
    let mid = list.view_mut().tick(1_100).unwrap();
    assert!(mid < 5955 && mid > 5900, "mid={mid}");
    assert_eq!(list.view_mut().tick(1_250), Some(5900));
    assert!(!list.view().is_animating());
    assert_eq!(list.view_mut().tick(1_300), None);
}

#[test]
fn snap_animation_starts_at_first_tick() {
    let mut list = loaded_list(0);
    list.move_to_center();
    list.view_mut().on_scroll(4960);

    // The user held still for a while before releasing.
    list.move_to_center_closest_item(true);
    assert_eq!(list.view_mut().tick(5_000), Some(4960));
    let mid = list.view_mut().tick(5_125).unwrap();
    assert!(mid > 4960 && mid < 5000, "mid={mid}");
    assert!(list.view().is_animating());
    assert_eq!(list.view_mut().tick(5_250), Some(5000));
    assert!(!list.view().is_animating());
}

#[test]
fn reload_during_snap_keeps_target_in_range() {
    let mut list = loaded_list(0);
    list.move_to_center();
    list.view_mut().on_scroll(4960);
    list.move_to_center_closest_item(true);
    list.view_mut().tick(0);
    assert!(list.view().is_animating());

    list.reload_data(1);
    assert_eq!(list.view().max_offset(), 0);
    for now_ms in [50u64, 125, 200, 250] {
        let off = list.view_mut().tick(now_ms).unwrap();
        assert!(off <= list.view().max_offset(), "t={now_ms} off={off}");
    }
    assert!(!list.view().is_animating());
    assert_eq!(list.view().offset(), 0);
}

#[test]
fn user_scroll_cancels_snap_animation() {
    let mut list = loaded_list(0);
    list.move_to_center();
    list.view_mut().on_scroll(4960);
    list.move_to_center_closest_item(true);
    assert!(list.view().is_animating());

    list.view_mut().on_scroll(4700);
    assert!(!list.view().is_animating());
    assert_eq!(list.view().offset(), 4700);
}

#[test]
fn reload_clamps_offset() {
    let mut list = loaded_list(0);
    list.move_to_center();
    assert_eq!(list.view().reloads(), 1);

    list.reload_data(1);
    assert_eq!(list.view().count(), 1);
    assert_eq!(list.view().max_offset(), 0);
    assert_eq!(list.view().offset(), 0);
    assert_eq!(list.view().reloads(), 2);
}

#[test]
fn empty_view_ignores_moves() {
    let mut list = ListViewport::new(Rect::new(300, 200), 100);
    list.move_to_center();
    list.move_to_center_closest_item(true);
    assert_eq!(list.view().offset(), 0);
    assert!(!list.view().is_animating());
    assert_eq!(list.view().visible_range(), 0..0);
}

#[test]
fn vertical_grid_centers_line_of_middle_cell() {
    let mut grid = GridViewport::new(Axis::Vertical, Rect::new(400, 300), Rect::new(100, 100));
    grid.reload_data(100);
    assert_eq!(grid.view().layout().items_per_line(300), 3);
    assert_eq!(grid.view().content_main(), 3400);

    grid.move_to_center();
    let frame = grid.view().item_frame(50).unwrap();
    assert_eq!((frame.main_start, frame.cross_start), (1600, 200));
    assert_eq!(grid.view().offset(), 1450);
    // The middle column of the centered line.
    assert_eq!(grid.view().item_at_center(), Some(49));
}

#[test]
fn horizontal_grid_with_start_alignment() {
    let mut grid = GridViewport::new(Axis::Horizontal, Rect::new(500, 200), Rect::new(100, 100))
        .with_alignment(Alignment::Start);
    grid.prepare();
    grid.reload_data(100);
    grid.move_to_center();

    assert_eq!(grid.view().chrome(), ScrollChrome::infinite());
    assert_eq!(grid.view().offset(), 2500);
    assert_eq!(grid.view().content_offset_xy(), (2500, 0));

    grid.view_mut().on_scroll(2560);
    grid.move_to_center_closest_item(false);
    assert_eq!(grid.view().offset(), 2800);
}

#[test]
fn carousel_with_spacing() {
    let mut carousel = GridViewport::carousel(Rect::new(320, 180), 100).with_spacing(10);
    carousel.reload_data(100);
    assert_eq!(carousel.view().layout().items_per_line(180), 1);
    assert_eq!(carousel.view().content_main(), 10_990);

    carousel.move_to_center();
    assert_eq!(carousel.view().offset(), 5390);
    assert_eq!(carousel.view().item_at_center(), Some(50));
}

#[test]
fn controller_drives_list_viewport() {
    let host = Rc::new(RefCell::new(ListViewport::new(Rect::new(300, 200), 100)));
    let mut scroll = InfiniteScroll::new(InfiniteScrollOptions::new().with_animate_snap(false));
    scroll.set_host(&host);
    assert_eq!(host.borrow().estimated_row_extent(), Some(300));

    scroll.set_source((1..=10).collect::<Vec<i32>>());
    let center = host.borrow().view().item_at_center();
    assert_eq!(center, Some(50));
    assert_eq!(center.and_then(|i| scroll.item_at(i)), Some(&1));

    host.borrow_mut().view_mut().on_scroll(5030);
    scroll.on_drag_end(true);
    assert_eq!(host.borrow().view().offset(), 5030);
    scroll.on_drag_end(false);
    assert_eq!(host.borrow().view().offset(), 5000);

    // A fling seven rows down, resting off-center.
    host.borrow_mut().view_mut().on_scroll(5620);
    scroll.on_deceleration_end();
    assert_eq!(host.borrow().view().offset(), 5600);
    let center = host.borrow().view().item_at_center();
    assert_eq!(center.and_then(|i| scroll.item_at(i)), Some(&8));

    // Layout passes after the first one leave the position alone.
    scroll.on_layout_pass();
    assert_eq!(host.borrow().view().offset(), 5600);
}

#[test]
fn controller_survives_dropped_viewport() {
    let host = Rc::new(RefCell::new(GridViewport::carousel(Rect::new(320, 180), 100)));
    let mut scroll =
        InfiniteScroll::with_source(alloc::vec!['a', 'b', 'c'], InfiniteScrollOptions::new());
    scroll.set_host(&host);
    assert_eq!(host.borrow().view().count(), 100);
    scroll.on_layout_pass();
    assert_eq!(host.borrow().view().item_at_center(), Some(50));

    drop(host);
    scroll.on_deceleration_end();
    scroll.set_source(alloc::vec!['d']);
    assert_eq!(scroll.item_at(50), Some(&'d'));
}

#[test]
fn easing_hits_endpoints() {
    for easing in [Easing::Linear, Easing::SmoothStep, Easing::EaseInOutCubic] {
        assert_eq!(easing.sample(0.0), 0.0);
        assert_eq!(easing.sample(1.0), 1.0);
    }
    let tween = Tween::new(100, 0, 0, 0, Easing::Linear);
    assert_eq!(tween.duration_ms, 1);
    assert_eq!(tween.sample(0), 100);
    assert_eq!(tween.sample(1), 0);
}
