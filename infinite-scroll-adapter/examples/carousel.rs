use std::cell::RefCell;
use std::rc::Rc;

use infinite_scroll::{InfiniteScroll, InfiniteScrollOptions};
use infinite_scroll_adapter::{Easing, GridViewport, Rect};

fn main() {
    // Example: a horizontal carousel that loops over five cards.
    //
    // An adapter would:
    // - forward layout passes and drag/deceleration events to the controller
    // - call tick(now_ms) in a frame loop while a snap animation runs
    // - apply the view's offset to the real scroll container and render `item_at` per index
    let host = Rc::new(RefCell::new(
        GridViewport::carousel(Rect::new(360, 200), 120)
            .with_spacing(8)
            .with_snap_animation(240, Easing::EaseInOutCubic),
    ));
    let mut scroll = InfiniteScroll::new(InfiniteScrollOptions::new());
    scroll.set_host(&host);
    scroll.set_source(vec!["red", "green", "blue", "cyan", "magenta"]);

    let offset = host.borrow().view().offset();
    println!("centered: offset={offset}");

    // The user drags a bit more than two cards to the left, without momentum.
    host.borrow_mut().view_mut().on_scroll(offset + 300);
    scroll.on_drag_end(false);

    let mut now_ms = 0u64;
    loop {
        now_ms += 16;
        let Some(off) = host.borrow_mut().view_mut().tick(now_ms) else {
            break;
        };
        if now_ms % 80 == 0 {
            println!("t={now_ms} off={off}");
        }
    }

    let carousel = host.borrow();
    let view = carousel.view();
    let cards: Vec<_> = view
        .visible_range()
        .filter_map(|i| scroll.item_at(i))
        .collect();
    println!(
        "settled: off={} center={:?} visible={cards:?}",
        view.offset(),
        view.item_at_center().and_then(|i| scroll.item_at(i))
    );
}
