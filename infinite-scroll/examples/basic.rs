// Example: minimal host wiring and virtual position lookups.
use std::cell::RefCell;
use std::rc::Rc;

use infinite_scroll::{InfiniteScroll, InfiniteScrollOptions, ViewportHost};

/// A host that only prints what it is asked to do.
#[derive(Default)]
struct PrintingHost {
    count: usize,
}

impl ViewportHost for PrintingHost {
    fn prepare(&mut self) {
        println!("host: prepare");
    }

    fn move_to_center(&mut self) {
        println!("host: jump to item {}", self.count / 2);
    }

    fn move_to_center_closest_item(&mut self, animated: bool) {
        println!("host: snap to closest item (animated={animated})");
    }

    fn reload_data(&mut self, virtual_count: usize) {
        self.count = virtual_count;
        println!("host: reload, {virtual_count} items");
    }
}

fn main() {
    let host = Rc::new(RefCell::new(PrintingHost::default()));
    let mut scroll = InfiniteScroll::new(InfiniteScrollOptions::new().with_virtual_size(100));
    scroll.set_host(&host);

    println!(
        "empty: count={} item_at(0)={:?}",
        scroll.virtual_count(),
        scroll.item_at(0)
    );

    scroll.set_source((1..=10).collect());
    for position in [45, 49, 50, 51, 59, 60] {
        println!("item_at({position}) = {:?}", scroll.item_at(position));
    }

    scroll.on_layout_pass();
    scroll.on_drag_end(true);
    scroll.on_deceleration_end();

    // The application owns the host; once it is gone, events are ignored.
    drop(host);
    scroll.on_drag_end(false);
    println!("has_host={}", scroll.has_host());
}
