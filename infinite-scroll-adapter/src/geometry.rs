/// A platform-agnostic size where `main` is along the scroll axis and `cross` across it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub main: u32,
    pub cross: u32,
}

impl Rect {
    pub fn new(main: u32, cross: u32) -> Self {
        Self { main, cross }
    }
}

/// The scroll direction of a viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    #[default]
    Vertical,
    Horizontal,
}

/// Where an item ends up when the viewport scrolls to it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Alignment {
    /// The item's center sits at the viewport's center.
    #[default]
    Center,
    /// The item's start sits at the viewport's start, for layouts that cannot center.
    Start,
}

/// A point in content coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub main: f64,
    pub cross: f64,
}

impl Point {
    pub fn new(main: f64, cross: f64) -> Self {
        Self { main, cross }
    }

    /// Squared Euclidean distance. Orders points the same way the distance does.
    pub fn distance_squared(self, other: Self) -> f64 {
        let dm = self.main - other.main;
        let dc = self.cross - other.cross;
        dm * dm + dc * dc
    }
}

/// The laid-out frame of a single item, in content coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ItemFrame {
    pub index: usize,
    pub main_start: u64,
    pub cross_start: u64,
    pub size: Rect,
}

impl ItemFrame {
    pub fn main_end(&self) -> u64 {
        self.main_start.saturating_add(self.size.main as u64)
    }

    pub fn center(&self) -> Point {
        Point {
            main: self.main_start as f64 + self.size.main as f64 / 2.0,
            cross: self.cross_start as f64 + self.size.cross as f64 / 2.0,
        }
    }
}
