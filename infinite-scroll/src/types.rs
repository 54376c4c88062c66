/// Whether the viewport was moved to its reference position since the source last became
/// non-empty.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CenteringState {
    #[default]
    NotCentered,
    Centered,
}

impl CenteringState {
    pub fn is_centered(self) -> bool {
        matches!(self, Self::Centered)
    }
}
