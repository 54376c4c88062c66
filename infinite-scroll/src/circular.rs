/// An offset that wraps around a finite sequence instead of going out of bounds.
///
/// The offset may be negative or larger than the sequence length. It is mapped with floored
/// modulo, so `-1` addresses the last element and `len` addresses the first one again.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CircularIndex(pub isize);

impl CircularIndex {
    pub fn new(offset: isize) -> Self {
        Self(offset)
    }

    pub fn offset(self) -> isize {
        self.0
    }

    /// Resolves the offset against a sequence of length `len`.
    ///
    /// Returns `None` when `len == 0`.
    pub fn resolve(self, len: usize) -> Option<usize> {
        circular_index(self.0, len)
    }
}

impl From<isize> for CircularIndex {
    fn from(offset: isize) -> Self {
        Self(offset)
    }
}

/// Maps an arbitrary signed offset into `0..len` using floored modulo.
///
/// Unlike `%`, negative offsets wrap to the tail: `circular_index(-1, 10) == Some(9)`.
/// Returns `None` for an empty sequence.
pub fn circular_index(offset: isize, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    // Slices never exceed `isize::MAX` elements; saturate for arbitrary callers anyway.
    let n = isize::try_from(len).unwrap_or(isize::MAX);
    // `rem_euclid` with a positive divisor is floored modulo.
    let idx = offset.rem_euclid(n);
    debug_assert!(
        (0..n).contains(&idx),
        "circular_index: out-of-range result (offset={offset}, len={len}, idx={idx})"
    );
    Some(idx as usize)
}

/// Circular lookups on slices.
pub trait CircularGet {
    type Item;

    /// Returns the element at `index` wrapped into the slice bounds, or `None` if the slice is
    /// empty.
    fn get_circular(&self, index: impl Into<CircularIndex>) -> Option<&Self::Item>;
}

impl<T> CircularGet for [T] {
    type Item = T;

    fn get_circular(&self, index: impl Into<CircularIndex>) -> Option<&T> {
        let idx = index.into().resolve(self.len())?;
        self.get(idx)
    }
}
