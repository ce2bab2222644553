use std::fmt;
use std::ops::Neg;

/// Signed displacement from the index of a matched element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub struct Offset(isize);

impl Offset {
    /// The element right after the match.
    pub const NEXT: Self = Self(1);
    /// The element right before the match.
    pub const PREVIOUS: Self = Self(-1);

    pub const fn new(raw: isize) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> isize {
        self.0
    }

    /// Moves `index` by this offset. `None` when the result would leave `usize`.
    pub const fn apply(self, index: usize) -> Option<usize> {
        index.checked_add_signed(self.0)
    }
}

impl From<isize> for Offset {
    fn from(raw: isize) -> Self {
        Self(raw)
    }
}

impl Neg for Offset {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(self.0.saturating_neg())
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+}", self.0)
    }
}
