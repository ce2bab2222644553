use std::fmt;

/// Borrowed element that compares by address instead of by value.
///
/// Wrap both the sequence (`Identity::wrap_all`) and the reference value to
/// locate one particular instance rather than any equal one. Zero-sized
/// elements of a slice share an address, so they all compare equal.
pub struct Identity<'a, T>(&'a T);

impl<'a, T> Identity<'a, T> {
    pub const fn new(value: &'a T) -> Self {
        Self(value)
    }

    pub const fn get(&self) -> &'a T {
        self.0
    }

    pub fn wrap_all(items: &'a [T]) -> Vec<Self> {
        items.iter().map(Self::new).collect()
    }
}

impl<T> Clone for Identity<'_, T> {
    fn clone(&self) -> Self {
        Self(self.0)
    }
}

impl<T> PartialEq for Identity<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.0, other.0)
    }
}

impl<T> Eq for Identity<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for Identity<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Identity").field(self.0).finish()
    }
}
