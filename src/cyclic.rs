//! Index-wrapped view over a closed sequence.
//!
//! The boundary loop has no start or end: every window before or after a
//! vertex may cross the seam. All modular index arithmetic lives here.

/// A borrowed sequence whose indices wrap modulo its length.
#[derive(Debug, Clone, Copy)]
pub struct Cyclic<'a, T> {
    items: &'a [T],
}

impl<'a, T> Cyclic<'a, T> {
    pub fn new(items: &'a [T]) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Reduce any index, negative or past the end, into `0..len`.
    ///
    /// # Panics
    ///
    /// Panics if the sequence is empty.
    pub fn wrap(&self, i: isize) -> usize {
        assert!(!self.items.is_empty(), "wrap on empty cyclic sequence");
        i.rem_euclid(self.items.len() as isize) as usize
    }

    /// # Panics
    ///
    /// Panics if the sequence is empty.
    pub fn at(&self, i: isize) -> &'a T {
        &self.items[self.wrap(i)]
    }

    /// Items from `from` to `to` inclusive, walking forward and wrapping.
    ///
    /// Both ends are reduced first, so `range(i, i)` yields one item and a
    /// reduced `to` below the reduced `from` crosses the seam.
    pub fn range(&self, from: isize, to: isize) -> impl Iterator<Item = &'a T> + 'a {
        let items = self.items;
        let (head, tail): (&'a [T], &'a [T]) = if items.is_empty() {
            (&[], &[])
        } else {
            let from = self.wrap(from);
            let to = self.wrap(to);
            if from <= to {
                (&items[from..=to], &[])
            } else {
                (&items[from..], &items[..=to])
            }
        };
        head.iter().chain(tail.iter())
    }
}

impl<T: Clone> Cyclic<'_, T> {
    pub fn slice(&self, from: isize, to: isize) -> Vec<T> {
        self.range(from, to).cloned().collect()
    }
}

/// Cyclic sub-sequence from `from` to `to` inclusive. See [`Cyclic::range`].
pub fn slice<T: Clone>(seq: &[T], from: isize, to: isize) -> Vec<T> {
    Cyclic::new(seq).slice(from, to)
}
