//! The minimal mutable-collection contract the decorators are written
//! against.
//!
//! This crate is not a collections framework: [`Collection`] exists so that
//! [`crate::Transformed`] can intercept insertion on *any* backing store
//! without depending on a concrete one. Adapters are provided for the std
//! containers used in practice; anything else can implement the trait
//! directly.

use std::collections::{HashSet, VecDeque};
use std::hash::Hash;

/// A mutable collection of elements: add (single and bulk), remove,
/// containment, size, and iteration.
pub trait Collection<E> {
    /// The borrowing iterator over this collection's elements.
    type Iter<'a>: Iterator<Item = &'a E>
    where
        Self: 'a,
        E: 'a;

    /// Add one element. Returns true if the collection changed.
    fn add(&mut self, element: E) -> bool;

    /// Add every element yielded, in order. Returns true if the collection
    /// changed.
    fn add_all<I: IntoIterator<Item = E>>(&mut self, elements: I) -> bool {
        let mut changed = false;
        for element in elements {
            changed |= self.add(element);
        }
        changed
    }

    /// Remove one occurrence of `element`. Returns true if one was removed.
    fn remove(&mut self, element: &E) -> bool;

    /// Whether `element` is present.
    fn contains(&self, element: &E) -> bool;

    /// The number of elements.
    fn len(&self) -> usize;

    /// Whether the collection is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over the elements in the backing store's order.
    fn iter(&self) -> Self::Iter<'_>;
}

impl<E: PartialEq> Collection<E> for Vec<E> {
    type Iter<'a>
        = std::slice::Iter<'a, E>
    where
        Self: 'a,
        E: 'a;

    fn add(&mut self, element: E) -> bool {
        self.push(element);
        true
    }

    fn remove(&mut self, element: &E) -> bool {
        match self.iter().position(|e| e == element) {
            Some(index) => {
                Vec::remove(self, index);
                true
            }
            None => false,
        }
    }

    fn contains(&self, element: &E) -> bool {
        self.as_slice().contains(element)
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.as_slice().iter()
    }
}

impl<E: PartialEq> Collection<E> for VecDeque<E> {
    type Iter<'a>
        = std::collections::vec_deque::Iter<'a, E>
    where
        Self: 'a,
        E: 'a;

    fn add(&mut self, element: E) -> bool {
        self.push_back(element);
        true
    }

    fn remove(&mut self, element: &E) -> bool {
        match VecDeque::iter(self).position(|e| e == element) {
            Some(index) => {
                VecDeque::remove(self, index);
                true
            }
            None => false,
        }
    }

    fn contains(&self, element: &E) -> bool {
        VecDeque::contains(self, element)
    }

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn iter(&self) -> Self::Iter<'_> {
        VecDeque::iter(self)
    }
}

impl<E: Eq + Hash> Collection<E> for HashSet<E> {
    type Iter<'a>
        = std::collections::hash_set::Iter<'a, E>
    where
        Self: 'a,
        E: 'a;

    fn add(&mut self, element: E) -> bool {
        self.insert(element)
    }

    fn remove(&mut self, element: &E) -> bool {
        HashSet::remove(self, element)
    }

    fn contains(&self, element: &E) -> bool {
        HashSet::contains(self, element)
    }

    fn len(&self) -> usize {
        HashSet::len(self)
    }

    fn iter(&self) -> Self::Iter<'_> {
        HashSet::iter(self)
    }
}

/// A decorator can wrap a borrow of a collection instead of owning it; the
/// caller keeps its own reference alive alongside.
impl<'c, E, C: Collection<E>> Collection<E> for &'c mut C {
    type Iter<'a>
        = C::Iter<'a>
    where
        Self: 'a,
        E: 'a;

    fn add(&mut self, element: E) -> bool {
        (**self).add(element)
    }

    fn add_all<I: IntoIterator<Item = E>>(&mut self, elements: I) -> bool {
        (**self).add_all(elements)
    }

    fn remove(&mut self, element: &E) -> bool {
        (**self).remove(element)
    }

    fn contains(&self, element: &E) -> bool {
        (**self).contains(element)
    }

    fn len(&self) -> usize {
        (**self).len()
    }

    fn iter(&self) -> Self::Iter<'_> {
        (**self).iter()
    }
}
