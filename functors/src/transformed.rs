//! A collection decorator that transforms every element on its way in.

use crate::collection::Collection;
use crate::functor::Transform;

/// A [`Collection`] decorator that runs every inserted element through a
/// [`Transform`] and forwards only the transformed value to the backing
/// collection.
///
/// Transformation is strictly an insertion-time gate: removal, containment,
/// size, and iteration delegate unchanged, so the backing collection always
/// holds post-transform values. Probing with a pre-transform value will not
/// match unless the transform maps it to itself:
///
/// ```rust
/// use functors::{transform_fn, Collection, Transformed};
///
/// let mut doubled = Transformed::new(Vec::new(), transform_fn(|n: i64| n * 2));
/// doubled.add(3);
/// assert!(doubled.contains(&6));
/// assert!(!doubled.contains(&3));
/// assert_eq!(doubled.into_inner(), vec![6]);
/// ```
///
/// Elements already present in the backing collection at decoration time are
/// left as they are. The decorator wraps the collection it is given rather
/// than copying it; wrap a `&mut` borrow to keep using the backing
/// collection afterwards.
///
/// `Transformed` adds no synchronization of its own: it is exactly as
/// thread-safe as its backing collection and transform.
#[derive(Clone, Debug)]
pub struct Transformed<C, F> {
    collection: C,
    transform: F,
}

impl<C, F> Transformed<C, F> {
    /// Decorate `collection`, gating every insertion through `transform`.
    pub fn new(collection: C, transform: F) -> Self {
        Transformed {
            collection,
            transform,
        }
    }

    /// The transform applied to inserted elements.
    pub fn transform(&self) -> &F {
        &self.transform
    }

    /// A read-only view of the backing collection.
    pub fn backing(&self) -> &C {
        &self.collection
    }

    /// Unwrap the decorator, returning the backing collection.
    pub fn into_inner(self) -> C {
        self.collection
    }
}

impl<E, C: Collection<E>, F: Transform<E, E>> Collection<E> for Transformed<C, F> {
    type Iter<'a>
        = C::Iter<'a>
    where
        Self: 'a,
        E: 'a;

    fn add(&mut self, element: E) -> bool {
        self.collection.add(self.transform.transform(element))
    }

    fn add_all<I: IntoIterator<Item = E>>(&mut self, elements: I) -> bool {
        let mut changed = false;
        for element in elements {
            changed |= self.collection.add(self.transform.transform(element));
        }
        changed
    }

    fn remove(&mut self, element: &E) -> bool {
        self.collection.remove(element)
    }

    fn contains(&self, element: &E) -> bool {
        self.collection.contains(element)
    }

    fn len(&self) -> usize {
        self.collection.len()
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.collection.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::functor::transform_fn;
    use std::collections::HashSet;

    #[test]
    fn add_stores_the_transformed_value() {
        let mut decorated = Transformed::new(Vec::new(), transform_fn(|n: i64| n * 2));
        assert_eq!(decorated.len(), 0);
        for (i, n) in [1i64, 3, 5, 7, 2, 4, 6].into_iter().enumerate() {
            decorated.add(n);
            assert_eq!(decorated.len(), i + 1);
            assert!(decorated.contains(&(n * 2)));
            assert!(!decorated.contains(&n));
        }
    }

    #[test]
    fn removal_matches_post_transform_values_only() {
        let mut decorated = Transformed::new(Vec::new(), transform_fn(|n: i64| n * 2));
        decorated.add(1);
        assert!(!decorated.remove(&1));
        assert!(decorated.remove(&2));
        assert!(decorated.is_empty());
    }

    #[test]
    fn bulk_add_transforms_each_element_in_order() {
        let mut decorated = Transformed::new(Vec::new(), transform_fn(|n: i64| n * 2));
        decorated.add_all([3, 1, 2]);
        assert_eq!(decorated.into_inner(), vec![6, 2, 4]);
    }

    #[test]
    fn existing_contents_are_left_untouched() {
        let decorated = Transformed::new(vec![1i64], transform_fn(|n: i64| n * 2));
        assert_eq!(decorated.into_inner(), vec![1]);
    }

    #[test]
    fn decorating_a_borrow_shares_the_backing_collection() {
        let mut backing: HashSet<i64> = HashSet::new();
        let mut decorated = Transformed::new(&mut backing, transform_fn(|n: i64| n + 10));
        decorated.add(1);
        decorated.add(1);
        assert_eq!(decorated.len(), 1);
        drop(decorated);
        assert!(backing.contains(&11));
    }

    #[test]
    fn identity_transform_is_transparent_to_probes() {
        let mut decorated = Transformed::new(Vec::new(), transform_fn(|n: i64| n));
        decorated.add(5);
        assert!(decorated.contains(&5));
    }
}
