//! The three capability contracts every functor in this crate implements:
//! [`Action`], [`Transform`], and [`Predicate`].
//!
//! There is no hierarchy among implementations, only these single-method
//! traits: any value satisfying a contract can be substituted for any other,
//! which is what lets combinators like [`crate::Repeat`] and [`crate::While`]
//! compose functors they know nothing about.

use std::sync::Arc;

/// An effect performed on one value.
///
/// Invoking an action twice with the same input is allowed; actions may have
/// side effects on the input (through `&mut`) or on shared state they
/// capture. Combinators hold actions behind `&self`, so an action must be
/// invokable through a shared reference.
///
/// Plain closures become actions via [`action_fn`]:
///
/// ```rust
/// use functors::{action_fn, Action};
///
/// let bump = action_fn(|n: &mut i64| *n += 1);
/// let mut n = 0;
/// bump.execute(&mut n);
/// bump.execute(&mut n);
/// assert_eq!(n, 2);
/// ```
pub trait Action<T: ?Sized> {
    /// Perform the effect on `input`.
    fn execute(&self, input: &mut T);
}

/// A mapping from one input value to one output value.
///
/// A transform consumes its input and is expected to be deterministic with
/// respect to the call; it is not required to be side-effect free, but
/// nothing in this crate relies on its side effects. Implementations over
/// `Option<I>` must define explicit behavior for the absent (`None`) input.
pub trait Transform<I, O> {
    /// Map `input` to the output value.
    fn transform(&self, input: I) -> O;
}

/// A boolean test of one value.
pub trait Predicate<T: ?Sized> {
    /// Evaluate `input`.
    fn test(&self, input: &T) -> bool;
}

/// A type-erased, heap-allocated [`Action`], the currency of the validating
/// factories [`crate::repeat`] and [`crate::repeat_while`].
pub type BoxAction<T> = Box<dyn Action<T>>;

impl<T: ?Sized> std::fmt::Debug for dyn Action<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("dyn Action")
    }
}

/// A type-erased, heap-allocated [`Transform`].
pub type BoxTransform<I, O> = Box<dyn Transform<I, O>>;

/// A type-erased, heap-allocated [`Predicate`].
pub type BoxPredicate<T> = Box<dyn Predicate<T>>;

impl<'a, T: ?Sized, A: Action<T> + ?Sized> Action<T> for &'a A {
    fn execute(&self, input: &mut T) {
        (**self).execute(input)
    }
}

impl<T: ?Sized, A: Action<T> + ?Sized> Action<T> for Box<A> {
    fn execute(&self, input: &mut T) {
        (**self).execute(input)
    }
}

impl<T: ?Sized, A: Action<T> + ?Sized> Action<T> for Arc<A> {
    fn execute(&self, input: &mut T) {
        (**self).execute(input)
    }
}

impl<'a, I, O, F: Transform<I, O> + ?Sized> Transform<I, O> for &'a F {
    fn transform(&self, input: I) -> O {
        (**self).transform(input)
    }
}

impl<I, O, F: Transform<I, O> + ?Sized> Transform<I, O> for Box<F> {
    fn transform(&self, input: I) -> O {
        (**self).transform(input)
    }
}

impl<I, O, F: Transform<I, O> + ?Sized> Transform<I, O> for Arc<F> {
    fn transform(&self, input: I) -> O {
        (**self).transform(input)
    }
}

impl<'a, T: ?Sized, P: Predicate<T> + ?Sized> Predicate<T> for &'a P {
    fn test(&self, input: &T) -> bool {
        (**self).test(input)
    }
}

impl<T: ?Sized, P: Predicate<T> + ?Sized> Predicate<T> for Box<P> {
    fn test(&self, input: &T) -> bool {
        (**self).test(input)
    }
}

impl<T: ?Sized, P: Predicate<T> + ?Sized> Predicate<T> for Arc<P> {
    fn test(&self, input: &T) -> bool {
        (**self).test(input)
    }
}

/// An [`Action`] backed by a closure. Built with [`action_fn`].
#[derive(Clone)]
pub struct FnAction<F>(F);

impl<T: ?Sized, F: Fn(&mut T)> Action<T> for FnAction<F> {
    fn execute(&self, input: &mut T) {
        (self.0)(input)
    }
}

/// A [`Transform`] backed by a closure. Built with [`transform_fn`].
#[derive(Clone)]
pub struct FnTransform<F>(F);

impl<I, O, F: Fn(I) -> O> Transform<I, O> for FnTransform<F> {
    fn transform(&self, input: I) -> O {
        (self.0)(input)
    }
}

/// A [`Predicate`] backed by a closure. Built with [`predicate_fn`].
#[derive(Clone)]
pub struct FnPredicate<F>(F);

impl<T: ?Sized, F: Fn(&T) -> bool> Predicate<T> for FnPredicate<F> {
    fn test(&self, input: &T) -> bool {
        (self.0)(input)
    }
}

/// Lift a closure into an [`Action`].
pub fn action_fn<F>(f: F) -> FnAction<F> {
    FnAction(f)
}

/// Lift a closure into a [`Transform`].
pub fn transform_fn<F>(f: F) -> FnTransform<F> {
    FnTransform(f)
}

/// Lift a closure into a [`Predicate`].
pub fn predicate_fn<F>(f: F) -> FnPredicate<F> {
    FnPredicate(f)
}
