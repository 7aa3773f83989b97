//! Combinators: functors built by composing other functors into
//! control-flow-like behavior.
//!
//! [`Repeat`] is a bounded `for` loop over an action, [`While`] is a
//! `while`/`do-while` loop driven by a predicate, and [`Noop`] is the
//! canonical do-nothing action the validating factories normalize to.
//!
//! Every combinator is immutable after construction: it owns its delegates,
//! exposes read-only accessors, and has no mutation API. Invoking one from
//! several threads at once is safe whenever the delegates (and whatever
//! shared state they touch) are.

use crate::error::FunctorError;
use crate::functor::{Action, BoxAction, BoxPredicate, Predicate};

/// The canonical do-nothing action.
///
/// Every `Noop` value is identical; [`Noop::instance`] exposes the one
/// shared reference for callers that want to hold it without allocating.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Noop;

impl Noop {
    /// The shared instance.
    pub fn instance() -> &'static Noop {
        static INSTANCE: Noop = Noop;
        &INSTANCE
    }
}

impl<T: ?Sized> Action<T> for Noop {
    fn execute(&self, _input: &mut T) {}
}

/// An action that invokes a delegate action a fixed number of times, like a
/// `for` loop.
///
/// `Repeat` performs no validation or normalization; a count of zero simply
/// performs zero iterations. Use the [`repeat`] factory for the normalizing
/// behavior (zero count or absent delegate collapses to [`Noop`], count one
/// returns the delegate itself).
///
/// ```rust
/// use functors::{action_fn, Action, Repeat};
///
/// let five = Repeat::new(5, action_fn(|n: &mut i64| *n += 1));
/// let mut n = 0;
/// five.execute(&mut n);
/// assert_eq!(n, 5);
/// ```
#[derive(Clone, Debug)]
pub struct Repeat<A> {
    count: usize,
    action: A,
}

impl<A> Repeat<A> {
    /// Construct without validation, storing the raw count.
    pub fn new(count: usize, action: A) -> Self {
        Repeat { count, action }
    }

    /// The number of times the delegate is invoked per execution.
    pub fn count(&self) -> usize {
        self.count
    }

    /// The delegate action.
    pub fn action(&self) -> &A {
        &self.action
    }
}

impl<T: ?Sized, A: Action<T>> Action<T> for Repeat<A> {
    /// Invoke the delegate exactly `count` times on `input`, in order,
    /// synchronously.
    fn execute(&self, input: &mut T) {
        for _ in 0..self.count {
            self.action.execute(input);
        }
    }
}

/// An action that invokes a delegate action repeatedly until a predicate
/// evaluates false, like a `while` or `do-while` loop.
///
/// With `do_loop` set, the delegate runs once unconditionally before the
/// predicate is first consulted. The loop terminates on the first false
/// evaluation; there is no iteration cap, so a predicate that never becomes
/// false loops forever. That is native-loop semantics and the caller's
/// responsibility, not something this type guards against.
///
/// ```rust
/// use functors::{action_fn, predicate_fn, Action, While};
///
/// let count_up = While::new(
///     predicate_fn(|n: &i64| *n < 3),
///     action_fn(|n: &mut i64| *n += 1),
///     false,
/// );
/// let mut n = 0;
/// count_up.execute(&mut n);
/// assert_eq!(n, 3);
/// ```
#[derive(Clone, Debug)]
pub struct While<P, A> {
    predicate: P,
    action: A,
    do_loop: bool,
}

impl<P, A> While<P, A> {
    /// Construct directly from a predicate and an action. Presence of both
    /// delegates is guaranteed by the types; see [`repeat_while`] for the
    /// factory that accepts possibly-absent delegates.
    pub fn new(predicate: P, action: A, do_loop: bool) -> Self {
        While {
            predicate,
            action,
            do_loop,
        }
    }

    /// The predicate controlling the loop.
    pub fn predicate(&self) -> &P {
        &self.predicate
    }

    /// The delegate action.
    pub fn action(&self) -> &A {
        &self.action
    }

    /// True for do-while semantics (one unconditional invocation first),
    /// false for while semantics.
    pub fn is_do_loop(&self) -> bool {
        self.do_loop
    }
}

impl<T: ?Sized, P: Predicate<T>, A: Action<T>> Action<T> for While<P, A> {
    /// Invoke the delegate until the predicate evaluates false.
    fn execute(&self, input: &mut T) {
        if self.do_loop {
            self.action.execute(input);
        }
        while self.predicate.test(input) {
            self.action.execute(input);
        }
    }
}

/// Validating factory for the bounded-repeat combinator.
///
/// A zero count or an absent action returns the canonical [`Noop`]; this is
/// normalization, not an error. A count of one returns the delegate itself,
/// unwrapped. Anything else wraps the delegate in a [`Repeat`].
pub fn repeat<T: ?Sized + 'static>(count: usize, action: Option<BoxAction<T>>) -> BoxAction<T> {
    match action {
        None => Box::new(Noop),
        Some(_) if count == 0 => Box::new(Noop),
        Some(action) if count == 1 => action,
        Some(action) => Box::new(Repeat::new(count, action)),
    }
}

/// Validating factory for the conditional-repeat combinator.
///
/// Fails before constructing any state if the predicate or the action is
/// absent.
pub fn repeat_while<T: ?Sized + 'static>(
    predicate: Option<BoxPredicate<T>>,
    action: Option<BoxAction<T>>,
    do_loop: bool,
) -> Result<BoxAction<T>, FunctorError> {
    let predicate = predicate.ok_or(FunctorError::MissingPredicate)?;
    let action = action.ok_or(FunctorError::MissingAction)?;
    Ok(Box::new(While::new(predicate, action, do_loop)))
}

/// The canonical no-op action, type-erased.
pub fn noop<T: ?Sized>() -> BoxAction<T> {
    Box::new(Noop)
}
