//! Composable functors: first-class actions, transforms, and predicates,
//! combinators that assemble them into control-flow-like constructs, and
//! collection decorators that apply a transform at the point of insertion.

mod collection;
mod combinator;
mod error;
mod functor;
mod prototype;
mod serial;
mod transformed;

pub use collection::Collection;
pub use combinator::{noop, repeat, repeat_while, Noop, Repeat, While};
pub use error::FunctorError;
pub use functor::{
    action_fn, predicate_fn, transform_fn, Action, BoxAction, BoxPredicate, BoxTransform,
    FnAction, FnPredicate, FnTransform, Predicate, Transform,
};
pub use prototype::{CloneTransform, Prototype};
pub use serial::{unsafe_serialization_enabled, UNSAFE_SERIALIZATION_VAR};
pub use transformed::Transformed;
