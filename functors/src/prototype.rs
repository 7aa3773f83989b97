//! The clone transform and the prototype-construction hook it delegates to.

use crate::functor::Transform;

/// The prototype-construction hook: produce a new, independent value from an
/// existing one.
///
/// All cloning policy lives in the implementation of this trait; the
/// [`CloneTransform`] that drives it is stateless. Dispatch on the runtime
/// type of the input is the trait's vtable, so "resolve a construction
/// strategy for this type" is simply a method call. For most types `create`
/// is `self.clone()`; types with prototype semantics of their own (reset
/// counters, fresh identity) implement whatever "a new instance modeled on
/// this one" means for them.
pub trait Prototype: Sized {
    /// Construct a new instance modeled on `self`.
    fn create(&self) -> Self;
}

/// An absent value stays absent: `None` creates `None` without consulting
/// the inner type's constructor.
impl<T: Prototype> Prototype for Option<T> {
    fn create(&self) -> Self {
        self.as_ref().map(Prototype::create)
    }
}

/// A [`Transform`] that returns a clone of its input, produced by the
/// input's [`Prototype`] hook.
///
/// The transform holds no state of its own; exactly one shared instance
/// exists per process, available through [`CloneTransform::instance`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CloneTransform;

impl CloneTransform {
    /// The shared instance.
    pub fn instance() -> &'static CloneTransform {
        static INSTANCE: CloneTransform = CloneTransform;
        &INSTANCE
    }
}

impl<T: Prototype> Transform<T, T> for CloneTransform {
    fn transform(&self, input: T) -> T {
        input.create()
    }
}
