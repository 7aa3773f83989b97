use thiserror::Error;

/// Errors surfaced by the validating factories and the serialization gate.
///
/// Every failure here is synchronous and final: nothing in this crate
/// retries, recovers, or downgrades. Caller-contract violations that cannot
/// be detected up front (a conditional-repeat predicate that never becomes
/// false, a non-deterministic prototype hook) are documented caller
/// responsibility and deliberately not represented.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FunctorError {
    /// A validating factory was handed an absent predicate.
    #[error("predicate must not be absent")]
    MissingPredicate,

    /// A validating factory was handed an absent action.
    #[error("action must not be absent")]
    MissingAction,

    /// The serialization gate refused to read or write a functor. Carries
    /// the type name of the offending functor.
    #[error(
        "serialization support for `{0}` is disabled for security reasons; \
         set FUNCTORS_ENABLE_UNSAFE_SERIALIZATION=true to enable it, but only \
         if functors are never deserialized from untrusted sources"
    )]
    UnsafeSerialization(&'static str),
}
