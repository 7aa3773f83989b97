//! The serialization safety gate.
//!
//! Functor graphs reconstructed from untrusted byte streams are a known
//! remote-code-execution vector, so persistence support for the functors in
//! this crate is disabled by default. Both directions are gated: with the
//! gate closed, serializing *or* deserializing a gated functor fails with a
//! not-supported error naming the functor type. The gate is derived once per
//! process from [`UNSAFE_SERIALIZATION_VAR`] on first use and never
//! re-derived; there is no runtime mutation API.
//!
//! The gate is orthogonal to runtime behavior: with it open, the functors
//! round-trip through any serde format and the restored values behave
//! exactly like the originals.

use once_cell::sync::Lazy;
use serde::de::{self, Deserializer};
use serde::ser::{self, Serializer};
use serde::{Deserialize, Serialize};

use crate::combinator::{Noop, Repeat, While};
use crate::error::FunctorError;
use crate::prototype::CloneTransform;

/// The environment variable the gate is derived from. Serialization is
/// enabled only when it is set to `true` (ASCII case-insensitive) before the
/// first gated operation in the process.
pub const UNSAFE_SERIALIZATION_VAR: &str = "FUNCTORS_ENABLE_UNSAFE_SERIALIZATION";

static UNSAFE_SERIALIZATION: Lazy<bool> = Lazy::new(|| {
    std::env::var(UNSAFE_SERIALIZATION_VAR)
        .map(|value| value.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
});

/// Whether functor serialization is enabled for this process.
pub fn unsafe_serialization_enabled() -> bool {
    *UNSAFE_SERIALIZATION
}

/// Admission check run before any gated functor touches a byte stream.
fn check_unsafe_serialization<T>() -> Result<(), FunctorError> {
    if unsafe_serialization_enabled() {
        Ok(())
    } else {
        Err(FunctorError::UnsafeSerialization(std::any::type_name::<T>()))
    }
}

#[derive(Serialize)]
#[serde(rename = "Repeat")]
struct RepeatRef<'a, A> {
    count: usize,
    action: &'a A,
}

#[derive(Deserialize)]
#[serde(rename = "Repeat")]
struct RepeatOwned<A> {
    count: usize,
    action: A,
}

impl<A: Serialize> Serialize for Repeat<A> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        check_unsafe_serialization::<Self>().map_err(ser::Error::custom)?;
        RepeatRef {
            count: self.count(),
            action: self.action(),
        }
        .serialize(serializer)
    }
}

impl<'de, A: Deserialize<'de>> Deserialize<'de> for Repeat<A> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        check_unsafe_serialization::<Self>().map_err(de::Error::custom)?;
        let RepeatOwned { count, action } = RepeatOwned::deserialize(deserializer)?;
        Ok(Repeat::new(count, action))
    }
}

#[derive(Serialize)]
#[serde(rename = "While")]
struct WhileRef<'a, P, A> {
    predicate: &'a P,
    action: &'a A,
    do_loop: bool,
}

#[derive(Deserialize)]
#[serde(rename = "While")]
struct WhileOwned<P, A> {
    predicate: P,
    action: A,
    do_loop: bool,
}

impl<P: Serialize, A: Serialize> Serialize for While<P, A> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        check_unsafe_serialization::<Self>().map_err(ser::Error::custom)?;
        WhileRef {
            predicate: self.predicate(),
            action: self.action(),
            do_loop: self.is_do_loop(),
        }
        .serialize(serializer)
    }
}

impl<'de, P: Deserialize<'de>, A: Deserialize<'de>> Deserialize<'de> for While<P, A> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        check_unsafe_serialization::<Self>().map_err(de::Error::custom)?;
        let WhileOwned {
            predicate,
            action,
            do_loop,
        } = WhileOwned::deserialize(deserializer)?;
        Ok(While::new(predicate, action, do_loop))
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename = "Noop")]
struct NoopRepr;

impl Serialize for Noop {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        check_unsafe_serialization::<Self>().map_err(ser::Error::custom)?;
        NoopRepr.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Noop {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        check_unsafe_serialization::<Self>().map_err(de::Error::custom)?;
        NoopRepr::deserialize(deserializer)?;
        Ok(Noop)
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename = "CloneTransform")]
struct CloneTransformRepr;

impl Serialize for CloneTransform {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        check_unsafe_serialization::<Self>().map_err(ser::Error::custom)?;
        CloneTransformRepr.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for CloneTransform {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        check_unsafe_serialization::<Self>().map_err(de::Error::custom)?;
        CloneTransformRepr::deserialize(deserializer)?;
        Ok(CloneTransform)
    }
}

// The gate-open path needs the variable set before the process first touches
// the gate, so it lives in the functors-tests integration tests where each
// test binary is its own process. Everything here runs with the gate closed.
#[cfg(test)]
mod tests {
    use super::*;
    use crate::functor::Action;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize)]
    struct Increment;

    impl Action<i64> for Increment {
        fn execute(&self, input: &mut i64) {
            *input += 1;
        }
    }

    #[test]
    fn gate_defaults_to_closed() {
        assert!(!unsafe_serialization_enabled());
    }

    #[test]
    fn serializing_a_gated_functor_fails_by_default() {
        let functor = Repeat::new(2, Increment);
        let err = serde_json::to_string(&functor).unwrap_err();
        assert!(err.to_string().contains("disabled"));
        assert!(err.to_string().contains("Repeat"));
    }

    #[test]
    fn deserializing_a_gated_functor_fails_by_default() {
        let err = serde_json::from_str::<Repeat<Increment>>(r#"{"count":2,"action":null}"#)
            .unwrap_err();
        assert!(err.to_string().contains("disabled"));
    }

    #[test]
    fn every_gated_functor_is_refused() {
        assert!(serde_json::to_string(&Noop).is_err());
        assert!(serde_json::to_string(&CloneTransform).is_err());
        let functor = While::new(Increment, Increment, false);
        assert!(serde_json::to_string(&functor).is_err());
        assert!(serde_json::from_str::<Noop>("null").is_err());
        assert!(serde_json::from_str::<CloneTransform>("null").is_err());
    }

    #[test]
    fn the_admission_check_names_the_offending_type() {
        let err = check_unsafe_serialization::<While<Increment, Increment>>().unwrap_err();
        match err {
            FunctorError::UnsafeSerialization(name) => assert!(name.contains("While")),
            other => panic!("unexpected error: {other}"),
        }
    }
}
