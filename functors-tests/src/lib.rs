//! Fixtures and property tests for the functors library.
//!
//! The fixtures are plain data types implementing the capability contracts,
//! shared by the property tests here, the integration tests under `tests/`,
//! and the benches.

use functors::{Action, Predicate, Transform};
use serde::{Deserialize, Serialize};

/// Adds one to the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Increment;

impl Action<i64> for Increment {
    fn execute(&self, input: &mut i64) {
        *input += 1;
    }
}

/// True while the input is below the bound.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessThan(pub i64);

impl Predicate<i64> for LessThan {
    fn test(&self, input: &i64) -> bool {
        *input < self.0
    }
}

/// Doubles the input, wrapping on overflow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Double;

impl Transform<i64, i64> for Double {
    fn transform(&self, input: i64) -> i64 {
        input.wrapping_mul(2)
    }
}

#[cfg(test)]
mod properties {
    use super::*;
    use functors::{repeat, BoxAction, Collection, Repeat, Transformed, While};
    use proptest::collection::vec;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn repeat_executes_exactly_count_times(count in 0usize..64) {
            let action = Repeat::new(count, Increment);
            let mut n = 0i64;
            action.execute(&mut n);
            prop_assert_eq!(n, count as i64);
        }

        #[test]
        fn repeat_factory_matches_raw_semantics(count in 0usize..64) {
            let normalized: BoxAction<i64> = repeat(count, Some(Box::new(Increment)));
            let raw = Repeat::new(count, Increment);

            let mut a = 0i64;
            normalized.execute(&mut a);
            let mut b = 0i64;
            raw.execute(&mut b);
            prop_assert_eq!(a, b);
        }

        #[test]
        fn while_loop_counts_up_to_the_bound(limit in 0i64..128) {
            let action = While::new(LessThan(limit), Increment, false);
            let mut n = 0i64;
            action.execute(&mut n);
            prop_assert_eq!(n, limit);
        }

        #[test]
        fn do_while_counts_up_but_always_runs_once(limit in 0i64..128) {
            let action = While::new(LessThan(limit), Increment, true);
            let mut n = 0i64;
            action.execute(&mut n);
            prop_assert_eq!(n, limit.max(1));
        }

        #[test]
        fn transformed_vec_holds_the_images_in_insertion_order(
            elements in vec(any::<i64>(), 0..64),
        ) {
            let mut decorated = Transformed::new(Vec::new(), Double);
            decorated.add_all(elements.clone());

            let expected: Vec<i64> = elements.iter().map(|n| n.wrapping_mul(2)).collect();
            prop_assert_eq!(decorated.into_inner(), expected);
        }

        #[test]
        fn decorator_probes_match_post_transform_values_only(n in -1000i64..1000) {
            let mut decorated = Transformed::new(Vec::new(), Double);
            decorated.add(n);
            prop_assert!(decorated.contains(&n.wrapping_mul(2)));
            // n and 2n coincide only at zero
            if n != 0 {
                prop_assert!(!decorated.contains(&n));
            }
        }
    }
}
