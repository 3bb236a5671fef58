//! Law checks for the `Vec` monad.
//!
//! `Vec`'s `flat_map` takes `FnMut` rather than `FnOnce` (the function
//! runs once per element), so it lives on [`MonadVec`] instead of the
//! `FnOnce`-based [`Monad`](crate::typeclass::Monad) trait and gets its
//! own set of checks. The laws themselves are identical; comparison is
//! structural element-by-element equality as usual, so
//! [`Structural`](super::Structural) (or any other [`Equivalence`] over
//! `Vec`) applies.
//!
//! # Examples
//!
//! ```rust
//! use kindling::laws::{self, Structural};
//!
//! let verdict = laws::sequence::monad_laws(
//!     "SequenceMonad",
//!     5,
//!     vec![1, 2, 3],
//!     |n: i32| vec![n, n + 10],
//!     |n: i32| vec![n * 2],
//!     &Structural,
//! );
//! assert!(verdict.is_ok());
//! ```

use super::{check, Equivalence, LawViolation, MonadLaw};
use crate::typeclass::MonadVec;

/// Checks the left identity law for `Vec`:
/// `vec![a].flat_map(f)` = `f(a)`.
pub fn left_identity<A, B, F, E>(
    instance: &str,
    value: A,
    mut function: F,
    equivalence: &E,
) -> Result<(), LawViolation>
where
    A: Clone,
    F: FnMut(A) -> Vec<B>,
    E: Equivalence<Vec<B>> + ?Sized,
{
    let left = Vec::<A>::pure(value.clone()).flat_map(&mut function);
    let right = function(value);
    check(instance, MonadLaw::LeftIdentity, &left, &right, equivalence)
}

/// Checks the right identity law for `Vec`:
/// `sequence.flat_map(|a| vec![a])` = `sequence`.
pub fn right_identity<A, E>(
    instance: &str,
    sequence: Vec<A>,
    equivalence: &E,
) -> Result<(), LawViolation>
where
    A: Clone,
    E: Equivalence<Vec<A>> + ?Sized,
{
    let left = sequence.clone().flat_map(Vec::<A>::pure);
    check(instance, MonadLaw::RightIdentity, &left, &sequence, equivalence)
}

/// Checks the associativity law for `Vec`.
///
/// Both sides visit elements in sequence order, so the flattened results
/// must match exactly, ordering included.
pub fn associativity<A, B, C, F, G, E>(
    instance: &str,
    sequence: Vec<A>,
    mut function1: F,
    mut function2: G,
    equivalence: &E,
) -> Result<(), LawViolation>
where
    A: Clone,
    F: FnMut(A) -> Vec<B>,
    G: FnMut(B) -> Vec<C>,
    E: Equivalence<Vec<C>> + ?Sized,
{
    let left = sequence
        .clone()
        .flat_map(&mut function1)
        .flat_map(&mut function2);
    let right = sequence.flat_map(|value| function1(value).flat_map(&mut function2));
    check(instance, MonadLaw::Associativity, &left, &right, equivalence)
}

/// Checks all three monad laws for `Vec` against a single set of samples.
///
/// # Errors
///
/// Returns the first [`LawViolation`] encountered, in the order left
/// identity, right identity, associativity.
pub fn monad_laws<A, B, C, F, G, E>(
    instance: &str,
    value: A,
    sequence: Vec<A>,
    mut function1: F,
    function2: G,
    equivalence: &E,
) -> Result<(), LawViolation>
where
    A: Clone,
    F: FnMut(A) -> Vec<B>,
    G: FnMut(B) -> Vec<C>,
    E: Equivalence<Vec<A>> + Equivalence<Vec<B>> + Equivalence<Vec<C>> + ?Sized,
{
    left_identity(instance, value, &mut function1, equivalence)?;
    right_identity(instance, sequence.clone(), equivalence)?;
    associativity(instance, sequence, function1, function2, equivalence)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::laws::Structural;
    use rstest::rstest;

    #[rstest]
    #[case(vec![1, 2, 3])]
    #[case(vec![])]
    fn sequence_satisfies_all_laws(#[case] sequence: Vec<i32>) {
        let verdict = monad_laws(
            "SequenceMonad",
            5,
            sequence,
            |n: i32| vec![n, n + 10],
            |n: i32| if n % 2 == 0 { vec![n] } else { vec![] },
            &Structural,
        );
        assert_eq!(verdict, Ok(()));
    }

    #[rstest]
    fn left_identity_matches_direct_application() {
        assert_eq!(
            left_identity("SequenceMonad", 3, |n: i32| vec![n, n * 10], &Structural),
            Ok(())
        );
    }

    #[rstest]
    fn right_identity_preserves_ordering() {
        assert_eq!(
            right_identity("SequenceMonad", vec![3, 1, 2], &Structural),
            Ok(())
        );
    }

    #[rstest]
    fn associativity_holds_for_element_dropping_functions() {
        let verdict = associativity(
            "SequenceMonad",
            vec![1, 2, 3, 4],
            |n: i32| if n % 2 == 0 { vec![n] } else { vec![] },
            |n: i32| vec![n, n * 100],
            &Structural,
        );
        assert_eq!(verdict, Ok(()));
    }
}
