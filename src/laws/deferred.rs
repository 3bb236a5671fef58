//! Law checks for the `Deferred` monad.
//!
//! `Deferred` values are single-shot: awaiting one consumes it. A law
//! needs its subject on both sides, so these checks take a factory
//! closure that produces a fresh, equivalent `Deferred` per call instead
//! of a value.
//!
//! Equality here is equality of eventually-produced resolutions: both
//! sides are awaited (concurrently, via [`futures::future::join`]) and
//! the two `Result<_, Rejection>` outcomes are compared with the given
//! [`Equivalence`]. Rejections participate in the comparison, so the
//! laws are checked on the failure path too.
//!
//! # Examples
//!
//! ```rust,ignore
//! use kindling::effect::Deferred;
//! use kindling::laws::{self, Structural};
//!
//! #[tokio::main]
//! async fn main() {
//!     let verdict = laws::deferred::monad_laws(
//!         "DeferredMonad",
//!         5,
//!         || Deferred::pure(5),
//!         |n: i32| Deferred::pure(n + 1),
//!         |n: i32| Deferred::pure(n * 2),
//!         &Structural,
//!     )
//!     .await;
//!     assert!(verdict.is_ok());
//! }
//! ```

use futures::future::join;

use super::{check, Equivalence, LawViolation, MonadLaw};
use crate::effect::{Deferred, Rejection};

/// Checks the left identity law for `Deferred`:
/// `Deferred::pure(a).flat_map(f)` and `f(a)` resolve identically.
pub async fn left_identity<A, B, F, E>(
    instance: &str,
    value: A,
    function: F,
    equivalence: &E,
) -> Result<(), LawViolation>
where
    A: Clone + Send + 'static,
    B: Send + 'static,
    F: Fn(A) -> Deferred<B> + Send + 'static,
    E: Equivalence<Result<B, Rejection>> + ?Sized,
{
    let right = function(value.clone());
    let left = Deferred::pure(value).flat_map(function);
    let (left, right) = join(left, right).await;
    check(instance, MonadLaw::LeftIdentity, &left, &right, equivalence)
}

/// Checks the right identity law for `Deferred`:
/// `deferred().flat_map(Deferred::pure)` and `deferred()` resolve
/// identically.
pub async fn right_identity<A, Make, E>(
    instance: &str,
    deferred: Make,
    equivalence: &E,
) -> Result<(), LawViolation>
where
    A: Send + 'static,
    Make: Fn() -> Deferred<A>,
    E: Equivalence<Result<A, Rejection>> + ?Sized,
{
    let left = deferred().flat_map(Deferred::pure);
    let right = deferred();
    let (left, right) = join(left, right).await;
    check(instance, MonadLaw::RightIdentity, &left, &right, equivalence)
}

/// Checks the associativity law for `Deferred`.
///
/// Both nestings run the source first, then the continuations in order;
/// a rejection at any step settles both sides the same way.
pub async fn associativity<A, B, C, Make, F, G, E>(
    instance: &str,
    deferred: Make,
    function1: F,
    function2: G,
    equivalence: &E,
) -> Result<(), LawViolation>
where
    A: Send + 'static,
    B: Send + 'static,
    C: Send + 'static,
    Make: Fn() -> Deferred<A>,
    F: Fn(A) -> Deferred<B> + Clone + Send + 'static,
    G: Fn(B) -> Deferred<C> + Clone + Send + 'static,
    E: Equivalence<Result<C, Rejection>> + ?Sized,
{
    let left = deferred()
        .flat_map(function1.clone())
        .flat_map(function2.clone());
    let right = deferred().flat_map(move |value| function1(value).flat_map(function2));
    let (left, right) = join(left, right).await;
    check(instance, MonadLaw::Associativity, &left, &right, equivalence)
}

/// Checks all three monad laws for `Deferred` against a single set of
/// samples.
///
/// # Errors
///
/// Returns the first [`LawViolation`] encountered, in the order left
/// identity, right identity, associativity.
pub async fn monad_laws<A, B, C, Make, F, G, E>(
    instance: &str,
    value: A,
    deferred: Make,
    function1: F,
    function2: G,
    equivalence: &E,
) -> Result<(), LawViolation>
where
    A: Clone + Send + 'static,
    B: Send + 'static,
    C: Send + 'static,
    Make: Fn() -> Deferred<A>,
    F: Fn(A) -> Deferred<B> + Clone + Send + 'static,
    G: Fn(B) -> Deferred<C> + Clone + Send + 'static,
    E: Equivalence<Result<A, Rejection>>
        + Equivalence<Result<B, Rejection>>
        + Equivalence<Result<C, Rejection>>
        + ?Sized,
{
    left_identity(instance, value, function1.clone(), equivalence).await?;
    right_identity(instance, &deferred, equivalence).await?;
    associativity(instance, deferred, function1, function2, equivalence).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::laws::Structural;

    fn increment(n: i32) -> Deferred<i32> {
        Deferred::new(move || async move { Ok(n + 1) })
    }

    fn double(n: i32) -> Deferred<i32> {
        Deferred::pure(n * 2)
    }

    fn reject_negative(n: i32) -> Deferred<i32> {
        if n < 0 {
            Deferred::rejected(Rejection::new("negative"))
        } else {
            Deferred::pure(n)
        }
    }

    #[tokio::test]
    async fn deferred_satisfies_all_laws() {
        let verdict = monad_laws(
            "DeferredMonad",
            5,
            || Deferred::pure(5),
            increment,
            double,
            &Structural,
        )
        .await;
        assert_eq!(verdict, Ok(()));
    }

    #[tokio::test]
    async fn laws_hold_for_suspended_sources() {
        let verdict = monad_laws(
            "DeferredMonad",
            5,
            || Deferred::new(|| async { Ok(5) }),
            increment,
            double,
            &Structural,
        )
        .await;
        assert_eq!(verdict, Ok(()));
    }

    #[tokio::test]
    async fn laws_hold_on_the_rejection_path() {
        let verdict = monad_laws(
            "DeferredMonad",
            -5,
            || Deferred::<i32>::rejected(Rejection::new("boom")),
            reject_negative,
            increment,
            &Structural,
        )
        .await;
        assert_eq!(verdict, Ok(()));
    }

    #[tokio::test]
    async fn left_identity_for_rejecting_continuation() {
        let verdict =
            left_identity("DeferredMonad", -1, reject_negative, &Structural).await;
        assert_eq!(verdict, Ok(()));
    }

    #[tokio::test]
    async fn right_identity_for_rejected_source() {
        let verdict = right_identity(
            "DeferredMonad",
            || Deferred::<i32>::rejected(Rejection::new("boom")),
            &Structural,
        )
        .await;
        assert_eq!(verdict, Ok(()));
    }
}
