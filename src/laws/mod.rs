//! Law-checking harness for monad instances.
//!
//! The three monad laws relate `pure` and `flat_map`:
//!
//! - **left identity**: `pure(a).flat_map(f)` = `f(a)`
//! - **right identity**: `m.flat_map(pure)` = `m`
//! - **associativity**: `m.flat_map(f).flat_map(g)` =
//!   `m.flat_map(|a| f(a).flat_map(g))`
//!
//! Each check builds both sides of a law from caller-supplied samples and
//! compares them with a caller-supplied [`Equivalence`] strategy. Passing
//! checks return `Ok(())`; a failing check returns a [`LawViolation`]
//! naming the law and the instance under test.
//!
//! # Equality strategies
//!
//! There is no single notion of equality that fits every instance, so the
//! strategy is an explicit parameter rather than a default. Containers
//! with `PartialEq` use [`Structural`]; function-like instances such as
//! `Reader` cannot be compared structurally and are instead compared
//! extensionally, by running both sides over [`SampledContexts`]. A pass
//! under sampled equality is evidence relative to those samples, not a
//! proof.
//!
//! # Instance coverage
//!
//! The generic checks in this module cover any [`Monad`] implementor
//! (`Option`, `Result`). Instances whose operations fall outside the
//! trait have dedicated submodules: [`sequence`] for `Vec`, [`reader`]
//! for `Reader`, and [`deferred`] for `Deferred` (whose checks are async
//! and await both sides before comparing).
//!
//! # Examples
//!
//! ```rust
//! use kindling::laws::{self, Structural};
//!
//! let verdict = laws::monad_laws(
//!     "OptionMonad",
//!     5,
//!     Some(5),
//!     |n: i32| Some(n + 1),
//!     |n: i32| Some(n * 2),
//!     &Structural,
//! );
//! assert!(verdict.is_ok());
//! ```

use crate::typeclass::{Monad, TypeConstructor};

pub mod sequence;

#[cfg(feature = "effect")]
pub mod reader;

#[cfg(feature = "async")]
pub mod deferred;

/// A strategy for deciding whether two values of type `T` are equal for
/// the purpose of a law check.
///
/// Implementations range from plain structural comparison ([`Structural`])
/// to domain-specific notions such as tolerance-based numeric comparison.
///
/// # Examples
///
/// ```rust
/// use kindling::laws::Equivalence;
///
/// /// Compares floats up to a fixed tolerance.
/// struct Approximate;
///
/// impl Equivalence<f64> for Approximate {
///     fn equivalent(&self, left: &f64, right: &f64) -> bool {
///         (left - right).abs() < 1e-9
///     }
/// }
/// ```
pub trait Equivalence<T> {
    /// Returns `true` when the two values count as equal under this
    /// strategy.
    fn equivalent(&self, left: &T, right: &T) -> bool;
}

/// Structural equality: delegates to `PartialEq`.
///
/// The right strategy for containers whose contents are directly
/// comparable, such as `Option`, `Result`, and `Vec`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Structural;

impl<T: PartialEq> Equivalence<T> for Structural {
    fn equivalent(&self, left: &T, right: &T) -> bool {
        left == right
    }
}

/// A finite set of context samples for extensional comparison of
/// function-like instances.
///
/// Two `Reader`s are compared by running both over every sample and
/// comparing the outputs. Equality relative to samples is weaker than
/// true extensional equality; choose samples that exercise the
/// computation's branches.
///
/// # Examples
///
/// ```rust
/// use kindling::laws::SampledContexts;
///
/// let samples = SampledContexts::new(vec![String::new(), "abc".to_owned()]);
/// assert_eq!(samples.contexts().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct SampledContexts<Ctx> {
    contexts: Vec<Ctx>,
}

impl<Ctx> SampledContexts<Ctx> {
    /// Wraps the given contexts as a sample set.
    #[must_use]
    pub const fn new(contexts: Vec<Ctx>) -> Self {
        Self { contexts }
    }

    /// The sampled contexts, in order.
    #[must_use]
    pub fn contexts(&self) -> &[Ctx] {
        &self.contexts
    }
}

impl<Ctx> From<Vec<Ctx>> for SampledContexts<Ctx> {
    fn from(contexts: Vec<Ctx>) -> Self {
        Self::new(contexts)
    }
}

/// One of the three monad laws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonadLaw {
    /// `pure(a).flat_map(f)` = `f(a)`
    LeftIdentity,
    /// `m.flat_map(pure)` = `m`
    RightIdentity,
    /// `m.flat_map(f).flat_map(g)` = `m.flat_map(|a| f(a).flat_map(g))`
    Associativity,
}

impl std::fmt::Display for MonadLaw {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::LeftIdentity => "left identity",
            Self::RightIdentity => "right identity",
            Self::Associativity => "associativity",
        };
        formatter.write_str(name)
    }
}

/// A failed law check: names the law and the instance under test.
///
/// Displays as `"<law> law for <instance>"`, e.g.
/// `"left identity law for OptionMonad"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LawViolation {
    law: MonadLaw,
    instance: String,
}

impl LawViolation {
    /// Records a violation of `law` by `instance`.
    #[must_use]
    pub fn new(law: MonadLaw, instance: &str) -> Self {
        Self {
            law,
            instance: instance.to_owned(),
        }
    }

    /// The violated law.
    #[must_use]
    pub const fn law(&self) -> MonadLaw {
        self.law
    }

    /// The name of the instance that violated the law.
    #[must_use]
    pub fn instance(&self) -> &str {
        &self.instance
    }
}

impl std::fmt::Display for LawViolation {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{} law for {}", self.law, self.instance)
    }
}

impl std::error::Error for LawViolation {}

/// Compares both sides of a law under the given strategy.
fn check<T, E>(
    instance: &str,
    law: MonadLaw,
    left: &T,
    right: &T,
    equivalence: &E,
) -> Result<(), LawViolation>
where
    E: Equivalence<T> + ?Sized,
{
    if equivalence.equivalent(left, right) {
        Ok(())
    } else {
        Err(LawViolation::new(law, instance))
    }
}

/// Checks the left identity law: `pure(a).flat_map(f)` = `f(a)`.
///
/// `M` cannot be inferred from the arguments alone, so callers name it
/// explicitly: `left_identity::<Option<i32>, _, _, _, _>(...)`.
pub fn left_identity<M, A, B, F, E>(
    instance: &str,
    value: A,
    function: F,
    equivalence: &E,
) -> Result<(), LawViolation>
where
    M: Monad + TypeConstructor<Inner = A, WithType<A> = M>,
    A: Clone,
    F: Fn(A) -> M::WithType<B>,
    E: Equivalence<M::WithType<B>> + ?Sized,
{
    // The target type is named explicitly: inference cannot pick `B`
    // through the `WithType` projection on its own.
    let left = M::pure(value.clone()).flat_map::<B, _>(&function);
    let right = function(value);
    check(instance, MonadLaw::LeftIdentity, &left, &right, equivalence)
}

/// Checks the right identity law: `m.flat_map(pure)` = `m`.
pub fn right_identity<M, A, E>(
    instance: &str,
    monad: M,
    equivalence: &E,
) -> Result<(), LawViolation>
where
    M: Monad + Clone + TypeConstructor<Inner = A, WithType<A> = M>,
    E: Equivalence<M> + ?Sized,
{
    let left = monad.clone().flat_map::<A, _>(M::pure);
    check(instance, MonadLaw::RightIdentity, &left, &monad, equivalence)
}

/// Checks the associativity law:
/// `m.flat_map(f).flat_map(g)` = `m.flat_map(|a| f(a).flat_map(g))`.
pub fn associativity<M, A, B, C, F, G, E>(
    instance: &str,
    monad: M,
    function1: F,
    function2: G,
    equivalence: &E,
) -> Result<(), LawViolation>
where
    M: Monad + Clone + TypeConstructor<Inner = A>,
    M::WithType<B>: Monad + TypeConstructor<Inner = B, WithType<C> = M::WithType<C>>,
    F: Fn(A) -> M::WithType<B>,
    G: Fn(B) -> M::WithType<C>,
    E: Equivalence<M::WithType<C>> + ?Sized,
{
    let left = monad
        .clone()
        .flat_map::<B, _>(&function1)
        .flat_map::<C, _>(&function2);
    let right = monad.flat_map::<C, _>(|value| function1(value).flat_map::<C, _>(function2));
    check(instance, MonadLaw::Associativity, &left, &right, equivalence)
}

/// Checks all three monad laws against a single set of samples.
///
/// Stops at the first violation; a return of `Ok(())` means every law
/// held under `equivalence` for the given samples.
///
/// # Errors
///
/// Returns the first [`LawViolation`] encountered, in the order left
/// identity, right identity, associativity.
pub fn monad_laws<M, A, B, C, F, G, E>(
    instance: &str,
    value: A,
    monad: M,
    function1: F,
    function2: G,
    equivalence: &E,
) -> Result<(), LawViolation>
where
    M: Monad + Clone + TypeConstructor<Inner = A, WithType<A> = M>,
    A: Clone,
    M::WithType<B>: Monad + TypeConstructor<Inner = B, WithType<C> = M::WithType<C>>,
    F: Fn(A) -> M::WithType<B>,
    G: Fn(B) -> M::WithType<C>,
    E: Equivalence<M>
        + Equivalence<M::WithType<B>>
        + Equivalence<M::WithType<C>>
        + ?Sized,
{
    left_identity::<M, A, B, _, _>(instance, value, &function1, equivalence)?;
    right_identity(instance, monad.clone(), equivalence)?;
    associativity::<M, A, B, C, _, _, _>(instance, monad, function1, function2, equivalence)
}
