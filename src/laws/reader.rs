//! Law checks for the `Reader` monad.
//!
//! A `Reader` is a function from context to value, and two functions
//! cannot be compared structurally. These checks compare extensionally
//! instead: both sides of each law are run over every context in a
//! [`SampledContexts`] set and the outputs are compared with the given
//! [`Equivalence`]. A pass is evidence relative to the samples, not a
//! proof over all contexts.
//!
//! # Examples
//!
//! ```rust
//! use kindling::effect::Reader;
//! use kindling::laws::{self, SampledContexts, Structural};
//!
//! let samples = SampledContexts::new(vec![String::new(), "abcde".to_owned()]);
//! let verdict = laws::reader::monad_laws(
//!     "ReaderMonad",
//!     2,
//!     Reader::new(|_: String| 2),
//!     |n: i32| Reader::new(move |_: String| n.abs()),
//!     |n: i32| Reader::new(move |context: String| n > i32::try_from(context.len()).unwrap_or(i32::MAX)),
//!     &samples,
//!     &Structural,
//! );
//! assert!(verdict.is_ok());
//! ```

use super::{Equivalence, LawViolation, MonadLaw, SampledContexts};
use crate::effect::Reader;

/// Runs both sides over every sampled context and compares the outputs.
fn check_extensional<Ctx, A, E>(
    instance: &str,
    law: MonadLaw,
    left: &Reader<Ctx, A>,
    right: &Reader<Ctx, A>,
    samples: &SampledContexts<Ctx>,
    equivalence: &E,
) -> Result<(), LawViolation>
where
    Ctx: Clone + 'static,
    A: 'static,
    E: Equivalence<A> + ?Sized,
{
    for context in samples.contexts() {
        let left_output = left.run(context.clone());
        let right_output = right.run(context.clone());
        if !equivalence.equivalent(&left_output, &right_output) {
            return Err(LawViolation::new(law, instance));
        }
    }
    Ok(())
}

/// Checks the left identity law for `Reader`:
/// `Reader::pure(a).flat_map(f)` = `f(a)`, under sampled contexts.
pub fn left_identity<Ctx, A, B, F, E>(
    instance: &str,
    value: A,
    function: F,
    samples: &SampledContexts<Ctx>,
    equivalence: &E,
) -> Result<(), LawViolation>
where
    Ctx: Clone + 'static,
    A: Clone + 'static,
    B: 'static,
    F: Fn(A) -> Reader<Ctx, B> + 'static,
    E: Equivalence<B> + ?Sized,
{
    let right = function(value.clone());
    let left = Reader::pure(value).flat_map(function);
    check_extensional(
        instance,
        MonadLaw::LeftIdentity,
        &left,
        &right,
        samples,
        equivalence,
    )
}

/// Checks the right identity law for `Reader`:
/// `reader.flat_map(Reader::pure)` = `reader`, under sampled contexts.
pub fn right_identity<Ctx, A, E>(
    instance: &str,
    reader: Reader<Ctx, A>,
    samples: &SampledContexts<Ctx>,
    equivalence: &E,
) -> Result<(), LawViolation>
where
    Ctx: Clone + 'static,
    A: Clone + 'static,
    E: Equivalence<A> + ?Sized,
{
    let left = reader.clone().flat_map(Reader::pure);
    check_extensional(
        instance,
        MonadLaw::RightIdentity,
        &left,
        &reader,
        samples,
        equivalence,
    )
}

/// Checks the associativity law for `Reader` under sampled contexts.
///
/// Both nestings thread the same context to every step, so the outputs
/// must agree on every sample.
pub fn associativity<Ctx, A, B, C, F, G, E>(
    instance: &str,
    reader: Reader<Ctx, A>,
    function1: F,
    function2: G,
    samples: &SampledContexts<Ctx>,
    equivalence: &E,
) -> Result<(), LawViolation>
where
    Ctx: Clone + 'static,
    A: 'static,
    B: 'static,
    C: 'static,
    F: Fn(A) -> Reader<Ctx, B> + Clone + 'static,
    G: Fn(B) -> Reader<Ctx, C> + Clone + 'static,
    E: Equivalence<C> + ?Sized,
{
    let left = reader
        .clone()
        .flat_map(function1.clone())
        .flat_map(function2.clone());
    let right = reader.flat_map(move |value| function1(value).flat_map(function2.clone()));
    check_extensional(
        instance,
        MonadLaw::Associativity,
        &left,
        &right,
        samples,
        equivalence,
    )
}

/// Checks all three monad laws for `Reader` against a single set of
/// samples and contexts.
///
/// # Errors
///
/// Returns the first [`LawViolation`] encountered, in the order left
/// identity, right identity, associativity.
pub fn monad_laws<Ctx, A, B, C, F, G, E>(
    instance: &str,
    value: A,
    reader: Reader<Ctx, A>,
    function1: F,
    function2: G,
    samples: &SampledContexts<Ctx>,
    equivalence: &E,
) -> Result<(), LawViolation>
where
    Ctx: Clone + 'static,
    A: Clone + 'static,
    B: 'static,
    C: 'static,
    F: Fn(A) -> Reader<Ctx, B> + Clone + 'static,
    G: Fn(B) -> Reader<Ctx, C> + Clone + 'static,
    E: Equivalence<A> + Equivalence<B> + Equivalence<C> + ?Sized,
{
    left_identity(instance, value, function1.clone(), samples, equivalence)?;
    right_identity(instance, reader.clone(), samples, equivalence)?;
    associativity(instance, reader, function1, function2, samples, equivalence)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::laws::Structural;
    use rstest::{fixture, rstest};

    #[fixture]
    fn samples() -> SampledContexts<String> {
        SampledContexts::new(vec![
            String::new(),
            "ab".to_owned(),
            "abcde".to_owned(),
        ])
    }

    fn absolute(n: i32) -> Reader<String, i32> {
        Reader::new(move |_| n.abs())
    }

    fn longer_than(n: i32) -> Reader<String, bool> {
        Reader::new(move |context: String| {
            n > i32::try_from(context.len()).unwrap_or(i32::MAX)
        })
    }

    #[rstest]
    fn reader_satisfies_all_laws(samples: SampledContexts<String>) {
        let verdict = monad_laws(
            "ReaderMonad",
            2,
            Reader::new(|_: String| 2),
            absolute,
            longer_than,
            &samples,
            &Structural,
        );
        assert_eq!(verdict, Ok(()));
    }

    #[rstest]
    fn left_identity_over_samples(samples: SampledContexts<String>) {
        assert_eq!(
            left_identity("ReaderMonad", -7, absolute, &samples, &Structural),
            Ok(())
        );
    }

    #[rstest]
    fn right_identity_over_samples(samples: SampledContexts<String>) {
        let reader = Reader::asks(|context: String| context.len());
        assert_eq!(
            right_identity("ReaderMonad", reader, &samples, &Structural),
            Ok(())
        );
    }

    #[rstest]
    fn associativity_for_context_dependent_functions(samples: SampledContexts<String>) {
        let reader = Reader::asks(|context: String| i32::try_from(context.len()).unwrap_or(0));
        let verdict = associativity(
            "ReaderMonad",
            reader,
            absolute,
            longer_than,
            &samples,
            &Structural,
        );
        assert_eq!(verdict, Ok(()));
    }

    #[rstest]
    fn empty_sample_set_passes_vacuously() {
        let samples: SampledContexts<String> = SampledContexts::new(vec![]);
        assert_eq!(
            left_identity("ReaderMonad", 1, absolute, &samples, &Structural),
            Ok(())
        );
    }
}
