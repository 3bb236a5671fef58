//! Monad type class - sequencing computations within a context.
//!
//! A `Monad` adds two things to a [`Functor`]: `pure`, which lifts a plain
//! value into the container, and `flat_map`, which sequences a computation
//! whose next step depends on the previous result.
//!
//! # Laws
//!
//! All `Monad` implementations must satisfy:
//!
//! - **Left identity**: `Self::pure(a).flat_map(f) == f(a)`
//! - **Right identity**: `m.flat_map(Self::pure) == m`
//! - **Associativity**:
//!   `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
//!
//! The [`laws`](crate::laws) module checks these for concrete samples.
//!
//! # Derived map
//!
//! `map` has a default definition in terms of the other two operations:
//!
//! ```text
//! map(fa, f) = flat_map(fa, |x| pure(f(x)))
//! ```
//!
//! An instance's `fmap` may be more direct, but must be observationally
//! equivalent to this definition.
//!
//! # Examples
//!
//! ```rust
//! use kindling::typeclass::Monad;
//!
//! fn parse_positive(s: &str) -> Option<i32> {
//!     s.parse::<i32>().ok().filter(|&n| n > 0)
//! }
//!
//! let result = Some("42")
//!     .flat_map(parse_positive)
//!     .flat_map(|n| Some(n * 2));
//! assert_eq!(result, Some(84));
//! ```

use super::functor::Functor;

/// A type class for containers that support sequencing of computations.
///
/// # Examples
///
/// ```rust
/// use kindling::typeclass::Monad;
///
/// let halved = Some(10).flat_map(|n| {
///     if n % 2 == 0 { Some(n / 2) } else { None }
/// });
/// assert_eq!(halved, Some(5));
/// ```
pub trait Monad: Functor {
    /// Lifts a value into the container.
    ///
    /// The type parameter is independent of `Self::Inner`, so the lifted
    /// value may be of any type: `<Option<()>>::pure(42)` is `Some(42)`.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Applies a container-returning function to the contained value and
    /// flattens the result.
    ///
    /// In Haskell this is `>>=`; in the standard library it is `and_then`
    /// on `Option` and `Result`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::typeclass::Monad;
    ///
    /// let y = Some(5).flat_map(|n| if n > 10 { Some(n) } else { None });
    /// assert_eq!(y, None);
    /// ```
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// The map operation derived from `pure` and `flat_map`.
    ///
    /// Note: `Option`, `Result`, and `Vec` all have an inherent `map` that
    /// shadows this one under method-call syntax; invoke it as
    /// `Monad::map(fa, f)` when the derived definition is wanted explicitly.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::typeclass::Monad;
    ///
    /// let doubled = Monad::map(Some(21), |n| n * 2);
    /// assert_eq!(doubled, Some(42));
    /// ```
    #[inline]
    fn map<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> B,
    {
        self.flat_map(|value| Self::pure(function(value)))
    }

    /// Alias for `flat_map` matching Rust's naming conventions.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two computations, discarding the first result.
    ///
    /// If `self` carries a failure (`None`, `Err`), the failure propagates
    /// and `next` is discarded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::typeclass::Monad;
    ///
    /// assert_eq!(Some(5).then(Some("hello")), Some("hello"));
    /// assert_eq!(None::<i32>.then(Some("hello")), None);
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

impl<A> Monad for Option<A> {
    #[inline]
    fn pure<B>(value: B) -> Option<B> {
        Some(value)
    }

    #[inline]
    fn flat_map<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> Option<B>,
    {
        // Absence short-circuits without invoking the continuation.
        Self::and_then(self, function)
    }
}

impl<T, E> Monad for Result<T, E> {
    #[inline]
    fn pure<B>(value: B) -> Result<B, E> {
        Ok(value)
    }

    #[inline]
    fn flat_map<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnOnce(T) -> Result<B, E>,
    {
        Self::and_then(self, function)
    }
}

/// Monad operations for `Vec`.
///
/// `Vec`'s instance represents non-deterministic computation: `flat_map`
/// applies a function to each element and concatenates the results in order.
/// The function must be `FnMut`, which the [`Monad`] trait's `FnOnce`
/// signature cannot express, hence the separate trait.
///
/// # Examples
///
/// ```rust
/// use kindling::typeclass::MonadVec;
///
/// let expanded = vec![1, 2, 3].flat_map(|n| vec![n, n * 10]);
/// assert_eq!(expanded, vec![1, 10, 2, 20, 3, 30]);
/// ```
pub trait MonadVec: Sized {
    /// The element type of the `Vec`.
    type VecInner;

    /// Lifts a value into a singleton sequence.
    #[inline]
    fn pure<B>(value: B) -> Vec<B> {
        vec![value]
    }

    /// Applies a sequence-returning function to each element and
    /// concatenates the results, preserving element order.
    fn flat_map<B, F>(self, function: F) -> Vec<B>
    where
        F: FnMut(Self::VecInner) -> Vec<B>;

    /// Alias for `flat_map` matching Rust's naming conventions.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Vec<B>
    where
        F: FnMut(Self::VecInner) -> Vec<B>,
    {
        self.flat_map(function)
    }

    /// Flattens a nested sequence one level.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::typeclass::MonadVec;
    ///
    /// let flat: Vec<i32> = vec![vec![1, 2], vec![3, 4]].flatten();
    /// assert_eq!(flat, vec![1, 2, 3, 4]);
    /// ```
    fn flatten<B>(self) -> Vec<B>
    where
        Self::VecInner: IntoIterator<Item = B>;
}

impl<A> MonadVec for Vec<A> {
    type VecInner = A;

    #[inline]
    fn flat_map<B, F>(self, function: F) -> Vec<B>
    where
        F: FnMut(A) -> Vec<B>,
    {
        self.into_iter().flat_map(function).collect()
    }

    fn flatten<B>(self) -> Vec<B>
    where
        A: IntoIterator<Item = B>,
    {
        self.into_iter().flat_map(IntoIterator::into_iter).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // =========================================================================
    // Option<A>
    // =========================================================================

    #[rstest]
    fn option_flat_map_some_to_some() {
        assert_eq!(Some(5).flat_map(|n| Some(n * 2)), Some(10));
    }

    #[rstest]
    fn option_flat_map_some_to_none() {
        let y = Some(-5).flat_map(|n| if n > 0 { Some(n * 2) } else { None });
        assert_eq!(y, None);
    }

    #[rstest]
    fn option_flat_map_none_skips_continuation() {
        let mut invoked = false;
        let x: Option<i32> = None;
        let y = x.flat_map(|n| {
            invoked = true;
            Some(n * 2)
        });
        assert_eq!(y, None);
        assert!(!invoked);
    }

    #[rstest]
    fn option_derived_map_agrees_with_fmap() {
        let samples = [Some(7), None];
        for sample in samples {
            assert_eq!(Monad::map(sample, |n| n + 1), sample.fmap(|n| n + 1));
        }
    }

    #[rstest]
    fn option_then_propagates_absence() {
        assert_eq!(Some(5).then(Some("hello")), Some("hello"));
        assert_eq!(None::<i32>.then(Some("hello")), None);
    }

    // =========================================================================
    // Result<T, E>
    // =========================================================================

    #[rstest]
    fn result_flat_map_ok_to_err() {
        let x: Result<i32, &str> = Ok(-5);
        let y = x.flat_map(|n| if n > 0 { Ok(n * 2) } else { Err("negative") });
        assert_eq!(y, Err("negative"));
    }

    #[rstest]
    fn result_flat_map_err_short_circuits() {
        let x: Result<i32, &str> = Err("initial error");
        assert_eq!(x.flat_map(|n| Ok(n * 2)), Err("initial error"));
    }

    #[rstest]
    fn result_derived_map_agrees_with_fmap() {
        let ok: Result<i32, &str> = Ok(20);
        let err: Result<i32, &str> = Err("broken");
        assert_eq!(Monad::map(ok, |n| n + 1), ok.fmap(|n| n + 1));
        assert_eq!(Monad::map(err, |n| n + 1), err.fmap(|n| n + 1));
    }

    // =========================================================================
    // Vec<A>
    // =========================================================================

    #[rstest]
    fn vec_flat_map_expands_in_order() {
        let result = vec![1, 2].flat_map(|n| vec![n, n * 10]);
        assert_eq!(result, vec![1, 10, 2, 20]);
    }

    #[rstest]
    fn vec_flat_map_empty_input() {
        let empty: Vec<i32> = vec![];
        assert!(empty.flat_map(|n| vec![n]).is_empty());
    }

    #[rstest]
    fn vec_flat_map_can_drop_elements() {
        let result = vec![1, 2, 3, 4].flat_map(|n| if n % 2 == 0 { vec![n] } else { vec![] });
        assert_eq!(result, vec![2, 4]);
    }

    #[rstest]
    fn vec_pure_is_singleton() {
        assert_eq!(Vec::<i32>::pure(9), vec![9]);
    }

    #[rstest]
    fn vec_flatten_nested() {
        let flat: Vec<i32> = vec![vec![1, 2], vec![], vec![3]].flatten();
        assert_eq!(flat, vec![1, 2, 3]);
    }

    // =========================================================================
    // Law spot checks (the laws module covers these generically)
    // =========================================================================

    #[rstest]
    fn option_left_identity_law() {
        let function = |n: i32| Some(n * 2);
        let left: Option<i32> = <Option<()>>::pure(5).flat_map(function);
        assert_eq!(left, function(5));
    }

    #[rstest]
    fn option_right_identity_law() {
        for monad in [Some(42), None] {
            assert_eq!(monad.flat_map(|x| <Option<()>>::pure(x)), monad);
        }
    }

    #[rstest]
    fn vec_associativity_law() {
        let monad = vec![1, 2];
        let function1 = |n: i32| vec![n, n + 10];
        let function2 = |n: i32| vec![n, n * 100];

        let left: Vec<i32> = monad.clone().flat_map(function1).flat_map(function2);
        let right: Vec<i32> = monad.flat_map(|x| function1(x).flat_map(function2));

        assert_eq!(left, right);
    }
}
