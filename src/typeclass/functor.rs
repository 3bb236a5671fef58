//! Functor type class - mapping over a container without leaving it.
//!
//! # Laws
//!
//! All `Functor` implementations must satisfy:
//!
//! - **Identity**: `fa.fmap(|x| x) == fa`
//! - **Composition**: `fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))`
//!
//! Containers implementing [`Monad`](super::Monad) additionally keep `fmap`
//! observationally equivalent to the derived `map` built from `pure` and
//! `flat_map`.

use super::higher::TypeConstructor;

/// A type class for containers whose contents can be transformed in place.
///
/// `fmap` takes the function by `FnOnce`, which fits containers holding at
/// most one value (`Option`, `Result`). Containers with many elements use
/// [`FunctorMut`] instead.
///
/// # Examples
///
/// ```rust
/// use kindling::typeclass::Functor;
///
/// let length: Option<usize> = Some("hello").fmap(|s| s.len());
/// assert_eq!(length, Some(5));
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to the contained value, if any.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Replaces the contained value with a constant, keeping the shape.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::typeclass::Functor;
    ///
    /// assert_eq!(Some(5).replace("replaced"), Some("replaced"));
    /// assert_eq!(None::<i32>.replace("replaced"), None);
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the contained value, keeping only the shape.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

/// Functor for containers with any number of elements.
///
/// Mapping over a `Vec` calls the function once per element, which `FnOnce`
/// cannot express; this trait requires `FnMut` instead.
///
/// # Examples
///
/// ```rust
/// use kindling::typeclass::FunctorMut;
///
/// let doubled: Vec<i32> = vec![1, 2, 3].fmap_mut(|n| n * 2);
/// assert_eq!(doubled, vec![2, 4, 6]);
/// ```
pub trait FunctorMut: TypeConstructor {
    /// Applies a function to every element, preserving order.
    fn fmap_mut<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> B;
}

impl<A> Functor for Option<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }
}

impl<T, E> Functor for Result<T, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }
}

impl<T> FunctorMut for Vec<T> {
    #[inline]
    fn fmap_mut<B, F>(self, function: F) -> Vec<B>
    where
        F: FnMut(T) -> B,
    {
        self.into_iter().map(function).collect()
    }
}
