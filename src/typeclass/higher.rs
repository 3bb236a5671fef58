//! Emulated higher-kinded types via Generic Associated Types.
//!
//! A language with native higher-kinded types would let `Monad` take the bare
//! constructor `F<_>` as a parameter. Rust cannot, so each container tells us
//! two things instead: which type it currently holds, and what "the same
//! container holding something else" looks like. That pair is exactly enough
//! to state Functor and Monad generically, with nothing left over at runtime:
//! there is no witness value and no cast, only associated types.

/// A trait standing in for a type constructor.
///
/// An implementor is understood as some constructor `F` applied to an
/// argument: `Option<i32>` is `Option<_>` applied to `i32`. The associated
/// types recover both halves of that application.
///
/// # Laws
///
/// 1. **Consistency**: `F::WithType<F::Inner>` is the same type as `F`.
/// 2. **Stability**: `WithType` only swaps the type argument; it never
///    changes the constructor (e.g. `Result` keeps its error type).
///
/// # Examples
///
/// ```rust
/// use kindling::typeclass::TypeConstructor;
///
/// fn swap_argument<F>(_: &F) -> F::WithType<String>
/// where
///     F: TypeConstructor,
///     F::WithType<String>: Default,
/// {
///     Default::default()
/// }
///
/// let empty: Option<String> = swap_argument(&Some(42));
/// assert_eq!(empty, None);
/// ```
pub trait TypeConstructor {
    /// The type argument this constructor is currently applied to.
    type Inner;

    /// The same constructor applied to `B` instead.
    ///
    /// The bound keeps the result usable as a constructor in its own right,
    /// so transformations can be chained at the type level.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}

impl<T, E> TypeConstructor for Result<T, E> {
    type Inner = T;
    type WithType<B> = Result<B, E>;
}

impl<T> TypeConstructor for Vec<T> {
    type Inner = T;
    type WithType<B> = Vec<B>;
}
