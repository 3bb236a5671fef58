//! Function-shaped monads: context-dependent and deferred computation.
//!
//! The containers in [`typeclass`](crate::typeclass) hold values; the types
//! here hold computations. [`Reader`] wraps a function waiting for a context
//! (dependency injection), and [`Deferred`] wraps an asynchronous computation
//! that resolves or rejects later.
//!
//! Both provide `pure`, `fmap`, and `flat_map` as inherent methods rather
//! than through the [`Monad`](crate::typeclass::Monad) trait: the trait's
//! `FnOnce` signatures cannot carry the `Fn + 'static` bound a `Reader`
//! needs to be runnable many times, nor the `Send + 'static` bound a
//! `Deferred` continuation needs to cross an await point. The operations
//! satisfy the same laws, and [`laws::reader`](crate::laws::reader) /
//! [`laws::deferred`](crate::laws::deferred) check them.

mod reader;

#[cfg(feature = "async")]
mod deferred;

pub use reader::Reader;

#[cfg(feature = "async")]
pub use deferred::{Deferred, Rejection};
