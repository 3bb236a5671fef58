//! Type class traits built on emulated higher-kinded types.
//!
//! Rust cannot abstract over a bare type constructor such as `Option<_>`,
//! so the traits here lean on Generic Associated Types instead:
//! [`TypeConstructor`] names the inner type of a container and the same
//! container re-applied to another type, and [`Functor`] / [`Monad`] are
//! written once against that vocabulary.
//!
//! `Vec` gets its own [`FunctorMut`] and [`MonadVec`] traits because mapping
//! over many elements needs `FnMut`, while the single-shot containers take
//! `FnOnce`.
//!
//! # Examples
//!
//! ```rust
//! use kindling::typeclass::{Monad, MonadVec};
//!
//! // Option chains with short-circuit on absence.
//! let present = Some(2).flat_map(|n| Some(n * 10));
//! assert_eq!(present, Some(20));
//!
//! // Vec's flat_map is an order-preserving concat-map.
//! let expanded = vec![1, 2].flat_map(|n| vec![n, n * 10]);
//! assert_eq!(expanded, vec![1, 10, 2, 20]);
//!
//! // map is derived from pure and flat_map; call it through the trait,
//! // since the containers' inherent map methods shadow it.
//! let doubled = Monad::map(Some(21), |n| n * 2);
//! assert_eq!(doubled, Some(42));
//! ```

mod functor;
mod higher;
mod monad;

pub use functor::{Functor, FunctorMut};
pub use higher::TypeConstructor;
pub use monad::{Monad, MonadVec};
