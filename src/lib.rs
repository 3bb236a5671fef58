//! # kindling
//!
//! Functor and Monad type classes for Rust, together with a law-checking
//! harness and four worked instances: `Option`, `Vec`, a `Reader` for
//! context-dependent computation, and a `Deferred` asynchronous computation
//! with a rejection channel.
//!
//! ## Overview
//!
//! Rust has no native higher-kinded types, but Generic Associated Types are
//! enough to abstract over type constructors. This crate builds on that:
//!
//! - **Type Classes**: [`typeclass::TypeConstructor`], [`typeclass::Functor`],
//!   [`typeclass::Monad`] plus the `Vec`-specific [`typeclass::FunctorMut`]
//!   and [`typeclass::MonadVec`]
//! - **Effects**: [`effect::Reader`] (dependency injection) and
//!   [`effect::Deferred`] (deferred async computation with rejection)
//! - **Laws**: [`laws`] checks left identity, right identity, and
//!   associativity for any instance, with an explicit equality strategy
//!
//! ## Feature Flags
//!
//! - `typeclass`: type class traits and container instances
//! - `effect`: the `Reader` monad
//! - `async`: the `Deferred` monad (pulls in tokio)
//!
//! ## Example
//!
//! ```rust
//! use kindling::typeclass::Monad;
//! use kindling::laws::{self, Structural};
//!
//! // Chain computations that can fail.
//! let parsed = Some("42").flat_map(|s| s.parse::<i32>().ok());
//! assert_eq!(parsed, Some(42));
//!
//! // Verify the monad laws for a sample, naming the equality strategy.
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

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use kindling::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "typeclass")]
    pub use crate::laws::{Equivalence, LawViolation, MonadLaw, SampledContexts, Structural};

    #[cfg(feature = "effect")]
    pub use crate::effect::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "typeclass")]
pub mod laws;

#[cfg(feature = "effect")]
pub mod effect;
