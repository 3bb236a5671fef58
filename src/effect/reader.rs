//! Reader monad - computation awaiting an injected context.
//!
//! A `Reader<Ctx, A>` wraps a function `Ctx -> A`. Composing readers with
//! `flat_map` threads one context value through every step implicitly; the
//! context is supplied exactly once, when the composed computation is run.
//! This is the classic dependency-injection pattern: operations name what
//! they need from the context without receiving it as an argument.
//!
//! # Laws
//!
//! Reader satisfies the Functor and Monad laws under extensional equality
//! (equal outputs for all contexts; in practice, sampled contexts):
//!
//! - Left identity: `Reader::pure(a).flat_map(f) == f(a)`
//! - Right identity: `m.flat_map(Reader::pure) == m`
//! - Associativity: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
//!
//! plus the reader-specific laws:
//!
//! - `Reader::local(|c| c, m) == m`
//! - `Reader::local(f, Reader::local(g, m)) == Reader::local(|c| g(f(c)), m)`
//! - `Reader::ask().run(c) == c`
//!
//! # Examples
//!
//! ```rust
//! use kindling::effect::Reader;
//!
//! #[derive(Clone)]
//! struct Config {
//!     host: String,
//!     port: u16,
//! }
//!
//! fn host() -> Reader<Config, String> {
//!     Reader::asks(|config: Config| config.host)
//! }
//!
//! fn address() -> Reader<Config, String> {
//!     host().flat_map(|name| {
//!         Reader::asks(move |config: Config| format!("{}:{}", name, config.port))
//!     })
//! }
//!
//! let config = Config { host: "localhost".to_string(), port: 8080 };
//! assert_eq!(address().run(config), "localhost:8080");
//! ```

use std::rc::Rc;

/// A computation that produces an `A` once a context of type `Ctx` is
/// supplied.
///
/// The context is immutable from the reader's point of view and is forwarded
/// unchanged to every composed step. There is no failure channel: a panic
/// inside a composed function surfaces directly at [`run`](Reader::run).
///
/// # Examples
///
/// ```rust
/// use kindling::effect::Reader;
///
/// let computation: Reader<i32, i32> = Reader::ask()
///     .flat_map(|context| Reader::pure(context * 2));
///
/// assert_eq!(computation.run(21), 42);
/// ```
pub struct Reader<Ctx, A>
where
    Ctx: 'static,
    A: 'static,
{
    /// The wrapped function. `Rc` lets a Reader be cloned into the closures
    /// that `flat_map` and friends build.
    run_function: Rc<dyn Fn(Ctx) -> A>,
}

impl<Ctx, A> Reader<Ctx, A>
where
    Ctx: 'static,
    A: 'static,
{
    /// Wraps a function as a Reader.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::effect::Reader;
    ///
    /// let double: Reader<i32, i32> = Reader::new(|context| context * 2);
    /// assert_eq!(double.run(21), 42);
    /// ```
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(Ctx) -> A + 'static,
    {
        Self {
            run_function: Rc::new(function),
        }
    }

    /// Supplies the context and produces the result.
    ///
    /// A Reader can be run any number of times, with the same context or
    /// different ones.
    pub fn run(&self, context: Ctx) -> A {
        (self.run_function)(context)
    }

    /// A Reader that returns a constant, ignoring the context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::effect::Reader;
    ///
    /// let constant: Reader<i32, &str> = Reader::pure("always");
    /// assert_eq!(constant.run(0), "always");
    /// assert_eq!(constant.run(100), "always");
    /// ```
    pub fn pure(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |_| value.clone())
    }

    /// Transforms the result of this Reader.
    pub fn fmap<B, F>(self, function: F) -> Reader<Ctx, B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        let source = self.run_function;
        Reader::new(move |context| function((source)(context)))
    }

    /// Chains this Reader with a function producing the next Reader.
    ///
    /// Running the result supplies the same context to both stages:
    /// `fa.flat_map(f).run(c)` equals `f(fa.run(c)).run(c)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::effect::Reader;
    ///
    /// let chained = Reader::new(|context: i32| context)
    ///     .flat_map(|value| Reader::new(move |context| value + context));
    /// assert_eq!(chained.run(10), 20);
    /// ```
    pub fn flat_map<B, F>(self, function: F) -> Reader<Ctx, B>
    where
        F: Fn(A) -> Reader<Ctx, B> + 'static,
        B: 'static,
        Ctx: Clone,
    {
        let source = self.run_function;
        Reader::new(move |context: Ctx| {
            let value = (source)(context.clone());
            function(value).run(context)
        })
    }

    /// Alias for `flat_map` matching Rust's naming conventions.
    pub fn and_then<B, F>(self, function: F) -> Reader<Ctx, B>
    where
        F: Fn(A) -> Reader<Ctx, B> + 'static,
        B: 'static,
        Ctx: Clone,
    {
        self.flat_map(function)
    }

    /// Sequences two Readers, discarding the first result.
    #[must_use]
    pub fn then<B>(self, next: Reader<Ctx, B>) -> Reader<Ctx, B>
    where
        B: 'static,
        Ctx: Clone,
    {
        self.flat_map(move |_| next.clone())
    }

    /// Combines two Readers with a binary function, running both against
    /// the same context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::effect::Reader;
    ///
    /// let identity: Reader<i32, i32> = Reader::new(|context| context);
    /// let doubled: Reader<i32, i32> = Reader::new(|context| context * 2);
    /// let sum = identity.map2(doubled, |a, b| a + b);
    /// assert_eq!(sum.run(10), 30);
    /// ```
    pub fn map2<B, C, F>(self, other: Reader<Ctx, B>, function: F) -> Reader<Ctx, C>
    where
        F: Fn(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
        Ctx: Clone,
    {
        let first = self.run_function;
        let second = other.run_function;
        Reader::new(move |context: Ctx| {
            let a = (first)(context.clone());
            let b = (second)(context);
            function(a, b)
        })
    }

    /// Combines two Readers into a tuple.
    #[must_use]
    pub fn product<B>(self, other: Reader<Ctx, B>) -> Reader<Ctx, (A, B)>
    where
        B: 'static,
        Ctx: Clone,
    {
        self.map2(other, |a, b| (a, b))
    }
}

impl<Ctx> Reader<Ctx, Ctx>
where
    Ctx: Clone + 'static,
{
    /// A Reader that returns the entire context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::effect::Reader;
    ///
    /// let ask: Reader<i32, i32> = Reader::ask();
    /// assert_eq!(ask.run(42), 42);
    /// ```
    #[must_use]
    pub fn ask() -> Self {
        Self::new(|context| context)
    }
}

impl<Ctx, A> Reader<Ctx, A>
where
    Ctx: 'static,
    A: 'static,
{
    /// A Reader that projects a value out of the context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::effect::Reader;
    ///
    /// let as_string: Reader<i32, String> = Reader::asks(|context: i32| context.to_string());
    /// assert_eq!(as_string.run(42), "42");
    /// ```
    pub fn asks<F>(projection: F) -> Self
    where
        F: Fn(Ctx) -> A + 'static,
    {
        Self::new(projection)
    }

    /// Runs a computation with a locally modified context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::effect::Reader;
    ///
    /// let double: Reader<i32, i32> = Reader::new(|context| context * 2);
    /// let shifted = Reader::local(|context| context + 10, double);
    /// assert_eq!(shifted.run(5), 30);
    /// ```
    pub fn local<F>(modifier: F, computation: Self) -> Self
    where
        F: Fn(Ctx) -> Ctx + 'static,
    {
        let inner = computation.run_function;
        Self::new(move |context| (inner)(modifier(context)))
    }
}

impl<Ctx, A> Clone for Reader<Ctx, A>
where
    Ctx: 'static,
    A: 'static,
{
    fn clone(&self) -> Self {
        Self {
            run_function: self.run_function.clone(),
        }
    }
}

impl<Ctx, A> std::fmt::Display for Reader<Ctx, A>
where
    Ctx: 'static,
    A: 'static,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "<Reader>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn reader_new_and_run() {
        let reader: Reader<i32, i32> = Reader::new(|context| context * 2);
        assert_eq!(reader.run(21), 42);
    }

    #[rstest]
    fn reader_runs_repeatedly() {
        let reader: Reader<i32, i32> = Reader::new(|context| context + 1);
        assert_eq!(reader.run(41), 42);
        assert_eq!(reader.run(0), 1);
    }

    #[rstest]
    fn reader_pure_ignores_context() {
        let reader: Reader<i32, &str> = Reader::pure("constant");
        assert_eq!(reader.run(0), "constant");
        assert_eq!(reader.run(100), "constant");
    }

    #[rstest]
    fn reader_ask_returns_context() {
        let reader: Reader<i32, i32> = Reader::ask();
        assert_eq!(reader.run(42), 42);
    }

    #[rstest]
    fn reader_asks_projects_context() {
        let reader: Reader<i32, String> = Reader::asks(|context: i32| context.to_string());
        assert_eq!(reader.run(42), "42");
    }

    #[rstest]
    fn reader_fmap_transforms_result() {
        let reader: Reader<i32, i32> = Reader::new(|context| context);
        assert_eq!(reader.fmap(|value| value * 2).run(21), 42);
    }

    #[rstest]
    fn reader_flat_map_forwards_the_same_context() {
        let reader: Reader<i32, i32> = Reader::new(|context| context);
        let chained = reader.flat_map(|value| Reader::new(move |context| value + context));
        assert_eq!(chained.run(10), 20);
    }

    #[rstest]
    fn reader_local_modifies_context_for_inner_computation() {
        let reader: Reader<i32, i32> = Reader::new(|context| context * 2);
        let shifted = Reader::local(|context| context + 10, reader);
        assert_eq!(shifted.run(5), 30);
    }

    #[rstest]
    fn reader_map2_combines_results() {
        let first: Reader<i32, i32> = Reader::new(|context| context);
        let second: Reader<i32, i32> = Reader::new(|context| context * 2);
        assert_eq!(first.map2(second, |a, b| a + b).run(10), 30);
    }

    #[rstest]
    fn reader_product_pairs_results() {
        let first: Reader<i32, i32> = Reader::new(|context| context);
        let second: Reader<i32, &str> = Reader::pure("hello");
        assert_eq!(first.product(second).run(42), (42, "hello"));
    }

    #[rstest]
    fn reader_then_discards_first_result() {
        let first: Reader<i32, i32> = Reader::new(|context| context);
        let second: Reader<i32, &str> = Reader::pure("result");
        assert_eq!(first.then(second).run(42), "result");
    }

    #[rstest]
    fn reader_clone_shares_the_function() {
        let reader: Reader<i32, i32> = Reader::new(|context| context * 2);
        let cloned = reader.clone();
        assert_eq!(reader.run(21), 42);
        assert_eq!(cloned.run(21), 42);
    }

    #[rstest]
    fn reader_display_is_opaque() {
        let reader: Reader<i32, i32> = Reader::new(|context| context);
        assert_eq!(format!("{reader}"), "<Reader>");
    }
}
