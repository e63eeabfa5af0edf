use std::fmt;
use std::time::Duration;

use measure::time_it;

/// A callable bundled with the identity of the function it stands in for.
/// Rust closures carry no name or documentation of their own, so the wrapper
/// keeps both alongside the callable and exposes them to introspection.
pub struct Timed<F> {
    name: &'static str,
    doc: Option<&'static str>,
    f: F,
}

impl<F> Timed<F> {
    pub fn new(name: &'static str, f: F) -> Timed<F> {
        Timed { name, doc: None, f }
    }

    pub fn with_doc(mut self, doc: &'static str) -> Self {
        self.doc = Some(doc);
        self
    }

    pub fn name(&self) -> &str {
        self.name
    }

    pub fn doc(&self) -> Option<&str> {
        self.doc
    }

    /// Invokes the callable with the given argument and times it. Several
    /// arguments travel as a tuple, the same convention `measure::wrap` uses.
    pub fn call<A, U>(&self, args: A) -> (U, Duration)
    where
        F: Fn(A) -> U,
    {
        let f = &self.f;
        time_it(|| f(args))
    }

    /// Consuming form for callables that can only run once.
    pub fn call_once<A, U>(self, args: A) -> (U, Duration)
    where
        F: FnOnce(A) -> U,
    {
        let f = self.f;
        time_it(|| f(args))
    }
}

impl<F> fmt::Debug for Timed<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Timed")
            .field("name", &self.name)
            .field("doc", &self.doc)
            .finish()
    }
}

impl<F> fmt::Display for Timed<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
