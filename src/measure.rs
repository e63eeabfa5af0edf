use std::fmt;
use std::time::{Duration, Instant};

use units::{ToMilliseconds, ToSeconds};

/// Times a single invocation of a callable. The callable is invoked exactly
/// once and its return value comes back paired with how long it took. The
/// clock is `Instant`, so the duration is monotonic and never negative.
///
/// A panic inside the callable unwinds straight through; no pair is produced.
pub fn time_it<F, U>(f: F) -> (U, Duration)
where
    F: FnOnce() -> U,
{
    let start = Instant::now();
    (f(), start.elapsed())
}

/// Like `time_it` but renders the elapsed time as floating point seconds.
pub fn time_it_secs<F, U>(f: F) -> (U, f64)
where
    F: FnOnce() -> U,
{
    let (value, duration) = time_it(f);
    (value, duration.to_secs())
}

/// Times a fallible callable. An `Ok` value comes back paired with the
/// elapsed time; an `Err` propagates unchanged and no timing is produced.
pub fn try_time_it<F, T, E>(f: F) -> Result<(T, Duration), E>
where
    F: FnOnce() -> Result<T, E>,
{
    let start = Instant::now();
    f().map(|value| (value, start.elapsed()))
}

/// Wraps a callable in a new callable that times every invocation. The
/// returned closure forwards its argument untouched and yields the same
/// pair `time_it` would. Callables of several arguments take a tuple.
pub fn wrap<F, A, U>(f: F) -> impl Fn(A) -> (U, Duration)
where
    F: Fn(A) -> U,
{
    move |args| time_it(|| f(args))
}

/// Times a callable and reports the label and elapsed milliseconds at info
/// level. Nothing is emitted unless the host program installs a logger, and
/// the returned pair is the same either way.
pub fn log_time_it<S, F, U>(label: S, f: F) -> (U, Duration)
where
    S: fmt::Display,
    F: FnOnce() -> U,
{
    let (value, duration) = time_it(f);
    info!("{} took {} ms", label, duration.to_ms());
    (value, duration)
}


#[cfg(test)]
mod try_time_it_tests {
    use super::*;

    fn parse(input: &str) -> Result<u32, ::std::num::ParseIntError> {
        input.parse::<u32>()
    }

    #[test]
    fn it_times_the_ok_case() {
        let timed = try_time_it(|| parse("42"));
        let (value, duration) = timed.expect("42 parses");
        assert_eq!(value, 42);
        assert!(duration < Duration::from_secs(1));
    }

    #[test]
    fn it_passes_the_error_through_without_a_timing() {
        let direct = parse("not a number").unwrap_err();
        let through_wrapper = try_time_it(|| parse("not a number")).unwrap_err();
        assert_eq!(direct, through_wrapper);
    }
}


#[cfg(test)]
mod log_time_it_tests {
    use super::*;

    #[test]
    fn it_still_returns_the_pair() {
        let (value, duration) = log_time_it("answer", || 42);
        assert_eq!(value, 42);
        assert!(duration < Duration::from_secs(1));
    }
}
