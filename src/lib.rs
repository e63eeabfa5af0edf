//! A small function timing utility: hand it a callable, get back the
//! callable's result paired with how long the call took on the monotonic
//! clock. Failures from the callable propagate untouched; the wrapper never
//! catches, retries, or transforms them, and produces no timing on failure.
//!
//! ```
//! use clockit::time_it;
//!
//! let (value, duration) = time_it(|| 40 + 2);
//! assert_eq!(value, 42);
//! println!("took {:?}", duration);
//! ```

#[macro_use]
extern crate log;

#[macro_use]
mod macros;

pub mod measure;
pub mod timed;
pub mod units;

pub use measure::{log_time_it, time_it, time_it_secs, try_time_it, wrap};
pub use timed::Timed;
pub use units::{Secs, ToMilliseconds, ToSeconds};
