/// Times any expression in place, yielding the same `(value, duration)` pair
/// as `time_it`. Blocks are expressions too, so multi-statement bodies work.
#[macro_export]
macro_rules! time_it {
    ($e:expr) => {{
        $crate::time_it(|| $e)
    }};
}
