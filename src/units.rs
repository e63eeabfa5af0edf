use std::time::Duration;

pub trait ToMilliseconds {
    fn to_ms(&self) -> f64;
}

impl ToMilliseconds for Duration {
    fn to_ms(&self) -> f64 {
        (self.as_secs() as f64 * 1_000f64) + (f64::from(self.subsec_nanos()) / 1_000_000f64)
    }
}

pub trait ToSeconds {
    fn to_secs(&self) -> f64;
}

impl ToSeconds for Duration {
    fn to_secs(&self) -> f64 {
        self.as_secs() as f64 + (f64::from(self.subsec_nanos()) / 1_000_000_000f64)
    }
}

/// Elapsed seconds as a plain float, convertible to and from `Duration`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Secs(pub f64);

impl From<Duration> for Secs {
    fn from(d: Duration) -> Secs {
        Secs(d.to_secs())
    }
}

impl From<Secs> for Duration {
    fn from(secs: Secs) -> Duration {
        let Secs(secs) = secs;
        let duration = Duration::from_secs(secs.trunc() as u64);
        let nanos = (secs.fract() * 1_000_000_000f64) as u32;
        duration + Duration::new(0, nanos)
    }
}
