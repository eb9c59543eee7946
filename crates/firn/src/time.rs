use std::time::{SystemTime, UNIX_EPOCH};

/// Default epoch: Thursday, November 18, 2021 00:00:00 UTC, in milliseconds
/// since the Unix epoch.
///
/// The epoch is the zero-point of every ID's timestamp field. Every generator
/// in a fleet must share the same epoch for its IDs to be comparable by
/// creation order.
pub const DEFAULT_EPOCH: i64 = 1_637_193_600_000;

/// A source of wall-clock timestamps in milliseconds since the Unix epoch.
///
/// This abstraction lets you plug in the real system clock or a mocked time
/// source in tests. Implementations are free to return a value smaller than a
/// previous reading; the generator detects that condition and refuses to
/// produce an ID for it.
///
/// # Example
///
/// ```
/// use firn::TimeSource;
///
/// struct FixedTime;
/// impl TimeSource for FixedTime {
///     fn current_millis(&self) -> i64 {
///         1234
///     }
/// }
///
/// let time = FixedTime;
/// assert_eq!(time.current_millis(), 1234);
/// ```
pub trait TimeSource {
    /// Returns the current time in milliseconds since the Unix epoch.
    fn current_millis(&self) -> i64;
}

/// The wall-clock time source backed by [`SystemTime`].
///
/// Reads the system clock on every call. Unlike a monotonic timer, the value
/// can move backwards under NTP corrections or manual clock changes; the
/// generator surfaces that as [`Error::ClockMovedBackwards`] rather than
/// papering over it, which is what makes duplicate IDs across a rewind
/// impossible.
///
/// [`Error::ClockMovedBackwards`]: crate::Error::ClockMovedBackwards
#[derive(Clone, Copy, Debug, Default)]
pub struct UnixClock;

impl TimeSource for UnixClock {
    fn current_millis(&self) -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system clock before UNIX_EPOCH")
            .as_millis() as i64
    }
}
