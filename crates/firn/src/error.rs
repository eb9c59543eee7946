pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All error variants that `firn` can emit.
///
/// ID production fails only when the wall clock runs behind the generator's
/// last observed tick. Sequence exhaustion within a tick is absorbed by the
/// generator (it waits for the next millisecond) and is never reported as an
/// error.
#[derive(Clone, Copy, thiserror::Error, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Error {
    /// The clock reported an instant earlier than the last tick an ID was
    /// produced for.
    ///
    /// Producing an ID against a rewound clock could duplicate or reorder
    /// identifiers, so the call is refused with the generator state left
    /// untouched. Retry policy belongs to the caller; once the clock catches
    /// up, generation resumes normally.
    #[error("clock moved backwards: last tick at {last} ms, clock reports {now} ms")]
    ClockMovedBackwards {
        /// Milliseconds of the last tick an ID was produced for.
        last: i64,
        /// Milliseconds reported by the clock for this call.
        now: i64,
    },

    /// No usable non-loopback IPv4 address was found while deriving a
    /// fallback identity byte.
    ///
    /// Covers both a loopback-only host and a failed interface enumeration.
    /// The caller must fall back to an explicitly configured identity.
    #[error("no non-loopback IPv4 address found")]
    NoAddressFound,

    /// An identity component passed to a strict constructor exceeds its bit
    /// width.
    ///
    /// Only returned by [`FirnGenerator::new_strict`]; the masking
    /// constructors accept any input.
    ///
    /// [`FirnGenerator::new_strict`]: crate::FirnGenerator::new_strict
    #[error("{field} {value} is outside the valid range 0..={max}")]
    InvalidIdentity {
        /// Name of the offending component.
        field: &'static str,
        /// The rejected input value.
        value: i64,
        /// Largest value the component's bit field can hold.
        max: i64,
    },
}
