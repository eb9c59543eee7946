use std::sync::Arc;

use parking_lot::Mutex;
#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{
    error::{Error, Result},
    id::FirnId,
    time::{DEFAULT_EPOCH, TimeSource},
};


/// Mutable generator state. Only ever touched while holding the lock.
struct FirnState {
    /// Last millisecond an ID was produced for.
    last_millis: i64,
    /// IDs produced within `last_millis` so far.
    sequence: i64,
}

/// A lock-based ID generator bound to one node identity.
///
/// The generator owns the mutable sequencing state behind an
/// [`Arc<Mutex<_>>`], so it can be shared across threads; every call to
/// [`next_id`] runs the full production algorithm under that one lock.
/// Cloning is cheap and clones share the sequencing state, which keeps the
/// uniqueness guarantee intact when one logical node identity is handed to
/// many threads.
///
/// The identity pair is masked to its bit widths on construction and is
/// immutable afterwards. Two generators with distinct `(worker, data-center)`
/// pairs and a shared epoch never produce colliding IDs.
///
/// # Example
/// ```
/// use firn::{FirnGenerator, UnixClock};
///
/// let generator = FirnGenerator::new(1, 1, UnixClock);
/// let a = generator.next_id().expect("clock is sane");
/// let b = generator.next_id().expect("clock is sane");
/// assert!(b > a);
/// ```
///
/// [`next_id`]: FirnGenerator::next_id
pub struct FirnGenerator<T>
where
    T: TimeSource,
{
    state: Arc<Mutex<FirnState>>,
    worker_id: i64,
    data_center_id: i64,
    epoch_millis: i64,
    time: T,
}

impl<T> Clone for FirnGenerator<T>
where
    T: TimeSource + Clone,
{
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            worker_id: self.worker_id,
            data_center_id: self.data_center_id,
            epoch_millis: self.epoch_millis,
            time: self.time.clone(),
        }
    }
}

impl<T> FirnGenerator<T>
where
    T: TimeSource,
{
    /// Creates a generator for the given node identity, using
    /// [`DEFAULT_EPOCH`] as the timestamp zero-point.
    ///
    /// Both identity values are masked to their bit widths: a `worker_id` of
    /// `256` becomes `0`, a `data_center_id` of `17` becomes `1`. This
    /// mirrors the permissive construction contract of the classic Snowflake
    /// worker; callers that want out-of-range inputs rejected instead should
    /// use [`Self::new_strict`].
    ///
    /// # Parameters
    ///
    /// - `worker_id`: node identity within a data center, assigned by fleet
    ///   configuration. Valid range `0..=255`.
    /// - `data_center_id`: data-center identity, assigned by fleet
    ///   configuration. Valid range `0..=15`.
    /// - `time`: a [`TimeSource`] (e.g. [`UnixClock`]) consulted on every
    ///   [`Self::next_id`] call.
    ///
    /// [`UnixClock`]: crate::UnixClock
    pub fn new(worker_id: i64, data_center_id: i64, time: T) -> Self {
        Self::with_epoch(worker_id, data_center_id, DEFAULT_EPOCH, time)
    }

    /// Creates a generator with a custom epoch, in milliseconds since the
    /// Unix epoch.
    ///
    /// The epoch must be identical across every generator in a fleet whose
    /// IDs need to be comparable by creation order. Identity values are
    /// masked exactly as in [`Self::new`].
    pub fn with_epoch(worker_id: i64, data_center_id: i64, epoch_millis: i64, time: T) -> Self {
        Self {
            state: Arc::new(Mutex::new(FirnState {
                last_millis: 0,
                sequence: 0,
            })),
            worker_id: worker_id & FirnId::WORKER_ID_MASK,
            data_center_id: data_center_id & FirnId::DATA_CENTER_ID_MASK,
            epoch_millis,
            time,
        }
    }

    /// Creates a generator, rejecting identity values that exceed their bit
    /// widths.
    ///
    /// The fail-fast counterpart to [`Self::new`] for callers that prefer a
    /// configuration error over silent wrapping.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIdentity`] when `worker_id` is outside
    /// `0..=255` or `data_center_id` is outside `0..=15`.
    pub fn new_strict(worker_id: i64, data_center_id: i64, time: T) -> Result<Self> {
        if worker_id < 0 || worker_id > FirnId::max_worker_id() {
            return Err(Error::InvalidIdentity {
                field: "worker ID",
                value: worker_id,
                max: FirnId::max_worker_id(),
            });
        }
        if data_center_id < 0 || data_center_id > FirnId::max_data_center_id() {
            return Err(Error::InvalidIdentity {
                field: "data-center ID",
                value: data_center_id,
                max: FirnId::max_data_center_id(),
            });
        }
        Ok(Self::new(worker_id, data_center_id, time))
    }

    /// Returns the effective (masked) worker ID.
    pub fn worker_id(&self) -> i64 {
        self.worker_id
    }

    /// Returns the effective (masked) data-center ID.
    pub fn data_center_id(&self) -> i64 {
        self.data_center_id
    }

    /// Returns the epoch this generator measures timestamps from, in
    /// milliseconds since the Unix epoch.
    pub fn epoch_millis(&self) -> i64 {
        self.epoch_millis
    }

    /// Produces the next ID.
    ///
    /// Safe to call from any number of threads; callers serialize on the
    /// generator's internal lock, and the whole algorithm runs under it.
    ///
    /// When the per-millisecond sequence space (1024 IDs) is exhausted, the
    /// call spins on the clock (holding the lock) until
    /// the next tick rather than failing. The wait is bounded by the distance
    /// to the next millisecond boundary, so it is sub-millisecond in
    /// practice; during it, other callers block on the lock. That trades a
    /// brief burst of CPU for the lowest possible latency under overload.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ClockMovedBackwards`] when the time source reports an
    /// instant earlier than the last tick an ID was produced for. The call
    /// leaves the generator state untouched; once the clock catches back up,
    /// subsequent calls succeed. There is no internal retry.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn next_id(&self) -> Result<FirnId> {
        let mut state = self.state.lock();
        let mut now = self.time.current_millis();

        if now < state.last_millis {
            return Err(Error::ClockMovedBackwards {
                last: state.last_millis,
                now,
            });
        }

        if now == state.last_millis {
            state.sequence = (state.sequence + 1) & FirnId::SEQUENCE_MASK;
            if state.sequence == 0 {
                // Sequence space for this tick is exhausted. Spin on the
                // clock until it advances; the wait ends at the next
                // millisecond boundary.
                while now <= state.last_millis {
                    core::hint::spin_loop();
                    now = self.time.current_millis();
                }
            }
        } else {
            state.sequence = 0;
        }

        state.last_millis = now;

        Ok(FirnId::from(
            now - self.epoch_millis,
            self.data_center_id,
            self.worker_id,
            state.sequence,
        ))
    }
}
