//! Timestamps and operation deadlines.

use core::fmt;

use crate::error::ExchangeError;

/// A point in time as unix seconds, supplied by the host ledger.
///
/// The engine has no clock of its own: every deadline-bounded operation
/// takes the current `Timestamp` as an argument, the way a contract reads
/// block time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Timestamp(u64);

impl Timestamp {
    /// Creates a `Timestamp` from unix seconds.
    #[must_use]
    pub const fn new(unix_secs: u64) -> Self {
        Self(unix_secs)
    }

    /// Returns the underlying unix-seconds value.
    #[must_use]
    pub const fn get(&self) -> u64 {
        self.0
    }

    /// Returns this timestamp advanced by `secs`, saturating at the
    /// maximum.
    #[must_use]
    pub const fn plus_secs(&self, secs: u64) -> Self {
        Self(self.0.saturating_add(secs))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The latest time at which an operation may execute.
///
/// An operation with deadline `d` executes when `now <= d` and fails with
/// [`ExchangeError::DeadlineExpired`] when `now > d`. Callers typically
/// set a deadline a few minutes ahead of submission and retry with a
/// fresh one after expiry.
///
/// # Examples
///
/// ```
/// use pairswap::domain::{Deadline, Timestamp};
///
/// let now = Timestamp::new(1_700_000_000);
/// let deadline = Deadline::new(now.plus_secs(1_200));
/// assert!(deadline.ensure_not_expired(now).is_ok());
/// assert!(deadline.ensure_not_expired(now.plus_secs(1_201)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Deadline(Timestamp);

impl Deadline {
    /// Creates a `Deadline` at the given timestamp.
    #[must_use]
    pub const fn new(at: Timestamp) -> Self {
        Self(at)
    }

    /// Returns the deadline's timestamp.
    #[must_use]
    pub const fn at(&self) -> Timestamp {
        self.0
    }

    /// Returns `true` if the deadline has passed at `now`.
    ///
    /// The boundary is inclusive: `now == deadline` is not expired.
    #[must_use]
    pub const fn is_expired(&self, now: Timestamp) -> bool {
        now.get() > self.0.get()
    }

    /// Fails with [`ExchangeError::DeadlineExpired`] if the deadline has
    /// passed at `now`.
    ///
    /// # Errors
    ///
    /// Returns [`ExchangeError::DeadlineExpired`] when `now > deadline`.
    pub const fn ensure_not_expired(&self, now: Timestamp) -> crate::error::Result<()> {
        if self.is_expired(now) {
            return Err(ExchangeError::DeadlineExpired);
        }
        Ok(())
    }
}

impl fmt::Display for Deadline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
