//! Admission control for encode/decode operations.
//!
//! Bounds the number of concurrently executing operations with a counting
//! limiter that rejects excess work immediately instead of queuing it. There
//! is no fairness guarantee across callers because there is no queue; this
//! is strict admission control, not flow control.

use std::sync::Arc;

use tokio::sync::{OwnedSemaphorePermit, Semaphore, TryAcquireError};

/// Counting limiter over a fixed pool of permits.
///
/// Wraps a `tokio::sync::Semaphore`. Acquisition is a single non-blocking
/// test-and-decrement; the returned permit releases itself exactly once when
/// dropped, so every exit path of a protected operation returns its permit.
#[derive(Clone)]
pub struct AdmissionLimiter {
    semaphore: Arc<Semaphore>,
    limit: usize,
}

impl AdmissionLimiter {
    /// Creates a limiter with a fixed permit capacity.
    pub fn new(limit: usize) -> Self {
        Self {
            semaphore: Arc::new(Semaphore::new(limit)),
            limit,
        }
    }

    /// Attempts to take one permit without blocking.
    ///
    /// Returns `None` immediately when the pool is exhausted. The permit is
    /// returned to the pool when the guard is dropped.
    pub fn try_acquire(&self) -> Option<OwnedSemaphorePermit> {
        match self.semaphore.clone().try_acquire_owned() {
            Ok(permit) => Some(permit),
            Err(TryAcquireError::NoPermits) => None,
            // The semaphore is never closed; treat it as exhausted if it is.
            Err(TryAcquireError::Closed) => None,
        }
    }

    /// Returns the configured permit capacity.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Returns the number of currently available permits.
    pub fn available(&self) -> usize {
        self.semaphore.available_permits()
    }
}

impl std::fmt::Debug for AdmissionLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdmissionLimiter")
            .field("limit", &self.limit)
            .field("available", &self.available())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acquire_up_to_limit() {
        let limiter = AdmissionLimiter::new(2);

        let first = limiter.try_acquire();
        let second = limiter.try_acquire();
        assert!(first.is_some());
        assert!(second.is_some());
        assert_eq!(limiter.available(), 0);

        // The pool is exhausted; the next attempt is rejected, not queued
        assert!(limiter.try_acquire().is_none());
    }

    #[test]
    fn test_drop_releases_permit() {
        let limiter = AdmissionLimiter::new(1);

        let permit = limiter.try_acquire().unwrap();
        assert!(limiter.try_acquire().is_none());

        drop(permit);
        assert_eq!(limiter.available(), 1);
        assert!(limiter.try_acquire().is_some());
    }

    #[test]
    fn test_clones_share_the_pool() {
        let limiter = AdmissionLimiter::new(1);
        let clone = limiter.clone();

        let _permit = limiter.try_acquire().unwrap();
        assert!(clone.try_acquire().is_none());
        assert_eq!(clone.limit(), 1);
    }
}
