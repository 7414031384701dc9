use std::time::{Duration, Instant};

/// Polled by blocking drivers between two scheduled steps. Returning `true`
/// once is enough; the run is cancelled before the next point.
pub trait CancelToken: Send + Sync {
    fn is_cancelled(&self) -> bool;
}

/// Token for runs that only end by completing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverCancel;

impl CancelToken for NeverCancel {
    #[inline]
    fn is_cancelled(&self) -> bool {
        false
    }
}

/// Fires once the wall clock reaches `deadline`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeadlineCancel {
    deadline: Instant,
}

impl DeadlineCancel {
    #[must_use]
    pub fn at(deadline: Instant) -> Self {
        Self { deadline }
    }

    #[must_use]
    pub fn after(limit: Duration) -> Self {
        Self::at(Instant::now() + limit)
    }

    #[must_use]
    pub fn deadline(&self) -> Instant {
        self.deadline
    }
}

impl CancelToken for DeadlineCancel {
    #[inline]
    fn is_cancelled(&self) -> bool {
        Instant::now() >= self.deadline
    }
}

/// An absent token never fires, so optional limits need no wrapper.
impl<T: CancelToken> CancelToken for Option<T> {
    #[inline]
    fn is_cancelled(&self) -> bool {
        self.as_ref().is_some_and(CancelToken::is_cancelled)
    }
}

impl<F> CancelToken for F
where
    F: Fn() -> bool + Send + Sync,
{
    #[inline]
    fn is_cancelled(&self) -> bool {
        self()
    }
}
