//! Wait policies for predicate-checked waits.

use std::time::Duration;

/// How long a waiter is willing to stay suspended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WaitPolicy {
    /// Block until the stage arrives or the board is closed.
    ///
    /// A lost signal suspends the waiter forever under this policy.
    #[default]
    Unbounded,
    /// Give up with [`HandoffError::Timeout`](crate::HandoffError::Timeout) once the board
    /// has gone this long without progress.
    Bounded(Duration),
}

impl WaitPolicy {
    /// Builds a policy from an optional bound, treating a zero duration as unbounded.
    pub fn from_limit(limit: Option<Duration>) -> Self {
        match limit {
            Some(limit) if !limit.is_zero() => WaitPolicy::Bounded(limit),
            _ => WaitPolicy::Unbounded,
        }
    }

    pub fn limit(&self) -> Option<Duration> {
        match self {
            WaitPolicy::Unbounded => None,
            WaitPolicy::Bounded(limit) => Some(*limit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_limit_means_unbounded() {
        assert_eq!(WaitPolicy::from_limit(None), WaitPolicy::Unbounded);
        assert_eq!(
            WaitPolicy::from_limit(Some(Duration::ZERO)),
            WaitPolicy::Unbounded
        );
        let bounded = WaitPolicy::from_limit(Some(Duration::from_millis(250)));
        assert_eq!(bounded.limit(), Some(Duration::from_millis(250)));
    }
}
