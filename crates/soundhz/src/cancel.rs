//! Cooperative cancellation for store operations.
//!
//! A [`CancelToken`] is a lightweight, cloneable signal shared between a
//! caller and an in-flight store operation. Operations poll the token at
//! checkpoints between logical steps; they never abandon a write that has
//! already started.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::{Error, Result};

/// A cloneable cancellation signal.
///
/// All clones share the same underlying flag: cancelling any one of them
/// cancels them all.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    /// Create a new, uncancelled token.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Check whether cancellation has been requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Abort the named operation if cancellation has been requested.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Cancelled`] when the token has been cancelled.
    pub fn checkpoint(&self, operation: &'static str) -> Result<()> {
        if self.is_cancelled() {
            return Err(Error::Cancelled { operation });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_token_is_live() {
        let token = CancelToken::new();
        assert!(!token.is_cancelled());
        assert!(token.checkpoint("list").is_ok());
    }

    #[test]
    fn test_cancel_trips_checkpoint() {
        let token = CancelToken::new();
        token.cancel();
        assert!(token.is_cancelled());

        let err = token.checkpoint("add").unwrap_err();
        assert!(err.is_cancelled());
        assert_eq!(err.to_string(), "operation cancelled: add");
    }

    #[test]
    fn test_clones_share_the_flag() {
        let token = CancelToken::new();
        let other = token.clone();

        other.cancel();
        assert!(token.is_cancelled());
    }
}
