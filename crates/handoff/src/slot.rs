//! # Hand-off Slot
//!
//! A `HandoffSlot<T>` is the data half of a hand-off: a single-slot holder that owns
//! its item and its own lock. The signalling half lives on the
//! [`StageBoard`](crate::StageBoard); a slot never blocks, it only reports whether the
//! item a stage expects is actually there.
//!
//! ## Exclusive Access
//!
//! Every operation takes the slot's mutex for exactly one data operation and releases
//! it before returning. Callers never hold the lock across an `.await`, so simulated
//! work can run while other actors inspect the slot.

use crate::error::HandoffError;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::debug;

/// Single-slot, exclusively guarded channel for one hand-off.
#[derive(Debug)]
pub struct HandoffSlot<T> {
    name: &'static str,
    item: Mutex<Option<T>>,
}

impl<T> HandoffSlot<T> {
    /// Creates an empty slot. The name shows up in errors and logs.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            item: Mutex::new(None),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    // A panicking holder cannot leave the Option half-written, so the data is still valid.
    fn lock(&self) -> MutexGuard<'_, Option<T>> {
        self.item.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Places an item in the slot.
    ///
    /// # Errors
    /// Returns [`HandoffError::Occupied`] if the previous item has not been taken yet.
    /// The unconsumed item is left untouched.
    pub fn publish(&self, item: T) -> Result<(), HandoffError> {
        let mut slot = self.lock();
        if slot.is_some() {
            return Err(HandoffError::Occupied { slot: self.name });
        }
        *slot = Some(item);
        debug!(slot = self.name, "Published");
        Ok(())
    }

    /// Removes and returns the pending item.
    pub fn take(&self) -> Result<T, HandoffError> {
        let item = self
            .lock()
            .take()
            .ok_or(HandoffError::Empty { slot: self.name })?;
        debug!(slot = self.name, "Taken");
        Ok(item)
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_none()
    }

    /// Number of pending items, which is always 0 or 1.
    pub fn len(&self) -> usize {
        usize::from(!self.is_empty())
    }

    /// Drops any pending item. Used when a failed traversal is abandoned.
    pub fn clear(&self) -> Option<T> {
        self.lock().take()
    }
}

impl<T: Clone> HandoffSlot<T> {
    /// Returns a copy of the pending item without removing it.
    pub fn peek(&self) -> Result<T, HandoffError> {
        self.lock()
            .as_ref()
            .cloned()
            .ok_or(HandoffError::Empty { slot: self.name })
    }
}
