//! Observable state container.
//!
//! A [`StateCell`] owns a value and broadcasts every replacement to its
//! subscribers through a `tokio::sync::watch` channel. Subscribers always
//! observe whole snapshots, never partial mutations.

use tokio::sync::watch;

/// Single-writer observable value.
#[derive(Debug)]
pub struct StateCell<T> {
    tx: watch::Sender<T>,
}

impl<T: Clone> StateCell<T> {
    /// Create a cell holding `initial`.
    pub fn new(initial: T) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    /// Clone of the current value.
    pub fn snapshot(&self) -> T {
        self.tx.borrow().clone()
    }

    /// Subscribe to future values. The receiver starts at the current value.
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.tx.subscribe()
    }

    /// Replace the value and notify subscribers.
    pub fn replace(&self, value: T) {
        self.tx.send_replace(value);
    }

    /// Mutate the value in place and notify subscribers.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        self.tx.send_modify(f);
    }

    /// Mutate the value in place; subscribers are notified only when `f`
    /// returns `true`.
    pub fn update_if(&self, f: impl FnOnce(&mut T) -> bool) -> bool {
        self.tx.send_if_modified(f)
    }

    /// Read the current value without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.tx.borrow())
    }
}
