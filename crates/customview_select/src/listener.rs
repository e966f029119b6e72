//! Ordered subscriber lists for group notifications
//!
//! A group owns one [`Listeners`] list per notification kind. Subscribers are
//! called in registration order, so a host can chain its own observers behind
//! the group's bookkeeping without wrapping listeners inside listeners.
//!
//! # Examples
//!
//! ```
//! use customview_select::Listeners;
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! let mut listeners = Listeners::new();
//!
//! let sink = Rc::clone(&seen);
//! listeners.subscribe(move |value: &u32| sink.borrow_mut().push(*value));
//!
//! listeners.emit(&7);
//! assert_eq!(*seen.borrow(), vec![7]);
//! ```

use std::fmt;

/// A list of notification handlers for values of type `T`.
///
/// Handlers receive a reference to the emitted value and may hold mutable
/// state of their own.
pub struct Listeners<T> {
    subscribers: Vec<Box<dyn FnMut(&T)>>,
}

impl<T> Listeners<T> {
    /// Create an empty list.
    pub fn new() -> Self {
        Self {
            subscribers: Vec::new(),
        }
    }

    /// Append a handler. Handlers run in the order they were added.
    pub fn subscribe<F>(&mut self, handler: F)
    where
        F: FnMut(&T) + 'static,
    {
        self.subscribers.push(Box::new(handler));
    }

    /// Call every handler with `value`.
    pub fn emit(&mut self, value: &T) {
        for subscriber in &mut self.subscribers {
            subscriber(value);
        }
    }

    /// Remove all handlers.
    pub fn clear(&mut self) {
        self.subscribers.clear();
    }

    /// Number of registered handlers.
    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    /// Check if no handler is registered.
    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }
}

impl<T> Default for Listeners<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Listeners<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.len())
            .finish()
    }
}
