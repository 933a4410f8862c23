//! Shared cells for host-owned console variables.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// A host-owned cell holding one console-visible variable.
///
/// The host keeps the `VarCell` alive for as long as the underlying object
/// exists and reads or writes it through [`get`](Self::get) /
/// [`set`](Self::set) during normal gameplay. Field specs capture only a
/// weak handle, so dropping the cell retires the binding without any
/// unregistration call.
#[derive(Debug, Default)]
pub struct VarCell<T> {
    inner: Rc<RefCell<T>>,
}

impl<T> VarCell<T> {
    /// Creates a new cell with the given value.
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(value)),
        }
    }

    /// Returns a copy of the current value.
    #[must_use]
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.inner.borrow().clone()
    }

    /// Replaces the current value.
    pub fn set(&self, value: T) {
        *self.inner.borrow_mut() = value;
    }

    /// Returns a weak handle for use in field accessors.
    pub(crate) fn downgrade(&self) -> Weak<RefCell<T>> {
        Rc::downgrade(&self.inner)
    }
}

impl<T> Clone for VarCell<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}
