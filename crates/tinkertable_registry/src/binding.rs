//! Field specs and resolved bindings.

use tinkertable_foundation::{Error, Result, Value, ValueKind};

use crate::cell::VarCell;

/// Reads the current value, or `None` if the owning instance is gone.
type ReadFn = Box<dyn Fn() -> Option<Value>>;

/// Writes an already-coerced value, returning `false` if the instance is
/// gone. The value's kind always matches the spec's kind; the binding
/// coerces before calling this.
type WriteFn = Box<dyn Fn(&Value) -> bool>;

/// A field offered by a [`FieldProvider`](crate::FieldProvider).
///
/// Constructed from a [`VarCell`] handle (mutable fields) or a literal
/// (constants), then collected by the registry during discovery.
pub struct FieldSpec {
    pub(crate) name: String,
    pub(crate) kind: ValueKind,
    pub(crate) mutable: bool,
    pub(crate) read: ReadFn,
    pub(crate) write: WriteFn,
}

impl FieldSpec {
    /// A mutable integer field backed by the given cell.
    #[must_use]
    pub fn integer(name: impl Into<String>, cell: &VarCell<i64>) -> Self {
        let read = cell.downgrade();
        let write = cell.downgrade();
        Self {
            name: name.into(),
            kind: ValueKind::Integer,
            mutable: true,
            read: Box::new(move || read.upgrade().map(|c| Value::Integer(*c.borrow()))),
            write: Box::new(move |value| match (write.upgrade(), value) {
                (Some(c), Value::Integer(n)) => {
                    *c.borrow_mut() = *n;
                    true
                }
                _ => false,
            }),
        }
    }

    /// A mutable float field backed by the given cell.
    #[must_use]
    pub fn float(name: impl Into<String>, cell: &VarCell<f64>) -> Self {
        let read = cell.downgrade();
        let write = cell.downgrade();
        Self {
            name: name.into(),
            kind: ValueKind::Float,
            mutable: true,
            read: Box::new(move || read.upgrade().map(|c| Value::Float(*c.borrow()))),
            write: Box::new(move |value| match (write.upgrade(), value) {
                (Some(c), Value::Float(n)) => {
                    *c.borrow_mut() = *n;
                    true
                }
                _ => false,
            }),
        }
    }

    /// A mutable text field backed by the given cell.
    #[must_use]
    pub fn text(name: impl Into<String>, cell: &VarCell<String>) -> Self {
        let read = cell.downgrade();
        let write = cell.downgrade();
        Self {
            name: name.into(),
            kind: ValueKind::Text,
            mutable: true,
            read: Box::new(move || read.upgrade().map(|c| Value::Text(c.borrow().clone()))),
            write: Box::new(move |value| match (write.upgrade(), value) {
                (Some(c), Value::Text(s)) => {
                    c.borrow_mut().clone_from(s);
                    true
                }
                _ => false,
            }),
        }
    }

    /// A read-only field holding a fixed value.
    ///
    /// Constants can be read and listed but answer "read-only" to both
    /// `/set` and `/reset`.
    #[must_use]
    pub fn constant(name: impl Into<String>, value: impl Into<Value>) -> Self {
        let value = value.into();
        let kind = value.kind();
        Self {
            name: name.into(),
            kind,
            mutable: false,
            read: Box::new(move || Some(value.clone())),
            write: Box::new(|_| false),
        }
    }

    /// Marks this field read-only while keeping it backed by live storage.
    ///
    /// Useful for watch-style fields the game mutates but the console may
    /// only inspect.
    #[must_use]
    pub fn read_only(mut self) -> Self {
        self.mutable = false;
        self
    }

    /// The external variable name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Debug for FieldSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldSpec")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("mutable", &self.mutable)
            .finish_non_exhaustive()
    }
}

/// A resolved name→field binding cached by the registry.
///
/// Carries the initial-value snapshot taken at discovery time; `/reset`
/// writes that snapshot back. All operations report
/// [`ErrorKind::UnknownVariable`](tinkertable_foundation::ErrorKind::UnknownVariable)
/// once the owning instance is gone, indistinguishable from an
/// unregistered name.
pub struct FieldBinding {
    name: String,
    kind: ValueKind,
    mutable: bool,
    initial: Option<Value>,
    read: ReadFn,
    write: WriteFn,
}

impl FieldBinding {
    /// Builds a binding from a spec, snapshotting the initial value.
    ///
    /// A spec whose instance is already gone is still registered, but with
    /// no snapshot; it stays unresolved until the host re-registers and
    /// invalidates the cache.
    pub(crate) fn from_spec(spec: FieldSpec) -> Self {
        let initial = (spec.read)();
        Self {
            name: spec.name,
            kind: spec.kind,
            mutable: spec.mutable,
            initial,
            read: spec.read,
            write: spec.write,
        }
    }

    /// The external variable name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The scalar kind of this field.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        self.kind
    }

    /// Whether `/set` and `/reset` may touch this field.
    #[must_use]
    pub const fn is_mutable(&self) -> bool {
        self.mutable
    }

    /// The initial-value snapshot, if one was captured.
    #[must_use]
    pub const fn initial(&self) -> Option<&Value> {
        self.initial.as_ref()
    }

    /// Reads the current value.
    ///
    /// # Errors
    ///
    /// Returns `UnknownVariable` if the owning instance is gone.
    pub fn read(&self) -> Result<Value> {
        (self.read)().ok_or_else(|| Error::unknown_variable(&self.name))
    }

    /// Coerces `raw` to this field's kind and writes it.
    ///
    /// Returns the coerced value on success. A failed coercion leaves the
    /// stored value untouched.
    ///
    /// # Errors
    ///
    /// Returns `UnknownVariable` if the instance is gone, `NotMutable` for
    /// read-only fields, and `InvalidValue` if `raw` does not parse.
    pub fn write(&self, raw: &str) -> Result<Value> {
        // Liveness first: a dead binding is "not found", never "read-only".
        if (self.read)().is_none() {
            return Err(Error::unknown_variable(&self.name));
        }
        if !self.mutable {
            return Err(Error::not_mutable(&self.name));
        }
        let value = self.kind.coerce(raw)?;
        if (self.write)(&value) {
            Ok(value)
        } else {
            Err(Error::unknown_variable(&self.name))
        }
    }

    /// Restores the initial-value snapshot.
    ///
    /// Honors the same mutability gate as [`write`](Self::write).
    ///
    /// # Errors
    ///
    /// Returns `UnknownVariable` if the instance is gone or no snapshot was
    /// captured, and `NotMutable` for read-only fields.
    pub fn reset(&self) -> Result<Value> {
        if (self.read)().is_none() {
            return Err(Error::unknown_variable(&self.name));
        }
        if !self.mutable {
            return Err(Error::not_mutable(&self.name));
        }
        let initial = self
            .initial
            .as_ref()
            .ok_or_else(|| Error::unknown_variable(&self.name))?;
        if (self.write)(initial) {
            Ok(initial.clone())
        } else {
            Err(Error::unknown_variable(&self.name))
        }
    }
}

impl std::fmt::Debug for FieldBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldBinding")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("mutable", &self.mutable)
            .field("initial", &self.initial)
            .finish_non_exhaustive()
    }
}
