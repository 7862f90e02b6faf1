//! Scoped, persistent key/value context threaded through composition.
//!
//! [`AmbientContext`] is an immutable chain of frames. Providing a value
//! returns a new handle whose head frame holds it; the original handle is
//! untouched, so a value is visible exactly to the compositions that receive
//! the derived handle. Dropping the handle ends the scope.

use std::any::Any;
use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;

// ---------------------------------------------------------------------------
// ContextKey
// ---------------------------------------------------------------------------

/// A typed key into the ambient context. Reads fall back to `T::default()`.
///
/// Keys are identified by name; two keys with the same name address the same
/// slot.
pub struct ContextKey<T> {
    name: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T> ContextKey<T> {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _marker: PhantomData,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl<T> fmt::Debug for ContextKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ContextKey").field(&self.name).finish()
    }
}

// ---------------------------------------------------------------------------
// AmbientContext
// ---------------------------------------------------------------------------

struct Frame {
    name: &'static str,
    value: Rc<dyn Any>,
    parent: Option<Rc<Frame>>,
}

/// A handle on the ambient values visible at one point of the tree.
#[derive(Clone, Default)]
pub struct AmbientContext {
    head: Option<Rc<Frame>>,
}

impl AmbientContext {
    /// An empty context: every key reads its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// A new handle that sees `value` under `key` and everything this handle sees.
    pub fn provide<T: Clone + Default + 'static>(&self, key: &ContextKey<T>, value: T) -> Self {
        Self {
            head: Some(Rc::new(Frame {
                name: key.name,
                value: Rc::new(value),
                parent: self.head.clone(),
            })),
        }
    }

    /// The nearest provided value for `key`, or its default.
    pub fn read<T: Clone + Default + 'static>(&self, key: &ContextKey<T>) -> T {
        self.lookup(key).unwrap_or_default()
    }

    /// Whether any ancestor provided `key`.
    pub fn is_provided<T: Clone + Default + 'static>(&self, key: &ContextKey<T>) -> bool {
        self.find(key.name).is_some()
    }

    /// Run `f` with `value` provided under `key`; the scope ends when `f` returns.
    pub fn scope<T, R>(&self, key: &ContextKey<T>, value: T, f: impl FnOnce(&AmbientContext) -> R) -> R
    where
        T: Clone + Default + 'static,
    {
        let scoped = self.provide(key, value);
        f(&scoped)
    }

    fn lookup<T: Clone + 'static>(&self, key: &ContextKey<T>) -> Option<T> {
        let frame = self.find(key.name)?;
        let value = frame.value.downcast_ref::<T>();
        debug_assert!(value.is_some(), "context key {:?} reused with another type", key.name);
        value.cloned()
    }

    fn find(&self, name: &str) -> Option<&Frame> {
        let mut current = self.head.as_deref();
        while let Some(frame) = current {
            if frame.name == name {
                return Some(frame);
            }
            current = frame.parent.as_deref();
        }
        None
    }

    /// Number of provided frames, shadowed ones included.
    pub fn depth(&self) -> usize {
        let mut n = 0;
        let mut current = self.head.as_deref();
        while let Some(frame) = current {
            n += 1;
            current = frame.parent.as_deref();
        }
        n
    }
}

impl fmt::Debug for AmbientContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names = Vec::new();
        let mut current = self.head.as_deref();
        while let Some(frame) = current {
            names.push(frame.name);
            current = frame.parent.as_deref();
        }
        f.debug_struct("AmbientContext").field("frames", &names).finish()
    }
}
