//! Named subscriber handles and raise hooks.
//!
//! A [`Handler`] pairs a callback with the name it is known by. The name is
//! what the naming check compares against `<ActionName>Handler`; Rust cannot
//! reflect a closure's identifier, so callers provide it.
//!
//! Identity is the shared allocation: cloning a handler yields the same
//! subscriber, and unsubscribing requires that handle (or a clone). Two
//! handlers built from identical closures are distinct.

use std::borrow::Cow;
use std::fmt;
use std::rc::Rc;

use crate::action::args::{ActionArgs, IntoHandler};

/// Zero-argument callback run before or after the subscribers of a raise.
pub type Hook = Rc<dyn Fn()>;

/// Named, cheaply cloneable subscriber callback.
///
/// # Example
///
/// ```ignore
/// let on_jump: Handler<(f32,)> = Handler::new("JumpHandler", |height: f32| {
///     println!("jumped {height}");
/// });
/// jump.subscribe(&on_jump);
/// ```
pub struct Handler<Args: ActionArgs> {
    name: Cow<'static, str>,
    callback: Rc<Args::Callback>,
}

impl<Args: ActionArgs> Handler<Args> {
    /// Wrap `callback` under `name`.
    pub fn new<F>(name: impl Into<Cow<'static, str>>, callback: F) -> Self
    where
        F: IntoHandler<Args>,
    {
        Self {
            name: name.into(),
            callback: callback.into_callback(),
        }
    }

    /// The name the handler was registered under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether both handles refer to the same subscriber.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.callback, &other.callback)
    }

    pub(crate) fn call(&self, args: Args) {
        Args::dispatch(&self.callback, args);
    }
}

impl<Args: ActionArgs> Clone for Handler<Args> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            callback: Rc::clone(&self.callback),
        }
    }
}

impl<Args: ActionArgs> fmt::Debug for Handler<Args> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler").field("name", &self.name).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_name_is_kept() {
        let h: Handler<()> = Handler::new("JumpHandler", || {});
        assert_eq!(h.name(), "JumpHandler");
    }

    #[test]
    fn test_clone_shares_identity() {
        let h: Handler<(i32,)> = Handler::new("ScoreHandler", |_: i32| {});
        let c = h.clone();
        assert!(h.ptr_eq(&c));
    }

    #[test]
    fn test_identical_closures_are_distinct() {
        let a: Handler<()> = Handler::new("TickHandler", || {});
        let b: Handler<()> = Handler::new("TickHandler", || {});
        assert!(!a.ptr_eq(&b));
    }

    #[test]
    fn test_call_spreads_tuple() {
        let sum = Rc::new(Cell::new(0));
        let s = sum.clone();
        let h: Handler<(i32, i32, i32)> =
            Handler::new("AddHandler", move |a: i32, b: i32, c: i32| s.set(a + b + c));
        h.call((1, 2, 3));
        assert_eq!(sum.get(), 6);
    }
}
