//! Aggregate teardown signal.
//!
//! A [`DestroySignal`] is a many-listener broadcast with no payload. Game
//! actions register their teardown on it at construction (see
//! [`GameAction::linked_to`](crate::action::gameaction::GameAction::linked_to))
//! so one `fire()` clears every linked action, typically on scene unload.
//!
//! In a bevy world the signal lives as a non-send resource and is fired by
//! [`scene_teardown_observer`](crate::events::sceneteardown::scene_teardown_observer).

use log::debug;
use std::fmt;

/// Something that can be torn down by a [`DestroySignal`].
pub trait Teardown {
    fn teardown(&self);

    /// `false` once the target is gone; dead listeners are pruned.
    fn is_alive(&self) -> bool {
        true
    }

    /// Name used in log output.
    fn label(&self) -> &str {
        "listener"
    }
}

struct FnListener<F> {
    label: String,
    f: F,
}

impl<F: Fn()> Teardown for FnListener<F> {
    fn teardown(&self) {
        (self.f)()
    }

    fn label(&self) -> &str {
        &self.label
    }
}

/// Ordered list of teardown listeners fired together.
#[derive(Default)]
pub struct DestroySignal {
    listeners: Vec<Box<dyn Teardown>>,
}

impl DestroySignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a plain callback.
    pub fn register(&mut self, label: impl Into<String>, f: impl Fn() + 'static) {
        self.register_teardown(FnListener {
            label: label.into(),
            f,
        });
    }

    /// Register any [`Teardown`] implementation.
    pub fn register_teardown(&mut self, listener: impl Teardown + 'static) {
        debug!("'{}' registered on destroy signal", listener.label());
        self.listeners.push(Box::new(listener));
    }

    /// Run every live listener in registration order, then drop dead ones.
    ///
    /// Listeners stay registered, so firing again tears down whatever was
    /// subscribed since the previous fire.
    pub fn fire(&mut self) {
        debug!("Firing destroy signal ({} listeners)", self.listeners.len());
        for listener in &self.listeners {
            if listener.is_alive() {
                listener.teardown();
            }
        }
        self.prune();
    }

    /// Drop listeners whose target no longer exists.
    pub fn prune(&mut self) {
        self.listeners.retain(|l| l.is_alive());
    }

    /// Number of registered listeners, including dead ones not yet pruned.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl fmt::Debug for DestroySignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.listeners.iter().map(|l| l.label()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_fire_runs_in_registration_order() {
        let order = Rc::new(std::cell::RefCell::new(Vec::new()));
        let mut signal = DestroySignal::new();
        for i in 0..3 {
            let o = order.clone();
            signal.register(format!("l{i}"), move || o.borrow_mut().push(i));
        }
        signal.fire();
        assert_eq!(*order.borrow(), vec![0, 1, 2]);
    }

    #[test]
    fn test_listeners_survive_fire() {
        let count = Rc::new(Cell::new(0));
        let c = count.clone();
        let mut signal = DestroySignal::new();
        signal.register("counter", move || c.set(c.get() + 1));
        signal.fire();
        signal.fire();
        assert_eq!(count.get(), 2);
        assert_eq!(signal.listener_count(), 1);
    }

    #[test]
    fn test_empty_signal_fire_is_noop() {
        let mut signal = DestroySignal::new();
        signal.fire();
        assert!(signal.is_empty());
    }
}
