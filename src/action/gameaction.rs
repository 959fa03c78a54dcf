//! Typed multicast action with optional pre/post raise hooks.
//!
//! A [`GameAction`] is owned by the game object that exposes it. Other
//! objects attach [`Handler`]s to it and the owner raises it:
//!
//! 1. the pre-raise hook runs (if any)
//! 2. every subscriber runs in subscription order with a clone of the args
//! 3. the post-raise hook runs (if any)
//!
//! # Reentrancy
//!
//! The subscriber list is snapshotted when `raise` is called. Handlers and
//! hooks may subscribe, unsubscribe or destroy while a raise is in progress;
//! the change applies from the next raise on. The snapshot keeps up to four
//! handlers inline; raising an action with more subscribers allocates.
//!
//! # Failures
//!
//! A panicking subscriber is not caught. The panic unwinds through the
//! remaining subscribers and the post-hook to the caller of `raise`. No
//! borrow is held while handlers run, so the action stays usable if the
//! caller catches the unwind.
//!
//! # Example
//!
//! ```ignore
//! let mut on_unload = DestroySignal::new();
//! let jump: GameAction<(f32,)> =
//!     GameAction::with_raise("Jump", || play_sfx("jump"), RaiseType::Pre).linked_to(&mut on_unload);
//!
//! let handler = Handler::new("JumpHandler", |height: f32| println!("{height}"));
//! jump.subscribe(&handler);
//! jump.raise(2.5);
//!
//! on_unload.fire(); // jump has no subscribers left
//! ```

use std::cell::RefCell;
use std::fmt;
use std::ops::{AddAssign, SubAssign};
use std::rc::{Rc, Weak};

use log::debug;
use smallvec::SmallVec;

use crate::action::args::ActionArgs;
use crate::action::handler::{Handler, Hook};
use crate::resources::destroysignal::{DestroySignal, Teardown};

#[cfg(feature = "diagnostics")]
use crate::diagnostics::{eventlog, naming};

type SubscriberList<Args> = SmallVec<[Handler<Args>; 4]>;

/// Where a single `on_raise` hook is installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RaiseType {
    /// Before the subscribers.
    Pre,
    /// After the subscribers.
    Post,
    /// Both before and after the subscribers.
    All,
}

/// Named multicast action carrying `Args` (a tuple of up to seven types).
///
/// `GameAction` with no parameter is the zero-argument action.
pub struct GameAction<Args: ActionArgs = ()> {
    name: String,
    subscribers: Rc<RefCell<SubscriberList<Args>>>,
    pre_raise: Option<Hook>,
    post_raise: Option<Hook>,
}

impl<Args: ActionArgs> GameAction<Args> {
    /// Action with no hooks.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            subscribers: Rc::new(RefCell::new(SmallVec::new())),
            pre_raise: None,
            post_raise: None,
        }
    }

    /// Action with one hook, placed according to `raise_type`.
    pub fn with_raise(
        name: impl Into<String>,
        on_raise: impl Fn() + 'static,
        raise_type: RaiseType,
    ) -> Self {
        let hook: Hook = Rc::new(on_raise);
        let mut action = Self::new(name);
        match raise_type {
            RaiseType::Pre => action.pre_raise = Some(hook),
            RaiseType::Post => action.post_raise = Some(hook),
            RaiseType::All => {
                action.pre_raise = Some(Rc::clone(&hook));
                action.post_raise = Some(hook);
            }
        }
        action
    }

    /// Action with independent pre- and post-raise hooks.
    pub fn with_pre_post(
        name: impl Into<String>,
        on_pre_raise: impl Fn() + 'static,
        on_post_raise: impl Fn() + 'static,
    ) -> Self {
        let mut action = Self::new(name);
        action.pre_raise = Some(Rc::new(on_pre_raise));
        action.post_raise = Some(Rc::new(on_post_raise));
        action
    }

    /// Register this action's teardown on `signal`.
    ///
    /// Firing the signal clears the subscribers. The signal only keeps a
    /// weak link, so dropping the action unregisters it implicitly.
    pub fn linked_to(self, signal: &mut DestroySignal) -> Self {
        signal.register_teardown(LinkedSubscribers {
            name: self.name.clone(),
            subscribers: Rc::downgrade(&self.subscribers),
        });
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.borrow().is_empty()
    }

    /// Whether `handler` is currently subscribed (at least once).
    pub fn contains(&self, handler: &Handler<Args>) -> bool {
        self.subscribers.borrow().iter().any(|h| h.ptr_eq(handler))
    }

    pub fn has_pre_raise(&self) -> bool {
        self.pre_raise.is_some()
    }

    pub fn has_post_raise(&self) -> bool {
        self.post_raise.is_some()
    }

    /// Append `handler` to the subscriber list. Duplicates are allowed.
    ///
    /// With the `diagnostics` feature the handler name is checked against
    /// `<name>Handler`; a mismatch is logged and the subscription goes ahead.
    pub fn subscribe(&self, handler: &Handler<Args>) {
        #[cfg(feature = "diagnostics")]
        naming::check_name_format(handler.name(), &self.name, naming::Operation::Subscription);

        self.subscribers.borrow_mut().push(handler.clone());
        debug!("'{}' subscribed to '{}'", handler.name(), self.name);
    }

    /// Remove the first registration of `handler`.
    ///
    /// Returns `false` if it was not subscribed, which is not an error.
    pub fn unsubscribe(&self, handler: &Handler<Args>) -> bool {
        #[cfg(feature = "diagnostics")]
        naming::check_name_format(handler.name(), &self.name, naming::Operation::Unsubscribe);

        let mut subscribers = self.subscribers.borrow_mut();
        match subscribers.iter().position(|h| h.ptr_eq(handler)) {
            Some(index) => {
                subscribers.remove(index);
                debug!("'{}' unsubscribed from '{}'", handler.name(), self.name);
                true
            }
            None => false,
        }
    }

    /// Raise with an argument tuple. The per-arity `raise(a, b, ..)` methods
    /// forward here.
    pub fn raise_with(&self, args: Args) {
        #[cfg(feature = "diagnostics")]
        eventlog::record_event(&self.name);

        let snapshot: SubscriberList<Args> = self.subscribers.borrow().clone();

        if let Some(pre) = &self.pre_raise {
            pre();
        }
        for handler in &snapshot {
            handler.call(args.clone());
        }
        if let Some(post) = &self.post_raise {
            post();
        }
    }

    /// Drop every subscriber. Hooks and name are kept and the action can be
    /// subscribed to again afterwards.
    pub fn destroy_event(&self) {
        clear_subscribers(&self.name, &self.subscribers);
    }
}

impl<'a, Args: ActionArgs> AddAssign<&'a Handler<Args>> for GameAction<Args> {
    fn add_assign(&mut self, handler: &'a Handler<Args>) {
        self.subscribe(handler);
    }
}

impl<'a, Args: ActionArgs> SubAssign<&'a Handler<Args>> for GameAction<Args> {
    fn sub_assign(&mut self, handler: &'a Handler<Args>) {
        self.unsubscribe(handler);
    }
}

impl<Args: ActionArgs> fmt::Debug for GameAction<Args> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let subscribers = self.subscribers.borrow();
        f.debug_struct("GameAction")
            .field("name", &self.name)
            .field(
                "subscribers",
                &subscribers.iter().map(Handler::name).collect::<Vec<_>>(),
            )
            .field("pre_raise", &self.pre_raise.is_some())
            .field("post_raise", &self.post_raise.is_some())
            .finish()
    }
}

fn clear_subscribers<Args: ActionArgs>(name: &str, subscribers: &RefCell<SubscriberList<Args>>) {
    let mut subscribers = subscribers.borrow_mut();
    if !subscribers.is_empty() {
        debug!("Destroying '{}' ({} subscribers)", name, subscribers.len());
    }
    subscribers.clear();
}

/// Weak link from a [`DestroySignal`] to an action's subscriber list.
struct LinkedSubscribers<Args: ActionArgs> {
    name: String,
    subscribers: Weak<RefCell<SubscriberList<Args>>>,
}

impl<Args: ActionArgs> Teardown for LinkedSubscribers<Args> {
    fn teardown(&self) {
        if let Some(subscribers) = self.subscribers.upgrade() {
            clear_subscribers(&self.name, &subscribers);
        }
    }

    fn is_alive(&self) -> bool {
        self.subscribers.strong_count() > 0
    }

    fn label(&self) -> &str {
        &self.name
    }
}
