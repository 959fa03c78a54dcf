//! Arity plumbing for [`GameAction`](crate::action::gameaction::GameAction).
//!
//! An action's argument list is a tuple: `()` for a plain action, `(A,)` for
//! one argument and so on up to seven. [`ActionArgs`] maps each tuple to the
//! callback signature its subscribers must have, and [`IntoHandler`] turns a
//! plain closure of that signature into a shared callback.
//!
//! The per-arity impls, including the `raise(a, b, ..)` entry points, are
//! generated by the `impl_action_arity!` macro below so the dispatch logic itself is
//! written once in [`GameAction::raise_with`].
//!
//! [`GameAction::raise_with`]: crate::action::gameaction::GameAction::raise_with

use std::rc::Rc;

use crate::action::gameaction::GameAction;

/// Argument tuple accepted by a [`GameAction`].
///
/// Implemented for tuples of zero to seven `Clone + 'static` types. Each
/// subscriber receives its own clone of the arguments.
pub trait ActionArgs: Clone + 'static {
    /// Unsized callback type, e.g. `dyn Fn(A, B)` for `(A, B)`.
    type Callback: ?Sized + 'static;

    /// Spread the tuple into the callback's parameters.
    fn dispatch(callback: &Self::Callback, args: Self);
}

/// Conversion from a closure or function item into a shared callback for
/// the argument tuple `Args`.
pub trait IntoHandler<Args: ActionArgs> {
    fn into_callback(self) -> Rc<Args::Callback>;
}

macro_rules! impl_action_arity {
    ($($T:ident => $arg:ident),*) => {
        impl<$($T: Clone + 'static),*> ActionArgs for ($($T,)*) {
            type Callback = dyn Fn($($T),*);

            #[allow(non_snake_case)]
            fn dispatch(callback: &Self::Callback, args: Self) {
                let ($($T,)*) = args;
                callback($($T),*);
            }
        }

        impl<Func, $($T: Clone + 'static),*> IntoHandler<($($T,)*)> for Func
        where
            Func: Fn($($T),*) + 'static,
        {
            fn into_callback(self) -> Rc<dyn Fn($($T),*)> {
                Rc::new(self)
            }
        }

        impl<$($T: Clone + 'static),*> GameAction<($($T,)*)> {
            /// Run the pre-raise hook, every subscriber in subscription
            /// order, then the post-raise hook.
            pub fn raise(&self, $($arg: $T),*) {
                self.raise_with(($($arg,)*));
            }
        }
    };
}

impl_action_arity!();
impl_action_arity!(A => a);
impl_action_arity!(A => a, B => b);
impl_action_arity!(A => a, B => b, C => c);
impl_action_arity!(A => a, B => b, C => c, D => d);
impl_action_arity!(A => a, B => b, C => c, D => d, E => e);
impl_action_arity!(A => a, B => b, C => c, D => d, E => e, F => f);
impl_action_arity!(A => a, B => b, C => c, D => d, E => e, F => f, G => g);
