//! Subscriber naming convention check.
//!
//! A handler meant for an action named `"Jump"` is expected to be named
//! `"JumpHandler"`. The check logs its verdict and returns it; callers in
//! this crate ignore the result.

use log::{info, warn};
use std::fmt;

/// Suffix appended to the action name to form the expected handler name.
pub const SUBSCRIBER_SUFFIX: &str = "Handler";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Subscription,
    Unsubscribe,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Subscription => f.write_str("Subscription"),
            Operation::Unsubscribe => f.write_str("Unsubscribe"),
        }
    }
}

pub fn expected_handler_name(target: &str) -> String {
    format!("{target}{SUBSCRIBER_SUFFIX}")
}

pub fn accept_message(operation: Operation, applicant: &str, target: &str) -> String {
    format!("{operation} of \"{applicant}\" to \"{target}\" event succeed.")
}

pub fn deny_message(operation: Operation, applicant: &str, target: &str) -> String {
    format!(
        "{operation} of \"{applicant}\" to \"{target}\" event is failed. Allowed method name is \"{}\"",
        expected_handler_name(target)
    )
}

/// Compare `applicant` with the expected handler name for `target`.
pub fn check_name_format(applicant: &str, target: &str, operation: Operation) -> bool {
    if applicant == expected_handler_name(target) {
        info!(target: "gameaction::naming", "{}", accept_message(operation, applicant, target));
        true
    } else {
        warn!(target: "gameaction::naming", "{}", deny_message(operation, applicant, target));
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expected_name() {
        assert_eq!(expected_handler_name("Jump"), "JumpHandler");
        assert_eq!(expected_handler_name(""), "Handler");
    }

    #[test]
    fn test_accepts_matching_name() {
        assert!(check_name_format("JumpHandler", "Jump", Operation::Subscription));
        assert!(check_name_format("JumpHandler", "Jump", Operation::Unsubscribe));
    }

    #[test]
    fn test_rejects_other_names() {
        assert!(!check_name_format("OnJump", "Jump", Operation::Subscription));
        assert!(!check_name_format("jumpHandler", "Jump", Operation::Subscription));
        assert!(!check_name_format("JumpHandlerX", "Jump", Operation::Unsubscribe));
    }

    #[test]
    fn test_deny_message_names_both() {
        let m = deny_message(Operation::Unsubscribe, "OnJump", "Jump");
        assert!(m.starts_with("Unsubscribe of \"OnJump\""));
        assert!(m.ends_with("\"JumpHandler\""));
    }
}
