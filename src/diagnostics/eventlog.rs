//! Event log of raised actions.
//!
//! Every raise appends `Raise<ActionName>` to a single process-wide log
//! seeded with the [`EVENT_LOG_HEADER`] line. Actions raised on any thread
//! land in the same log. It lives for the whole process and is never
//! cleared.

use log::info;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::sync::{LazyLock, Mutex, PoisonError};

pub const EVENT_LOG_HEADER: &str = "EVENT LOG";
pub const EMPTY_EVENT_LOG: &str = "Event Log is empty.";
const RAISE_PREFIX: &str = "Raise";

static EVENT_LOG: LazyLock<Mutex<Vec<String>>> =
    LazyLock::new(|| Mutex::new(vec![EVENT_LOG_HEADER.to_string()]));

// A panic while holding the lock cannot leave the Vec half-written, so a
// poisoned log is still usable.
fn with_log<R>(f: impl FnOnce(&mut Vec<String>) -> R) -> R {
    let mut log = EVENT_LOG.lock().unwrap_or_else(PoisonError::into_inner);
    f(&mut log)
}

/// Append `Raise<action_name>`.
pub fn record_event(action_name: &str) {
    let entry = format!("{RAISE_PREFIX}{action_name}");
    with_log(|log| log.push(entry));
}

/// Number of recorded raises (header excluded).
pub fn event_count() -> usize {
    with_log(|log| log.len() - 1)
}

fn render(entries: &[String]) -> String {
    if entries.len() > 1 {
        entries.join("\n")
    } else {
        EMPTY_EVENT_LOG.to_string()
    }
}

/// The whole log joined by newlines, or [`EMPTY_EVENT_LOG`] when nothing
/// was raised yet.
pub fn format_event_log() -> String {
    with_log(|log| render(log))
}

/// Write the log to the diagnostic sink.
pub fn show_event_log() {
    info!(target: "gameaction::eventlog", "{}", format_event_log());
}

/// Serializable copy of the log with per-entry counts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventLogSnapshot {
    /// Recorded lines in order, header first.
    pub entries: Vec<String>,
    /// How many times each `Raise<ActionName>` line occurs.
    pub raise_counts: FxHashMap<String, usize>,
}

impl EventLogSnapshot {
    pub fn count(&self, action_name: &str) -> usize {
        self.raise_counts
            .get(&format!("{RAISE_PREFIX}{action_name}"))
            .copied()
            .unwrap_or(0)
    }

    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string_pretty(self).map_err(|e| format!("Failed to serialize event log: {}", e))
    }
}

pub fn event_log_snapshot() -> EventLogSnapshot {
    let entries = with_log(|log| log.clone());
    let mut raise_counts = FxHashMap::default();
    for entry in entries.iter().skip(1) {
        *raise_counts.entry(entry.clone()).or_insert(0) += 1;
    }
    EventLogSnapshot {
        entries,
        raise_counts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The log is shared by every test in the process; assert on deltas and
    // on names no other test records.

    #[test]
    fn test_render_header_only_is_empty_marker() {
        assert_eq!(render(&[EVENT_LOG_HEADER.to_string()]), EMPTY_EVENT_LOG);
        assert_eq!(
            render(&[EVENT_LOG_HEADER.to_string(), "RaiseJump".to_string()]),
            "EVENT LOG\nRaiseJump"
        );
    }

    #[test]
    fn test_header_comes_first() {
        record_event("UnitHeaderCheck");
        let snap = event_log_snapshot();
        assert_eq!(snap.entries[0], EVENT_LOG_HEADER);
        assert!(format_event_log().starts_with("EVENT LOG\n"));
    }

    #[test]
    fn test_record_prefixes_raise_in_order() {
        record_event("UnitOrderFirst");
        record_event("UnitOrderSecond");
        let entries = event_log_snapshot().entries;
        let first = entries.iter().position(|e| e == "RaiseUnitOrderFirst").unwrap();
        let second = entries.iter().position(|e| e == "RaiseUnitOrderSecond").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_records_from_other_threads_are_shared() {
        std::thread::spawn(|| record_event("UnitWorker"))
            .join()
            .unwrap();
        assert_eq!(event_log_snapshot().count("UnitWorker"), 1);
    }

    #[test]
    fn test_snapshot_counts_entries() {
        record_event("UnitCountJump");
        record_event("UnitCountJump");
        record_event("UnitCountHit");
        let snap = event_log_snapshot();
        assert_eq!(snap.count("UnitCountJump"), 2);
        assert_eq!(snap.count("UnitCountHit"), 1);
        assert_eq!(snap.count("UnitCountLand"), 0);

        let json = snap.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["raise_counts"]["RaiseUnitCountJump"], 2);
    }
}
