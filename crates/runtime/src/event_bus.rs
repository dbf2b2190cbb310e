use serde::Serialize;

use crate::state::ViewEvent;

/// A dispatched interaction, in dispatch order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoggedEvent {
    /// 0-based dispatch sequence number.
    pub seq: u64,
    pub event: ViewEvent,
    /// Whether the event produced a different state.
    pub changed: bool,
}

/// Append-only record of the session's interactions, for traceability and replay.
#[derive(Debug, Default)]
pub struct EventLog {
    next_seq: u64,
    events: Vec<LoggedEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `event` and returns its sequence number.
    pub fn emit(&mut self, event: ViewEvent, changed: bool) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.events.push(LoggedEvent {
            seq,
            event,
            changed,
        });
        seq
    }

    pub fn events(&self) -> &[LoggedEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Takes the recorded events. Sequence numbers keep increasing afterwards.
    pub fn drain(&mut self) -> Vec<LoggedEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::EventLog;
    use crate::state::ViewEvent;

    #[test]
    fn records_events_with_sequence_numbers() {
        let mut log = EventLog::new();
        assert_eq!(log.emit(ViewEvent::ToggleMenu, true), 0);
        assert_eq!(log.emit(ViewEvent::Dismiss, false), 1);
        assert_eq!(log.len(), 2);
        assert_eq!(log.events()[1].seq, 1);
        assert!(!log.events()[1].changed);
    }

    #[test]
    fn drain_clears_events_but_not_sequence() {
        let mut log = EventLog::new();
        log.emit(ViewEvent::Dismiss, false);
        let drained = log.drain();
        assert_eq!(drained.len(), 1);
        assert!(log.is_empty());
        assert_eq!(log.emit(ViewEvent::Dismiss, false), 1);
    }
}
