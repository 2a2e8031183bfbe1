//! Dashboard view state and its transitions.
//!
//! Every backend request is tagged with a monotonic [`RequestSeq`] when it
//! starts; only the newest outstanding request may mutate state when it
//! completes. A completion carrying any older seq is discarded wholesale,
//! so a double-clicked refresh cannot have its first, stale response
//! overwrite the second one (last-request-wins).

use crate::dashboard::samples;
use contracts::support::{LogEntry, Stats, Ticket};

pub type RequestSeq = u64;

/// Completion events fed back into the state by finished requests.
#[derive(Debug, Clone)]
pub enum DashboardEvent {
    /// Ticket listing succeeded; the collection is replaced wholesale.
    TicketsLoaded {
        seq: RequestSeq,
        tickets: Vec<Ticket>,
    },
    /// Ticket listing failed; existing tickets stay untouched.
    LoadFailed { seq: RequestSeq },
    /// AI reply run finished, successfully or not. Side effects on tickets
    /// are not surfaced here; the view issues a fresh load on success.
    AiRunFinished { seq: RequestSeq },
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    pub tickets: Vec<Ticket>,
    pub stats: Stats,
    pub activity: Vec<LogEntry>,
    next_seq: RequestSeq,
    /// Seq of the newest in-flight request, if any. The busy flag that
    /// gates the Refresh and Run-AI buttons derives from this.
    pending: Option<RequestSeq>,
}

impl DashboardState {
    pub fn new() -> Self {
        Self {
            tickets: Vec::new(),
            stats: samples::stats(),
            activity: samples::activity(),
            next_seq: 0,
            pending: None,
        }
    }

    /// Register a new outbound request and return its seq. Any previously
    /// outstanding request becomes stale immediately.
    pub fn begin_request(&mut self) -> RequestSeq {
        self.next_seq += 1;
        let seq = self.next_seq;
        self.pending = Some(seq);
        seq
    }

    /// Apply a completion event. Stale events (seq older than the newest
    /// outstanding request) are ignored entirely, busy flag included.
    pub fn apply(&mut self, event: DashboardEvent) {
        match event {
            DashboardEvent::TicketsLoaded { seq, tickets } => {
                if self.pending == Some(seq) {
                    self.tickets = tickets;
                    self.pending = None;
                }
            }
            DashboardEvent::LoadFailed { seq } | DashboardEvent::AiRunFinished { seq } => {
                if self.pending == Some(seq) {
                    self.pending = None;
                }
            }
        }
    }

    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn ticket(id: i64, subject: &str) -> Ticket {
        let ts = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        Ticket {
            id,
            subject: subject.to_string(),
            status: "open".to_string(),
            requester_id: 1,
            tags: Vec::new(),
            created_at: ts,
            updated_at: ts,
        }
    }

    #[test]
    fn test_load_replaces_collection_wholesale() {
        let mut state = DashboardState::new();

        let seq = state.begin_request();
        state.apply(DashboardEvent::TicketsLoaded {
            seq,
            tickets: vec![ticket(1, "a"), ticket(2, "b")],
        });
        assert_eq!(state.tickets.len(), 2);

        // Identical payload loaded again: identical result, no accumulation.
        let seq = state.begin_request();
        state.apply(DashboardEvent::TicketsLoaded {
            seq,
            tickets: vec![ticket(1, "a"), ticket(2, "b")],
        });
        assert_eq!(state.tickets.len(), 2);
        assert!(!state.is_busy());
    }

    #[test]
    fn test_failure_keeps_tickets_and_clears_busy() {
        let mut state = DashboardState::new();
        let seq = state.begin_request();
        state.apply(DashboardEvent::TicketsLoaded {
            seq,
            tickets: vec![ticket(7, "Login issue")],
        });

        let seq = state.begin_request();
        assert!(state.is_busy());
        state.apply(DashboardEvent::LoadFailed { seq });

        assert_eq!(state.tickets.len(), 1);
        assert_eq!(state.tickets[0].id, 7);
        assert!(!state.is_busy());
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut state = DashboardState::new();
        let first = state.begin_request();
        let second = state.begin_request();

        // The first (stale) response must not overwrite anything, and must
        // not clear the busy flag while the second request is in flight.
        state.apply(DashboardEvent::TicketsLoaded {
            seq: first,
            tickets: vec![ticket(1, "stale")],
        });
        assert!(state.tickets.is_empty());
        assert!(state.is_busy());

        state.apply(DashboardEvent::TicketsLoaded {
            seq: second,
            tickets: vec![ticket(2, "fresh")],
        });
        assert_eq!(state.tickets[0].id, 2);
        assert!(!state.is_busy());
    }

    #[test]
    fn test_stale_failure_does_not_clear_busy() {
        let mut state = DashboardState::new();
        let first = state.begin_request();
        let _second = state.begin_request();

        state.apply(DashboardEvent::LoadFailed { seq: first });
        assert!(state.is_busy());
    }

    #[test]
    fn test_ai_run_finished_clears_busy() {
        let mut state = DashboardState::new();
        let seq = state.begin_request();
        state.apply(DashboardEvent::AiRunFinished { seq });
        assert!(!state.is_busy());
    }
}
