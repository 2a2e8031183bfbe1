//! Fixed sample values for the stats cards and the activity feed.
//!
//! Both are externally supplied in practice; this layer seeds them locally
//! because no endpoint serves them yet.

use chrono::{Duration, Utc};
use contracts::support::{LogEntry, Stats};

pub fn stats() -> Stats {
    Stats {
        total_tickets: 247,
        processed_today: 38,
        avg_response_time: 3.2,
        success_rate: 94.6,
    }
}

pub fn activity() -> Vec<LogEntry> {
    let now = Utc::now();
    vec![
        LogEntry {
            timestamp: now - Duration::minutes(2),
            level: "SUCCESS".to_string(),
            message: "AI reply drafted and sent".to_string(),
            ticket_id: Some(214),
        },
        LogEntry {
            timestamp: now - Duration::minutes(9),
            level: "INFO".to_string(),
            message: "AI reply batch started".to_string(),
            ticket_id: None,
        },
        LogEntry {
            timestamp: now - Duration::minutes(21),
            level: "WARNING".to_string(),
            message: "Low confidence draft held for review".to_string(),
            ticket_id: Some(209),
        },
        LogEntry {
            timestamp: now - Duration::hours(1),
            level: "ERROR".to_string(),
            message: "Reply generation failed, ticket left untouched".to_string(),
            ticket_id: Some(198),
        },
        LogEntry {
            timestamp: now - Duration::hours(2),
            level: "INFO".to_string(),
            message: "Knowledge base document indexed".to_string(),
            ticket_id: None,
        },
    ]
}
