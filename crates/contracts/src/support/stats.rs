use serde::{Deserialize, Serialize};

/// Summary numbers shown in the four stat cards.
///
/// Sample-populated in this layer; externally sourced in practice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub total_tickets: i64,
    pub processed_today: i64,
    /// Average first-response time, in minutes.
    pub avg_response_time: f64,
    /// Share of AI replies accepted without edits, in percent.
    pub success_rate: f64,
}
