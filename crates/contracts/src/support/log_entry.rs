use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One line of the activity feed.
///
/// `level` is one of `INFO` / `SUCCESS` / `WARNING` / `ERROR`, kept as free
/// text for the same reason as `Ticket::status`. Populated with fixed sample
/// values in this layer; externally supplied in practice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: String,
    pub message: String,
    /// Ticket this line relates to, when there is one.
    #[serde(default)]
    pub ticket_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticket_id_is_optional() {
        let json = r#"{
            "timestamp": "2024-01-01T09:30:00Z",
            "level": "INFO",
            "message": "Batch started"
        }"#;
        let entry: LogEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.ticket_id, None);
        assert_eq!(entry.level, "INFO");
    }
}
