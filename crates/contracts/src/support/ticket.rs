use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A support ticket as returned by the ticket-listing endpoint.
///
/// `status` stays free text (`open` / `pending` / `solved` / anything else):
/// the badge mapping on the frontend must stay total over arbitrary input,
/// so the contract does not close the set of values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    /// Row key; unique within one fetch result.
    pub id: i64,
    pub subject: String,
    pub status: String,
    pub requester_id: i64,
    /// May be absent in the payload; absent renders as "no tags".
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Success shape of the ticket-listing endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TicketListResponse {
    /// Absent field deserializes to an empty collection rather than an error.
    #[serde(default)]
    pub tickets: Vec<Ticket>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticket_with_all_fields() {
        let json = r#"{
            "id": 7,
            "subject": "Login issue",
            "status": "open",
            "requester_id": 1,
            "tags": ["auth", "urgent"],
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-01T00:00:00Z"
        }"#;
        let ticket: Ticket = serde_json::from_str(json).unwrap();
        assert_eq!(ticket.id, 7);
        assert_eq!(ticket.subject, "Login issue");
        assert_eq!(ticket.status, "open");
        assert_eq!(ticket.tags, vec!["auth", "urgent"]);
    }

    #[test]
    fn test_missing_tags_defaults_to_empty() {
        let json = r#"{
            "id": 7,
            "subject": "Login issue",
            "status": "open",
            "requester_id": 1,
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-01T00:00:00Z"
        }"#;
        let ticket: Ticket = serde_json::from_str(json).unwrap();
        assert!(ticket.tags.is_empty());
    }

    #[test]
    fn test_missing_tickets_field_defaults_to_empty() {
        let response: TicketListResponse = serde_json::from_str("{}").unwrap();
        assert!(response.tickets.is_empty());
    }

    #[test]
    fn test_unknown_status_is_preserved() {
        let json = r#"{
            "id": 1,
            "subject": "x",
            "status": "escalated",
            "requester_id": 2,
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-01T00:00:00Z"
        }"#;
        let ticket: Ticket = serde_json::from_str(json).unwrap();
        assert_eq!(ticket.status, "escalated");
    }
}
