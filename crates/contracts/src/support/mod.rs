pub mod log_entry;
pub mod stats;
pub mod ticket;

pub use log_entry::LogEntry;
pub use stats::Stats;
pub use ticket::{Ticket, TicketListResponse};
