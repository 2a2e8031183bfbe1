pub mod badge;
pub mod stat_card;
pub mod textarea;
