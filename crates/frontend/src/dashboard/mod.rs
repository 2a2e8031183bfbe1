pub mod api;
pub mod samples;
pub mod state;
pub mod ui;
