mod activity_tab;
mod config_tab;
mod dashboard;
mod tickets_tab;
mod upload_tab;

pub use dashboard::DashboardPage;
