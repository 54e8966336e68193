pub mod chart_panel;
pub mod dashboard;
pub mod tiles;

pub use dashboard::OverviewDashboard;
