mod dashboard;

pub use dashboard::StoreOverviewDashboard;
