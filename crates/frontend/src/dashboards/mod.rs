pub mod d400_store_overview;

pub use d400_store_overview::ui::StoreOverviewDashboard;
