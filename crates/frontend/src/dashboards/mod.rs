pub mod d100_admin_dashboard;
pub mod d101_client_home;

pub use d100_admin_dashboard::ui::AdminDashboard;
pub use d101_client_home::ui::ClientHome;
