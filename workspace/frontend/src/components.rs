mod alerts;
mod card;
mod chart;
mod dashboard;
mod layout;
mod prediction;
pub mod toast;
mod weather;

pub use dashboard::Dashboard;
pub use layout::Layout;
