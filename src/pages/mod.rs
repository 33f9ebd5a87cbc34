//! Routed pages

mod generation;
mod login;
mod statistics;
mod table;

pub use generation::GenerationPage;
pub use login::LoginPage;
pub use statistics::StatisticsPage;
pub use table::TablePage;
