pub mod dashboard;
pub mod import_trades;
pub mod report;
