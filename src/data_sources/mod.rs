pub mod csv_trades;
