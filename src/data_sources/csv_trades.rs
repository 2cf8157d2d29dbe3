use crate::{
    errors::{PortfolioError, PortfolioResult},
    models::{
        trade::{MarketType, TradeSide, TradeStatus},
        trade_builder::TradeBuilder,
    },
};
use csv::{ReaderBuilder, Trim};
use serde::Deserialize;

/// One row of a broker trade export.
///
/// ```text
/// symbol,side,quantity,entry_price,exit_price,status,market_type,broker_id
/// EURUSD,buy,1.5,1.1234,1.1289,closed,forex,
/// ```
#[derive(Debug, Deserialize)]
struct CsvTradeRow {
    symbol: String,
    side: String,
    quantity: f64,
    entry_price: f64,
    exit_price: Option<f64>,
    status: Option<String>,
    market_type: String,
    #[serde(default)]
    broker_id: Option<String>,
}

impl CsvTradeRow {
    fn into_builder(self) -> PortfolioResult<TradeBuilder> {
        let status = match self.status.as_deref().filter(|s| !s.is_empty()) {
            Some(raw) => Some(raw.parse::<TradeStatus>()?),
            None => None,
        };

        Ok(TradeBuilder {
            symbol: Some(self.symbol),
            side: Some(self.side.parse::<TradeSide>()?),
            quantity: Some(self.quantity),
            entry_price: Some(self.entry_price),
            exit_price: self.exit_price,
            status,
            market_type: Some(self.market_type.parse::<MarketType>()?),
            broker_id: self.broker_id.filter(|b| !b.is_empty()),
        })
    }
}

/// Parses every row up front; a single bad row rejects the whole file.
pub fn parse_trades(data: &str) -> PortfolioResult<Vec<TradeBuilder>> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(data.as_bytes());

    reader
        .deserialize::<CsvTradeRow>()
        .enumerate()
        .map(|(i, row)| {
            let row = row?;
            row.into_builder().map_err(|e| {
                // Header is line 1.
                PortfolioError::Validation(format!("line {}: {}", i + 2, e))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    const HEADER: &str = "symbol,side,quantity,entry_price,exit_price,status,market_type,broker_id";

    #[test]
    fn parses_open_and_closed_rows() {
        let data = format!(
            "{}\neurusd,buy,2,1.1000,1.1050,closed,forex,\nBTCUSDT,SELL,0.1,45000,,open,crypto,b-1\n",
            HEADER
        );

        let builders = parse_trades(&data).unwrap();
        assert_eq!(builders.len(), 2);

        let first = builders[0].build("x".into(), Utc::now()).unwrap();
        assert_eq!(first.symbol, "EURUSD");
        assert!((first.profit_loss - 0.01).abs() < 1e-9);

        let second = builders[1].build("y".into(), Utc::now()).unwrap();
        assert_eq!(second.side, TradeSide::Sell);
        assert_eq!(second.exit_price, None);
        assert_eq!(second.broker_id.as_deref(), Some("b-1"));
        assert!(second.is_open());
    }

    #[test]
    fn broker_column_is_optional() {
        let data = "symbol,side,quantity,entry_price,exit_price,status,market_type\n\
                    GBPUSD,sell,2,1.2567,1.2534,closed,forex\n";

        let builders = parse_trades(data).unwrap();

        assert_eq!(builders[0].broker_id, None);
    }

    #[test]
    fn bad_enum_reports_the_line() {
        let data = format!("{}\nEURUSD,hold,1,1.1,,open,forex,\n", HEADER);

        let err = parse_trades(&data).unwrap_err();

        assert!(err.to_string().starts_with("line 2:"), "{}", err);
    }

    #[test]
    fn non_numeric_quantity_is_a_csv_error() {
        let data = format!("{}\nEURUSD,buy,lots,1.1,,open,forex,\n", HEADER);

        assert!(matches!(parse_trades(&data), Err(PortfolioError::Csv(_))));
    }

    #[test]
    fn empty_file_yields_nothing() {
        assert!(parse_trades(HEADER).unwrap().is_empty());
    }
}
