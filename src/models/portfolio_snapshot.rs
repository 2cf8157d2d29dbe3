use crate::{
    analytics::{
        distributions::{
            market_type_counts, monthly_profit_loss, win_loss_counts, MarketTypeCounts, MonthKey,
            WinLossCounts,
        },
        performance_metrics::PerformanceMetrics,
        portfolio_stats::PortfolioStats,
        series::{cumulative_profit_loss, recent_trades, PlPoint},
    },
    models::{broker::Broker, trade::Trade},
};
use indexmap::IndexMap;
use serde::Serialize;

/// Read-only copy of the store state handed to views and subscribers.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PortfolioSnapshot {
    pub trades: Vec<Trade>,
    pub brokers: Vec<Broker>,
    pub stats: PortfolioStats,
    pub loading: bool,
}

impl PortfolioSnapshot {
    pub fn performance(&self) -> PerformanceMetrics {
        PerformanceMetrics::from_trades(&self.trades)
    }

    pub fn cumulative_profit_loss(&self) -> Vec<PlPoint> {
        cumulative_profit_loss(&self.trades)
    }

    pub fn win_loss(&self) -> WinLossCounts {
        win_loss_counts(&self.trades)
    }

    pub fn market_types(&self) -> MarketTypeCounts {
        market_type_counts(&self.trades)
    }

    pub fn monthly_profit_loss(&self) -> IndexMap<MonthKey, f64> {
        monthly_profit_loss(&self.trades)
    }

    pub fn recent_trades(&self, n: usize) -> &[Trade] {
        recent_trades(&self.trades, n)
    }
}
