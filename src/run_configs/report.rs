use crate::{
    models::portfolio_snapshot::PortfolioSnapshot,
    utils::{
        constants::RECENT_TRADES_LIMIT,
        formatters::{format_currency, format_date, format_percentage},
    },
};
use std::fmt::{Display, Formatter};

pub fn print_dashboard(snapshot: &PortfolioSnapshot) {
    println!("{}", DashboardReport(snapshot));
}

pub fn render_dashboard(snapshot: &PortfolioSnapshot) -> String {
    DashboardReport(snapshot).to_string()
}

/// Plain text version of the dashboard and analytics pages.
pub struct DashboardReport<'a>(pub &'a PortfolioSnapshot);

impl Display for DashboardReport<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let snapshot = self.0;
        let stats = &snapshot.stats;
        let perf = snapshot.performance();

        writeln!(f, "== Portfolio ==")?;
        writeln!(f, "Total P&L      {}", format_currency(stats.total_profit_loss))?;
        writeln!(f, "Win Rate       {}", format_percentage(stats.win_rate))?;
        writeln!(f, "Total Trades   {}", stats.total_trades)?;
        writeln!(f, "Open Trades    {}", stats.open_trades)?;
        writeln!(f, "Invested       {}", format_currency(stats.total_invested))?;

        writeln!(f, "\n== Performance ==")?;
        writeln!(f, "Profit Factor  {:.2}", perf.profit_factor)?;
        writeln!(f, "ROI            {}", format_percentage(perf.roi))?;
        writeln!(f, "Average Win    {}", format_currency(perf.average_win))?;
        writeln!(f, "Average Loss   {}", format_currency(perf.average_loss))?;
        writeln!(f, "Largest Win    {}", format_currency(perf.largest_win))?;
        writeln!(f, "Largest Loss   {}", format_currency(perf.largest_loss))?;

        let win_loss = snapshot.win_loss();
        let markets = snapshot.market_types();
        writeln!(
            f,
            "Wins/Losses    {}/{}   Forex/Crypto {}/{}",
            win_loss.winning, win_loss.losing, markets.forex, markets.crypto
        )?;

        let monthly = snapshot.monthly_profit_loss();
        if !monthly.is_empty() {
            writeln!(f, "\n== Monthly P&L ==")?;
            for (month, pl) in &monthly {
                writeln!(f, "{:<14} {}", month.label(), format_currency(*pl))?;
            }
        }

        writeln!(f, "\n== Recent Trades ==")?;
        let recent = snapshot.recent_trades(RECENT_TRADES_LIMIT);
        if recent.is_empty() {
            writeln!(f, "No trades yet")?;
        }
        for trade in recent {
            writeln!(
                f,
                "{:<10} {:<4} {:<6} {:<6} {:>14}  {}",
                trade.symbol,
                trade.side.to_string().to_uppercase(),
                trade.market_type.to_string().to_uppercase(),
                trade.status.to_string().to_uppercase(),
                format_currency(trade.profit_loss),
                format_date(&trade.created_at)
            )?;
        }

        writeln!(f, "\n== Brokers ==")?;
        for broker in &snapshot.brokers {
            writeln!(
                f,
                "{:<20} {:<8} connected {}",
                broker.name,
                if broker.is_active { "Active" } else { "Inactive" },
                format_date(&broker.created_at)
            )?;
        }

        Ok(())
    }
}
