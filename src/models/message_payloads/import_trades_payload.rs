use crate::errors::PortfolioResult;
use actix::Message;

/// CSV export from a broker, one trade per row.
#[derive(Debug, Clone)]
pub struct ImportTradesPayload {
    pub csv: String,
}

impl Message for ImportTradesPayload {
    type Result = PortfolioResult<usize>;
}
