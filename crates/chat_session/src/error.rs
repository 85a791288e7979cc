use std::time::Duration;

use chat_client::ClientError;
use thiserror::Error;

/// Why an exchange ended without a reply.
///
/// Only ever logged; the thread shows the fixed fallback message instead.
#[derive(Debug, Error)]
pub enum ExchangeError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("no response within {0:?}")]
    Timeout(Duration),

    #[error("exchange cancelled")]
    Cancelled,
}
