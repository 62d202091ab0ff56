use super::error::FareError;
use super::types::FareQuery;
use async_trait::async_trait;
use serde_json::Value;

/// The external estimator behind the relay. Implementations return the
/// model's raw JSON; the relay re-validates it before anything is forwarded,
/// so an oracle is treated as an untrusted input source.
#[async_trait]
pub trait FareOracle: Send + Sync {
    /// Produces a fare estimate for one query.
    async fn estimate(&self, query: &FareQuery) -> Result<Value, FareError>;
}
