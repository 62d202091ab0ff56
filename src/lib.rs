pub mod sdk;

pub use sdk::client::{ClientError, FareClient, FareForm};
pub use sdk::config::{relay_url_from_env, RelayConfig};
pub use sdk::fare::{ErrorEnvelope, FareData, FareError, FareOracle, FareQuery, FareResult};
pub use sdk::relay::{router, AppState};
