pub mod error;
pub mod oracle;
pub mod prompt;
pub mod provider;
pub mod schema;
pub mod types;
pub mod validate;

pub use error::FareError;
pub use oracle::FareOracle;
pub use prompt::{build_prompt, PromptConfig};
pub use provider::GeminiOracle;
pub use schema::fare_schema;
pub use types::{ErrorEnvelope, FareData, FareQuery, FareResult};
pub use validate::validate_fare_data;
