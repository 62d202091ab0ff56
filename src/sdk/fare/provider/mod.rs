pub mod gemini;

pub use gemini::{GeminiOracle, DEFAULT_MODEL};
