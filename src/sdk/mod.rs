pub mod client;
pub mod config;
pub mod fare;
pub mod relay;
pub mod util;
