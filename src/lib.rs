//! deployflow: wiring del pipeline de deployment (config + demo).
pub mod config;

pub use config::{AppConfig, CONFIG, DEFAULT_DEPLOYER};
