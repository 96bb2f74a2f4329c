//! deploy-steps: steps concretos del pipeline de deployment.
pub mod steps;

pub use steps::mocks::{DeployMocksStep, BASE_FEE, GAS_PRICE_LINK, MOCK_COORDINATOR_NAME};
