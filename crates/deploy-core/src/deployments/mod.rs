pub mod facility;
pub mod record;

pub use facility::{DeployFacility, Deployments};
pub use record::{DeployOptions, DeploymentRecord};
