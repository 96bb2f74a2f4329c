//! deploy-domain: tipos de dominio de red/cadena para el pipeline de deploy.
pub mod address;
pub mod errors;
pub mod network;
pub mod units;

pub use address::Address;
pub use errors::DomainError;
pub use network::{is_development, network_name, NetworkDescriptor, LOCAL_CHAIN_ID, NETWORK_REGISTRY};
pub use units::{parse_ether, Wei};
