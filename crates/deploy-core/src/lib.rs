//! deploy-core: runner secuencial de steps de deployment (neutral de dominio)
pub mod chain;
pub mod constants;
pub mod context;
pub mod deployments;
pub mod errors;
pub mod event;
pub mod hashing;
pub mod logging;
pub mod runner;
pub mod step;

pub use chain::{ChainClient, ContractDeployment, InMemoryChain};
pub use context::{NamedAccounts, StepContext, DEPLOYER_ACCOUNT};
pub use deployments::{DeployFacility, DeployOptions, DeploymentRecord, Deployments};
pub use errors::CoreRunnerError;
pub use event::{EventLog, InMemoryEventLog, RunEvent, RunEventKind};
pub use logging::{ConsoleLogger, DeployLogger, MemoryLogger};
pub use runner::{RunnerBuilder, StepRunner};
pub use step::DeployStep;
