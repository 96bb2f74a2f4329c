pub mod store;
pub mod types;

pub use store::{EventLog, InMemoryEventLog};
pub use types::{RunEvent, RunEventKind};
