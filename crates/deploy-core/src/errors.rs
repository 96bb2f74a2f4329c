//! Errores específicos del runner (simples por ahora).

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum CoreRunnerError {
    #[error("run already completed")] RunCompleted,
    #[error("missing named account: {0}")] MissingAccount(String),
    #[error("unresolved step dependency: {0}")] UnresolvedDependency(String),
    #[error("duplicate step id: {0}")] DuplicateStepId(String),
    #[error("transaction failed: {0}")] TransactionFailed(String),
    #[error("internal: {0}")] Internal(String),
}
