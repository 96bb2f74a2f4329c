//! Tipos de evento de una corrida del pipeline y estructura `RunEvent`.
//!
//! Rol en la corrida:
//! - Cada ejecución del `StepRunner` emite eventos a un `EventLog`
//!   append-only.
//! - Los eventos son el rastro observable del orden de ejecución, los
//!   skips por filtro de tags y la causa de un aborto.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::CoreRunnerError;

/// Tipos de evento soportados por el runner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum RunEventKind {
    /// Emisión inicial de una corrida: fija la red activa y la cantidad de
    /// steps registrados. Invariante: debe ser el primer evento de un `run_id`.
    RunInitialized { chain_id: u64, step_count: usize },
    /// Un step comenzó su ejecución. No implica éxito.
    StepStarted { step_index: usize, step_id: String },
    /// Un step quedó fuera de la corrida (filtro de tags).
    StepSkipped {
        step_index: usize,
        step_id: String,
        reason: String,
    },
    /// Un step terminó correctamente.
    StepFinished { step_index: usize, step_id: String },
    /// Un step terminó con error terminal. La corrida no continúa
    /// (stop-on-failure).
    StepFailed {
        step_index: usize,
        step_id: String,
        error: CoreRunnerError,
    },
    /// Evento de cierre con el resumen de la corrida.
    RunCompleted { executed: usize, skipped: usize },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunEvent {
    pub seq: u64, // asignado por EventLog in-memory (orden append)
    pub run_id: Uuid,
    pub kind: RunEventKind,
    pub ts: DateTime<Utc>, // metadato (no participa de ninguna identidad)
}
