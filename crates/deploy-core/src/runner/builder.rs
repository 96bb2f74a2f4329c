//! Builder para `StepRunner`.
//!
//! Acumula steps en orden de registro sobre un `EventLog` dado. A
//! diferencia del registro implícito por convención de archivos, el
//! pipeline queda declarado como un valor explícito que el llamador
//! construye y posee.
use crate::event::EventLog;
use crate::runner::StepRunner;
use crate::step::DeployStep;

pub struct RunnerBuilder<L: EventLog> {
    /// Log de eventos que usará el runner.
    pub event_log: L,
    steps: Vec<Box<dyn DeployStep>>,
}

impl<L: EventLog> RunnerBuilder<L> {
    pub fn new(event_log: L) -> Self {
        Self { event_log, steps: Vec::new() }
    }

    /// Registra un step al final del pipeline.
    #[inline]
    pub fn add_step<S>(mut self, step: S) -> Self
        where S: DeployStep + 'static
    {
        self.steps.push(Box::new(step));
        self
    }

    /// Construye el `StepRunner` final con los steps registrados.
    #[inline]
    pub fn build(self) -> StepRunner<L> {
        StepRunner::new_with_log(self.event_log, self.steps)
    }
}
