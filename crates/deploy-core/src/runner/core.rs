//! Implementación central del StepRunner.

use std::collections::HashSet;
use uuid::Uuid;

use crate::context::{NamedAccounts, StepContext};
use crate::deployments::DeployFacility;
use crate::errors::CoreRunnerError;
use crate::event::{EventLog, InMemoryEventLog, RunEvent, RunEventKind};
use crate::logging::DeployLogger;
use crate::runner::RunnerBuilder;
use crate::step::DeployStep;

/// Runner secuencial del pipeline de deployment.
///
/// Ejecuta los steps registrados en orden, respetando dependencias
/// declaradas y el filtro de tags de la invocación. Cada decisión queda
/// registrada como evento append-only; el primer error de un step aborta
/// la corrida y se propaga sin modificar.
pub struct StepRunner<L: EventLog> {
    event_log: L,
    steps: Vec<Box<dyn DeployStep>>,
    last_run_id: Option<Uuid>,
}

impl StepRunner<InMemoryEventLog> {
    /// Crea un nuevo builder con log de eventos en memoria.
    #[inline]
    pub fn new() -> RunnerBuilder<InMemoryEventLog> {
        RunnerBuilder::new(InMemoryEventLog::default())
    }
}

impl<L: EventLog> StepRunner<L> {
    /// Crea un builder sobre un log de eventos dado.
    #[inline]
    pub fn builder(event_log: L) -> RunnerBuilder<L> {
        RunnerBuilder::new(event_log)
    }

    pub fn new_with_log(event_log: L, steps: Vec<Box<dyn DeployStep>>) -> Self {
        Self { event_log,
               steps,
               last_run_id: None }
    }

    /// Steps registrados, en orden.
    pub fn step_ids(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.id()).collect()
    }

    /// Ejecuta una corrida completa del pipeline.
    ///
    /// `tag_filter` vacío ejecuta todos los steps; en caso contrario sólo
    /// los steps cuya lista de tags interseca el filtro. Devuelve el
    /// `run_id` de la corrida.
    pub async fn run(&mut self,
                     chain_id: u64,
                     accounts: &NamedAccounts,
                     deployments: &mut dyn DeployFacility,
                     logger: &dyn DeployLogger,
                     tag_filter: &[String])
                     -> Result<Uuid, CoreRunnerError> {
        self.check_unique_ids()?;

        let run_id = Uuid::new_v4();
        self.last_run_id = Some(run_id);
        let _ = self.event_log
                    .append_kind(run_id,
                                 RunEventKind::RunInitialized { chain_id,
                                                                step_count: self.steps.len() });

        // Selección por tags. Los excluidos se registran de inmediato.
        let mut pending: Vec<usize> = Vec::new();
        let mut skipped = 0usize;
        for (idx, step) in self.steps.iter().enumerate() {
            if matches_filter(tag_filter, &step.tags()) {
                pending.push(idx);
            } else {
                skipped += 1;
                let _ = self.event_log
                            .append_kind(run_id,
                                         RunEventKind::StepSkipped { step_index: idx,
                                                                     step_id: step.id().to_string(),
                                                                     reason: "tag filter".to_string() });
            }
        }

        // Barrido por dependencias: en cada pasada se ejecutan los steps
        // cuyas dependencias ya terminaron. Sin progreso con pendientes
        // restantes significa dependencia irresoluble (o ciclo).
        let mut finished: HashSet<String> = HashSet::new();
        let mut executed = 0usize;
        while !pending.is_empty() {
            let mut progressed = false;
            let mut still_pending = Vec::with_capacity(pending.len());
            for idx in pending {
                let ready = self.steps[idx].dependencies()
                                           .iter()
                                           .all(|dep| finished.contains(dep));
                if !ready {
                    still_pending.push(idx);
                    continue;
                }
                self.execute_step(run_id, idx, chain_id, accounts, deployments, logger)
                    .await?;
                finished.insert(self.steps[idx].id().to_string());
                executed += 1;
                progressed = true;
            }
            if !progressed && !still_pending.is_empty() {
                let id = self.steps[still_pending[0]].id().to_string();
                return Err(CoreRunnerError::UnresolvedDependency(id));
            }
            pending = still_pending;
        }

        let _ = self.event_log
                    .append_kind(run_id, RunEventKind::RunCompleted { executed, skipped });
        Ok(run_id)
    }

    async fn execute_step(&mut self,
                          run_id: Uuid,
                          idx: usize,
                          chain_id: u64,
                          accounts: &NamedAccounts,
                          deployments: &mut dyn DeployFacility,
                          logger: &dyn DeployLogger)
                          -> Result<(), CoreRunnerError> {
        let step = &self.steps[idx];
        let _ = self.event_log
                    .append_kind(run_id,
                                 RunEventKind::StepStarted { step_index: idx,
                                                             step_id: step.id().to_string() });

        let mut ctx = StepContext { chain_id,
                                    accounts,
                                    deployments,
                                    log: logger };
        match step.run(&mut ctx).await {
            Ok(()) => {
                let _ = self.event_log
                            .append_kind(run_id,
                                         RunEventKind::StepFinished { step_index: idx,
                                                                      step_id: step.id().to_string() });
                Ok(())
            }
            Err(error) => {
                let _ = self.event_log
                            .append_kind(run_id,
                                         RunEventKind::StepFailed { step_index: idx,
                                                                    step_id: step.id().to_string(),
                                                                    error: error.clone() });
                Err(error)
            }
        }
    }

    fn check_unique_ids(&self) -> Result<(), CoreRunnerError> {
        let mut seen = HashSet::new();
        for step in &self.steps {
            if !seen.insert(step.id()) {
                return Err(CoreRunnerError::DuplicateStepId(step.id().to_string()));
            }
        }
        Ok(())
    }

    /// Lista eventos de la última corrida.
    pub fn events(&self) -> Option<Vec<RunEvent>> {
        self.last_run_id.map(|rid| self.event_log.list(rid))
    }

    /// Variante compacta de eventos de la última corrida.
    pub fn event_variants(&self) -> Option<Vec<&'static str>> {
        self.events().map(|events| {
                         events.iter()
                               .map(|e| match e.kind {
                                   RunEventKind::RunInitialized { .. } => "I",
                                   RunEventKind::StepStarted { .. } => "S",
                                   RunEventKind::StepSkipped { .. } => "K",
                                   RunEventKind::StepFinished { .. } => "F",
                                   RunEventKind::StepFailed { .. } => "X",
                                   RunEventKind::RunCompleted { .. } => "C",
                               })
                               .collect()
                     })
    }
}

/// Un step entra a la corrida si el filtro está vacío o interseca sus tags.
fn matches_filter(filter: &[String], tags: &[String]) -> bool {
    filter.is_empty() || tags.iter().any(|t| filter.contains(t))
}
