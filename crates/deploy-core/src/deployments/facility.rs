//! Facility de deployment con cache idempotente.
//!
//! Contrato requerido por los steps: si ya existe un registro para el
//! nombre lógico con el mismo fingerprint, la llamada devuelve ese
//! registro sin enviar una nueva transacción. El fingerprint cubre
//! nombre, emisor, argumentos y versión del runner, así que cambiar
//! cualquiera de ellos fuerza un redeploy determinista.
use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;

use super::record::{DeployOptions, DeploymentRecord};
use crate::chain::ChainClient;
use crate::constants::RUNNER_VERSION;
use crate::errors::CoreRunnerError;
use crate::hashing::hash_value;
use crate::logging::DeployLogger;

/// Capacidad de deploy entregada a los steps vía contexto.
#[async_trait]
pub trait DeployFacility: Send {
    /// Despliega (o reutiliza) el contrato bajo `name`. Idempotente según
    /// el cache de registros de la facility.
    async fn deploy(&mut self,
                    name: &str,
                    options: DeployOptions)
                    -> Result<DeploymentRecord, CoreRunnerError>;

    /// Registro existente para `name` en la red activa, si lo hay.
    fn get(&self, name: &str) -> Option<DeploymentRecord>;
}

/// Implementación por defecto: registros en memoria + cliente de cadena.
pub struct Deployments<C: ChainClient> {
    chain: C,
    records: HashMap<String, DeploymentRecord>,
    logger: Arc<dyn DeployLogger>,
}

impl<C: ChainClient> Deployments<C> {
    pub fn new(chain: C, logger: Arc<dyn DeployLogger>) -> Self {
        Self { chain,
               records: HashMap::new(),
               logger }
    }

    /// Acceso al cliente de cadena subyacente (los tests inspeccionan el
    /// contador de transacciones de `InMemoryChain`).
    pub fn chain(&self) -> &C {
        &self.chain
    }

    fn fingerprint(name: &str, options: &DeployOptions) -> String {
        hash_value(&json!({
            "runner_version": RUNNER_VERSION,
            "name": name,
            "from": options.from,
            "args": options.args,
        }))
    }
}

#[async_trait]
impl<C: ChainClient> DeployFacility for Deployments<C> {
    async fn deploy(&mut self,
                    name: &str,
                    options: DeployOptions)
                    -> Result<DeploymentRecord, CoreRunnerError> {
        let fingerprint = Self::fingerprint(name, &options);

        // Cache hit: mismo nombre + mismo fingerprint -> sin transacción nueva.
        if let Some(existing) = self.records.get(name) {
            if existing.fingerprint == fingerprint {
                let mut reused = existing.clone();
                reused.newly_deployed = false;
                if options.log {
                    self.logger
                        .log(&format!("reusing \"{name}\" at {}", reused.address));
                }
                return Ok(reused);
            }
        }

        let deployment = self.chain
                             .deploy_contract(name, &options.from, &options.args)
                             .await?;
        let record = DeploymentRecord { name: name.to_string(),
                                        address: deployment.address,
                                        from: options.from.clone(),
                                        args: options.args.clone(),
                                        tx_hash: Some(deployment.tx_hash),
                                        fingerprint,
                                        newly_deployed: true,
                                        deployed_at: Utc::now() };
        if options.log {
            self.logger
                .log(&format!("deploying \"{name}\" -> {}", record.address));
        }
        self.records.insert(name.to_string(), record.clone());
        Ok(record)
    }

    fn get(&self, name: &str) -> Option<DeploymentRecord> {
        self.records.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::InMemoryChain;
    use crate::logging::MemoryLogger;
    use serde_json::json;

    fn facility(logger: Arc<MemoryLogger>) -> Deployments<InMemoryChain> {
        Deployments::new(InMemoryChain::new(), logger)
    }

    #[tokio::test]
    async fn deploy_then_reuse_sends_one_transaction() {
        let logger = Arc::new(MemoryLogger::new());
        let mut deployments = facility(logger.clone());
        let options = DeployOptions { from: "0xabc".to_string(),
                                      args: vec![json!(1), json!(2)],
                                      log: true };

        let first = deployments.deploy("Mock", options.clone()).await.expect("deploy");
        assert!(first.newly_deployed);
        assert!(first.tx_hash.is_some());

        let second = deployments.deploy("Mock", options).await.expect("reuse");
        assert!(!second.newly_deployed);
        assert_eq!(second.address, first.address);
        assert_eq!(deployments.chain().transaction_count(), 1);

        let lines = logger.lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("deploying \"Mock\""));
        assert!(lines[1].starts_with("reusing \"Mock\""));
    }

    #[tokio::test]
    async fn changed_args_force_redeploy() {
        let logger = Arc::new(MemoryLogger::new());
        let mut deployments = facility(logger);
        let base = DeployOptions { from: "0xabc".to_string(),
                                   args: vec![json!(1)],
                                   log: false };
        let changed = DeployOptions { args: vec![json!(9)], ..base.clone() };

        let first = deployments.deploy("Mock", base).await.expect("deploy");
        let second = deployments.deploy("Mock", changed).await.expect("redeploy");
        assert!(second.newly_deployed);
        assert_ne!(first.fingerprint, second.fingerprint);
        assert_eq!(deployments.chain().transaction_count(), 2);
    }

    #[tokio::test]
    async fn get_resolves_stored_records() {
        let logger = Arc::new(MemoryLogger::new());
        let mut deployments = facility(logger);
        assert!(deployments.get("Mock").is_none());
        let options = DeployOptions { from: "0xabc".to_string(),
                                      args: vec![],
                                      log: false };
        deployments.deploy("Mock", options).await.expect("deploy");
        let stored = deployments.get("Mock").expect("record present");
        assert_eq!(stored.name, "Mock");
    }
}
