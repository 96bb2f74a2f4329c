//! Contexto de ejecución entregado a `DeployStep::run`.
//!
//! Todas las colaboraciones llegan como capacidades explícitas: identidad
//! de red, cuentas nombradas, facility de deploy y logger. Ningún step
//! lee configuración ambiente; eso permite sustituir cada capacidad por
//! un doble de test.
use std::collections::HashMap;

use crate::deployments::DeployFacility;
use crate::errors::CoreRunnerError;
use crate::logging::DeployLogger;

/// Nombre convencional de la cuenta que firma los deployments.
pub const DEPLOYER_ACCOUNT: &str = "deployer";

/// Resolución de cuentas nombradas (nombre lógico -> dirección).
#[derive(Debug, Clone, Default)]
pub struct NamedAccounts {
    inner: HashMap<String, String>,
}

impl NamedAccounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &str, address: &str) {
        self.inner.insert(name.to_string(), address.to_string());
    }

    pub fn get(&self, name: &str) -> Result<&str, CoreRunnerError> {
        self.inner
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| CoreRunnerError::MissingAccount(name.to_string()))
    }

    /// Atajo para la cuenta convencional `deployer`.
    pub fn deployer(&self) -> Result<&str, CoreRunnerError> {
        self.get(DEPLOYER_ACCOUNT)
    }
}

/// Contexto mutable de un step dentro de una corrida.
pub struct StepContext<'a> {
    /// Identidad de red de la corrida (inmutable durante la misma).
    pub chain_id: u64,
    pub accounts: &'a NamedAccounts,
    pub deployments: &'a mut dyn DeployFacility,
    pub log: &'a dyn DeployLogger,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_accounts_lookup() {
        let mut accounts = NamedAccounts::new();
        accounts.insert(DEPLOYER_ACCOUNT, "0xabc");
        assert_eq!(accounts.deployer().expect("deployer"), "0xabc");
        assert!(matches!(accounts.get("treasury"),
                         Err(CoreRunnerError::MissingAccount(name)) if name == "treasury"));
    }
}
