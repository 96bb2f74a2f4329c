//! Seam hacia la cadena: envío de transacciones de deployment.
//!
//! El runner trata el envío como una llamada asíncrona opaca que preserva
//! el orden; timeouts o cancelación, si existen, pertenecen al llamador.
//! `InMemoryChain` es la implementación para la red local en memoria:
//! direcciones deterministas derivadas por hash y un contador de
//! transacciones que los tests usan para verificar idempotencia.
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::HashMap;

use crate::errors::CoreRunnerError;
use crate::hashing::hash_value;

/// Resultado de enviar una transacción de deployment de contrato.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractDeployment {
    pub address: String,
    pub tx_hash: String,
}

/// Cliente de cadena: una sola operación, desplegar un contrato.
#[async_trait]
pub trait ChainClient: Send {
    async fn deploy_contract(&mut self,
                             name: &str,
                             from: &str,
                             args: &[Value])
                             -> Result<ContractDeployment, CoreRunnerError>;
}

/// Cadena local en memoria.
///
/// Deriva la dirección del contrato de (from, name, nonce) para que una
/// misma corrida sea reproducible, e incrementa el nonce por emisor como
/// lo haría un nodo real.
#[derive(Debug, Default)]
pub struct InMemoryChain {
    nonces: HashMap<String, u64>,
    transactions: u64,
}

impl InMemoryChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total de transacciones enviadas (hook para tests de idempotencia).
    pub fn transaction_count(&self) -> u64 {
        self.transactions
    }
}

#[async_trait]
impl ChainClient for InMemoryChain {
    async fn deploy_contract(&mut self,
                             name: &str,
                             from: &str,
                             args: &[Value])
                             -> Result<ContractDeployment, CoreRunnerError> {
        let nonce = self.nonces.entry(from.to_string()).or_insert(0);
        let digest = hash_value(&json!({
            "from": from,
            "contract": name,
            "nonce": *nonce,
        }));
        // 20 bytes de dirección = 40 hex del digest.
        let address = format!("0x{}", &digest[..40]);
        let tx_hash = format!("0x{}", hash_value(&json!({
                                          "to": Value::Null,
                                          "from": from,
                                          "nonce": *nonce,
                                          "data": { "contract": name, "args": args },
                                      })));
        *nonce += 1;
        self.transactions += 1;
        Ok(ContractDeployment { address, tx_hash })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn addresses_are_deterministic_per_nonce() {
        let mut a = InMemoryChain::new();
        let mut b = InMemoryChain::new();
        let d1 = a.deploy_contract("Mock", "0xabc", &[]).await.expect("deploy");
        let d2 = b.deploy_contract("Mock", "0xabc", &[]).await.expect("deploy");
        assert_eq!(d1, d2);

        // Mismo emisor, nonce distinto -> dirección distinta.
        let d3 = a.deploy_contract("Mock", "0xabc", &[]).await.expect("deploy");
        assert_ne!(d1.address, d3.address);
        assert_eq!(a.transaction_count(), 2);
    }
}
