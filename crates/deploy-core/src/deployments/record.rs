//! Registro de deployment y opciones de la llamada `deploy`.
//!
//! Un `DeploymentRecord` es la unidad persistida por la facility: mapea un
//! nombre lógico de contrato a su dirección/artefacto en la red activa.
//! El `fingerprint` (hash canónico de nombre + emisor + args + versión del
//! runner) es la identidad que habilita la reutilización idempotente.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Opciones de una llamada de deploy (forwarded por el step).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployOptions {
    /// Dirección emisora de la transacción.
    pub from: String,
    /// Argumentos del constructor, en orden posicional.
    pub args: Vec<Value>,
    /// Si la facility debe reportar el resultado por el logger.
    pub log: bool,
}

/// Registro de un contrato desplegado (o reutilizado) en la red activa.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentRecord {
    /// Nombre lógico bajo el cual steps posteriores resuelven el contrato.
    pub name: String,
    pub address: String,
    pub from: String,
    pub args: Vec<Value>,
    /// Hash de la transacción que lo creó. `None` nunca ocurre hoy, pero el
    /// registro admite artefactos importados sin transacción propia.
    pub tx_hash: Option<String>,
    /// Identidad canónica del deployment (ver módulo `hashing`).
    pub fingerprint: String,
    /// `true` sólo en la llamada que efectivamente envió la transacción.
    pub newly_deployed: bool,
    pub deployed_at: DateTime<Utc>,
}
