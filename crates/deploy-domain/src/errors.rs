// errors.rs
use thiserror::Error;

/// Error de dominio para tipos de red/cadena.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum DomainError {
    #[error("Monto inválido: {0}")]
    InvalidAmount(String),

    #[error("Dirección inválida: {0}")]
    InvalidAddress(String),

    #[error("Red desconocida: chain id {0}")]
    UnknownNetwork(u64),
}
