//! Direcciones de cuenta/contrato.
//!
//! Representación validada: hex con prefijo `0x` y 40 dígitos. Se
//! normaliza a minúsculas al construir para que la comparación y el
//! hashing de payloads sean estables.
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// Dirección validada (formato `0x` + 40 hex).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    pub fn new(raw: &str) -> Result<Self, DomainError> {
        let hex = raw.strip_prefix("0x")
                     .ok_or_else(|| DomainError::InvalidAddress(raw.to_string()))?;
        if hex.len() != 40 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(DomainError::InvalidAddress(raw.to_string()));
        }
        Ok(Self(format!("0x{}", hex.to_ascii_lowercase())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_and_normalizes_valid_addresses() {
        let a = Address::new("0xF39FD6E51AAD88F6F4CE6AB8827279CFFFB92266").unwrap();
        assert_eq!(a.as_str(), "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266");
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(Address::new("f39fd6e51aad88f6f4ce6ab8827279cfffb92266").is_err()); // sin 0x
        assert!(Address::new("0x1234").is_err()); // corta
        assert!(Address::new("0xzz9fd6e51aad88f6f4ce6ab8827279cfffb92266").is_err());
    }
}
