//! Unidades monetarias de la cadena.
//!
//! `Wei` es la unidad mínima (punto fijo de 18 decimales respecto de
//! ether). Los montos de configuración del pipeline se expresan en wei y
//! se serializan como enteros decimales en JSON para mantener el payload
//! canónico estable.
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// Cantidad en wei (unidad mínima de la cadena).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Wei(pub u128);

impl Wei {
    pub fn as_u128(&self) -> u128 {
        self.0
    }
}

impl fmt::Display for Wei {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

const ETHER_DECIMALS: u32 = 18;

/// Convierte un monto decimal en ether (ej. "0.25") a wei.
///
/// Acepta hasta 18 dígitos fraccionales; más precisión que la unidad
/// mínima es un error (no se trunca en silencio).
pub fn parse_ether(amount: &str) -> Result<Wei, DomainError> {
    let trimmed = amount.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidAmount(amount.to_string()));
    }
    let (int_part, frac_part) = match trimmed.split_once('.') {
        Some((i, f)) => (i, f),
        None => (trimmed, ""),
    };
    if int_part.is_empty() && frac_part.is_empty() {
        return Err(DomainError::InvalidAmount(amount.to_string()));
    }
    if frac_part.len() as u32 > ETHER_DECIMALS {
        return Err(DomainError::InvalidAmount(amount.to_string()));
    }
    let digits_ok = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    if !digits_ok(int_part) || !digits_ok(frac_part) {
        return Err(DomainError::InvalidAmount(amount.to_string()));
    }

    let int_value: u128 = if int_part.is_empty() {
        0
    } else {
        int_part.parse()
                .map_err(|_| DomainError::InvalidAmount(amount.to_string()))?
    };
    // Rellenar la fracción a 18 dígitos para obtener wei exactos.
    let mut frac = frac_part.to_string();
    while (frac.len() as u32) < ETHER_DECIMALS {
        frac.push('0');
    }
    let frac_value: u128 = frac.parse()
                               .map_err(|_| DomainError::InvalidAmount(amount.to_string()))?;

    let scale = 10u128.pow(ETHER_DECIMALS);
    let wei = int_value.checked_mul(scale)
                       .and_then(|v| v.checked_add(frac_value))
                       .ok_or_else(|| DomainError::InvalidAmount(amount.to_string()))?;
    Ok(Wei(wei))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_ether_quarter() {
        // 0.25 ether = 250000000000000000 wei (premium del mock coordinator)
        assert_eq!(parse_ether("0.25").unwrap(), Wei(250_000_000_000_000_000));
    }

    #[test]
    fn parse_ether_integers_and_fractions() {
        assert_eq!(parse_ether("1").unwrap(), Wei(1_000_000_000_000_000_000));
        assert_eq!(parse_ether("0").unwrap(), Wei(0));
        assert_eq!(parse_ether(".5").unwrap(), Wei(500_000_000_000_000_000));
        assert_eq!(parse_ether("2.000000000000000001").unwrap(),
                   Wei(2_000_000_000_000_000_001));
    }

    #[test]
    fn parse_ether_rejects_malformed() {
        assert!(parse_ether("").is_err());
        assert!(parse_ether(".").is_err());
        assert!(parse_ether("1,5").is_err());
        assert!(parse_ether("0.1234567890123456789").is_err()); // 19 decimales
        assert!(parse_ether("abc").is_err());
    }
}
