//! Registro estático de redes y clasificación local/real.
//!
//! La identidad de red es un `chain_id` entero, resuelto una sola vez por
//! corrida e inyectado de forma explícita en cada step (nunca leído de
//! estado global mutable). Este módulo sólo provee la tabla de consulta y
//! la constante reservada para la cadena local en memoria.
use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::BTreeMap;

/// Chain id reservado para la red local/efímera (nodo in-memory de
/// desarrollo). Todo otro chain id se trata como red real.
pub const LOCAL_CHAIN_ID: u64 = 31337;

/// Descriptor inmutable de una red conocida.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkDescriptor {
    pub chain_id: u64,
    /// Nombre legible usado en logs y reportes.
    pub name: &'static str,
}

/// Tabla estática chain_id -> descriptor. Evaluada una sola vez.
pub static NETWORK_REGISTRY: Lazy<BTreeMap<u64, NetworkDescriptor>> = Lazy::new(|| {
    let mut m = BTreeMap::new();
    for desc in [NetworkDescriptor { chain_id: LOCAL_CHAIN_ID, name: "localhost" },
                 NetworkDescriptor { chain_id: 1, name: "mainnet" },
                 NetworkDescriptor { chain_id: 11155111, name: "sepolia" },
                 NetworkDescriptor { chain_id: 137, name: "polygon" }] {
        m.insert(desc.chain_id, desc);
    }
    m
});

/// Clasifica una red como local/efímera (true) o real (false).
pub fn is_development(chain_id: u64) -> bool {
    chain_id == LOCAL_CHAIN_ID
}

/// Nombre legible de la red; para ids fuera del registro devuelve un
/// nombre estable derivado del chain id.
pub fn network_name(chain_id: u64) -> String {
    match NETWORK_REGISTRY.get(&chain_id) {
        Some(desc) => desc.name.to_string(),
        None => format!("chain-{chain_id}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_chain_is_development() {
        assert!(is_development(LOCAL_CHAIN_ID));
        assert!(!is_development(1));
        assert!(!is_development(11155111));
    }

    #[test]
    fn registry_resolves_known_networks() {
        assert_eq!(network_name(1), "mainnet");
        assert_eq!(network_name(31337), "localhost");
        assert_eq!(network_name(99999), "chain-99999");
    }
}
